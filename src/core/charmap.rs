// src/core/charmap.rs
// Transliteration table applied by `slug::slugify` after lower-casing.
// Anything not listed here and not alphanumeric ends up as a dash.

use std::collections::HashMap;
use std::sync::OnceLock;

#[rustfmt::skip]
const CHAR_MAP: &[(char, &str)] = &[
    // Latin-1
    ('à', "a"), ('á', "a"), ('â', "a"), ('ã', "a"), ('ä', "a"), ('å', "a"), ('æ', "ae"),
    ('ç', "c"), ('è', "e"), ('é', "e"), ('ê', "e"), ('ë', "e"), ('ì', "i"), ('í', "i"),
    ('î', "i"), ('ï', "i"), ('ð', "d"), ('ñ', "n"), ('ò', "o"), ('ó', "o"), ('ô', "o"),
    ('õ', "o"), ('ö', "o"), ('ø', "o"), ('ù', "u"), ('ú', "u"), ('û', "u"), ('ü', "u"),
    ('ý', "y"), ('ÿ', "y"), ('þ', "th"), ('ß', "ss"), ('ª', "a"), ('º', "o"),
    ('¹', "1"), ('²', "2"), ('³', "3"), ('½', "1-2"), ('¼', "1-4"), ('¾', "3-4"),
    ('×', "x"),

    // Latin Extended-A
    ('ā', "a"), ('ă', "a"), ('ą', "a"), ('ć', "c"), ('ĉ', "c"), ('ċ', "c"), ('č', "c"),
    ('ď', "d"), ('đ', "d"), ('ē', "e"), ('ĕ', "e"), ('ė', "e"), ('ę', "e"), ('ě', "e"),
    ('ĝ', "g"), ('ğ', "g"), ('ġ', "g"), ('ģ', "g"), ('ĥ', "h"), ('ħ', "h"), ('ĩ', "i"),
    ('ī', "i"), ('ĭ', "i"), ('į', "i"), ('ı', "i"), ('ĳ', "ij"), ('ĵ', "j"), ('ķ', "k"),
    ('ĸ', "k"), ('ĺ', "l"), ('ļ', "l"), ('ľ', "l"), ('ŀ', "l"), ('ł', "l"), ('ń', "n"),
    ('ņ', "n"), ('ň', "n"), ('ŉ', "n"), ('ŋ', "n"), ('ō', "o"), ('ŏ', "o"), ('ő', "o"),
    ('œ', "oe"), ('ŕ', "r"), ('ŗ', "r"), ('ř', "r"), ('ś', "s"), ('ŝ', "s"), ('ş', "s"),
    ('š', "s"), ('ţ', "t"), ('ť', "t"), ('ŧ', "t"), ('ũ', "u"), ('ū', "u"), ('ŭ', "u"),
    ('ů', "u"), ('ű', "u"), ('ų', "u"), ('ŵ', "w"), ('ŷ', "y"), ('ź', "z"), ('ż', "z"),
    ('ž', "z"), ('ſ', "s"),

    // Latin Extended-B (Romanian, pinyin tones, Vietnamese horns)
    ('ƒ', "f"), ('ơ', "o"), ('ư', "u"), ('ǎ', "a"), ('ǐ', "i"), ('ǒ', "o"), ('ǔ', "u"),
    ('ǖ', "u"), ('ǘ', "u"), ('ǚ', "u"), ('ǜ', "u"), ('ș', "s"), ('ț', "t"),

    // Vietnamese
    ('ạ', "a"), ('ả', "a"), ('ấ', "a"), ('ầ', "a"), ('ẩ', "a"), ('ẫ', "a"), ('ậ', "a"),
    ('ắ', "a"), ('ằ', "a"), ('ẳ', "a"), ('ẵ', "a"), ('ặ', "a"), ('ẹ', "e"), ('ẻ', "e"),
    ('ẽ', "e"), ('ế', "e"), ('ề', "e"), ('ể', "e"), ('ễ', "e"), ('ệ', "e"), ('ỉ', "i"),
    ('ị', "i"), ('ọ', "o"), ('ỏ', "o"), ('ố', "o"), ('ồ', "o"), ('ổ', "o"), ('ỗ', "o"),
    ('ộ', "o"), ('ớ', "o"), ('ờ', "o"), ('ở', "o"), ('ỡ', "o"), ('ợ', "o"), ('ụ', "u"),
    ('ủ', "u"), ('ứ', "u"), ('ừ', "u"), ('ử', "u"), ('ữ', "u"), ('ự', "u"), ('ỳ', "y"),
    ('ỵ', "y"), ('ỷ', "y"), ('ỹ', "y"),

    // Greek
    ('α', "a"), ('β', "b"), ('γ', "g"), ('δ', "d"), ('ε', "e"), ('ζ', "z"), ('η', "h"),
    ('θ', "8"), ('ι', "i"), ('κ', "k"), ('λ', "l"), ('μ', "m"), ('ν', "n"), ('ξ', "3"),
    ('ο', "o"), ('π', "p"), ('ρ', "r"), ('σ', "s"), ('ς', "s"), ('τ', "t"), ('υ', "y"),
    ('φ', "f"), ('χ', "x"), ('ψ', "ps"), ('ω', "w"), ('ά', "a"), ('έ', "e"), ('ί', "i"),
    ('ό', "o"), ('ύ', "y"), ('ή', "h"), ('ώ', "w"), ('ϊ', "i"), ('ΐ', "i"), ('ϋ', "y"),
    ('ΰ', "y"),

    // Cyrillic (Russian, Ukrainian)
    ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"), ('е', "e"), ('ё', "yo"),
    ('ж', "zh"), ('з', "z"), ('и', "i"), ('й', "j"), ('к', "k"), ('л', "l"), ('м', "m"),
    ('н', "n"), ('о', "o"), ('п', "p"), ('р', "r"), ('с', "s"), ('т', "t"), ('у', "u"),
    ('ф', "f"), ('х', "h"), ('ц', "c"), ('ч', "ch"), ('ш', "sh"), ('щ', "sh"), ('ъ', "u"),
    ('ы', "y"), ('ь', ""), ('э', "e"), ('ю', "yu"), ('я', "ya"), ('є', "ye"), ('і', "i"),
    ('ї', "yi"), ('ґ', "g"),

    // Combining marks left over from lower-casing (e.g. 'İ' -> "i\u{307}")
    ('\u{300}', ""), ('\u{301}', ""), ('\u{302}', ""), ('\u{303}', ""), ('\u{304}', ""),
    ('\u{306}', ""), ('\u{307}', ""), ('\u{308}', ""), ('\u{30A}', ""), ('\u{30B}', ""),
    ('\u{30C}', ""), ('\u{327}', ""), ('\u{328}', ""),
];

fn table() -> &'static HashMap<char, &'static str> {
    static TABLE: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| CHAR_MAP.iter().copied().collect())
}

/// ASCII replacement for `c`, if the table has one.
pub fn lookup(c: char) -> Option<&'static str> {
    if c.is_ascii() {
        return None;
    }
    table().get(&c).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacements_are_plain_ascii() {
        for (c, r) in CHAR_MAP {
            assert!(r.is_ascii(), "{c:?} maps to non-ascii {r:?}");
        }
    }

    #[test]
    fn no_duplicate_keys() {
        assert_eq!(table().len(), CHAR_MAP.len());
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(lookup('a'), None);
        assert_eq!(lookup('-'), None);
        assert_eq!(lookup('ō'), Some("o"));
    }
}
