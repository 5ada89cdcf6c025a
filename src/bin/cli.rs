// src/bin/cli.rs
use anitrakt_db::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if !cli::run()? {
        std::process::exit(1);
    }
    Ok(())
}
