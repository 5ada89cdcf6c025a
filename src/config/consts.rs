// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://anitrakt.huere.net/db/db_index_{kind}.php";
pub const KIND_PLACEHOLDER: &str = "{kind}";
pub const TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("anitrakt_db/", env!("CARGO_PKG_VERSION"));

// Data files
pub const DEFAULT_DATA_DIR: &str = "db";
pub const IGNORE_PREFIX: &str = "ignore_";
pub const OVERWRITE_PREFIX: &str = "overwrite_";

// Side outputs
pub const DEFAULT_SNAPSHOT_DIR: &str = ".";
pub const TIMESTAMP_FILE: &str = "updated.txt";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const LOG_FILE: &str = ".store/debug.log";
