// Fixed settings for an entry session. The binary always runs with
// `Config::default()`; tests point `poems_dir` somewhere temporary.

use std::path::PathBuf;

pub const POEMS_DIR: &str = "static/poems";
pub const DEFAULT_CATEGORY: &str = "Poetry";
pub const DEFAULT_LOCATION: &str = "Brooklyn, NY";
pub const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the `poem-<id>.json` files are written to.
    pub poems_dir: PathBuf,
    pub default_category: String,
    pub default_location: String,
    /// Number of characters shown in the content preview.
    pub preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            poems_dir: PathBuf::from(POEMS_DIR),
            default_category: DEFAULT_CATEGORY.into(),
            default_location: DEFAULT_LOCATION.into(),
            preview_chars: PREVIEW_CHARS,
        }
    }
}

impl Config {
    /// Same defaults, different output directory.
    pub fn with_poems_dir(poems_dir: impl Into<PathBuf>) -> Self {
        Config {
            poems_dir: poems_dir.into(),
            ..Config::default()
        }
    }
}
