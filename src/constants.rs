// spinner shown after an in-flight operation label
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
pub const SPINNER_RATE_MS: u128 = 50;

// config
pub const CONFIG_DIR_NAME: &str = "git-item-status";
pub const TRANSLATIONS_FILE_NAME: &str = "translations.json";
