use std::path::PathBuf;

pub const CONFIG_PATH_ENV: &str = "USERDIR_CONFIG";

pub fn get_config_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".config").join("userdir")
}

/// `$USERDIR_CONFIG` if set, otherwise `~/.config/userdir/config.toml`.
pub fn get_config_path() -> PathBuf {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => get_config_dir().join("config.toml"),
    }
}

pub fn get_cache_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".cache").join("userdir")
}

pub fn get_log_dir() -> PathBuf {
    get_cache_dir().join("log")
}
