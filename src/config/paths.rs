//! Filesystem locations used by the launcher.

use std::path::PathBuf;

/// Directory name under the platform config dir.
pub const APP_DIR: &str = "ufd-launcher";

/// Default location of the user config file.
pub fn config_file() -> PathBuf {
    config_base(dirs::config_dir(), dirs::home_dir())
        .join(APP_DIR)
        .join("config.toml")
}

/// Platform config dir, else `$HOME/.config`, else `.config` in the
/// working directory.
fn config_base(config_dir: Option<PathBuf>, home_dir: Option<PathBuf>) -> PathBuf {
    config_dir
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_lives_under_app_dir() {
        let path = config_file();
        assert!(path.ends_with("ufd-launcher/config.toml"));
    }

    #[test]
    fn falls_back_to_home_then_relative_dir() {
        assert_eq!(
            config_base(Some(PathBuf::from("/etc/xdg")), Some(PathBuf::from("/home/me"))),
            PathBuf::from("/etc/xdg")
        );
        assert_eq!(
            config_base(None, Some(PathBuf::from("/home/me"))),
            PathBuf::from("/home/me/.config")
        );

        let last_resort = config_base(None, None);
        assert_eq!(last_resort, PathBuf::from(".config"));
        assert!(!last_resort.to_string_lossy().contains('~'));
    }
}
