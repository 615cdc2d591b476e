//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is reachable under `/host`, which
//! Zellij maps to the directory the session was started from (usually the
//! user's home).

use std::path::PathBuf;

/// Prefix under which the sandbox exposes the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Returns the plugin's data directory, `/host/.local/share/zellij/staffboard`.
///
/// The span log lives here.
///
/// ```
/// use staffboard::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/staffboard"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("staffboard")
}

/// Rewrites a leading `~` to the sandbox's host root.
///
/// ```
/// use staffboard::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/mine.toml"), "/host/themes/mine.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_leading_home_tilde_expands() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/a"), "/host/a");
        assert_eq!(expand_tilde("~bob/a"), "~bob/a");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }

    #[test]
    fn data_dir_is_under_host() {
        assert!(get_data_dir().starts_with(HOST_ROOT));
        assert!(get_data_dir().ends_with("staffboard"));
    }
}
