//! Version information for the demo binaries

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (set at compile time)
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

/// Get full version string with optional build information
pub fn full_version() -> String {
    match GIT_COMMIT {
        Some(commit) => format!("{VERSION} ({})", short_commit(commit)),
        None => VERSION.to_string(),
    }
}

/// First 8 characters of a commit id
fn short_commit(commit: &str) -> String {
    commit.chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_version_starts_with_version() {
        assert!(full_version().starts_with(VERSION));
    }

    #[test]
    fn test_short_commit() {
        assert_eq!(short_commit("0123456789abcdef"), "01234567");
        assert_eq!(short_commit("abc"), "abc");
        assert_eq!(short_commit("ééééééééé"), "éééééééé");
    }
}
