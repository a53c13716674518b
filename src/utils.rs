//! Utility functions for path construction.

use std::path::PathBuf;

/// Joins a directory path and a file or subdirectory name into a
/// platform-independent path string.
///
/// # Panics
///
/// Panics if the resulting path contains invalid UTF-8 characters.
///
/// # Examples
///
/// ```
/// let path = get_path("/var/data", "registrations");
/// assert_eq!(path, "/var/data/registrations");
/// ```
pub fn get_path(dir_path: &str, subdir_path: &str) -> String {
    let path_buf: PathBuf = [dir_path, subdir_path].iter().collect();
    path_buf.to_str().unwrap().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_path_simple() {
        let path = get_path("/var/data", "registrations");
        #[cfg(unix)]
        assert_eq!(path, "/var/data/registrations");
        #[cfg(windows)]
        assert_eq!(path, "\\var\\data\\registrations");
    }

    #[test]
    fn test_get_path_relative() {
        let path = get_path(".", "registrations");
        #[cfg(unix)]
        assert_eq!(path, "./registrations");
        #[cfg(windows)]
        assert_eq!(path, ".\\registrations");
    }

    #[test]
    fn test_get_path_with_spaces() {
        let path = get_path("/home/my folder", "registrations");
        #[cfg(unix)]
        assert_eq!(path, "/home/my folder/registrations");
        #[cfg(windows)]
        assert_eq!(path, "\\home\\my folder\\registrations");
    }
}
