//! Relative-path handling for folder-preserving uploads.
//!
//! The transport delivers a flat list of (path, bytes) pairs; folder
//! hierarchy is a purely logical concept reconstructed here by string
//! splitting. No real directory exists until the archive step materializes
//! the paths.

/// Split a submitted relative path into (folder, filename).
///
/// The filename is the final path segment; the folder is everything before
/// it, "" for root-level files. Any string decomposes deterministically.
/// Folder segments that are empty, `.` or `..` are dropped so the derived
/// path can never escape the archive root.
pub fn split_relative_path(relative_path: &str) -> (String, String) {
    let normalized = relative_path.replace('\\', "/");
    let (folder, file_name) = match normalized.rsplit_once('/') {
        Some((folder, file_name)) => (folder, file_name),
        None => ("", normalized.as_str()),
    };

    let folder = folder
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .collect::<Vec<_>>()
        .join("/");

    (folder, file_name.to_string())
}

/// Output filename for a transcoded image: the original stem with a `.webp`
/// extension. A filename without a `.` keeps its full name as the stem.
pub fn webp_output_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => format!("{}.webp", stem),
        _ => format!("{}.webp", file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_root_file() {
        assert_eq!(
            split_relative_path("photo.jpg"),
            ("".to_string(), "photo.jpg".to_string())
        );
    }

    #[test]
    fn test_split_nested_file() {
        assert_eq!(
            split_relative_path("trip/day1/photo.jpg"),
            ("trip/day1".to_string(), "photo.jpg".to_string())
        );
    }

    #[test]
    fn test_split_windows_separators() {
        assert_eq!(
            split_relative_path("trip\\day1\\photo.jpg"),
            ("trip/day1".to_string(), "photo.jpg".to_string())
        );
    }

    #[test]
    fn test_split_strips_traversal_segments() {
        assert_eq!(
            split_relative_path("../../etc/passwd"),
            ("etc".to_string(), "passwd".to_string())
        );
        assert_eq!(
            split_relative_path("/abs/./photo.jpg"),
            ("abs".to_string(), "photo.jpg".to_string())
        );
    }

    #[test]
    fn test_split_trailing_separator() {
        // A trailing separator yields an empty filename; the classifier
        // rejects it downstream.
        assert_eq!(
            split_relative_path("trip/"),
            ("trip".to_string(), "".to_string())
        );
    }

    #[test]
    fn test_webp_output_name() {
        assert_eq!(webp_output_name("photo.jpg"), "photo.webp");
        assert_eq!(webp_output_name("archive.tar.gz"), "archive.tar.webp");
        assert_eq!(webp_output_name("noext"), "noext.webp");
        assert_eq!(webp_output_name(".hidden"), ".hidden.webp");
    }
}
