//! Filename-based image classification.

/// Decides from the filename alone whether a file is eligible for
/// transcoding.
///
/// Classification is an extension allow-list, not content sniffing: a
/// spoofed extension passes here and fails later at decode time, surfaced
/// as a per-item failure. Ineligible files pass through the pipeline
/// untouched and only appear in the upload manifest.
#[derive(Debug, Clone)]
pub struct ImageClassifier {
    allowed_extensions: Vec<String>,
}

impl ImageClassifier {
    /// Classifier with the given lower-cased extension allow-list.
    pub fn new(allowed_extensions: Vec<String>) -> Self {
        Self { allowed_extensions }
    }

    /// True iff the filename's extension (lower-cased substring after the
    /// final `.`) is in the allow-list. Filenames without a `.` are never
    /// eligible. Dotfiles like `.png` count as having extension `png`.
    pub fn is_image(&self, file_name: &str) -> bool {
        match file_name.rsplit_once('.') {
            Some((_, extension)) => {
                let extension = extension.to_lowercase();
                self.allowed_extensions.iter().any(|e| *e == extension)
            }
            None => false,
        }
    }
}

impl Default for ImageClassifier {
    fn default() -> Self {
        Self::new(
            webfolio_core::config::DEFAULT_IMAGE_EXTENSIONS
                .split(',')
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        let classifier = ImageClassifier::default();
        for name in [
            "a.jpg", "a.jpeg", "a.png", "a.gif", "a.bmp", "a.tiff", "a.webp",
        ] {
            assert!(classifier.is_image(name), "{} should be eligible", name);
        }
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = ImageClassifier::default();
        assert!(classifier.is_image("PHOTO.JPG"));
        assert!(classifier.is_image("photo.Png"));
    }

    #[test]
    fn test_rejects_non_images() {
        let classifier = ImageClassifier::default();
        assert!(!classifier.is_image("readme.txt"));
        assert!(!classifier.is_image("video.mp4"));
        assert!(!classifier.is_image("archive.tar.gz"));
    }

    #[test]
    fn test_rejects_missing_extension() {
        let classifier = ImageClassifier::default();
        assert!(!classifier.is_image("noextension"));
        assert!(!classifier.is_image(""));
        assert!(!classifier.is_image("photo."));
    }

    #[test]
    fn test_dotfile_with_image_extension_is_eligible() {
        let classifier = ImageClassifier::default();
        assert!(classifier.is_image(".png"));
        assert!(!classifier.is_image(".hidden"));
    }

    #[test]
    fn test_custom_allow_list() {
        let classifier = ImageClassifier::new(vec!["png".to_string()]);
        assert!(classifier.is_image("a.png"));
        assert!(!classifier.is_image("a.jpg"));
    }
}
