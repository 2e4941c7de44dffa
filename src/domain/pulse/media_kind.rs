// SPDX-License-Identifier: MPL-2.0
//! Media classification by reference suffix.

/// Container extensions rendered on the video surface.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];

/// Which rendering surface a pulse uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Static image.
    Image,
    /// Video playback surface.
    Video,
}

impl MediaKind {
    /// Classifies a media reference (URL or path) by its extension.
    ///
    /// The query string and fragment are ignored, so
    /// `https://cdn/x/clip.webm?token=abc` is a video. References without a
    /// recognised video extension are images.
    ///
    /// # Example
    ///
    /// ```
    /// use pulse_viewer::domain::pulse::MediaKind;
    ///
    /// assert_eq!(MediaKind::classify("pulses/beach.MP4"), MediaKind::Video);
    /// assert_eq!(MediaKind::classify("pulses/beach.jpg"), MediaKind::Image);
    /// ```
    #[must_use]
    pub fn classify(reference: &str) -> Self {
        let without_fragment = reference.split('#').next().unwrap_or_default();
        let without_query = without_fragment.split('?').next().unwrap_or_default();
        let last_segment = without_query
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default();

        let Some((stem, extension)) = last_segment.rsplit_once('.') else {
            return MediaKind::Image;
        };
        if stem.is_empty() {
            return MediaKind::Image;
        }

        let extension = extension.to_ascii_lowercase();
        if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_extensions_are_classified_as_video() {
        for ext in VIDEO_EXTENSIONS {
            let reference = format!("media/clip.{ext}");
            assert_eq!(MediaKind::classify(&reference), MediaKind::Video, "{ext}");
        }
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(MediaKind::classify("CLIP.WebM"), MediaKind::Video);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(
            MediaKind::classify("https://cdn.example.com/p/1.mp4?alt=media&token=x"),
            MediaKind::Video
        );
        assert_eq!(
            MediaKind::classify("https://cdn.example.com/p/1.png#t=10"),
            MediaKind::Image
        );
    }

    #[test]
    fn extension_must_be_a_suffix_of_the_last_segment() {
        // ".mp4" inside a directory name does not make the reference a video
        assert_eq!(
            MediaKind::classify("https://cdn.example.com/clip.mp4/thumb.jpg"),
            MediaKind::Image
        );
        assert_eq!(MediaKind::classify("clip.mp4.jpg"), MediaKind::Image);
    }

    #[test]
    fn references_without_extension_are_images() {
        assert_eq!(MediaKind::classify(""), MediaKind::Image);
        assert_eq!(MediaKind::classify("https://cdn.example.com/p/1"), MediaKind::Image);
        assert_eq!(MediaKind::classify(".mp4"), MediaKind::Image);
    }

    #[test]
    fn windows_paths_are_supported() {
        assert_eq!(MediaKind::classify(r"C:\pulses\clip.mov"), MediaKind::Video);
    }
}
