/// One entry in the native open dialog's file-type menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

/// Menu order matters: the first entry is the dialog's default.
pub const DIALOG_FILTERS: [DialogFilter; 5] = [
    DialogFilter { name: "All Supported Files", extensions: &["pdf", "txt", "jpg", "jpeg", "png", "gif", "bmp"] },
    DialogFilter { name: "PDF Files", extensions: &["pdf"] },
    DialogFilter { name: "Text Files", extensions: &["txt"] },
    DialogFilter { name: "Images", extensions: IMAGE_EXTENSIONS },
    DialogFilter { name: "All Files", extensions: &["*"] },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use std::path::Path;

    #[test]
    fn test_filter_order() {
        let names: Vec<&str> = DIALOG_FILTERS.iter().map(|f| f.name).collect();
        assert_eq!(names, ["All Supported Files", "PDF Files", "Text Files", "Images", "All Files"]);
        assert_eq!(DIALOG_FILTERS[4].extensions, &["*"]);
    }

    #[test]
    fn test_supported_filter_matches_classifier() {
        for ext in DIALOG_FILTERS[0].extensions {
            let name = format!("file.{}", ext);
            assert!(classify(Path::new(&name)).is_some(), "{}", name);
        }
        // the specific groups are subsets of the combined one
        for f in &DIALOG_FILTERS[1..4] {
            for ext in f.extensions {
                assert!(DIALOG_FILTERS[0].extensions.contains(ext), "{} / {}", f.name, ext);
            }
        }
    }
}
