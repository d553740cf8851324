//! Turns a raw drag-and-drop payload into a single validated image path.
//!
//! The payload is a whitespace-joined list of paths. Paths that contain
//! spaces are split like any other token, so they arrive as several entries
//! and get rejected as a multi-file drop.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use crate::error::ConvertError;

/// A dropped path that passed the single-file and extension checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImagePath(PathBuf);

impl SourceImagePath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

/// Builds the raw payload from the paths the windowing layer hands us.
pub fn payload_from_paths<I, P>(paths: I) -> String
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|p| p.as_ref().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn parse_payload(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

/// Accepts exactly one path whose lowercased extension is in `allowed`.
/// A bare dotfile such as `.png` has no extension and is rejected.
pub fn validate(paths: &[&str], allowed: &[&str]) -> Result<SourceImagePath, ConvertError> {
    let [path] = paths else {
        return Err(ConvertError::MultipleFiles { count: paths.len() });
    };
    let path = PathBuf::from(*path);

    let ext = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);
    match ext {
        Some(ext) if allowed.contains(&ext.as_str()) => Ok(SourceImagePath(path)),
        _ => Err(ConvertError::UnsupportedType { path }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

    fn check(raw: &str) -> Result<SourceImagePath, ConvertError> {
        validate(&parse_payload(raw), &ALLOWED)
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(parse_payload("a.png\tb.png\n c.png"), ["a.png", "b.png", "c.png"]);
        assert!(parse_payload("   ").is_empty());
    }

    #[test]
    fn single_image_is_accepted() {
        let src = check(r"C:\img\photo.png").unwrap();
        assert_eq!(src.as_path(), Path::new(r"C:\img\photo.png"));
    }

    #[test]
    fn extension_check_ignores_case() {
        for raw in ["/tmp/a.PNG", "/tmp/b.JpG", "/tmp/c.jpeg", "/tmp/d.WebP"] {
            assert!(check(raw).is_ok(), "{raw} should be accepted");
        }
    }

    #[test]
    fn more_than_one_token_is_rejected() {
        assert!(matches!(
            check("a.png b.png"),
            Err(ConvertError::MultipleFiles { count: 2 })
        ));
        // a space inside a path looks like two files
        assert!(matches!(
            check("/home/me/my photo.png"),
            Err(ConvertError::MultipleFiles { count: 2 })
        ));
    }

    #[test]
    fn empty_payload_is_rejected() {
        assert!(matches!(
            check(""),
            Err(ConvertError::MultipleFiles { count: 0 })
        ));
    }

    #[test]
    fn other_extensions_are_rejected() {
        for raw in [r"C:\doc.txt", "image.gif", "archive.png.zip", "noext", "/tmp/dir/"] {
            assert!(
                matches!(check(raw), Err(ConvertError::UnsupportedType { .. })),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn bare_dotfile_has_no_extension() {
        assert!(matches!(
            check("/tmp/.png"),
            Err(ConvertError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn webp_depends_on_allow_set() {
        let paths = parse_payload("pic.webp");
        assert!(validate(&paths, &["png", "jpg", "jpeg"]).is_err());
        assert!(validate(&paths, &ALLOWED).is_ok());
    }

    #[test]
    fn payload_joins_paths_with_spaces() {
        let raw = payload_from_paths([Path::new("/a/x.png"), Path::new("/b/y.jpg")]);
        assert_eq!(raw, "/a/x.png /b/y.jpg");
    }
}
