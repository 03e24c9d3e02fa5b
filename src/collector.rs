use crate::error::ScanError;
use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name suffixes recognized as text documents.
const DOC_SUFFIXES: &[&str] = &["md", "mdx", "markdown"];

pub fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| DOC_SUFFIXES.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Walk the subtree under `root` and return the paths of all documents in it.
///
/// Traversal order is whatever the file system returns; callers must not
/// rely on it. Directories are never emitted. Files with an unrecognized
/// suffix are logged and skipped.
pub fn collect(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ScanError::DirectoryNotFound {
            path: root.to_path_buf(),
        },
        io::ErrorKind::PermissionDenied => ScanError::PermissionDenied {
            path: root.to_path_buf(),
            source: e,
        },
        _ => ScanError::Walk {
            path: root.to_path_buf(),
            source: e,
        },
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut paths = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| classify_walk_error(root, e))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.into_path();
        if is_document(&path) {
            paths.push(path);
        } else {
            warn!("skipping unrecognized entry: {}", path.display());
        }
    }

    Ok(paths)
}

fn classify_walk_error(root: &Path, err: walkdir::Error) -> ScanError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let kind = err.io_error().map(|e| e.kind());

    match kind {
        Some(io::ErrorKind::NotFound) => ScanError::DirectoryNotFound { path },
        Some(io::ErrorKind::PermissionDenied) => {
            let source = err
                .into_io_error()
                .unwrap_or_else(|| io::Error::from(io::ErrorKind::PermissionDenied));
            ScanError::PermissionDenied { path, source }
        }
        _ => {
            let source = err
                .into_io_error()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "directory walk failed"));
            ScanError::Walk { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_document() {
        assert!(is_document(Path::new("guide.md")));
        assert!(is_document(Path::new("guide.MD")));
        assert!(is_document(Path::new("page.mdx")));
        assert!(!is_document(Path::new("notes.txt")));
        assert!(!is_document(Path::new("images")));
    }

    #[test]
    fn test_collects_nested_documents() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "alpha").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("b.md"), "beta").unwrap();

        let mut paths = collect(dir.path()).unwrap();
        paths.sort();

        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("a.md"));
        assert!(paths[1].ends_with("sub/b.md"));
    }

    #[test]
    fn test_never_emits_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("images")).unwrap();
        fs::create_dir(dir.path().join("nested.d")).unwrap();

        let paths = collect(dir.path()).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_skips_unrecognized_suffix() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "gamma").unwrap();
        fs::write(dir.path().join("real.md"), "delta").unwrap();

        let paths = collect(dir.path()).unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("real.md"));
    }

    #[test]
    fn test_missing_root_is_reported() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = collect(&missing).unwrap_err();
        assert!(matches!(err, ScanError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_file_root_is_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("root.md");
        fs::write(&file, "epsilon").unwrap();

        let err = collect(&file).unwrap_err();
        assert!(matches!(err, ScanError::DirectoryNotFound { .. }));
    }
}
