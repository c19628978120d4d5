use std::{fs, path::PathBuf};

use relative_path::{Component, RelativePath};

use crate::error::ImageError;

/// Target prefixes the host fetches itself.
pub const REMOTE_PREFIXES: [&str; 3] = ["http://", "https://", "data:"];

/// Resolves relative image file names to bytes.
pub trait ImageStore {
    fn load(&self, name: &RelativePath) -> Result<Vec<u8>, ImageError>;

    /// Whether `name` would load, without reading it.
    fn contains(&self, name: &RelativePath) -> bool {
        self.load(name).is_ok()
    }
}

/// Images stored in one directory (usually next to the note).
#[derive(Debug, Clone)]
pub struct DirImageStore {
    root: PathBuf,
}

impl DirImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The file `name` refers to, if it exists inside the root.
    fn locate(&self, name: &RelativePath) -> Option<PathBuf> {
        let normalized = name.normalize();
        if normalized.as_str().is_empty()
            || matches!(normalized.components().next(), Some(Component::ParentDir))
        {
            return None;
        }
        let path = normalized.to_path(&self.root);
        path.is_file().then_some(path)
    }
}

impl ImageStore for DirImageStore {
    fn load(&self, name: &RelativePath) -> Result<Vec<u8>, ImageError> {
        let path = self
            .locate(name)
            .ok_or_else(|| ImageError::NotFound(name.to_string()))?;
        Ok(fs::read(path)?)
    }

    fn contains(&self, name: &RelativePath) -> bool {
        self.locate(name).is_some()
    }
}

/// A store with nothing in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageStore for NoImages {
    fn load(&self, name: &RelativePath) -> Result<Vec<u8>, ImageError> {
        Err(ImageError::NotFound(name.to_string()))
    }

    fn contains(&self, _name: &RelativePath) -> bool {
        false
    }
}

/// What an image reference resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Local { name: String, bytes: Vec<u8> },
    /// Not fetched by the engine.
    Remote { url: String },
    Missing { placeholder: String },
}

impl ImageSource {
    /// Caption to show for the image: alt text, else the file name.
    pub fn caption(alt_text: &str, target: &str) -> String {
        if !alt_text.is_empty() {
            return alt_text.to_string();
        }
        RelativePath::new(target)
            .file_name()
            .unwrap_or(target)
            .to_string()
    }
}

pub fn is_remote(target: &str) -> bool {
    REMOTE_PREFIXES.iter().any(|p| target.starts_with(p))
}

/// Resolves an `![alt](target)` reference against `store`.
pub fn resolve(store: &dyn ImageStore, alt_text: &str, target: &str) -> ImageSource {
    if is_remote(target) {
        return ImageSource::Remote {
            url: target.to_string(),
        };
    }
    match store.load(RelativePath::new(target)) {
        Ok(bytes) => ImageSource::Local {
            name: target.to_string(),
            bytes,
        },
        Err(e) => {
            log::warn!("{e}; showing placeholder");
            ImageSource::Missing {
                placeholder: ImageSource::caption(alt_text, target),
            }
        }
    }
}

/// Whether an image reference would show the image rather than a placeholder.
/// Only checks presence; the bytes are not read.
pub fn is_available(store: &dyn ImageStore, target: &str) -> bool {
    if is_remote(target) {
        return true;
    }
    let found = store.contains(RelativePath::new(target));
    if !found {
        log::warn!("image not found: {target}; showing placeholder");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store_with(name: &str, bytes: &[u8]) -> (TempDir, DirImageStore) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, bytes).unwrap();
        let store = DirImageStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn resolves_local_image() {
        let (_dir, store) = store_with("img/cat.png", b"PNG");
        assert_eq!(
            resolve(&store, "cat", "img/cat.png"),
            ImageSource::Local {
                name: "img/cat.png".into(),
                bytes: b"PNG".to_vec()
            }
        );
    }

    #[test]
    fn missing_image_uses_alt_text() {
        let (_dir, store) = store_with("a.png", b"x");
        assert_eq!(
            resolve(&store, "a dog", "dog.png"),
            ImageSource::Missing {
                placeholder: "a dog".into()
            }
        );
    }

    #[test]
    fn missing_image_without_alt_uses_file_name() {
        assert_eq!(
            resolve(&NoImages, "", "photos/2024/beach.jpg"),
            ImageSource::Missing {
                placeholder: "beach.jpg".into()
            }
        );
    }

    #[test]
    fn escaping_paths_are_refused() {
        let (dir, _store) = store_with("secret.png", b"s");
        let inner = dir.path().join("inner");
        std::fs::create_dir(&inner).unwrap();
        let store = DirImageStore::new(&inner);
        assert!(matches!(
            store.load(RelativePath::new("../secret.png")),
            Err(ImageError::NotFound(_))
        ));
    }

    #[test]
    fn remote_targets_are_not_fetched() {
        assert_eq!(
            resolve(&NoImages, "logo", "https://example.com/logo.png"),
            ImageSource::Remote {
                url: "https://example.com/logo.png".into()
            }
        );
        assert!(is_remote("data:image/png;base64,AAAA"));
    }

    #[test]
    fn availability_does_not_read_the_file() {
        let (dir, store) = store_with("img/cat.png", b"PNG");
        assert!(is_available(&store, "img/cat.png"));
        assert!(!is_available(&store, "img/dog.png"));
        assert!(!is_available(&store, "../img/cat.png"));
        assert!(is_available(&NoImages, "https://example.com/a.png"));
        assert!(!is_available(&NoImages, "a.png"));
        drop(dir);
        assert!(!store.contains(RelativePath::new("img/cat.png")));
    }
}
