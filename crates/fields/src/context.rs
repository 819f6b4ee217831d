//! Per-render context shared by every normalizer instance.

use formpdf_types::{Currency, Entry, Form};
use std::path::{Path, PathBuf};

/// Site-wide presentation preferences consulted by individual normalizers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderPrefs {
    /// Postal convention: place the zip code before the city line.
    pub zip_before_city: bool,
    /// Render section-break descriptions, not just their titles.
    pub show_section_content: bool,
}

/// Maps uploaded-file URLs to local filesystem paths.
///
/// Consumers that need direct file access (signatures, form-data `_path`
/// keys) go through this seam; when no local file matches, callers fall back
/// to the URL.
pub trait UploadResolver {
    fn resolve(&self, url: &str) -> Option<PathBuf>;
}

/// Resolves URLs under a known base URL against an upload directory,
/// returning only paths that actually exist on disk.
#[derive(Debug, Clone)]
pub struct DirUploadResolver {
    base_url: String,
    base_dir: PathBuf,
}

impl DirUploadResolver {
    pub fn new(base_url: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            base_dir: base_dir.into(),
        }
    }
}

impl UploadResolver for DirUploadResolver {
    fn resolve(&self, url: &str) -> Option<PathBuf> {
        let relative = url.strip_prefix(&self.base_url)?;
        // Uploaded filenames never traverse upwards.
        if Path::new(relative)
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return None;
        }
        let path = self.base_dir.join(relative);
        path.is_file().then_some(path)
    }
}

/// Resolver for environments without local file access; every URL stays a URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUploads;

impl UploadResolver for NoUploads {
    fn resolve(&self, _url: &str) -> Option<PathBuf> {
        None
    }
}

/// Everything a normalizer may need beyond its own descriptor: the form, the
/// entry, presentation preferences and the upload resolver is injected at
/// construction, never read from ambient state.
#[derive(Clone, Copy)]
pub struct FieldContext<'a> {
    pub form: &'a Form,
    pub entry: &'a Entry,
    pub prefs: &'a RenderPrefs,
    pub uploads: &'a dyn UploadResolver,
}

impl FieldContext<'_> {
    pub fn currency(&self) -> Currency {
        Currency::new(&self.entry.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn dir_resolver_maps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sig.png"), b"png").unwrap();

        let resolver = DirUploadResolver::new("https://example.test/uploads", dir.path());
        assert_eq!(
            resolver.resolve("https://example.test/uploads/sig.png"),
            Some(dir.path().join("sig.png"))
        );
        assert_eq!(
            resolver.resolve("https://example.test/uploads/missing.png"),
            None
        );
        assert_eq!(resolver.resolve("https://elsewhere.test/sig.png"), None);
    }

    #[test]
    fn dir_resolver_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = DirUploadResolver::new("https://example.test/uploads", dir.path());
        assert_eq!(
            resolver.resolve("https://example.test/uploads/../secret.txt"),
            None
        );
    }
}
