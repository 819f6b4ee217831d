//! On-disk layout of generated documents and the temp-file sweep.

use chrono::{DateTime, Duration, Utc};
use formpdf_types::{EntryId, FormId};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Places generated files under a per-form/per-entry temp layout with an
/// optional stable sibling for configurations that keep every document.
///
/// Layout: `{tmp_root}/{form_id}{entry_id}/{filename}.pdf`. Form id and
/// entry id scoping keeps concurrent requests for different entries from
/// colliding; a single request never races itself.
#[derive(Debug, Clone)]
pub struct PdfStore {
    tmp_root: PathBuf,
    persist_root: Option<PathBuf>,
}

impl PdfStore {
    pub fn new(tmp_root: impl Into<PathBuf>) -> Self {
        Self {
            tmp_root: tmp_root.into(),
            persist_root: None,
        }
    }

    /// Adds a stable directory for "always save" copies.
    pub fn with_persist_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.persist_root = Some(root.into());
        self
    }

    pub fn tmp_root(&self) -> &Path {
        &self.tmp_root
    }

    /// The request-lifetime path for one generated document.
    pub fn tmp_path(&self, form_id: FormId, entry_id: EntryId, filename: &str) -> PathBuf {
        self.tmp_root
            .join(format!("{form_id}{entry_id}"))
            .join(format!("{filename}.pdf"))
    }

    /// The stable path used when a configuration keeps every document.
    /// `None` when no persistent root is configured.
    pub fn persist_path(
        &self,
        form_id: FormId,
        entry_id: EntryId,
        filename: &str,
    ) -> Option<PathBuf> {
        self.persist_root.as_ref().map(|root| {
            root.join(format!("{form_id}{entry_id}"))
                .join(format!("{filename}.pdf"))
        })
    }

    /// Writes `bytes` at `path`, creating parent directories as needed. The
    /// file is fully written before this returns, so an existence check that
    /// gates a download may follow immediately.
    pub fn save(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)
    }

    /// Removes temp files older than `max_age_hours`, preserving dotfiles
    /// (`.htaccess` and friends) regardless of age. Per-file errors are
    /// logged and skipped, never aborting the sweep. Returns the number of
    /// files removed.
    pub fn sweep(&self, now: DateTime<Utc>, max_age_hours: i64) -> usize {
        let cutoff = now - Duration::hours(max_age_hours);
        let mut removed = 0;
        self.sweep_dir(&self.tmp_root, cutoff, &mut removed);
        removed
    }

    fn sweep_dir(&self, dir: &Path, cutoff: DateTime<Utc>, removed: &mut usize) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("sweep: cannot read {}: {err}", dir.display());
                return;
            }
        };
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("sweep: cannot read entry in {}: {err}", dir.display());
                    continue;
                }
            };
            let path = entry.path();
            if path.is_dir() {
                self.sweep_dir(&path, cutoff, removed);
                // Emptied per-entry directories go too; failure means the
                // directory still has fresh files, which is fine.
                let _ = fs::remove_dir(&path);
                continue;
            }
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            match file_mtime(&path) {
                Some(mtime) if mtime < cutoff => match fs::remove_file(&path) {
                    Ok(()) => *removed += 1,
                    Err(err) => log::warn!("sweep: cannot remove {}: {err}", path.display()),
                },
                Some(_) => {}
                None => log::warn!("sweep: cannot stat {}", path.display()),
            }
        }
    }
}

fn file_mtime(path: &Path) -> Option<DateTime<Utc>> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Utc>::from(modified))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_the_form_entry_layout() {
        let store = PdfStore::new("/tmp/pdfs").with_persist_root("/srv/pdfs");
        assert_eq!(
            store.tmp_path(FormId(12), EntryId(407), "receipt"),
            PathBuf::from("/tmp/pdfs/12407/receipt.pdf")
        );
        assert_eq!(
            store.persist_path(FormId(12), EntryId(407), "receipt"),
            Some(PathBuf::from("/srv/pdfs/12407/receipt.pdf"))
        );
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = PdfStore::new(dir.path());
        let path = store.tmp_path(FormId(1), EntryId(2), "doc");
        store.save(&path, b"%PDF-").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-");
    }

    #[test]
    fn sweep_removes_stale_files_but_keeps_dotfiles() {
        let dir = tempfile::tempdir().unwrap();
        let store = PdfStore::new(dir.path());

        let stale = store.tmp_path(FormId(1), EntryId(1), "old");
        store.save(&stale, b"old").unwrap();
        let dotfile = dir.path().join("11/.htaccess");
        fs::write(&dotfile, b"deny from all").unwrap();

        // Both files were written just now; sweeping with a future clock
        // makes them stale without touching real mtimes.
        let future = Utc::now() + Duration::hours(48);
        let removed = store.sweep(future, 24);

        assert_eq!(removed, 1);
        assert!(!stale.exists());
        assert!(dotfile.exists());
    }

    #[test]
    fn sweep_keeps_fresh_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = PdfStore::new(dir.path());
        let fresh = store.tmp_path(FormId(2), EntryId(9), "new");
        store.save(&fresh, b"new").unwrap();

        assert_eq!(store.sweep(Utc::now(), 24), 0);
        assert!(fresh.exists());
    }
}
