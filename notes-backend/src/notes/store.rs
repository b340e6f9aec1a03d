//! PageStore: plain-file page storage
//!
//! Every page lives at `<notes-root>/<title>.txt` with no header or metadata.
//! There is no cache; each call goes straight to the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Page, PageError, PageTitle};

const PAGE_EXTENSION: &str = ".txt";

#[derive(Debug, Clone)]
pub struct PageStore {
    notes_dir: PathBuf,
}

impl PageStore {
    /// The directory is not touched until the first save.
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
        }
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    fn page_path(&self, title: &PageTitle) -> PathBuf {
        self.notes_dir.join(format!("{}{}", title, PAGE_EXTENSION))
    }

    /// Read a page. A missing file and an unreadable one both come back as `NotFound`.
    pub fn load(&self, title: &PageTitle) -> Result<Page, PageError> {
        let body = fs::read(self.page_path(title)).map_err(|source| PageError::NotFound {
            title: title.to_string(),
            source,
        })?;
        Ok(Page::new(title.as_str(), body))
    }

    /// Create or overwrite a page, creating the notes-root (and parents) on demand.
    pub fn save(&self, title: &PageTitle, body: &[u8]) -> Result<(), PageError> {
        fs::create_dir_all(&self.notes_dir).map_err(|source| PageError::CreateDir {
            path: self.notes_dir.clone(),
            source,
        })?;
        fs::write(self.page_path(title), body).map_err(|source| PageError::Write {
            title: title.to_string(),
            source,
        })
    }

    /// Title-only stubs for every `*.txt` file directly inside the notes-root,
    /// in directory enumeration order. An unreadable or missing notes-root
    /// yields an empty list.
    pub fn list_all(&self) -> Vec<Page> {
        let entries = match fs::read_dir(&self.notes_dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!(
                    "[NOTES] Cannot read {}: {}",
                    self.notes_dir.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut pages = Vec::new();
        for entry in entries.flatten() {
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            match name.strip_suffix(PAGE_EXTENSION) {
                Some(title) if !title.is_empty() => pages.push(Page::stub(title)),
                _ => continue,
            }
        }
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn title(raw: &str) -> PageTitle {
        PageTitle::parse(raw).unwrap()
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = PageStore::new(dir.path());

        let body = b"first line\n\x00\xffraw bytes";
        store.save(&title("Journal"), body).unwrap();

        let page = store.load(&title("Journal")).unwrap();
        assert_eq!(page.title, "Journal");
        assert_eq!(page.body, body.to_vec());
        assert_eq!(
            fs::read(dir.path().join("Journal.txt")).unwrap(),
            body.to_vec()
        );
    }

    #[test]
    fn test_save_empty_body() {
        let dir = tempdir().unwrap();
        let store = PageStore::new(dir.path());

        store.save(&title("Blank"), b"").unwrap();
        assert!(store.load(&title("Blank")).unwrap().body.is_empty());
    }

    #[test]
    fn test_overwrite_keeps_last_write() {
        let dir = tempdir().unwrap();
        let store = PageStore::new(dir.path());

        store.save(&title("Todo"), b"a much longer first body").unwrap();
        store.save(&title("Todo"), b"short").unwrap();

        assert_eq!(store.load(&title("Todo")).unwrap().body, b"short".to_vec());
    }

    #[test]
    fn test_save_creates_notes_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("My-Notes");
        let store = PageStore::new(&root);
        assert!(!root.exists());

        store.save(&title("First"), b"hello").unwrap();
        assert!(root.join("First.txt").is_file());
    }

    #[test]
    fn test_save_fails_when_root_is_a_file() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("occupied");
        fs::write(&root, "not a directory").unwrap();
        let store = PageStore::new(&root);

        let err = store.save(&title("Nope"), b"x").unwrap_err();
        assert!(matches!(err, PageError::CreateDir { .. }));
    }

    #[test]
    fn test_load_missing_page() {
        let dir = tempdir().unwrap();
        let store = PageStore::new(dir.path());

        let err = store.load(&title("nonexistent")).unwrap_err();
        assert!(matches!(err, PageError::NotFound { ref title, .. } if title == "nonexistent"));
    }

    #[test]
    fn test_load_directory_is_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("Folder.txt")).unwrap();
        let store = PageStore::new(dir.path());

        assert!(matches!(
            store.load(&title("Folder")),
            Err(PageError::NotFound { .. })
        ));
    }

    #[test]
    fn test_list_all_filters_entries() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "A").unwrap();
        fs::write(dir.path().join("b.txt"), "B").unwrap();
        fs::write(dir.path().join("notes.log"), "log").unwrap();
        fs::create_dir(dir.path().join("archive.txt")).unwrap();
        fs::write(dir.path().join("archive.txt").join("c.txt"), "C").unwrap();
        let store = PageStore::new(dir.path());

        let mut titles: Vec<String> = store.list_all().into_iter().map(|p| p.title).collect();
        titles.sort();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn test_list_all_stubs_have_no_body() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("full.txt"), "content").unwrap();
        let store = PageStore::new(dir.path());

        let pages = store.list_all();
        assert_eq!(pages, vec![Page::stub("full")]);
    }

    #[test]
    fn test_list_all_missing_dir_is_empty() {
        let dir = tempdir().unwrap();
        let store = PageStore::new(dir.path().join("does-not-exist"));
        assert!(store.list_all().is_empty());
    }
}
