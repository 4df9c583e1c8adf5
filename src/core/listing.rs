//! Listing filtering and ordering.

use std::cmp::Ordering;

use crate::config::PREVIEW_FILE_NAME;
use crate::models::{FileEntry, Route};

/// Entries to display: dotfiles are dropped unless `show_hidden` is set.
pub fn filter_visible(files: &[FileEntry], show_hidden: bool) -> Vec<FileEntry> {
    files
        .iter()
        .filter(|f| show_hidden || !f.is_hidden())
        .cloned()
        .collect()
}

/// Directories first, then newest first, then by name.
pub fn compare_entries(a: &FileEntry, b: &FileEntry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| b.mtime.cmp(&a.mtime))
        .then_with(|| a.name.cmp(&b.name))
}

pub fn sort_entries(files: &mut [FileEntry]) {
    files.sort_by(compare_entries);
}

/// The entry rendered as the directory's README, if any.
///
/// Hidden entries are considered too; visibility only affects the list.
pub fn find_preview_file(files: &[FileEntry]) -> Option<&FileEntry> {
    files
        .iter()
        .find(|f| !f.is_dir() && f.name == PREVIEW_FILE_NAME)
}

/// `(directories, files)` counts for the status line.
pub fn count_kinds(files: &[FileEntry]) -> (usize, usize) {
    let dirs = files.iter().filter(|f| f.is_dir()).count();
    (dirs, files.len() - dirs)
}

/// Identity of a rendered row: the listing's location plus the entry.
///
/// Scoped to the route, so a row never outlives the directory it links into
/// even when another listing has an identical entry.
pub fn row_key(route: &Route, entry: &FileEntry) -> (String, String, i64) {
    (route.uri(), entry.path.clone(), entry.mtime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    fn entry(name: &str, kind: EntryKind, mtime: i64) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: name.to_string(),
            size: 1,
            kind,
            mtime,
        }
    }

    fn names(files: &[FileEntry]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_hidden_entries_filtered() {
        let files = vec![
            entry(".git", EntryKind::Dir, 0),
            entry("x.txt", EntryKind::File, 0),
        ];
        assert_eq!(names(&filter_visible(&files, false)), vec!["x.txt"]);
        assert_eq!(names(&filter_visible(&files, true)), vec![".git", "x.txt"]);
    }

    #[test]
    fn test_filter_never_leaks_dotfiles() {
        let files: Vec<FileEntry> = [".a", "b", ".c.d", "e.", "..", "f"]
            .iter()
            .map(|n| entry(n, EntryKind::File, 0))
            .collect();
        let visible = filter_visible(&files, false);
        assert!(visible.iter().all(|f| !f.name.starts_with('.')));
        assert_eq!(visible.len(), 3);
        assert_eq!(filter_visible(&files, true).len(), files.len());
    }

    #[test]
    fn test_sort_dirs_first_then_newest() {
        let mut files = vec![
            entry("old.txt", EntryKind::File, 10),
            entry("new.txt", EntryKind::File, 30),
            entry("old-dir", EntryKind::Dir, 5),
            entry("new-dir", EntryKind::Dir, 20),
            entry("a-same.txt", EntryKind::File, 30),
        ];
        sort_entries(&mut files);
        assert_eq!(
            names(&files),
            vec!["new-dir", "old-dir", "a-same.txt", "new.txt", "old.txt"]
        );
    }

    #[test]
    fn test_find_preview_file() {
        let files = vec![
            entry("README.md", EntryKind::Dir, 0),
            entry("docs", EntryKind::Dir, 0),
        ];
        assert!(find_preview_file(&files).is_none());

        let files = vec![
            entry("readme.md", EntryKind::File, 0),
            entry("README.md", EntryKind::File, 0),
        ];
        assert_eq!(find_preview_file(&files).map(|f| f.name.as_str()), Some("README.md"));
    }

    #[test]
    fn test_count_kinds() {
        let files = vec![
            entry("a", EntryKind::Dir, 0),
            entry("b", EntryKind::File, 0),
            entry("c", EntryKind::File, 0),
        ];
        assert_eq!(count_kinds(&files), (1, 2));
    }

    #[test]
    fn test_row_key_differs_across_directories() {
        let file = entry("LICENSE", EntryKind::File, 1700);
        let v1 = row_key(&Route::from_uri("/v1"), &file);
        let v2 = row_key(&Route::from_uri("/v2"), &file);
        assert_ne!(v1, v2);

        let searched = row_key(&Route::from_uri("/v1?search=lic"), &file);
        assert_ne!(v1, searched);

        assert_eq!(v1, row_key(&Route::from_uri("/v1"), &file));
    }
}
