//! Explorer view state and its update function.
//!
//! All mutation goes through [`ViewState::update`]. Async actions never touch
//! fields directly; they resolve to a [`Msg`] which is dispatched here, so a
//! single place decides how responses change what is on screen.
//!
//! A route is committed only by a successful load ([`Msg::ListingLoaded`] or
//! [`Msg::FileOpened`]). A failed load leaves the previous route, mode and
//! listing untouched.

use crate::config::VERSION_LOADING;
use crate::core::breadcrumb::compute_breadcrumb;
use crate::core::listing::{filter_visible, find_preview_file, sort_entries};
use crate::models::{
    AccessInfo, Crumb, Dialog, FileEntry, Listing, MtimeFormat, PreviewKind, PreviewState, Route,
    Upload, UploadStatus, UserInfo,
};

/// Everything the explorer renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Location the view was last loaded for
    pub route: Route,
    /// Sorted entries of the last listing to resolve
    pub files: Vec<FileEntry>,
    pub breadcrumb: Vec<Crumb>,
    pub preview: PreviewState,
    /// `raw=false`: show a single file instead of a listing
    pub preview_mode: bool,
    pub show_hidden: bool,
    pub mtime_format: MtimeFormat,
    pub auth: AccessInfo,
    pub user: Option<UserInfo>,
    pub version: String,
    /// A load request is in flight
    pub loading: bool,
    pub dialog: Option<Dialog>,
    /// Uploads of this session, oldest first
    pub uploads: Vec<Upload>,
    /// Id handed to the most recently queued upload
    pub upload_seq: u32,
}

/// State transitions.
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    /// A listing or file request was issued.
    LoadStarted,
    /// The request failed; the previous view stays on screen.
    LoadFailed,
    /// A listing for `route` resolved.
    ListingLoaded { route: Route, listing: Listing },
    /// A `raw=false` route resolved to a rendered file.
    FileOpened { route: Route, preview: PreviewState },
    /// README content for the current listing arrived.
    ReadmeLoaded(PreviewState),
    /// The README announced by the listing could not be fetched.
    ReadmeFailed,
    ToggleHidden,
    ToggleMtimeFormat,
    VersionLoaded(String),
    UserLoaded(Option<UserInfo>),
    OpenDialog(Dialog),
    CloseDialog,
    /// A file with this name starts uploading; it gets id `upload_seq + 1`.
    UploadQueued(String),
    UploadProgress { id: u32, percent: u8 },
    /// Upload `id` finished, with the error message if it failed.
    UploadFinished { id: u32, error: Option<String> },
    /// Forget every upload shown in the upload panel.
    ClearUploads,
}

impl ViewState {
    /// Initial state for a page opened at `route`.
    pub fn new(route: Route) -> Self {
        Self {
            breadcrumb: compute_breadcrumb(&route.path),
            preview_mode: route.is_preview_mode(),
            route,
            files: Vec::new(),
            preview: PreviewState::default(),
            show_hidden: false,
            mtime_format: MtimeFormat::default(),
            auth: AccessInfo::default(),
            user: None,
            version: VERSION_LOADING.to_string(),
            loading: false,
            dialog: None,
            uploads: Vec::new(),
            upload_seq: 0,
        }
    }

    /// Apply one message.
    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::LoadStarted => self.loading = true,
            Msg::LoadFailed => self.loading = false,
            Msg::ListingLoaded { route, mut listing } => {
                // No request tracking: whichever response resolves last wins.
                sort_entries(&mut listing.files);
                self.preview = find_preview_file(&listing.files)
                    .map(|f| PreviewState::pending(f.name.clone(), PreviewKind::Markdown))
                    .unwrap_or_default();
                self.files = listing.files;
                self.auth = listing.auth;
                self.commit_route(route);
            }
            Msg::FileOpened { route, preview } => {
                self.preview = preview;
                self.commit_route(route);
            }
            Msg::ReadmeLoaded(preview) => {
                if !self.preview_mode {
                    self.preview = preview;
                }
            }
            Msg::ReadmeFailed => {
                if !self.preview_mode {
                    self.preview = PreviewState::default();
                }
            }
            Msg::ToggleHidden => self.show_hidden = !self.show_hidden,
            Msg::ToggleMtimeFormat => self.mtime_format = self.mtime_format.toggled(),
            Msg::VersionLoaded(version) => self.version = version,
            Msg::UserLoaded(user) => self.user = user,
            Msg::OpenDialog(dialog) => self.dialog = Some(dialog),
            Msg::CloseDialog => self.dialog = None,
            Msg::UploadQueued(name) => {
                self.upload_seq += 1;
                self.uploads.push(Upload {
                    id: self.upload_seq,
                    name,
                    status: UploadStatus::Uploading(0),
                });
            }
            Msg::UploadProgress { id, percent } => {
                if let Some(upload) = self.upload_mut(id)
                    && matches!(upload.status, UploadStatus::Uploading(_))
                {
                    upload.status = UploadStatus::Uploading(percent.min(100));
                }
            }
            Msg::UploadFinished { id, error } => {
                if let Some(upload) = self.upload_mut(id) {
                    upload.status = match error {
                        Some(message) => UploadStatus::Failed(message),
                        None => UploadStatus::Done,
                    };
                }
            }
            Msg::ClearUploads => self.uploads.clear(),
        }
    }

    fn commit_route(&mut self, route: Route) {
        self.breadcrumb = compute_breadcrumb(&route.path);
        self.preview_mode = route.is_preview_mode();
        self.route = route;
        self.loading = false;
    }

    fn upload_mut(&mut self, id: u32) -> Option<&mut Upload> {
        self.uploads.iter_mut().find(|u| u.id == id)
    }

    /// Entries to render under the current hidden-file setting.
    pub fn visible_files(&self) -> Vec<FileEntry> {
        filter_visible(&self.files, self.show_hidden)
    }

    /// Name of the README to fetch for the current listing.
    pub fn readme_to_load(&self) -> Option<&str> {
        if self.preview_mode || !self.preview.is_loading() {
            return None;
        }
        self.preview.filename.as_deref()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Route::from_uri("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    fn entry(name: &str, kind: EntryKind, mtime: i64) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: format!("repo/{}", name),
            size: 10,
            kind,
            mtime,
        }
    }

    fn listing(files: Vec<FileEntry>) -> Listing {
        Listing {
            files,
            auth: AccessInfo {
                upload: true,
                delete: true,
            },
        }
    }

    #[test]
    fn test_listing_loaded_replaces_files_and_breadcrumb() {
        let mut state = ViewState::default();
        let route = Route::from_uri("/repo/src");
        state.update(Msg::LoadStarted);
        assert!(state.loading);

        state.update(Msg::ListingLoaded {
            route,
            listing: listing(vec![
                entry("a.rs", EntryKind::File, 1),
                entry("mod", EntryKind::Dir, 0),
            ]),
        });

        assert!(!state.loading);
        assert_eq!(state.files[0].name, "mod");
        assert!(state.auth.delete);
        assert_eq!(
            state.breadcrumb.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["repo", "src /"]
        );
        assert_eq!(state.preview, PreviewState::default());
    }

    #[test]
    fn test_readme_becomes_pending_preview() {
        let mut state = ViewState::default();
        state.update(Msg::ListingLoaded {
            route: Route::from_uri("/repo"),
            listing: listing(vec![entry("README.md", EntryKind::File, 0)]),
        });
        assert_eq!(state.readme_to_load(), Some("README.md"));

        state.update(Msg::ReadmeLoaded(PreviewState {
            filename: Some("README.md".to_string()),
            filetype: PreviewKind::Markdown,
            filesize: None,
            content_html: "<h1>repo</h1>".to_string(),
        }));
        assert_eq!(state.readme_to_load(), None);
    }

    #[test]
    fn test_last_response_wins() {
        let mut state = ViewState::default();
        let newer = Route::from_uri("/newer");
        let older = Route::from_uri("/older");
        state.update(Msg::LoadStarted);
        state.update(Msg::LoadStarted);

        state.update(Msg::ListingLoaded {
            route: newer,
            listing: listing(vec![entry("n", EntryKind::File, 0)]),
        });
        state.update(Msg::ListingLoaded {
            route: older,
            listing: listing(vec![entry("o", EntryKind::File, 0)]),
        });

        assert_eq!(state.route.path, "/older");
        assert_eq!(state.files[0].name, "o");
    }

    #[test]
    fn test_load_failed_keeps_previous_listing() {
        let mut state = ViewState::default();
        state.update(Msg::ListingLoaded {
            route: Route::from_uri("/a"),
            listing: listing(vec![entry("x", EntryKind::File, 0)]),
        });
        state.update(Msg::LoadStarted);
        state.update(Msg::LoadFailed);

        assert!(!state.loading);
        assert_eq!(state.route.path, "/a");
        assert_eq!(state.files.len(), 1);
    }

    #[test]
    fn test_toggle_hidden_changes_visible_files() {
        let mut state = ViewState::default();
        state.update(Msg::ListingLoaded {
            route: Route::from_uri("/"),
            listing: listing(vec![
                entry(".env", EntryKind::File, 0),
                entry("app", EntryKind::File, 0),
            ]),
        });
        assert_eq!(state.visible_files().len(), 1);

        state.update(Msg::ToggleHidden);
        assert_eq!(state.visible_files().len(), 2);
    }

    #[test]
    fn test_preview_mode_route() {
        let route = Route::from_uri("/notes/todo.txt?raw=false");
        let mut state = ViewState::new(route.clone());
        assert!(state.preview_mode);

        state.update(Msg::LoadStarted);
        state.update(Msg::FileOpened {
            route,
            preview: PreviewState {
                content_html: "<pre>milk</pre>".to_string(),
                ..PreviewState::pending("todo.txt", PreviewKind::Text)
            },
        });
        assert!(!state.loading);
        assert_eq!(state.readme_to_load(), None);
        assert_eq!(state.breadcrumb.last().map(|c| c.name.as_str()), Some("todo.txt /"));
    }

    #[test]
    fn test_failed_file_open_keeps_listing_route() {
        let mut state = ViewState::default();
        state.update(Msg::ListingLoaded {
            route: Route::from_uri("/docs"),
            listing: listing(vec![entry("a.txt", EntryKind::File, 0)]),
        });

        // Preview click answered with 403
        state.update(Msg::LoadStarted);
        state.update(Msg::LoadFailed);

        assert_eq!(state.route, Route::from_uri("/docs"));
        assert!(!state.preview_mode);
        assert_eq!(state.breadcrumb.last().map(|c| c.path.as_str()), Some("/docs"));
        assert_eq!(state.files.len(), 1);
    }

    #[test]
    fn test_listing_after_preview_leaves_preview_mode() {
        let mut state = ViewState::new(Route::from_uri("/docs/a.txt?raw=false"));
        state.update(Msg::LoadStarted);
        assert!(state.preview_mode);

        state.update(Msg::ListingLoaded {
            route: Route::from_uri("/docs"),
            listing: listing(vec![]),
        });
        assert!(!state.preview_mode);
        assert_eq!(state.route.path, "/docs");
    }

    #[test]
    fn test_readme_failure_clears_pending_preview() {
        let mut state = ViewState::default();
        state.update(Msg::ListingLoaded {
            route: Route::from_uri("/repo"),
            listing: listing(vec![entry("README.md", EntryKind::File, 0)]),
        });
        assert!(state.preview.is_loading());

        state.update(Msg::ReadmeFailed);
        assert!(!state.preview.is_loading());
        assert_eq!(state.preview.filename, None);
        assert_eq!(state.readme_to_load(), None);
    }

    #[test]
    fn test_readme_messages_ignored_in_preview_mode() {
        let route = Route::from_uri("/a.md?raw=false");
        let opened = PreviewState {
            content_html: "<h1>a</h1>".to_string(),
            ..PreviewState::pending("a.md", PreviewKind::Markdown)
        };
        let mut state = ViewState::new(route.clone());
        state.update(Msg::FileOpened {
            route,
            preview: opened.clone(),
        });

        state.update(Msg::ReadmeFailed);
        assert_eq!(state.preview, opened);
    }

    #[test]
    fn test_upload_lifecycle() {
        let mut state = ViewState::default();
        state.update(Msg::UploadQueued("a.bin".to_string()));
        let first = state.upload_seq;
        state.update(Msg::UploadQueued("b.bin".to_string()));
        let second = state.upload_seq;
        assert_ne!(first, second);

        state.update(Msg::UploadProgress { id: first, percent: 40 });
        assert_eq!(state.uploads[0].status, UploadStatus::Uploading(40));

        state.update(Msg::UploadFinished { id: first, error: None });
        state.update(Msg::UploadFinished {
            id: second,
            error: Some("403:forbidden".to_string()),
        });
        assert_eq!(state.uploads[0].status, UploadStatus::Done);
        assert_eq!(
            state.uploads[1].status,
            UploadStatus::Failed("403:forbidden".to_string())
        );

        // Late progress does not reopen a finished upload
        state.update(Msg::UploadProgress { id: first, percent: 90 });
        assert_eq!(state.uploads[0].status, UploadStatus::Done);
    }

    #[test]
    fn test_clear_uploads_drops_all_and_ignores_stragglers() {
        let mut state = ViewState::default();
        state.update(Msg::UploadQueued("a.bin".to_string()));
        let id = state.upload_seq;
        state.update(Msg::ClearUploads);
        assert!(state.uploads.is_empty());

        state.update(Msg::UploadFinished { id, error: None });
        assert!(state.uploads.is_empty());

        state.update(Msg::UploadQueued("c.bin".to_string()));
        assert_eq!(state.uploads[0].id, id + 1);
    }

    #[test]
    fn test_dialog_and_toggles() {
        let mut state = ViewState::default();
        state.update(Msg::OpenDialog(Dialog::Info {
            title: "a".to_string(),
            body: "{}".to_string(),
        }));
        assert!(state.dialog.is_some());
        state.update(Msg::CloseDialog);
        assert!(state.dialog.is_none());

        state.update(Msg::ToggleMtimeFormat);
        assert_eq!(state.mtime_format, MtimeFormat::FromNow);
        state.update(Msg::VersionLoaded("2.1.0".to_string()));
        assert_eq!(state.version, "2.1.0");
    }
}
