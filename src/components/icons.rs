//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap icons, and [`FileIcon`] categories
//! to the icon shown in the listing.

use icondata::Icon;

use crate::models::FileIcon;

// =============================================================================
// Toolbar & Actions
// =============================================================================

pub const HOME: Icon = icondata::BsHouseFill;
pub const PARENT: Icon = icondata::BsArrowUpCircle;
pub const CHEVRON_RIGHT: Icon = icondata::BsChevronRight;
pub const SEARCH: Icon = icondata::BsSearch;
pub const SHOW_HIDDEN: Icon = icondata::BsEye;
pub const HIDE_HIDDEN: Icon = icondata::BsEyeSlash;
pub const CLOCK: Icon = icondata::BsClock;
pub const NEW_FOLDER: Icon = icondata::BsFolderPlus;
pub const UPLOAD: Icon = icondata::BsUpload;
pub const DOWNLOAD: Icon = icondata::BsDownload;
pub const INFO: Icon = icondata::BsInfoCircle;
pub const QR_CODE: Icon = icondata::BsQrCode;
pub const DELETE: Icon = icondata::BsTrash;
pub const PREVIEW: Icon = icondata::BsEye;
pub const CLOSE: Icon = icondata::BsXLg;
pub const COPY: Icon = icondata::BsClipboard;
pub const COPIED: Icon = icondata::BsClipboardCheck;
pub const DROP_ZONE: Icon = icondata::BsCloudArrowUp;
pub const USER: Icon = icondata::BsPerson;

// =============================================================================
// File Types
// =============================================================================

pub const FOLDER: Icon = icondata::BsFolderFill;
pub const GIT: Icon = icondata::BsGit;
pub const FILE_CODE: Icon = icondata::BsFileEarmarkCode;
pub const FILE_PDF: Icon = icondata::BsFileEarmarkPdf;
pub const FILE_ZIP: Icon = icondata::BsFileEarmarkZip;
pub const FILE_AUDIO: Icon = icondata::BsFileEarmarkMusic;
pub const FILE_IMAGE: Icon = icondata::BsFileEarmarkImage;
pub const FILE_TEXT: Icon = icondata::BsFileEarmarkText;
pub const APPLE: Icon = icondata::BsApple;
pub const ANDROID: Icon = icondata::BsAndroid2;
pub const WINDOWS: Icon = icondata::BsWindows;

/// Icon for a listing entry category.
pub fn file_icon(kind: FileIcon) -> Icon {
    match kind {
        FileIcon::Git => GIT,
        FileIcon::Folder => FOLDER,
        FileIcon::Code => FILE_CODE,
        FileIcon::Pdf => FILE_PDF,
        FileIcon::Archive => FILE_ZIP,
        FileIcon::Audio => FILE_AUDIO,
        FileIcon::Image => FILE_IMAGE,
        FileIcon::Apple => APPLE,
        FileIcon::Android => ANDROID,
        FileIcon::Windows => WINDOWS,
        FileIcon::Text => FILE_TEXT,
    }
}
