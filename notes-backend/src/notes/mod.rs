//! Page storage, one plain-text file per page under the notes-root.
//!
//! A page's title is its filesystem key (`<notes-root>/<title>.txt`), so the
//! store only accepts a validated [`PageTitle`].

pub mod page;
pub mod store;
pub mod title;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use page::{ListPageInfo, Page};
pub use store::PageStore;
pub use title::{PageAction, PageTitle};

#[derive(Debug, Error)]
pub enum PageError {
    /// Title is empty or contains something other than ASCII letters and digits
    #[error("invalid page title '{0}'")]
    InvalidTitle(String),

    /// Page file is missing or unreadable; callers treat both the same way
    #[error("failed to get page {title}: {source}")]
    NotFound {
        title: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write page {title}: {source}")]
    Write {
        title: String,
        #[source]
        source: io::Error,
    },
}
