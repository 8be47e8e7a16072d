//! Document tools: read and edit.

pub mod edit;
pub mod read;

pub use edit::{EditDocContentsParams, EditDocContentsTool};
pub use read::{ReadDocContentsParams, ReadDocContentsTool};
