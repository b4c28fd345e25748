// region:    --- Modules

mod apply_report;
mod collection_drive;
mod error;
mod patcher;
mod rewrite;
mod rewrites;

pub use apply_report::*;
pub use collection_drive::*;
pub use error::*;
pub use patcher::*;
pub use rewrite::*;
pub use rewrites::*;

// endregion: --- Modules
