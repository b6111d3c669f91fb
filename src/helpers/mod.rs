//! Helper functions for page assembly
//!
//! Small building blocks shared by the page renderers: URL generation,
//! escaping, tag helpers and date formatting.

mod date;
mod html;
mod url;

pub use self::date::*;
pub use self::html::*;
pub use self::url::*;
