//! A retained element store with per-element data caches.
//!
//! This crate supplies the three things Blossom widgets need from their
//! host: creating and selecting elements ([`Document`]), iterating over
//! a selected collection ([`Selection`]), and stashing arbitrary typed
//! state on an individual element under a namespaced string key
//! ([`DataCache`]). Widgets themselves live in `blossom-widgets`.

mod cache;
mod document;
mod error;
mod selection;

pub use cache::DataCache;
pub use document::{Document, ElementId};
pub use error::DomError;
pub use selection::Selection;

pub mod prelude {
    pub use crate::{DataCache, Document, DomError, ElementId, Selection};
}
