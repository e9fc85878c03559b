use thiserror::Error;

use crate::ElementId;

/// Errors from resolving element handles against a document.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomError {
    /// The handle does not refer to a live element, either because it
    /// was removed or because it belongs to a different document.
    #[error("element {0:?} is not in this document")]
    StaleElement(ElementId),
}
