//! Widget plugins for Blossom documents.
//!
//! A [`Plugin`] is a wrapper object attached to individual elements and
//! cached on the element itself under the plugin's namespaced key.
//! [`install`] is idempotent: the first call over an element constructs
//! the wrapper, every later call finds the cached one and leaves it
//! alone.

mod plugin;
pub use plugin::{install, installed, Plugin};

mod progress;
pub use progress::Progressbar;
