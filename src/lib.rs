//! Client-side synchronizer for a remote user directory.
//!
//! [`store::UserListSynchronizer`] owns a newest-first in-memory projection
//! of the collection served by a REST user directory and keeps it consistent
//! after each successful mutation without re-fetching. The wire side lives
//! behind [`directory::UserDirectory`], so tests can drive the store with a
//! stub backend.

pub mod directory;
pub mod error;
pub mod helpers;
pub mod models;
pub mod store;
