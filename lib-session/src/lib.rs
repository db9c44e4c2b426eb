//! Score and lives bookkeeping for a single play session.
//!
//! The session owns a [KvStore] which is only used to keep the
//! high score around between runs. Pick [PlatformStore] to get
//! a file on desktop and `localStorage` in the browser.

mod cfg;
mod session;

pub mod store;

pub use cfg::*;
pub use session::*;
pub use store::{KvStore, MemoryStore, PlatformStore, parse_high_score};
