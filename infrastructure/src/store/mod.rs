//! Session store adapters.
//!
//! - [`FileSessionStore`] — one plain-text file holding the session id
//! - [`MemorySessionStore`] — process-local, for when no data directory exists

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
