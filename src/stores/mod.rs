//! Contains the storage seam and the ledger store built on top of it.
//!
//! The ledger persists into a single named slot of a [KeyValueStore]. The
//! slot holds the whole ledger as a JSON array and every mutation rewrites it.

mod file;
mod key_value;
mod ledger;
mod memory;

pub use file::FileStore;
pub use key_value::{KeyValueStore, validate_key};
pub use ledger::{DEFAULT_SLOT, LedgerStore};
pub use memory::MemoryStore;
