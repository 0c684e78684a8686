//! Places where the ledger snapshot can be saved.

mod key_value;
#[cfg(test)]
mod memory;
mod sqlite;

pub use key_value::KeyValueStore;
#[cfg(test)]
pub use memory::MemoryKeyValueStore;
pub use sqlite::SQLiteKeyValueStore;
