use crate::Error;

/// Saves and loads string values by key.
///
/// Implementations only need to keep the most recent value for each key.
pub trait KeyValueStore: Send {
    /// Get the value saved under `key`, or `None` if nothing has been saved.
    ///
    /// # Errors
    /// Returns [Error::StorageUnavailable] if the storage medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Save `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    /// Returns [Error::StorageUnavailable] if the value could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}
