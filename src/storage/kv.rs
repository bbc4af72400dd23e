use crate::types::errors::StorageError;

/// Raw key-value backend: a single flat namespace of string keys to UTF-8
/// serialized values.
///
/// Implementations are fallible; the [`StoreAdapter`](crate::storage::StoreAdapter)
/// layered on top is what gives the rest of the app its never-raises contract.
pub trait KeyValueStore {
    /// Returns the value stored at `key`, or `None` if absent.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` at `key`, overwriting any previous value. A failed
    /// write must leave the previously stored value untouched.
    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Absence of the key is not an error.
    fn remove_raw(&mut self, key: &str) -> Result<(), StorageError>;
}
