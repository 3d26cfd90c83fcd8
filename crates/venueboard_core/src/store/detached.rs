use super::{KeyValueStore, StoreError, StoreResult};

/// Store used when no persistent backend exists.
///
/// Reads behave as if nothing was ever saved so a board can still render;
/// every write fails with `StoreError::Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedStore;

impl KeyValueStore for DetachedStore {
    fn is_available(&self) -> bool {
        false
    }

    fn read(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    fn write(&self, _key: &str, _payload: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable)
    }
}
