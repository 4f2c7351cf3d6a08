use data_error::Result;
use std::future::Future;
use std::sync::Arc;

/// Asynchronous string key-value storage.
///
/// Implementations only guarantee that a single `set` is atomic:
/// a concurrent `get` observes either the old or the new value.
pub trait BaseStorage: Send + Sync {
    /// Read the value stored under `key`,
    /// or `None` if nothing has ever been written there.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Create or replace the value stored under `key`.
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<()>> + Send;
}

impl<S: BaseStorage> BaseStorage for Arc<S> {
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>>> + Send {
        (**self).get(key)
    }

    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<()>> + Send {
        (**self).set(key, value)
    }
}
