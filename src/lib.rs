pub mod config;
pub mod id;
pub mod profile;
pub mod seed;
pub mod store;
pub mod validation;
pub mod views;

pub use data_error::{Result, StoreError};
pub use fs_storage::{BaseStorage, FileStorage, MemoryStorage};

pub use config::StoreConfig;
pub use profile::Profile;
pub use store::ProfileStore;

// Storage key holding the whole profile collection
pub const PROFILES_KEY: &str = "users";

// Display defaults for newly created profiles
pub const DEFAULT_AVATAR: &str = "👤";
pub const DEFAULT_COLOR: &str = "#3498db";

#[cfg(test)]
pub(crate) fn initialize() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .try_init();
    });
}
