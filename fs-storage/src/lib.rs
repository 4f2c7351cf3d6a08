pub mod base_storage;
pub mod file_storage;
pub mod memory_storage;
mod utils;

pub use base_storage::BaseStorage;
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

// Default location of the data folder, relative to the working directory
pub const STORAGE_FOLDER: &str = ".profiles";

// Temporary files are written next to their target so that the final rename
// never crosses a filesystem boundary
pub const TEMP_FILE_PREFIX: &str = ".tmp-";
