use data_error::{Result, StoreError};

use crate::TEMP_FILE_PREFIX;

/// Checks that a storage key can be used verbatim as a file name
/// inside the storage folder.
///
/// Keys are flat: separators, parent references and names
/// that collide with temporary files are rejected.
pub fn validate_key(key: &str) -> Result<&str> {
    let invalid = key.is_empty()
        || key == "."
        || key == ".."
        || key.starts_with(TEMP_FILE_PREFIX)
        || key
            .chars()
            .any(|c| c == '/' || c == '\\' || c == '\0');

    if invalid {
        return Err(StoreError::Storage(
            key.to_owned(),
            "Key cannot be used as a file name".to_owned(),
        ));
    }
    Ok(key)
}

/// Random alphanumeric suffix for temporary files
pub fn random_suffix() -> String {
    std::iter::repeat_with(fastrand::alphanumeric)
        .take(10)
        .collect()
}
