use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::base_storage::BaseStorage;
use crate::utils::{random_suffix, validate_key};
use crate::TEMP_FILE_PREFIX;
use data_error::{Result, StoreError};

/// Key-value storage persisting every key as a separate file
/// inside one folder.
///
/// A value is first written to a temporary file in the same folder
/// and then renamed over the previous one, so readers never
/// observe a partially written value.
pub struct FileStorage {
    label: String,
    root: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with a diagnostic label and folder path.
    /// The folder is created lazily on the first write.
    pub fn new(label: String, root: &Path) -> Self {
        Self {
            label,
            root: PathBuf::from(root),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the file backing `key`
    pub fn path(&self, key: &str) -> Result<PathBuf> {
        Ok(self.root.join(validate_key(key)?))
    }

    fn storage_error(&self, err: impl ToString) -> StoreError {
        StoreError::Storage(self.label.clone(), err.to_string())
    }
}

impl BaseStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => {
                log::debug!(
                    "{} read {} bytes from {}",
                    self.label,
                    value.len(),
                    path.display()
                );
                Ok(Some(value))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.storage_error(err)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.path(key)?;
        fs::create_dir_all(&self.root)
            .await
            .map_err(|err| self.storage_error(err))?;

        let tmp = self.root.join(format!(
            "{}{}.{}",
            TEMP_FILE_PREFIX,
            key,
            random_suffix()
        ));
        if let Err(err) = fs::write(&tmp, value.as_bytes()).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(self.storage_error(err));
        }
        if let Err(err) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(self.storage_error(err));
        }

        log::info!(
            "{} {} bytes have been written to {}",
            self.label,
            value.len(),
            path.display()
        );
        Ok(())
    }
}
