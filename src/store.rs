use std::collections::HashSet;

use crate::profile::Profile;
use crate::seed::seed_profiles;
use crate::PROFILES_KEY;
use data_error::{Result, StoreError};
use fs_storage::BaseStorage;

/// Ordered collection of profiles persisted as one JSON array
/// under a single storage key.
///
/// Every mutation reads the whole collection, modifies it and writes
/// it back. There is no locking between calls: two mutations in flight
/// at once resolve as last-write-wins.
pub struct ProfileStore<S> {
    storage: S,
    key: String,
}

impl<S: BaseStorage> ProfileStore<S> {
    /// Store persisting under the default `users` key
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, PROFILES_KEY)
    }

    pub fn with_key(storage: S, key: &str) -> Self {
        Self {
            storage,
            key: key.to_owned(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the persisted collection.
    ///
    /// When nothing has been persisted yet the sample collection is
    /// written and returned. A value that fails to parse, has records
    /// with unexpected fields, or holds empty or repeated identifiers
    /// is reported as an error and left untouched.
    pub async fn load_all(&self) -> Result<Vec<Profile>> {
        match self.storage.get(&self.key).await? {
            Some(raw) => {
                let profiles: Vec<Profile> = serde_json::from_str(&raw)
                    .map_err(|err| {
                        log::error!(
                            "Collection under {} is unreadable: {}",
                            self.key,
                            err
                        );
                        StoreError::from(err)
                    })?;
                check_ids(&profiles).map_err(|err| {
                    log::error!(
                        "Collection under {} is inconsistent: {}",
                        self.key,
                        err
                    );
                    err
                })?;
                log::debug!("Loaded {} profiles", profiles.len());
                Ok(profiles)
            }
            None => {
                log::info!("No collection under {}, seeding", self.key);
                let profiles = seed_profiles();
                self.persist(&profiles).await?;
                Ok(profiles)
            }
        }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Profile>> {
        let profiles = self.load_all().await?;
        Ok(profiles.into_iter().find(|profile| profile.id == id))
    }

    /// Add a record at the end of the collection.
    ///
    /// The identifier is chosen by the caller and must be non-empty
    /// and not yet present; otherwise nothing is written.
    pub async fn append(&self, profile: Profile) -> Result<Vec<Profile>> {
        if profile.id.is_empty() {
            return Err(StoreError::InvalidId(profile.id));
        }

        let mut profiles = self.load_all().await?;
        if profiles.iter().any(|p| p.id == profile.id) {
            return Err(StoreError::DuplicateId(profile.id));
        }

        profiles.push(profile);
        self.persist(&profiles).await?;
        Ok(profiles)
    }

    /// Replace the record stored under `id` with `profile`.
    ///
    /// The stored record always keeps `id`, whatever identifier
    /// `profile` carries. An unknown `id` writes the collection back
    /// unchanged.
    pub async fn update(
        &self,
        id: &str,
        mut profile: Profile,
    ) -> Result<Vec<Profile>> {
        let mut profiles = self.load_all().await?;
        profile.id = id.to_owned();

        match profiles.iter_mut().find(|p| p.id == id) {
            Some(slot) => *slot = profile,
            None => log::warn!("No profile with id {}, nothing to update", id),
        }

        self.persist(&profiles).await?;
        Ok(profiles)
    }

    async fn persist(&self, profiles: &[Profile]) -> Result<()> {
        let raw = serde_json::to_string(profiles)?;
        self.storage.set(&self.key, raw).await?;
        log::info!(
            "{} profiles have been written under {}",
            profiles.len(),
            self.key
        );
        Ok(())
    }
}

/// Every identifier must be non-empty and unique within the collection
fn check_ids(profiles: &[Profile]) -> Result<()> {
    let mut seen = HashSet::with_capacity(profiles.len());
    for profile in profiles {
        if profile.id.is_empty() {
            return Err(StoreError::Parse(
                "Stored profile has an empty id".to_owned(),
            ));
        }
        if !seen.insert(profile.id.as_str()) {
            return Err(StoreError::Parse(format!(
                "Stored profile id {} is not unique",
                profile.id
            )));
        }
    }
    Ok(())
}
