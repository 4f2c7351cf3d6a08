use std::sync::Arc;

use super::{Navigator, Route};
use crate::id::next_profile_id;
use crate::profile::Profile;
use crate::store::ProfileStore;
use fs_storage::BaseStorage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Profile>),
}

/// All profiles in insertion order, plus the "add" action
pub struct ListView<S> {
    store: Arc<ProfileStore<S>>,
    state: ListState,
    last_error: Option<String>,
}

impl<S: BaseStorage> ListView<S> {
    pub fn new(store: Arc<ProfileStore<S>>) -> Self {
        Self {
            store,
            state: ListState::Loading,
            last_error: None,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn profiles(&self) -> &[Profile] {
        match &self.state {
            ListState::Loaded(profiles) => profiles,
            ListState::Loading => &[],
        }
    }

    /// Message of the last storage failure, cleared by a successful load
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Reload the collection. Call on first display and on every focus.
    /// A storage failure leaves the list empty.
    pub async fn refresh(&mut self) -> &ListState {
        self.state = ListState::Loading;
        match self.store.load_all().await {
            Ok(profiles) => {
                self.last_error = None;
                self.state = ListState::Loaded(profiles);
            }
            Err(err) => {
                log::error!("Failed to load profiles: {}", err);
                self.last_error = Some(err.to_string());
                self.state = ListState::Loaded(Vec::new());
            }
        }
        &self.state
    }

    pub fn select(&self, id: &str, navigator: &mut impl Navigator) {
        navigator.navigate(Route::Detail { id: id.to_owned() });
    }

    /// Create a blank profile, persist it and open it.
    /// Returns the new identifier, or `None` if nothing was created.
    pub async fn add(
        &mut self,
        navigator: &mut impl Navigator,
    ) -> Option<String> {
        let created = match next_profile_id() {
            Ok(id) => {
                let profile = Profile::blank(id.clone());
                self.store
                    .append(profile)
                    .await
                    .map(|profiles| (id, profiles))
            }
            Err(err) => Err(err),
        };

        match created {
            Ok((id, profiles)) => {
                self.last_error = None;
                self.state = ListState::Loaded(profiles);
                self.select(&id, navigator);
                Some(id)
            }
            Err(err) => {
                log::error!("Failed to add a profile: {}", err);
                self.last_error = Some(err.to_string());
                None
            }
        }
    }
}
