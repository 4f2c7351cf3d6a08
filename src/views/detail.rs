use std::sync::Arc;

use super::{Navigator, Route};
use crate::profile::Profile;
use crate::store::ProfileStore;
use fs_storage::BaseStorage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    NotFound,
    Loaded(Profile),
}

/// Read-only view of a single profile
pub struct DetailView<S> {
    store: Arc<ProfileStore<S>>,
    id: String,
    state: DetailState,
}

impl<S: BaseStorage> DetailView<S> {
    pub fn new(store: Arc<ProfileStore<S>>, id: String) -> Self {
        Self {
            store,
            id,
            state: DetailState::Loading,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Reload the profile. Call on first display and on every focus.
    /// A storage failure is shown as "not found".
    pub async fn refresh(&mut self) -> &DetailState {
        self.state = DetailState::Loading;
        self.state = match self.store.get_by_id(&self.id).await {
            Ok(Some(profile)) => DetailState::Loaded(profile),
            Ok(None) => DetailState::NotFound,
            Err(err) => {
                log::error!("Failed to load profile {}: {}", self.id, err);
                DetailState::NotFound
            }
        };
        &self.state
    }

    /// Open the edit form. Only available once the profile is shown.
    pub fn edit(&self, navigator: &mut impl Navigator) -> bool {
        match &self.state {
            DetailState::Loaded(profile) => {
                navigator.navigate(Route::Edit {
                    id: profile.id.clone(),
                });
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialize;
    use crate::views::testing::RecordingNavigator;
    use fs_storage::MemoryStorage;

    fn store() -> Arc<ProfileStore<MemoryStorage>> {
        initialize();
        Arc::new(ProfileStore::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn shows_profile_and_opens_editor() {
        let mut view = DetailView::new(store(), "3".to_owned());
        let mut navigator = RecordingNavigator::default();
        assert_eq!(view.state(), &DetailState::Loading);
        assert!(!view.edit(&mut navigator));

        match view.refresh().await {
            DetailState::Loaded(profile) => {
                assert_eq!(profile.full_name(), "Maria Oliveira");
                assert_eq!(profile.initials(), "MO");
            }
            state => panic!("unexpected state {:?}", state),
        }

        assert!(view.edit(&mut navigator));
        assert_eq!(navigator.routes, [Route::Edit { id: "3".to_owned() }]);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let mut view = DetailView::new(store(), "42".to_owned());
        let mut navigator = RecordingNavigator::default();

        assert_eq!(view.refresh().await, &DetailState::NotFound);
        assert!(!view.edit(&mut navigator));
        assert!(navigator.routes.is_empty());
    }

    #[tokio::test]
    async fn refresh_reflects_saved_edits() {
        let store = store();
        let mut view = DetailView::new(store.clone(), "5".to_owned());
        view.refresh().await;

        let mut draft = store.get_by_id("5").await.unwrap().unwrap();
        draft.program = "Estatística".to_owned();
        store.update("5", draft.clone()).await.unwrap();

        assert_eq!(view.refresh().await, &DetailState::Loaded(draft));
    }

    #[tokio::test]
    async fn read_failure_is_not_found() {
        let store = store();
        store.storage().fail_reads(true);
        let mut view = DetailView::new(store, "1".to_owned());

        assert_eq!(view.refresh().await, &DetailState::NotFound);
    }
}
