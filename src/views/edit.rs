use std::sync::Arc;

use super::{Alert, Navigator};
use crate::profile::{Profile, ProfileField};
use crate::store::ProfileStore;
use crate::validation::{validate, ValidationError};
use fs_storage::BaseStorage;

const ERROR_TITLE: &str = "Error";
const SUCCESS_TITLE: &str = "Success";
const SAVED_MESSAGE: &str = "Profile updated successfully!";
const SAVE_FAILED_MESSAGE: &str = "Could not save the profile";
const NOT_FOUND_MESSAGE: &str = "Profile not found";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Invalid(ValidationError),
    NotFound,
    Failed,
}

/// Edit form holding a local draft of one profile
pub struct EditView<S> {
    store: Arc<ProfileStore<S>>,
    id: String,
    draft: Profile,
    loading: bool,
    found: bool,
}

impl<S: BaseStorage> EditView<S> {
    pub fn new(store: Arc<ProfileStore<S>>, id: String) -> Self {
        Self {
            store,
            id,
            draft: Profile::default(),
            loading: true,
            found: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the last `activate` loaded a stored profile
    pub fn found(&self) -> bool {
        self.found
    }

    pub fn draft(&self) -> &Profile {
        &self.draft
    }

    /// Load the stored profile into the draft.
    /// An unknown id or a storage failure leaves the draft as it was
    /// and the view in the not-found state.
    pub async fn activate(&mut self) -> bool {
        self.loading = true;
        self.found = match self.store.get_by_id(&self.id).await {
            Ok(Some(profile)) => {
                self.draft = profile;
                true
            }
            Ok(None) => {
                log::warn!("Profile {} not found", self.id);
                false
            }
            Err(err) => {
                log::error!("Failed to load profile {}: {}", self.id, err);
                false
            }
        };
        self.loading = false;
        self.found
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        self.draft.set_field(field, value.into());
    }

    /// Validate the draft and replace the stored profile with it.
    ///
    /// On success the user acknowledges a confirmation and the view
    /// navigates back. A draft that was not loaded from storage,
    /// invalid drafts and failed writes are reported through `alert`
    /// and the view stays open.
    pub async fn save(
        &mut self,
        navigator: &mut impl Navigator,
        alert: &mut impl Alert,
    ) -> SaveOutcome {
        if !self.found {
            alert.alert(ERROR_TITLE, NOT_FOUND_MESSAGE);
            return SaveOutcome::NotFound;
        }

        if let Err(err) = validate(&self.draft) {
            alert.alert(ERROR_TITLE, &err.to_string());
            return SaveOutcome::Invalid(err);
        }

        match self.store.update(&self.id, self.draft.clone()).await {
            Ok(_) => {
                alert.confirm(SUCCESS_TITLE, SAVED_MESSAGE);
                navigator.back();
                SaveOutcome::Saved
            }
            Err(err) => {
                log::error!("Failed to save profile {}: {}", self.id, err);
                alert.alert(ERROR_TITLE, SAVE_FAILED_MESSAGE);
                SaveOutcome::Failed
            }
        }
    }

    /// Discard the draft and go back without writing anything
    pub fn cancel(self, navigator: &mut impl Navigator) {
        navigator.back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialize;
    use crate::seed::seed_profiles;
    use crate::views::testing::{RecordingAlert, RecordingNavigator};
    use fs_storage::MemoryStorage;

    async fn opened(id: &str) -> EditView<MemoryStorage> {
        initialize();
        let store = Arc::new(ProfileStore::new(MemoryStorage::new()));
        let mut view = EditView::new(store, id.to_owned());
        view.activate().await;
        view
    }

    #[tokio::test]
    async fn draft_starts_from_stored_profile() {
        initialize();
        let store = Arc::new(ProfileStore::new(MemoryStorage::new()));
        let mut view = EditView::new(store, "1".to_owned());
        assert!(view.is_loading());
        assert_eq!(view.draft(), &Profile::default());

        assert!(view.activate().await);
        assert!(!view.is_loading());
        assert!(view.found());
        assert_eq!(view.draft(), &seed_profiles()[0]);
    }

    #[tokio::test]
    async fn unknown_id_keeps_blank_draft() {
        let view = opened("404").await;
        assert!(!view.is_loading());
        assert!(!view.found());
        assert_eq!(view.draft(), &Profile::default());
    }

    #[tokio::test]
    async fn unknown_id_is_never_saved() {
        let mut view = opened("999").await;
        let mut navigator = RecordingNavigator::default();
        let mut alert = RecordingAlert::default();
        let writes = view.store.storage().writes();

        view.set_field(ProfileField::GivenName, "X");
        view.set_field(ProfileField::FamilyName, "Y");
        assert_eq!(
            view.save(&mut navigator, &mut alert).await,
            SaveOutcome::NotFound
        );

        assert_eq!(
            alert.alerts,
            [(ERROR_TITLE.to_owned(), NOT_FOUND_MESSAGE.to_owned())]
        );
        assert!(alert.confirmations.is_empty());
        assert_eq!(navigator.backs, 0);
        assert_eq!(view.store.storage().writes(), writes);
        assert_eq!(view.store.get_by_id("999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn read_failure_blocks_saving() {
        let mut view = opened("1").await;
        view.store.storage().fail_reads(true);
        assert!(!view.activate().await);
        view.store.storage().fail_reads(false);

        let mut navigator = RecordingNavigator::default();
        let mut alert = RecordingAlert::default();
        assert_eq!(
            view.save(&mut navigator, &mut alert).await,
            SaveOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn save_persists_confirms_and_goes_back() {
        let mut view = opened("2").await;
        let mut navigator = RecordingNavigator::default();
        let mut alert = RecordingAlert::default();

        view.set_field(ProfileField::GivenName, "Carla");
        view.set_field(ProfileField::Age, "26");
        let outcome = view.save(&mut navigator, &mut alert).await;

        assert_eq!(outcome, SaveOutcome::Saved);
        assert_eq!(
            alert.confirmations,
            [(SUCCESS_TITLE.to_owned(), SAVED_MESSAGE.to_owned())]
        );
        assert_eq!(navigator.backs, 1);

        let stored = view.store.get_by_id("2").await.unwrap().unwrap();
        assert_eq!(stored.given_name, "Carla");
        assert_eq!(stored.age, "26");
        assert_eq!(stored.family_name, "Santos");
    }

    #[tokio::test]
    async fn invalid_draft_is_never_written() {
        let mut view = opened("1").await;
        let mut navigator = RecordingNavigator::default();
        let mut alert = RecordingAlert::default();
        let writes = view.store.storage().writes();

        view.set_field(ProfileField::GivenName, "   ");
        assert_eq!(
            view.save(&mut navigator, &mut alert).await,
            SaveOutcome::Invalid(ValidationError::MissingName)
        );

        view.set_field(ProfileField::GivenName, "Ana");
        view.set_field(ProfileField::Age, "vinte");
        assert_eq!(
            view.save(&mut navigator, &mut alert).await,
            SaveOutcome::Invalid(ValidationError::InvalidAge)
        );

        assert_eq!(alert.alerts.len(), 2);
        assert!(alert.confirmations.is_empty());
        assert_eq!(navigator.backs, 0);
        assert_eq!(view.store.storage().writes(), writes);
        assert_eq!(view.store.load_all().await.unwrap(), seed_profiles());
    }

    #[tokio::test]
    async fn write_failure_is_reported() {
        let mut view = opened("3").await;
        let mut navigator = RecordingNavigator::default();
        let mut alert = RecordingAlert::default();

        view.store.storage().fail_writes(true);
        view.set_field(ProfileField::Program, "Design");
        assert_eq!(
            view.save(&mut navigator, &mut alert).await,
            SaveOutcome::Failed
        );
        assert_eq!(
            alert.alerts,
            [(ERROR_TITLE.to_owned(), SAVE_FAILED_MESSAGE.to_owned())]
        );
        assert_eq!(navigator.backs, 0);
    }

    #[tokio::test]
    async fn cancel_discards_draft() {
        let mut view = opened("4").await;
        let store = view.store.clone();
        let mut navigator = RecordingNavigator::default();

        view.set_field(ProfileField::FamilyName, "Changed");
        view.cancel(&mut navigator);

        assert_eq!(navigator.backs, 1);
        let stored = store.get_by_id("4").await.unwrap().unwrap();
        assert_eq!(stored.family_name, "Costa");
    }
}
