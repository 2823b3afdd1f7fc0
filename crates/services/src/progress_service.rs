use std::sync::Arc;

use britpass_core::model::{Progress, SessionResult};
use storage::repository::ProgressRepository;

use crate::error::ProgressServiceError;

/// The single call site for loading and saving the persisted progress value.
///
/// `Progress` itself stays a plain value with pure update methods; this
/// service owns the load-at-startup / save-after-mutation side effects.
#[derive(Clone)]
pub struct ProgressService {
    repo: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(repo: Arc<dyn ProgressRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted progress; absent or unreadable records fall back to
    /// empty progress.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` only for backend failures.
    pub async fn load(&self) -> Result<Progress, ProgressServiceError> {
        Ok(self.repo.load_progress().await?.unwrap_or_default())
    }

    /// Append one finished session and persist the updated value.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if the record cannot be stored.
    pub async fn record(&self, result: SessionResult) -> Result<Progress, ProgressServiceError> {
        let mut progress = self.load().await?;
        progress.record(result);
        self.repo.save_progress(&progress).await?;
        Ok(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use britpass_core::model::TestMode;
    use britpass_core::time::fixed_now;
    use storage::repository::{InMemoryRepository, StorageError};

    fn result(correct: u32) -> SessionResult {
        SessionResult::from_counts(TestMode::Mock, correct, 24, fixed_now())
    }

    #[tokio::test]
    async fn load_falls_back_to_empty_progress() {
        let service = ProgressService::new(Arc::new(InMemoryRepository::new()));
        let progress = service.load().await.unwrap();
        assert!(progress.is_empty());
    }

    #[tokio::test]
    async fn record_appends_and_persists() {
        let repo = Arc::new(InMemoryRepository::new());
        let service = ProgressService::new(repo.clone());

        let updated = service.record(result(20)).await.unwrap();
        assert_eq!(updated.tests_taken(), 1);

        let updated = service.record(result(10)).await.unwrap();
        assert_eq!(updated.tests_taken(), 2);

        let reloaded = service.load().await.unwrap();
        assert_eq!(reloaded, updated);
        assert_eq!(reloaded.history()[0].correct(), 20);
    }

    struct FailingRepository;

    #[async_trait]
    impl ProgressRepository for FailingRepository {
        async fn load_progress(&self) -> Result<Option<Progress>, StorageError> {
            Ok(None)
        }

        async fn save_progress(&self, _progress: &Progress) -> Result<(), StorageError> {
            Err(StorageError::Connection("disk gone".into()))
        }
    }

    #[tokio::test]
    async fn record_propagates_storage_failures() {
        let service = ProgressService::new(Arc::new(FailingRepository));
        let err = service.record(result(20)).await.unwrap_err();
        assert!(matches!(
            err,
            ProgressServiceError::Storage(StorageError::Connection(_))
        ));
    }
}
