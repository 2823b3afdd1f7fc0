use std::sync::Arc;

use britpass_core::{Bank, Clock};
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::session_flow::SessionFlowService;
use crate::tutor_service::TutorService;

/// Assembles the app-facing services over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    bank: Arc<Bank>,
    session_flow: Arc<SessionFlowService>,
    progress: Arc<ProgressService>,
    tutor: Arc<TutorService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or bank loading
    /// fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::with_storage(storage, clock)
    }

    /// Build services over an existing storage backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the embedded bank fails validation.
    pub fn with_storage(storage: Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let bank = Arc::new(Bank::life_in_uk()?);
        let progress = Arc::new(ProgressService::new(Arc::clone(&storage.progress)));
        let session_flow = Arc::new(SessionFlowService::new(
            clock,
            Arc::clone(&bank),
            Arc::clone(&progress),
        ));
        let tutor = Arc::new(TutorService::from_env());

        Ok(Self {
            bank,
            session_flow,
            progress,
            tutor,
        })
    }

    #[must_use]
    pub fn bank(&self) -> Arc<Bank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn session_flow(&self) -> Arc<SessionFlowService> {
        Arc::clone(&self.session_flow)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn tutor(&self) -> Arc<TutorService> {
        Arc::clone(&self.tutor)
    }
}
