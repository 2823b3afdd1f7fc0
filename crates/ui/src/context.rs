use std::sync::Arc;

use services::{ProgressService, SessionFlowService, TutorService};

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn session_flow(&self) -> Arc<SessionFlowService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn tutor(&self) -> Arc<TutorService>;
}

#[derive(Clone)]
pub struct AppContext {
    session_flow: Arc<SessionFlowService>,
    progress: Arc<ProgressService>,
    tutor: Arc<TutorService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session_flow: app.session_flow(),
            progress: app.progress(),
            tutor: app.tutor(),
        }
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

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
