use std::sync::Arc;

use services::AssessmentLoopService;

pub trait UiApp: Send + Sync {
    fn assessment_loop(&self) -> Arc<AssessmentLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    assessment_loop: Arc<AssessmentLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            assessment_loop: app.assessment_loop(),
        }
    }

    #[must_use]
    pub fn assessment_loop(&self) -> Arc<AssessmentLoopService> {
        Arc::clone(&self.assessment_loop)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
