use std::sync::Arc;

use services::SurveyService;

pub trait UiApp: Send + Sync {
    fn survey_service(&self) -> Arc<SurveyService>;

    fn title(&self) -> String {
        self.survey_service().title().to_string()
    }
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    survey_service: Arc<SurveyService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title(),
            survey_service: app.survey_service(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn survey_service(&self) -> Arc<SurveyService> {
        Arc::clone(&self.survey_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
