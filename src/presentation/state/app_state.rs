use std::sync::Arc;

use crate::application::services::GenerationController;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<GenerationController>,
    pub settings: Settings,
}
