use std::{path::PathBuf, sync::Arc};

use weather_core::WeatherProxy;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub proxy: Arc<WeatherProxy>,
    /// Directory served for any path the API does not handle.
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(proxy: WeatherProxy) -> Self {
        Self { proxy: Arc::new(proxy), static_dir: None }
    }

    pub fn with_static_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.static_dir = dir;
        self
    }
}
