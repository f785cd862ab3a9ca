//! Application state shared across handlers

use crate::config::Settings;
use crate::render::{HtmlSurface, Renderer};
use crate::search::SearchClient;
use std::sync::{Arc, RwLock};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Upstream search client
    pub client: Arc<SearchClient>,
    /// The single display surface, shared by all page requests
    pub display: Arc<RwLock<Renderer<HtmlSurface>>>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: SearchClient) -> anyhow::Result<Self> {
        let settings = Arc::new(settings);
        let client = Arc::new(client);
        let display = Arc::new(RwLock::new(Renderer::new(HtmlSurface::new())));
        let templates = Arc::new(super::Templates::new()?);

        Ok(Self {
            settings,
            client,
            display,
            templates,
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
