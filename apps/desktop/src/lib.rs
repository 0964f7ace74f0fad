use atlas_countries::{CountryClient, CountryError};
use atlas_domain::config::AtlasConfig;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing::info;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    config: AtlasConfig,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::new(AtlasConfig::default())
    }
}

impl DesktopApp {
    /// A window titled after `config.ui.title`.
    #[must_use]
    pub fn new(config: AtlasConfig) -> Self {
        Self { title: config.ui.title.clone(), width: 1280.0, height: 860.0, config }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and blocks until it is closed.
    ///
    /// The configuration and a [`CountryClient`] built from it are provided as root contexts.
    ///
    /// # Errors
    /// Fails before any window is created when the API settings are unusable.
    pub fn launch(self, root: fn() -> Element) -> Result<(), CountryError> {
        let client = CountryClient::from_config(&self.config.api)?;

        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        info!(title = %self.title, base_url = %self.config.api.base_url, "Opening window");

        LaunchBuilder::desktop().with_cfg(cfg).with_context(self.config).with_context(client).launch(root);
        Ok(())
    }
}
