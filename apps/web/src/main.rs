//! Browser build. Uses the default configuration and the Dioxus console logger.

use atlas_countries::CountryClient;
use atlas_domain::config::AtlasConfig;
use atlas_ui::App;
use dioxus::prelude::*;
use tracing::{error, info};

fn main() {
    dioxus::logger::initialize_default();

    let config = AtlasConfig::default();
    match CountryClient::from_config(&config.api) {
        Ok(client) => {
            info!(base_url = %config.api.base_url, "Starting World Explorer");
            LaunchBuilder::web().with_context(config).with_context(client).launch(App);
        }
        Err(err) => error!(%err, "World Explorer cannot reach the countries API"),
    }
}
