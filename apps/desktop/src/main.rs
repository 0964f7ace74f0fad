use anyhow::Context;
use atlas_desktop::DesktopApp;
use atlas_kernel::config::load_app_config;
use atlas_logger::Logger;
use atlas_ui::App;

/// Overrides the configuration file location (`atlas.toml` in the working directory otherwise).
const CONFIG_PATH_VAR: &str = "ATLAS_CONFIG";

fn main() -> anyhow::Result<()> {
    let cfg = load_app_config(std::env::var_os(CONFIG_PATH_VAR))
        .context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    DesktopApp::new(cfg).launch(App).context("Failed to start World Explorer")
}
