//! The persisted base map preference, kept in the webview's `localStorage`.

use atlas_domain::MAP_PREFERENCE_KEY;
use atlas_domain::catalog::MapStyle;
use dioxus::document;
use tracing::{debug, warn};

fn read_script() -> String {
    format!("return localStorage.getItem({MAP_PREFERENCE_KEY:?});")
}

fn write_script() -> String {
    format!("const src = await dioxus.recv(); localStorage.setItem({MAP_PREFERENCE_KEY:?}, src);")
}

/// The stored map, or `fallback` when nothing (or an unknown map) was saved.
pub(crate) async fn load_map_choice(fallback: &'static MapStyle) -> &'static MapStyle {
    match document::eval(&read_script()).join::<Option<String>>().await {
        Ok(Some(src)) => MapStyle::find(&src).unwrap_or_else(|| {
            debug!(%src, "Ignoring unknown stored map");
            fallback
        }),
        Ok(None) => fallback,
        Err(err) => {
            warn!(?err, "Failed to read the map preference");
            fallback
        }
    }
}

pub(crate) fn save_map_choice(src: &str) {
    let eval = document::eval(&write_script());
    if let Err(err) = eval.send(src) {
        warn!(?err, src, "Failed to persist the map preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_use_the_preference_key() {
        assert_eq!(read_script(), r#"return localStorage.getItem("selectedWorldMap");"#);
        assert!(write_script().contains(r#"localStorage.setItem("selectedWorldMap", src)"#));
    }
}
