//! Theme renderer
//!
//! Pure mapping from a `ThemeConfig` to the three paste-in artifacts:
//! - Channel CSS
//! - Channel JavaScript
//! - MOTD HTML
//!
//! Same input, same output. No I/O.

mod blocks;
mod css;
mod format;
mod js;
mod motd;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeConfig;

pub use css::{render_css, username_class};
pub use format::format_advanced_css;
pub use js::{render_js, NO_JS};
pub use motd::{render_motd, NO_MOTD};

/// Rendered artifacts for one config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedTheme {
    pub css: String,
    pub js: String,
    pub motd_html: String,
}

/// Render all three artifacts
pub fn render(config: &ThemeConfig) -> RenderedTheme {
    RenderedTheme {
        css: render_css(config),
        js: render_js(config),
        motd_html: render_motd(&config.motd),
    }
}
