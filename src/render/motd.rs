//! MOTD banner markup

use crate::theme::MotdConfig;

/// Output when neither title nor subtitle is set
pub const NO_MOTD: &str = "<!-- No MOTD content configured. -->";

/// Render the MOTD banner HTML
pub fn render_motd(motd: &MotdConfig) -> String {
    if motd.title.is_empty() && motd.subtitle.is_empty() {
        return NO_MOTD.to_string();
    }

    format!(
        "<center>\n    <br />\n    <div id=\"motd-container\">\n        <h2 id=\"motd-subtitle\">{}</h2>\n        <h1 id=\"motd-title\">{}</h1>\n    </div>\n</center>",
        escape_angles(&motd.subtitle),
        escape_angles(&motd.title)
    )
}

fn escape_angles(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}
