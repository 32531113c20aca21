//! Channel script generation

use super::blocks::{self, DRAMATIC_LIGHTING_JS, IMAGE_URLS_PLACEHOLDER};
use crate::theme::{JavascriptConfig, JsFeature, ThemeConfig};

/// Output when nothing needs a script
pub const NO_JS: &str = "// No JavaScript features enabled.";

const PROLOGUE: &str = r#"/*
  Cytube Theme Script
  Generated by Cytube CSS Generator
*/

(function() {
  'use strict';

  // Wait for the window to load to ensure all elements are present
  if (document.readyState === 'complete' || document.readyState === 'interactive') {
    init();
  } else {
    window.addEventListener('DOMContentLoaded', init);
  }

  /*
   * =================================================================================
   * Main Initialization Function
   * =================================================================================
   */
  function init() {
"#;

const EPILOGUE: &str = "\n  } // End of init()\n})(); // End of main IIFE\n";

/// Render the channel script
pub fn render_js(config: &ThemeConfig) -> String {
    let javascript = &config.javascript;
    let dramatic = config.css_effects.dramatic_lighting;

    if !needs_script(javascript, dramatic) {
        return NO_JS.to_string();
    }

    let mut script = String::from(PROLOGUE);

    if !javascript.welcome_message.is_empty() {
        script.push_str("\n    // --- Welcome Alert ---\n");
        script.push_str("    // Displays a welcome message when the script loads.\n");
        script.push_str(&format!(
            "    alert('{}');\n",
            js_string_escape(&javascript.welcome_message)
        ));
    }

    for feature in JsFeature::ALL {
        if !javascript.is_enabled(*feature) {
            continue;
        }
        let Some(snippet) = blocks::js_snippet(*feature) else {
            continue;
        };
        script.push('\n');
        if *feature == JsFeature::FloatingImages {
            script.push_str(&snippet.replace(IMAGE_URLS_PLACEHOLDER, &image_url_array(javascript)));
        } else {
            script.push_str(snippet);
        }
    }

    if dramatic {
        script.push('\n');
        script.push_str(DRAMATIC_LIGHTING_JS);
    }

    script.push_str(EPILOGUE);
    script
}

/// Whether any part of the config produces script output
///
/// The image URL list alone does not: it only matters with floating images on.
fn needs_script(javascript: &JavascriptConfig, dramatic_lighting: bool) -> bool {
    javascript.any_enabled() || !javascript.welcome_message.is_empty() || dramatic_lighting
}

/// Escape text for a single-quoted JS string literal
fn js_string_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// Image URLs as a JSON array literal
fn image_url_array(javascript: &JavascriptConfig) -> String {
    serde_json::Value::from(javascript.image_urls()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_enabled() {
        let mut config = ThemeConfig::default();
        assert_eq!(render_js(&config), NO_JS);

        config.javascript.floating_image_urls = "https://a.example/x.png".to_string();
        assert_eq!(render_js(&config), NO_JS);
    }

    #[test]
    fn test_welcome_only() {
        let mut config = ThemeConfig::default();
        config.javascript.welcome_message = "It's\nhere \\o/".to_string();
        let js = render_js(&config);
        assert!(js.starts_with("/*\n  Cytube Theme Script\n"));
        assert!(js.contains("    alert('It\\'s\\nhere \\\\o/');\n"));
        assert!(js.ends_with("  } // End of init()\n})(); // End of main IIFE\n"));
        assert!(!js.contains("// --- Feature:"));
    }

    #[test]
    fn test_features_in_declaration_order() {
        let mut config = ThemeConfig::default();
        config.javascript.set(JsFeature::ChristmasSnow, true);
        config.javascript.set(JsFeature::CinematicMode, true);
        let js = render_js(&config);
        let cinematic = js.find("createCinematicToggleButton").unwrap();
        let snow = js.find("setupSnowCanvas").unwrap();
        assert!(cinematic < snow);
    }

    #[test]
    fn test_floating_images_embed_urls() {
        let mut config = ThemeConfig::default();
        config.javascript.set(JsFeature::FloatingImages, true);
        config.javascript.floating_image_urls =
            " https://a.example/1.png ,\n\nhttps://a.example/2.png,".to_string();
        let js = render_js(&config);
        assert!(js.contains(r#"const imageUrls = ["https://a.example/1.png","https://a.example/2.png"];"#));
        assert!(!js.contains(IMAGE_URLS_PLACEHOLDER));
    }

    #[test]
    fn test_floating_images_without_urls() {
        let mut config = ThemeConfig::default();
        config.javascript.set(JsFeature::FloatingImages, true);
        assert!(render_js(&config).contains("const imageUrls = [];"));
    }

    #[test]
    fn test_dramatic_lighting_tracker() {
        let mut config = ThemeConfig::default();
        config.css_effects.dramatic_lighting = true;
        let js = render_js(&config);
        assert!(js.contains("--mouse-x"));
        assert!(js.contains("function init()"));
    }

    #[test]
    fn test_js_string_escape() {
        assert_eq!(js_string_escape("plain"), "plain");
        assert_eq!(js_string_escape("a'b"), "a\\'b");
        assert_eq!(js_string_escape("a\\'b"), "a\\\\\\'b");
        assert_eq!(js_string_escape("x\r\ny"), "x\\r\\ny");
    }
}
