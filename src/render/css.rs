//! Stylesheet generation

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::blocks::{self, EFFECT_BLOCKS, JS_SUPPORT_CSS, MOTD_GLOW_CSS};
use super::format::format_advanced_css;
use crate::theme::{CssEffect, EffectGroup, ThemeConfig, UserStyle};

/// Characters not allowed in a chat class name
static USERNAME_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("valid regex"));

/// Render the channel stylesheet
pub fn render_css(config: &ThemeConfig) -> String {
    let mut css = String::new();

    if !config.font_import_url.is_empty() {
        css.push_str(&format!("@import url('{}');\n\n", config.font_import_url));
    }

    if config.has_motd_content() {
        push_motd(&mut css, config);
    }

    push_foundation(&mut css, config);
    push_user_styles(&mut css, &config.user_styles);
    push_layout(&mut css);
    push_effects(&mut css, config);
    push_misc(&mut css);
    push_js_support(&mut css, config);

    let advanced = config.advanced_css.trim();
    if !advanced.is_empty() {
        css.push_str("/* --- Advanced AI Generated CSS --- */\n\n");
        css.push_str(&format_advanced_css(advanced));
    }

    css.trim().to_string()
}

/// Class-safe form of a chat username
pub fn username_class(username: &str) -> String {
    USERNAME_CLASS_RE
        .replace_all(&username.to_lowercase(), "-")
        .into_owned()
}

/// Escape a value for a single-quoted CSS string
fn quote_escape(value: &str) -> String {
    value.replace('\'', "\\'")
}

fn push_block(css: &mut String, block: &str) {
    css.push_str(block.trim_end());
    css.push_str("\n\n");
}

fn push_motd(css: &mut String, config: &ThemeConfig) {
    let motd = &config.motd;
    let glow = config.css_effects.pulsating_motd_background;

    css.push_str("/* --- MOTD Banner --- */\n\n");
    if glow {
        push_block(css, MOTD_GLOW_CSS);
    }

    css.push_str("#motd-container {\n");
    css.push_str("    position: relative;\n");
    css.push_str("    text-align: center;\n");
    css.push_str("    color: white;\n");
    css.push_str("    max-width: 1500px;\n");
    css.push_str("    margin: 0 auto;\n");
    if !motd.background_image_url.is_empty() {
        css.push_str(&format!(
            "    background-image: linear-gradient(rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.5)), url('{}');\n",
            quote_escape(&motd.background_image_url)
        ));
    }
    css.push_str("    background-size: cover;\n");
    css.push_str("    background-position: center;\n");
    css.push_str("    min-height: 300px; /* Give it some height */\n");
    css.push_str("    display: flex;\n");
    css.push_str("    flex-direction: column;\n");
    css.push_str("    justify-content: center;\n");
    css.push_str("    align-items: center;\n");
    css.push_str("    border-radius: 12px;\n");
    css.push_str("    overflow: hidden;\n");
    if glow {
        css.push_str("    animation: pulsate-motd-glow 4s infinite ease-in-out;\n");
    }
    css.push_str("}\n\n");

    css.push_str(&format!(
        "#motd-subtitle {{\n    margin: 0;\n    color: {};\n    font-size: {};\n    text-shadow: {};\n    order: 2;\n}}\n\n",
        motd.subtitle_color, motd.subtitle_font_size, motd.subtitle_text_shadow
    ));
    css.push_str(&format!(
        "#motd-title {{\n    margin: 0;\n    color: {};\n    font-size: {};\n    text-shadow: {};\n    order: 1;\n}}\n\n",
        motd.title_color, motd.title_font_size, motd.title_text_shadow
    ));
}

fn push_foundation(css: &mut String, config: &ThemeConfig) {
    let f = &config.foundation;

    css.push_str("/* --- Foundation --- */\n\n");
    css.push_str("body {\n");
    css.push_str(&format!("    background-color: {};\n", f.body_bg_color));
    if !config.font_family_name.is_empty() {
        css.push_str(&format!(
            "    font-family: '{}', sans-serif;\n",
            config.font_family_name
        ));
    }
    css.push_str("}\n\n");

    css.push_str(&format!(
        "#messagebuffer {{\n    background-color: {};\n    color: {};\n}}\n\n",
        f.message_buffer_bg_color, f.chat_text_color
    ));
    css.push_str(&format!(
        "#messagebuffer a {{\n    color: {};\n}}\n\n",
        f.link_color
    ));
    css.push_str(&format!(
        ".timestamp {{\n    color: {};\n}}\n\n",
        f.timestamp_color
    ));
    css.push_str(&format!(
        "#userlist {{\n    background-color: {};\n    color: {} !important;\n}}\n\n",
        f.userlist_bg_color, f.userlist_text_color
    ));
    css.push_str(&format!(
        ".userlist_owner {{\n    color: {} !important;\n}}\n\n",
        f.owner_color
    ));

    let poll_background = if f.poll_well_bg_color == "transparent" {
        "none"
    } else {
        f.poll_well_bg_color.as_str()
    };
    css.push_str(&format!(
        "#pollwrap .well {{\n    background: {} !important;\n    color: {};\n    border: solid 1px {};\n    border-radius: 10px;\n}}\n\n",
        poll_background, f.poll_well_color, f.poll_well_color
    ));

    css.push_str("#queue>li {\n    background: none;\n    border-style: none;\n");
    if f.queue_item_border {
        css.push_str("    border-bottom: solid 0.5px !important;\n");
    }
    css.push_str("}\n\n");

    css.push_str(&format!(
        "#queue li.queue_active {{\n    background-color: {} !important;\n    color: {} !important;\n}}\n\n",
        f.queue_active_bg_color, f.queue_active_text_color
    ));
    css.push_str(&format!(
        ".navbar {{\n    background: {} !important;\n}}\n\n",
        f.navbar_bg_color
    ));
}

/// Rules for one user override, empty when nothing applies
fn user_style_rules(style: &UserStyle) -> String {
    let mut rules = String::new();
    if style.username.is_empty() {
        return rules;
    }

    let selector = format!(".chat-msg-{} .username", username_class(&style.username));
    let mut decorations = String::new();
    if !style.color.is_empty() {
        decorations.push_str(&format!("    color: {} !important;\n", style.color));
    }
    if !style.font_family.is_empty() {
        decorations.push_str(&format!(
            "    font-family: '{}', sans-serif !important;\n",
            style.font_family
        ));
    }

    if style.hide_original && !style.custom_name.is_empty() {
        rules.push_str(&format!("{} {{\n    font-size: 0 !important;\n}}\n\n", selector));
        rules.push_str(&format!("{}::before {{\n", selector));
        rules.push_str(&format!(
            "    content: '{}';\n",
            quote_escape(&style.custom_name)
        ));
        rules.push_str("    font-size: 1rem; /* Reset font size to be visible */\n");
        rules.push_str(&decorations);
        rules.push_str("}\n\n");
    } else {
        if !decorations.is_empty() {
            rules.push_str(&format!("{} {{\n{}}}\n\n", selector, decorations));
        }
        if !style.custom_name.is_empty() {
            rules.push_str(&format!(
                "{}::before {{\n    content: '{}';\n}}\n\n",
                selector,
                quote_escape(&style.custom_name)
            ));
        }
    }
    rules
}

fn push_user_styles(css: &mut String, styles: &[UserStyle]) {
    let rules: String = styles.iter().map(user_style_rules).collect();
    if !rules.is_empty() {
        css.push_str("/* --- Custom User Styles --- */\n\n");
        css.push_str(&rules);
    }
}

fn push_layout(css: &mut String) {
    css.push_str("/* --- Permanent Layout: Chat Hidden --- */\n");
    css.push_str("/* This permanently hides the chat and expands the video area. */\n\n");
    css.push_str("#rightpane, #chatwrap, #chatline { \n    display: none !important;\n}\n\n");
    css.push_str("#leftpane {\n    width: 100% !important;\n}\n\n");
}

/// Block text for an enabled effect
fn effect_text(effect: CssEffect, block: &'static str) -> Cow<'static, str> {
    if effect == CssEffect::PlaylistSlideInOnLoad {
        Cow::Owned(format!("{}\n{}", block.trim_end(), blocks::slide_in_delays()))
    } else {
        Cow::Borrowed(block)
    }
}

fn push_effects(css: &mut String, config: &ThemeConfig) {
    let effects = &config.css_effects;

    let any_visual = EffectGroup::VISUAL
        .iter()
        .any(|group| effects.any_in_group(*group));
    if any_visual {
        css.push_str("/* --- Visual Effects --- */\n\n");
    }

    let mut current: Option<EffectGroup> = None;
    for (effect, block) in EFFECT_BLOCKS {
        if !effects.is_enabled(*effect) {
            continue;
        }
        let group = effect.group();
        if current != Some(group) {
            current = Some(group);
            if let Some(header) = group.header() {
                css.push_str(header);
                css.push('\n');
            }
        }
        push_block(css, &effect_text(*effect, *block));
    }
}

fn push_misc(css: &mut String) {
    css.push_str("/* --- Miscellaneous --- */\n\n");
    css.push_str("#footer {\n    background-color: rgba(0, 0, 0, 0.5) !important;\n    color: #FFFFFF !important;\n}\n\n");
    css.push_str(".btn {\n    background: rgba(0, 0, 0, 0.6);\n}\n\n");
}

fn push_js_support(css: &mut String, config: &ThemeConfig) {
    let enabled: Vec<&str> = JS_SUPPORT_CSS
        .iter()
        .filter(|(feature, _)| config.javascript.is_enabled(*feature))
        .map(|(_, block)| *block)
        .collect();
    if enabled.is_empty() {
        return;
    }
    css.push_str("/* --- CSS for JS Features --- */\n\n");
    for block in enabled {
        push_block(css, block);
    }
}
