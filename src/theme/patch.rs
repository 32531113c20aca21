//! Partial theme updates
//!
//! A `ThemePatch` carries only the fields that were supplied. Unknown fields
//! are rejected at parse time; absent fields leave the target untouched.
//! Form edits apply a patch over the current config, AI results apply one
//! over the default config.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    CssEffect, FoundationStyles, JavascriptConfig, MotdConfig, ThemeConfig, UserStyle,
};

/// Overwrite each target field whose patch value is present
macro_rules! coalesce {
    ($target:expr, $patch:expr, [$($field:ident),* $(,)?]) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )*
    };
}

/// Partial `ThemeConfig`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_import_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motd: Option<MotdPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foundation: Option<FoundationPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_styles: Option<Vec<UserStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javascript: Option<JavascriptPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// A `null` flag keeps the target's value
    pub css_effects: Option<BTreeMap<CssEffect, Option<bool>>>,
}

impl ThemePatch {
    /// Apply every present field over `target`
    pub fn apply_to(self, target: &mut ThemeConfig) {
        coalesce!(
            target,
            self,
            [font_import_url, font_family_name, advanced_css, user_styles]
        );
        if let Some(motd) = self.motd {
            motd.apply_to(&mut target.motd);
        }
        if let Some(foundation) = self.foundation {
            foundation.apply_to(&mut target.foundation);
        }
        if let Some(javascript) = self.javascript {
            javascript.apply_to(&mut target.javascript);
        }
        if let Some(effects) = self.css_effects {
            for (effect, enabled) in effects {
                if let Some(enabled) = enabled {
                    target.css_effects.set(effect, enabled);
                }
            }
        }
    }

    /// Build a full config from the defaults with this patch on top
    ///
    /// Fields the patch leaves out come from `ThemeConfig::default()`, not
    /// from whatever was configured before.
    pub fn merge_over_default(self) -> ThemeConfig {
        let mut config = ThemeConfig::default();
        self.apply_to(&mut config);
        config
    }
}

/// Partial `MotdConfig`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MotdPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub background_image_url: Option<String>,
    pub title_color: Option<String>,
    pub title_font_size: Option<String>,
    pub title_text_shadow: Option<String>,
    pub subtitle_color: Option<String>,
    pub subtitle_font_size: Option<String>,
    pub subtitle_text_shadow: Option<String>,
}

impl MotdPatch {
    fn apply_to(self, target: &mut MotdConfig) {
        coalesce!(
            target,
            self,
            [
                title,
                subtitle,
                background_image_url,
                title_color,
                title_font_size,
                title_text_shadow,
                subtitle_color,
                subtitle_font_size,
                subtitle_text_shadow,
            ]
        );
    }
}

/// Partial `FoundationStyles`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FoundationPatch {
    pub body_bg_color: Option<String>,
    pub message_buffer_bg_color: Option<String>,
    pub timestamp_color: Option<String>,
    pub owner_color: Option<String>,
    pub poll_well_bg_color: Option<String>,
    pub poll_well_color: Option<String>,
    pub queue_item_border: Option<bool>,
    pub navbar_bg_color: Option<String>,
    pub chat_text_color: Option<String>,
    pub link_color: Option<String>,
    pub userlist_bg_color: Option<String>,
    pub userlist_text_color: Option<String>,
    pub queue_active_bg_color: Option<String>,
    pub queue_active_text_color: Option<String>,
}

impl FoundationPatch {
    fn apply_to(self, target: &mut FoundationStyles) {
        coalesce!(
            target,
            self,
            [
                body_bg_color,
                message_buffer_bg_color,
                timestamp_color,
                owner_color,
                poll_well_bg_color,
                poll_well_color,
                queue_item_border,
                navbar_bg_color,
                chat_text_color,
                link_color,
                userlist_bg_color,
                userlist_text_color,
                queue_active_bg_color,
                queue_active_text_color,
            ]
        );
    }
}

/// Partial `JavascriptConfig`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JavascriptPatch {
    pub welcome_message: Option<String>,
    pub enable_cinematic_mode: Option<bool>,
    pub enable_mouse_follower: Option<bool>,
    pub enable_random_theme_button: Option<bool>,
    pub enable_simpsons_game: Option<bool>,
    pub enable_floating_images: Option<bool>,
    pub floating_image_urls: Option<String>,
    pub enable_christmas_snow: Option<bool>,
    pub enable_christmas_cursor: Option<bool>,
    pub enable_matrix_rain: Option<bool>,
    pub enable_videowrap_shake: Option<bool>,
    pub enable_glowy_grid: Option<bool>,
    pub enable_video_follow_cursor: Option<bool>,
}

impl JavascriptPatch {
    fn apply_to(self, target: &mut JavascriptConfig) {
        coalesce!(
            target,
            self,
            [
                welcome_message,
                enable_cinematic_mode,
                enable_mouse_follower,
                enable_random_theme_button,
                enable_simpsons_game,
                enable_floating_images,
                floating_image_urls,
                enable_christmas_snow,
                enable_christmas_cursor,
                enable_matrix_rain,
                enable_videowrap_shake,
                enable_glowy_grid,
                enable_video_follow_cursor,
            ]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_is_identity() {
        let mut config = ThemeConfig::default();
        config.font_family_name = "VT323".to_string();
        let before = config.clone();
        ThemePatch::default().apply_to(&mut config);
        assert_eq!(config, before);
    }

    #[test]
    fn test_all_default_values_merge_to_default() {
        let defaults = serde_json::to_string(&ThemeConfig::default()).unwrap();
        let patch: ThemePatch = serde_json::from_str(&defaults).unwrap();
        assert_eq!(patch.merge_over_default(), ThemeConfig::default());
    }

    #[test]
    fn test_single_field_merge() {
        let patch: ThemePatch =
            serde_json::from_str(r##"{"foundation": {"bodyBgColor": "#000000"}}"##).unwrap();
        let merged = patch.merge_over_default();

        let mut expected = ThemeConfig::default();
        expected.foundation.body_bg_color = "#000000".to_string();
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_ignores_previous_state() {
        let patch: ThemePatch = serde_json::from_str(r#"{"motd": {"title": "Hi"}}"#).unwrap();
        let merged = patch.merge_over_default();
        assert_eq!(merged.motd.title, "Hi");
        assert_eq!(merged.motd.subtitle, "");
        assert!(merged.user_styles.is_empty());
    }

    #[test]
    fn test_apply_keeps_current_values() {
        let mut config = ThemeConfig::default();
        config.motd.subtitle = "kept".to_string();
        let patch: ThemePatch = serde_json::from_str(
            r#"{"motd": {"title": "Hi"}, "cssEffects": {"letItSnow": true}}"#,
        )
        .unwrap();
        patch.apply_to(&mut config);
        assert_eq!(config.motd.title, "Hi");
        assert_eq!(config.motd.subtitle, "kept");
        assert!(config.css_effects.let_it_snow);
    }

    #[test]
    fn test_null_effect_flag_keeps_target() {
        let mut config = ThemeConfig::default();
        config.css_effects.let_it_snow = true;
        let patch: ThemePatch = serde_json::from_str(
            r#"{"cssEffects": {"letItSnow": null, "invertColors": true}}"#,
        )
        .unwrap();
        patch.apply_to(&mut config);
        assert!(config.css_effects.let_it_snow);
        assert!(config.css_effects.invert_colors);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(serde_json::from_str::<ThemePatch>(r#"{"bogus": 1}"#).is_err());
        assert!(
            serde_json::from_str::<ThemePatch>(r#"{"foundation": {"bogusColor": "red"}}"#)
                .is_err()
        );
        assert!(
            serde_json::from_str::<ThemePatch>(r#"{"cssEffects": {"notAnEffect": true}}"#)
                .is_err()
        );
    }

    #[test]
    fn test_wrong_types_rejected() {
        assert!(
            serde_json::from_str::<ThemePatch>(r#"{"foundation": {"queueItemBorder": "yes"}}"#)
                .is_err()
        );
    }
}
