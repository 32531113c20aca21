//! Theme configuration model
//!
//! A theme is one `ThemeConfig` record:
//! - Font import and family
//! - MOTD banner text and styling
//! - Foundation colors for the room layout
//! - Per-user name overrides
//! - JavaScript feature flags and CSS effect flags
//!
//! Every field has a default taken from `ThemeConfig::default()`, which is the
//! canonical reset value. Unknown keys are rejected so a misspelled field
//! cannot silently fall back to its default.

mod effects;
mod patch;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use effects::{CssEffect, EffectGroup, JsFeature};
pub use patch::{FoundationPatch, JavascriptPatch, MotdPatch, ThemePatch};

/// Theme model errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("duplicate user style id: {0}")]
    DuplicateUserStyleId(Uuid),

    #[error("user style not found: {0}")]
    UserStyleNotFound(Uuid),
}

/// Root theme record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// URL for a CSS `@import` of a custom font
    pub font_import_url: String,
    /// Font family name used for the page body
    pub font_family_name: String,
    /// MOTD banner
    pub motd: MotdConfig,
    /// Base colors and layout
    pub foundation: FoundationStyles,
    /// Per-username overrides, order irrelevant
    pub user_styles: Vec<UserStyle>,
    /// Raw CSS appended after everything else
    pub advanced_css: String,
    /// JavaScript features
    pub javascript: JavascriptConfig,
    /// CSS effect toggles
    pub css_effects: CssEffectsConfig,
}

impl ThemeConfig {
    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<(), ThemeError> {
        let mut seen = HashSet::new();
        for style in &self.user_styles {
            if !seen.insert(style.id) {
                return Err(ThemeError::DuplicateUserStyleId(style.id));
            }
        }
        Ok(())
    }

    /// Whether the MOTD banner has any text to show
    pub fn has_motd_content(&self) -> bool {
        !self.motd.title.is_empty() || !self.motd.subtitle.is_empty()
    }

    /// Append a blank user style and return it
    pub fn add_user_style(&mut self) -> &UserStyle {
        self.user_styles.push(UserStyle::default());
        let last = self.user_styles.len() - 1;
        &self.user_styles[last]
    }

    /// Replace the user style with the given id, keeping the id stable
    pub fn update_user_style(
        &mut self,
        id: Uuid,
        mut updated: UserStyle,
    ) -> Result<(), ThemeError> {
        let slot = self
            .user_styles
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(ThemeError::UserStyleNotFound(id))?;
        updated.id = id;
        *slot = updated;
        Ok(())
    }

    /// Remove the user style with the given id
    pub fn remove_user_style(&mut self, id: Uuid) -> Result<UserStyle, ThemeError> {
        let index = self
            .user_styles
            .iter()
            .position(|s| s.id == id)
            .ok_or(ThemeError::UserStyleNotFound(id))?;
        Ok(self.user_styles.remove(index))
    }
}

/// Message of the Day banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MotdConfig {
    pub title: String,
    pub subtitle: String,
    pub background_image_url: String,
    pub title_color: String,
    pub title_font_size: String,
    pub title_text_shadow: String,
    pub subtitle_color: String,
    pub subtitle_font_size: String,
    pub subtitle_text_shadow: String,
}

impl Default for MotdConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            background_image_url: String::new(),
            title_color: "#ffffff".to_string(),
            title_font_size: "100px".to_string(),
            title_text_shadow: "2px 2px 8px #000000".to_string(),
            subtitle_color: "#e5e7eb".to_string(),
            subtitle_font_size: "50px".to_string(),
            subtitle_text_shadow: "2px 2px 4px #000000".to_string(),
        }
    }
}

/// Base colors applied regardless of effects
///
/// Colors are free-form CSS strings and are never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FoundationStyles {
    pub body_bg_color: String,
    pub message_buffer_bg_color: String,
    pub timestamp_color: String,
    pub owner_color: String,
    /// `transparent` renders as `background: none`
    pub poll_well_bg_color: String,
    pub poll_well_color: String,
    pub queue_item_border: bool,
    /// rgba string so the navbar can be translucent
    pub navbar_bg_color: String,
    pub chat_text_color: String,
    pub link_color: String,
    pub userlist_bg_color: String,
    pub userlist_text_color: String,
    pub queue_active_bg_color: String,
    pub queue_active_text_color: String,
}

impl Default for FoundationStyles {
    fn default() -> Self {
        Self {
            body_bg_color: "#111827".to_string(),
            message_buffer_bg_color: "#1f2937".to_string(),
            timestamp_color: "#9ca3af".to_string(),
            owner_color: "#f59e0b".to_string(),
            poll_well_bg_color: "transparent".to_string(),
            poll_well_color: "#e5e7eb".to_string(),
            queue_item_border: true,
            navbar_bg_color: "rgba(17, 24, 39, 0.8)".to_string(),
            chat_text_color: "#e5e7eb".to_string(),
            link_color: "#818cf8".to_string(),
            userlist_bg_color: "#1f2937".to_string(),
            userlist_text_color: "#e5e7eb".to_string(),
            queue_active_bg_color: "#4f46e5".to_string(),
            queue_active_text_color: "#ffffff".to_string(),
        }
    }
}

/// Per-username display override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct UserStyle {
    /// List identity only; carries no meaning in rendered output
    pub id: Uuid,
    pub username: String,
    pub custom_name: String,
    pub font_family: String,
    pub color: String,
    pub hide_original: bool,
}

impl Default for UserStyle {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            username: String::new(),
            custom_name: String::new(),
            font_family: String::new(),
            color: "#ffffff".to_string(),
            hide_original: false,
        }
    }
}

/// JavaScript features
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct JavascriptConfig {
    /// Shown in an alert at page load when non-empty
    pub welcome_message: String,
    pub enable_cinematic_mode: bool,
    pub enable_mouse_follower: bool,
    pub enable_random_theme_button: bool,
    pub enable_simpsons_game: bool,
    pub enable_floating_images: bool,
    /// Comma or newline separated image URLs
    pub floating_image_urls: String,
    pub enable_christmas_snow: bool,
    pub enable_christmas_cursor: bool,
    pub enable_matrix_rain: bool,
    pub enable_videowrap_shake: bool,
    pub enable_glowy_grid: bool,
    pub enable_video_follow_cursor: bool,
}

impl JavascriptConfig {
    /// Whether a feature flag is on
    pub fn is_enabled(&self, feature: JsFeature) -> bool {
        match feature {
            JsFeature::CinematicMode => self.enable_cinematic_mode,
            JsFeature::MouseFollower => self.enable_mouse_follower,
            JsFeature::RandomThemeButton => self.enable_random_theme_button,
            JsFeature::VideowrapShake => self.enable_videowrap_shake,
            JsFeature::VideoFollowCursor => self.enable_video_follow_cursor,
            JsFeature::GlowyGrid => self.enable_glowy_grid,
            JsFeature::MatrixRain => self.enable_matrix_rain,
            JsFeature::FloatingImages => self.enable_floating_images,
            JsFeature::SimpsonsGame => self.enable_simpsons_game,
            JsFeature::ChristmasSnow => self.enable_christmas_snow,
            JsFeature::ChristmasCursor => self.enable_christmas_cursor,
        }
    }

    /// Set a feature flag
    pub fn set(&mut self, feature: JsFeature, enabled: bool) {
        let flag = match feature {
            JsFeature::CinematicMode => &mut self.enable_cinematic_mode,
            JsFeature::MouseFollower => &mut self.enable_mouse_follower,
            JsFeature::RandomThemeButton => &mut self.enable_random_theme_button,
            JsFeature::VideowrapShake => &mut self.enable_videowrap_shake,
            JsFeature::VideoFollowCursor => &mut self.enable_video_follow_cursor,
            JsFeature::GlowyGrid => &mut self.enable_glowy_grid,
            JsFeature::MatrixRain => &mut self.enable_matrix_rain,
            JsFeature::FloatingImages => &mut self.enable_floating_images,
            JsFeature::SimpsonsGame => &mut self.enable_simpsons_game,
            JsFeature::ChristmasSnow => &mut self.enable_christmas_snow,
            JsFeature::ChristmasCursor => &mut self.enable_christmas_cursor,
        };
        *flag = enabled;
    }

    /// Whether any feature flag is on
    pub fn any_enabled(&self) -> bool {
        JsFeature::ALL.iter().any(|f| self.is_enabled(*f))
    }

    /// Floating image URLs split on commas and newlines, blanks dropped
    pub fn image_urls(&self) -> Vec<String> {
        self.floating_image_urls
            .split([',', '\n', '\r'])
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// CSS effect toggles, one fixed block each
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CssEffectsConfig {
    pub pulsating_videowrap_border: bool,
    pub animated_background: bool,
    pub custom_scrollbars: bool,
    pub videowrap_tv_scanlines: bool,
    pub videowrap_vhs_glitch: bool,
    pub videowrap_floating_frame: bool,
    pub videowrap_film_border: bool,
    pub pulsating_motd_background: bool,
    pub animated_queue: bool,
    pub cinematic_black_bars: bool,
    pub animated_background_nebula: bool,
    pub animated_background_pulsating_grid: bool,
    pub animated_background_floating_blobs: bool,
    pub videowrap_night_vision: bool,
    pub videowrap_security_camera: bool,
    pub videowrap_holographic: bool,
    pub videowrap_sepia_film: bool,
    pub videowrap_crt_effect: bool,
    pub videowrap_signal_interference: bool,
    pub videowrap_pulsating_glow: bool,
    #[serde(rename = "videowrapOldTVStartup")]
    pub videowrap_old_tv_startup: bool,
    pub videowrap_static_noise: bool,
    pub videowrap_glitch_effect: bool,
    pub videowrap_film_grain: bool,
    pub simpsons_cloud_background: bool,
    pub simpsons_tv_frame: bool,
    pub invert_colors: bool,
    pub creepy_text_shadow: bool,
    pub dramatic_lighting: bool,
    pub spooky_fog_overlay: bool,
    pub static_noise_background: bool,
    pub christmas_lights_header: bool,
    pub let_it_snow: bool,
    pub animated_queue_now_playing: bool,
    pub playlist_hover_glitch_text: bool,
    pub playlist_slide_in_on_load: bool,
    pub playlist_item_spotlight: bool,
}

impl CssEffectsConfig {
    /// Whether an effect is on
    pub fn is_enabled(&self, effect: CssEffect) -> bool {
        *self.flag(effect)
    }

    /// Set an effect
    pub fn set(&mut self, effect: CssEffect, enabled: bool) {
        *self.flag_mut(effect) = enabled;
    }

    /// Whether any effect in the group is on
    pub fn any_in_group(&self, group: EffectGroup) -> bool {
        CssEffect::ALL
            .iter()
            .any(|e| e.group() == group && self.is_enabled(*e))
    }

    fn flag(&self, effect: CssEffect) -> &bool {
        match effect {
            CssEffect::PulsatingVideowrapBorder => &self.pulsating_videowrap_border,
            CssEffect::AnimatedBackground => &self.animated_background,
            CssEffect::CustomScrollbars => &self.custom_scrollbars,
            CssEffect::VideowrapTvScanlines => &self.videowrap_tv_scanlines,
            CssEffect::VideowrapVhsGlitch => &self.videowrap_vhs_glitch,
            CssEffect::VideowrapFloatingFrame => &self.videowrap_floating_frame,
            CssEffect::VideowrapFilmBorder => &self.videowrap_film_border,
            CssEffect::PulsatingMotdBackground => &self.pulsating_motd_background,
            CssEffect::AnimatedQueue => &self.animated_queue,
            CssEffect::CinematicBlackBars => &self.cinematic_black_bars,
            CssEffect::AnimatedBackgroundNebula => &self.animated_background_nebula,
            CssEffect::AnimatedBackgroundPulsatingGrid => &self.animated_background_pulsating_grid,
            CssEffect::AnimatedBackgroundFloatingBlobs => &self.animated_background_floating_blobs,
            CssEffect::VideowrapNightVision => &self.videowrap_night_vision,
            CssEffect::VideowrapSecurityCamera => &self.videowrap_security_camera,
            CssEffect::VideowrapHolographic => &self.videowrap_holographic,
            CssEffect::VideowrapSepiaFilm => &self.videowrap_sepia_film,
            CssEffect::VideowrapCrtEffect => &self.videowrap_crt_effect,
            CssEffect::VideowrapSignalInterference => &self.videowrap_signal_interference,
            CssEffect::VideowrapPulsatingGlow => &self.videowrap_pulsating_glow,
            CssEffect::VideowrapOldTvStartup => &self.videowrap_old_tv_startup,
            CssEffect::VideowrapStaticNoise => &self.videowrap_static_noise,
            CssEffect::VideowrapGlitchEffect => &self.videowrap_glitch_effect,
            CssEffect::VideowrapFilmGrain => &self.videowrap_film_grain,
            CssEffect::SimpsonsCloudBackground => &self.simpsons_cloud_background,
            CssEffect::SimpsonsTvFrame => &self.simpsons_tv_frame,
            CssEffect::InvertColors => &self.invert_colors,
            CssEffect::CreepyTextShadow => &self.creepy_text_shadow,
            CssEffect::DramaticLighting => &self.dramatic_lighting,
            CssEffect::SpookyFogOverlay => &self.spooky_fog_overlay,
            CssEffect::StaticNoiseBackground => &self.static_noise_background,
            CssEffect::ChristmasLightsHeader => &self.christmas_lights_header,
            CssEffect::LetItSnow => &self.let_it_snow,
            CssEffect::AnimatedQueueNowPlaying => &self.animated_queue_now_playing,
            CssEffect::PlaylistHoverGlitchText => &self.playlist_hover_glitch_text,
            CssEffect::PlaylistSlideInOnLoad => &self.playlist_slide_in_on_load,
            CssEffect::PlaylistItemSpotlight => &self.playlist_item_spotlight,
        }
    }

    fn flag_mut(&mut self, effect: CssEffect) -> &mut bool {
        match effect {
            CssEffect::PulsatingVideowrapBorder => &mut self.pulsating_videowrap_border,
            CssEffect::AnimatedBackground => &mut self.animated_background,
            CssEffect::CustomScrollbars => &mut self.custom_scrollbars,
            CssEffect::VideowrapTvScanlines => &mut self.videowrap_tv_scanlines,
            CssEffect::VideowrapVhsGlitch => &mut self.videowrap_vhs_glitch,
            CssEffect::VideowrapFloatingFrame => &mut self.videowrap_floating_frame,
            CssEffect::VideowrapFilmBorder => &mut self.videowrap_film_border,
            CssEffect::PulsatingMotdBackground => &mut self.pulsating_motd_background,
            CssEffect::AnimatedQueue => &mut self.animated_queue,
            CssEffect::CinematicBlackBars => &mut self.cinematic_black_bars,
            CssEffect::AnimatedBackgroundNebula => &mut self.animated_background_nebula,
            CssEffect::AnimatedBackgroundPulsatingGrid => {
                &mut self.animated_background_pulsating_grid
            }
            CssEffect::AnimatedBackgroundFloatingBlobs => {
                &mut self.animated_background_floating_blobs
            }
            CssEffect::VideowrapNightVision => &mut self.videowrap_night_vision,
            CssEffect::VideowrapSecurityCamera => &mut self.videowrap_security_camera,
            CssEffect::VideowrapHolographic => &mut self.videowrap_holographic,
            CssEffect::VideowrapSepiaFilm => &mut self.videowrap_sepia_film,
            CssEffect::VideowrapCrtEffect => &mut self.videowrap_crt_effect,
            CssEffect::VideowrapSignalInterference => &mut self.videowrap_signal_interference,
            CssEffect::VideowrapPulsatingGlow => &mut self.videowrap_pulsating_glow,
            CssEffect::VideowrapOldTvStartup => &mut self.videowrap_old_tv_startup,
            CssEffect::VideowrapStaticNoise => &mut self.videowrap_static_noise,
            CssEffect::VideowrapGlitchEffect => &mut self.videowrap_glitch_effect,
            CssEffect::VideowrapFilmGrain => &mut self.videowrap_film_grain,
            CssEffect::SimpsonsCloudBackground => &mut self.simpsons_cloud_background,
            CssEffect::SimpsonsTvFrame => &mut self.simpsons_tv_frame,
            CssEffect::InvertColors => &mut self.invert_colors,
            CssEffect::CreepyTextShadow => &mut self.creepy_text_shadow,
            CssEffect::DramaticLighting => &mut self.dramatic_lighting,
            CssEffect::SpookyFogOverlay => &mut self.spooky_fog_overlay,
            CssEffect::StaticNoiseBackground => &mut self.static_noise_background,
            CssEffect::ChristmasLightsHeader => &mut self.christmas_lights_header,
            CssEffect::LetItSnow => &mut self.let_it_snow,
            CssEffect::AnimatedQueueNowPlaying => &mut self.animated_queue_now_playing,
            CssEffect::PlaylistHoverGlitchText => &mut self.playlist_hover_glitch_text,
            CssEffect::PlaylistSlideInOnLoad => &mut self.playlist_slide_in_on_load,
            CssEffect::PlaylistItemSpotlight => &mut self.playlist_item_spotlight,
        }
    }
}
