//! Literal text blocks keyed by flag
//!
//! Tables are in render order. Each block is self-contained; enabling two
//! blocks that style the same element simply emits both.

use crate::theme::{CssEffect, JsFeature};

/// Keyframes for the pulsating MOTD glow (rendered inside the MOTD section)
pub const MOTD_GLOW_CSS: &str = include_str!("../../assets/css/motd_glow.css");

/// Number of playlist rows that get a staggered slide-in delay
pub const SLIDE_IN_ROWS: u32 = 20;

/// Effect blocks in render order
///
/// `PulsatingMotdBackground` is absent: it renders as part of the MOTD rules.
pub const EFFECT_BLOCKS: &[(CssEffect, &str)] = &[
    // Videowrap & frame
    (
        CssEffect::PulsatingVideowrapBorder,
        include_str!("../../assets/css/pulsating_videowrap_border.css"),
    ),
    (
        CssEffect::VideowrapTvScanlines,
        include_str!("../../assets/css/videowrap_tv_scanlines.css"),
    ),
    (
        CssEffect::VideowrapVhsGlitch,
        include_str!("../../assets/css/videowrap_vhs_glitch.css"),
    ),
    (
        CssEffect::VideowrapFloatingFrame,
        include_str!("../../assets/css/videowrap_floating_frame.css"),
    ),
    (
        CssEffect::VideowrapFilmBorder,
        include_str!("../../assets/css/videowrap_film_border.css"),
    ),
    (
        CssEffect::VideowrapSepiaFilm,
        include_str!("../../assets/css/videowrap_sepia_film.css"),
    ),
    (
        CssEffect::VideowrapNightVision,
        include_str!("../../assets/css/videowrap_night_vision.css"),
    ),
    (
        CssEffect::VideowrapSecurityCamera,
        include_str!("../../assets/css/videowrap_security_camera.css"),
    ),
    (
        CssEffect::VideowrapHolographic,
        include_str!("../../assets/css/videowrap_holographic.css"),
    ),
    (
        CssEffect::VideowrapStaticNoise,
        include_str!("../../assets/css/videowrap_static_noise.css"),
    ),
    (
        CssEffect::VideowrapGlitchEffect,
        include_str!("../../assets/css/videowrap_glitch_effect.css"),
    ),
    (
        CssEffect::VideowrapFilmGrain,
        include_str!("../../assets/css/videowrap_film_grain.css"),
    ),
    (
        CssEffect::VideowrapCrtEffect,
        include_str!("../../assets/css/videowrap_crt_effect.css"),
    ),
    (
        CssEffect::VideowrapSignalInterference,
        include_str!("../../assets/css/videowrap_signal_interference.css"),
    ),
    (
        CssEffect::VideowrapPulsatingGlow,
        include_str!("../../assets/css/videowrap_pulsating_glow.css"),
    ),
    (
        CssEffect::VideowrapOldTvStartup,
        include_str!("../../assets/css/videowrap_old_tv_startup.css"),
    ),
    // Background
    (
        CssEffect::AnimatedBackground,
        include_str!("../../assets/css/animated_background.css"),
    ),
    (
        CssEffect::AnimatedBackgroundNebula,
        include_str!("../../assets/css/animated_background_nebula.css"),
    ),
    (
        CssEffect::AnimatedBackgroundPulsatingGrid,
        include_str!("../../assets/css/animated_background_pulsating_grid.css"),
    ),
    (
        CssEffect::StaticNoiseBackground,
        include_str!("../../assets/css/static_noise_background.css"),
    ),
    (
        CssEffect::AnimatedBackgroundFloatingBlobs,
        include_str!("../../assets/css/animated_background_floating_blobs.css"),
    ),
    // Playlist
    (
        CssEffect::AnimatedQueue,
        include_str!("../../assets/css/animated_queue.css"),
    ),
    (
        CssEffect::AnimatedQueueNowPlaying,
        include_str!("../../assets/css/animated_queue_now_playing.css"),
    ),
    (
        CssEffect::PlaylistHoverGlitchText,
        include_str!("../../assets/css/playlist_hover_glitch_text.css"),
    ),
    (
        CssEffect::PlaylistSlideInOnLoad,
        include_str!("../../assets/css/playlist_slide_in_on_load.css"),
    ),
    (
        CssEffect::PlaylistItemSpotlight,
        include_str!("../../assets/css/playlist_item_spotlight.css"),
    ),
    // Layout & utility
    (
        CssEffect::CinematicBlackBars,
        include_str!("../../assets/css/cinematic_black_bars.css"),
    ),
    (
        CssEffect::CustomScrollbars,
        include_str!("../../assets/css/custom_scrollbars.css"),
    ),
    // Themed gimmicks
    (
        CssEffect::SimpsonsCloudBackground,
        include_str!("../../assets/css/simpsons_cloud_background.css"),
    ),
    (
        CssEffect::SimpsonsTvFrame,
        include_str!("../../assets/css/simpsons_tv_frame.css"),
    ),
    // Weird & spooky
    (
        CssEffect::InvertColors,
        include_str!("../../assets/css/invert_colors.css"),
    ),
    (
        CssEffect::CreepyTextShadow,
        include_str!("../../assets/css/creepy_text_shadow.css"),
    ),
    (
        CssEffect::DramaticLighting,
        include_str!("../../assets/css/dramatic_lighting.css"),
    ),
    (
        CssEffect::SpookyFogOverlay,
        include_str!("../../assets/css/spooky_fog_overlay.css"),
    ),
    // Festive
    (
        CssEffect::ChristmasLightsHeader,
        include_str!("../../assets/css/christmas_lights_header.css"),
    ),
    (
        CssEffect::LetItSnow,
        include_str!("../../assets/css/let_it_snow.css"),
    ),
];

/// Stylesheet companions of JavaScript features
pub const JS_SUPPORT_CSS: &[(JsFeature, &str)] = &[
    (
        JsFeature::CinematicMode,
        include_str!("../../assets/css/cinematic_mode_support.css"),
    ),
    (
        JsFeature::MouseFollower,
        include_str!("../../assets/css/mouse_follower_support.css"),
    ),
    (
        JsFeature::VideowrapShake,
        include_str!("../../assets/css/videowrap_shake_support.css"),
    ),
    (
        JsFeature::ChristmasCursor,
        include_str!("../../assets/css/christmas_cursor_support.css"),
    ),
];

/// Script snippets in render order
pub const JS_SNIPPETS: &[(JsFeature, &str)] = &[
    (
        JsFeature::CinematicMode,
        include_str!("../../assets/js/cinematic_mode.js"),
    ),
    (
        JsFeature::MouseFollower,
        include_str!("../../assets/js/mouse_follower.js"),
    ),
    (
        JsFeature::RandomThemeButton,
        include_str!("../../assets/js/random_theme_button.js"),
    ),
    (
        JsFeature::VideowrapShake,
        include_str!("../../assets/js/videowrap_shake.js"),
    ),
    (
        JsFeature::VideoFollowCursor,
        include_str!("../../assets/js/video_follow_cursor.js"),
    ),
    (
        JsFeature::GlowyGrid,
        include_str!("../../assets/js/glowy_grid.js"),
    ),
    (
        JsFeature::MatrixRain,
        include_str!("../../assets/js/matrix_rain.js"),
    ),
    (
        JsFeature::FloatingImages,
        include_str!("../../assets/js/floating_images.js"),
    ),
    (
        JsFeature::SimpsonsGame,
        include_str!("../../assets/js/simpsons_game.js"),
    ),
    (
        JsFeature::ChristmasSnow,
        include_str!("../../assets/js/christmas_snow.js"),
    ),
    (
        JsFeature::ChristmasCursor,
        include_str!("../../assets/js/christmas_cursor.js"),
    ),
];

/// Mouse tracker feeding the dramatic-lighting spotlight
pub const DRAMATIC_LIGHTING_JS: &str = include_str!("../../assets/js/dramatic_lighting.js");

/// Placeholder in the floating-images snippet replaced by the URL array
pub const IMAGE_URLS_PLACEHOLDER: &str = "__IMAGE_URLS__";

/// Look up the script snippet for a feature
pub fn js_snippet(feature: JsFeature) -> Option<&'static str> {
    JS_SNIPPETS
        .iter()
        .find(|(f, _)| *f == feature)
        .map(|(_, snippet)| *snippet)
}

/// `animation-delay` rules staggering the first playlist rows by 50ms each
pub fn slide_in_delays() -> String {
    let mut rules = String::new();
    for row in 1..=SLIDE_IN_ROWS {
        rules.push_str(&format!(
            "#queue > li:nth-child({}) {{ animation-delay: {}s; }}\n",
            row,
            seconds_from_centis(row * 5)
        ));
    }
    rules
}

/// Format hundredths of a second without trailing zeros (5 -> "0.05", 100 -> "1")
fn seconds_from_centis(centis: u32) -> String {
    let whole = centis / 100;
    let frac = centis % 100;
    if frac == 0 {
        whole.to_string()
    } else {
        format!("{}.{:02}", whole, frac)
            .trim_end_matches('0')
            .to_string()
    }
}
