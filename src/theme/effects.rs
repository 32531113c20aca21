//! Effect and feature flag identifiers
//!
//! The flag structs in the parent module are the serialized form; these enums
//! are what the renderer tables and patches key on.

use serde::{Deserialize, Serialize};

/// Section of the stylesheet an effect renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectGroup {
    /// Rendered inside the MOTD banner rules
    Motd,
    Videowrap,
    Background,
    Playlist,
    Layout,
    ThemedGimmicks,
    WeirdSpooky,
    Festive,
}

impl EffectGroup {
    /// Groups that sit under the "Visual Effects" umbrella comment
    pub const VISUAL: &'static [EffectGroup] = &[
        EffectGroup::Videowrap,
        EffectGroup::Background,
        EffectGroup::Playlist,
        EffectGroup::Layout,
    ];

    /// Section comment written before the group's blocks, if any
    pub fn header(&self) -> Option<&'static str> {
        match self {
            EffectGroup::Motd => None,
            EffectGroup::Videowrap => Some("/* --- Videowrap & Frame Effects --- */"),
            EffectGroup::Background => Some("/* --- Background Effects --- */"),
            EffectGroup::Playlist => Some("/* --- Playlist Effects --- */"),
            EffectGroup::Layout => Some("/* --- Layout & Utility Effects --- */"),
            EffectGroup::ThemedGimmicks => Some("/* --- Themed Gimmick Effects --- */"),
            EffectGroup::WeirdSpooky => Some("/* --- Weird & Spooky Gimmicks --- */"),
            EffectGroup::Festive => Some("/* --- Christmas & Festive Gimmicks --- */"),
        }
    }
}

/// One CSS effect toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CssEffect {
    PulsatingVideowrapBorder,
    AnimatedBackground,
    CustomScrollbars,
    VideowrapTvScanlines,
    VideowrapVhsGlitch,
    VideowrapFloatingFrame,
    VideowrapFilmBorder,
    PulsatingMotdBackground,
    AnimatedQueue,
    CinematicBlackBars,
    AnimatedBackgroundNebula,
    AnimatedBackgroundPulsatingGrid,
    AnimatedBackgroundFloatingBlobs,
    VideowrapNightVision,
    VideowrapSecurityCamera,
    VideowrapHolographic,
    VideowrapSepiaFilm,
    VideowrapCrtEffect,
    VideowrapSignalInterference,
    VideowrapPulsatingGlow,
    #[serde(rename = "videowrapOldTVStartup")]
    VideowrapOldTvStartup,
    VideowrapStaticNoise,
    VideowrapGlitchEffect,
    VideowrapFilmGrain,
    SimpsonsCloudBackground,
    SimpsonsTvFrame,
    InvertColors,
    CreepyTextShadow,
    DramaticLighting,
    SpookyFogOverlay,
    StaticNoiseBackground,
    ChristmasLightsHeader,
    LetItSnow,
    AnimatedQueueNowPlaying,
    PlaylistHoverGlitchText,
    PlaylistSlideInOnLoad,
    PlaylistItemSpotlight,
}

impl CssEffect {
    /// Every effect, in declaration order
    pub const ALL: &'static [CssEffect] = &[
        CssEffect::PulsatingVideowrapBorder,
        CssEffect::AnimatedBackground,
        CssEffect::CustomScrollbars,
        CssEffect::VideowrapTvScanlines,
        CssEffect::VideowrapVhsGlitch,
        CssEffect::VideowrapFloatingFrame,
        CssEffect::VideowrapFilmBorder,
        CssEffect::PulsatingMotdBackground,
        CssEffect::AnimatedQueue,
        CssEffect::CinematicBlackBars,
        CssEffect::AnimatedBackgroundNebula,
        CssEffect::AnimatedBackgroundPulsatingGrid,
        CssEffect::AnimatedBackgroundFloatingBlobs,
        CssEffect::VideowrapNightVision,
        CssEffect::VideowrapSecurityCamera,
        CssEffect::VideowrapHolographic,
        CssEffect::VideowrapSepiaFilm,
        CssEffect::VideowrapCrtEffect,
        CssEffect::VideowrapSignalInterference,
        CssEffect::VideowrapPulsatingGlow,
        CssEffect::VideowrapOldTvStartup,
        CssEffect::VideowrapStaticNoise,
        CssEffect::VideowrapGlitchEffect,
        CssEffect::VideowrapFilmGrain,
        CssEffect::SimpsonsCloudBackground,
        CssEffect::SimpsonsTvFrame,
        CssEffect::InvertColors,
        CssEffect::CreepyTextShadow,
        CssEffect::DramaticLighting,
        CssEffect::SpookyFogOverlay,
        CssEffect::StaticNoiseBackground,
        CssEffect::ChristmasLightsHeader,
        CssEffect::LetItSnow,
        CssEffect::AnimatedQueueNowPlaying,
        CssEffect::PlaylistHoverGlitchText,
        CssEffect::PlaylistSlideInOnLoad,
        CssEffect::PlaylistItemSpotlight,
    ];

    /// Serialized (camelCase) flag name
    pub fn key(&self) -> &'static str {
        match self {
            CssEffect::PulsatingVideowrapBorder => "pulsatingVideowrapBorder",
            CssEffect::AnimatedBackground => "animatedBackground",
            CssEffect::CustomScrollbars => "customScrollbars",
            CssEffect::VideowrapTvScanlines => "videowrapTvScanlines",
            CssEffect::VideowrapVhsGlitch => "videowrapVhsGlitch",
            CssEffect::VideowrapFloatingFrame => "videowrapFloatingFrame",
            CssEffect::VideowrapFilmBorder => "videowrapFilmBorder",
            CssEffect::PulsatingMotdBackground => "pulsatingMotdBackground",
            CssEffect::AnimatedQueue => "animatedQueue",
            CssEffect::CinematicBlackBars => "cinematicBlackBars",
            CssEffect::AnimatedBackgroundNebula => "animatedBackgroundNebula",
            CssEffect::AnimatedBackgroundPulsatingGrid => "animatedBackgroundPulsatingGrid",
            CssEffect::AnimatedBackgroundFloatingBlobs => "animatedBackgroundFloatingBlobs",
            CssEffect::VideowrapNightVision => "videowrapNightVision",
            CssEffect::VideowrapSecurityCamera => "videowrapSecurityCamera",
            CssEffect::VideowrapHolographic => "videowrapHolographic",
            CssEffect::VideowrapSepiaFilm => "videowrapSepiaFilm",
            CssEffect::VideowrapCrtEffect => "videowrapCrtEffect",
            CssEffect::VideowrapSignalInterference => "videowrapSignalInterference",
            CssEffect::VideowrapPulsatingGlow => "videowrapPulsatingGlow",
            CssEffect::VideowrapOldTvStartup => "videowrapOldTVStartup",
            CssEffect::VideowrapStaticNoise => "videowrapStaticNoise",
            CssEffect::VideowrapGlitchEffect => "videowrapGlitchEffect",
            CssEffect::VideowrapFilmGrain => "videowrapFilmGrain",
            CssEffect::SimpsonsCloudBackground => "simpsonsCloudBackground",
            CssEffect::SimpsonsTvFrame => "simpsonsTvFrame",
            CssEffect::InvertColors => "invertColors",
            CssEffect::CreepyTextShadow => "creepyTextShadow",
            CssEffect::DramaticLighting => "dramaticLighting",
            CssEffect::SpookyFogOverlay => "spookyFogOverlay",
            CssEffect::StaticNoiseBackground => "staticNoiseBackground",
            CssEffect::ChristmasLightsHeader => "christmasLightsHeader",
            CssEffect::LetItSnow => "letItSnow",
            CssEffect::AnimatedQueueNowPlaying => "animatedQueueNowPlaying",
            CssEffect::PlaylistHoverGlitchText => "playlistHoverGlitchText",
            CssEffect::PlaylistSlideInOnLoad => "playlistSlideInOnLoad",
            CssEffect::PlaylistItemSpotlight => "playlistItemSpotlight",
        }
    }

    /// Stylesheet section this effect renders into
    pub fn group(&self) -> EffectGroup {
        match self {
            CssEffect::PulsatingMotdBackground => EffectGroup::Motd,
            CssEffect::PulsatingVideowrapBorder
            | CssEffect::VideowrapTvScanlines
            | CssEffect::VideowrapVhsGlitch
            | CssEffect::VideowrapFloatingFrame
            | CssEffect::VideowrapFilmBorder
            | CssEffect::VideowrapSepiaFilm
            | CssEffect::VideowrapNightVision
            | CssEffect::VideowrapSecurityCamera
            | CssEffect::VideowrapHolographic
            | CssEffect::VideowrapStaticNoise
            | CssEffect::VideowrapGlitchEffect
            | CssEffect::VideowrapFilmGrain
            | CssEffect::VideowrapCrtEffect
            | CssEffect::VideowrapSignalInterference
            | CssEffect::VideowrapPulsatingGlow
            | CssEffect::VideowrapOldTvStartup => EffectGroup::Videowrap,
            CssEffect::AnimatedBackground
            | CssEffect::AnimatedBackgroundNebula
            | CssEffect::AnimatedBackgroundPulsatingGrid
            | CssEffect::StaticNoiseBackground
            | CssEffect::AnimatedBackgroundFloatingBlobs => EffectGroup::Background,
            CssEffect::AnimatedQueue
            | CssEffect::AnimatedQueueNowPlaying
            | CssEffect::PlaylistHoverGlitchText
            | CssEffect::PlaylistSlideInOnLoad
            | CssEffect::PlaylistItemSpotlight => EffectGroup::Playlist,
            CssEffect::CinematicBlackBars | CssEffect::CustomScrollbars => EffectGroup::Layout,
            CssEffect::SimpsonsCloudBackground | CssEffect::SimpsonsTvFrame => {
                EffectGroup::ThemedGimmicks
            }
            CssEffect::InvertColors
            | CssEffect::CreepyTextShadow
            | CssEffect::DramaticLighting
            | CssEffect::SpookyFogOverlay => EffectGroup::WeirdSpooky,
            CssEffect::ChristmasLightsHeader | CssEffect::LetItSnow => EffectGroup::Festive,
        }
    }
}

/// One JavaScript feature toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsFeature {
    CinematicMode,
    MouseFollower,
    RandomThemeButton,
    VideowrapShake,
    VideoFollowCursor,
    GlowyGrid,
    MatrixRain,
    FloatingImages,
    SimpsonsGame,
    ChristmasSnow,
    ChristmasCursor,
}

impl JsFeature {
    /// Every feature, in render order
    pub const ALL: &'static [JsFeature] = &[
        JsFeature::CinematicMode,
        JsFeature::MouseFollower,
        JsFeature::RandomThemeButton,
        JsFeature::VideowrapShake,
        JsFeature::VideoFollowCursor,
        JsFeature::GlowyGrid,
        JsFeature::MatrixRain,
        JsFeature::FloatingImages,
        JsFeature::SimpsonsGame,
        JsFeature::ChristmasSnow,
        JsFeature::ChristmasCursor,
    ];

    /// Serialized (camelCase) flag name
    pub fn key(&self) -> &'static str {
        match self {
            JsFeature::CinematicMode => "enableCinematicMode",
            JsFeature::MouseFollower => "enableMouseFollower",
            JsFeature::RandomThemeButton => "enableRandomThemeButton",
            JsFeature::VideowrapShake => "enableVideowrapShake",
            JsFeature::VideoFollowCursor => "enableVideoFollowCursor",
            JsFeature::GlowyGrid => "enableGlowyGrid",
            JsFeature::MatrixRain => "enableMatrixRain",
            JsFeature::FloatingImages => "enableFloatingImages",
            JsFeature::SimpsonsGame => "enableSimpsonsGame",
            JsFeature::ChristmasSnow => "enableChristmasSnow",
            JsFeature::ChristmasCursor => "enableChristmasCursor",
        }
    }
}
