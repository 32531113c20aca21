//! AI theme generation
//!
//! Provides:
//! - The structured-output schema sent with every request
//! - Prompt construction around a free-text description
//! - Response validation and merge over the default theme
//! - The rotating status messages shown while a request is pending

use std::sync::LazyLock;

use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::theme::{ThemeConfig, ThemePatch};
use crate::venice::{ChatMessage, ResponseFormat, VeniceClient, VeniceError};

/// Status lines cycled while a generation is pending
pub const LOADING_MESSAGES: &[&str] = &[
    "Consulting the design muses...",
    "Weaving CSS magic...",
    "Scripting dynamic experiences...",
    "Painting with pixels...",
    "Aligning style grids...",
    "Compiling creativity...",
    "Brewing a fresh theme...",
];

/// Status line after `tick` rotations
pub fn loading_message(tick: usize) -> &'static str {
    LOADING_MESSAGES[tick % LOADING_MESSAGES.len()]
}

/// Generation errors; the display text is what the user sees
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Please enter a description for your theme.")]
    EmptyPrompt,

    #[error("{0} environment variable not found.")]
    MissingCredential(String),

    #[error("An error occurred: {0}")]
    Transport(String),

    #[error("An error occurred: the AI service responded with status {status}")]
    Service { status: u16 },

    #[error("The AI returned an invalid theme structure. Please try again.")]
    InvalidResponse,

    #[error("A theme is already being generated for this session.")]
    Busy,
}

impl From<VeniceError> for GenerateError {
    fn from(err: VeniceError) -> Self {
        match err {
            VeniceError::MissingCredential(var) => GenerateError::MissingCredential(var),
            VeniceError::Transport(e) => GenerateError::Transport(e.to_string()),
            VeniceError::Service { status, .. } => GenerateError::Service { status },
            VeniceError::EmptyResponse => GenerateError::InvalidResponse,
        }
    }
}

static RESPONSE_SCHEMA: LazyLock<Value> = LazyLock::new(build_schema);

fn string_prop(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

fn bool_prop(description: &str) -> Value {
    json!({ "type": "boolean", "description": description })
}

fn build_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "fontImportUrl": string_prop("A full URL for a CSS @import rule to load a custom font. Can be from fonts.google.com, cdnfonts.com, or other sources. Can be an empty string if no custom font is needed."),
            "fontFamilyName": string_prop("The exact font-family name to use in CSS, corresponding to the imported font. Can be an empty string."),
            "foundation": {
                "type": "object",
                "description": "Core styles for the page layout and elements.",
                "properties": {
                    "bodyBgColor": string_prop("Page background color, hex format."),
                    "messageBufferBgColor": string_prop("Background for elements that would normally be behind the (now hidden) chat, hex format."),
                    "chatTextColor": string_prop("Default text color for elements like polls, hex format."),
                    "linkColor": string_prop("Color for hyperlinks, hex format."),
                    "timestampColor": string_prop("Timestamp color for playlist items, hex format."),
                    "ownerColor": string_prop("Username color for channel owner in the userlist (userlist is hidden), hex format."),
                    "userlistBgColor": string_prop("Background color for the userlist area (hidden), hex format."),
                    "userlistTextColor": string_prop("Default text color for the userlist (hidden), hex format."),
                    "queueActiveBgColor": string_prop("Background color for the currently playing item in the playlist, hex format."),
                    "queueActiveTextColor": string_prop("Text color for the currently playing item in the playlist, hex format."),
                    "pollWellBgColor": string_prop("Background for polls. Hex format or 'transparent'."),
                    "pollWellColor": string_prop("Text color for polls, hex format."),
                    "queueItemBorder": bool_prop("Whether to show a border under playlist items."),
                    "navbarBgColor": string_prop("Navbar background color, rgba format for transparency.")
                }
            },
            "motd": {
                "type": "object",
                "description": "Message of the Day (MOTD) banner content and styling.",
                "properties": {
                    "backgroundImageUrl": string_prop("A URL for a background image for the MOTD banner. Can be an empty string."),
                    "title": string_prop("A short, catchy main title for the MOTD."),
                    "subtitle": string_prop("A secondary subtitle for the MOTD."),
                    "titleColor": string_prop("Color for the main title text, hex format."),
                    "titleFontSize": string_prop("Font size for the main title (e.g., '100px')."),
                    "titleTextShadow": string_prop("CSS text-shadow for the main title (e.g., '2px 2px 8px #000000')."),
                    "subtitleColor": string_prop("Color for the subtitle text, hex format."),
                    "subtitleFontSize": string_prop("Font size for the subtitle (e.g., '50px')."),
                    "subtitleTextShadow": string_prop("CSS text-shadow for the subtitle (e.g., '2px 2px 4px #000000').")
                }
            },
            "cssEffects": {
                "type": "object",
                "description": "Boolean flags enabling pre-defined CSS visual effects.",
                "properties": {
                    "pulsatingVideowrapBorder": bool_prop("Adds an animated, glowing border around the video player."),
                    "animatedBackground": bool_prop("Adds a slow, shifting gradient animation to the page background. Overrides bodyBgColor."),
                    "customScrollbars": bool_prop("Applies a custom style to browser scrollbars."),
                    "videowrapTvScanlines": bool_prop("Overlays the video with faint, flickering scanlines."),
                    "videowrapVhsGlitch": bool_prop("Adds a chaotic glitch effect mimicking a damaged VHS tape."),
                    "videowrapFloatingFrame": bool_prop("Makes the video player appear to float above the page."),
                    "videowrapFilmBorder": bool_prop("Adds an animated border that looks like a classic film strip."),
                    "pulsatingMotdBackground": bool_prop("Adds a subtle pulsating glow animation to the MOTD banner."),
                    "animatedQueue": bool_prop("Adds a subtle glow animation to the active video in the playlist."),
                    "cinematicBlackBars": bool_prop("Adds permanent black bars to the top and bottom of the screen."),
                    "animatedBackgroundFloatingBlobs": bool_prop("Adds large, colorful, slowly morphing blobs drifting in the background."),
                    "animatedQueueNowPlaying": bool_prop("Adds an animated equalizer bar to the active playlist item."),
                    "playlistHoverGlitchText": bool_prop("Makes playlist item text glitch on hover."),
                    "videowrapCrtEffect": bool_prop("Applies a curved CRT screen look to the video player."),
                    "videowrapSignalInterference": bool_prop("Periodically rolls a bar of static over the video.")
                }
            },
            "javascript": {
                "type": "object",
                "description": "Boolean flags enabling JavaScript features.",
                "properties": {
                    "welcomeMessage": string_prop("A short welcome message shown in an alert. Can be an empty string."),
                    "enableCinematicMode": bool_prop("Enables a button to toggle a cinematic viewing mode."),
                    "enableMouseFollower": bool_prop("Enables a decorative element that follows the cursor."),
                    "enableRandomThemeButton": bool_prop("Adds a button to randomize theme colors. Probably should be false unless requested."),
                    "enableMatrixRain": bool_prop("Creates a Matrix style digital rain effect in the background. It is performance-intensive."),
                    "enableVideowrapShake": bool_prop("Randomly and briefly shakes the video player.")
                }
            },
            "advancedCss": string_prop("A block of raw, advanced CSS to inject for animations or selectors not covered by other options. Valid, minified CSS. Can be an empty string.")
        }
    })
}

/// Schema the model's JSON answer must follow
pub fn response_schema() -> &'static Value {
    &RESPONSE_SCHEMA
}

/// Instruction prompt around a user description
pub fn build_prompt(description: &str) -> String {
    format!(
        "Generate a complete theme configuration for a Cytube channel based on the following description. \
         Adhere strictly to the provided JSON schema. The chat and userlist are permanently hidden, \
         so do not generate any styles for them. Make the theme creative and cohesive. \
         Description: \"{}\"",
        description
    )
}

/// Turn raw model output into a full config
///
/// The output must be a JSON object whose fields all belong to the theme
/// model. Missing fields come from the defaults; user styles always reset.
pub fn parse_response(content: &str) -> Result<ThemeConfig, GenerateError> {
    let trimmed = strip_code_fence(content.trim());
    let value: Value = serde_json::from_str(trimmed).map_err(|e| {
        warn!("Failed to parse AI response: {}", e);
        GenerateError::InvalidResponse
    })?;
    let Value::Object(mut fields) = value else {
        warn!("AI response is not an object");
        return Err(GenerateError::InvalidResponse);
    };

    // User styles are never taken from the model, whatever their shape
    if fields.remove("userStyles").is_some() {
        debug!("Discarding userStyles from AI response");
    }

    let patch: ThemePatch = serde_json::from_value(Value::Object(fields)).map_err(|e| {
        warn!("AI response does not match the theme model: {}", e);
        GenerateError::InvalidResponse
    })?;
    Ok(patch.merge_over_default())
}

/// Drop a surrounding ```json fence some models add despite the schema
fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Generates themes from descriptions through Venice
#[derive(Debug, Clone)]
pub struct ThemeGenerator {
    venice: VeniceClient,
    format: ResponseFormat,
}

impl ThemeGenerator {
    pub fn new(venice: VeniceClient) -> Self {
        Self {
            venice,
            format: ResponseFormat::json_schema("cytube_theme", response_schema().clone()),
        }
    }

    /// Produce a full theme for `description`
    ///
    /// Blank descriptions fail before any network call.
    pub async fn generate(&self, description: &str) -> Result<ThemeConfig, GenerateError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(GenerateError::EmptyPrompt);
        }

        let messages = [ChatMessage::user(&build_prompt(description))];
        let content = self.venice.chat(&messages, Some(&self.format)).await?;
        let config = parse_response(&content)?;

        info!(
            "Generated theme (font: {:?}, motd: {:?})",
            config.font_family_name, config.motd.title
        );
        Ok(config)
    }
}
