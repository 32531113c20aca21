//! cystyle_render - Offline theme renderer
//!
//! Renders a theme JSON file into the three Cytube paste-in artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use cystyle::render::{render, RenderedTheme};
use cystyle::theme::ThemeConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Stylesheet file name in the output directory
const CSS_FILE: &str = "theme.css";
/// Script file name in the output directory
const JS_FILE: &str = "theme.js";
/// MOTD markup file name in the output directory
const MOTD_FILE: &str = "motd.html";

/// Cytube theme renderer
#[derive(Parser, Debug)]
#[command(
    name = "cystyle_render",
    version,
    about = "Render a Cytube theme config to CSS, JS and MOTD HTML"
)]
struct Args {
    /// Theme config JSON (defaults to the built-in default theme)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to write theme.css, theme.js and motd.html into
    #[arg(short, long, required_unless_present = "print")]
    out_dir: Option<PathBuf>,

    /// Print all three artifacts to stdout instead of writing files
    #[arg(long, conflicts_with = "out_dir")]
    print: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so --print output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cystyle=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ThemeConfig::default(),
    };
    let rendered = render(&config);

    if args.print {
        print!("{}", printable(&rendered));
        return Ok(());
    }

    let Some(out_dir) = args.out_dir else {
        bail!("--out-dir is required unless --print is given");
    };
    write_artifacts(&out_dir, &rendered)?;
    info!("Wrote theme to {}", out_dir.display());
    Ok(())
}

/// Read and validate a theme config file
fn load_config(path: &Path) -> Result<ThemeConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: ThemeConfig = serde_json::from_str(&text)
        .with_context(|| format!("Invalid theme config: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn write_artifacts(out_dir: &Path, rendered: &RenderedTheme) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    for (name, content) in [
        (CSS_FILE, &rendered.css),
        (JS_FILE, &rendered.js),
        (MOTD_FILE, &rendered.motd_html),
    ] {
        let path = out_dir.join(name);
        fs::write(&path, format!("{}\n", content.trim_end()))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

fn printable(rendered: &RenderedTheme) -> String {
    format!(
        "/* ===== {} ===== */\n{}\n\n// ===== {} =====\n{}\n\n<!-- ===== {} ===== -->\n{}\n",
        CSS_FILE,
        rendered.css,
        JS_FILE,
        rendered.js.trim_end(),
        MOTD_FILE,
        rendered.motd_html
    )
}
