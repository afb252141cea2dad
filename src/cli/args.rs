//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{ModeArg, RampArg};

/// Render images and webcam frames as ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "termglyph")]
#[command(version, about = "Image and webcam to ASCII art renderer", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Glyph ramp preset (overrides the config file)
    #[arg(long, global = true)]
    pub ramp: Option<RampArg>,

    /// Invert brightness (for light terminals)
    #[arg(long, global = true)]
    pub invert: bool,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render an image once
    Render {
        /// Image file to render
        image: PathBuf,

        /// Render mode
        #[arg(long, short)]
        mode: Option<ModeArg>,

        /// Rainbow phase offset
        #[arg(long, default_value = "0")]
        offset: u64,

        /// Resize to this many columns first
        #[arg(long, short)]
        width: Option<u32>,

        /// Write the text to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Animate an image with a moving rainbow
    Animate {
        /// Image file to animate
        image: PathBuf,

        /// Number of frames
        #[arg(long, short)]
        frames: Option<u64>,

        /// Resize to this many columns first
        #[arg(long, short)]
        width: Option<u32>,
    },
    /// Stream the webcam as ASCII art
    Webcam {
        /// Number of frames
        #[arg(long, short)]
        frames: Option<u64>,

        /// Camera device index (from list-cameras)
        #[arg(long, short)]
        device: Option<u32>,

        /// Output width in characters
        #[arg(long, short)]
        width: Option<u32>,

        /// Render mode
        #[arg(long, short)]
        mode: Option<ModeArg>,

        /// Mirror camera horizontally
        #[arg(long)]
        mirror: bool,
    },
    /// List available cameras
    ListCameras,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
