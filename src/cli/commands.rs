//! Subcommand handlers.

use std::path::{Path, PathBuf};

use super::args::{Command, ConfigAction};
use super::enums::ModeArg;
use crate::ascii::GlyphTable;
use crate::buffer::{BufferError, PixelBuffer};
use crate::camera::{self, CameraError, CameraSettings};
use crate::config::{default_path, Config, ConfigError, DEFAULT_CONFIG};
use crate::output::{self, OutputError};
use crate::render::{self, RenderError, RenderMode};
use crate::stream::{run_stream, CameraSource, StillSource, StreamError, StreamSettings};

/// Errors surfaced by subcommands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error("config file already exists: {} (use 'termglyph config show' to view it)", .0.display())]
    ConfigExists(PathBuf),

    #[error("failed to create '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Run a render, animate, webcam or list-cameras command.
///
/// `config` subcommands go through [`handle_config_action`] since they need
/// the config path rather than its contents.
pub fn run_command(
    command: Command,
    config: &Config,
    table: &GlyphTable,
) -> Result<(), CommandError> {
    match command {
        Command::Render {
            image,
            mode,
            offset,
            width,
            output,
        } => {
            let mode = resolve_mode(mode, config)?.advanced(offset);
            run_render(&image, mode, width, output.as_deref(), config, table)
        }
        Command::Animate {
            image,
            frames,
            width,
        } => run_animate(&image, frames, width, config, table),
        Command::Webcam {
            frames,
            device,
            width,
            mode,
            mirror,
        } => {
            let mode = resolve_mode(mode, config)?;
            let settings = CameraSettings {
                device_index: device.unwrap_or(config.camera.device),
                target_width: width.unwrap_or(config.stream.width),
                aspect: config.stream.aspect,
                mirror: mirror || config.camera.mirror,
                ..CameraSettings::default()
            };
            run_webcam(settings, frames, mode, config, table)
        }
        Command::ListCameras => list_cameras(),
        Command::Config { action } => handle_config_action(action, config, None),
    }
}

/// CLI flag, then config file, then color.
fn resolve_mode(mode: Option<ModeArg>, config: &Config) -> Result<RenderMode, CommandError> {
    match mode {
        Some(m) => Ok(m.into()),
        None => Ok(config.render.mode()?.unwrap_or(RenderMode::Color)),
    }
}

/// Decode an image as RGB, optionally scaled to `width` columns.
fn load_image(path: &Path, width: Option<u32>, aspect: f32) -> Result<PixelBuffer, CommandError> {
    let image = PixelBuffer::from_file_rgb(path)?;
    match width {
        Some(w) => Ok(camera::resize_frame(&image, w, aspect)?),
        None => Ok(image),
    }
}

/// Render one image to stdout or `output`.
pub fn run_render(
    image: &Path,
    mode: RenderMode,
    width: Option<u32>,
    output: Option<&Path>,
    config: &Config,
    table: &GlyphTable,
) -> Result<(), CommandError> {
    let image = load_image(image, width, config.stream.aspect)?;
    let text = render::render(mode, table, &image)?;

    match output {
        Some(path) => {
            output::write_to_file(path, &text)?;
            log::info!("Wrote {} render to {}", mode.name(), path.display());
        }
        None => output::write_stdout(&text)?,
    }
    Ok(())
}

/// Animate a still image with a moving rainbow.
pub fn run_animate(
    image: &Path,
    frames: Option<u64>,
    width: Option<u32>,
    config: &Config,
    table: &GlyphTable,
) -> Result<(), CommandError> {
    let image = load_image(image, width, config.stream.aspect)?;
    let settings = StreamSettings {
        frames: frames.unwrap_or(config.stream.frames),
        mode: RenderMode::Rainbow { offset: 0 },
        clear_screen: true,
        show_fps: config.stream.show_fps,
    };

    let mut source = StillSource::new(image);
    let stdout = std::io::stdout();
    run_stream(&mut source, table, &settings, &mut stdout.lock())?;
    Ok(())
}

/// Stream the webcam until `frames` have been shown or capture fails.
pub fn run_webcam(
    camera: CameraSettings,
    frames: Option<u64>,
    mode: RenderMode,
    config: &Config,
    table: &GlyphTable,
) -> Result<(), CommandError> {
    let mut source = CameraSource::open(camera)?;
    let settings = StreamSettings {
        frames: frames.unwrap_or(config.stream.frames),
        mode,
        clear_screen: true,
        show_fps: config.stream.show_fps,
    };

    let stdout = std::io::stdout();
    let stats = run_stream(&mut source, table, &settings, &mut stdout.lock())?;
    if stats.truncated_frames > 0 {
        log::warn!("{} frame(s) were truncated", stats.truncated_frames);
    }
    Ok(())
}

/// List available cameras and print them to stdout.
pub fn list_cameras() -> Result<(), CommandError> {
    let devices = camera::list_devices()?;
    if devices.is_empty() {
        println!("No cameras found.");
        println!();
        println!("Make sure your camera is connected and permissions are granted.");
        println!("On macOS, grant access in System Settings > Privacy & Security > Camera.");
    } else {
        println!("Available cameras:");
        for device in devices {
            println!("  {}", device);
        }
        println!();
        println!("Use --device <index> with the webcam command to select a camera.");
    }
    Ok(())
}

/// Handle config subcommand actions.
///
/// `path` is the `--config` override; the default location is used otherwise.
pub fn handle_config_action(
    action: ConfigAction,
    config: &Config,
    path: Option<&Path>,
) -> Result<(), CommandError> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            if config_path.exists() {
                println!("# Config file: {} (exists)", config_path.display());
            } else {
                println!("# Config file: {} (not found)", config_path.display());
            }
            println!();
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init => {
            init_config(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}

/// Write the commented default config to `path`, never overwriting.
pub fn init_config(path: &Path) -> Result<(), CommandError> {
    if path.exists() {
        return Err(CommandError::ConfigExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| CommandError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG).map_err(|source| CommandError::Io {
        path: path.to_path_buf(),
        source,
    })
}
