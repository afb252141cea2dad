//! Frame-by-frame streaming to a terminal.
//!
//! Each iteration runs, strictly in order: acquire a frame, render it into
//! the single reused destination buffer, write it out, measure. Any
//! acquisition failure aborts the loop immediately.

mod fps;
mod source;

pub use fps::{instantaneous_fps, FpsMeter};
pub use source::{CameraSource, FrameSource, StillSource};

use std::io::Write;
use std::time::Instant;

use crate::ascii::GlyphTable;
use crate::buffer::{BufferError, PixelBuffer};
use crate::camera::CameraError;
use crate::render::{render_into, RenderError, RenderMode, CLEAR_HOME};

/// Errors that end a stream.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write frame: {0}")]
    Write(#[from] std::io::Error),
}

/// Streaming loop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSettings {
    /// Number of frames to process
    pub frames: u64,
    /// Render mode; a rainbow offset advances by one per frame
    pub mode: RenderMode,
    /// Emit clear-screen + cursor-home before every frame
    pub clear_screen: bool,
    /// Print per-frame and average frame rate lines
    pub show_fps: bool,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            frames: 65535,
            mode: RenderMode::Color,
            clear_screen: true,
            show_fps: true,
        }
    }
}

/// Summary of a finished stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamStats {
    /// Frames fully rendered and written
    pub frames: u64,
    /// Truncated mean FPS, `None` when no frame completed
    pub average_fps: Option<u32>,
    /// FPS of the final frame
    pub last_fps: Option<u32>,
    /// Frames whose output did not fit the destination
    pub truncated_frames: u64,
}

/// Run the streaming loop.
///
/// The destination buffer is sized from the first frame's dimensions and
/// reused for every later frame of the same size.
///
/// # Errors
/// Returns the first acquisition, render or write failure. Frames already
/// written stay written; no average is printed for an aborted stream.
pub fn run_stream<S, W>(
    source: &mut S,
    table: &GlyphTable,
    settings: &StreamSettings,
    out: &mut W,
) -> Result<StreamStats, StreamError>
where
    S: FrameSource + ?Sized,
    W: Write + ?Sized,
{
    let mut dst = PixelBuffer::default();
    let mut frame_size = None;
    let mut meter = FpsMeter::new();
    let mut truncated_frames = 0;

    log::info!(
        "Streaming {} frame(s) in {} mode",
        settings.frames,
        settings.mode.name()
    );

    for index in 0..settings.frames {
        let started = Instant::now();
        let frame = source.next_frame()?;

        let size = (frame.width(), frame.height());
        if frame_size != Some(size) {
            if let Some((w, h)) = frame_size {
                log::debug!("Frame size changed from {}x{} to {}x{}", w, h, size.0, size.1);
            }
            let capacity = settings.mode.capacity(size.0, size.1);
            dst = PixelBuffer::with_capacity_tracked(capacity, frame.tracker())?;
            frame_size = Some(size);
        }

        let mode = settings.mode.advanced(index);
        let rendered = render_into(mode, table, frame, &mut dst)?;
        if rendered.truncated {
            truncated_frames += 1;
        }

        if settings.clear_screen {
            out.write_all(CLEAR_HOME)?;
        }
        out.write_all(&dst.data()[..rendered.len])?;

        let fps = meter.record(started.elapsed());
        if settings.show_fps {
            writeln!(out, "Frame Rate: {}", fps)?;
        }
        out.flush()?;
    }

    if settings.show_fps {
        if let Some(avg) = meter.average() {
            writeln!(out, "Avg. Frame Rate: {}", avg)?;
            out.flush()?;
        }
    }

    log::info!(
        "Stream finished after {} frame(s), average {:?} fps",
        meter.frames(),
        meter.average()
    );

    Ok(StreamStats {
        frames: meter.frames(),
        average_fps: meter.average(),
        last_fps: meter.last(),
        truncated_frames,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl FrameSource for FailingSource {
        fn next_frame(&mut self) -> Result<&PixelBuffer, StreamError> {
            Err(CameraError::EmptyFrame("unplugged".to_string()).into())
        }
    }

    #[test]
    fn test_failing_source_aborts_before_output() {
        let mut out = Vec::new();
        let settings = StreamSettings {
            frames: 5,
            ..StreamSettings::default()
        };
        let err = run_stream(&mut FailingSource, GlyphTable::standard(), &settings, &mut out)
            .unwrap_err();
        assert!(matches!(err, StreamError::Camera(CameraError::EmptyFrame(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_zero_frames_prints_no_average() {
        let image = PixelBuffer::new(2, 2, 3).unwrap();
        let mut source = StillSource::new(image);
        let mut out = Vec::new();
        let settings = StreamSettings {
            frames: 0,
            ..StreamSettings::default()
        };
        let stats = run_stream(&mut source, GlyphTable::standard(), &settings, &mut out).unwrap();
        assert_eq!(stats.frames, 0);
        assert_eq!(stats.average_fps, None);
        assert!(out.is_empty());
    }
}
