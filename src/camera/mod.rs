//! Camera capture module for webcam access and frame scaling.
//!
//! This module provides:
//! - Device enumeration via [`list_devices`]
//! - Synchronous capture via [`CameraCapture`] (needs the `camera` feature)
//! - Frame scaling via [`resize_frame`] and [`mirror_horizontal`]
//! - Configuration via [`CameraSettings`] and [`Resolution`]

mod capture;
mod device;
mod frame_utils;
mod types;

pub use capture::CameraCapture;
pub use device::list_devices;
pub use frame_utils::{mirror_horizontal, resize_frame, scaled_height};
pub use types::{
    CameraError, CameraInfo, CameraSettings, Resolution, DEFAULT_ASPECT, DEFAULT_TARGET_WIDTH,
};
