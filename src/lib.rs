//! termglyph library crate.
//!
//! Renders RGB pixel buffers as ASCII art text, either plain or with 24-bit
//! terminal color escapes, and streams frames from images or webcams.

pub mod ascii;
pub mod buffer;
pub mod camera;
pub mod cli;
pub mod config;
pub mod output;
pub mod render;
pub mod stream;
