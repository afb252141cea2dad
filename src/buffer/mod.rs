//! Owned pixel and text buffers.
//!
//! A [`PixelBuffer`] is a fixed-size block of bytes holding either raw image
//! samples (`width * height * channels`) or an assembled text frame
//! (`capacity x 1 x 1`). Storage is never resized in place: a new buffer
//! replaces an old one.
//!
//! Every buffer that owns storage is counted by an [`AllocationTracker`].
//! Deep copies count as new allocations, ownership transfers via
//! [`PixelBuffer::take`] or plain moves do not, and dropping an empty buffer
//! leaves the count untouched.

mod error;
mod tracker;

pub use error::BufferError;
pub use tracker::AllocationTracker;

use std::fmt;
use std::path::Path;

use image::DynamicImage;

/// Owned, contiguous byte storage with image dimensions.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u32,
    storage: Option<Box<[u8]>>,
    tracker: AllocationTracker,
}

impl PixelBuffer {
    /// Allocate a zero-filled buffer of `width * height * channels` bytes.
    ///
    /// # Errors
    /// * `BufferError::Overflow` - If the byte size does not fit in `usize`
    /// * `BufferError::Allocation` - If the allocator refuses the request
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self, BufferError> {
        Self::new_tracked(width, height, channels, AllocationTracker::global())
    }

    /// Same as [`PixelBuffer::new`], reporting to `tracker`.
    pub fn new_tracked(
        width: u32,
        height: u32,
        channels: u32,
        tracker: &AllocationTracker,
    ) -> Result<Self, BufferError> {
        let len = byte_len(width, height, channels)?;
        let storage = allocate(len)?;
        Ok(Self::adopt(width, height, channels, storage, tracker))
    }

    /// Allocate and deep-copy `width * height * channels` bytes from `src`.
    ///
    /// Extra trailing bytes in `src` are ignored.
    pub fn from_bytes(
        width: u32,
        height: u32,
        channels: u32,
        src: &[u8],
    ) -> Result<Self, BufferError> {
        Self::from_bytes_tracked(width, height, channels, src, AllocationTracker::global())
    }

    /// Same as [`PixelBuffer::from_bytes`], reporting to `tracker`.
    pub fn from_bytes_tracked(
        width: u32,
        height: u32,
        channels: u32,
        src: &[u8],
        tracker: &AllocationTracker,
    ) -> Result<Self, BufferError> {
        let len = byte_len(width, height, channels)?;
        if src.len() < len {
            return Err(BufferError::ShortSource {
                expected: len,
                actual: src.len(),
            });
        }
        let mut storage = allocate(len)?;
        storage.copy_from_slice(&src[..len]);
        Ok(Self::adopt(width, height, channels, storage, tracker))
    }

    /// Allocate a text buffer of `capacity` bytes (shape `capacity x 1 x 1`).
    pub fn with_capacity(capacity: usize) -> Result<Self, BufferError> {
        Self::with_capacity_tracked(capacity, AllocationTracker::global())
    }

    /// Same as [`PixelBuffer::with_capacity`], reporting to `tracker`.
    pub fn with_capacity_tracked(
        capacity: usize,
        tracker: &AllocationTracker,
    ) -> Result<Self, BufferError> {
        let width = u32::try_from(capacity).map_err(|_| BufferError::Allocation { bytes: capacity })?;
        Self::new_tracked(width, 1, 1, tracker)
    }

    /// Decode an image file, keeping its native 8-bit channel layout.
    ///
    /// Gray, gray+alpha, RGB and RGBA images keep 1, 2, 3 and 4 channels.
    /// Higher bit depths are narrowed to 8-bit RGB or RGBA.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BufferError> {
        let path = path.as_ref();
        let (width, height, channels, bytes) = match decode(path)? {
            DynamicImage::ImageLuma8(img) => (img.width(), img.height(), 1, img.into_raw()),
            DynamicImage::ImageLumaA8(img) => (img.width(), img.height(), 2, img.into_raw()),
            DynamicImage::ImageRgb8(img) => (img.width(), img.height(), 3, img.into_raw()),
            DynamicImage::ImageRgba8(img) => (img.width(), img.height(), 4, img.into_raw()),
            other if other.color().has_alpha() => {
                let img = other.to_rgba8();
                (img.width(), img.height(), 4, img.into_raw())
            }
            other => {
                let img = other.to_rgb8();
                (img.width(), img.height(), 3, img.into_raw())
            }
        };
        // `bytes` is decoder staging memory; it is dropped on every path out of here.
        Self::from_bytes(width, height, channels, &bytes)
    }

    /// Decode an image file into a 3-channel RGB buffer.
    pub fn from_file_rgb(path: impl AsRef<Path>) -> Result<Self, BufferError> {
        let path = path.as_ref();
        let rgb = decode(path)?.into_rgb8();
        Self::from_bytes(rgb.width(), rgb.height(), 3, rgb.as_raw())
    }

    /// Transfer ownership out of `self`, leaving an empty buffer behind.
    ///
    /// The returned buffer keeps the original storage, dimensions and
    /// tracker; no bytes are copied and the live count does not change.
    pub fn take(&mut self) -> PixelBuffer {
        let empty = PixelBuffer::empty(self.tracker.clone());
        std::mem::replace(self, empty)
    }

    /// Live count on the global tracker.
    pub fn live_count() -> usize {
        AllocationTracker::global().live()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Declared byte length.
    pub fn len(&self) -> usize {
        self.storage.as_deref().map_or(0, <[u8]>::len)
    }

    /// True when the buffer owns no storage.
    pub fn is_empty(&self) -> bool {
        self.storage.is_none()
    }

    pub fn data(&self) -> &[u8] {
        self.storage.as_deref().unwrap_or_default()
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        self.storage.as_deref_mut().unwrap_or_default()
    }

    /// Raw storage handle, null when the buffer is empty.
    pub fn as_ptr(&self) -> *const u8 {
        self.storage
            .as_deref()
            .map_or(std::ptr::null(), <[u8]>::as_ptr)
    }

    /// Logical text content: bytes up to the first NUL, or the whole buffer.
    pub fn text(&self) -> &[u8] {
        let data = self.data();
        let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
        &data[..end]
    }

    pub fn tracker(&self) -> &AllocationTracker {
        &self.tracker
    }

    fn empty(tracker: AllocationTracker) -> Self {
        Self {
            width: 0,
            height: 0,
            channels: 0,
            storage: None,
            tracker,
        }
    }

    fn adopt(
        width: u32,
        height: u32,
        channels: u32,
        storage: Box<[u8]>,
        tracker: &AllocationTracker,
    ) -> Self {
        if storage.is_empty() {
            return Self {
                width,
                height,
                channels,
                storage: None,
                tracker: tracker.clone(),
            };
        }
        tracker.acquire();
        Self {
            width,
            height,
            channels,
            storage: Some(storage),
            tracker: tracker.clone(),
        }
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::empty(AllocationTracker::global().clone())
    }
}

impl Clone for PixelBuffer {
    /// Deep copy: the clone owns fresh storage and counts as a new instance.
    fn clone(&self) -> Self {
        let mut copy = Self::empty(self.tracker.clone());
        copy.width = self.width;
        copy.height = self.height;
        copy.channels = self.channels;
        if let Some(storage) = &self.storage {
            self.tracker.acquire();
            copy.storage = Some(storage.clone());
        }
        copy
    }
}

impl Drop for PixelBuffer {
    fn drop(&mut self) {
        if self.storage.take().is_some() {
            self.tracker.release();
        }
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

fn byte_len(width: u32, height: u32, channels: u32) -> Result<usize, BufferError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels as usize))
        .ok_or(BufferError::Overflow {
            width,
            height,
            channels,
        })
}

fn allocate(len: usize) -> Result<Box<[u8]>, BufferError> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(len)
        .map_err(|_| BufferError::Allocation { bytes: len })?;
    storage.resize(len, 0);
    Ok(storage.into_boxed_slice())
}

fn decode(path: &Path) -> Result<DynamicImage, BufferError> {
    log::debug!("Decoding image: {}", path.display());
    image::open(path).map_err(|source| BufferError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
