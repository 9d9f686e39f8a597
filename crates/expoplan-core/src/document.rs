//! Background document boundary.
//!
//! Turning a source document into pixels happens outside the core. The
//! core only keeps the resulting image handle and its pixel size, which
//! define the world-space extent of the plan.

use kurbo::Size;
use thiserror::Error;

/// Opaque handle to a raster image owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u64);

/// A rasterised background page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterImage {
    pub handle: ImageHandle,
    pub width: u32,
    pub height: u32,
}

impl RasterImage {
    /// Pixel size, which is also the world-space size of the plan.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Errors from rasterising a background document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentDecodeError {
    #[error("not a valid document: {0}")]
    InvalidDocument(String),
    #[error("rasterized page has no area ({width}x{height})")]
    EmptyRaster { width: u32, height: u32 },
}

/// Rasterises the first page of a document.
///
/// Hosts whose renderer is asynchronous skip this trait and hand the
/// completion straight to [`crate::Canvas::apply_rasterized`].
pub trait DocumentRenderer {
    fn rasterize(&self, document: &[u8]) -> Result<RasterImage, DocumentDecodeError>;
}

/// Reject rasters that cannot be fitted to the viewport.
pub(crate) fn validate(image: RasterImage) -> Result<RasterImage, DocumentDecodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(DocumentDecodeError::EmptyRaster {
            width: image.width,
            height: image.height,
        });
    }
    Ok(image)
}
