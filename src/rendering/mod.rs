//! Slide rendering: layout, paint and raster stages plus a text snapshot.
//!
//! Rendering only happens when a caller asks for it; moving through the deck
//! never rasterizes anything.

pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;
pub mod text;

use base64::Engine as _;
use log::debug;
use sha2::{Digest, Sha256};

use crate::slide::{Slide, SlidePosition};
use crate::{Result, Viewport};

pub use text::{text_snapshot, TextSnapshot};

/// Output settings for slide images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Logical slide size the layout is computed for
    pub viewport: Viewport,
    /// Device pixels per logical pixel
    pub scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            scale: 2,
        }
    }
}

/// A rasterized slide
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// `data:image/png;base64,...` form of the image
    pub fn to_data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png_data)
        )
    }

    /// Hex SHA-256 of the PNG bytes
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}

/// Lay out, paint and rasterize one slide
pub fn render_slide(slide: &Slide, position: SlidePosition, config: &RenderConfig) -> Result<Screenshot> {
    let nodes = layout::layout_slide(slide, position, config.viewport);
    let commands = paint::paint_slide(&nodes, config.viewport);
    let shot = raster::rasterize(&commands, config.viewport, config.scale)?;
    debug!(
        "rendered {} ({}) as {}x{} png, {} bytes",
        slide.reference(),
        position.caption(),
        shot.width,
        shot.height,
        shot.png_data.len()
    );
    Ok(shot)
}
