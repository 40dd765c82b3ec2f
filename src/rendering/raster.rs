//! Software rasterizer: paint commands to an RGBA canvas, then PNG

use crate::rendering::font::{glyph_5x7, ADVANCE, GLYPH_HEIGHT};
use crate::rendering::paint::{PaintCommand, Rgba};
use crate::rendering::Screenshot;
use crate::{Error, Result, Viewport};

/// 8-bit RGBA pixel buffer
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        let pixels = [fill.0, fill.1, fill.2, fill.3].repeat(width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some((
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ))
    }

    /// Fill a rectangle, clipped to the canvas
    pub fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, rgba: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width as i64).min(self.width as i64);
        let y1 = (y + height as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let px = [rgba.0, rgba.1, rgba.2, rgba.3];
        for row in y0..y1 {
            let start = (row as usize * self.width as usize + x0 as usize) * 4;
            let end = (row as usize * self.width as usize + x1 as usize) * 4;
            for chunk in self.pixels[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
    }

    /// Draw one line of text with each font pixel as a `scale`-sized square
    pub fn draw_text(&mut self, x: i64, y: i64, text: &str, scale: u32, rgba: Rgba) {
        let step = (ADVANCE * scale) as i64;
        for (i, c) in text.chars().enumerate() {
            let gx = x + i as i64 * step;
            if gx >= self.width as i64 {
                break;
            }
            for (col, &bits) in glyph_5x7(c).iter().enumerate() {
                for row in 0..GLYPH_HEIGHT {
                    if bits & (1u8 << row) != 0 {
                        self.fill_rect(
                            gx + col as i64 * scale as i64,
                            y + row as i64 * scale as i64,
                            scale,
                            scale,
                            rgba,
                        );
                    }
                }
            }
        }
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
            writer.finish()?;
        }
        Ok(out)
    }
}

/// Execute `commands` laid out for `viewport` at `scale` device pixels per
/// logical pixel.
pub fn rasterize_canvas(commands: &[PaintCommand], viewport: Viewport, scale: u32) -> Result<Canvas> {
    if scale == 0 {
        return Err(Error::ConfigError("render scale must be at least 1".into()));
    }
    let width = viewport.width.checked_mul(scale);
    let height = viewport.height.checked_mul(scale);
    let (width, height) = match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            return Err(Error::ConfigError(format!(
                "cannot rasterize a {}x{} viewport at scale {}",
                viewport.width, viewport.height, scale
            )))
        }
    };

    let s = scale as i64;
    let mut canvas = Canvas::new(width, height, (0, 0, 0, 0));
    for cmd in commands {
        match cmd {
            PaintCommand::SolidRect {
                x,
                y,
                width,
                height,
                rgba,
            } => canvas.fill_rect(*x as i64 * s, *y as i64 * s, width * scale, height * scale, *rgba),
            PaintCommand::Text {
                x,
                y,
                text,
                scale: text_scale,
                rgba,
            } => canvas.draw_text(*x as i64 * s, *y as i64 * s, text, text_scale * scale, *rgba),
        }
    }
    Ok(canvas)
}

/// Rasterize and encode to PNG
pub fn rasterize(commands: &[PaintCommand], viewport: Viewport, scale: u32) -> Result<Screenshot> {
    let canvas = rasterize_canvas(commands, viewport, scale)?;
    Ok(Screenshot {
        width: canvas.width(),
        height: canvas.height(),
        png_data: canvas.encode_png()?,
    })
}
