//! Fixed-size star icon rasters.
//!
//! Icon artwork arrives as any `ImageDrawable` (raw image data, BMP, another
//! icon). At configuration time it is rasterized once into a heap-backed
//! square pixel buffer sized to the widget's star slots, so the draw path
//! never rescales. Partial-width star fills are produced by drawing the
//! raster through a clipped draw target.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::image::ImageDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use thiserror_no_std::Error;

/// Errors from icon construction and rescaling.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconError {
    #[error("icon side length must be non-zero")]
    ZeroSide,
    #[error("icon source image has zero width or height")]
    EmptySource,
    #[error("pixel buffer holds {len} pixels, expected {side}x{side}")]
    PixelCountMismatch { side: u32, len: usize },
}

/// A square icon raster used for the star slots of a rating bar.
///
/// Pixels are stored row-major. The raster has a fixed side length; the
/// rating bar keeps its icons sized to `star_size` so that drawing is a
/// plain pixel copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarIcon {
    side: u32,
    pixels: Vec<Rgb565>,
}

impl StarIcon {
    /// Create an icon from a row-major pixel buffer.
    pub fn new(side: u32, pixels: Vec<Rgb565>) -> Result<Self, IconError> {
        if side == 0 {
            return Err(IconError::ZeroSide);
        }
        if pixels.len() != (side * side) as usize {
            return Err(IconError::PixelCountMismatch {
                side,
                len: pixels.len(),
            });
        }
        Ok(Self { side, pixels })
    }

    /// Create a uniformly colored icon.
    pub fn solid(side: u32, color: Rgb565) -> Result<Self, IconError> {
        if side == 0 {
            return Err(IconError::ZeroSide);
        }
        Ok(Self {
            side,
            pixels: vec![color; (side * side) as usize],
        })
    }

    /// Rasterize an image into a `side` x `side` icon.
    ///
    /// The source is drawn at its native size into a RAM buffer, then
    /// nearest-neighbor resampled to the requested side length. Non-square
    /// sources are stretched to fit, matching how a scalable drawable would
    /// be rendered into a square slot.
    pub fn from_image<T>(source: &T, side: u32) -> Result<Self, IconError>
    where
        T: ImageDrawable<Color = Rgb565>,
    {
        if side == 0 {
            return Err(IconError::ZeroSide);
        }
        let native = source.size();
        if native.width == 0 || native.height == 0 {
            return Err(IconError::EmptySource);
        }

        let mut frame = RasterFrame::new(native);
        match source.draw(&mut frame) {
            Ok(()) => {}
            Err(infallible) => match infallible {},
        }

        let pixels = resample_grid(
            &frame.pixels,
            native.width as usize,
            native.height as usize,
            side as usize,
        );
        Ok(Self { side, pixels })
    }

    /// Nearest-neighbor rescale to a new side length.
    pub fn resample(&self, side: u32) -> Result<Self, IconError> {
        if side == 0 {
            return Err(IconError::ZeroSide);
        }
        if side == self.side {
            return Ok(self.clone());
        }
        let pixels = resample_grid(
            &self.pixels,
            self.side as usize,
            self.side as usize,
            side as usize,
        );
        Ok(Self { side, pixels })
    }

    /// Side length of the raster in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }
}

/// Nearest-neighbor resample of a `src_w` x `src_h` grid to `side` x `side`.
fn resample_grid(src: &[Rgb565], src_w: usize, src_h: usize, side: usize) -> Vec<Rgb565> {
    let mut pixels = Vec::with_capacity(side * side);
    for y in 0..side {
        let sy = y * src_h / side;
        for x in 0..side {
            let sx = x * src_w / side;
            pixels.push(src[sy * src_w + sx]);
        }
    }
    pixels
}

impl OriginDimensions for StarIcon {
    fn size(&self) -> Size {
        Size::new(self.side, self.side)
    }
}

impl ImageDrawable for StarIcon {
    type Color = Rgb565;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.fill_contiguous(&self.bounding_box(), self.pixels.iter().copied())
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let stride = self.side as usize;
        let x0 = (area.top_left.x.max(0) as usize).min(stride);
        let y0 = (area.top_left.y.max(0) as usize).min(stride);
        let w = (area.size.width as usize).min(stride - x0);
        let h = (area.size.height as usize).min(stride - y0);

        let pixels = &self.pixels;
        let colors = (y0..y0 + h).flat_map(move |y| {
            let row = y * stride + x0;
            pixels[row..row + w].iter().copied()
        });
        target.fill_contiguous(
            &Rectangle::new(Point::zero(), Size::new(w as u32, h as u32)),
            colors,
        )
    }
}

/// RAM buffer the icon source is rasterized into, at the source's native
/// size. Out-of-bounds pixels are discarded, as on a hardware display.
struct RasterFrame {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl RasterFrame {
    fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Rgb565::BLACK; (size.width * size.height) as usize],
        }
    }
}

impl OriginDimensions for RasterFrame {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for RasterFrame {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let w = self.size.width as usize;
        let h = self.size.height as usize;

        for Pixel(coord, color) in pixels {
            let x = coord.x;
            let y = coord.y;
            if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
                self.pixels[y as usize * w + x as usize] = color;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::image::Image;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn solid_icon_is_uniform() {
        let icon = StarIcon::solid(4, Rgb565::RED).unwrap();
        assert_eq!(icon.side(), 4);

        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        Image::new(&icon, Point::zero()).draw(&mut display).unwrap();
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(3, 3)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(4, 0)), None);
    }

    #[test]
    fn new_validates_dimensions() {
        assert_eq!(StarIcon::new(0, Vec::new()), Err(IconError::ZeroSide));
        assert_eq!(
            StarIcon::new(2, vec![Rgb565::RED; 3]),
            Err(IconError::PixelCountMismatch { side: 2, len: 3 })
        );
        assert_eq!(StarIcon::solid(0, Rgb565::RED), Err(IconError::ZeroSide));
    }

    #[test]
    fn from_image_resamples_to_requested_side() {
        let source = StarIcon::solid(2, Rgb565::GREEN).unwrap();
        let icon = StarIcon::from_image(&source, 4).unwrap();

        assert_eq!(icon.side(), 4);
        assert_eq!(icon, StarIcon::solid(4, Rgb565::GREEN).unwrap());
    }

    #[test]
    fn from_image_rejects_zero_side() {
        let source = StarIcon::solid(2, Rgb565::GREEN).unwrap();
        assert_eq!(
            StarIcon::from_image(&source, 0),
            Err(IconError::ZeroSide)
        );
    }

    #[test]
    fn resample_preserves_quadrants() {
        let icon = StarIcon::new(
            2,
            vec![Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::WHITE],
        )
        .unwrap();
        let scaled = icon.resample(4).unwrap();

        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        Image::new(&scaled, Point::zero())
            .draw(&mut display)
            .unwrap();
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(3, 0)), Some(Rgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(0, 3)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(3, 3)), Some(Rgb565::WHITE));
    }

    #[test]
    fn clipped_draw_covers_partial_width() {
        let icon = StarIcon::solid(4, Rgb565::RED).unwrap();
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();

        let clip = Rectangle::new(Point::zero(), Size::new(2, 4));
        Image::new(&icon, Point::zero())
            .draw(&mut display.clipped(&clip))
            .unwrap();

        assert_eq!(display.get_pixel(Point::new(1, 3)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(2, 0)), None);
    }
}
