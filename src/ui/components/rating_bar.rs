//! Star rating bar component.
//!
//! Renders `star_num` equally spaced star slots. Empty-star icons are drawn
//! per slot; the rating is shown by overlaying filled-star icons, with the
//! final star clipped to a fraction of its width. Pressing or dragging
//! across the bar maps the horizontal position to a rating.

use alloc::boxed::Box;

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::image::Image;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{ContainsPoint, Rectangle};
use log::{debug, trace};

use crate::config::RatingBarConfig;
use crate::ui::core::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::icon::StarIcon;

/// Single-slot rating change callback. Registering a new listener replaces
/// the previous one; at most one observer is ever notified.
type RatingListener = Box<dyn FnMut(f32)>;

/// Star rating bar widget
pub struct RatingBar {
    top_left: Point,
    star_space: u32,
    star_size: u32,
    star_num: u32,
    rating: f32,
    integer_step: bool,
    empty_icon: Option<StarIcon>,
    fill_icon: Option<StarIcon>,
    on_rating_change: Option<RatingListener>,
    dragging: bool,
    dirty: bool,
}

impl RatingBar {
    /// Create a rating bar with default configuration at the given position.
    pub fn new(top_left: Point) -> Self {
        Self::from_config(top_left, RatingBarConfig::default())
    }

    /// Create a rating bar from a configuration.
    ///
    /// The star count is clamped to at least one; the initial rating is
    /// stored as supplied, without rounding or range checks.
    pub fn from_config(top_left: Point, config: RatingBarConfig) -> Self {
        Self {
            top_left,
            star_space: config.star_space,
            star_size: config.star_size,
            star_num: config.star_num.max(1),
            rating: config.rating,
            integer_step: config.integer_step,
            empty_icon: None,
            fill_icon: None,
            on_rating_change: None,
            dragging: false,
            dirty: true,
        }
    }

    /// Set the gap between stars in pixels.
    pub fn with_star_space(mut self, px: u32) -> Self {
        self.star_space = px;
        self
    }

    /// Set the star side length in pixels, rescaling any icons already set.
    pub fn with_star_size(mut self, px: u32) -> Self {
        self.star_size = px;
        self.empty_icon = self.empty_icon.take().and_then(|icon| fit_icon(icon, px));
        self.fill_icon = self.fill_icon.take().and_then(|icon| fit_icon(icon, px));
        self
    }

    /// Set the number of stars (clamped to at least one).
    pub fn with_star_count(mut self, count: u32) -> Self {
        self.star_num = count.max(1);
        self
    }

    /// Set the initial rating, stored as supplied without rounding.
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    /// Set the rounding mode for subsequent rating changes.
    pub fn with_integer_step(mut self, integer_step: bool) -> Self {
        self.integer_step = integer_step;
        self
    }

    /// Set the background icon drawn once per star slot.
    pub fn with_empty_icon(mut self, icon: StarIcon) -> Self {
        self.empty_icon = fit_icon(icon, self.star_size);
        self
    }

    /// Set the filled-star icon used for the rating overlay.
    pub fn with_fill_icon(mut self, icon: StarIcon) -> Self {
        self.fill_icon = fit_icon(icon, self.star_size);
        self
    }

    /// Toggle integer-step rounding for subsequent rating changes.
    ///
    /// The current rating is not recomputed.
    pub fn set_integer_step(&mut self, integer_step: bool) {
        self.integer_step = integer_step;
    }

    /// Apply the rating-setting rule to a candidate value.
    ///
    /// In integer-step mode the candidate is rounded up to the next whole
    /// star; otherwise it is rounded to one decimal digit. The value is not
    /// clamped to `[0, star_num]`. The change listener, if registered, is
    /// invoked with the new rating and a redraw is requested.
    pub fn set_rating(&mut self, candidate: f32) {
        self.rating = if self.integer_step {
            libm::ceilf(candidate)
        } else {
            round_to_tenths(candidate)
        };
        trace!("rating set to {}", self.rating);

        if let Some(listener) = self.on_rating_change.as_mut() {
            listener(self.rating);
        }
        self.dirty = true;
    }

    /// Current rating value.
    pub fn rating(&self) -> f32 {
        self.rating
    }

    /// Register the rating change listener, replacing any previous one.
    pub fn set_on_rating_change<F>(&mut self, listener: F)
    where
        F: FnMut(f32) + 'static,
    {
        self.on_rating_change = Some(Box::new(listener));
    }

    /// Required size: `star_size * star_num + star_space * (star_num - 1)`
    /// wide, `star_size` tall.
    pub fn size(&self) -> Size {
        let width = self.star_size * self.star_num + self.star_space * (self.star_num - 1);
        Size::new(width, self.star_size)
    }

    /// Top-left corner of star slot `slot`.
    fn slot_origin(&self, slot: u32) -> Point {
        Point::new(
            self.top_left.x + (slot * (self.star_size + self.star_space)) as i32,
            self.top_left.y,
        )
    }

    /// Map a touch position to a candidate rating and apply it.
    ///
    /// The x coordinate is clamped to the bar's horizontal extent, so drags
    /// past either edge pin the rating to 0 or `star_num`.
    fn apply_touch(&mut self, point: TouchPoint) {
        let width = self.size().width;
        if width == 0 {
            return;
        }
        let x = (point.x as i32 - self.top_left.x).clamp(0, width as i32) as f32;
        let candidate = x / (width as f32 / self.star_num as f32);
        self.set_rating(candidate);
    }
}

impl Drawable for RatingBar {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if let Some(empty) = &self.empty_icon {
            for slot in 0..self.star_num {
                Image::new(empty, self.slot_origin(slot)).draw(display)?;
            }
        }

        // With either icon unset the fill pass is skipped and the widget
        // degrades to background-only rendering.
        let (Some(_), Some(fill)) = (&self.empty_icon, &self.fill_icon) else {
            debug!("rating bar icon unset, skipping fill pass");
            return Ok(());
        };

        let plan = fill_plan(self.rating, self.star_size);
        let full = plan.full_stars.min(self.star_num);
        for slot in 0..full {
            Image::new(fill, self.slot_origin(slot)).draw(display)?;
        }

        // The partial star only exists when its slot is on the bar.
        if plan.partial_px > 0 && full == plan.full_stars && full < self.star_num {
            let origin = self.slot_origin(full);
            let clip = Rectangle::new(origin, Size::new(plan.partial_px, self.star_size));
            Image::new(fill, origin).draw(&mut display.clipped(&clip))?;
        }
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(self.top_left, self.size())
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for RatingBar {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds().contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.dragging = true;
                self.apply_touch(point);
                TouchResult::Handled
            }
            TouchEvent::Drag(point) if self.dragging => {
                self.apply_touch(point);
                TouchResult::Handled
            }
            TouchEvent::Release(_) if self.dragging => {
                self.dragging = false;
                TouchResult::Handled
            }
            _ => TouchResult::NotHandled,
        }
    }
}

/// Fill overlay layout for a given rating: how many whole filled stars to
/// draw, and the pixel width of the trailing partial star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FillPlan {
    full_stars: u32,
    partial_px: u32,
}

fn fill_plan(rating: f32, star_size: u32) -> FillPlan {
    if rating <= 1.0 {
        let width = libm::roundf(star_size as f32 * rating);
        let partial_px = if width <= 0.0 {
            0
        } else {
            (width as u32).min(star_size)
        };
        return FillPlan {
            full_stars: 0,
            partial_px,
        };
    }

    let full = libm::floorf(rating);
    let fraction = round_to_tenths(rating - full);
    let partial = libm::roundf(star_size as f32 * fraction);
    FillPlan {
        full_stars: full as u32,
        partial_px: (partial.max(0.0) as u32).min(star_size),
    }
}

/// Round to one decimal digit.
fn round_to_tenths(value: f32) -> f32 {
    libm::roundf(value * 10.0) / 10.0
}

/// Rescale an icon to the bar's star size, dropping it if rescaling fails.
fn fit_icon(icon: StarIcon, side: u32) -> Option<StarIcon> {
    match icon.resample(side) {
        Ok(icon) => Some(icon),
        Err(err) => {
            debug!("rating bar icon rejected: {}", err);
            None
        }
    }
}
