//! Core UI traits and types shared by widgets and their hosts.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Represents a 2D touch point on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Touch events that can occur on the UI
#[derive(Debug, Clone, Copy)]
pub enum TouchEvent {
    /// Initial touch press at a point
    Press(TouchPoint),
    /// Touch drag to a new point
    Drag(TouchPoint),
    /// Touch lifted at a point
    Release(TouchPoint),
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResult {
    /// Event was handled by this element
    Handled,
    /// Event was not handled, pass to next element
    NotHandled,
}

/// Dirty region tracking for efficient rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyRegion {
    pub bounds: Rectangle,
    pub is_dirty: bool,
}

impl DirtyRegion {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            is_dirty: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.is_dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Expand this dirty region to include another region
    pub fn expand_to_include(&mut self, other: Rectangle) {
        if !self.is_dirty {
            self.bounds = other;
            self.is_dirty = true;
        } else {
            // Bounding box that includes both rectangles
            let min_x = self.bounds.top_left.x.min(other.top_left.x);
            let min_y = self.bounds.top_left.y.min(other.top_left.y);

            let max_x = (self.bounds.top_left.x + self.bounds.size.width as i32)
                .max(other.top_left.x + other.size.width as i32);
            let max_y = (self.bounds.top_left.y + self.bounds.size.height as i32)
                .max(other.top_left.y + other.size.height as i32);

            self.bounds = Rectangle::new(
                Point::new(min_x, min_y),
                Size::new((max_x - min_x) as u32, (max_y - min_y) as u32),
            );
        }
    }
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element to the display within the given bounds
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);

    /// Get the dirty region for partial updates
    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.is_dirty() {
            Some(DirtyRegion::new(self.bounds()))
        } else {
            None
        }
    }
}

/// Trait for UI elements that respond to touch events
pub trait Touchable {
    /// Check if a point is within this element's bounds
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Handle a touch event, returns result indicating if the event was consumed
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult;
}

/// Combined trait for interactive drawable elements
pub trait Interactive: Drawable + Touchable {}

/// Implement Interactive for any type that implements both Drawable and Touchable
impl<T: Drawable + Touchable> Interactive for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_point_converts_to_display_point() {
        let point = TouchPoint::new(37, 120);
        assert_eq!(point.to_point(), Point::new(37, 120));
    }

    #[test]
    fn dirty_region_expands_to_bounding_box() {
        let mut region = DirtyRegion::new(Rectangle::new(Point::new(10, 10), Size::new(5, 5)));
        region.expand_to_include(Rectangle::new(Point::new(0, 12), Size::new(4, 8)));

        assert_eq!(region.bounds.top_left, Point::new(0, 10));
        assert_eq!(region.bounds.size, Size::new(15, 10));
        assert!(region.is_dirty());
    }

    #[test]
    fn clean_region_adopts_first_rectangle() {
        let mut region = DirtyRegion::new(Rectangle::new(Point::new(10, 10), Size::new(5, 5)));
        region.mark_clean();

        let incoming = Rectangle::new(Point::new(2, 3), Size::new(7, 7));
        region.expand_to_include(incoming);

        assert_eq!(region.bounds, incoming);
        assert!(region.is_dirty());
    }
}
