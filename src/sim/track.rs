//! Track collision seam
//!
//! The track image lives with the platform layer. The simulation only
//! maps a world position into mask pixels and asks a [`TrackProbe`]
//! whether that pixel is off the racing surface.

use serde::{Deserialize, Serialize};

use crate::ecs::Transform;
use crate::math::Vector2;

/// Axis-aligned world-space rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Position relative to the rect, in [0, 1) when inside
    pub fn normalize(&self, p: Vector2) -> Option<Vector2> {
        if self.is_degenerate() {
            return None;
        }
        Some(Vector2::new(
            (p.x - self.x) / self.width,
            (p.y - self.y) / self.height,
        ))
    }
}

/// Where the track image sits in the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackTransform {
    pub origin: Vector2,
    pub position: Vector2,
    pub scale: Vector2,
    /// Global bounds derived from the fields above and the image size
    pub bounds: Rect,
}

impl TrackTransform {
    /// Place an image of `size` local units with the given transform
    pub fn from_transform(transform: &Transform, size: Vector2) -> Self {
        let scale = transform.scale;
        let top_left = transform.position
            - Vector2::new(transform.origin.x * scale.x, transform.origin.y * scale.y);
        Self {
            origin: transform.origin,
            position: transform.position,
            scale,
            bounds: Rect::new(top_left.x, top_left.y, size.x * scale.x, size.y * scale.y),
        }
    }

    /// Mask pixel under `p`, or None when `p` is outside the bounds or the mask
    pub fn to_pixel(&self, p: Vector2, mask_size: (u32, u32)) -> Option<(u32, u32)> {
        let n = self.bounds.normalize(p)?;
        if n.x < 0.0 || n.y < 0.0 {
            return None;
        }
        let px = (n.x * mask_size.0 as f32) as u32;
        let py = (n.y * mask_size.1 as f32) as u32;
        (px < mask_size.0 && py < mask_size.1).then_some((px, py))
    }
}

/// Read-only view of the track's collision mask
pub trait TrackProbe {
    fn mask_size(&self) -> (u32, u32);

    fn is_off_track(&self, px: u32, py: u32) -> bool;

    /// World-space query. Anything that does not land on a mask pixel is on-track.
    fn is_off_track_at(&self, track: &TrackTransform, p: Vector2) -> bool {
        match track.to_pixel(p, self.mask_size()) {
            Some((px, py)) => self.is_off_track(px, py),
            None => false,
        }
    }
}

/// A track with no hazards
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenTrack;

impl TrackProbe for OpenTrack {
    fn mask_size(&self) -> (u32, u32) {
        (0, 0)
    }

    fn is_off_track(&self, _px: u32, _py: u32) -> bool {
        false
    }
}

/// Row-major grid of off-track flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMask {
    width: u32,
    height: u32,
    off_track: Vec<bool>,
}

impl TrackMask {
    /// Fully drivable mask
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            off_track: vec![false; width as usize * height as usize],
        }
    }

    /// Build from per-pixel flags. Missing cells are drivable, extra cells ignored.
    pub fn from_cells(width: u32, height: u32, cells: impl IntoIterator<Item = bool>) -> Self {
        let mut mask = Self::new(width, height);
        for (slot, cell) in mask.off_track.iter_mut().zip(cells) {
            *slot = cell;
        }
        mask
    }

    pub fn set_off_track(&mut self, px: u32, py: u32, off: bool) {
        if px < self.width && py < self.height {
            self.off_track[(py * self.width + px) as usize] = off;
        }
    }

    /// Mark a rectangle of pixels, clipped to the mask
    pub fn fill(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, off: bool) {
        for py in y0..y1.min(self.height) {
            for px in x0..x1.min(self.width) {
                self.set_off_track(px, py, off);
            }
        }
    }
}

impl TrackProbe for TrackMask {
    fn mask_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn is_off_track(&self, px: u32, py: u32) -> bool {
        if px >= self.width || py >= self.height {
            return false;
        }
        self.off_track[(py * self.width + px) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> TrackTransform {
        let mut t = Transform::at(Vector2::new(100.0, 100.0));
        t.set_scale(Vector2::new(2.0, 2.0));
        TrackTransform::from_transform(&t, Vector2::new(50.0, 50.0))
    }

    #[test]
    fn test_bounds_follow_transform() {
        let t = track();
        assert_eq!(t.bounds, Rect::new(100.0, 100.0, 100.0, 100.0));

        let mut centered = Transform::at(Vector2::new(0.0, 0.0));
        centered.set_origin(Vector2::new(25.0, 25.0));
        let c = TrackTransform::from_transform(&centered, Vector2::new(50.0, 50.0));
        assert_eq!(c.bounds, Rect::new(-25.0, -25.0, 50.0, 50.0));
    }

    #[test]
    fn test_pixel_mapping() {
        let t = track();
        assert_eq!(t.to_pixel(Vector2::new(100.0, 100.0), (10, 10)), Some((0, 0)));
        assert_eq!(t.to_pixel(Vector2::new(155.0, 195.0), (10, 10)), Some((5, 9)));
        assert_eq!(t.to_pixel(Vector2::new(200.0, 150.0), (10, 10)), None);
        assert_eq!(t.to_pixel(Vector2::new(99.0, 150.0), (10, 10)), None);
    }

    #[test]
    fn test_degenerate_bounds_are_on_track() {
        let mut t = track();
        t.bounds = Rect::new(0.0, 0.0, 0.0, 10.0);
        let mut mask = TrackMask::new(4, 4);
        mask.fill(0, 0, 4, 4, true);
        assert!(!mask.is_off_track_at(&t, Vector2::ZERO));
    }

    #[test]
    fn test_mask_lookup() {
        let t = track();
        let mut mask = TrackMask::new(10, 10);
        mask.fill(0, 0, 10, 2, true);
        assert!(mask.is_off_track_at(&t, Vector2::new(150.0, 105.0)));
        assert!(!mask.is_off_track_at(&t, Vector2::new(150.0, 150.0)));
        assert!(!OpenTrack.is_off_track_at(&t, Vector2::new(150.0, 105.0)));
        assert!(!mask.is_off_track(50, 50));
    }

    #[test]
    fn test_from_cells() {
        let mask = TrackMask::from_cells(2, 2, [false, true, true]);
        assert!(mask.is_off_track(1, 0));
        assert!(mask.is_off_track(0, 1));
        assert!(!mask.is_off_track(1, 1));
    }
}
