//! Normalized tracking coordinates to surface-local pixels.
//!
//! Tracking contacts arrive as `[0, 1] x [0, 1]` positions relative to the
//! whole display. [`SurfaceLayout`] turns them into absolute display pixels,
//! then into pixels relative to the surface the pipeline serves, and decides
//! whether a new contact belongs to that surface at all.

use tapline_geometry::{Point, Rect, Size};

/// A secondary window owned by the host, such as a dialog or popup menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct OverlayWindow {
    pub showing: bool,
    pub modal: bool,
    /// The window has keyboard focus.
    pub active: bool,
    pub always_on_top: bool,
}

impl OverlayWindow {
    /// A visible overlay that takes priority over the surface.
    pub fn blocks_tracking(&self) -> bool {
        self.showing && (self.modal || self.active || self.always_on_top)
    }
}

/// Snapshot of the display and surface geometry.
///
/// Hosts refresh it whenever the surface moves or resizes, or an overlay
/// opens or closes.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SurfaceLayout {
    /// Full display size in pixels.
    pub display: Size,
    /// Surface bounds in display pixels.
    pub surface: Rect,
    pub overlays: Vec<OverlayWindow>,
}

impl SurfaceLayout {
    pub fn new(display: Size, surface: Rect) -> Self {
        Self {
            display,
            surface,
            overlays: Vec::new(),
        }
    }

    pub fn with_overlays(mut self, overlays: Vec<OverlayWindow>) -> Self {
        self.overlays = overlays;
        self
    }

    /// Scales a normalized position to display pixels, truncating.
    pub fn to_absolute(&self, nx: f32, ny: f32) -> Point {
        Point::new(
            (f64::from(nx) * f64::from(self.display.width)) as i32,
            (f64::from(ny) * f64::from(self.display.height)) as i32,
        )
    }

    /// Translates display pixels into surface-local pixels, saturating at the
    /// `i32` range.
    pub fn to_local(&self, absolute: Point) -> Point {
        absolute - self.surface.origin()
    }

    pub fn is_occluded(&self) -> bool {
        self.overlays.iter().any(OverlayWindow::blocks_tracking)
    }

    /// Position for a contact that is just appearing.
    ///
    /// Returns `None` when the contact lands outside the surface or when an
    /// overlay hides it; such contacts are never reported.
    pub fn map_new_contact(&self, nx: f32, ny: f32) -> Option<Point> {
        let absolute = self.to_absolute(nx, ny);
        if !self.surface.contains(absolute) || self.is_occluded() {
            return None;
        }
        Some(self.to_local(absolute))
    }

    /// Position for a contact that is already tracked, clamped to the surface
    /// so the contact can still end cleanly after sliding off it.
    pub fn map_existing_contact(&self, nx: f32, ny: f32) -> Point {
        let local = self.to_local(self.to_absolute(nx, ny));
        self.surface.clamp_local(local)
    }
}
