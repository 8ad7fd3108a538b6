//! Provides [`ZoomLimits`] settings and the wheel unit scaling.

use bevy_reflect::Reflect;

/// Zoom change per wheel unit before `zoom_speed` is applied, in page mode.
pub const WHEEL_PAGE_SCALE: f64 = 0.025;
/// Zoom change per wheel unit before `zoom_speed` is applied, in line mode.
pub const WHEEL_LINE_SCALE: f64 = 0.01;
/// Zoom change per wheel unit before `zoom_speed` is applied, in pixel mode.
pub const WHEEL_PIXEL_SCALE: f64 = 0.00025;
/// Shared multiplier of every zoom input, drag or wheel.
pub const ZOOM_INPUT_SCALE: f64 = 32.0;

/// Bound the zoom level reachable through input.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ZoomLimits {
    /// The closest zoom level, reached when zooming in.
    pub min_zoom: f64,
    /// The furthest zoom level, reached when zooming out.
    pub max_zoom: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_zoom: 1.0,
            max_zoom: 18.0,
        }
    }
}

impl ZoomLimits {
    /// Clamp `zoom` into `[min_zoom, max_zoom]`.
    pub fn clamp(&self, zoom: f64) -> f64 {
        // A misconfigured range collapses to its lower bound instead of panicking.
        zoom.clamp(self.min_zoom, self.max_zoom.max(self.min_zoom))
    }
}

/// The unit a wheel delta is expressed in, mirroring the three DOM delta modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum WheelDeltaMode {
    /// Pixels, the most common mode for touchpads.
    #[default]
    Pixel,
    /// Lines, as reported by most notched mouse wheels.
    Line,
    /// Whole pages.
    Page,
}

impl WheelDeltaMode {
    /// Zoom change per wheel unit before `zoom_speed` and [`ZOOM_INPUT_SCALE`] are applied.
    pub fn scale(self) -> f64 {
        match self {
            WheelDeltaMode::Pixel => WHEEL_PIXEL_SCALE,
            WheelDeltaMode::Line => WHEEL_LINE_SCALE,
            WheelDeltaMode::Page => WHEEL_PAGE_SCALE,
        }
    }
}

/// Zoom change for a wheel delta, before clamping.
pub fn wheel_zoom_delta(delta: f64, mode: WheelDeltaMode, zoom_speed: f64) -> f64 {
    delta * mode.scale() * zoom_speed * ZOOM_INPUT_SCALE
}
