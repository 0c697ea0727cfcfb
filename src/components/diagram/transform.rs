//! Mapping between viewport pixels and logical canvas coordinates.
//!
//! A logical point `p` is drawn at `origin + pan + p * zoom`. Click-to-place,
//! drop-to-place and hit testing all go through [`ViewTransform::to_logical`].

use super::types::{Point, ViewTransform};

/// Smallest zoom factor.
pub const MIN_ZOOM: f64 = 0.1;
/// Largest zoom factor.
pub const MAX_ZOOM: f64 = 3.0;
/// Zoom after a reset.
pub const DEFAULT_ZOOM: f64 = 1.0;
/// Zoom change per wheel notch (wheel zoom needs the modifier key held).
pub const WHEEL_ZOOM_STEP: f64 = 0.1;
/// Zoom change per toolbar button press.
pub const BUTTON_ZOOM_STEP: f64 = 0.2;

/// Clamps into `[MIN_ZOOM, MAX_ZOOM]`; NaN becomes [`DEFAULT_ZOOM`].
pub fn clamp_zoom(zoom: f64) -> f64 {
	if zoom.is_nan() {
		return DEFAULT_ZOOM;
	}
	zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			zoom: DEFAULT_ZOOM,
			pan: Point::ORIGIN,
		}
	}
}

impl ViewTransform {
	/// `client` is a viewport position, `origin` the canvas element's top-left.
	pub fn to_logical(&self, client: Point, origin: Point) -> Point {
		(client - origin - self.pan).scaled(1.0 / self.zoom)
	}

	/// Inverse of [`ViewTransform::to_logical`].
	pub fn to_screen(&self, logical: Point, origin: Point) -> Point {
		logical.scaled(self.zoom) + self.pan + origin
	}

	/// Zoom after stepping by `delta`, clamped.
	pub fn stepped_zoom(&self, delta: f64) -> f64 {
		clamp_zoom(self.zoom + delta)
	}

	/// Zoom after one wheel notch; scrolling down zooms out.
	pub fn wheel_zoom(&self, delta_y: f64) -> f64 {
		let step = if delta_y > 0.0 {
			-WHEEL_ZOOM_STEP
		} else {
			WHEEL_ZOOM_STEP
		};
		self.stepped_zoom(step)
	}

	/// Converts a screen-space pointer delta into logical units.
	pub fn logical_delta(&self, screen_delta: Point) -> Point {
		screen_delta.scaled(1.0 / self.zoom)
	}

	/// Zoom as a rounded percentage for display.
	pub fn zoom_percent(&self) -> i64 {
		(self.zoom * 100.0).round() as i64
	}
}
