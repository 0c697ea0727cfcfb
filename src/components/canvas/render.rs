use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::diagram::state::EditorState;
use crate::components::diagram::types::{ConnectionKind, Node, Point, ViewTransform};
use crate::components::palette::catalog;

/// Spacing of the background dot grid at zoom 1.
pub const GRID_SPACING: f64 = 20.0;
const CORNER_RADIUS: f64 = 8.0;
const ARROW_SIZE: f64 = 10.0;
const FALLBACK_FILL: &str = "#1f2937";
const FALLBACK_BORDER: &str = "#374151";

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

pub fn render(state: &EditorState, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	let view = state.view();
	ctx.clear_rect(0.0, 0.0, width, height);
	draw_grid(view, ctx, width, height);

	ctx.save();
	let _ = ctx.translate(view.pan.x, view.pan.y);
	let _ = ctx.scale(view.zoom, view.zoom);
	draw_connections(state, ctx);
	for node in &state.diagram().nodes {
		draw_node(node, state.selected_node() == Some(&node.id), view.zoom, ctx);
	}
	draw_cursors(state, ctx);
	ctx.restore();
}

/// Screen spacing of the dot grid and the screen position of its first dot,
/// drawn at every zoom level. `None` only for a degenerate zoom.
fn grid_lattice(view: ViewTransform) -> Option<(f64, Point)> {
	let step = GRID_SPACING * view.zoom;
	// Zero or NaN would never advance.
	if !step.is_finite() || step <= 0.0 {
		return None;
	}
	Some((step, Point::new(view.pan.x.rem_euclid(step), view.pan.y.rem_euclid(step))))
}

fn draw_grid(view: ViewTransform, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	let Some((step, Point { x: ox, y: oy })) = grid_lattice(view) else {
		return;
	};
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.2)");
	let mut y = oy;
	while y < height {
		let mut x = ox;
		while x < width {
			ctx.fill_rect(x - 0.5, y - 0.5, 1.0, 1.0);
			x += step;
		}
		y += step;
	}
}

fn draw_connections(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str("#60a5fa");
	ctx.set_fill_style_str("#60a5fa");
	ctx.set_line_width(2.0);

	for (connection, source, target) in state.diagram().resolved_connections() {
		let (from, to) = (source.center(), target.center());
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();

		if connection.kind != ConnectionKind::Arrow {
			continue;
		}
		let (dx, dy) = (to.x - from.x, to.y - from.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);
		// Tip on the target's border along the center line.
		let reach = (target.size.width / 2.0 / ux.abs().max(1e-6))
			.min(target.size.height / 2.0 / uy.abs().max(1e-6));
		let (tip_x, tip_y) = (to.x - ux * reach, to.y - uy * reach);
		let (back_x, back_y) = (tip_x - ux * ARROW_SIZE, tip_y - uy * ARROW_SIZE);
		let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	let r = r.min(w / 2.0).min(h / 2.0);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}

fn draw_node(node: &Node, selected: bool, k: f64, ctx: &CanvasRenderingContext2d) {
	let (x, y, w, h) = (node.position.x, node.position.y, node.size.width, node.size.height);
	let (fill, border, text) = match &node.style {
		Some(style) => (style.background.as_str(), style.border.as_str(), style.text.as_str()),
		None => (FALLBACK_FILL, FALLBACK_BORDER, "#ffffff"),
	};

	rounded_rect(ctx, x, y, w, h, CORNER_RADIUS);
	ctx.set_fill_style_str(fill);
	ctx.fill();
	ctx.set_stroke_style_str(border);
	ctx.set_line_width(2.0);
	ctx.stroke();

	if selected {
		let pad = 4.0 / k;
		rounded_rect(ctx, x - pad, y - pad, w + 2.0 * pad, h + 2.0 * pad, CORNER_RADIUS + pad);
		ctx.set_stroke_style_str("#60a5fa");
		ctx.set_line_width(2.0 / k);
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(6.0 / k),
			&JsValue::from_f64(3.0 / k),
		));
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}

	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let (cx, cy) = (x + w / 2.0, y + h / 2.0);
	match catalog::find(&node.kind) {
		Some(tool) => {
			ctx.set_font("18px sans-serif");
			ctx.set_fill_style_str(&tool.color);
			let _ = ctx.fill_text(&tool.icon, cx, cy - 10.0);
			ctx.set_fill_style_str(text);
			ctx.set_font("500 13px sans-serif");
			let _ = ctx.fill_text_with_max_width(&node.label, cx, cy + 12.0, w - 16.0);
		}
		None => {
			ctx.set_fill_style_str(text);
			ctx.set_font("500 13px sans-serif");
			let _ = ctx.fill_text_with_max_width(&node.label, cx, cy, w - 16.0);
		}
	}
}

fn draw_cursors(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	ctx.set_text_align("left");
	ctx.set_text_baseline("top");
	ctx.set_font("12px sans-serif");

	for cursor in &state.diagram().cursors {
		let (x, y) = (cursor.position.x, cursor.position.y);
		ctx.begin_path();
		let _ = ctx.arc(x + 8.0, y + 8.0, 7.0, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&cursor.color);
		ctx.fill();
		ctx.set_stroke_style_str("white");
		ctx.set_line_width(2.0);
		ctx.stroke();

		let tag_width = ctx
			.measure_text(&cursor.user)
			.map(|m| m.width())
			.unwrap_or(60.0)
			+ 12.0;
		ctx.set_fill_style_str("rgba(0, 0, 0, 0.8)");
		rounded_rect(ctx, x, y + 20.0, tag_width, 20.0, 4.0);
		ctx.fill();
		ctx.set_fill_style_str("white");
		let _ = ctx.fill_text(&cursor.user, x + 6.0, y + 24.0);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::diagram::transform::MIN_ZOOM;

	#[test]
	fn grid_is_drawn_at_minimum_zoom() {
		let view = ViewTransform {
			zoom: MIN_ZOOM,
			pan: Point::new(-7.0, 5.0),
		};
		let (step, first) = grid_lattice(view).unwrap();
		assert!((step - 2.0).abs() < 1e-9);
		assert!((first.x - 1.0).abs() < 1e-9);
		assert!((first.y - 1.0).abs() < 1e-9);
	}

	#[test]
	fn grid_follows_pan_at_default_zoom() {
		let view = ViewTransform {
			zoom: 1.0,
			pan: Point::new(45.0, -30.0),
		};
		assert_eq!(grid_lattice(view), Some((20.0, Point::new(5.0, 10.0))));
	}

	#[test]
	fn degenerate_zoom_has_no_grid() {
		let view = ViewTransform {
			zoom: 0.0,
			pan: Point::ORIGIN,
		};
		assert_eq!(grid_lattice(view), None);
	}
}
