use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::layout::{EmphasisState, Rect};
use super::state::CareerMapState;

const BACKGROUND: &str = "#f4f6fa";
const HEADER_TEXT: &str = "#1f2a44";
const CARD_FILL: &str = "#ffffff";
const CARD_BORDER: &str = "#d4dae6";
const SELECTED_FILL: &str = "#1f4e8c";
const ON_PATH_FILL: &str = "#e3edfb";
const ON_PATH_BORDER: &str = "#3c78c8";
const CONNECTOR: &str = "rgba(120, 134, 160, 0.55)";
const CONNECTOR_EMPHASIS: &str = "#3c78c8";
const BADGE: &str = "#e8a33d";
const CARD_RADIUS: f64 = 8.0;

pub fn render(state: &CareerMapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(-state.transform.scroll_x, -state.transform.scroll_y);
	draw_headers(state, ctx);
	draw_connectors(state, ctx);
	draw_cards(state, ctx);
	ctx.restore();
}

fn draw_headers(state: &CareerMapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("600 14px sans-serif");
	ctx.set_text_baseline("middle");
	ctx.set_text_align("center");
	for column in &state.session.geometry().columns {
		let h = column.header;
		ctx.set_fill_style_str(HEADER_TEXT);
		let _ = ctx.fill_text_with_max_width(
			&column.name,
			h.x + h.width / 2.0,
			h.y + h.height / 2.0,
			h.width - 8.0,
		);

		ctx.set_stroke_style_str(CARD_BORDER);
		ctx.set_line_width(1.0);
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(4.0),
			&JsValue::from_f64(3.0),
		));
		ctx.begin_path();
		ctx.move_to(h.x, h.bottom());
		ctx.line_to(h.right(), h.bottom());
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_connectors(state: &CareerMapState, ctx: &CanvasRenderingContext2d) {
	for c in state.session.connectors() {
		let (color, width) = if c.emphasized {
			(CONNECTOR_EMPHASIS, 2.5)
		} else {
			(CONNECTOR, 1.5)
		};
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(c.start.x, c.start.y);
		ctx.bezier_curve_to(
			c.control1.x,
			c.control1.y,
			c.control2.x,
			c.control2.y,
			c.end.x,
			c.end.y,
		);
		ctx.stroke();
	}
}

fn draw_cards(state: &CareerMapState, ctx: &CanvasRenderingContext2d) {
	let session = &state.session;
	let geometry = session.geometry();

	for node in session.nodes().iter().filter(|n| n.visible) {
		let (Some(rect), Some(role)) = (
			geometry.card(&node.role_id),
			session.store().lookup(&node.role_id),
		) else {
			continue;
		};
		let hovered = state.hover.as_deref() == Some(node.role_id.as_str());

		let (fill, border, title, subtitle) = match node.emphasis {
			EmphasisState::Selected => (SELECTED_FILL, SELECTED_FILL, "#ffffff", "#cfe0f7"),
			EmphasisState::OnPath => (ON_PATH_FILL, ON_PATH_BORDER, HEADER_TEXT, "#4a5873"),
			EmphasisState::None => (CARD_FILL, CARD_BORDER, HEADER_TEXT, "#6b7690"),
		};

		rounded_rect(ctx, rect, CARD_RADIUS);
		ctx.set_fill_style_str(fill);
		ctx.fill();
		ctx.set_stroke_style_str(if hovered { ON_PATH_BORDER } else { border });
		ctx.set_line_width(if hovered { 2.0 } else { 1.0 });
		ctx.stroke();

		ctx.set_text_align("left");
		ctx.set_text_baseline("alphabetic");
		ctx.set_fill_style_str(title);
		ctx.set_font("600 13px sans-serif");
		let _ =
			ctx.fill_text_with_max_width(&role.title, rect.x + 12.0, rect.y + 28.0, rect.width - 48.0);
		ctx.set_fill_style_str(subtitle);
		ctx.set_font("12px sans-serif");
		let _ = ctx.fill_text_with_max_width(
			&role.department,
			rect.x + 12.0,
			rect.y + 48.0,
			rect.width - 24.0,
		);

		let branches = session.store().children(&role.id).count();
		if branches > 0 {
			draw_badge(ctx, rect, branches);
		}
	}
}

fn draw_badge(ctx: &CanvasRenderingContext2d, rect: &Rect, branches: usize) {
	let badge = Rect {
		x: rect.right() - 34.0,
		y: rect.y + 10.0,
		width: 26.0,
		height: 18.0,
	};
	rounded_rect(ctx, &badge, 9.0);
	ctx.set_fill_style_str(BADGE);
	ctx.fill();
	ctx.set_fill_style_str("#ffffff");
	ctx.set_font("600 11px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(
		&format!("+{branches}"),
		badge.x + badge.width / 2.0,
		badge.y + badge.height / 2.0,
	);
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, rect: &Rect, radius: f64) {
	let r = radius.min(rect.width / 2.0).min(rect.height / 2.0);
	ctx.begin_path();
	ctx.move_to(rect.x + r, rect.y);
	let _ = ctx.arc_to(rect.right(), rect.y, rect.right(), rect.bottom(), r);
	let _ = ctx.arc_to(rect.right(), rect.bottom(), rect.x, rect.bottom(), r);
	let _ = ctx.arc_to(rect.x, rect.bottom(), rect.x, rect.y, r);
	let _ = ctx.arc_to(rect.x, rect.y, rect.right(), rect.y, r);
	ctx.close_path();
}
