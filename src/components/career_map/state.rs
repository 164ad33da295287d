use web_sys::WheelEvent;

use super::layout::LayoutConfig;
use super::session::RenderSession;
use super::store::GraphStore;

/// Pointer travel, in pixels, after which a press counts as a drag.
pub const DRAG_THRESHOLD: f64 = 5.0;

/// Pixels scrolled per wheel line when the wheel reports lines.
pub const WHEEL_LINE_HEIGHT: f64 = 16.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub scroll_x: f64,
	pub scroll_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub dragging: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub scroll_start_x: f64,
	pub scroll_start_y: f64,
}

/// What a press-and-release that did not turn into a drag landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Click {
	Role(String),
	Background,
}

pub struct CareerMapState {
	pub session: RenderSession,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: Option<String>,
	pub width: f64,
	pub height: f64,
}

impl CareerMapState {
	pub fn new(store: GraphStore, config: LayoutConfig, width: f64, height: f64) -> Self {
		Self {
			session: RenderSession::new(store, config),
			transform: ViewTransform::default(),
			pan: PanState::default(),
			hover: None,
			width,
			height,
		}
	}

	pub fn screen_to_content(&self, sx: f64, sy: f64) -> (f64, f64) {
		(sx + self.transform.scroll_x, sy + self.transform.scroll_y)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<String> {
		let (cx, cy) = self.screen_to_content(sx, sy);
		self.session.geometry().card_at(cx, cy).map(str::to_string)
	}

	pub fn press(&mut self, sx: f64, sy: f64) {
		self.pan = PanState {
			active: true,
			dragging: false,
			start_x: sx,
			start_y: sy,
			scroll_start_x: self.transform.scroll_x,
			scroll_start_y: self.transform.scroll_y,
		};
	}

	/// Follow the pointer. Scrolls only while pressed.
	pub fn move_to(&mut self, sx: f64, sy: f64) {
		if !self.pan.active {
			self.hover = self.node_at_position(sx, sy);
			return;
		}
		let (walk_x, walk_y) = (sx - self.pan.start_x, sy - self.pan.start_y);
		if walk_x.abs() > DRAG_THRESHOLD || walk_y.abs() > DRAG_THRESHOLD {
			self.pan.dragging = true;
		}
		self.transform.scroll_x = self.pan.scroll_start_x - walk_x;
		self.transform.scroll_y = self.pan.scroll_start_y - walk_y;
		self.clamp_scroll();
	}

	/// End a press; a press that never became a drag is a click.
	pub fn release(&mut self, sx: f64, sy: f64) -> Option<Click> {
		let was_click = self.pan.active && !self.pan.dragging;
		self.pan = PanState::default();
		if !was_click {
			return None;
		}
		Some(match self.node_at_position(sx, sy) {
			Some(id) => Click::Role(id),
			None => Click::Background,
		})
	}

	pub fn leave(&mut self) {
		self.pan = PanState::default();
		self.hover = None;
	}

	pub fn scroll_by(&mut self, dx: f64, dy: f64) {
		self.transform.scroll_x += dx;
		self.transform.scroll_y += dy;
		self.clamp_scroll();
	}

	/// Scroll by a wheel delta given in the event's `deltaMode` units.
	pub fn scroll_wheel(&mut self, dx: f64, dy: f64, mode: u32) {
		let (sx, sy) = match mode {
			WheelEvent::DOM_DELTA_LINE => (WHEEL_LINE_HEIGHT, WHEEL_LINE_HEIGHT),
			WheelEvent::DOM_DELTA_PAGE => (self.width, self.height),
			_ => (1.0, 1.0),
		};
		self.scroll_by(dx * sx, dy * sy);
	}

	/// Keep the viewport inside the content area.
	pub fn clamp_scroll(&mut self) {
		let geometry = self.session.geometry();
		let max_x = (geometry.width - self.width).max(0.0);
		let max_y = (geometry.height - self.height).max(0.0);
		self.transform.scroll_x = self.transform.scroll_x.clamp(0.0, max_x);
		self.transform.scroll_y = self.transform.scroll_y.clamp(0.0, max_y);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.session.resize();
	}

	/// Run any pending layout/connector pass before painting.
	pub fn tick(&mut self) {
		if self.session.settle() {
			self.clamp_scroll();
			let nodes = self.session.nodes();
			if self.hover.as_deref().is_some_and(|id| !nodes.is_visible(id)) {
				self.hover = None;
			}
		}
	}
}
