//! SlideMenu widget implementation
//!
//! A square button that, while pressed, lets the finger slide out to a
//! landing zone on either side. Releasing over a highlighted zone reports
//! that side to the registered [`SlideMenuListener`]; releasing anywhere
//! else does nothing.
//!
//! The widget is plain state plus hooks. A host drives it like this:
//!
//! ```
//! use slidemenu_foundation::{PointerEvent, PointerEventKind};
//! use slidemenu_ui::{SlideCallbacks, SlideMenu, SlideMenuConfig};
//! use slidemenu_ui_graphics::{Density, DrawScopeDefault, IntRect};
//!
//! let mut menu = SlideMenu::new(SlideMenuConfig::new("Undo", "Redo"));
//! menu.set_listener(SlideCallbacks::new(|| println!("left"), || println!("right")));
//! menu.on_layout(IntRect::new(0, 0, 57, 57), Density(1.0));
//!
//! menu.handle_pointer_event(&PointerEvent::at(PointerEventKind::Down, 28.0, 28.0));
//! menu.handle_pointer_event(&PointerEvent::at(PointerEventKind::Move, -10.0, 40.0));
//! let mut scope = DrawScopeDefault::new();
//! menu.render(&mut scope);
//! menu.handle_pointer_event(&PointerEvent::at(PointerEventKind::Up, -10.0, 40.0));
//! ```

mod config;
mod layout_model;
mod listener;
mod metrics;
mod render;
mod touch;

pub use config::*;
pub use layout_model::*;
pub use listener::*;
pub use metrics::*;
pub use render::*;
pub use touch::*;

use slidemenu_foundation::PointerEvent;
use slidemenu_ui_graphics::{Density, DrawScope, IntRect, IntSize};
use slidemenu_ui_layout::Constraints;

#[derive(Debug)]
pub struct SlideMenu {
    config: SlideMenuConfig,
    metrics: SlideMenuMetrics,
    style: SlideMenuStyle,
    bounds: IntRect,
    density: Density,
    layout: LayoutModel,
    touch: TouchStateMachine,
    listener: ListenerSlot,
}

impl SlideMenu {
    pub fn new(config: SlideMenuConfig) -> Self {
        Self {
            config,
            metrics: SlideMenuMetrics::default(),
            style: SlideMenuStyle::default(),
            bounds: IntRect::EMPTY,
            density: Density::DEFAULT,
            layout: LayoutModel::new(),
            touch: TouchStateMachine::new(),
            listener: ListenerSlot::default(),
        }
    }

    /// Builds the widget from host-declared attributes. See
    /// [`SlideMenuConfig::from_attributes`].
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::new(SlideMenuConfig::from_attributes(attributes))
    }

    /// Replaces the default millimeter metrics.
    pub fn with_metrics(mut self, metrics: SlideMenuMetrics) -> Result<Self, MetricsError> {
        metrics.validate()?;
        self.metrics = metrics;
        self.layout.invalidate();
        Ok(self)
    }

    pub fn with_style(mut self, style: SlideMenuStyle) -> Self {
        self.style = style;
        self
    }

    /// Host layout pass. Computes the geometry the first time valid bounds
    /// arrive and keeps it afterwards.
    pub fn on_layout(&mut self, bounds: IntRect, density: Density) {
        self.bounds = bounds;
        self.density = density;
        self.layout.ensure(bounds, &self.metrics, density);
    }

    /// Window focus moved; bounds may have shifted, so recompute.
    pub fn on_window_focus_changed(&mut self, has_focus: bool, bounds: IntRect, density: Density) {
        log::debug!("SlideMenu window focus changed: {has_focus}");
        self.bounds = bounds;
        self.density = density;
        self.layout.recompute(bounds, &self.metrics, density);
    }

    pub fn on_size_changed(&mut self, bounds: IntRect, density: Density) {
        self.bounds = bounds;
        self.density = density;
        self.layout.recompute(bounds, &self.metrics, density);
    }

    /// Offers a pointer event in the widget's local coordinates.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> PointerResponse {
        self.touch.handle(event, &self.layout, &mut self.listener)
    }

    /// Size reported to the host layout: the button square only, never the
    /// overflow around it.
    pub fn measure(&self, constraints: Constraints, density: Density) -> IntSize {
        constraints.resolve_size(compute_own_size(self.metrics.button_side, density))
    }

    /// Draws the current frame, computing geometry first if the host has
    /// supplied bounds but no layout pass has produced it yet.
    pub fn render<S: DrawScope + ?Sized>(&mut self, scope: &mut S) {
        if !self.layout.is_ready() && !self.bounds.is_empty() {
            self.layout.ensure(self.bounds, &self.metrics, self.density);
        }

        let stroke_width = self
            .layout
            .density()
            .map(|density| self.metrics.stroke_width.to_px_floor(density) as f32)
            .unwrap_or(0.0);

        render(
            &RenderInput {
                bounds: self.bounds,
                geometry: self.layout.geometry(),
                state: self.touch.state(),
                config: &self.config,
                style: &self.style,
                stroke_width,
            },
            scope,
        );
    }

    pub fn geometry(&self) -> Option<&SlideMenuGeometry> {
        self.layout.geometry()
    }

    pub fn touch_state(&self) -> TouchState {
        self.touch.state()
    }

    pub fn touch_start(&self) -> Option<slidemenu_ui_graphics::Point> {
        self.touch.start_position()
    }

    pub fn metrics(&self) -> &SlideMenuMetrics {
        &self.metrics
    }

    pub fn style(&self) -> &SlideMenuStyle {
        &self.style
    }

    pub fn config(&self) -> &SlideMenuConfig {
        &self.config
    }

    pub fn left_text(&self) -> &str {
        &self.config.left_text
    }

    pub fn set_left_text(&mut self, text: impl Into<String>) {
        self.config.left_text = text.into();
    }

    pub fn right_text(&self) -> &str {
        &self.config.right_text
    }

    pub fn set_right_text(&mut self, text: impl Into<String>) {
        self.config.right_text = text.into();
    }

    /// Registers the listener, replacing any previous one.
    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: SlideMenuListener + 'static,
    {
        self.listener.set(Box::new(listener));
    }

    pub fn clear_listener(&mut self) -> Option<Box<dyn SlideMenuListener>> {
        self.listener.clear()
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_set()
    }
}

#[cfg(test)]
#[path = "../../tests/slide_menu_tests.rs"]
mod tests;
