use super::*;
use slidemenu_foundation::PointerEventKind;
use slidemenu_testing::GestureScript;
use slidemenu_ui_graphics::{Brush, DrawPrimitive, DrawScopeDefault, Mm, Point};
use std::cell::Cell;
use std::rc::Rc;

fn laid_out_menu() -> SlideMenu {
    let mut menu = SlideMenu::new(SlideMenuConfig::new("Undo", "Redo"));
    menu.on_layout(IntRect::new(0, 0, 56, 56), Density(1.0));
    menu
}

fn counters(menu: &mut SlideMenu) -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
    let left = Rc::new(Cell::new(0));
    let right = Rc::new(Cell::new(0));
    let (l, r) = (left.clone(), right.clone());
    menu.set_listener(SlideCallbacks::new(
        move || l.set(l.get() + 1),
        move || r.set(r.get() + 1),
    ));
    (left, right)
}

fn feed(menu: &mut SlideMenu, events: &[slidemenu_foundation::PointerEvent]) {
    for event in events {
        menu.handle_pointer_event(event);
    }
}

#[test]
fn measure_reports_button_square_only() {
    let menu = SlideMenu::new(SlideMenuConfig::default());
    assert_eq!(
        menu.measure(Constraints::unbounded(), Density(2.0)),
        IntSize::square(113)
    );
    assert_eq!(
        menu.measure(Constraints::tight(40.0, 40.0), Density(2.0)),
        IntSize::square(40)
    );
}

#[test]
fn slide_left_fires_exactly_once() {
    let mut menu = laid_out_menu();
    let (left, right) = counters(&mut menu);

    feed(&mut menu, &GestureScript::press(28.0, 28.0).move_to(-10.0, 40.0).release());

    assert_eq!(left.get(), 1);
    assert_eq!(right.get(), 0);
    assert_eq!(menu.touch_state(), TouchState::Idle);
}

#[test]
fn later_listener_replaces_earlier_one() {
    let mut menu = laid_out_menu();
    let (first_left, _) = counters(&mut menu);
    let (second_left, _) = counters(&mut menu);

    feed(&mut menu, &GestureScript::press(28.0, 28.0).move_to(-10.0, 40.0).release());

    assert_eq!(first_left.get(), 0);
    assert_eq!(second_left.get(), 1);

    assert!(menu.clear_listener().is_some());
    assert!(!menu.has_listener());
}

#[test]
fn gesture_before_layout_does_nothing() {
    let mut menu = SlideMenu::new(SlideMenuConfig::default());
    let (left, right) = counters(&mut menu);

    feed(&mut menu, &GestureScript::press(28.0, 28.0).move_to(-10.0, 40.0).release());

    assert!(menu.geometry().is_none());
    assert_eq!((left.get(), right.get()), (0, 0));
}

#[test]
fn focus_change_recomputes_geometry() {
    let mut menu = laid_out_menu();
    menu.on_layout(IntRect::new(0, 0, 113, 113), Density(2.0));
    assert_eq!(menu.geometry().unwrap().own, IntRect::new(0, 0, 56, 56));

    menu.on_window_focus_changed(true, IntRect::new(0, 0, 113, 113), Density(2.0));
    assert_eq!(menu.geometry().unwrap().own, IntRect::new(0, 0, 113, 113));

    menu.on_size_changed(IntRect::EMPTY, Density(2.0));
    assert!(menu.geometry().is_none());
}

#[test]
fn text_setters_and_attributes() {
    let mut menu = SlideMenu::from_attributes([
        ("left_text", "Archive"),
        ("unknown", "ignored"),
        ("right_text", "Delete"),
    ]);
    assert_eq!(menu.left_text(), "Archive");
    assert_eq!(menu.right_text(), "Delete");

    menu.set_left_text("Keep");
    menu.set_right_text(String::from("Drop"));
    assert_eq!(menu.config(), &SlideMenuConfig::new("Keep", "Drop"));
}

#[test]
fn invalid_metrics_are_rejected() {
    let wide = SlideMenuMetrics {
        zone_width: Mm(12.0),
        ..SlideMenuMetrics::default()
    };
    let err = SlideMenu::new(SlideMenuConfig::default())
        .with_metrics(wide)
        .unwrap_err();
    assert_eq!(
        err,
        MetricsError::ZoneWiderThanMargin {
            zone: 12.0,
            margin: 11.0
        }
    );

    let tall = SlideMenuMetrics {
        zone_height: Mm(10.0),
        ..SlideMenuMetrics::default()
    };
    assert!(matches!(
        tall.validate(),
        Err(MetricsError::ZoneTallerThanMargin { .. })
    ));

    let negative = SlideMenuMetrics {
        additional_top: Mm(-1.0),
        ..SlideMenuMetrics::default()
    };
    let err = negative.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "additional_top must be a finite non-negative length, got -1mm"
    );
}

#[test]
fn custom_metrics_shape_the_zones() {
    let metrics = SlideMenuMetrics {
        zone_width: Mm(5.0),
        zone_height: Mm(3.0),
        ..SlideMenuMetrics::default()
    };
    let mut menu = SlideMenu::new(SlideMenuConfig::default())
        .with_metrics(metrics)
        .unwrap();
    menu.on_layout(IntRect::new(0, 0, 56, 56), Density(1.0));

    let geometry = menu.geometry().unwrap();
    assert_eq!(geometry.left_zone, IntRect::new(-31, 37, 0, 56));
    assert_eq!(menu.metrics().full_width(), Mm(31.0));
    assert_eq!(menu.metrics().full_height(), Mm(18.0));
}

#[test]
fn idle_frame_draws_clip_background_and_button() {
    let mut menu = laid_out_menu();
    let mut scope = DrawScopeDefault::new();
    menu.render(&mut scope);

    let style = SlideMenuStyle::default();
    let clip = IntRect::new(-69, -57, 125, 56);
    assert_eq!(
        scope.into_primitives(),
        vec![
            DrawPrimitive::Clip { rect: clip },
            DrawPrimitive::Rect {
                rect: clip,
                brush: Brush::solid(style.background),
            },
            DrawPrimitive::Circle {
                center: Point::new(28.0, 28.0),
                radius: 25.0,
                brush: Brush::stroke(style.button, 6.0),
            },
        ]
    );
}

#[test]
fn pending_zone_is_highlighted_with_its_text() {
    let mut menu = laid_out_menu();
    menu.handle_pointer_event(&slidemenu_foundation::PointerEvent::at(
        PointerEventKind::Down,
        28.0,
        28.0,
    ));
    menu.handle_pointer_event(&slidemenu_foundation::PointerEvent::at(
        PointerEventKind::Move,
        90.0,
        10.0,
    ));

    let mut scope = DrawScopeDefault::new();
    menu.render(&mut scope);
    let primitives = scope.into_primitives();
    let right_zone = IntRect::new(56, -1, 125, 56);

    assert_eq!(primitives.len(), 5);
    assert_eq!(
        primitives[3],
        DrawPrimitive::Rect {
            rect: right_zone,
            brush: Brush::solid(menu.style().right_zone),
        }
    );
    assert_eq!(
        primitives[4],
        DrawPrimitive::Text {
            rect: right_zone,
            text: "Redo".to_string(),
            color: menu.style().text,
        }
    );
}

#[test]
fn render_before_bounds_draws_nothing() {
    let mut menu = SlideMenu::new(SlideMenuConfig::default());
    let mut scope = DrawScopeDefault::new();
    menu.render(&mut scope);
    assert!(scope.primitives().is_empty());
}

#[test]
fn style_override_is_used() {
    let style = SlideMenuStyle {
        background: slidemenu_ui_graphics::Color::TRANSPARENT,
        ..SlideMenuStyle::default()
    };
    let mut menu = SlideMenu::new(SlideMenuConfig::default()).with_style(style);
    menu.on_layout(IntRect::new(0, 0, 56, 56), Density(1.0));

    let mut scope = DrawScopeDefault::new();
    menu.render(&mut scope);
    match &scope.primitives()[1] {
        DrawPrimitive::Rect { brush, .. } => {
            assert_eq!(brush.color(), slidemenu_ui_graphics::Color::TRANSPARENT)
        }
        other => panic!("expected background rect, got {other:?}"),
    }
}
