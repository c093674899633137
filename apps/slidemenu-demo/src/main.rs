use anyhow::{bail, Context, Result};
use slidemenu_foundation::{PointerDispatcher, PointerEvent, PointerEventKind};
use slidemenu_ui::{SlideCallbacks, SlideMenu, SlideMenuConfig, SlideMenuGeometry};
use slidemenu_ui_graphics::{Density, DrawPrimitive, DrawScopeDefault, IntRect, Point};
use slidemenu_ui_layout::Constraints;

/// Where the demo pretends the widget sits on screen.
const WIDGET_ORIGIN: Point = Point::new(240.0, 640.0);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let density = match std::env::args().nth(1) {
        Some(arg) => Density(
            arg.parse::<f32>()
                .with_context(|| format!("density must be a number, got {arg:?}"))?,
        ),
        None => Density(2.0),
    };
    if !density.is_valid() {
        bail!("density must be positive, got {}", density.0);
    }

    println!("=== SlideMenu Demo ===");
    println!("density {:.3}", density.0);

    let mut menu = SlideMenu::from_attributes([("left_text", "Undo"), ("right_text", "Redo")]);
    menu.set_listener(SlideCallbacks::new(
        || log::info!("slide left: Undo"),
        || log::info!("slide right: Redo"),
    ));

    let size = menu.measure(Constraints::unbounded(), density);
    menu.on_layout(IntRect::from_size(size), density);
    let geometry = *menu
        .geometry()
        .context("layout did not produce geometry")?;
    print_geometry(&geometry);

    let center = geometry.own.center();
    let scripts: [(&str, Vec<Point>); 4] = [
        ("slide left", vec![center, geometry.left_zone.center()]),
        ("slide right", vec![center, geometry.right_zone.center()]),
        (
            "left then back out",
            vec![center, geometry.left_zone.center(), Point::new(center.x, center.y + 500.0)],
        ),
        (
            "right then left",
            vec![
                center,
                geometry.right_zone.center(),
                geometry.left_zone.center(),
            ],
        ),
    ];

    let mut dispatcher = PointerDispatcher::with_origin(WIDGET_ORIGIN);
    for (name, path) in scripts {
        println!("--- {name}");
        queue_gesture(&mut dispatcher, &path);
        let mut frames = Vec::new();
        dispatcher.drain(|_, event| {
            let response = menu.handle_pointer_event(&event);
            if response.redraw {
                let mut scope = DrawScopeDefault::new();
                menu.render(&mut scope);
                frames.push(describe_frame(scope.primitives()));
            }
        });
        for frame in frames {
            println!("    frame: {frame}");
        }
    }

    Ok(())
}

fn queue_gesture(dispatcher: &mut PointerDispatcher, path: &[Point]) {
    let global = |p: &Point| Point::new(p.x + WIDGET_ORIGIN.x, p.y + WIDGET_ORIGIN.y);
    let Some((first, rest)) = path.split_first() else {
        return;
    };
    dispatcher.push(PointerEvent::new(PointerEventKind::Down, *first, global(first)));
    for point in rest {
        dispatcher.push(PointerEvent::new(PointerEventKind::Move, *point, global(point)));
    }
    let last = path.last().unwrap_or(first);
    dispatcher.push(PointerEvent::new(PointerEventKind::Up, *last, global(last)));
}

fn print_geometry(geometry: &SlideMenuGeometry) {
    println!("own   {:?}", geometry.own);
    println!("clip  {:?}", geometry.clip);
    println!("left  {:?}", geometry.left_zone);
    println!("right {:?}", geometry.right_zone);
}

fn describe_frame(primitives: &[DrawPrimitive]) -> String {
    let highlighted = primitives.iter().find_map(|primitive| match primitive {
        DrawPrimitive::Text { text, .. } => Some(text.as_str()),
        _ => None,
    });
    match highlighted {
        Some(text) => format!("{} primitives, highlighting {text:?}", primitives.len()),
        None => format!("{} primitives, no highlight", primitives.len()),
    }
}
