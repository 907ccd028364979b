use crate::{css, dom, Page};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use sunshine_core::{sun_drift, EventSource, PointerInput, PointerState, TaskStatus};
use web_sys as web;

/// Document-level `mousemove`/`mouseleave`, re-emitted as `PointerInput`.
pub fn wire_pointer_source(page: &Page) -> Rc<EventSource<PointerInput>> {
    let source = Rc::new(EventSource::new());

    let source_move = source.clone();
    dom::listen::<web::MouseEvent>(page.document.as_ref(), "mousemove", move |ev| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        source_move.emit(&PointerInput::Move(pos));
    });

    let source_leave = source.clone();
    dom::listen::<web::MouseEvent>(page.document.as_ref(), "mouseleave", move |_| {
        source_leave.emit(&PointerInput::Leave);
    });
    source
}

/// Cursor glow and sun drift: both chase the pointer through their own
/// smoother, stepped once per animation frame for the life of the page.
pub fn wire_pointer_effects(
    page: &Page,
    source: &Rc<EventSource<PointerInput>>,
) -> anyhow::Result<()> {
    let smoothing = &page.config.smoothing;
    let state = Rc::new(RefCell::new(PointerState::new(
        smoothing.cursor_glow,
        smoothing.sun_drift,
    )));

    let glow = dom::create_div(&page.document)?;
    glow.style().set_css_text(css::CURSOR_GLOW_STYLE);
    page.body
        .append_child(&glow)
        .map_err(|e| anyhow::anyhow!("append cursor glow: {:?}", e))?;

    {
        let state = state.clone();
        let glow = glow.clone();
        source.subscribe(move |input: &PointerInput| {
            state.borrow_mut().apply(input);
            let opacity = if state.borrow().inside { "1" } else { "0" };
            dom::set_style(&glow, "opacity", opacity);
        });
    }

    {
        let state = state.clone();
        page.frames.spawn(move |_now: f64| {
            let pos = state.borrow_mut().glow.step();
            dom::set_style(&glow, "left", &css::px(pos.x as f64));
            dom::set_style(&glow, "top", &css::px(pos.y as f64));
            TaskStatus::Continue
        });
    }

    if let Some(sun) = dom::query_one(&page.document, page.config.selectors.sun) {
        let window = page.window.clone();
        page.frames.spawn(move |_now: f64| {
            let smoothed = state.borrow_mut().sun.step();
            let viewport = Vec2::new(
                dom::viewport_width(&window) as f32,
                dom::viewport_height(&window) as f32,
            );
            let drift = sun_drift(smoothed, viewport);
            dom::set_style(&sun, "left", &css::sun_left(drift.x));
            dom::set_style(&sun, "top", &css::sun_top(drift.y));
            TaskStatus::Continue
        });
    }
    Ok(())
}
