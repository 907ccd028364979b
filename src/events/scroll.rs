use crate::{css, dom, Page};
use std::cell::RefCell;
use std::rc::Rc;
use sunshine_core::{
    card_parallax, icon_rotation, navbar_shade, progress_glow, progress_percent, sun_parallax,
    EventSource, ScrollSample, ScrollState,
};
use web_sys as web;

/// One window scroll listener, coalesced to at most one emission per
/// animation frame. Each emission carries the newest sample.
pub fn wire_scroll_source(page: &Page) -> Rc<EventSource<ScrollSample>> {
    let source = Rc::new(EventSource::new());
    let state = Rc::new(RefCell::new(ScrollState::default()));

    let window = page.window.clone();
    let source_listen = source.clone();
    dom::listen::<web::Event>(page.window.as_ref(), "scroll", move |_| {
        let sample = dom::scroll_sample(&window);
        if !state.borrow_mut().record(sample) {
            return;
        }
        let state_frame = state.clone();
        let source_frame = source_listen.clone();
        dom::request_frame(move || {
            let sample = state_frame.borrow_mut().begin_frame();
            source_frame.emit(&sample);
        });
    });
    source
}

pub fn wire_scroll_effects(
    page: &Page,
    source: &Rc<EventSource<ScrollSample>>,
) -> anyhow::Result<()> {
    let sel = &page.config.selectors;

    if let Some(sun) = dom::query_one(&page.document, sel.sun) {
        source.subscribe(move |s: &ScrollSample| {
            dom::set_style(&sun, "transform", &css::sun_transform(&sun_parallax(s.offset)));
        });
    }

    let cards = dom::query_all(&page.document, sel.parallax_cards);
    if !cards.is_empty() {
        source.subscribe(move |s: &ScrollSample| {
            for card in &cards {
                let rect = dom::rect_of(card);
                if let Some(dy) = card_parallax(rect.top, s.viewport_height) {
                    dom::set_style(card, "transform", &css::translate_y(dy));
                }
            }
        });
    }

    if let Some(navbar) = dom::query_one(&page.document, sel.navbar) {
        source.subscribe(move |s: &ScrollSample| {
            let shade = navbar_shade(s.offset);
            dom::set_style(&navbar, "background", shade.background());
            dom::set_style(&navbar, "box-shadow", shade.box_shadow());
        });
    }

    let icons = dom::query_all(&page.document, sel.icons);
    if !icons.is_empty() {
        source.subscribe(move |s: &ScrollSample| {
            for icon in &icons {
                let rect = dom::rect_of(icon);
                if let Some(deg) = icon_rotation(rect.top, s.viewport_height) {
                    dom::set_style(icon, "transform", &css::rotate(deg));
                }
            }
        });
    }

    let bar = dom::create_div(&page.document)?;
    bar.style().set_css_text(css::PROGRESS_BAR_STYLE);
    page.body
        .append_child(&bar)
        .map_err(|e| anyhow::anyhow!("append progress bar: {:?}", e))?;
    source.subscribe(move |s: &ScrollSample| {
        let percent = progress_percent(s);
        dom::set_style(&bar, "width", &css::pct(percent));
        dom::set_style(&bar, "box-shadow", &css::progress_shadow(&progress_glow(percent)));
    });

    log::debug!("[scroll] {} subscribers", source.len());
    Ok(())
}
