//! Visibility-triggered effects built on `IntersectionObserver`.

use crate::{counter, css, dom, Page};
use std::cell::RefCell;
use std::rc::Rc;
use sunshine_core::constants::*;
use sunshine_core::{
    char_delay_s, stagger, OnceFlag, RegistrationId, RevealAction, RevealEngine, RevealMode,
    Trigger,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Called with the element, its index within the observer batch, and what
/// happened.
type OnAction = Box<dyn FnMut(&web::HtmlElement, usize, RevealAction)>;

/// Observes `elements` with `trigger`, routing each report through a
/// `RevealEngine`. One-shot elements are unobserved once they fire.
fn observe(
    elements: Vec<web::HtmlElement>,
    trigger: Trigger,
    mode: RevealMode,
    mut on_action: OnAction,
) {
    if elements.is_empty() {
        return;
    }
    let mut engine = RevealEngine::new();
    let registered: Vec<(web::HtmlElement, RegistrationId)> = elements
        .into_iter()
        .map(|el| {
            let id = engine.register(mode);
            (el, id)
        })
        .collect();
    let engine = Rc::new(RefCell::new(engine));
    let registered = Rc::new(registered);

    let lookup = registered.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let batch: Vec<(web::HtmlElement, RegistrationId, bool)> = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    lookup
                        .iter()
                        .find(|(el, _)| AsRef::<web::Element>::as_ref(el) == &target)
                        .map(|(el, id)| (el.clone(), *id, entry.is_intersecting()))
                })
                .collect();
            let actions = engine
                .borrow_mut()
                .observe_batch(batch.iter().map(|(_, id, hit)| (*id, *hit)));
            for (index, _, action) in actions {
                let el = &batch[index].0;
                if action == RevealAction::Reveal {
                    observer.unobserve(el);
                }
                on_action(el, index, action);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&wasm_bindgen::JsValue::from_f64(trigger.threshold));
    opts.set_root_margin(trigger.root_margin);
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &opts,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();
    for (el, _) in registered.iter() {
        observer.observe(el);
    }
    log::debug!("[reveal] observing {} elements", registered.len());
}

pub fn wire_reveals(page: &Page) {
    wire_fade_in(page);
    wire_section_glow(page);
    wire_timeline(page);
    wire_header_chars(page);
    wire_stats(page);
    wire_lazy_images(page);
}

fn wire_fade_in(page: &Page) {
    let cards = dom::query_all(&page.document, page.config.selectors.fade_in);
    for (i, card) in cards.iter().enumerate() {
        dom::set_style(card, "opacity", "0");
        dom::set_style(card, "transform", &css::translate_y(CARD_HIDDEN_OFFSET_PX));
        dom::set_style(card, "transition", &css::fade_transition(i as f64 * CARD_STAGGER_SEC));
    }
    observe(
        cards,
        Trigger::at(0.1).with_margin("0px 0px -50px 0px"),
        RevealMode::OneShot,
        Box::new(|el: &web::HtmlElement, index: usize, _: RevealAction| {
            let el = el.clone();
            dom::set_timeout(stagger(index, CARD_REVEAL_STEP_MS), move || {
                dom::set_style(&el, "opacity", "1");
                dom::set_style(&el, "transform", &css::translate_y(0.0));
            });
        }),
    );
}

fn wire_section_glow(page: &Page) {
    observe(
        dom::query_all(&page.document, page.config.selectors.sections),
        Trigger::at(0.3),
        RevealMode::Repeating,
        Box::new(|el: &web::HtmlElement, _: usize, action: RevealAction| {
            let classes = el.class_list();
            _ = match action {
                RevealAction::Exit => classes.remove_1("in-view"),
                _ => classes.add_1("in-view"),
            };
        }),
    );
}

fn wire_timeline(page: &Page) {
    observe(
        dom::query_all(&page.document, page.config.selectors.timeline_items),
        Trigger::at(0.2),
        RevealMode::OneShot,
        Box::new(|el: &web::HtmlElement, index: usize, _: RevealAction| {
            let el = el.clone();
            dom::set_timeout(stagger(index, TIMELINE_REVEAL_STEP_MS), move || {
                _ = el.class_list().add_1("visible");
            });
        }),
    );
}

fn wire_header_chars(page: &Page) {
    let headers = dom::query_all(&page.document, page.config.selectors.section_headers);
    for header in &headers {
        dom::set_style(header, "opacity", "0");
    }
    let document = page.document.clone();
    observe(
        headers,
        Trigger::at(0.5),
        RevealMode::OneShot,
        Box::new(move |el: &web::HtmlElement, _: usize, _: RevealAction| {
            let text = el.text_content().unwrap_or_default();
            el.set_text_content(Some(""));
            dom::set_style(el, "opacity", "1");
            for (i, ch) in text.chars().enumerate() {
                let Ok(span) = dom::create(&document, "span") else {
                    continue;
                };
                span.set_text_content(Some(&ch.to_string()));
                dom::set_style(&span, "opacity", "0");
                dom::set_style(&span, "display", "inline-block");
                dom::set_style(&span, "animation", &css::char_animation(char_delay_s(i)));
                _ = el.append_child(&span);
            }
        }),
    );
}

fn wire_stats(page: &Page) {
    let Some(container) = dom::query_one(&page.document, page.config.selectors.stats_container)
    else {
        return;
    };
    let stats = dom::query_all(&page.document, page.config.selectors.stat_numbers);
    let counter_cfg = page.config.counter.clone();
    let frames = page.frames.clone();
    let mut fired = OnceFlag::default();
    observe(
        vec![container],
        Trigger::at(0.5),
        RevealMode::OneShot,
        Box::new(move |_: &web::HtmlElement, _: usize, _: RevealAction| {
            if fired.fire() {
                log::info!("[counter] animating {} stats", stats.len());
                counter::animate_stats(&stats, &counter_cfg, &frames);
            }
        }),
    );
}

fn wire_lazy_images(page: &Page) {
    observe(
        dom::query_all(&page.document, page.config.selectors.lazy_images),
        Trigger::at(0.0),
        RevealMode::OneShot,
        Box::new(|el: &web::HtmlElement, _: usize, _: RevealAction| {
            let Some(src) = el.get_attribute("data-src") else {
                return;
            };
            match el.dyn_ref::<web::HtmlImageElement>() {
                Some(img) => img.set_src(&src),
                None => {
                    _ = el.set_attribute("src", &src);
                }
            }
            _ = el.class_list().add_1("loaded");
        }),
    );
}
