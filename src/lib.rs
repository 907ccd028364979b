#![cfg(target_arch = "wasm32")]
use std::rc::Rc;
use sunshine_core::{EffectsConfig, FxError};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod counter;
mod css;
mod dom;
mod events;
mod frame;
mod particles;
mod reveal;
mod scramble;

/// Handles every effect needs. Lives for the page session.
pub(crate) struct Page {
    pub window: web::Window,
    pub document: web::Document,
    pub body: web::HtmlElement,
    pub config: EffectsConfig,
    pub frames: Rc<frame::FrameContext>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sunshine-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::listen::<web::Event>(document.as_ref(), "DOMContentLoaded", |_| run());
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| missing("window"))?;
    let document = window.document().ok_or_else(|| missing("document"))?;
    let body = document.body().ok_or_else(|| missing("<body>"))?;

    let config = EffectsConfig::default();
    config.validate()?;

    let page = Page {
        window,
        document,
        body,
        config,
        frames: Rc::new(frame::FrameContext::default()),
    };

    inject_keyframes(&page)?;
    particles::spawn_field(&page)?;

    let scroll = events::wire_scroll_source(&page);
    events::wire_scroll_effects(&page, &scroll)?;

    let pointer = events::wire_pointer_source(&page);
    events::wire_pointer_effects(&page, &pointer)?;
    events::wire_hover_effects(&page);
    events::wire_click_effects(&page);

    reveal::wire_reveals(&page);
    scramble::start_hero_scramble(&page);

    frame::start_loop(page.frames.clone());

    log::info!("\u{2600}\u{fe0f} Hello Sunshine");
    log::info!("Fighting isolation, one connection at a time.");
    log::info!("Interested in the code? Check out our GitHub!");
    Ok(())
}

fn inject_keyframes(page: &Page) -> anyhow::Result<()> {
    let style = dom::create(&page.document, "style")?;
    style.set_text_content(Some(css::KEYFRAMES_CSS));
    let head = page.document.head().ok_or_else(|| missing("<head>"))?;
    head.append_child(&style)
        .map_err(|e| FxError::Dom(format!("append <style>: {:?}", e)))?;
    Ok(())
}

fn missing(what: &str) -> FxError {
    FxError::MissingElement(what.to_string())
}
