use crate::{css, dom, frame, Page};
use std::cell::RefCell;
use std::rc::Rc;
use sunshine_core::{ripple_geometry, TransientKind, TransientLedger};
use web_sys as web;

/// What a live effect tears down when it expires.
struct Spawned {
    el: web::HtmlElement,
    on_expire: Box<dyn FnOnce()>,
}

type Ledger = Rc<RefCell<TransientLedger<Spawned>>>;

pub fn wire_click_effects(page: &Page) {
    let sel = &page.config.selectors;
    let ledger: Ledger = Rc::new(RefCell::new(TransientLedger::new()));

    for button in dom::query_all(&page.document, sel.buttons) {
        wire_ripple(&page.document, &button, &ledger);
    }
    for button in dom::query_all(&page.document, sel.donate_buttons) {
        wire_donate(&page.document, &button, &ledger);
    }
    for link in dom::query_all(&page.document, sel.nav_links) {
        wire_smooth_nav(&page.document, &link);
    }
}

/// Appends `el` to `host` and hands it to the ledger. Every spawn gets its
/// own timer, so overlapping effects expire independently; the timer removes
/// whatever the ledger returns for its id.
fn spawn_transient(
    host: &web::HtmlElement,
    el: web::HtmlElement,
    kind: TransientKind,
    ledger: &Ledger,
    on_expire: impl FnOnce() + 'static,
) {
    if let Err(e) = host.append_child(&el) {
        log::warn!("[transient] append {}: {:?}", kind.name(), e);
        return;
    }
    let spawned = Spawned {
        el,
        on_expire: Box::new(on_expire),
    };
    let id = ledger.borrow_mut().spawn(kind, frame::now_ms(), spawned);
    log::debug!(
        "[transient] {} #{} ({} live)",
        kind.name(),
        id.0,
        ledger.borrow().active()
    );
    let ledger = ledger.clone();
    dom::set_timeout(kind.lifetime_ms(), move || {
        let retired = ledger.borrow_mut().retire(id);
        if let Some(Spawned { el, on_expire }) = retired {
            el.remove();
            on_expire();
        }
    });
}

fn wire_ripple(document: &web::Document, button: &web::HtmlElement, ledger: &Ledger) {
    let document = document.clone();
    let host = button.clone();
    let ledger = ledger.clone();
    dom::listen::<web::MouseEvent>(button.as_ref(), "click", move |ev| {
        let Ok(ripple) = dom::create(&document, "span") else {
            return;
        };
        let geometry = ripple_geometry(&dom::rect_of(&host), ev.client_x() as f64, ev.client_y() as f64);
        ripple.style().set_css_text(&css::ripple_style(&geometry));
        _ = ripple.class_list().add_1("ripple");
        spawn_transient(&host, ripple, TransientKind::Ripple, &ledger, || {});
    });
}

fn wire_donate(document: &web::Document, button: &web::HtmlElement, ledger: &Ledger) {
    {
        let document = document.clone();
        let host = button.clone();
        let ledger = ledger.clone();
        dom::listen::<web::MouseEvent>(button.as_ref(), "click", move |ev| {
            dom::set_style(&host, "box-shadow", css::DONATE_GLOW_SHADOW);
            let Ok(circle) = dom::create_div(&document) else {
                return;
            };
            let (x, y) = dom::rect_of(&host).local(ev.client_x() as f64, ev.client_y() as f64);
            circle.style().set_css_text(&css::burst_style(x, y));
            let glow_host = host.clone();
            spawn_transient(&host, circle, TransientKind::Burst, &ledger, move || {
                dom::clear_style(&glow_host, "box-shadow");
            });
        });
    }

    let document = document.clone();
    let host = button.clone();
    let ledger = ledger.clone();
    dom::listen::<web::MouseEvent>(button.as_ref(), "mouseenter", move |_| {
        let Ok(wave) = dom::create_div(&document) else {
            return;
        };
        wave.style().set_css_text(css::WAVE_STYLE);
        let grow = wave.clone();
        dom::set_timeout(sunshine_core::constants::WAVE_EXPAND_DELAY_MS, move || {
            let size = css::px(sunshine_core::constants::WAVE_FINAL_SIZE_PX);
            dom::set_style(&grow, "width", &size);
            dom::set_style(&grow, "height", &size);
        });
        spawn_transient(&host, wave, TransientKind::Wave, &ledger, || {});
    });
}

fn wire_smooth_nav(document: &web::Document, link: &web::HtmlElement) {
    let document = document.clone();
    let anchor = link.clone();
    dom::listen::<web::MouseEvent>(link.as_ref(), "click", move |ev| {
        ev.prevent_default();
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        let Ok(Some(section)) = document.query_selector(&href) else {
            log::debug!("[nav] no section for {href}");
            return;
        };
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        opts.set_block(web::ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&opts);
    });
}
