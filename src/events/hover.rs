use crate::{css, dom, Page};
use sunshine_core::{magnetic_offset, tilt};
use web_sys as web;

pub fn wire_hover_effects(page: &Page) {
    let sel = &page.config.selectors;
    for card in dom::query_all(&page.document, sel.hover_cards) {
        wire_card_tilt(&card);
    }
    for button in dom::query_all(&page.document, sel.buttons) {
        wire_magnetic(&button);
    }
    for badge in dom::query_all(&page.document, sel.week_badges) {
        wire_badge_pulse(&badge);
    }
}

fn wire_card_tilt(card: &web::HtmlElement) {
    let target: &web::EventTarget = card.as_ref();

    let el = card.clone();
    dom::listen::<web::MouseEvent>(target, "mouseenter", move |_| {
        dom::set_style(&el, "box-shadow", css::CARD_HOVER_SHADOW);
    });

    let el = card.clone();
    dom::listen::<web::MouseEvent>(target, "mouseleave", move |_| {
        dom::clear_style(&el, "box-shadow");
        dom::clear_style(&el, "transform");
    });

    let el = card.clone();
    dom::listen::<web::MouseEvent>(target, "mousemove", move |ev| {
        let t = tilt(&dom::rect_of(&el), ev.client_x() as f64, ev.client_y() as f64);
        dom::set_style(&el, "transform", &css::tilt_transform(&t));
        dom::set_style(&el, "transition", css::TILT_TRANSITION);
    });
}

fn wire_magnetic(button: &web::HtmlElement) {
    let target: &web::EventTarget = button.as_ref();

    let el = button.clone();
    dom::listen::<web::MouseEvent>(target, "mousemove", move |ev| {
        let (dx, dy) = magnetic_offset(&dom::rect_of(&el), ev.client_x() as f64, ev.client_y() as f64);
        dom::set_style(&el, "transform", &css::translate(dx, dy));
    });

    let el = button.clone();
    dom::listen::<web::MouseEvent>(target, "mouseleave", move |_| {
        dom::clear_style(&el, "transform");
    });
}

fn wire_badge_pulse(badge: &web::HtmlElement) {
    let target: &web::EventTarget = badge.as_ref();

    let el = badge.clone();
    dom::listen::<web::MouseEvent>(target, "mouseenter", move |_| {
        dom::set_style(&el, "animation", css::BADGE_PULSE_ANIMATION);
    });

    // Cleared so the next hover can replay it.
    let el = badge.clone();
    dom::listen::<web::Event>(target, "animationend", move |_| {
        dom::clear_style(&el, "animation");
    });
}
