use crate::{dom, frame, Page};
use sunshine_core::{AnimationTask, Scramble, TaskStatus};
use web_sys as web;

struct ScrambleTask {
    el: web::HtmlElement,
    scramble: Scramble,
}

impl AnimationTask for ScrambleTask {
    fn tick(&mut self, _now_ms: f64) -> TaskStatus {
        let frame = self.scramble.tick(&mut rand::thread_rng());
        self.el.set_text_content(Some(&frame.text));
        if frame.done {
            log::info!("[scramble] resolved after {} ticks", self.scramble.ticks());
            TaskStatus::Done
        } else {
            TaskStatus::Continue
        }
    }
}

/// Scrambles the hero title once at load and lets it resolve left to right.
pub fn start_hero_scramble(page: &Page) {
    let Some(title) = dom::query_one(&page.document, page.config.selectors.hero_title) else {
        return;
    };
    let cfg = &page.config.scramble;
    let text = title.text_content().unwrap_or_default();
    let task = ScrambleTask {
        el: title,
        scramble: Scramble::new(&text, cfg.glyphs, cfg.ticks_per_char),
    };
    frame::run_every(cfg.interval_ms, task);
}
