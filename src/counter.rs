use crate::frame::FrameContext;
use crate::{css, dom};
use std::rc::Rc;
use sunshine_core::{stagger, AnimationTask, CounterAnimation, CounterConfig, StatCue, TaskStatus};
use web_sys as web;

/// Writes one counter's text each frame until it settles on its final text.
struct CounterTask {
    el: web::HtmlElement,
    anim: CounterAnimation,
    started_at: Option<f64>,
}

impl AnimationTask for CounterTask {
    fn tick(&mut self, now_ms: f64) -> TaskStatus {
        let start = *self.started_at.get_or_insert(now_ms);
        let frame = self.anim.frame(now_ms - start);
        self.el.set_text_content(Some(&frame.text));
        if frame.done {
            TaskStatus::Done
        } else {
            TaskStatus::Continue
        }
    }
}

pub fn animate_stats(stats: &[web::HtmlElement], cfg: &CounterConfig, frames: &Rc<FrameContext>) {
    for (index, stat) in stats.iter().enumerate() {
        let text = stat.text_content().unwrap_or_default();
        match StatCue::for_text(&text, cfg.duration_ms) {
            StatCue::Pulse => {
                dom::set_style(stat, "animation", css::STAT_PULSE_ANIMATION);
            }
            StatCue::Count(anim) => {
                let task = CounterTask {
                    el: stat.clone(),
                    anim,
                    started_at: None,
                };
                let frames = frames.clone();
                dom::set_timeout(stagger(index, cfg.stagger_ms), move || frames.spawn(task));
            }
        }
    }
}
