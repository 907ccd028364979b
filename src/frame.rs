use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use sunshine_core::{AnimationTask, TaskRunner, TaskStatus};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static EPOCH: Instant = Instant::now();
}

/// Milliseconds since the effects started.
pub fn now_ms() -> f64 {
    EPOCH.with(|epoch| epoch.elapsed().as_secs_f64() * 1000.0)
}

/// Tasks waiting for the next frame plus the runner that ticks them. Tasks
/// spawned while the runner is ticking are queued and picked up next frame.
#[derive(Default)]
pub struct FrameContext {
    runner: RefCell<TaskRunner>,
    queued: RefCell<Vec<Box<dyn AnimationTask>>>,
}

impl FrameContext {
    pub fn spawn(&self, task: impl AnimationTask + 'static) {
        self.queued.borrow_mut().push(Box::new(task));
    }

    fn frame(&self) {
        let now = now_ms();
        let queued = std::mem::take(&mut *self.queued.borrow_mut());
        let mut runner = self.runner.borrow_mut();
        for task in queued {
            runner.spawn_boxed(task);
        }
        runner.tick(now);
    }
}

/// Drives `frame_ctx` from `requestAnimationFrame` for the lifetime of the
/// page.
pub fn start_loop(frame_ctx: Rc<FrameContext>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.frame();
        request(&tick_clone);
    }) as Box<dyn FnMut()>));
    request(&tick);
}

fn request(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Ticks `task` every `interval_ms` until it reports `Done`, then clears
/// the interval.
pub fn run_every(interval_ms: u32, mut task: impl AnimationTask + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let handle_tick = handle.clone();
    let closure = Closure::wrap(Box::new(move || {
        if task.tick(now_ms()) == TaskStatus::Done {
            if let (Some(id), Some(w)) = (handle_tick.take(), web::window()) {
                w.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        interval_ms as i32,
    ) {
        Ok(id) => handle.set(Some(id)),
        Err(e) => log::warn!("[frame] set_interval: {:?}", e),
    }
    closure.forget();
}
