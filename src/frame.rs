use crate::canvas::Canvas2d;
use crate::constants::FPS_LOG_INTERVAL_SEC;
use crate::core::{paint_frame, Field, FrameStats};
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Field,
    pub surface: Canvas2d,
    /// Written by the pointer listener, read once per frame.
    pub pointer: Rc<Cell<Vec2>>,
    pub frames_drawn: Rc<Cell<u32>>,

    pub rate_window_start: Instant,
    pub rate_window_frames: u32,
}

impl FrameContext {
    pub fn new(field: Field, surface: Canvas2d, pointer: Rc<Cell<Vec2>>) -> Self {
        Self {
            field,
            surface,
            pointer,
            frames_drawn: Rc::new(Cell::new(0)),
            rate_window_start: Instant::now(),
            rate_window_frames: 0,
        }
    }

    pub fn frame(&mut self) {
        self.field.step();
        let stats = paint_frame(&self.field, self.pointer.get(), &mut self.surface);
        self.frames_drawn.set(self.frames_drawn.get().wrapping_add(1));
        self.log_rate(stats);
    }

    fn log_rate(&mut self, stats: FrameStats) {
        self.rate_window_frames += 1;
        let elapsed = self.rate_window_start.elapsed().as_secs_f32();
        if elapsed >= FPS_LOG_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps, {} dots, {} lines",
                self.rate_window_frames as f32 / elapsed,
                stats.dots,
                stats.lines
            );
            self.rate_window_start = Instant::now();
            self.rate_window_frames = 0;
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-chaining `requestAnimationFrame` loop; one frame in flight at a time.
pub struct FrameLoop {
    tick: Tick,
    request_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let request_id_tick = request_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            request_id_tick.set(None);
            frame_ctx.borrow_mut().frame();
            request_id_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));

        request_id.set(request_frame(&tick));
        Self { tick, request_id }
    }

    /// Cancel the pending frame and release the loop closure.
    pub fn stop(&self) {
        if let Some(id) = self.request_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure -> tick reference cycle
        self.tick.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}
