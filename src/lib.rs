#![cfg(target_arch = "wasm32")]
use crate::canvas::Canvas2d;
use crate::core::{scroll_fade_opacity, ClearMode, ConfigOverrides, Field};
use crate::frame::{FrameContext, FrameLoop};
use glam::Vec2;
use rand::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;

thread_local! {
    static AUTO_MOUNTED: RefCell<Vec<AmbientBackground>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    if let Some(document) = dom::window_document() {
        let canvases = dom::ambient_canvases(&document);
        AUTO_MOUNTED.with(|mounted| {
            let mut mounted = mounted.borrow_mut();
            for canvas in canvases {
                mounted.push(AmbientBackground::mount(canvas));
            }
        });
    }
    Ok(())
}

/// Unmount every background mounted automatically at startup.
#[wasm_bindgen]
pub fn unmount_all() {
    let taken = AUTO_MOUNTED.with(|mounted| std::mem::take(&mut *mounted.borrow_mut()));
    for mut bg in taken {
        bg.unmount();
    }
}

/// Listeners currently registered by all mounted backgrounds.
#[wasm_bindgen]
pub fn live_listener_count() -> usize {
    events::live_listener_count()
}

struct Mounted {
    frame_loop: FrameLoop,
    frame_ctx: Rc<RefCell<FrameContext>>,
    pointer: Rc<Cell<Vec2>>,
    // dropping these deregisters them
    listeners: Vec<events::Listener>,
}

/// Decorative particle background bound to one canvas.
#[wasm_bindgen]
pub struct AmbientBackground {
    mounted: Option<Mounted>,
    frames_drawn: Rc<Cell<u32>>,
}

#[wasm_bindgen]
impl AmbientBackground {
    /// Start animating `canvas`.
    ///
    /// Never fails: when no 2D context can be acquired the returned instance
    /// is inert (no listeners, no frame loop).
    pub fn mount(canvas: web::HtmlCanvasElement) -> AmbientBackground {
        match mount_on(&canvas) {
            Ok((mounted, frames_drawn)) => Self {
                mounted: Some(mounted),
                frames_drawn,
            },
            Err(e) => {
                log::debug!("[ambient] not mounted: {:?}", e);
                Self {
                    mounted: None,
                    frames_drawn: Rc::new(Cell::new(0)),
                }
            }
        }
    }

    /// Stop the frame loop and remove every listener. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.frame_loop.stop();
            let released = mounted.listeners.len();
            drop(mounted);
            log::info!("[ambient] unmounted, released {} listeners", released);
        }
    }

    pub fn is_running(&self) -> bool {
        self.mounted
            .as_ref()
            .map(|m| m.frame_loop.is_running())
            .unwrap_or(false)
    }

    pub fn frames_drawn(&self) -> u32 {
        self.frames_drawn.get()
    }

    pub fn listener_count(&self) -> usize {
        self.mounted.as_ref().map(|m| m.listeners.len()).unwrap_or(0)
    }

    /// Resizes seen since mount; each one replaced the point set.
    pub fn generation(&self) -> u32 {
        self.mounted
            .as_ref()
            .map(|m| m.frame_ctx.borrow().field.generation() as u32)
            .unwrap_or(0)
    }

    pub fn point_count(&self) -> usize {
        self.mounted
            .as_ref()
            .map(|m| m.frame_ctx.borrow().field.points().len())
            .unwrap_or(0)
    }

    /// Last pointer offset as `[x, y]`, each in `[-0.5, 0.5]`.
    pub fn pointer_offset(&self) -> Vec<f32> {
        let p = self
            .mounted
            .as_ref()
            .map(|m| m.pointer.get())
            .unwrap_or(Vec2::ZERO);
        vec![p.x, p.y]
    }
}

fn mount_on(canvas: &web::HtmlCanvasElement) -> anyhow::Result<(Mounted, Rc<Cell<u32>>)> {
    let (overrides, errors) = ConfigOverrides::from_lookup(|name| canvas.get_attribute(name));
    for e in &errors {
        log::warn!("[ambient] ignoring attribute: {}", e);
    }
    let variant = overrides.variant.unwrap_or_default();
    let config = overrides.resolve();

    let surface = Canvas2d::acquire(canvas, matches!(config.clear, ClearMode::Opaque(_)))?;

    let size = dom::viewport_size();
    dom::sync_canvas_backing_size(canvas, size);
    let rng = match overrides.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scroll_fade = config.scroll_fade;
    dom::set_opacity(canvas, config.layer_opacity);
    let field = Field::new(config, size.x, size.y, rng);
    log::info!(
        "[ambient] mounted variant={} size={}x{} points={} boundary={:?} lines={}",
        variant,
        size.x,
        size.y,
        field.points().len(),
        field.config().boundary,
        field.config().lines
    );

    let pointer = Rc::new(Cell::new(Vec2::ZERO));
    let viewport = Rc::new(Cell::new(size));
    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(field, surface, pointer.clone())));
    let frames_drawn = frame_ctx.borrow().frames_drawn.clone();

    let mut listeners = Vec::new();

    {
        let canvas = canvas.clone();
        let frame_ctx = frame_ctx.clone();
        let viewport = viewport.clone();
        listeners.extend(events::on_resize(move || {
            let size = dom::viewport_size();
            viewport.set(size);
            dom::sync_canvas_backing_size(&canvas, size);
            let mut ctx = frame_ctx.borrow_mut();
            ctx.field.resize(size.x, size.y);
            log::debug!(
                "[ambient] resize {}x{} -> {} points (generation {})",
                size.x,
                size.y,
                ctx.field.points().len(),
                ctx.field.generation()
            );
        }));
    }

    {
        let pointer = pointer.clone();
        let viewport = viewport.clone();
        listeners.extend(events::on_pointer_move(move |ev| {
            pointer.set(input::normalized_offset(input::pointer_client(ev), viewport.get()));
        }));
    }

    if let Some(fade) = scroll_fade {
        let canvas = canvas.clone();
        let apply = move || {
            let opacity = scroll_fade_opacity(dom::scroll_y(), fade.distance, fade.start_opacity);
            dom::set_opacity(&canvas, opacity);
        };
        apply();
        listeners.extend(events::on_scroll(apply));
    }

    let frame_loop = FrameLoop::start(frame_ctx.clone());
    Ok((
        Mounted {
            frame_loop,
            frame_ctx,
            pointer,
            listeners,
        },
        frames_drawn,
    ))
}
