//! Warp Starfield entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_starfield {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, MouseEvent, TouchEvent, Window};

    use warp_starfield::renderer::{self, CanvasSurface};
    use warp_starfield::{InputMode, Starfield, StarfieldError, Viewport};

    const CANVAS_SELECTOR: &str = "canvas";

    /// Widget instance: simulation plus the canvas it draws on
    struct Widget {
        field: Starfield,
        surface: CanvasSurface,
    }

    /// Current window size and pixel density
    fn window_viewport(window: &Window) -> Viewport {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Viewport::new(width as f32, height as f32, window.device_pixel_ratio() as f32)
    }

    pub fn start() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("{}", StarfieldError::NoDocument);
            return;
        };

        if document.ready_state() == "loading" {
            let closure = Closure::once(move |_event: web_sys::Event| launch());
            let _ = document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        } else {
            launch();
        }
    }

    fn launch() {
        match init() {
            Ok(widget) => {
                request_animation_frame(widget);
                log::info!("Warp Starfield running");
            }
            Err(e) => log::error!("Starfield not started: {}", e),
        }
    }

    fn init() -> Result<Rc<RefCell<Widget>>, StarfieldError> {
        let window = web_sys::window().ok_or(StarfieldError::NoWindow)?;
        let document = window.document().ok_or(StarfieldError::NoDocument)?;

        let mut surface = CanvasSurface::from_selector(&document, CANVAS_SELECTOR)?;

        let viewport = window_viewport(&window);
        let seed = js_sys::Date::now() as u64;
        let field = Starfield::new(viewport, seed);
        log::info!("Starfield seeded with {}", seed);

        renderer::Surface::resize(&mut surface, &viewport);

        let widget = Rc::new(RefCell::new(Widget { field, surface }));
        setup_event_handlers(&window, &document, widget.clone());

        Ok(widget)
    }

    fn setup_event_handlers(
        window: &Window,
        document: &web_sys::Document,
        widget: Rc<RefCell<Widget>>,
    ) {
        // Window resize
        {
            let widget = widget.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else { return };
                let viewport = window_viewport(&window);
                let mut w = widget.borrow_mut();
                let Widget { field, surface } = &mut *w;
                renderer::resize(field, surface, viewport);
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let canvas = widget.borrow().surface.canvas().clone();

        // Mouse move
        {
            let widget = widget.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                widget.borrow_mut().field.pointer_move(
                    event.client_x() as f32,
                    event.client_y() as f32,
                    InputMode::Mouse,
                );
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move (non-passive so the page doesn't scroll)
        {
            let widget = widget.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    widget.borrow_mut().field.pointer_move(
                        touch.client_x() as f32,
                        touch.client_y() as f32,
                        InputMode::Touch,
                    );
                }
                event.prevent_default();
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        // Touch end on the canvas and mouse leaving the page both drop the baseline
        {
            let widget = widget.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                widget.borrow_mut().field.pointer_leave();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            let _ = document
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(widget: Rc<RefCell<Widget>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(widget);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(widget: Rc<RefCell<Widget>>) {
        {
            let mut w = widget.borrow_mut();
            let Widget { field, surface } = &mut *w;
            renderer::step(field, surface);
        }

        request_animation_frame(widget);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_starfield::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Warp Starfield (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the canvas version");

    if let Err(e) = headless::run() {
        log::error!("Headless run failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: simulate a short pointer sweep against an in-memory surface
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use warp_starfield::renderer::{self, RecordingSurface};
    use warp_starfield::{InputMode, Starfield, StarfieldError, Tuning, Viewport};

    const FRAMES: u64 = 600;
    const SEED: u64 = 0x5eed;

    pub fn run() -> Result<(), StarfieldError> {
        let tuning = match std::env::var("STARFIELD_TUNING") {
            Ok(json) => Tuning::from_json(&json)?,
            Err(_) => Tuning::default(),
        };

        let viewport = Viewport::new(1280.0, 720.0, 1.0);
        let rng = <rand_pcg::Pcg32 as rand::SeedableRng>::seed_from_u64(SEED);
        let mut field = Starfield::with_rng(viewport, tuning, rng);
        let mut surface = RecordingSurface::new();
        renderer::resize(&mut field, &mut surface, viewport);

        let mut recycled = 0;
        let mut strokes = 0;
        for frame in 0..FRAMES {
            // Sweep the mouse right for the first second, then let it settle
            if frame < 60 {
                field.pointer_move(frame as f32 * 10.0, 360.0, InputMode::Mouse);
            } else if frame == 60 {
                field.pointer_leave();
            }

            surface.clear();
            let stats = renderer::step(&mut field, &mut surface);
            recycled += stats.recycled;
            strokes += stats.strokes;

            if stats.frame % 120 == 0 {
                log::debug!(
                    "{}",
                    serde_json::to_string(&stats).unwrap_or_default()
                );
            }
        }

        log::info!(
            "{} frames, {} stars, {} strokes, {} recycled, final drift {:?}",
            FRAMES,
            field.stars.len(),
            strokes,
            recycled,
            field.velocity.current
        );
        Ok(())
    }
}
