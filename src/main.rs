//! Bouncing Balls entry point
//!
//! Browser: sizes the canvas to the window, wires the keyboard, and drives
//! frames with `requestAnimationFrame`. Native: runs a fixed number of frames
//! headless and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent};

    use bouncing_balls::Config;
    use bouncing_balls::platform::{ScoreSink, direction_for_key, run_frame};
    use bouncing_balls::renderer::{CanvasSurface, Surface};
    use bouncing_balls::sim::World;

    /// Writes the live count into a DOM element
    struct DomScore {
        el: Option<Element>,
        last: Option<usize>,
    }

    impl ScoreSink for DomScore {
        fn publish(&mut self, live: usize) {
            if self.last == Some(live) {
                return;
            }
            if let Some(el) = &self.el {
                el.set_text_content(Some(&format!("Ball count: {}", live)));
            }
            self.last = Some(live);
        }
    }

    /// Everything the frame callback and key handler share
    struct App {
        world: World,
        surface: CanvasSurface,
        score: DomScore,
    }

    impl App {
        fn frame(&mut self) {
            let report = run_frame(&mut self.world, &mut self.surface, &mut self.score);
            if report.frame % 600 == 0 {
                log::debug!("Frame {}: {} live", report.frame, report.live);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Bouncing Balls starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let config = Config::from_json_or_default(canvas.get_attribute("data-config").as_deref());

        // Surface size is captured once; resizes are not tracked
        let width = window.inner_width()?.as_f64().unwrap_or(0.0) as u32;
        let height = window.inner_height()?.as_f64().unwrap_or(0.0) as u32;
        let surface = CanvasSurface::new(&canvas, width, height)?;
        let size = surface.size();

        let seed = js_sys::Date::now() as u64;
        let world = World::new(&config, size.x, size.y, seed);

        let score_el = match document.get_element_by_id("score") {
            Some(el) => Some(el),
            None => document.query_selector("p")?,
        };
        if config.mode.has_player() && score_el.is_none() {
            log::warn!("No score element found; ball count will not be shown");
        }

        let app = Rc::new(RefCell::new(App {
            world,
            surface,
            score: DomScore {
                el: score_el,
                last: None,
            },
        }));

        if config.mode.has_player() {
            setup_keyboard(&window, app.clone())?;
        }

        request_animation_frame(app);

        log::info!("Bouncing Balls running!");
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(direction) = direction_for_key(&event.key()) {
                app.borrow_mut().world.steer(direction);
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone; animation stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bouncing_balls::consts::{HEADLESS_FRAMES, HEADLESS_HEIGHT, HEADLESS_WIDTH};
    use bouncing_balls::platform::{LogScore, direction_for_key, run_frame};
    use bouncing_balls::renderer::{RecordingSurface, Surface};
    use bouncing_balls::sim::World;
    use bouncing_balls::{Config, Mode};

    const SWEEP_KEYS: [&str; 4] = ["d", "s", "a", "w"];

    env_logger::init();
    log::info!("Bouncing Balls (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to see the canvas");

    let mut surface = RecordingSurface::new(HEADLESS_WIDTH, HEADLESS_HEIGHT);
    let size = surface.size();
    let mut score = LogScore::default();

    for mode in [Mode::Bounce, Mode::EatBalls] {
        let config = Config::for_mode(mode);
        let mut world = World::new(&config, size.x, size.y, 0x5eed);
        let mut contacts = 0;
        let mut eaten = 0;

        for frame in 0..HEADLESS_FRAMES {
            // Sweep the player around the field in eat-the-balls mode
            let key = SWEEP_KEYS[(frame / 20) as usize % SWEEP_KEYS.len()];
            if let Some(direction) = direction_for_key(key) {
                world.steer(direction);
            }
            let report = run_frame(&mut world, &mut surface, &mut score);
            contacts += report.contacts;
            eaten += report.eliminated;
            surface.clear();
        }

        log::info!(
            "{} mode: {} frames, {} contacts, {} eaten, {} live",
            mode.as_str(),
            world.frame,
            contacts,
            eaten,
            world.live_count()
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
