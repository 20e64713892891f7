//! Browser host
//!
//! Wires a `GameSession` to the page: a 2D canvas, window keyboard events,
//! the speed/ball-count sliders and the reset button. Every animation frame
//! clears the canvas, draws, then updates.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Event, EventTarget, HtmlCanvasElement, HtmlInputElement,
    KeyboardEvent,
};

use crate::consts::*;
use crate::render::RenderTarget;
use crate::settings::{GameConfig, Settings};
use crate::sim::{GameEvent, GameSession};

/// Element ids on the host page
const CANVAS_ID: &str = "canvas1";
const BALL_SPEED_ID: &str = "ball-speed-range";
const PADDLE_SPEED_ID: &str = "player-speed-range";
const BALL_COUNT_ID: &str = "ball-no-range";
const RESET_ID: &str = "reset-btn";

/// Canvas 2D context as a render target
pub struct CanvasTarget {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasTarget {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        ctx.set_fill_style_str("white");
        ctx.set_font(SCORE_FONT);
        Self { ctx, width, height }
    }
}

impl RenderTarget for CanvasTarget {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}

/// Everything the page callbacks share
struct App {
    session: GameSession,
    settings: Settings,
    base: GameConfig,
    target: CanvasTarget,
    document: Document,
}

impl App {
    fn frame(&mut self) {
        self.target.clear();
        self.session.draw(&mut self.target);
        self.session.update();

        for event in self.session.events() {
            if let GameEvent::PauseToggled { active } = event {
                log::info!("{}", if *active { "Resumed" } else { "Paused" });
            }
        }
    }

    /// Discard the session and start a new one from the sliders as they are
    /// now. Held keys carry over so a key down across the reset keeps working.
    fn rebuild(&mut self) {
        self.settings = read_settings(&self.document);
        let seed = js_sys::Date::now() as u64;
        let config = self.settings.to_config(&self.base).with_seed(seed);
        let input = std::mem::take(self.session.input_mut());

        self.session = GameSession::new(&config);
        *self.session.input_mut() = input;

        log::info!("Game restarted with seed: {}", seed);
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    // Already initialised on hot reload
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Pong Duel starting...");

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        log::error!("No document, cannot start");
        return;
    };

    let Some(canvas) = element::<HtmlCanvasElement>(&document, CANVAS_ID) else {
        log::error!("Canvas #{} not found", CANVAS_ID);
        return;
    };
    canvas.set_width(PLAYFIELD_WIDTH as u32);
    canvas.set_height(PLAYFIELD_HEIGHT as u32);

    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
    let Some(ctx) = ctx else {
        log::error!("2D canvas context unavailable");
        return;
    };

    let settings = read_settings(&document);
    let base = GameConfig {
        width: canvas.width() as f32,
        height: canvas.height() as f32,
        ..Default::default()
    };
    let config = settings
        .to_config(&base)
        .with_seed(js_sys::Date::now() as u64);

    let app = Rc::new(RefCell::new(App {
        session: GameSession::new(&config),
        settings,
        base,
        target: CanvasTarget::new(ctx, canvas.width() as f64, canvas.height() as f64),
        document: document.clone(),
    }));

    setup_keyboard(&window, app.clone());
    setup_controls(&document, app.clone());

    request_animation_frame(app);

    log::info!("Pong Duel running!");
}

fn element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

fn slider_value(document: &Document, id: &str) -> Option<f64> {
    element::<HtmlInputElement>(document, id).map(|slider| slider.value_as_number())
}

/// Current slider positions; a missing slider keeps its default
fn read_settings(document: &Document) -> Settings {
    let mut settings = Settings::default();
    if let Some(raw) = slider_value(document, PADDLE_SPEED_ID) {
        settings.paddle_speed_slider = raw as f32;
    }
    if let Some(raw) = slider_value(document, BALL_SPEED_ID) {
        settings.ball_speed_slider = raw as f32;
    }
    if let Some(raw) = slider_value(document, BALL_COUNT_ID) {
        // NaN saturates to 0; the upper bound is applied by GameConfig
        settings.ball_count = raw.max(0.0) as usize;
    }
    settings
}

fn listen<E>(target: &EventTarget, name: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    if target
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("Failed to register {} listener", name);
    }
    closure.forget();
}

fn is_game_key(key: &str) -> bool {
    matches!(
        key,
        KEY_LEFT_UP | KEY_LEFT_DOWN | KEY_RIGHT_UP | KEY_RIGHT_DOWN | KEY_PAUSE
    )
}

fn setup_keyboard(window: &web_sys::Window, app: Rc<RefCell<App>>) {
    {
        let app = app.clone();
        listen(window, "keydown", move |event: KeyboardEvent| {
            let key = event.key();
            if is_game_key(&key) {
                // Arrows and space would otherwise scroll the page
                event.prevent_default();
            }
            let mut app = app.borrow_mut();
            let input = app.session.input_mut();
            if event.repeat() {
                // A key held through a focus loss comes back as auto-repeat
                input.press_held(&key);
            } else {
                input.press(&key);
            }
        });
    }
    {
        let app = app.clone();
        listen(window, "keyup", move |event: KeyboardEvent| {
            app.borrow_mut().session.input_mut().release(&event.key());
        });
    }
    // Key-ups are lost while the window is unfocused
    listen(window, "blur", move |_event: Event| {
        app.borrow_mut().session.input_mut().clear();
    });
}

fn setup_controls(document: &Document, app: Rc<RefCell<App>>) {
    if let Some(slider) = element::<HtmlInputElement>(document, PADDLE_SPEED_ID) {
        let app = app.clone();
        let input = slider.clone();
        listen(&slider, "change", move |_event: Event| {
            let mut app = app.borrow_mut();
            app.settings.paddle_speed_slider = input.value_as_number() as f32;
            let speed = app.settings.paddle_speed();
            app.session.set_paddle_speed(speed);
        });
    } else {
        log::warn!("Paddle speed slider #{} not found", PADDLE_SPEED_ID);
    }

    if let Some(slider) = element::<HtmlInputElement>(document, BALL_SPEED_ID) {
        let app = app.clone();
        let input = slider.clone();
        listen(&slider, "change", move |_event: Event| {
            let mut app = app.borrow_mut();
            app.settings.ball_speed_slider = input.value_as_number() as f32;
            let speed = app.settings.ball_speed();
            app.session.set_ball_speed(speed);
        });
    } else {
        log::warn!("Ball speed slider #{} not found", BALL_SPEED_ID);
    }

    // Ball count is only read when a session is built
    if document.get_element_by_id(BALL_COUNT_ID).is_none() {
        log::warn!("Ball count slider #{} not found", BALL_COUNT_ID);
    }

    if let Some(button) = document.get_element_by_id(RESET_ID) {
        listen(&button, "click", move |_event: Event| {
            app.borrow_mut().rebuild();
        });
    } else {
        log::warn!("Reset button #{} not found", RESET_ID);
    }
}

fn request_animation_frame(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        app.borrow_mut().frame();
        request_animation_frame(app);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}
