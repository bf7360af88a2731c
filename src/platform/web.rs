//! Browser host: canvas, animation frames, interval timer, keyboard
//!
//! The session and its canvas live in one `Rc<RefCell<App>>`. Every browser
//! callback borrows the whole app for its duration, so frames, timer ticks
//! and key events never interleave. Callbacks hold `Weak` handles and do
//! nothing once the app is gone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent,
    Window,
};

use super::{Host, score_label};
use crate::renderer::CanvasSurface;
use crate::session::Session;
use crate::settings::Settings;
use crate::sim::{Arena, GameOver};

const CANVAS_ID: &str = "gameCanvas";
const SCORE_ID: &str = "score";
const START_BUTTON_ID: &str = "startButton";

thread_local! {
    static APP: RefCell<Option<Rc<RefCell<App>>>> = const { RefCell::new(None) };
}

/// Everything one browser callback may touch
pub struct App {
    pub session: Session<WebHost>,
    pub surface: CanvasSurface,
}

/// [`Host`] backed by browser timers and the DOM
pub struct WebHost {
    app: Weak<RefCell<App>>,
    window: Window,
    score_el: Option<Element>,
    tick_ms: i32,
    /// Pending requestAnimationFrame id
    frame_id: Option<i32>,
    /// Live setInterval id and the closure it calls
    interval: Option<(i32, Closure<dyn FnMut()>)>,
}

impl WebHost {
    fn new(app: Weak<RefCell<App>>, window: Window, score_el: Option<Element>, tick_ms: u32) -> Self {
        Self {
            app,
            window,
            score_el,
            tick_ms: i32::try_from(tick_ms).unwrap_or(i32::MAX),
            frame_id: None,
            interval: None,
        }
    }
}

impl Host for WebHost {
    fn start_loops(&mut self) {
        let app = self.app.clone();
        let closure = Closure::<dyn FnMut()>::new(move || on_interval(&app));
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                self.tick_ms,
            ) {
            Ok(id) => self.interval = Some((id, closure)),
            Err(e) => log::error!("setInterval failed: {:?}", e),
        }

        self.next_frame();
    }

    fn next_frame(&mut self) {
        let app = self.app.clone();
        let callback = Closure::once_into_js(move |_time: f64| on_animation_frame(&app));
        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(id) => self.frame_id = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn stop_loops(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Never called from inside the interval callback, so dropping it is safe
        if let Some((id, _closure)) = self.interval.take() {
            self.window.clear_interval_with_handle(id);
        }
    }

    fn show_score(&mut self, score: u32) {
        if let Some(el) = &self.score_el {
            el.set_text_content(Some(&score_label(score)));
        }
    }

    fn game_over(&mut self, report: &GameOver) {
        let _ = self.window.alert_with_message(&report.to_string());
    }
}

fn on_animation_frame(app: &Weak<RefCell<App>>) {
    let Some(app) = app.upgrade() else {
        return;
    };
    let mut app = app.borrow_mut();
    let App { session, surface } = &mut *app;
    session.host_mut().frame_id = None;
    session.frame(surface);
}

fn on_interval(app: &Weak<RefCell<App>>) {
    let Some(app) = app.upgrade() else {
        return;
    };
    app.borrow_mut().session.second();
}

/// Start (or restart) a session on the page's canvas
#[wasm_bindgen(js_name = startGame)]
pub fn start_game() {
    APP.with(|slot| {
        if let Some(app) = slot.borrow().as_ref() {
            app.borrow_mut().session.start();
        } else {
            log::warn!("startGame called before the game was initialized");
        }
    });
}

/// Set up the canvas, settings and input listeners. The first session begins
/// on `startGame()` or a click on the start button.
pub fn init() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or("no #gameCanvas element")?
        .dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into()?;

    let settings = Settings::load();
    let arena = Arena::new(canvas.width() as f32, canvas.height() as f32);
    let score_el = document.get_element_by_id(SCORE_ID);
    let tick_ms = settings.difficulty.tick_ms;
    let seed = js_sys::Date::now() as u64;

    let app = Rc::new_cyclic(|weak| {
        let host = WebHost::new(weak.clone(), window.clone(), score_el, tick_ms);
        RefCell::new(App {
            session: Session::new(settings, arena, host, seed),
            surface: CanvasSurface::new(ctx),
        })
    });

    setup_keyboard(&window, &app)?;
    setup_start_button(&document, &app)?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));

    log::info!("Canvas {}x{} ready, seed {}", arena.width, arena.height, seed);
    Ok(())
}

fn setup_keyboard(window: &Window, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    {
        let app = Rc::downgrade(app);
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(app) = app.upgrade() else {
                return;
            };
            let fired = app.borrow_mut().session.key_down(&event.key());
            // Keep the space bar from scrolling the page
            if fired {
                event.prevent_default();
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = Rc::downgrade(app);
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(app) = app.upgrade() {
                app.borrow_mut().session.key_up(&event.key());
            }
        });
        window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn setup_start_button(document: &Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let Some(btn) = document.get_element_by_id(START_BUTTON_ID) else {
        log::info!("No #{} element; call startGame() to play", START_BUTTON_ID);
        return Ok(());
    };

    let app = Rc::downgrade(app);
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        if let Some(app) = app.upgrade() {
            app.borrow_mut().session.start();
        }
    });
    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
