use crate::audio::{self, AudioCtxClock, WebVoices};
use crate::cursor::CursorStyle;
use crate::dom;
use crate::frame::RafTask;
use instant::Instant;
use radio_core::{
    pointer_offset, PercussionEvent, PointerFollow, Radio, SchedulerStatus, HOVER_CLASS,
    HOVER_TARGETS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const PLAY_LABEL: &str = "▶ RADIO LOS SANTOS";
pub const PAUSE_LABEL: &str = "|| PAUSE RADIO";

/// Play button, vinyl disk and the scheduler task for one audio context.
pub struct RadioDeck {
    ctx: web::AudioContext,
    radio: Rc<RefCell<Radio<AudioCtxClock>>>,
    scheduler_task: RafTask,
    button: web::HtmlButtonElement,
    vinyl: Option<web::Element>,
}

impl RadioDeck {
    pub fn new(ctx: web::AudioContext, button: web::HtmlButtonElement, vinyl: Option<web::Element>) -> Self {
        let radio = Rc::new(RefCell::new(Radio::new(
            AudioCtxClock(ctx.clone()),
            Default::default(),
        )));
        let voices = WebVoices::new(ctx.clone());
        let radio_task = radio.clone();
        let mut events: Vec<PercussionEvent> = Vec::new();
        let scheduler_task = RafTask::new("scheduler", move || {
            let report = radio_task.borrow_mut().tick(&mut events);
            for ev in events.drain(..) {
                voices.play(&ev);
            }
            report.status == SchedulerStatus::Armed
        });
        let deck = Self {
            ctx,
            radio,
            scheduler_task,
            button,
            vinyl,
        };
        deck.show(false);
        deck
    }

    pub fn toggle(&self) {
        audio::resume_if_suspended(&self.ctx);
        let playing = self.radio.borrow_mut().toggle();
        if playing {
            self.scheduler_task.start();
        } else {
            // Hits already handed to the audio graph still play out.
            self.scheduler_task.stop();
        }
        self.show(playing);
    }

    fn show(&self, playing: bool) {
        self.button
            .set_text_content(Some(if playing { PAUSE_LABEL } else { PLAY_LABEL }));
        if let Some(vinyl) = &self.vinyl {
            let _ = vinyl.class_list().toggle_with_force("playing", playing);
        }
    }
}

/// Hook the play button up to a fresh audio context.
///
/// Without audio the page still renders; the button is disabled instead.
pub fn wire_radio_button(document: &web::Document) {
    let button = match dom::query::<web::HtmlButtonElement>(document, "#play-btn") {
        Ok(b) => b,
        Err(e) => {
            log::warn!("[ui] {e}; radio disabled");
            return;
        }
    };
    let vinyl = dom::query::<web::Element>(document, ".vinyl-disk")
        .map_err(|e| log::warn!("[ui] {e}"))
        .ok();
    let ctx = match web::AudioContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            log::warn!("[radio] AudioContext unavailable: {:?}", e);
            button.set_disabled(true);
            return;
        }
    };
    log::info!("[radio] audio context ready sr={}", ctx.sample_rate());
    let deck = RadioDeck::new(ctx, button.clone(), vinyl);
    dom::add_listener(&button, "click", move || deck.toggle());
}

/// Pointer moves retarget the camera tilt and move the custom cursor.
pub fn wire_pointer(
    started: Instant,
    pointer: Rc<RefCell<PointerFollow>>,
    cursor: Option<CursorStyle>,
) {
    let Some(window) = web::window() else {
        return;
    };
    let win = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        let now = started.elapsed().as_secs_f32();
        pointer
            .borrow_mut()
            .pointer_moved(now, pointer_offset(x, y, w, h));
        if let Some(cursor) = &cursor {
            cursor.move_to(x, y);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Toggle the body's hover class while over links, buttons and list items.
pub fn wire_hover(document: &web::Document) {
    let Some(body) = document.body() else {
        log::warn!("[ui] no <body>; hover polish skipped");
        return;
    };
    let targets = dom::query_all::<web::Element>(document, HOVER_TARGETS);
    for el in &targets {
        let enter_body = body.clone();
        dom::add_listener(el, "mouseenter", move || {
            let _ = enter_body.class_list().add_1(HOVER_CLASS);
        });
        let leave_body = body.clone();
        dom::add_listener(el, "mouseleave", move || {
            let _ = leave_body.class_list().remove_1(HOVER_CLASS);
        });
    }
    log::info!("[ui] hover wired on {} elements", targets.len());
}

/// Keep the canvas backing store in step with the window.
pub fn wire_resize(canvas: web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move || {
            dom::sync_canvas_backing_size(&canvas)
        });
    }
}
