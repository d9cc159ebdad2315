#![cfg(target_arch = "wasm32")]
use instant::Instant;
use radio_core::{CityParams, EntityRegistry, PointerFollow};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod cursor;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("radio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Loading screen runs regardless of what else comes up.
    let loading = RefCell::new(overlay::LoadingOverlay::from_document(&document));
    let loading_task = frame::RafTask::new("loading", move || loading.borrow_mut().step());
    loading_task.start();
    std::mem::forget(loading_task);

    let started = Instant::now();
    let pointer = Rc::new(RefCell::new(PointerFollow::default()));
    let cursor = cursor::CursorStyle::install(&document)
        .map_err(|e| log::warn!("[ui] custom cursor disabled: {:?}", e))
        .ok();
    events::wire_pointer(started, pointer.clone(), cursor);
    events::wire_hover(&document);
    events::wire_radio_button(&document);

    let canvas: web::HtmlCanvasElement = dom::query(&document, "#webgl")?;
    dom::sync_canvas_backing_size(&canvas);
    events::wire_resize(canvas.clone());

    let registry = Rc::new(EntityRegistry::generate(&CityParams::default()));
    let Some(gpu) = render::init_gpu(&canvas, registry.len()).await else {
        log::warn!("[gpu] no renderer; scene disabled, radio still available");
        return Ok(());
    };

    let ctx = RefCell::new(frame::FrameContext::new(
        canvas, gpu, registry, pointer, started,
    ));
    let render_task = frame::RafTask::new("render", move || {
        ctx.borrow_mut().frame();
        true
    });
    render_task.start();
    // Runs for the lifetime of the page.
    std::mem::forget(render_task);
    Ok(())
}
