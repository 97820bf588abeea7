#![cfg(target_arch = "wasm32")]
use globe_core::{DragTracker, ProgressCell, ProgressTracker, SceneConfig, SceneDirector, SharedRotation};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod panel;
mod publish;
mod styles;

use constants::{CANVAS_ID, CONFIG_SCRIPT_ID, READY_EVENT, SECTION_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Page-supplied JSON overrides, or the built-in scene. A config that is
/// present but invalid aborts startup rather than rendering a broken scene.
fn load_config(document: &web::Document) -> anyhow::Result<SceneConfig> {
    match dom::script_text(document, CONFIG_SCRIPT_ID) {
        Some(json) => {
            let cfg = SceneConfig::from_json(&json)?;
            log::info!("[config] loaded #{}", CONFIG_SCRIPT_ID);
            Ok(cfg)
        }
        None => Ok(SceneConfig::default()),
    }
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("init already ran; ignoring");
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let section: web::HtmlElement = document
        .get_element_by_id(SECTION_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SECTION_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let cfg = load_config(&document)?;
    let manual_rotation = cfg.manual_rotation;
    let drag_sensitivity = cfg.drag_sensitivity;
    let director = SceneDirector::new(cfg)?;

    // Static geometry goes to the host renderer once, before any frame.
    publish::dispatch(
        &canvas,
        READY_EVENT,
        &publish::ready_detail(&director.static_geometry()),
    )
    .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Single writer per value: scroll handlers write progress, pointer
    // handlers write rotation, the frame loop only reads.
    let progress = Rc::new(ProgressCell::default());
    let rotation = Rc::new(SharedRotation::default());

    events::wire_scroll_handlers(events::ScrollWiring {
        section,
        canvas: canvas.clone(),
        tracker: Rc::new(RefCell::new(ProgressTracker::new())),
        progress: progress.clone(),
    });

    if manual_rotation {
        events::wire_pointer_handlers(events::PointerWiring {
            canvas: canvas.clone(),
            drag: Rc::new(RefCell::new(DragTracker::new(drag_sensitivity))),
            rotation: rotation.clone(),
        });
        log::info!("[drag] manual rotation enabled");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        director,
        progress,
        rotation,
        document,
        canvas,
        last_instant: Instant::now(),
        applied_progress: None,
    }));
    frame::first_frame(&frame_ctx);
    frame::start_loop(frame_ctx);
    Ok(())
}
