use crate::render;
use instant::Instant;
use radio_core::{apply_resize, build_instances, Camera, EntityRegistry, PointerFollow, SceneFrame, SurfaceSize};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A step function re-armed on every `requestAnimationFrame` until stopped.
///
/// The step returns `false` to stop itself. Dropping the task cancels any
/// pending frame.
pub struct RafTask {
    inner: Rc<RafInner>,
}

struct RafInner {
    name: &'static str,
    step: RefCell<Box<dyn FnMut() -> bool>>,
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl RafTask {
    pub fn new(name: &'static str, step: impl FnMut() -> bool + 'static) -> Self {
        let inner = Rc::new(RafInner {
            name,
            step: RefCell::new(Box::new(step)),
            running: Cell::new(false),
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak: Weak<RafInner> = Rc::downgrade(&inner);
        *inner.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.handle.set(None);
                inner.run();
            }
        }) as Box<dyn FnMut()>));
        Self { inner }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Run one step now, then keep going every frame. No-op while running.
    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        log::info!("[task] {} start", self.inner.name);
        self.inner.run();
    }

    pub fn stop(&self) {
        if !self.inner.running.replace(false) {
            return;
        }
        if let Some(handle) = self.inner.handle.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(handle);
            }
        }
        log::info!("[task] {} stop", self.inner.name);
    }
}

impl Drop for RafTask {
    fn drop(&mut self) {
        self.stop();
    }
}

impl RafInner {
    fn run(&self) {
        if !self.running.get() {
            return;
        }
        let keep_going = (self.step.borrow_mut())();
        if !keep_going {
            self.running.set(false);
            log::info!("[task] {} finished", self.name);
            return;
        }
        // The step may have stopped us.
        if self.running.get() {
            self.schedule();
        }
    }

    fn schedule(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.callback.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(handle) => self.handle.set(Some(handle)),
                Err(e) => {
                    log::error!("[task] {} requestAnimationFrame error: {:?}", self.name, e);
                    self.running.set(false);
                }
            }
        }
    }
}

/// Per-frame scene state for the render loop.
pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub registry: Rc<EntityRegistry>,
    pub pointer: Rc<RefCell<PointerFollow>>,
    pub camera: Camera,
    pub surface_size: SurfaceSize,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        gpu: render::GpuState<'a>,
        registry: Rc<EntityRegistry>,
        pointer: Rc<RefCell<PointerFollow>>,
        started: Instant,
    ) -> Self {
        let surface_size = gpu.size();
        Self {
            canvas,
            gpu,
            registry,
            pointer,
            camera: Camera::landing(surface_size.width, surface_size.height),
            surface_size,
            started,
        }
    }

    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();

        // The resize listener updates the canvas backing store; follow it here.
        if apply_resize(
            &mut self.camera,
            &mut self.surface_size,
            self.canvas.width(),
            self.canvas.height(),
        ) {
            log::info!(
                "[gpu] resize {}x{} aspect={:.3}",
                self.surface_size.width,
                self.surface_size.height,
                self.camera.aspect
            );
            self.gpu.resize(self.surface_size);
        }

        let scene = SceneFrame::at(elapsed, self.registry.cards().len());
        self.camera.eye = scene.camera_eye;
        self.camera.target = scene.camera_target;
        self.camera.tilt = self.pointer.borrow().tilt(elapsed);

        let instances = build_instances(&self.registry, &scene);
        match self.gpu.render(&self.camera, &scene, &instances) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                self.gpu.resize(self.surface_size);
            }
            Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
        }
    }
}
