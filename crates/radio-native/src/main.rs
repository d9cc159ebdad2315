use std::time::Instant;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use radio_core::{
    apply_resize, build_instances, pointer_offset, Camera, CityParams, EntityRegistry,
    PercussionEvent, PointerFollow, Radio, SceneFrame, SurfaceSize,
};

mod audio;
mod render;

use audio::{start_audio_output, AudioOut, SampleClock};
use render::GpuState;

/// Radio driven from the main loop, feeding the cpal mixer.
struct NativeRadio {
    radio: Radio<SampleClock>,
    out: AudioOut,
    events: Vec<PercussionEvent>,
}

impl NativeRadio {
    fn new(out: AudioOut) -> Self {
        Self {
            radio: Radio::new(out.clock.clone(), Default::default()),
            out,
            events: Vec::new(),
        }
    }

    fn toggle(&mut self) {
        self.radio.toggle();
    }

    /// One scheduler pass; new hits go straight to the mixer.
    fn pump(&mut self) {
        if !self.radio.is_playing() {
            return;
        }
        self.radio.tick(&mut self.events);
        if self.events.is_empty() {
            return;
        }
        let Ok(mut mixer) = self.out.mixer.lock() else {
            log::error!("[radio] mixer lock poisoned; dropping {} hits", self.events.len());
            self.events.clear();
            return;
        };
        let mut rng = rand::thread_rng();
        for ev in self.events.drain(..) {
            mixer.schedule(&ev, &mut rng);
        }
    }
}

struct Scene {
    registry: EntityRegistry,
    camera: Camera,
    surface_size: SurfaceSize,
    pointer: PointerFollow,
    started: Instant,
}

impl Scene {
    fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        log::error!("radio-native exited: {e:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut radio = match start_audio_output() {
        Ok(out) => Some(NativeRadio::new(out)),
        Err(e) => {
            log::warn!("[radio] {e}; running without audio");
            None
        }
    };

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Sunset Radio (native) - Space toggles the radio")
        .build(&event_loop)?;

    let registry = EntityRegistry::generate(&CityParams::default());
    let mut gpu = pollster::block_on(GpuState::new(&window, registry.len()))?;
    let surface_size = gpu.size();
    let mut scene = Scene {
        registry,
        camera: Camera::landing(surface_size.width, surface_size.height),
        surface_size,
        pointer: PointerFollow::default(),
        started: Instant::now(),
    };

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            if apply_resize(&mut scene.camera, &mut scene.surface_size, size.width, size.height) {
                gpu.resize(scene.surface_size);
            }
        }
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            let inner = gpu.window.inner_size();
            let offset = pointer_offset(
                position.x as f32,
                position.y as f32,
                inner.width as f32,
                inner.height as f32,
            );
            let now = scene.elapsed();
            scene.pointer.pointer_moved(now, offset);
        }
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key: Key::Named(NamedKey::Space),
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                },
            ..
        } => match radio.as_mut() {
            Some(r) => r.toggle(),
            None => log::warn!("[radio] no audio output"),
        },
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::AboutToWait => {
            // The scheduler runs every loop iteration, independent of drawing.
            if let Some(r) = radio.as_mut() {
                r.pump();
            }
            gpu.window.request_redraw();
        }
        Event::WindowEvent {
            event: WindowEvent::RedrawRequested,
            ..
        } => {
            let elapsed = scene.elapsed();
            let frame = SceneFrame::at(elapsed, scene.registry.cards().len());
            scene.camera.eye = frame.camera_eye;
            scene.camera.target = frame.camera_target;
            scene.camera.tilt = scene.pointer.tilt(elapsed);
            let instances = build_instances(&scene.registry, &frame);
            match gpu.render(&scene.camera, &frame, &instances) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    gpu.resize(scene.surface_size)
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory");
                    elwt.exit()
                }
                Err(e) => log::warn!("[gpu] frame skipped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
