#![allow(dead_code)]

mod app;
mod audio;
mod components;
mod config;
mod constants;
mod error;
mod events;
mod game_loop;
mod input;
mod scene;
mod systems;
mod time_system;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use config::ControllerConfig;
use constants::*;
use hecs::World;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Config file looked up in the working directory when no path is given
const DEFAULT_CONFIG_PATH: &str = "patrol.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    // An explicit path must exist; the default one is optional
    let config = match std::env::args().nth(1) {
        Some(path) => ControllerConfig::load(&PathBuf::from(path))?,
        None => ControllerConfig::load_or_default(&PathBuf::from(DEFAULT_CONFIG_PATH))?,
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    config: ControllerConfig,
    state: Option<AppState>,
}

struct AppState {
    window: Window,

    // Scene
    world: World,
    patrol: scene::Patrol,
    events: events::EventQueue,

    // Audio device must outlive the alert sink
    _audio: Option<audio::AudioOutput>,
    _profiler: Option<puffin_http::Server>,

    input: input::InputState,
    clock: time_system::FrameClock,
    title: String,
}

impl App {
    fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(mut state) = self.state.take() {
            scene::despawn_patroller(&mut state.world, state.patrol);
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window = match app::create_window(event_loop) {
            Ok(window) => window,
            Err(e) => {
                log::error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let profiler = app::start_profiler();

        let audio = if self.config.audio.enabled {
            audio::AudioOutput::try_default()
        } else {
            None
        };
        let sound = audio
            .as_ref()
            .and_then(|output| output.alert_sound(&self.config.audio));

        let mut world = World::new();
        let patrol = scene::init_world(&mut world, &self.config, sound);
        let title = app::window_title(&game_loop::status_line(&world, &patrol));
        window.set_title(&title);

        log::info!("controls: W/S move, A/D turn, Shift boost, N/C/Space mode, B signal");

        self.state = Some(AppState {
            window,
            world,
            patrol,
            events: events::EventQueue::new(),
            _audio: audio,
            _profiler: profiler,
            input: input::InputState::new(),
            clock: time_system::FrameClock::new(),
            title,
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }
            WindowEvent::Focused(false) => {
                state.input.clear();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            if key == KeyCode::Escape {
                                self.shutdown(event_loop);
                                return;
                            }
                            state.input.press(key, event.repeat);
                        }
                        ElementState::Released => {
                            state.input.release(key);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            state.update();
            event_loop.set_control_flow(ControlFlow::WaitUntil(
                Instant::now() + Duration::from_secs_f32(TARGET_FRAME_DT),
            ));
        }
    }
}

impl AppState {
    fn update(&mut self) {
        puffin::GlobalProfiler::lock().new_frame();

        let dt = self.clock.tick();
        let input = input::process_keyboard(&mut self.input, dt);

        game_loop::run_frame(&mut self.world, &mut self.patrol, &input, dt, &mut self.events);
        let processed = game_loop::process_events(&mut self.events);

        // Mode and signal only change through events; position and heading only with axis input
        let moving = input.movement.forward != 0.0 || input.movement.turn != 0.0;
        if processed > 0 || moving {
            let title = app::window_title(&game_loop::status_line(&self.world, &self.patrol));
            if title != self.title {
                self.window.set_title(&title);
                self.title = title;
            }
        }
    }
}
