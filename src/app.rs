//! Application window and profiler setup.
//!
//! Nothing is drawn into the window; it exists to receive keyboard focus and
//! shows the controller status in its title.

use winit::dpi::PhysicalSize;
use winit::error::OsError;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::constants::*;

/// Environment variable that enables the puffin HTTP server
const PROFILE_ENV: &str = "PATROL_PROFILE";

/// Create the input window
pub fn create_window(event_loop: &ActiveEventLoop) -> Result<Window, OsError> {
    let attrs = Window::default_attributes()
        .with_title(WINDOW_TITLE)
        .with_inner_size(PhysicalSize::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
        .with_resizable(true);
    event_loop.create_window(attrs)
}

/// Start the puffin server if `PATROL_PROFILE` is set
pub fn start_profiler() -> Option<puffin_http::Server> {
    std::env::var_os(PROFILE_ENV)?;

    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            puffin::set_scopes_on(true);
            log::info!("puffin profiler listening on {}", addr);
            Some(server)
        }
        Err(e) => {
            log::warn!("failed to start puffin server on {}: {}", addr, e);
            None
        }
    }
}

/// Window title for the given status line
pub fn window_title(status: &str) -> String {
    format!("{} - {}", WINDOW_TITLE, status)
}
