// src/main.rs

pub mod app;
pub mod ui;
pub mod rendering_lib;

use log::{error, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoopWindowTarget, EventLoop},
    window::WindowBuilder,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use app::MosaicApp;

/// Seed for the first mosaic, from `MOSAIC_SEED`.
fn seed_from_env() -> Option<u64> {
    let raw = std::env::var("MOSAIC_SEED").ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            warn!("ignoring MOSAIC_SEED={raw:?}: not an unsigned integer");
            None
        }
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn run() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            console_log::init_with_level(log::Level::Warn).expect("Couldn't initialize logger");
        } else {
            env_logger::init();
        }
    }

    let event_loop = EventLoop::new().unwrap();
    let window = std::sync::Arc::new(
        WindowBuilder::new()
            .with_title("Stained Glass")
            .with_inner_size(winit::dpi::LogicalSize::new(1024, 768))
            .build(&event_loop)
            .unwrap(),
    );

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowExtWebSys;
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                let dst = doc.get_element_by_id("wasm-viewport")?;
                let canvas = web_sys::Element::from(window.canvas()?);
                dst.append_child(&canvas).ok()?;
                Some(())
            })
            .expect("Couldn't append canvas to document body.");
    }

    let mut app_state = MosaicApp::new(window.clone(), seed_from_env()).await;

    event_loop
        .run(move |event, target: &EventLoopWindowTarget<()>| {
            target.set_control_flow(ControlFlow::Wait);

            if let Event::WindowEvent { ref event, window_id } = event {
                if window_id != window.id() {
                    return;
                }
                match event {
                    WindowEvent::CloseRequested => {
                        target.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        match app_state.render(&window) {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                app_state.reconfigure();
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                error!("WGPU Out Of Memory! Exiting.");
                                target.exit();
                            }
                            Err(e) => warn!("Surface error: {:?}", e),
                        }
                    }
                    _ => {
                        if app_state.handle_window_event(event, &window) {
                            window.request_redraw();
                        }
                    }
                }
            }
        })
        .unwrap();
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {}
