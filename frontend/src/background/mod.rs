//! Decorative canvas behind the page: drifting particles that brighten near the
//! pointer, layered over a handful of slow gradient blobs.

pub mod blobs;
pub mod frame;
pub mod particles;
pub mod scene;
pub mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, Listener};
use crate::error::MountError;
use frame::RenderLoop;
use scene::{Scene, Viewport};
use surface::{CanvasSurface, Surface};

/// A mounted background. Dropping it stops the loop and detaches the handlers.
pub struct Background {
    render_loop: RenderLoop,
    _listeners: Vec<Listener>,
}

impl Drop for Background {
    fn drop(&mut self) {
        if self.render_loop.is_running() {
            debug!("Tearing down background");
        }
    }
}

/// Attach to the canvas with the given id and start animating.
pub fn mount(canvas_id: &str) -> Result<Background, MountError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let mut surface = CanvasSurface::find(&document, canvas_id)?;

    let viewport = Viewport::of(&window);
    surface.resize(&viewport);

    let scene = Rc::new(RefCell::new(Scene::new(viewport)));
    let surface = Rc::new(RefCell::new(surface));
    info!(
        "Background active: {}x{} @{}x, {} particles",
        viewport.width,
        viewport.height,
        viewport.device_pixel_ratio,
        scene.borrow().particles().len()
    );

    let root = document
        .document_element()
        .ok_or(MountError::NoDocument)?;

    let listeners = vec![
        {
            let scene = scene.clone();
            let surface = surface.clone();
            let resized = window.clone();
            Listener::new(&window, "resize", move |_| {
                scene
                    .borrow_mut()
                    .fit(&mut *surface.borrow_mut(), Viewport::of(&resized));
            })?
        },
        {
            let scene = scene.clone();
            Listener::new(&window, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    scene
                        .borrow_mut()
                        .pointer_moved(event.client_x() as f64, event.client_y() as f64);
                }
            })?
        },
        {
            let scene = scene.clone();
            Listener::new(&window, "touchmove", move |event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let touches = event.touches();
                if touches.length() != 1 {
                    return;
                }
                if let Some(touch) = touches.get(0) {
                    scene
                        .borrow_mut()
                        .pointer_moved(touch.client_x() as f64, touch.client_y() as f64);
                }
            })?
        },
        {
            let scene = scene.clone();
            Listener::new(&root, "mouseleave", move |_| scene.borrow_mut().pointer_left())?
        },
        {
            let scene = scene.clone();
            Listener::new(&window, "touchend", move |_| scene.borrow_mut().pointer_left())?
        },
    ];

    Ok(Background {
        render_loop: RenderLoop::start(scene, surface),
        _listeners: listeners,
    })
}

#[function_component(Backdrop)]
pub fn backdrop() -> Html {
    use_effect_with_deps(
        move |_| {
            let background = match mount(config::BACKGROUND_CANVAS_ID) {
                Ok(background) => Some(background),
                Err(err) => {
                    debug!("Background disabled: {}", err);
                    None
                }
            };
            move || drop(background)
        },
        (),
    );

    html! {
        <canvas id={config::BACKGROUND_CANVAS_ID} class="bg-canvas" aria-hidden="true"></canvas>
    }
}
