use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::{Function, Promise};

use super::scene::Scene;
use super::surface::Surface;

/// Resolves on the next display refresh with the frame timestamp in ms.
pub async fn next_frame() -> Result<f64, JsValue> {
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let scheduled = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))
            .and_then(|window| window.request_animation_frame(&resolve));
        if let Err(err) = scheduled {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    let timestamp = JsFuture::from(promise).await?;
    Ok(timestamp.as_f64().unwrap_or_default())
}

/// Handle to a running frame loop. Dropping it stops the loop before its next
/// frame.
pub struct RenderLoop {
    running: Rc<Cell<bool>>,
}

impl RenderLoop {
    pub fn start<S>(scene: Rc<RefCell<Scene>>, surface: Rc<RefCell<S>>) -> Self
    where
        S: Surface + 'static,
    {
        let running = Rc::new(Cell::new(true));
        let flag = running.clone();

        spawn_local(async move {
            let mut started_at = None;
            while flag.get() {
                let now = match next_frame().await {
                    Ok(now) => now,
                    Err(err) => {
                        log::warn!("Background frame loop ended: {:?}", err);
                        break;
                    }
                };
                if !flag.get() {
                    break;
                }
                let origin = *started_at.get_or_insert(now);
                scene
                    .borrow_mut()
                    .frame(&mut *surface.borrow_mut(), now - origin);
            }
            flag.set(false);
            log::debug!("Background frame loop stopped");
        });

        Self { running }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&self) {
        self.running.set(false);
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
