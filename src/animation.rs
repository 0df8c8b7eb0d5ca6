// JS-facing handle that mounts the snowfall onto a canvas and keeps it
// running on requestAnimationFrame until stopped.
//
// Everything the browser holds on to (the pending frame callback and the
// resize listener) is owned by `Mounted`, and released in its Drop.

use crate::config::SnowConfig;
use crate::scene::SnowScene;
use crate::surface::{CanvasSurface, RenderSurface};
use crate::utils::Timer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen]
pub struct SnowAnimation {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl SnowAnimation {
    pub fn mount(canvas: HtmlCanvasElement) -> SnowAnimation {
        SnowAnimation::mount_with_config(canvas, SnowConfig::default())
    }

    pub fn mount_with_config(canvas: HtmlCanvasElement, config: SnowConfig) -> SnowAnimation {
        let _timer = Timer::new("SnowAnimation::mount");
        match Mounted::new(canvas, config) {
            Ok(mounted) => SnowAnimation {
                mounted: Some(mounted),
            },
            Err(err) => {
                warn!("snowfall disabled: {:?}", err);
                SnowAnimation::inert()
            }
        }
    }

    pub fn mount_by_id(id: &str) -> SnowAnimation {
        match find_canvas(id) {
            Ok(canvas) => SnowAnimation::mount(canvas),
            Err(err) => {
                warn!("snowfall disabled: {:?}", err);
                SnowAnimation::inert()
            }
        }
    }

    pub fn stop(&mut self) {
        if self.mounted.take().is_some() {
            log!("snowfall stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.mounted
            .as_ref()
            .map_or(false, |mounted| mounted.scene.borrow().is_running())
    }
}

impl SnowAnimation {
    fn inert() -> SnowAnimation {
        SnowAnimation { mounted: None }
    }
}

fn find_canvas(id: &str) -> Result<HtmlCanvasElement, JsValue> {
    let element = web_sys::window()
        .ok_or("no global `window` exists")?
        .document()
        .ok_or("window has no document")?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from(format!("no element with id `{}`", id)))?;
    element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from(format!("element `{}` is not a canvas", id)))
}

struct Mounted {
    window: Window,
    scene: Rc<RefCell<SnowScene<CanvasSurface>>>,
    frame: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    on_resize: Option<Closure<dyn FnMut()>>,
}

impl Mounted {
    fn new(canvas: HtmlCanvasElement, config: SnowConfig) -> Result<Mounted, JsValue> {
        let window = web_sys::window().ok_or("no global `window` exists")?;
        let mut surface = CanvasSurface::new(canvas)?;
        let (width, height) = CanvasSurface::viewport_size(&window)?;
        surface.set_size(width, height);

        let scene = SnowScene::new(surface, &config, &mut rand::thread_rng());
        let mut mounted = Mounted {
            window,
            scene: Rc::new(RefCell::new(scene)),
            frame: Rc::new(RefCell::new(None)),
            frame_id: Rc::new(Cell::new(None)),
            on_resize: None,
        };
        // From here on a failure drops `mounted`, which undoes whatever was
        // already registered
        mounted.listen_for_resize()?;
        mounted.start_frames()?;
        log!(
            "snowfall mounted: {} flakes on {}x{}",
            config.count,
            width,
            height
        );
        Ok(mounted)
    }

    fn listen_for_resize(&mut self) -> Result<(), JsValue> {
        let on_resize = {
            let window = self.window.clone();
            let scene = self.scene.clone();
            Closure::wrap(Box::new(move || match CanvasSurface::viewport_size(&window) {
                Ok((width, height)) => scene.borrow_mut().resize(width, height),
                Err(err) => warn!("could not read viewport size: {:?}", err),
            }) as Box<dyn FnMut()>)
        };
        self.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        self.on_resize = Some(on_resize);
        Ok(())
    }

    fn start_frames(&mut self) -> Result<(), JsValue> {
        let callback = {
            let window = self.window.clone();
            let scene = self.scene.clone();
            let frame = self.frame.clone();
            let frame_id = self.frame_id.clone();
            Closure::wrap(Box::new(move || {
                frame_id.set(None);
                if !scene.borrow_mut().tick(&mut rand::thread_rng()) {
                    return;
                }
                if let Some(next) = frame.borrow().as_ref() {
                    match request_frame(&window, next) {
                        Ok(id) => frame_id.set(Some(id)),
                        Err(err) => warn!("could not schedule next frame: {:?}", err),
                    }
                }
            }) as Box<dyn FnMut()>)
        };

        let id = request_frame(&self.window, &callback)?;
        self.frame_id.set(Some(id));
        *self.frame.borrow_mut() = Some(callback);
        Ok(())
    }
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.scene.borrow_mut().stop();

        if let Some(id) = self.frame_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                warn!("could not cancel animation frame: {:?}", err);
            }
        }
        // The frame closure holds an Rc to its own slot; emptying the slot
        // breaks the cycle so both get freed
        self.frame.borrow_mut().take();

        if let Some(on_resize) = self.on_resize.take() {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            {
                warn!("could not remove resize listener: {:?}", err);
            }
        }
    }
}
