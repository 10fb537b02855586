#[macro_use]
mod utils;

pub mod canvas;
pub mod color;
pub mod config;
mod dom;
pub mod field;
pub mod page;
pub mod particle;
pub mod surface;

extern crate nalgebra_glm as glm;

use crate::canvas::CanvasSurface;
use crate::config::PARTICLE_COUNT;
use crate::field::ParticleField;
use rand::rngs::ThreadRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement};

// Use `wee_alloc` as the global allocator when the feature is enabled
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

/// Particle field drawn onto a full-window canvas. JS can drive it with
/// `tick` and `resize`, or call `start` to let the crate wire everything up.
#[wasm_bindgen]
pub struct ParticleBackground {
    field: ParticleField<CanvasSurface, ThreadRng>,
}

#[wasm_bindgen]
impl ParticleBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<ParticleBackground, JsValue> {
        let _timer = Timer::new("ParticleBackground::new");
        let (width, height) = dom::viewport_size(&dom::window()?)?;
        let surface = CanvasSurface::new(canvas)?;
        surface.set_size(width, height);

        let mut field =
            ParticleField::new(surface, width as f64, height as f64, rand::thread_rng());
        field.initialize(PARTICLE_COUNT);
        log!("{} particles on a {}x{} canvas", field.len(), width, height);

        Ok(ParticleBackground { field })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let _timer = Timer::new("ParticleBackground::resize");
        self.field.surface().set_size(width, height);
        self.field.on_resize(width as f64, height as f64);
    }

    /// Advance and redraw one animation frame
    pub fn tick(&mut self) {
        self.field.frame();
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }
}

/// Run the background on the canvas with id `canvas_id` and install the
/// page effects. Everything stays alive until the page goes away.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document()?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id `{}`", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()?;
    let background = Rc::new(RefCell::new(ParticleBackground::new(canvas)?));

    {
        let background = background.clone();
        let resized = window.clone();
        dom::listen(&window, "resize", move |_| {
            match dom::viewport_size(&resized) {
                Ok((width, height)) => background.borrow_mut().resize(width, height),
                Err(err) => console::warn_1(&err),
            }
        })?;
    }

    // The frame callback reschedules itself through this cell
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        background.borrow_mut().tick();
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = dom::request_animation_frame(callback) {
                console::warn_1(&err);
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(callback) = frame.borrow().as_ref() {
        dom::request_animation_frame(callback)?;
    }

    page::install(&window, &document)
}
