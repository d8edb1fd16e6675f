//! Hero starfield canvas.
//!
//! A hundred stars drift down the hero at speeds keyed to their depth.
//! The whole animation is self-contained: the canvas resizes with its CSS
//! box and the frame loop runs for the life of the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const STAR_COUNT: usize = 100;
const STAR_COLOR: &str = "rgba(243,228,167,0.8)";

#[derive(Clone, Copy)]
struct Star {
    x: f64,
    y: f64,
    z: f64,
}

/// Drifting-stars canvas for the hero section.
#[component]
pub fn ParticlesCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            start(canvas);
        }
    });

    view! { <canvas class="particles" node_ref=canvas_ref></canvas> }
}

fn start(canvas: HtmlCanvasElement) {
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok());
    let Some(context) = context else {
        log::warn!("2d canvas context unavailable, skipping particles");
        return;
    };

    let stars: Vec<Star> = (0..STAR_COUNT)
        .map(|_| Star {
            x: js_sys::Math::random(),
            y: js_sys::Math::random(),
            z: js_sys::Math::random(),
        })
        .collect();

    // Mirror the CSS box into the bitmap size, now and on every resize.
    let size = Rc::new(Cell::new((0.0f64, 0.0f64)));
    let resize: Rc<dyn Fn()> = Rc::new({
        let canvas = canvas.clone();
        let size = size.clone();
        move || {
            let width = f64::from(canvas.offset_width());
            let height = f64::from(canvas.offset_height());
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            size.set((width, height));
        }
    });
    resize();
    {
        let resize = resize.clone();
        crate::dom::on_window_event("resize", move |_| resize());
    }

    // Frame loop keeps itself alive by re-requesting from inside the
    // callback. The cycle leaks, which is what a page-lifetime animation
    // wants.
    let frame = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));
    let frame_handle = frame.clone();
    *frame.borrow_mut() = Some(Closure::new(move || {
        let (width, height) = size.get();
        draw_frame(&context, &stars, width, height);
        if let Some(callback) = frame_handle.borrow().as_ref() {
            request_frame(callback);
        }
    }));
    if let Some(callback) = frame.borrow().as_ref() {
        request_frame(callback);
    };
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn draw_frame(context: &CanvasRenderingContext2d, stars: &[Star], width: f64, height: f64) {
    context.clear_rect(0.0, 0.0, width, height);
    context.set_fill_style_str(STAR_COLOR);
    let t = now_ms();
    for star in stars {
        let px = star.x * width;
        let py = (star.y * height + t * 0.01 * (star.z * 0.5 + 0.2)) % height;
        let radius = star.z * 2.0 + 0.3;
        context.begin_path();
        let _ = context.arc(px, py, radius, 0.0, std::f64::consts::TAU);
        context.fill();
    }
}
