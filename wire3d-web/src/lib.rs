/// wire3d Web - canvas frontend compiled to WebAssembly
///
/// The JavaScript host owns the DOM: it attaches listeners, forwards each
/// event to the matching `WebScene` method, calls `tick` from
/// `requestAnimationFrame`, and mirrors `inspect` into its details panel.
use nalgebra::Vector3;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wire3d_core::{
    CameraKey, Event, PointerButton, SceneConfig, SceneState, Surface, WidgetMode,
};

const EDGE_COLOR: &str = "black";
const HIGHLIGHT_COLOR: &str = "red";

/// Drawing surface backed by a 2D canvas context
struct CanvasSurface {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_segment(&mut self, start: &Vector3<f64>, end: &Vector3<f64>) {
        self.context.begin_path();
        self.context.move_to(start.x, start.y);
        self.context.line_to(end.x, end.y);
        self.context.stroke();
    }

    fn set_highlight(&mut self, on: bool) {
        let color = if on { HIGHLIGHT_COLOR } else { EDGE_COLOR };
        self.context.set_stroke_style(&JsValue::from_str(color));
    }
}

fn to_js(err: wire3d_core::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WebScene {
    scene: SceneState,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl WebScene {
    /// Attach to the `<canvas>` element with id `canvas_id`
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebScene, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id {canvas_id:?}")))?
            .dyn_into::<HtmlCanvasElement>()?;
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let config = SceneConfig {
            width: canvas.width(),
            height: canvas.height(),
            ..SceneConfig::default()
        };
        let scene = SceneState::new(config).map_err(|e| to_js(e.into()))?;
        tracing::info!(width = config.width, height = config.height, "canvas attached");

        Ok(WebScene {
            scene,
            surface: CanvasSurface {
                context,
                width: config.width as f64,
                height: config.height as f64,
            },
        })
    }

    /// Render one animation frame
    pub fn tick(&mut self) {
        self.scene.tick(&mut self.surface);
    }

    /// `button` follows `MouseEvent.button`: 0 primary, 2 secondary
    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16) {
        self.scene.handle_event(Event::PointerDown {
            x,
            y,
            button: PointerButton::from_index(button),
        });
    }

    pub fn pointer_move(&mut self, dx: f64, dy: f64) {
        self.scene.handle_event(Event::PointerMove { dx, dy });
    }

    pub fn pointer_up(&mut self, button: i16) {
        self.scene.handle_event(Event::PointerUp {
            button: PointerButton::from_index(button),
        });
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.scene.handle_event(Event::Wheel { delta: delta_y });
    }

    /// Camera keys by `KeyboardEvent.key`; anything else is ignored
    pub fn key(&mut self, name: &str) {
        if let Some(key) = CameraKey::parse(name) {
            self.scene.handle_event(Event::Key(key));
        }
    }

    /// `"translate"`, `"rotate"` or `"scale"`
    pub fn select_mode(&mut self, name: &str) -> Result<(), JsValue> {
        let mode = WidgetMode::parse(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown widget mode {name:?}")))?;
        self.scene.handle_event(Event::SelectMode(mode));
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.handle_event(Event::Resize { width, height });
        self.surface.width = width as f64;
        self.surface.height = height as f64;
    }

    /// Index of the selected cube, if any
    pub fn selection(&self) -> Option<u32> {
        self.scene.selection().map(|index| index as u32)
    }

    /// Nine transform scalars of the selection (position, rotation, scale)
    pub fn inspect(&self) -> Option<Vec<f64>> {
        self.scene
            .inspect()
            .map(|transform| wire3d_core::inspector::transform_values(&transform).to_vec())
    }

    /// Write a details-panel input (`posX` ... `scaleZ`) into the selection
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
        self.scene.set_named_field(name, value).map_err(to_js)
    }
}
