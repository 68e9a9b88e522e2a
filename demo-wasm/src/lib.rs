use tearable::{
    Cloth, ClothConfig, Interaction, NoOpStepObserver, PointerButton, PointerEvent, Vec2,
};
use wasm_bindgen::prelude::*;

fn button(code: u32) -> PointerButton {
    // DOM MouseEvent.button: 0 = main, 2 = secondary.
    match code {
        0 => PointerButton::Primary,
        2 => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

fn flatten(points: impl Iterator<Item = Vec2<f32>>) -> Vec<f32> {
    let mut out = Vec::new();
    for p in points {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    cloth: Cloth<f32>,
    interaction: Interaction<f32>,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(rows: usize, cols: usize, spacing: f32, width: f32, height: f32) -> Result<ClothDemo, JsError> {
        let config = ClothConfig::new()
            .with_grid(rows, cols)
            .with_rest_distance(spacing)
            .with_bounds(width, height)
            .with_offset(Vec2::new(width / 3.8, height / 8.0));
        let cloth = Cloth::new(&config).map_err(|e| JsError::new(&e.to_string()))?;
        let interaction = cloth.interaction();
        Ok(ClothDemo { cloth, interaction })
    }

    pub fn update(&mut self) {
        self.cloth.step(&mut NoOpStepObserver);
    }

    pub fn pointer_down(&mut self, code: u32, x: f32, y: f32) {
        let event = PointerEvent::Pressed { button: button(code), position: Vec2::new(x, y) };
        self.cloth.handle_event(&mut self.interaction, event);
    }

    pub fn pointer_up(&mut self, code: u32, x: f32, y: f32) {
        let event = PointerEvent::Released { button: button(code), position: Vec2::new(x, y) };
        self.cloth.handle_event(&mut self.interaction, event);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let event = PointerEvent::Moved { position: Vec2::new(x, y) };
        self.cloth.handle_event(&mut self.interaction, event);
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        flatten(self.cloth.particles().iter().map(|p| p.pos))
    }

    /// Returns flat [ax, ay, bx, by, ...] for every active constraint
    pub fn segments(&self) -> Vec<f32> {
        flatten(self.cloth.active_segments().flat_map(|(a, b)| [a, b]))
    }

    /// Returns flat [x0, y0, ...] of the current cut path
    pub fn cut_path(&self) -> Vec<f32> {
        flatten(self.interaction.cut_path().iter().copied())
    }

    pub fn is_cutting(&self) -> bool {
        self.interaction.is_cutting()
    }

    pub fn rows(&self) -> usize {
        self.cloth.rows()
    }
    pub fn cols(&self) -> usize {
        self.cloth.cols()
    }
}
