use super::PaletteColor;

/// Axis-aligned screen rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the left/top edges are inside, right/bottom are not.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A clickable colored rectangle, optionally labeled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub color: PaletteColor,
    pub label: Option<&'static str>,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: PaletteColor) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            color,
            label: None,
        }
    }

    pub fn labeled(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: PaletteColor,
        label: &'static str,
    ) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            color,
            label: Some(label),
        }
    }

    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        self.rect.contains(x, y)
    }
}
