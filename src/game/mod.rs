mod button;
mod colors;
mod manager;
mod palette;
mod state;

use gpui::actions;

pub use button::{Button, Rect};
pub use colors::ColorsGame;
pub use manager::{GameEvent, GameManager};
pub use palette::PaletteColor;
pub use state::GameState;

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

actions!(colors, [StartGame, QuitGame]);
