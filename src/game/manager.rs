use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{debug, info};

use super::{Button, GameState, PaletteColor, WINDOW_HEIGHT, WINDOW_WIDTH};

const START_TIME: f32 = 8.0;
const TIME_BONUS: f32 = 1.0;

const GRID_COLUMNS: usize = 4;
const GRID_TOP: f32 = 150.0;
const GRID_BUTTON_SIZE: f32 = 100.0;
const GRID_SPACING: f32 = 20.0;

const MENU_BUTTON_WIDTH: f32 = 100.0;
const MENU_BUTTON_HEIGHT: f32 = 40.0;

/// Outcome of a tick or click that the shell reacts to (sound cues, app quit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CorrectClick,
    WrongClick,
    TimeExpired,
    QuitRequested,
}

/// Owns the button grid, target color, score, countdown, and state machine.
///
/// All gameplay rules live here; the gpui shell forwards input and maps the
/// returned [`GameEvent`]s to side effects.
pub struct GameManager {
    pub buttons: Vec<Button>,
    pub target_color: PaletteColor,
    pub score: u32,
    pub time_left: f32,
    pub state: GameState,
    rng: StdRng,
}

impl GameManager {
    pub fn new() -> Self {
        let mut manager = Self {
            buttons: Vec::new(),
            target_color: PaletteColor::Red,
            score: 0,
            time_left: START_TIME,
            state: GameState::Menu,
            rng: StdRng::from_entropy(),
        };
        manager.reset();
        manager
    }

    /// Lays out the 4-column grid centered on the window and shuffles the
    /// palette onto it.
    fn initialize_buttons(&mut self) {
        self.buttons.clear();
        let columns = GRID_COLUMNS as f32;
        let start_x =
            (WINDOW_WIDTH - (GRID_BUTTON_SIZE * columns + GRID_SPACING * (columns - 1.0))) / 2.0;

        for index in 0..PaletteColor::ALL.len() {
            let column = (index % GRID_COLUMNS) as f32;
            let row = (index / GRID_COLUMNS) as f32;
            self.buttons.push(Button::new(
                start_x + column * (GRID_BUTTON_SIZE + GRID_SPACING),
                GRID_TOP + row * (GRID_BUTTON_SIZE + GRID_SPACING),
                GRID_BUTTON_SIZE,
                GRID_BUTTON_SIZE,
                PaletteColor::ALL[index],
            ));
        }
        self.shuffle_colors();
    }

    /// Assigns a random permutation of the palette to the buttons, so no color
    /// appears twice.
    fn shuffle_colors(&mut self) {
        let mut palette = PaletteColor::ALL;
        palette.shuffle(&mut self.rng);
        for (button, color) in self.buttons.iter_mut().zip(palette) {
            button.color = color;
        }
    }

    /// Picks a uniformly random button's color as the new target.
    fn choose_target(&mut self) {
        if let Some(button) = self.buttons.choose(&mut self.rng) {
            self.target_color = button.color;
        }
    }

    fn reset(&mut self) {
        self.score = 0;
        self.time_left = START_TIME;
        self.initialize_buttons();
        self.choose_target();
    }

    /// Menu → Playing; ignored on any other screen.
    pub fn start(&mut self) {
        if self.state == GameState::Menu {
            self.state = GameState::Playing;
            debug!("game started");
        }
    }

    pub fn restart(&mut self) {
        self.reset();
        self.state = GameState::Playing;
        debug!("game restarted");
    }

    pub fn back_to_menu(&mut self) {
        self.reset();
        self.state = GameState::Menu;
        debug!("returned to menu");
    }

    /// Advances the countdown by one frame's elapsed time.
    pub fn tick(&mut self, dt: f32) -> Option<GameEvent> {
        if self.state != GameState::Playing {
            return None;
        }
        self.time_left -= dt;
        if self.time_left <= 0.0 {
            self.time_left = 0.0;
            self.state = GameState::GameOver;
            info!("time expired, game over at score {}", self.score);
            return Some(GameEvent::TimeExpired);
        }
        None
    }

    /// Resolves a click on the current screen. All input dispatch goes through
    /// here, including the menu and game-over buttons.
    pub fn click(&mut self, x: f32, y: f32) -> Option<GameEvent> {
        match self.state {
            GameState::Menu => Self::menu_quit_button()
                .hit_test(x, y)
                .then_some(GameEvent::QuitRequested),
            GameState::Playing => {
                let clicked = self
                    .buttons
                    .iter()
                    .find(|button| button.hit_test(x, y))
                    .map(|button| button.color)?;

                if clicked == self.target_color {
                    self.score += 1;
                    self.time_left += TIME_BONUS;
                    self.shuffle_colors();
                    self.choose_target();
                    debug!("correct color clicked, score {}", self.score);
                    Some(GameEvent::CorrectClick)
                } else {
                    self.state = GameState::GameOver;
                    info!("wrong color clicked, game over at score {}", self.score);
                    Some(GameEvent::WrongClick)
                }
            }
            GameState::GameOver => {
                if Self::restart_button().hit_test(x, y) {
                    self.restart();
                    None
                } else if Self::back_to_menu_button().hit_test(x, y) {
                    self.back_to_menu();
                    None
                } else if Self::game_over_quit_button().hit_test(x, y) {
                    Some(GameEvent::QuitRequested)
                } else {
                    None
                }
            }
        }
    }

    pub fn menu_quit_button() -> Button {
        Button::labeled(
            WINDOW_WIDTH / 2.0 - MENU_BUTTON_WIDTH / 2.0,
            WINDOW_HEIGHT / 2.0 + 50.0,
            MENU_BUTTON_WIDTH,
            MENU_BUTTON_HEIGHT,
            PaletteColor::Red,
            "Quit",
        )
    }

    pub fn restart_button() -> Button {
        Button::labeled(
            WINDOW_WIDTH / 2.0 - 120.0,
            WINDOW_HEIGHT / 2.0 + 20.0,
            MENU_BUTTON_WIDTH,
            MENU_BUTTON_HEIGHT,
            PaletteColor::Green,
            "Restart",
        )
    }

    pub fn back_to_menu_button() -> Button {
        Button::labeled(
            WINDOW_WIDTH / 2.0 + 20.0,
            WINDOW_HEIGHT / 2.0 + 20.0,
            MENU_BUTTON_WIDTH,
            MENU_BUTTON_HEIGHT,
            PaletteColor::Blue,
            "Menu",
        )
    }

    pub fn game_over_quit_button() -> Button {
        Button::labeled(
            WINDOW_WIDTH / 2.0 - MENU_BUTTON_WIDTH / 2.0,
            WINDOW_HEIGHT / 2.0 + 80.0,
            MENU_BUTTON_WIDTH,
            MENU_BUTTON_HEIGHT,
            PaletteColor::Red,
            "Quit",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_manager() -> GameManager {
        let mut manager = GameManager::new();
        manager.start();
        manager
    }

    fn game_over_manager() -> GameManager {
        let mut manager = playing_manager();
        let (x, y) = center(&wrong_button(&manager));
        manager.click(x, y);
        assert_eq!(manager.state, GameState::GameOver);
        manager
    }

    fn center(button: &Button) -> (f32, f32) {
        (
            button.rect.x + button.rect.width / 2.0,
            button.rect.y + button.rect.height / 2.0,
        )
    }

    fn target_button(manager: &GameManager) -> Button {
        *manager
            .buttons
            .iter()
            .find(|button| button.color == manager.target_color)
            .expect("target color must be on some button")
    }

    fn wrong_button(manager: &GameManager) -> Button {
        *manager
            .buttons
            .iter()
            .find(|button| button.color != manager.target_color)
            .expect("eleven buttons never match the target")
    }

    #[test]
    fn test_new_starts_in_menu_with_full_grid() {
        let manager = GameManager::new();
        assert_eq!(manager.state, GameState::Menu);
        assert_eq!(manager.score, 0);
        assert_eq!(manager.time_left, START_TIME);
        assert_eq!(manager.buttons.len(), PaletteColor::ALL.len());
    }

    #[test]
    fn test_grid_is_centered_in_four_columns() {
        let manager = GameManager::new();
        let step = GRID_BUTTON_SIZE + GRID_SPACING;

        let first = manager.buttons[0].rect;
        assert_eq!((first.x, first.y), (170.0, GRID_TOP));
        assert_eq!((first.width, first.height), (GRID_BUTTON_SIZE, GRID_BUTTON_SIZE));

        // Last column of the first row, then the rows below it.
        assert_eq!(manager.buttons[3].rect.x, 170.0 + 3.0 * step);
        assert_eq!(manager.buttons[4].rect.y, GRID_TOP + step);
        let last = manager.buttons[11].rect;
        assert_eq!((last.x, last.y), (170.0 + 3.0 * step, GRID_TOP + 2.0 * step));
    }

    #[test]
    fn test_shuffle_assigns_every_color_exactly_once() {
        let mut manager = GameManager::new();
        for _ in 0..10 {
            let rects_before: Vec<_> = manager.buttons.iter().map(|b| b.rect).collect();
            manager.shuffle_colors();

            let mut colors: Vec<u32> = manager.buttons.iter().map(|b| b.color.rgb()).collect();
            colors.sort_unstable();
            colors.dedup();
            assert_eq!(colors.len(), manager.buttons.len());

            let rects_after: Vec<_> = manager.buttons.iter().map(|b| b.rect).collect();
            assert_eq!(rects_before, rects_after);
        }
    }

    #[test]
    fn test_target_color_is_always_on_some_button() {
        let mut manager = GameManager::new();
        for _ in 0..20 {
            manager.shuffle_colors();
            manager.choose_target();
            assert!(
                manager
                    .buttons
                    .iter()
                    .any(|button| button.color == manager.target_color)
            );
        }
    }

    #[test]
    fn test_correct_click_scores_and_extends_time() {
        let mut manager = playing_manager();
        let (x, y) = center(&target_button(&manager));

        assert_eq!(manager.click(x, y), Some(GameEvent::CorrectClick));
        assert_eq!(manager.score, 1);
        assert_eq!(manager.time_left, START_TIME + TIME_BONUS);
        assert_eq!(manager.state, GameState::Playing);
        // The reshuffle must keep the invariant intact.
        target_button(&manager);
    }

    #[test]
    fn test_correct_clicks_stack_the_time_bonus() {
        let mut manager = playing_manager();
        for expected_score in 1u32..=3 {
            let (x, y) = center(&target_button(&manager));
            assert_eq!(manager.click(x, y), Some(GameEvent::CorrectClick));
            assert_eq!(manager.score, expected_score);
        }
        assert_eq!(manager.time_left, START_TIME + 3.0 * TIME_BONUS);
    }

    #[test]
    fn test_wrong_click_ends_the_game() {
        let mut manager = playing_manager();
        let (x, y) = center(&wrong_button(&manager));

        assert_eq!(manager.click(x, y), Some(GameEvent::WrongClick));
        assert_eq!(manager.state, GameState::GameOver);
        assert_eq!(manager.score, 0);
    }

    #[test]
    fn test_click_outside_every_button_is_ignored() {
        let mut manager = playing_manager();
        assert_eq!(manager.click(5.0, 5.0), None);
        assert_eq!(manager.state, GameState::Playing);
        assert_eq!(manager.score, 0);
    }

    #[test]
    fn test_tick_counts_down_and_expires() {
        let mut manager = playing_manager();
        assert_eq!(manager.tick(1.0), None);
        assert_eq!(manager.time_left, START_TIME - 1.0);

        assert_eq!(manager.tick(START_TIME), Some(GameEvent::TimeExpired));
        assert_eq!(manager.state, GameState::GameOver);
        assert_eq!(manager.time_left, 0.0);
    }

    #[test]
    fn test_tick_outside_playing_is_inert() {
        let mut manager = GameManager::new();
        assert_eq!(manager.tick(5.0), None);
        assert_eq!(manager.time_left, START_TIME);
        assert_eq!(manager.state, GameState::Menu);

        let mut over = game_over_manager();
        assert_eq!(over.tick(5.0), None);
        assert_eq!(over.state, GameState::GameOver);
    }

    #[test]
    fn test_start_only_leaves_the_menu() {
        let mut manager = GameManager::new();
        manager.start();
        assert_eq!(manager.state, GameState::Playing);
        manager.start();
        assert_eq!(manager.state, GameState::Playing);

        let mut over = game_over_manager();
        over.start();
        assert_eq!(over.state, GameState::GameOver);
    }

    #[test]
    fn test_restart_resets_score_and_clock() {
        let mut manager = playing_manager();
        let (x, y) = center(&target_button(&manager));
        manager.click(x, y);
        let (x, y) = center(&wrong_button(&manager));
        manager.click(x, y);
        assert_eq!(manager.state, GameState::GameOver);

        manager.restart();
        assert_eq!(manager.state, GameState::Playing);
        assert_eq!(manager.score, 0);
        assert_eq!(manager.time_left, START_TIME);
        target_button(&manager);
    }

    #[test]
    fn test_back_to_menu_resets_identically() {
        let mut manager = game_over_manager();
        manager.back_to_menu();
        assert_eq!(manager.state, GameState::Menu);
        assert_eq!(manager.score, 0);
        assert_eq!(manager.time_left, START_TIME);
    }

    #[test]
    fn test_menu_quit_button_requests_quit() {
        let mut manager = GameManager::new();
        let (x, y) = center(&GameManager::menu_quit_button());
        assert_eq!(manager.click(x, y), Some(GameEvent::QuitRequested));
        assert_eq!(manager.state, GameState::Menu);
    }

    #[test]
    fn test_menu_ignores_grid_positions() {
        // The grid is only clickable while playing; the same point on the menu
        // screen must do nothing.
        let mut manager = GameManager::new();
        let (x, y) = center(&manager.buttons[0]);
        assert_eq!(manager.click(x, y), None);
        assert_eq!(manager.state, GameState::Menu);
        assert_eq!(manager.score, 0);
    }

    #[test]
    fn test_game_over_buttons_dispatch() {
        let mut manager = game_over_manager();
        let (x, y) = center(&GameManager::restart_button());
        assert_eq!(manager.click(x, y), None);
        assert_eq!(manager.state, GameState::Playing);

        let mut manager = game_over_manager();
        let (x, y) = center(&GameManager::back_to_menu_button());
        assert_eq!(manager.click(x, y), None);
        assert_eq!(manager.state, GameState::Menu);

        let mut manager = game_over_manager();
        let (x, y) = center(&GameManager::game_over_quit_button());
        assert_eq!(manager.click(x, y), Some(GameEvent::QuitRequested));
        assert_eq!(manager.state, GameState::GameOver);

        let mut manager = game_over_manager();
        assert_eq!(manager.click(5.0, 5.0), None);
        assert_eq!(manager.state, GameState::GameOver);
    }
}
