use gpui::{
    App, Context, Div, FocusHandle, Focusable, MouseButton, MouseDownEvent, Render, Window, div,
    prelude::*, px, rgb,
};
use tracing::warn;

use crate::audio::SoundBank;

use super::{Button, GameEvent, GameManager, GameState, PaletteColor, StartGame};

const BACKGROUND_COLOR: u32 = 0xf5f5f5;
const TEXT_COLOR: u32 = 0x000000;

/// The window entity: wraps the [`GameManager`] and turns its events into
/// sounds, re-renders, and app control.
pub struct ColorsGame {
    manager: GameManager,
    audio: Option<SoundBank>,
    focus_handle: FocusHandle,
}

impl ColorsGame {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        let audio = match SoundBank::new() {
            Ok(bank) => Some(bank),
            Err(err) => {
                warn!("audio unavailable, continuing without sound: {}", err);
                None
            }
        };

        Self {
            manager: GameManager::new(),
            audio,
            focus_handle,
        }
    }

    /// Driven by the frame loop at ~60 Hz.
    pub fn frame(&mut self, dt: f32, cx: &mut Context<Self>) {
        if self.manager.state != GameState::Playing {
            return;
        }
        match self.manager.tick(dt) {
            Some(event) => self.apply(event, cx),
            // No transition, but the countdown text changed.
            None => cx.notify(),
        }
    }

    fn handle_mouse_down(&mut self, event: &MouseDownEvent, cx: &mut Context<Self>) {
        let position = event.position;
        match self.manager.click(f32::from(position.x), f32::from(position.y)) {
            Some(event) => self.apply(event, cx),
            None => cx.notify(),
        }
    }

    fn handle_start(&mut self, cx: &mut Context<Self>) {
        self.manager.start();
        cx.notify();
    }

    fn apply(&mut self, event: GameEvent, cx: &mut Context<Self>) {
        match event {
            GameEvent::CorrectClick => {
                if let Some(audio) = &self.audio {
                    audio.play_success();
                }
            }
            GameEvent::WrongClick | GameEvent::TimeExpired => {
                if let Some(audio) = &self.audio {
                    audio.play_failure();
                }
            }
            GameEvent::QuitRequested => {
                cx.quit();
                return;
            }
        }
        cx.notify();
    }

    fn menu_screen(&self) -> Div {
        div()
            .size_full()
            .relative()
            .child(centered_row(200.0).text_3xl().child("Colors"))
            .child(centered_row(270.0).text_xl().child("Press SPACE to start"))
            .child(button_el(&GameManager::menu_quit_button()))
    }

    fn playing_screen(&self) -> Div {
        div()
            .size_full()
            .relative()
            .children(self.manager.buttons.iter().map(button_el))
            .child(
                div()
                    .absolute()
                    .left(px(10.))
                    .top(px(10.))
                    .text_xl()
                    .child(format!("Score: {}", self.manager.score)),
            )
            .child(
                div()
                    .absolute()
                    .left(px(10.))
                    .top(px(40.))
                    .text_xl()
                    .child(format!("Time: {:.1}", self.manager.time_left)),
            )
            .child(
                div()
                    .absolute()
                    .left(px(10.))
                    .top(px(70.))
                    .text_xl()
                    .child("Click this color:"),
            )
            .child(
                div()
                    .absolute()
                    .left(px(200.))
                    .top(px(70.))
                    .w(px(30.))
                    .h(px(30.))
                    .bg(rgb(self.manager.target_color.rgb())),
            )
    }

    fn game_over_screen(&self) -> Div {
        div()
            .size_full()
            .relative()
            .child(
                centered_row(200.0)
                    .text_3xl()
                    .text_color(rgb(PaletteColor::Red.rgb()))
                    .child("Game over!"),
            )
            .child(
                centered_row(250.0)
                    .text_2xl()
                    .child(format!("Final score: {}", self.manager.score)),
            )
            .child(button_el(&GameManager::restart_button()))
            .child(button_el(&GameManager::back_to_menu_button()))
            .child(button_el(&GameManager::game_over_quit_button()))
    }
}

impl Render for ColorsGame {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let screen = match self.manager.state {
            GameState::Menu => self.menu_screen(),
            GameState::Playing => self.playing_screen(),
            GameState::GameOver => self.game_over_screen(),
        };

        div()
            .size_full()
            .relative()
            .bg(rgb(BACKGROUND_COLOR))
            .text_color(rgb(TEXT_COLOR))
            .track_focus(&self.focus_handle(cx))
            .key_context("gpui-colors")
            .on_action(cx.listener(|this, _: &StartGame, _, cx| this.handle_start(cx)))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, event: &MouseDownEvent, _, cx| this.handle_mouse_down(event, cx)),
            )
            .child(screen)
    }
}

impl Focusable for ColorsGame {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

fn button_el(button: &Button) -> Div {
    div()
        .absolute()
        .left(px(button.rect.x))
        .top(px(button.rect.y))
        .w(px(button.rect.width))
        .h(px(button.rect.height))
        .bg(rgb(button.color.rgb()))
        .when_some(button.label, |el, label| {
            el.flex()
                .items_center()
                .justify_center()
                .text_xl()
                .text_color(rgb(TEXT_COLOR))
                .child(label)
        })
}

fn centered_row(y: f32) -> Div {
    div()
        .absolute()
        .top(px(y))
        .left(px(0.))
        .right(px(0.))
        .flex()
        .justify_center()
}
