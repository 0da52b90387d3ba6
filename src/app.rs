use std::time::{Duration, Instant};

use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, Timer, TitlebarOptions,
    WindowBounds, WindowOptions, px, size,
};

use crate::game::{ColorsGame, QuitGame, StartGame, WINDOW_HEIGHT, WINDOW_WIDTH};

const FRAME_MS: u64 = 16;

pub fn run() {
    Application::new().run(|cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("space", StartGame, None),
            KeyBinding::new("escape", QuitGame, None),
        ]);

        let bounds = Bounds::centered(None, size(px(WINDOW_WIDTH), px(WINDOW_HEIGHT)), cx);
        let window = cx
            .open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        title: Some("Colors".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_, cx| cx.new(ColorsGame::new),
            )
            .unwrap();

        let game = window
            .update(cx, |view: &mut ColorsGame, window, cx| {
                window.focus(&view.focus_handle(cx));
                cx.activate(true);
                cx.entity()
            })
            .unwrap();

        spawn_frame_loop(game, cx);
        cx.on_action(|_: &QuitGame, cx| cx.quit());
        cx.activate(true);
    });
}

fn spawn_frame_loop(game: gpui::Entity<ColorsGame>, cx: &mut App) {
    cx.spawn({
        async move |cx| {
            let mut last = Instant::now();
            loop {
                Timer::after(Duration::from_millis(FRAME_MS)).await;
                let now = Instant::now();
                let dt = (now - last).as_secs_f32();
                last = now;

                if game.update(cx, |game, cx| game.frame(dt, cx)).is_err() {
                    break;
                }
            }
        }
    })
    .detach();
}
