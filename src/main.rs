mod app;
mod audio;
mod game;

fn main() {
    // Use RUST_LOG to raise verbosity, e.g. RUST_LOG=debug.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    app::run();
}
