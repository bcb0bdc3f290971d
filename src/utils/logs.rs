use crate::core::domain::Configuration;

pub fn setup_tracing(config: &Configuration) {
    tracing_subscriber::fmt()
        .with_max_level(config.max_level())
        // disable printing the name of the module in every log line.
        .with_target(false)
        // plain json lines, no color codes.
        .with_ansi(false)
        .json()
        .init();
}
