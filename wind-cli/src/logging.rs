/// Diagnostics go to stderr so stdout only carries the report.
pub fn init_tracing_subscriber() {
    use std::io::IsTerminal;
    use tracing_subscriber::{
        filter::{EnvFilter, LevelFilter},
        fmt,
        prelude::*,
        registry,
    };

    let output = std::io::stderr;

    let fmt_layer = fmt::layer().with_writer(output).with_ansi(output().is_terminal());

    let env_layer =
        EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).from_env_lossy();

    registry().with(fmt_layer).with(env_layer).init();
}
