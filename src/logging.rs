//! Diagnostics setup shared by the binaries

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install a stderr subscriber so stdout carries only results
pub fn init(level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
