use std::io;
use std::path::PathBuf;

use anyhow::Context;
use log::info;

use life_demo::{
    DemoConfig,
    application,
    rendering::{TerminalSink, TextRenderer},
};

/// Terminal demo: seed a board and print generations until stopped.
/// Optional first argument is a JSON config file.
fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with frames on stdout.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DemoConfig::load_or_default(config_path.as_deref())
        .context("failed to load configuration")?;
    info!("configuration: {:?}", config);

    let mut simulation =
        application::simulation_from_config(&config).context("failed to seed the board")?;

    let stdout = io::stdout().lock();
    let mut sink = TerminalSink::new(stdout, TextRenderer::from_config(&config));
    simulation.run(&mut sink).context("simulation aborted")?;

    Ok(())
}
