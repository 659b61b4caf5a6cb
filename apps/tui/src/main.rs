use clap::Parser;
use color_eyre::Result;
use log::info;
use movement_tui::cli::CliArgs;
use movement_tui::config::init_app_config;
use movement_tui::{event, logging, terminal, App};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config();
    let headless = args.headless || !is_terminal();
    logging::init(&config, headless)?;
    info!("Using forecast data at {}", config.data_path.display());

    let mut app = App::new(&config);

    if headless {
        return event::run_headless(&app, args.position, args.json).await;
    }

    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
