use std::io::IsTerminal;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use region_selector::cli::Cli;
use region_selector::config::Config;
use region_selector::logging::init_tracing;
use region_selector::ui::{self, App};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    cli.apply_overrides(&mut config.defaults);
    let initial = config
        .defaults
        .resolve()
        .context("resolving default settings")?;

    // The UI draws on stderr so stdout stays free for `--print`.
    if !std::io::stderr().is_terminal() {
        bail!("stderr is not a terminal");
    }

    info!(
        country = %initial.country.code,
        currency = %initial.currency,
        language = %initial.language,
        "starting"
    );

    let mut app = App::new(initial);
    ui::run(&mut app, Duration::from_millis(config.ui.tick_rate_ms))
        .context("terminal UI failed")?;

    if cli.print {
        println!("{}", serde_json::to_string_pretty(app.settings())?);
    }
    Ok(())
}
