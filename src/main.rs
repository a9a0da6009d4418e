use anyhow::Context;
use clap::Parser;

use product_dashboard::cli::Cli;
use product_dashboard::config::Config;
use product_dashboard::logging::init_tracing;
use product_dashboard::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = ui::runtime::run(config, runtime.handle());
    runtime.shutdown_timeout(std::time::Duration::from_millis(500));
    result
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config_path();
    let mut config = Config::load_from(&path)?;
    cli.apply(&mut config);
    config.validate()?;
    tracing::info!(
        path = %path.display(),
        base_url = %config.api.base_url,
        page_size = config.api.page_size,
        "Config loaded"
    );
    Ok(config)
}
