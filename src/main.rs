use anyhow::Context;
use cheesy_advice::advice::{AdviceSource, FileAdviceSource, HttpAdviceSource, HttpSourceOptions};
use cheesy_advice::cli::Cli;
use cheesy_advice::config::{Config, SourceKind};
use cheesy_advice::controller::{AdviceController, ControllerContent};
use cheesy_advice::logging::{default_log_path, init_tracing};
use cheesy_advice::random::StdRandom;
use cheesy_advice::ui;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_tracing(&log_path)?;
    tracing::info!(source = ?config.source.kind, startup = ?config.behavior.startup, "Starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    // Collection sampling uses its own stream so joke draws stay reproducible.
    let sampler = Box::new(StdRandom::from_seed_option(cli.seed.map(|s| s.wrapping_add(1))));

    match config.source.kind {
        SourceKind::Http => {
            let options = HttpSourceOptions {
                connect_timeout: Duration::from_secs(config.source.connect_timeout_seconds),
                request_timeout: config.source.request_timeout_seconds.map(Duration::from_secs),
            };
            let source = HttpAdviceSource::new(config.source.url.clone(), options)?
                .with_random(sampler);
            run_with(source, &cli, &config, runtime)
        }
        SourceKind::File => {
            let source = FileAdviceSource::new(config.source.path.clone()).with_random(sampler);
            run_with(source, &cli, &config, runtime)
        }
    }
}

fn run_with<S: AdviceSource>(
    source: S,
    cli: &Cli,
    config: &Config,
    runtime: Runtime,
) -> anyhow::Result<()> {
    let content = ControllerContent::from(config);
    tracing::debug!(
        jokes = content.jokes.jokes().len(),
        joke_probability = content.jokes.probability(),
        rules = content.rules.len(),
        "Controller content loaded"
    );
    let controller = AdviceController::new(
        Arc::new(source),
        StdRandom::from_seed_option(cli.seed),
        content,
    );

    if cli.once {
        let text = runtime.block_on(ui::run_once(controller));
        println!("{}", text);
        return Ok(());
    }

    ui::run(controller, runtime.handle().clone()).context("Terminal UI failed")?;
    Ok(())
}
