use std::io::stdout;

use clap::Parser;
use color_eyre::Result;
use hoststat::cli::Cli;
use hoststat::config::{load_config, load_config_from_path};
use hoststat::logging;
use hoststat::run::Runner;
use hoststat::system::collector::Collector;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not failures.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    logging::init()?;

    let file_config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    let config = cli.run_config(&file_config)?;
    tracing::debug!(?config, "starting run");

    let mut collector = Collector::new();
    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler: never interrupt.
            std::future::pending::<()>().await;
        }
    };

    let summary = Runner::new(config)
        .run(&mut collector, &mut stdout(), shutdown)
        .await?;
    tracing::debug!(?summary, "run finished");
    Ok(())
}
