use clap::Parser;
use tracing::debug;

use pmt::application::{Application, ApplicationError, RuntimeConfig};
use pmt::cli::CommonArgs;

/// Appends the attribution banner to every source file of the project.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

#[snafu::report]
fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    let config = RuntimeConfig::from(cli_args.common);
    config.log_level.setup_tracing();
    debug!("Runtime config: {config:?}");

    Application::stamp_footers(&config, &mut std::io::stdout().lock())?;

    Ok(())
}
