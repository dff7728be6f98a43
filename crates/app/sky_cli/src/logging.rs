pub mod formats;

use flexi_logger::Logger;

use crate::Error;

/// Start logging to stderr. `RUST_LOG` wins over the default level.
pub fn init(verbose: bool) -> Result<(), Error> {
    let level = if verbose { "debug" } else { "warn" };

    Logger::try_with_env_or_str(level)?
        .format(formats::cli_format)
        .log_to_stderr()
        .start()?;

    Ok(())
}
