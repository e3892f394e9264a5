//! The default command: fetch, reconcile, print.

use unires_config::Config;
use unires_core::Fetcher;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn handle(cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let controller = unires_config::controller_config(cfg)?;
    let fetcher = Fetcher::new(&controller)?;

    let reservations = fetcher
        .reservations(cfg.include_active())
        .await
        .map_err(|e| CliError::from_fetch(e, fetcher.base_url()))?;

    let rendered = output::render_reservations(global.output, &reservations)?;
    output::print_output(&rendered)
}
