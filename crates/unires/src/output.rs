//! Output formatting: plain, JSON, YAML, table.
//!
//! `plain` is the hosts-file form consumed by local resolvers: one
//! `<ip> <name>` line per reservation. The structured formats serialize the
//! same list via serde; `table` uses `tabled`.

use std::io::{self, Write};

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use unires_core::Reservation;

use crate::cli::OutputFormat;
use crate::error::CliError;

#[derive(Tabled)]
struct ReservationRow<'a> {
    #[tabled(rename = "IP")]
    ip: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
}

/// Render the reservation list in the chosen format.
pub fn render_reservations(
    format: OutputFormat,
    reservations: &[Reservation],
) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Plain => reservations
            .iter()
            .map(|r| format!("{} {}", r.ip, r.name))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(reservations)?,
        OutputFormat::JsonCompact => serde_json::to_string(reservations)?,
        OutputFormat::Yaml => render_yaml(reservations)?,
        OutputFormat::Table => {
            let rows = reservations.iter().map(|r| ReservationRow {
                ip: &r.ip,
                name: &r.name,
            });
            Table::new(rows).with(Style::rounded()).to_string()
        }
    })
}

fn render_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    let yaml = serde_yaml::to_string(data)?;
    Ok(yaml.trim_end().to_owned())
}

/// Write rendered output to stdout with a trailing newline. Empty output
/// prints nothing at all.
pub fn print_output(output: &str) -> Result<(), CliError> {
    if output.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    stdout.flush()?;
    Ok(())
}
