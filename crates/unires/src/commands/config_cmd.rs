//! Config subcommand handlers.

use unires_config::Config;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => output::print_output(&config::config_path(global).display().to_string()),

        ConfigCommand::Show => output::print_output(cfg.redacted().to_toml()?.trim_end()),

        ConfigCommand::SetPassword => {
            let username = cfg
                .username
                .clone()
                .filter(|u| !u.is_empty())
                .ok_or_else(|| CliError::NoCredentials {
                    field: "username".into(),
                })?;

            let password = rpassword::prompt_password(format!("Password for {username}: "))?;
            if password.is_empty() {
                return Err(CliError::Validation {
                    field: "password".into(),
                    reason: "password cannot be empty".into(),
                });
            }

            unires_config::store_password(&username, &password)?;
            eprintln!("✓ Password for '{username}' stored in system keyring");
            Ok(())
        }
    }
}
