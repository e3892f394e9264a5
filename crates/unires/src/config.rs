//! Effective configuration: the config file with flag and environment
//! overrides applied on top.

use std::path::PathBuf;

use unires_config::Config;
use unires_core::ControllerPlatform;

use crate::cli::{GlobalOpts, Platform};
use crate::error::CliError;

impl From<Platform> for ControllerPlatform {
    fn from(p: Platform) -> Self {
        match p {
            Platform::Classic => Self::ClassicController,
            Platform::UnifiOs => Self::UnifiOs,
        }
    }
}

/// The config file in use: `--config` / `UNIRES_CONFIG`, else the platform default.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(unires_config::config_path)
}

/// Load the config file and apply flag/environment overrides.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = unires_config::load_config(&config_path(global))?;
    apply_overrides(&mut cfg, global);
    Ok(cfg)
}

/// Values given on the command line (or through their env vars) replace
/// file values, booleans included.
pub fn apply_overrides(cfg: &mut Config, global: &GlobalOpts) {
    if let Some(ref url) = global.base_url {
        cfg.base_url.clone_from(url);
    }
    if let Some(ref user) = global.username {
        cfg.username = Some(user.clone());
    }
    if let Some(ref pw) = global.password {
        cfg.password = Some(pw.clone());
    }
    if let Some(ref site) = global.site {
        cfg.site.clone_from(site);
    }
    if let Some(platform) = global.platform {
        cfg.platform = platform.into();
    }
    if let Some(ref ca) = global.ca_cert {
        cfg.ca_cert = Some(ca.clone());
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout = timeout;
    }
    if let Some(ref level) = global.log_level {
        cfg.log_level.clone_from(level);
    }
    if let Some(fixed_only) = global.fixed_only {
        cfg.fixed_only = fixed_only;
    }
    if let Some(insecure) = global.insecure {
        cfg.insecure = insecure;
    }
}
