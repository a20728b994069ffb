//! CLI configuration — thin wrapper around `shc_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--address, --port, --api-version, --validate-cert).

use shc_api::EndpointConfig;
use shc_config::{Config, Defaults, Profile, profile_to_endpoint};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use shc_config::{config_path, load_config_or_default, render_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build the `EndpointConfig` for this invocation.
///
/// Precedence: flag/env > named profile > `[defaults]`. An explicitly named
/// profile must exist; the implicit default profile may be absent as long
/// as `--address` is given.
pub fn resolve_endpoint(global: &GlobalOpts, config: &Config) -> Result<EndpointConfig, CliError> {
    let name = active_profile_name(global, config);

    let profile = if let Some(profile) = config.profiles.get(&name) {
        profile.clone()
    } else if global.profile.is_some() {
        // Named explicitly, so it has to exist.
        config.profile(&name)?.clone()
    } else {
        let Some(address) = global.address.clone() else {
            return Err(CliError::NoConfig {
                path: config_path().display().to_string(),
            });
        };
        Profile {
            address,
            port: None,
            api_version: None,
            validate_certificate: None,
            ca_cert: None,
        }
    };

    let merged = apply_overrides(profile, global);
    Ok(profile_to_endpoint(&merged, &config.defaults)?)
}

fn apply_overrides(mut profile: Profile, global: &GlobalOpts) -> Profile {
    if let Some(ref address) = global.address {
        profile.address.clone_from(address);
    }
    if global.port.is_some() {
        profile.port = global.port;
    }
    if global.api_version.is_some() {
        profile.api_version.clone_from(&global.api_version);
    }
    if global.validate_cert {
        profile.validate_certificate = Some(true);
    }
    profile
}

/// Output format from the flag, falling back to `[defaults] output`.
pub fn output_format(global: &GlobalOpts, defaults: &Defaults) -> OutputFormat {
    use clap::ValueEnum;

    global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&defaults.output, true).unwrap_or(OutputFormat::Table)
    })
}
