//! Steps shared by the subcommands: config loading, reading, optional
//! regularisation and the estimation cascade.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use evapo_calendar::Cadence;
use evapo_io::read_observations;
use evapo_params::{DerivedParams, Field, Observations, QualityRecord, estimate};
use evapo_regularize::{RegularizeConfig, regularize};

use crate::config::EvapoConfig;
use crate::convert;

/// Output of the cascade plus the cadence it ran at.
pub struct Estimated {
    pub params: DerivedParams,
    pub quality: QualityRecord,
    pub cadence: Cadence,
}

/// Read and parse the project TOML.
pub fn load_config(path: &Path) -> Result<EvapoConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Resolve a path from a CLI override or the config, naming the key to
/// set when neither is present.
pub fn resolve_path(
    cli: Option<PathBuf>,
    config: Option<&PathBuf>,
    key: &str,
    flag: &str,
) -> Result<PathBuf> {
    cli.or_else(|| config.cloned())
        .ok_or_else(|| anyhow::anyhow!("no {key} path: set [io].{key} in config or use {flag}"))
}

/// Read observations, regularise them if configured, and run the cascade.
pub fn estimate_from(config: &EvapoConfig, input: &Path) -> Result<Estimated> {
    let cadence = convert::parse_cadence(&config.time.cadence)?;
    let site = convert::build_site(&config.site)?;
    let reader_cfg = convert::build_reader_config(&config.io)?;

    info!(path = %input.display(), "reading observations");
    let mut obs = read_observations(input, &reader_cfg)
        .with_context(|| format!("failed to read observations: {}", input.display()))?;

    if let Some(reg_cfg) = convert::build_regularize_config(&config.time)? {
        obs = regularize_observations(&obs, &reg_cfg).context("failed to regularise input")?;
    }

    if let Some(inferred) = obs.index().inferred_cadence()
        && inferred != cadence
    {
        warn!(
            configured = %cadence,
            inferred = %inferred,
            "index spacing does not match the configured cadence"
        );
    }

    let (params, quality) = estimate(&obs, &site, cadence).context("estimation failed")?;
    Ok(Estimated {
        params,
        quality,
        cadence,
    })
}

/// Put every observed column on one regular grid.
pub fn regularize_observations(
    obs: &Observations,
    config: &RegularizeConfig,
) -> Result<Observations> {
    let fields: Vec<Field> = obs.fields().collect();
    let columns: Vec<&[f64]> = fields.iter().filter_map(|f| obs.column(*f)).collect();

    let reg = regularize(obs.index(), &columns, config)?;
    info!(
        n_in = obs.len(),
        n_out = reg.len(),
        step = %reg.step(),
        n_filled = reg.n_filled(),
        "input regularised"
    );

    let (index, values) = reg.into_parts();
    let mut out = Observations::new(index);
    for (field, column) in fields.into_iter().zip(values) {
        out.insert(field, column)?;
    }
    Ok(out)
}
