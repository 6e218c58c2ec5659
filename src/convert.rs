//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use evapo_calendar::Cadence;
use evapo_io::{Compression, ReaderConfig, WriterConfig};
use evapo_methods::{EtBounds, InterpConfig};
use evapo_params::Site;
use evapo_regularize::{InterpMethod, RegularizeConfig};

/// Parses a cadence name (`"days"`, `"hours"` and their aliases).
pub fn parse_cadence(s: &str) -> Result<Cadence> {
    s.parse()
        .with_context(|| format!("invalid [time].cadence {s:?}"))
}

/// Parses an interpolation method name.
pub fn parse_interp_method(s: &str) -> Result<InterpMethod> {
    s.parse()
        .with_context(|| format!("invalid interpolation method {s:?}"))
}

/// Parses a grid step such as `"1d"`, `"1h"` or `"30min"`.
pub fn parse_step(s: &str) -> Result<chrono::TimeDelta> {
    evapo_regularize::parse_step(s).with_context(|| format!("invalid [time].frequency {s:?}"))
}

/// Parses a compression algorithm name string into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => bail!("unknown compression: {other:?}"),
    }
}

/// Parses a single-character delimiter; `"\t"` and `"tab"` mean a tab.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s {
        "\t" | "\\t" | "tab" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => bail!("delimiter must be a single ASCII character, got {s:?}"),
        },
    }
}

/// Builds a validated [`Site`] from the TOML site section.
pub fn build_site(site: &SiteToml) -> Result<Site> {
    let s = Site::new()
        .with_elevation(site.elevation)
        .with_latitude(site.latitude)
        .with_longitude(site.longitude)
        .with_tz_longitude(site.tz_longitude)
        .with_wind_height(site.wind_height)
        .with_k_rs(site.k_rs)
        .with_a_s(site.a_s)
        .with_b_s(site.b_s)
        .with_albedo(site.albedo);
    s.validate().context("invalid [site] section")?;
    Ok(s)
}

/// Builds validated [`EtBounds`] from the TOML bounds section.
pub fn build_bounds(bounds: &BoundsToml) -> Result<EtBounds> {
    let b = EtBounds::new()
        .with_min(bounds.min_eto)
        .with_max(bounds.max_eto);
    b.validate().context("invalid [bounds] section")?;
    Ok(b)
}

/// Builds the optional ET gap-fill config; `None` when no method is set.
pub fn build_interp_config(interp: &InterpToml) -> Result<Option<InterpConfig>> {
    let Some(ref name) = interp.method else {
        return Ok(None);
    };
    let cfg = InterpConfig::new(parse_interp_method(name)?).with_max_gap(interp.max_gap);
    cfg.validate().context("invalid [interp] section")?;
    Ok(Some(cfg))
}

/// Builds the input regularisation config; `None` unless
/// `[time].regularize` is set.
pub fn build_regularize_config(time: &TimeToml) -> Result<Option<RegularizeConfig>> {
    if !time.regularize {
        return Ok(None);
    }
    let step = time.frequency.as_deref().map(parse_step).transpose()?;
    let method = time
        .method
        .as_deref()
        .map(parse_interp_method)
        .transpose()?;
    let cfg = RegularizeConfig::new()
        .with_step(step)
        .with_method(method)
        .with_max_gap(time.max_gap);
    cfg.validate().context("invalid [time] section")?;
    Ok(Some(cfg))
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoConfig) -> Result<ReaderConfig> {
    let cfg = ReaderConfig::default()
        .with_date_column(&io.date_column)
        .with_delimiter(parse_delimiter(&io.delimiter)?);
    cfg.validate().context("invalid [io] section")?;
    Ok(cfg)
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoConfig) -> Result<WriterConfig> {
    let compression = parse_compression(&io.compression)?;
    let cfg = WriterConfig::default()
        .with_compression(compression)
        .with_row_group_size(io.row_group_size)
        .with_delimiter(parse_delimiter(&io.delimiter)?)
        .with_date_column(&io.date_column);
    cfg.validate().context("invalid [io] section")?;
    Ok(cfg)
}
