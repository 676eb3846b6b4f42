use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use std::path::PathBuf;
use synthseq::engine::config as core_config;
use tracing::debug;

pub fn build_config(args: &GenerateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let file_config = apply_set_values(file_config, &args.set_values)?;
    debug!("Merged file configuration: {:?}", file_config);

    let protein_length = args
        .protein_length
        .or(file_config.protein_length)
        .unwrap_or(defaults.protein_length);
    let n_bins = args
        .n_bins
        .or(file_config.n_bins)
        .unwrap_or(defaults.n_bins);
    let seed = args.seed.or(file_config.seed);
    let output_path = args
        .output
        .clone()
        .or(file_config.output_path)
        .unwrap_or(defaults.output_path);

    let core_config = core_config::GenerationConfigBuilder::new()
        .protein_length(protein_length)
        .n_bins(n_bins)
        .seed(seed)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        output_path,
        core_config,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "protein-length" | "protein_length" => {
                config.protein_length = Some(parse_integer(key, value_str)?);
            }
            "n-bins" | "n_bins" => {
                config.n_bins = Some(parse_integer(key, value_str)?);
            }
            "seed" => {
                config.seed = Some(parse_integer(key, value_str)?);
            }
            "output-path" | "output_path" => {
                config.output_path = Some(PathBuf::from(value_str));
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

fn parse_integer<T: std::str::FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
    })
}
