use std::path::PathBuf;
use synthseq::engine::config as core_config;

pub struct AppConfig {
    pub output_path: PathBuf,
    pub core_config: core_config::GenerationConfig,
}
