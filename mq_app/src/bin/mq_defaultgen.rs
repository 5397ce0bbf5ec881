use std::path::Path;

use mq_app::cli;
use mq_app::config_loader;
use mq_app::generator;
use tikv_jemallocator::Jemalloc;
use tracing::info;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

const DEFAULT_CONFIG_PATH: &str = "config/mq_defaultgen.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = cli::get_arg(1, DEFAULT_CONFIG_PATH);
    let loaded = config_loader::load_generator_config_or_default(&config_path);
    let config = &loaded.config;

    // Keep guard alive until the output is flushed
    let _guard = mq_app::tracing_setup::init_with_stdout("mq_defaultgen", &config.log_dir, config.level()?);
    loaded.log_outcome();
    info!("Generating defaults for MQ client level {}", mq_default::MQ_CLIENT_LEVEL);

    let entries = mq_default::entries();
    let contents = generator::render(&entries, config.format)?;
    generator::write_output(Path::new(&config.output_path), &contents)?;

    info!("Generated {} defaults as {:?} into {}", entries.len(), config.format, config.output_path);
    Ok(())
}
