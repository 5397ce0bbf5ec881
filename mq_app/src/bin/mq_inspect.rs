use mq_app::cli;
use mq_app::config_loader;
use mq_app::errors::AppError;
use mq_app::generator;
use mq_app::generator::EntrySummary;
use tikv_jemallocator::Jemalloc;
use tracing::debug;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

const DEFAULT_CONFIG_PATH: &str = "config/mq_defaultgen.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let name = cli::get_optional_arg(1).ok_or("usage: mq_inspect <NAME> [config]")?;
    let config_path = cli::get_arg(2, DEFAULT_CONFIG_PATH);
    let loaded = config_loader::load_generator_config_or_default(&config_path);
    let config = &loaded.config;

    let _guard = mq_app::tracing_setup::init("mq_inspect", &config.log_dir, config.level()?);
    loaded.log_outcome();

    let name = cli::normalise_default_name(&name);
    let entry = mq_default::find(&name).ok_or_else(|| AppError::UnknownDefault(name.clone()))?;
    debug!(name = entry.name, size = entry.size(), "found default");

    println!("{}", serde_json::to_string_pretty(&EntrySummary::from(&entry)).map_err(AppError::from)?);
    print!("{}", generator::hex_dump(&entry.bytes));
    Ok(())
}
