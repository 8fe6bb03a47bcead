use clap::Parser;

use ecoroteiro::cli::{self, Cli};
use ecoroteiro::config::Config;
use ecoroteiro::logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::default();
    logger::init(&config.log_file);
    log::info!("🚀 EcoRoteiro iniciado");
    log::info!("📁 Configuração carregada (backend: {})", config.api_base_url);

    // Runtime tokio para as chamadas async
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(cli::run(cli, config))
}
