//! Inicialização do logging.
//! Grava em arquivo (padrão logs/ecoroteiro.log) para não poluir o terminal do chat.

use std::io::Write;
use std::path::Path;
use log::LevelFilter;

pub fn init(log_file: &Path) {
    let mut builder = env_logger::Builder::new();

    // RUST_LOG tem prioridade se estiver definida
    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(LevelFilter::Info);
        // Dependências muito verbosas
        builder.filter_module("hyper", LevelFilter::Warn);
        builder.filter_module("hyper_util", LevelFilter::Warn);
        builder.filter_module("reqwest", LevelFilter::Warn);
    }

    // Formato: [HH:MM:SS LEVEL] módulo - mensagem
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(dir) = log_file.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            let _ = std::fs::create_dir_all(dir);
        }
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file);

    match file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            // Sem arquivo, segue no stderr
            builder.target(env_logger::Target::Stderr);
            eprintln!("Não foi possível abrir {}: {}", log_file.display(), e);
        }
    }

    if builder.try_init().is_err() {
        return;
    }

    log::info!("Logging inicializado ✓");
}
