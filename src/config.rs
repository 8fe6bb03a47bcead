use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_LOG_FILE: &str = "logs/ecoroteiro.log";

#[derive(Debug, Clone)]
pub struct Config {
    /// Endereço base do backend do chat (sem barra final)
    pub api_base_url: String,
    pub user_id: Option<String>,
    /// Modo offline: respostas apenas pela tabela local de palavras-chave
    pub offline: bool,
    pub bind_addr: String,
    pub log_file: PathBuf,
    pub assistant_name: String,
}

impl Config {
    /// Monta a configuração a partir de uma função de consulta.
    /// Permite testar sem mexer nas variáveis de ambiente do processo.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("ECOROTEIRO_API_URL")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let user_id = lookup("ECOROTEIRO_USER_ID").filter(|v| !v.trim().is_empty());

        let offline = lookup("ECOROTEIRO_OFFLINE")
            .unwrap_or_else(|| "false".to_string())
            .to_lowercase()
            == "true";

        let bind_addr =
            lookup("ECOROTEIRO_BIND").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let log_file = lookup("ECOROTEIRO_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Self {
            api_base_url,
            user_id,
            offline,
            bind_addr,
            log_file,
            assistant_name: "EcoRoteiro".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn falls_back_to_localhost() {
        let config = config_from(&[]);
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert!(config.user_id.is_none());
        assert!(!config.offline);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("ECOROTEIRO_API_URL", "https://api.ecoroteiro.com.br/"),
            ("ECOROTEIRO_USER_ID", "visitante-42"),
            ("ECOROTEIRO_OFFLINE", "TRUE"),
            ("ECOROTEIRO_BIND", "127.0.0.1:9000"),
        ]);
        assert_eq!(config.api_base_url, "https://api.ecoroteiro.com.br");
        assert_eq!(config.user_id.as_deref(), Some("visitante-42"));
        assert!(config.offline);
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(&[("ECOROTEIRO_API_URL", "  "), ("ECOROTEIRO_USER_ID", "")]);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert!(config.user_id.is_none());
    }
}
