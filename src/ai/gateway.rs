use serde::{Deserialize, Serialize};

use crate::config::Config;

pub const FALLBACK_RESPONSE: &str =
    "Desculpe, estou com dificuldades técnicas. Tente novamente em alguns instantes.";
pub const FALLBACK_SUGGESTIONS: [&str; 2] = ["Tente novamente", "Verifique sua conexão"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl ChatResponse {
    /// Resposta fixa usada quando o backend não responde
    pub fn fallback() -> Self {
        Self {
            response: FALLBACK_RESPONSE.to_string(),
            suggestions: Some(FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect()),
        }
    }

    pub fn suggestions(&self) -> &[String] {
        self.suggestions.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// iniciante, intermediario, avancado
    pub experience_level: String,
    /// baixa, media, alta
    pub physical_condition: String,
    /// praia, trilha, aves...
    pub interests: Vec<String>,
    /// meio_dia, dia_inteiro, fim_semana
    pub duration_preference: String,
    pub group_size: u32,
}

#[derive(Debug, Serialize)]
struct RouteSuggestionRequest<'a> {
    user_profile: &'a UserProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSuggestion {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: String,
    pub highlights: Vec<String>,
    pub estimated_cost: String,
    pub best_time: String,
    pub requirements: Vec<String>,
    pub locations: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Cliente do backend do chat.
///
/// As operações públicas nunca falham: qualquer erro vira o valor de fallback.
/// Clonar é barato, o pool de conexões é compartilhado.
#[derive(Debug, Clone)]
pub struct ChatGateway {
    http_client: reqwest::Client,
    base_url: String,
}

impl ChatGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Envia a mensagem ao backend; em caso de falha devolve a resposta de fallback
    pub async fn send_message(&self, message: &str, user_id: Option<&str>) -> ChatResponse {
        match self.try_send_message(message, user_id).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Erro ao enviar mensagem para o backend: {}", e);
                ChatResponse::fallback()
            }
        }
    }

    pub async fn try_send_message(
        &self,
        message: &str,
        user_id: Option<&str>,
    ) -> Result<ChatResponse, GatewayError> {
        let request = ChatRequest {
            message: message.to_string(),
            user_id: user_id.map(str::to_string),
        };
        log::debug!("📡 POST {}/chat", self.base_url);
        self.post_json("/chat", &request).await
    }

    /// Sugestões de roteiros para o perfil; lista vazia em caso de falha
    pub async fn get_route_suggestions(&self, profile: &UserProfile) -> Vec<RouteSuggestion> {
        match self.try_route_suggestions(profile).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                log::warn!("Erro ao obter sugestões de roteiros: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn try_route_suggestions(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<RouteSuggestion>, GatewayError> {
        let request = RouteSuggestionRequest {
            user_profile: profile,
        };
        log::debug!("📡 POST {}/routes/suggest", self.base_url);
        self.post_json("/routes/suggest", &request).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http_client
            .post(format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
