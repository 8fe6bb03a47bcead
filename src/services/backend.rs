//! Backend de demonstração: mesmas rotas que o chat e a página de roteiros consomem.
//! Respostas fixas, sem LLM e sem banco de dados.

use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use crate::ai::gateway::{ChatRequest, ChatResponse, RouteSuggestion, UserProfile};
use crate::ai::local::{Category, KeywordResponder};

pub const CHAT_SUGGESTIONS: [&str; 4] = [
    "Sugerir roteiro personalizado",
    "Informações sobre trilhas",
    "Roteiros de praia",
    "Custos e orçamento",
];

const CHAT_CATEGORIES: &[Category] = &[
    Category {
        name: "saudacao",
        triggers: &["olá"],
        reply: "Olá! Sou o assistente do Ecoroteiro. Como posso ajudar você a descobrir os melhores roteiros de ecoturismo em Fortaleza?",
    },
    Category {
        name: "roteiro",
        triggers: &["roteiro"],
        reply: "Posso sugerir roteiros incríveis! Me conte sobre seu nível de experiência e interesses.",
    },
    Category {
        name: "praia",
        triggers: &["praia"],
        reply: "Fortaleza tem praias maravilhosas! Posso sugerir roteiros de ecoturismo costeiro na Praia do Futuro ou Beira Mar.",
    },
    Category {
        name: "trilha",
        triggers: &["trilha"],
        reply: "Temos trilhas incríveis no Parque do Cocó! É perfeito para observação de aves e contato com a natureza.",
    },
    Category {
        name: "custo",
        triggers: &["custo"],
        reply: "Nossos roteiros variam de gratuitos a R$ 100 por pessoa, dependendo das atividades incluídas.",
    },
];

pub const CHAT_DEFAULT_REPLY: &str = "Desculpe, não entendi. Posso ajudar com informações sobre roteiros, custos, trilhas ou praias. O que você gostaria de saber?";

pub const CHAT_RESPONDER: KeywordResponder =
    KeywordResponder::new(CHAT_CATEGORIES, CHAT_DEFAULT_REPLY);

const MAX_SUGGESTIONS: usize = 3;
const FALLBACK_SUGGESTIONS: usize = 2;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn mock_routes() -> Vec<RouteSuggestion> {
    vec![
        RouteSuggestion {
            title: "Trilha do Cocó - Observação de Aves".to_string(),
            description: "Caminhada pela mata ciliar do Parque do Cocó com foco na observação de aves nativas e migratórias.".to_string(),
            duration: "3-4 horas".to_string(),
            difficulty: "Fácil".to_string(),
            highlights: strings(&["Observação de aves", "Mata ciliar preservada", "Lagoas naturais"]),
            estimated_cost: "R$ 0-50".to_string(),
            best_time: "Manhã (6h-10h)".to_string(),
            requirements: strings(&["Roupas confortáveis", "Repelente", "Binóculos (opcional)"]),
            locations: strings(&["Parque do Cocó", "Lagoa do Cocó"]),
        },
        RouteSuggestion {
            title: "Praia do Futuro - Ecoturismo Costeiro".to_string(),
            description: "Exploração da costa de Fortaleza com foco na preservação marinha e educação ambiental.".to_string(),
            duration: "Meio dia".to_string(),
            difficulty: "Fácil".to_string(),
            highlights: strings(&["Educação ambiental", "Preservação marinha", "Praias urbanas"]),
            estimated_cost: "R$ 20-80".to_string(),
            best_time: "Tarde (14h-18h)".to_string(),
            requirements: strings(&["Protetor solar", "Roupas de banho", "Água"]),
            locations: strings(&["Praia do Futuro", "Beira Mar"]),
        },
    ]
}

/// Resposta do `POST /chat`
pub fn chat_reply(message: &str) -> ChatResponse {
    ChatResponse {
        response: CHAT_RESPONDER.respond(message).to_string(),
        suggestions: Some(strings(&CHAT_SUGGESTIONS)),
    }
}

/// Filtra por nível de experiência e depois por interesses.
/// Sem interesse encontrado, devolve as duas primeiras opções do nível.
pub fn suggest_routes(routes: &[RouteSuggestion], profile: &UserProfile) -> Vec<RouteSuggestion> {
    let by_level: Vec<&RouteSuggestion> = routes
        .iter()
        .filter(|route| match profile.experience_level.as_str() {
            "iniciante" => route.difficulty == "Fácil",
            "intermediario" | "avancado" => true,
            _ => false,
        })
        .collect();

    let by_interest: Vec<&RouteSuggestion> = by_level
        .iter()
        .copied()
        .filter(|route| {
            let description = route.description.to_lowercase();
            let title = route.title.to_lowercase();
            profile
                .interests
                .iter()
                .any(|interest| description.contains(interest.as_str()) || title.contains(interest.as_str()))
        })
        .collect();

    let chosen = if by_interest.is_empty() {
        by_level.into_iter().take(FALLBACK_SUGGESTIONS).collect()
    } else {
        by_interest
    };

    chosen.into_iter().take(MAX_SUGGESTIONS).cloned().collect()
}

#[derive(Clone)]
pub struct AppState {
    routes: Arc<Vec<RouteSuggestion>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            routes: Arc::new(mock_routes()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub user_profile: UserProfile,
    #[serde(default)]
    pub specific_location: Option<String>,
    #[serde(default)]
    pub budget_range: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    /// Parâmetro de caminho inválido (422, como a validação do FastAPI)
    #[error("{0}")]
    Validation(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Bem-vindo à API do Ecoroteiro! 🌿" }))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "Ecoroteiro API" }))
}

async fn chat(Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    log::info!(
        "💬 /chat ({}): {}",
        request.user_id.as_deref().unwrap_or("anônimo"),
        request.message
    );
    Json(chat_reply(&request.message))
}

async fn suggest(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Json<Vec<RouteSuggestion>> {
    log::info!(
        "🧭 /routes/suggest nível={} local={:?} orçamento={:?}",
        request.user_profile.experience_level,
        request.specific_location,
        request.budget_range
    );
    Json(suggest_routes(&state.routes, &request.user_profile))
}

async fn popular_routes(State(state): State<AppState>) -> Json<Vec<RouteSuggestion>> {
    Json(state.routes.as_ref().clone())
}

async fn route_details(
    State(state): State<AppState>,
    route_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<RouteSuggestion>, ApiError> {
    let Path(route_id) = route_id.map_err(|rejection| {
        ApiError::Validation(format!("route_id inválido: {}", rejection.body_text()))
    })?;

    usize::try_from(route_id)
        .ok()
        .and_then(|idx| state.routes.get(idx))
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Roteiro não encontrado".to_string()))
}

pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://localhost:3000"),
        ])
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/chat", post(chat))
        .route("/routes/suggest", post(suggest))
        .route("/routes/popular", get(popular_routes))
        .route("/routes/{route_id}", get(route_details))
        .with_state(AppState::default())
        .layer(cors)
}

pub async fn serve(bind_addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    log::info!("🌿 Backend Ecoroteiro ouvindo em {}", listener.local_addr()?);
    axum::serve(listener, router()).await?;
    Ok(())
}
