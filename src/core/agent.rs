use std::future::Future;

use crate::ai::{ChatGateway, LocalResponder};
use crate::config::Config;
use crate::core::conversation::{ConversationLog, Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    /// Respostas pelo backend (`POST /chat`)
    Remote,
    /// Respostas pela tabela local de palavras-chave
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub suggestions: Vec<String>,
}

pub struct EcoAgent {
    mode: ChatMode,
    gateway: ChatGateway,
    user_id: Option<String>,
    log: ConversationLog,
}

impl EcoAgent {
    pub fn new(config: &Config) -> Self {
        let mode = if config.offline {
            ChatMode::Offline
        } else {
            ChatMode::Remote
        };
        log::info!("🤖 Agente iniciado em modo {:?} ({})", mode, config.api_base_url);

        Self {
            mode,
            gateway: ChatGateway::from_config(config),
            user_id: config.user_id.clone(),
            log: ConversationLog::with_greeting(),
        }
    }

    pub fn with_mode(mut self, mode: ChatMode) -> Self {
        self.mode = mode;
        self
    }

    /// Registra a mensagem do usuário e a resposta no histórico.
    /// Entrada em branco é ignorada.
    pub async fn submit(&mut self, user_input: &str) -> Option<Reply> {
        if user_input.trim().is_empty() {
            return None;
        }

        self.record_user(user_input);
        let reply = self.reply_for(user_input).await;
        self.record_reply(&reply);
        Some(reply)
    }

    /// Future independente do agente: várias respostas podem estar em voo ao mesmo tempo.
    /// Cada uma deve ser registrada com `record_reply` quando chegar.
    pub fn reply_for(&self, user_input: &str) -> impl Future<Output = Reply> + Send + 'static {
        let mode = self.mode;
        let gateway = self.gateway.clone();
        let user_id = self.user_id.clone();
        let user_input = user_input.to_string();

        async move {
            match mode {
                ChatMode::Remote => {
                    let response = gateway.send_message(&user_input, user_id.as_deref()).await;
                    Reply {
                        text: response.response,
                        suggestions: response.suggestions.unwrap_or_default(),
                    }
                }
                ChatMode::Offline => {
                    log::debug!("📡 Usando regras locais");
                    Reply {
                        text: LocalResponder::respond(&user_input).to_string(),
                        suggestions: Vec::new(),
                    }
                }
            }
        }
    }

    pub fn record_user(&mut self, user_input: &str) -> &Message {
        self.log.push_user(user_input)
    }

    pub fn record_reply(&mut self, reply: &Reply) -> &Message {
        self.log.push_system(reply.text.clone())
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gateway::{FALLBACK_RESPONSE, FALLBACK_SUGGESTIONS};
    use crate::ai::local::{BEACH_REPLY, BEGINNER_REPLY, COST_REPLY};
    use crate::core::conversation::{Origin, GREETING};

    fn config(offline: bool, api_url: &str) -> Config {
        let api_url = api_url.to_string();
        Config::from_lookup(move |key| match key {
            "ECOROTEIRO_OFFLINE" => Some(offline.to_string()),
            "ECOROTEIRO_API_URL" => Some(api_url.clone()),
            _ => None,
        })
    }

    async fn closed_port_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn offline_reply_is_logged() {
        let mut agent = EcoAgent::new(&config(true, "http://localhost:8000"));
        assert_eq!(agent.mode(), ChatMode::Offline);

        let reply = agent.submit("Sou iniciante").await.unwrap();
        assert_eq!(reply.text, BEGINNER_REPLY);
        assert!(reply.suggestions.is_empty());

        let log = agent.log().messages();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].text(), GREETING);
        assert_eq!(log[1].text(), "Sou iniciante");
        assert_eq!(log[1].origin(), Origin::User);
        assert_eq!(log[2].text(), BEGINNER_REPLY);
        assert_eq!(log[2].origin(), Origin::System);
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let mut agent = EcoAgent::new(&config(true, "http://localhost:8000"));
        assert!(agent.submit("   ").await.is_none());
        assert_eq!(agent.log().len(), 1);
    }

    #[tokio::test]
    async fn remote_failure_appends_fallback() {
        let mut agent = EcoAgent::new(&config(false, &closed_port_url().await));
        assert_eq!(agent.mode(), ChatMode::Remote);

        let reply = agent.submit("olá").await.unwrap();
        assert_eq!(reply.text, FALLBACK_RESPONSE);
        assert_eq!(reply.suggestions, FALLBACK_SUGGESTIONS);
        assert_eq!(agent.log().last().map(Message::text), Some(FALLBACK_RESPONSE));
    }

    #[tokio::test]
    async fn detached_replies_can_be_recorded_out_of_order() {
        let mut agent =
            EcoAgent::new(&config(false, "http://localhost:8000")).with_mode(ChatMode::Offline);

        agent.record_user("quanto custa? é gratuito?");
        let first = agent.reply_for("quanto custa? é gratuito?");
        agent.record_user("e na praia?");
        let second = agent.reply_for("e na praia?");

        let (first, second) = tokio::join!(first, second);
        agent.record_reply(&second);
        agent.record_reply(&first);

        let texts: Vec<_> = agent.log().messages().iter().map(Message::text).collect();
        assert_eq!(texts.len(), 5);
        assert_eq!(texts[3], BEACH_REPLY);
        assert_eq!(texts[4], COST_REPLY);
    }

    #[tokio::test]
    async fn remote_replies_are_recorded_as_they_arrive() {
        use axum::routing::post;
        use axum::{Json, Router};
        use std::time::Duration;

        // a primeira mensagem demora mais para voltar
        let app = Router::new().route(
            "/chat",
            post(|Json(body): Json<serde_json::Value>| async move {
                let message = body["message"].as_str().unwrap_or_default().to_string();
                if message == "primeira" {
                    tokio::time::sleep(Duration::from_millis(300)).await;
                }
                Json(serde_json::json!({ "response": format!("resposta: {}", message) }))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let mut agent = EcoAgent::new(&config(false, &format!("http://{}", addr)));
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        for text in ["primeira", "segunda"] {
            agent.record_user(text);
            let reply = agent.reply_for(text);
            let tx = tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(reply.await);
            });
        }
        drop(tx);

        while let Some(reply) = rx.recv().await {
            agent.record_reply(&reply);
        }

        let texts: Vec<_> = agent.log().messages().iter().map(Message::text).collect();
        assert_eq!(
            texts,
            [GREETING, "primeira", "segunda", "resposta: segunda", "resposta: primeira"]
        );
    }
}
