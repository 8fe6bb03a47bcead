use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

pub const GREETING: &str =
    "Oi! Quer descobrir uma trilha ecológica em Fortaleza ou região metropolitana?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    System,
}

/// Mensagem imutável. Só o `ConversationLog` cria mensagens,
/// então cada uma pertence a exatamente um histórico.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    id: Uuid,
    text: String,
    origin: Origin,
    sent_at: DateTime<Local>,
}

impl Message {
    fn new(text: String, origin: Origin) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            origin,
            sent_at: Local::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn sent_at(&self) -> DateTime<Local> {
        self.sent_at
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }
}

/// Histórico da conversa: apenas acréscimo, ordem de inserção = ordem de exibição
#[derive(Debug, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Histórico já com a saudação inicial do assistente
    pub fn with_greeting() -> Self {
        let mut log = Self::new();
        log.push_system(GREETING);
        log
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &Message {
        self.push(text.into(), Origin::User)
    }

    pub fn push_system(&mut self, text: impl Into<String>) -> &Message {
        self.push(text.into(), Origin::System)
    }

    fn push(&mut self, text: String, origin: Origin) -> &Message {
        self.messages.push(Message::new(text, origin));
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
