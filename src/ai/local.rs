/// Uma categoria de resposta: gatilhos (substrings em minúsculas) e a resposta fixa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
}

impl Category {
    /// `input` já deve estar em minúsculas.
    fn matches(&self, input: &str) -> bool {
        self.triggers.iter().any(|&trigger| input.contains(trigger))
    }
}

/// Tabela ordenada de categorias. A primeira categoria que casa vence;
/// sem nenhuma, vale a resposta padrão.
#[derive(Debug, Clone, Copy)]
pub struct KeywordResponder {
    categories: &'static [Category],
    default_reply: &'static str,
}

impl KeywordResponder {
    pub const fn new(categories: &'static [Category], default_reply: &'static str) -> Self {
        Self {
            categories,
            default_reply,
        }
    }

    /// Categoria vencedora para a entrada, se houver
    pub fn category_for(&self, user_input: &str) -> Option<&'static Category> {
        let input_lower = user_input.to_lowercase();
        self.categories.iter().find(|c| c.matches(&input_lower))
    }

    pub fn respond(&self, user_input: &str) -> &'static str {
        self.category_for(user_input)
            .map(|c| c.reply)
            .unwrap_or(self.default_reply)
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn default_reply(&self) -> &'static str {
        self.default_reply
    }
}

pub const BEGINNER_REPLY: &str = "Recomendo a Trilha do Parque do Cocó! É perfeita para iniciantes, com caminhada leve de 2km pela mata ciliar. Você pode observar aves e a natureza preservada. 🦜🌿";
pub const INTERMEDIATE_REPLY: &str = "Que tal a Trilha da Lagoa do Papicu? É um percurso de 4km com nível intermediário, passando por lagoas naturais e áreas de restinga. Ideal para quem já tem alguma experiência! 🏞️";
pub const ADVANCED_REPLY: &str = "Para aventura mais intensa, sugiro a Trilha do Morro do Careca em Maranguape! São 6km de subida com vista panorâmica incrível. Requer preparo físico, mas a recompensa vale a pena! ⛰️";
pub const BEACH_REPLY: &str = "Ótima escolha! Recomendo o Ecoturismo na Praia do Futuro com foco em educação ambiental. Você pode participar de limpeza de praia e aprender sobre preservação marinha! 🏖️🌊";
pub const BIRDWATCHING_REPLY: &str = "Perfeito! O Parque do Cocó é o melhor local para observação de aves em Fortaleza. São mais de 200 espécies! Leve binóculos e venha no período da manhã (6h-10h) para melhor visualização. 🦅🔍";
pub const COST_REPLY: &str = "Ótimas notícias! A maioria dos nossos roteiros são gratuitos ou com custo muito baixo (R$ 10-30). O Parque do Cocó é totalmente gratuito! Investimos em turismo sustentável acessível. 💚";
pub const DURATION_REPLY: &str = "Nossos roteiros variam de 2 a 6 horas, dependendo do nível escolhido. Trilhas leves: 2-3h, intermediárias: 3-4h, avançadas: 4-6h. Sempre com pausas para descanso e contemplação! ⏰";
pub const EQUIPMENT_REPLY: &str = "Para qualquer trilha, leve: água, protetor solar, repelente, tênis confortável, boné e câmera! Para trilhas avançadas: lanterna, lanche e kit primeiros socorros. Sempre priorize a segurança! 🎒";
pub const DEFAULT_REPLY: &str = "Que interessante! Me conte mais sobre seu nível de experiência e o que mais te interessa: trilhas, praias, observação de aves, ou algo específico? Posso personalizar a sugestão para você! 🌿✨";

// A ordem importa: os gatilhos se sobrepõem ("trilha leve e gratuita")
pub const ROUTE_CATEGORIES: &[Category] = &[
    Category {
        name: "iniciante",
        triggers: &["iniciante", "leve", "fácil"],
        reply: BEGINNER_REPLY,
    },
    Category {
        name: "intermediario",
        triggers: &["intermediário", "médio"],
        reply: INTERMEDIATE_REPLY,
    },
    Category {
        name: "avancado",
        triggers: &["avançado", "difícil"],
        reply: ADVANCED_REPLY,
    },
    Category {
        name: "praia",
        triggers: &["praia", "mar"],
        reply: BEACH_REPLY,
    },
    Category {
        name: "aves",
        triggers: &["observação", "aves", "pássaros"],
        reply: BIRDWATCHING_REPLY,
    },
    Category {
        name: "custo",
        triggers: &["custo", "preço", "gratuito"],
        reply: COST_REPLY,
    },
    Category {
        name: "tempo",
        triggers: &["tempo", "duração", "horas"],
        reply: DURATION_REPLY,
    },
    Category {
        name: "equipamento",
        triggers: &["equipamento", "o que levar"],
        reply: EQUIPMENT_REPLY,
    },
];

pub const ROUTE_RESPONDER: KeywordResponder = KeywordResponder::new(ROUTE_CATEGORIES, DEFAULT_REPLY);

/// Respostas locais (modo offline / demonstração)
pub struct LocalResponder;

impl LocalResponder {
    pub fn respond(user_input: &str) -> &'static str {
        ROUTE_RESPONDER.respond(user_input)
    }
}
