//! Renderização em texto simples para o terminal
use crate::ai::RouteSuggestion;
use crate::core::Message;
use crate::services::Route;

pub const USER_LABEL: &str = "Você";
pub const SEPARATOR: &str = "────────────────────────────────────────";

/// `[HH:MM] Remetente: texto`
pub fn format_message(message: &Message, assistant_name: &str) -> String {
    let sender = if message.is_user() {
        USER_LABEL
    } else {
        assistant_name
    };
    format!(
        "[{}] {}: {}",
        message.sent_at().format("%H:%M"),
        sender,
        message.text()
    )
}

pub fn format_suggestions(suggestions: &[String]) -> Option<String> {
    if suggestions.is_empty() {
        return None;
    }

    let mut result = "Sugestões:".to_string();
    for suggestion in suggestions {
        result.push_str(&format!("\n  • {}", suggestion));
    }
    Some(result)
}

pub fn format_route(route: &Route) -> String {
    let mut card = format!(
        "{}\n[{}] [{}] {}\n{}\n⏱ {}  📏 {}\n",
        route.name,
        route.difficulty.label(),
        route.category.label(),
        route.location,
        route.description,
        route.duration,
        route.distance,
    );
    for highlight in &route.highlights {
        card.push_str(&format!("  ✓ {}\n", highlight));
    }
    card
}

pub fn format_route_list(routes: &[&Route]) -> String {
    if routes.is_empty() {
        return "Nenhum roteiro encontrado. Tente ajustar os filtros.".to_string();
    }

    let mut out = format!("{} roteiro(s) encontrado(s)\n", routes.len());
    for route in routes {
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&format_route(route));
    }
    out
}

pub fn format_route_suggestion(suggestion: &RouteSuggestion) -> String {
    format!(
        "{} ({}, {})\n{}\n💰 {}  🕒 {}\n📍 {}\n🎒 {}\n",
        suggestion.title,
        suggestion.difficulty,
        suggestion.duration,
        suggestion.description,
        suggestion.estimated_cost,
        suggestion.best_time,
        suggestion.locations.join(", "),
        suggestion.requirements.join(", "),
    )
}
