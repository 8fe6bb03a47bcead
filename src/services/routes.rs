use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "iniciante")]
    Beginner,
    #[serde(rename = "intermediario")]
    Intermediate,
    #[serde(rename = "avancado")]
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Iniciante",
            Difficulty::Intermediate => "Intermediário",
            Difficulty::Advanced => "Avançado",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "iniciante" => Ok(Difficulty::Beginner),
            "intermediate" | "intermediario" | "intermediário" => Ok(Difficulty::Intermediate),
            "advanced" | "avancado" | "avançado" => Ok(Difficulty::Advanced),
            other => Err(format!("dificuldade desconhecida: {}", other)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteCategory {
    #[serde(rename = "trilha")]
    Trail,
    #[serde(rename = "praia")]
    Beach,
    #[serde(rename = "observacao")]
    Birdwatching,
    #[serde(rename = "aventura")]
    Adventure,
}

impl RouteCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RouteCategory::Trail => "Trilha",
            RouteCategory::Beach => "Praia",
            RouteCategory::Birdwatching => "Observação",
            RouteCategory::Adventure => "Aventura",
        }
    }
}

impl FromStr for RouteCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trail" | "trilha" => Ok(RouteCategory::Trail),
            "beach" | "praia" => Ok(RouteCategory::Beach),
            "birdwatching" | "observacao" | "observação" => Ok(RouteCategory::Birdwatching),
            "adventure" | "aventura" => Ok(RouteCategory::Adventure),
            other => Err(format!("tipo de roteiro desconhecido: {}", other)),
        }
    }
}

impl fmt::Display for RouteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Critério de filtro com o valor sentinela "todos"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = String>,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" => Ok(Selection::All),
            _ => s.parse().map(Selection::Only),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub category: RouteCategory,
    pub description: String,
    pub duration: String,
    pub distance: String,
    pub location: String,
    pub highlights: Vec<String>,
}

#[allow(clippy::too_many_arguments)]
fn route(
    id: &str,
    name: &str,
    difficulty: Difficulty,
    category: RouteCategory,
    description: &str,
    duration: &str,
    distance: &str,
    location: &str,
    highlights: &[&str],
) -> Route {
    Route {
        id: id.to_string(),
        name: name.to_string(),
        difficulty,
        category,
        description: description.to_string(),
        duration: duration.to_string(),
        distance: distance.to_string(),
        location: location.to_string(),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
    }
}

/// Roteiros de demonstração da página de exploração
pub fn seed_routes() -> Vec<Route> {
    use Difficulty::*;
    use RouteCategory::*;

    vec![
        route(
            "1",
            "Trilha do Parque do Cocó",
            Beginner,
            Trail,
            "Caminhada leve pela mata ciliar com observação de aves e natureza preservada.",
            "2-3 horas",
            "2 km",
            "Fortaleza-CE",
            &["Observação de aves", "Mata ciliar", "Lagoas naturais"],
        ),
        route(
            "2",
            "Trilha da Lagoa do Papicu",
            Intermediate,
            Trail,
            "Percurso intermediário passando por lagoas naturais e áreas de restinga.",
            "3-4 horas",
            "4 km",
            "Fortaleza-CE",
            &["Lagoas naturais", "Área de restinga", "Vista panorâmica"],
        ),
        route(
            "3",
            "Morro do Careca - Maranguape",
            Advanced,
            Adventure,
            "Trilha desafiadora com subida íngreme e vista panorâmica incrível.",
            "4-6 horas",
            "6 km",
            "Maranguape-CE",
            &["Vista panorâmica", "Desafio físico", "Natureza preservada"],
        ),
        route(
            "4",
            "Ecoturismo na Praia do Futuro",
            Beginner,
            Beach,
            "Atividades de educação ambiental e preservação marinha na costa.",
            "2-3 horas",
            "1 km",
            "Fortaleza-CE",
            &["Educação ambiental", "Preservação marinha", "Praias urbanas"],
        ),
        route(
            "5",
            "Observação de Aves - Parque do Cocó",
            Beginner,
            Birdwatching,
            "Sessão especializada em observação de aves com mais de 200 espécies.",
            "3-4 horas",
            "1.5 km",
            "Fortaleza-CE",
            &["200+ espécies", "Binóculos inclusos", "Guia especializado"],
        ),
        route(
            "6",
            "Trilha do Pico Alto - Guaramiranga",
            Advanced,
            Adventure,
            "Trilha de alta montanha com clima serrano e vegetação única.",
            "5-7 horas",
            "8 km",
            "Guaramiranga-CE",
            &["Clima serrano", "Vegetação única", "Vista de montanha"],
        ),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteFilter {
    pub search: String,
    pub difficulty: Selection<Difficulty>,
    pub category: Selection<RouteCategory>,
}

impl RouteFilter {
    pub fn matches(&self, route: &Route) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = route.name.to_lowercase().contains(&term)
            || route.description.to_lowercase().contains(&term)
            || route.location.to_lowercase().contains(&term);

        matches_search
            && self.difficulty.accepts(&route.difficulty)
            && self.category.accepts(&route.category)
    }

    /// Mantém a ordem original, sem ranking
    pub fn apply<'a>(&self, routes: &'a [Route]) -> Vec<&'a Route> {
        routes.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(routes: &[&Route]) -> Vec<String> {
        routes.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        let routes = seed_routes();
        let filter = RouteFilter {
            search: "papicu".to_string(),
            difficulty: "all".parse().unwrap(),
            category: "all".parse().unwrap(),
        };
        let found = filter.apply(&routes);
        assert_eq!(found.len(), 1);
        assert!(found[0].name.contains("Papicu"));
    }

    #[test]
    fn search_covers_description_and_location() {
        let routes = seed_routes();
        let by_location = RouteFilter {
            search: "GUARAMIRANGA".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_location.apply(&routes)), ["6"]);

        let by_description = RouteFilter {
            search: "restinga".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_description.apply(&routes)), ["2"]);
    }

    #[test]
    fn difficulty_keeps_original_order() {
        let routes = seed_routes();
        let filter = RouteFilter {
            difficulty: "advanced".parse().unwrap(),
            ..Default::default()
        };
        let found = filter.apply(&routes);
        assert_eq!(ids(&found), ["3", "6"]);
        assert!(found.iter().all(|r| r.difficulty == Difficulty::Advanced));
    }

    #[test]
    fn criteria_are_combined() {
        let routes = seed_routes();
        let filter = RouteFilter {
            search: "cocó".to_string(),
            difficulty: Selection::Only(Difficulty::Beginner),
            category: "observacao".parse().unwrap(),
        };
        assert_eq!(ids(&filter.apply(&routes)), ["5"]);
    }

    #[test]
    fn unmatched_search_is_empty() {
        let routes = seed_routes();
        let filter = RouteFilter {
            search: "jericoacoara".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&routes).is_empty());
    }

    #[test]
    fn default_filter_returns_everything() {
        let routes = seed_routes();
        assert_eq!(RouteFilter::default().apply(&routes).len(), routes.len());
    }

    #[test]
    fn filtering_is_idempotent() {
        let routes = seed_routes();
        let filter = RouteFilter {
            search: "trilha".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&routes), filter.apply(&routes));
    }

    #[test]
    fn parses_sentinel_and_names() {
        assert_eq!("todos".parse::<Selection<Difficulty>>(), Ok(Selection::All));
        assert_eq!(
            "Iniciante".parse::<Selection<Difficulty>>(),
            Ok(Selection::Only(Difficulty::Beginner))
        );
        assert_eq!(
            "beach".parse::<Selection<RouteCategory>>(),
            Ok(Selection::Only(RouteCategory::Beach))
        );
        assert!("extremo".parse::<Selection<Difficulty>>().is_err());
    }

    #[test]
    fn serializes_with_listing_names() {
        let json = serde_json::to_value(&seed_routes()[4]).unwrap();
        assert_eq!(json["difficulty"], "iniciante");
        assert_eq!(json["type"], "observacao");
    }
}
