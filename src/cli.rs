use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::ai::{ChatGateway, LocalResponder, UserProfile};
use crate::config::Config;
use crate::core::EcoAgent;
use crate::services::{backend, seed_routes, Difficulty, RouteCategory, RouteFilter, Selection};
use crate::ui::terminal;

const EXIT_WORDS: [&str; 3] = ["sair", "exit", "quit"];

#[derive(Debug, Parser)]
#[command(name = "ecoroteiro", version, about = "Roteiros de ecoturismo em Fortaleza-CE")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Conversa interativa com o assistente
    Chat {
        /// Usa apenas as respostas locais, sem backend
        #[arg(long)]
        offline: bool,
        #[arg(long)]
        user_id: Option<String>,
    },
    /// Uma única pergunta
    Ask {
        #[arg(required = true)]
        text: Vec<String>,
        #[arg(long)]
        offline: bool,
    },
    /// Lista os roteiros com filtros
    Routes {
        #[arg(short, long, default_value = "")]
        search: String,
        /// iniciante | intermediario | avancado | todos
        #[arg(short, long, default_value = "todos")]
        difficulty: Selection<Difficulty>,
        /// trilha | praia | observacao | aventura | todos
        #[arg(short, long, alias = "type", default_value = "todos")]
        category: Selection<RouteCategory>,
    },
    /// Pede ao backend sugestões para um perfil
    Suggest {
        #[arg(long, default_value = "iniciante")]
        level: String,
        #[arg(long, default_value = "media")]
        condition: String,
        #[arg(long = "interest")]
        interests: Vec<String>,
        #[arg(long, default_value = "meio_dia")]
        duration: String,
        #[arg(long, default_value_t = 1)]
        group_size: u32,
    },
    /// Sobe o backend de demonstração
    Serve {
        #[arg(long)]
        bind: Option<String>,
    },
}

pub async fn run(cli: Cli, mut config: Config) -> Result<()> {
    match cli.command {
        Command::Chat { offline, user_id } => {
            config.offline |= offline;
            if user_id.is_some() {
                config.user_id = user_id;
            }
            chat_loop(&config).await
        }
        Command::Ask { text, offline } => {
            let text = text.join(" ");
            if offline || config.offline {
                println!("{}", LocalResponder::respond(&text));
                return Ok(());
            }
            let gateway = ChatGateway::from_config(&config);
            let response = gateway.send_message(&text, config.user_id.as_deref()).await;
            println!("{}", response.response);
            if let Some(suggestions) = terminal::format_suggestions(response.suggestions()) {
                println!("{}", suggestions);
            }
            Ok(())
        }
        Command::Routes {
            search,
            difficulty,
            category,
        } => {
            let routes = seed_routes();
            let filter = RouteFilter {
                search,
                difficulty,
                category,
            };
            log::debug!("🔎 Filtro de roteiros: {:?}", filter);
            println!("{}", terminal::format_route_list(&filter.apply(&routes)).trim_end());
            Ok(())
        }
        Command::Suggest {
            level,
            condition,
            interests,
            duration,
            group_size,
        } => {
            let profile = UserProfile {
                experience_level: level,
                physical_condition: condition,
                interests,
                duration_preference: duration,
                group_size,
            };
            let gateway = ChatGateway::from_config(&config);
            let suggestions = gateway.get_route_suggestions(&profile).await;
            if suggestions.is_empty() {
                println!("Nenhuma sugestão disponível no momento.");
            }
            for suggestion in &suggestions {
                println!("{}", terminal::SEPARATOR);
                print!("{}", terminal::format_route_suggestion(suggestion));
            }
            Ok(())
        }
        Command::Serve { bind } => {
            let bind_addr = bind.unwrap_or_else(|| config.bind_addr.clone());
            println!("🌿 Backend em http://{}", bind_addr);
            backend::serve(&bind_addr).await
        }
    }
}

async fn chat_loop(config: &Config) -> Result<()> {
    let mut agent = EcoAgent::new(config);
    let name = config.assistant_name.as_str();

    for message in agent.log().messages() {
        println!("{}", terminal::format_message(message, name));
    }
    println!("(digite 'sair' para encerrar)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if EXIT_WORDS.contains(&line.trim().to_lowercase().as_str()) {
            break;
        }

        if let Some(reply) = agent.submit(&line).await {
            if let Some(message) = agent.log().last() {
                println!("{}", terminal::format_message(message, name));
            }
            if let Some(suggestions) = terminal::format_suggestions(&reply.suggestions) {
                println!("{}", suggestions);
            }
        }
    }

    log::info!("👋 Conversa encerrada com {} mensagens", agent.log().len());
    println!("Até a próxima trilha! 🌿");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_defaults_to_everything() {
        let cli = Cli::try_parse_from(["ecoroteiro", "routes"]).unwrap();
        match cli.command {
            Command::Routes {
                search,
                difficulty,
                category,
            } => {
                assert!(search.is_empty());
                assert_eq!(difficulty, Selection::All);
                assert_eq!(category, Selection::All);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn routes_parses_filters() {
        let cli = Cli::try_parse_from([
            "ecoroteiro", "routes", "-s", "cocó", "-d", "advanced", "--category", "aventura",
        ])
        .unwrap();
        match cli.command {
            Command::Routes {
                difficulty,
                category,
                ..
            } => {
                assert_eq!(difficulty, Selection::Only(Difficulty::Advanced));
                assert_eq!(category, Selection::Only(RouteCategory::Adventure));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn category_flag_and_type_alias() {
        for args in [
            ["ecoroteiro", "routes", "--category", "praia"],
            ["ecoroteiro", "routes", "-c", "praia"],
            ["ecoroteiro", "routes", "--type", "praia"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            match cli.command {
                Command::Routes { category, .. } => {
                    assert_eq!(category, Selection::Only(RouteCategory::Beach));
                }
                other => panic!("unexpected command: {:?}", other),
            }
        }
    }

    #[test]
    fn rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["ecoroteiro", "routes", "-d", "extremo"]).is_err());
    }

    #[test]
    fn suggest_collects_interests() {
        let cli = Cli::try_parse_from([
            "ecoroteiro",
            "suggest",
            "--interest",
            "praia",
            "--interest",
            "aves",
            "--group-size",
            "4",
        ])
        .unwrap();
        match cli.command {
            Command::Suggest {
                level,
                interests,
                group_size,
                ..
            } => {
                assert_eq!(level, "iniciante");
                assert_eq!(interests, ["praia", "aves"]);
                assert_eq!(group_size, 4);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn ask_requires_text() {
        assert!(Cli::try_parse_from(["ecoroteiro", "ask"]).is_err());
    }
}
