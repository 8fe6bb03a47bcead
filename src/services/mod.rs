pub mod backend;
pub mod routes;

pub use routes::{seed_routes, Difficulty, Route, RouteCategory, RouteFilter, Selection};
