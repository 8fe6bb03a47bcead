// Módulos do EcoRoteiro
pub mod ai;
pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod services;
pub mod ui;
