pub mod api;
pub mod config;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod mode;
pub mod refiner;
pub mod report;
pub mod style;
pub mod tables;
pub mod token;

// Re-export the main public API
pub use api::{get_matching_paths, highlight, render_string, run};
pub use config::load_config;
pub use mode::Mode;
pub use refiner::{refine, Refiner};
pub use tables::{default_tables, Tables};
pub use token::{Token, TokenType};
