pub mod config;
pub mod games;
pub mod id_generator;
pub mod logger;

pub use games::tictactoe;
