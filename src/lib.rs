pub mod types;
pub mod board;
pub mod movegen;
pub mod check;
pub mod game;
pub mod bot;
