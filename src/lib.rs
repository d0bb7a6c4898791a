pub mod game;
pub mod logic;
