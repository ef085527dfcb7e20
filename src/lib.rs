use wasm_bindgen::prelude::*;

pub mod ai;
pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;

pub use board::Board;
pub use config::GameConfig;
pub use error::EngineError;
pub use game::{Game, MoveSelector, Status};
pub use types::{Cell, GameResult, GameState, Position, Side};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
