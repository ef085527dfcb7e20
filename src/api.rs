//! JavaScript surface. One game session lives for the lifetime of the module;
//! every call returns the full [`GameState`](crate::types::GameState) so the
//! UI can re-render from a single consistent value.

use std::str::FromStr;
use std::sync::Mutex;

use log::Level;
use once_cell::sync::Lazy;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::error::EngineError;
use crate::game::Game;
use crate::types::Position;

static GAME: Lazy<Mutex<Game>> = Lazy::new(|| Mutex::new(Game::default()));

fn with_game<T>(f: impl FnOnce(&mut Game) -> T) -> T {
    let mut game = GAME.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut game)
}

fn state_value(game: &Game) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(&game.to_game_state())?)
}

fn parse_level(level: Option<&str>) -> Result<Level, EngineError> {
    match level {
        None => Ok(Level::Info),
        Some(name) => Level::from_str(name)
            .map_err(|_| EngineError::InvalidConfig(format!("unknown log level: {name}"))),
    }
}

/// Routes `log` output to the browser console. Later calls are no-ops.
#[wasm_bindgen]
pub fn init_logging(level: Option<String>) -> Result<(), JsError> {
    let level = parse_level(level.as_deref())?;
    let _ = console_log::init_with_level(level);
    Ok(())
}

/// Starts a new session. `config` may be omitted for the default
/// (computer plays white).
#[wasm_bindgen]
pub fn new_game(config: JsValue) -> Result<JsValue, JsError> {
    let config = if config.is_undefined() || config.is_null() {
        GameConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|err| EngineError::InvalidConfig(err.to_string()))?
    };

    with_game(|game| {
        *game = Game::new(config);
        state_value(game)
    })
}

#[wasm_bindgen]
pub fn reset_game() -> Result<JsValue, JsError> {
    with_game(|game| {
        game.reset();
        state_value(game)
    })
}

#[wasm_bindgen]
pub fn get_state() -> Result<JsValue, JsError> {
    with_game(|game| state_value(game))
}

/// Human move for the side to move.
#[wasm_bindgen]
pub fn place(row: u8, col: u8) -> Result<JsValue, JsError> {
    let pos = Position::new(row, col)?;
    with_game(|game| {
        game.play(pos)?;
        state_value(game)
    })
}

/// Plays the computer side's reply. The UI schedules this after rendering the
/// human move.
#[wasm_bindgen]
pub fn computer_move() -> Result<JsValue, JsError> {
    with_game(|game| {
        game.play_computer()?;
        state_value(game)
    })
}

#[wasm_bindgen]
pub fn is_legal(row: u8, col: u8) -> Result<bool, JsError> {
    let pos = Position::new(row, col)?;
    Ok(with_game(|game| game.is_legal(pos)))
}

#[wasm_bindgen]
pub fn legal_moves() -> Result<JsValue, JsError> {
    with_game(|game| Ok(serde_wasm_bindgen::to_value(&game.legal_moves())?))
}

/// Final result, or `undefined` while the game is in progress.
#[wasm_bindgen]
pub fn get_result() -> Result<JsValue, JsError> {
    with_game(|game| Ok(serde_wasm_bindgen::to_value(&game.result())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(parse_level(None).unwrap(), Level::Info);
        assert_eq!(parse_level(Some("debug")).unwrap(), Level::Debug);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = parse_level(Some("loud")).unwrap_err();

        assert!(matches!(err, EngineError::InvalidConfig(_)));
        assert!(err.to_string().contains("loud"));
    }
}
