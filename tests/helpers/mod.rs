#![allow(dead_code)]

//! Scripted-console helpers for driving the game controller in tests.

use battle_arena::{Game, GameConfig, GameState, TerminalConsole};
use std::io::Cursor;
use std::path::PathBuf;

pub type ScriptConsole = TerminalConsole<Cursor<Vec<u8>>, Vec<u8>>;

/// Console fed from `script`, one answer per line, with screen clearing off.
pub fn script_console(script: &str) -> ScriptConsole {
    TerminalConsole::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), false)
}

pub fn test_config(save_path: PathBuf) -> GameConfig {
    GameConfig {
        save_path,
        clear_screen: false,
        ..GameConfig::default()
    }
}

pub fn scripted_game(script: &str, config: GameConfig) -> Game<ScriptConsole> {
    Game::new(script_console(script), config)
}

/// Runs `n` ticks, panicking on console errors.
pub fn tick_n(game: &mut Game<ScriptConsole>, mut state: GameState, n: usize) -> GameState {
    for _ in 0..n {
        state = game.tick(state).expect("tick");
    }
    state
}

pub fn printed(game: &Game<ScriptConsole>) -> String {
    String::from_utf8_lossy(game.console().output()).into_owned()
}
