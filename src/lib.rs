pub mod config;
pub mod console;
pub mod game_loop;
pub mod scene;

pub use config::GameConfig;
pub use console::{Console, TerminalConsole};
pub use game_loop::{BattleAction, Game, GameState};
pub use scene::{Scene, SceneEvent};
