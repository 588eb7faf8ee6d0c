//! Game controller: owns the roster, the player and the current scene and
//! runs one scene handler per tick.

use anyhow::Result;
use combat::{Combat, Combatant, Entity, Roster};
use error::{GameError, handle_error};
use hero::{Job, Player};
use save::{SaveData, SaveSystem};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};
use tracing::{debug, error, info, warn};

use crate::config::GameConfig;
use crate::console::Console;
use crate::scene::{Scene, SceneEvent};

const START_MENU: [(&str, SceneEvent); 2] = [
    ("Start New Game", SceneEvent::NewGame),
    ("Load Game", SceneEvent::LoadSucceeded),
];
const NAME_MENU: [(&str, SceneEvent); 2] = [
    ("Keep Name", SceneEvent::NameConfirmed),
    ("Rename", SceneEvent::NameRejected),
];
const RESTART_MENU: [(&str, SceneEvent); 2] = [
    ("Yes", SceneEvent::PlayAgain),
    ("No", SceneEvent::Quit),
];

/// 战斗回合可选行动
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
pub enum BattleAction {
    #[strum(serialize = "Attack")]
    Attack,
    #[strum(serialize = "Equip Item")]
    EquipItem,
    #[strum(serialize = "Remove Current Item")]
    RemoveItem,
    #[strum(serialize = "Save")]
    Save,
}

impl BattleAction {
    fn menu() -> Vec<(&'static str, Self)> {
        Self::iter().map(|action| (action.into(), action)).collect()
    }
}

/// Everything that changes while the game runs. Each tick takes the state
/// by value and hands back the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub scene: Scene,
    /// Name confirmed in NameCreation, consumed by CharacterSelection.
    pub pending_name: String,
    pub player: Option<Player>,
    pub roster: Roster,
}

impl GameState {
    pub fn new(roster: Roster) -> Self {
        Self {
            scene: Scene::StartMenu,
            pending_name: String::new(),
            player: None,
            roster,
        }
    }
}

/// 游戏控制器
pub struct Game<C: Console> {
    console: C,
    config: GameConfig,
    saves: SaveSystem,
}

impl<C: Console> Game<C> {
    pub fn new(console: C, config: GameConfig) -> Self {
        let saves = SaveSystem::new(&config.save_path);
        Self {
            console,
            config,
            saves,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn initial_state(&self) -> GameState {
        GameState::new(self.config.new_roster())
    }

    /// Runs until the player quits from the restart menu.
    pub fn run(&mut self) -> Result<GameState> {
        let mut state = self.initial_state();
        info!(enemies = state.roster.len(), "game_started");

        while !state.scene.is_terminal() {
            state = self.tick(state)?;
        }

        self.console.message("Farewell, adventurer.")?;
        info!("game_ended");
        Ok(state)
    }

    /// Runs the handler for the current scene once and applies the
    /// resulting transition.
    pub fn tick(&mut self, mut state: GameState) -> Result<GameState> {
        self.console.clear()?;

        let event = match state.scene {
            Scene::StartMenu => self.start_menu(&mut state)?,
            Scene::NameCreation => self.name_creation(&mut state)?,
            Scene::CharacterSelection => self.character_selection(&mut state)?,
            Scene::Battle => self.battle(&mut state)?,
            Scene::RestartMenu => self.restart_menu(&mut state)?,
            Scene::GameOver => return Ok(state),
        };

        let next = state.scene.next(event);
        if next != state.scene {
            info!(from = %state.scene, to = %next, %event, "scene_changed");
        }
        state.scene = next;
        Ok(state)
    }

    /// Asks the console to pick one of `options` and returns the value paired
    /// with the chosen label.
    fn select<T: Copy>(&mut self, prompt: &str, options: &[(&str, T)]) -> Result<T> {
        let labels: Vec<&str> = options.iter().map(|&(label, _)| label).collect();
        let index = self.console.choose(prompt, &labels)?;
        match options.get(index) {
            Some(&(_, value)) => Ok(value),
            None => {
                error!(index, options = options.len(), "menu_index_out_of_range");
                Err(GameError::InvalidGameState(format!(
                    "menu choice {index} is outside {} options",
                    options.len()
                ))
                .into())
            }
        }
    }

    fn start_menu(&mut self, state: &mut GameState) -> Result<SceneEvent> {
        let choice = self.select("Welcome to the Battle Arena!", &START_MENU)?;
        if choice == SceneEvent::NewGame {
            return Ok(choice);
        }

        if !self.saves.has_save() {
            debug!(path = %self.saves.path().display(), "no_save_file");
            self.console
                .message("Could not load the game. No save file was found.")?;
            self.console.pause()?;
            return Ok(SceneEvent::LoadFailed);
        }

        match self.load() {
            Ok((player, roster)) => {
                self.console
                    .message(&format!("Welcome back, {}.", player.name()))?;
                // 全部解析成功后才提交
                state.player = Some(player);
                state.roster = roster;
                Ok(SceneEvent::LoadSucceeded)
            }
            Err(e) => {
                warn!(error = %e, path = %self.saves.path().display(), "load_failed");
                self.console
                    .message(&format!("Could not load the game. {}", handle_error(&e)))?;
                self.console.pause()?;
                Ok(SceneEvent::LoadFailed)
            }
        }
    }

    /// Reads and validates the save without touching the live state.
    fn load(&self) -> Result<(Player, Roster), GameError> {
        let data = self.saves.load_game()?;
        let player = data.restore_player()?;
        let roster =
            Roster::resume(self.config.roster.clone(), data.enemy_index, data.enemy.clone())
                .ok_or_else(|| {
                    GameError::InvalidSaveData(format!(
                        "enemy index {} is outside a roster of {}",
                        data.enemy_index,
                        self.config.roster.len()
                    ))
                })?;
        info!(
            player = %player.name(),
            job = %player.job(),
            enemy_index = roster.cursor(),
            "game_loaded"
        );
        Ok((player, roster))
    }

    fn name_creation(&mut self, state: &mut GameState) -> Result<SceneEvent> {
        let name = self
            .console
            .read_line("Welcome! Please enter your name.")?
            .trim()
            .to_string();
        if name.is_empty() {
            self.console.message("Every adventurer needs a name.")?;
            return Ok(SceneEvent::NameRejected);
        }

        let prompt = format!("You've entered {name}, are you sure you want to keep this name?");
        let event = self.select(&prompt, &NAME_MENU)?;
        if event == SceneEvent::NameConfirmed {
            state.pending_name = name;
        }
        Ok(event)
    }

    fn character_selection(&mut self, state: &mut GameState) -> Result<SceneEvent> {
        let jobs: Vec<(&str, Job)> = Job::iter().map(|job| (job.into(), job)).collect();
        let prompt = format!(
            "Nice to meet you {}. Please select a character.",
            state.pending_name
        );
        let job = self.select(&prompt, &jobs)?;

        let player = Player::new(std::mem::take(&mut state.pending_name), job);
        info!(player = %player.name(), %job, "character_created");
        state.player = Some(player);
        state.roster = self.config.new_roster();
        Ok(SceneEvent::JobChosen)
    }

    fn battle(&mut self, state: &mut GameState) -> Result<SceneEvent> {
        let Some(player) = state.player.as_mut() else {
            error!("battle_without_player");
            return Ok(SceneEvent::GameAbandoned);
        };
        let cursor = state.roster.cursor();
        let Some(enemy) = state.roster.current_mut() else {
            warn!(cursor, "battle_with_exhausted_roster");
            return Ok(SceneEvent::RosterExhausted);
        };

        self.console.display_stats(&*player)?;
        self.console.display_stats(&*enemy)?;

        let prompt = format!("A {} stands in front of you! What will you do?", enemy.name);
        let action = self.select(&prompt, &BattleAction::menu())?;
        debug!(%action, cursor, "battle_action");

        let event = match action {
            BattleAction::Attack => {
                self.attack(player, enemy)?;
                let (player_down, enemy_down) = (!player.is_alive(), !enemy.is_alive());
                let enemy_name = enemy.name.clone();
                self.resolve_outcome(&mut state.roster, player_down, enemy_down, &enemy_name)?
            }
            BattleAction::EquipItem => {
                self.equip(player)?;
                SceneEvent::TurnTaken
            }
            BattleAction::RemoveItem => {
                match player.unequip() {
                    Ok(item) => self
                        .console
                        .message(&format!("You put away the {}.", item.name))?,
                    Err(_) => self.console.message("You have nothing equipped.")?,
                }
                SceneEvent::TurnTaken
            }
            BattleAction::Save => {
                let data = SaveData::capture(cursor, player, enemy);
                match self.saves.save_game(&data) {
                    Ok(()) => self.console.message("Game saved.")?,
                    Err(e) => {
                        warn!(error = %e, "save_failed");
                        self.console
                            .message(&format!("Could not save the game. {}", handle_error(&e)))?;
                    }
                }
                SceneEvent::TurnTaken
            }
        };

        self.console.pause()?;
        Ok(event)
    }

    /// Player strikes; a surviving enemy counters in the same tick.
    fn attack(&mut self, player: &mut Player, enemy: &mut Entity) -> Result<()> {
        let (dealt, received) = Combat::engage(player, enemy);
        self.console.message(&format!("You dealt {dealt} damage!"))?;
        if let Some(received) = received {
            self.console
                .message(&format!("The {} dealt {received} damage!", enemy.name))?;
        }
        Ok(())
    }

    fn equip(&mut self, player: &mut Player) -> Result<()> {
        let names = player.item_names();
        let index = self.console.choose("Which item will you equip?", &names)?;
        match player.equip(index) {
            Ok(item) => {
                let text = format!("You equipped the {item}.");
                self.console.message(&text)?;
            }
            Err(e) => self.console.message(&format!("Could not equip: {e}"))?,
        }
        Ok(())
    }

    fn resolve_outcome(
        &mut self,
        roster: &mut Roster,
        player_down: bool,
        enemy_down: bool,
        enemy_name: &str,
    ) -> Result<SceneEvent> {
        if player_down {
            info!(enemy = enemy_name, "player_defeated");
            self.console.message("You were slain.")?;
            return Ok(SceneEvent::PlayerDefeated);
        }
        if !enemy_down {
            return Ok(SceneEvent::TurnTaken);
        }

        self.console
            .message(&format!("You slayed the {enemy_name}!"))?;
        let next = roster.advance().map(|enemy| enemy.name.clone());
        match next {
            Some(next) => {
                info!(
                    defeated = enemy_name,
                    next = %next,
                    cursor = roster.cursor(),
                    "enemy_defeated"
                );
                self.console.message(&format!("A {next} steps forward."))?;
                Ok(SceneEvent::TurnTaken)
            }
            None => {
                info!(defeated = enemy_name, "roster_exhausted");
                self.console.message("You have defeated every challenger!")?;
                Ok(SceneEvent::RosterExhausted)
            }
        }
    }

    fn restart_menu(&mut self, state: &mut GameState) -> Result<SceneEvent> {
        let event = self.select("Play Again?", &RESTART_MENU)?;
        if event == SceneEvent::PlayAgain {
            state.roster = self.config.new_roster();
            state.player = None;
            state.pending_name.clear();
        }
        Ok(event)
    }
}
