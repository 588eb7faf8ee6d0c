//! Scene state machine.
//!
//! A scene is one mode of the game (menu, naming, selection, battle, restart).
//! Scene handlers report what happened as a [`SceneEvent`] and
//! [`Scene::next`] decides where the game goes from there.

use strum::{Display, EnumIter};

/// 场景标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Scene {
    #[default]
    StartMenu,
    NameCreation,
    CharacterSelection,
    Battle,
    RestartMenu,
    /// 终止状态：运行循环在此退出
    GameOver,
}

/// 场景处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum SceneEvent {
    NewGame,
    LoadSucceeded,
    LoadFailed,
    NameConfirmed,
    NameRejected,
    JobChosen,
    /// A battle tick ended with both sides standing, or with a kill and
    /// enemies remaining.
    TurnTaken,
    PlayerDefeated,
    RosterExhausted,
    /// Battle was entered without a player; the game returns to the menu.
    GameAbandoned,
    PlayAgain,
    Quit,
}

impl Scene {
    /// Transition function. Events that mean nothing in the current scene
    /// leave it unchanged.
    pub fn next(self, event: SceneEvent) -> Scene {
        use Scene::*;
        use SceneEvent::*;

        match (self, event) {
            (StartMenu, NewGame) => NameCreation,
            (StartMenu, LoadSucceeded) => Battle,
            (StartMenu, LoadFailed) => StartMenu,

            (NameCreation, NameConfirmed) => CharacterSelection,
            (NameCreation, NameRejected) => NameCreation,

            (CharacterSelection, JobChosen) => Battle,

            (Battle, TurnTaken) => Battle,
            (Battle, PlayerDefeated | RosterExhausted) => RestartMenu,
            (Battle, GameAbandoned) => StartMenu,

            (RestartMenu, PlayAgain) => StartMenu,
            (RestartMenu, Quit) => GameOver,

            (scene, _) => scene,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Scene::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    #[test]
    fn new_game_path() {
        let scene = Scene::default()
            .next(SceneEvent::NewGame)
            .next(SceneEvent::NameRejected)
            .next(SceneEvent::NameConfirmed)
            .next(SceneEvent::JobChosen);
        assert_eq!(scene, Scene::Battle);
    }

    #[test]
    fn load_outcomes() {
        assert_eq!(
            Scene::StartMenu.next(SceneEvent::LoadSucceeded),
            Scene::Battle
        );
        assert_eq!(
            Scene::StartMenu.next(SceneEvent::LoadFailed),
            Scene::StartMenu
        );
    }

    #[test]
    fn battle_outcomes() {
        assert_eq!(Scene::Battle.next(SceneEvent::TurnTaken), Scene::Battle);
        assert_eq!(
            Scene::Battle.next(SceneEvent::PlayerDefeated),
            Scene::RestartMenu
        );
        assert_eq!(
            Scene::Battle.next(SceneEvent::RosterExhausted),
            Scene::RestartMenu
        );
        assert_eq!(
            Scene::Battle.next(SceneEvent::GameAbandoned),
            Scene::StartMenu
        );
    }

    #[test]
    fn restart_outcomes() {
        assert_eq!(
            Scene::RestartMenu.next(SceneEvent::PlayAgain),
            Scene::StartMenu
        );
        let end = Scene::RestartMenu.next(SceneEvent::Quit);
        assert_eq!(end, Scene::GameOver);
        assert!(end.is_terminal());
    }

    #[test]
    fn unrelated_events_keep_scene() {
        assert_eq!(Scene::StartMenu.next(SceneEvent::Quit), Scene::StartMenu);
        assert_eq!(
            Scene::CharacterSelection.next(SceneEvent::PlayerDefeated),
            Scene::CharacterSelection
        );
        assert_eq!(Scene::GameOver.next(SceneEvent::PlayAgain), Scene::GameOver);
    }

    proptest! {
        #[test]
        fn game_over_is_absorbing(picks in proptest::collection::vec(0usize..64, 0..40)) {
            let events: Vec<SceneEvent> = SceneEvent::iter().collect();
            let mut scene = Scene::default();
            let mut finished = false;
            for pick in picks {
                scene = scene.next(events[pick % events.len()]);
                if finished {
                    prop_assert_eq!(scene, Scene::GameOver);
                }
                finished = scene.is_terminal();
            }
        }

        #[test]
        fn battle_only_follows_selection_or_load(picks in proptest::collection::vec(0usize..64, 1..40)) {
            let events: Vec<SceneEvent> = SceneEvent::iter().collect();
            let mut scene = Scene::default();
            for pick in picks {
                let event = events[pick % events.len()];
                let next = scene.next(event);
                if next == Scene::Battle && scene != Scene::Battle {
                    prop_assert!(matches!(
                        (scene, event),
                        (Scene::CharacterSelection, SceneEvent::JobChosen)
                            | (Scene::StartMenu, SceneEvent::LoadSucceeded)
                    ));
                }
                scene = next;
            }
        }
    }
}
