// src/combat/src/enemy.rs

use crate::combatant::Entity;

/// 参考敌人名单：三项属性严格递增
pub fn default_roster() -> Vec<Entity> {
    vec![
        Entity::new("Slime", 10.0, 1.0, 0.0),
        Entity::new("Zomb-B", 15.0, 5.0, 2.0),
        Entity::new("guy named Kris", 25.0, 10.0, 5.0),
    ]
}

/// Ordered enemy roster with a single cursor.
///
/// The cursor satisfies `0 <= cursor <= len`; a cursor equal to the length
/// means every enemy has been defeated.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    enemies: Vec<Entity>,
    cursor: usize,
}

impl Roster {
    pub fn new(enemies: Vec<Entity>) -> Self {
        Self { enemies, cursor: 0 }
    }

    /// Rebuilds a roster positioned at `cursor` with the saved state of the
    /// enemy currently being fought. Returns `None` when `cursor` does not
    /// point at an enemy.
    pub fn resume(enemies: Vec<Entity>, cursor: usize, current: Entity) -> Option<Self> {
        let mut roster = Self { enemies, cursor };
        *roster.current_mut()? = current;
        Some(roster)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.enemies.len()
    }

    /// 当前敌人（名单耗尽时为 `None`）
    pub fn current(&self) -> Option<&Entity> {
        self.enemies.get(self.cursor)
    }

    pub fn current_mut(&mut self) -> Option<&mut Entity> {
        self.enemies.get_mut(self.cursor)
    }

    /// Moves past the current enemy and returns the next one, or `None`
    /// once the roster is exhausted. The cursor never passes the length.
    pub fn advance(&mut self) -> Option<&Entity> {
        if self.cursor < self.enemies.len() {
            self.cursor += 1;
        }
        self.current()
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }
}
