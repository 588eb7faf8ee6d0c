// src/hero/src/player.rs

use combat::{Combatant, Entity};
use items::Item;
use tracing::debug;

use crate::{class::Job, equipment::EquipError, equipment::Equipment};

/// 玩家角色：基础属性 + 固定背包 + 单一装备槽
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    base: Entity,
    job: Job,
    inventory: Vec<Item>,
    equipment: Equipment,
}

impl Player {
    /// 以职业基础属性和物品目录创建新角色
    pub fn new(name: impl Into<String>, job: Job) -> Self {
        let base = Entity::new(name, job.base_health(), job.base_attack(), job.base_defense());
        Self::with_stats(base, job)
    }

    /// 使用给定的基础属性创建角色（读档时使用），背包仍由职业决定
    pub fn with_stats(base: Entity, job: Job) -> Self {
        Self {
            base,
            job,
            inventory: job.starting_kit(),
            equipment: Equipment::new(),
        }
    }

    pub fn job(&self) -> Job {
        self.job
    }

    /// 不含装备加成的基础属性
    pub fn base(&self) -> &Entity {
        &self.base
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn equipped_item(&self) -> &Item {
        self.equipment.item()
    }

    pub fn equipped_index(&self) -> Option<usize> {
        self.equipment.index()
    }

    /// Equips a copy of `inventory[index]`, replacing whatever was equipped.
    pub fn equip(&mut self, index: usize) -> Result<&Item, EquipError> {
        let item = self.equipment.equip(&self.inventory, index)?;
        debug!(player = %self.base.name, item = %item.name, index, "item_equipped");
        Ok(item)
    }

    pub fn unequip(&mut self) -> Result<Item, EquipError> {
        let item = self.equipment.unequip()?;
        debug!(player = %self.base.name, item = %item.name, "item_removed");
        Ok(item)
    }

    /// 背包物品名（菜单显示用）
    pub fn item_names(&self) -> Vec<&str> {
        self.inventory.iter().map(|item| item.name.as_str()).collect()
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn health(&self) -> f32 {
        self.base.health
    }

    fn attack_power(&self) -> f32 {
        self.base.attack_power + self.equipment.item().attack_bonus()
    }

    fn defense_power(&self) -> f32 {
        self.base.defense_power + self.equipment.item().defense_bonus()
    }

    fn take_damage(&mut self, amount: f32) {
        self.base.take_damage(amount);
    }
}
