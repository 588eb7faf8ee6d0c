// src/combat/src/combatant.rs

use serde::Deserialize;

/// 表示可以参加战斗的活体
pub trait Combatant {
    /// 获取名称
    fn name(&self) -> &str;

    /// 获取当前生命值
    fn health(&self) -> f32;

    /// 获取有效攻击力（含装备加成）
    fn attack_power(&self) -> f32;

    /// 获取有效防御力（含装备加成）
    fn defense_power(&self) -> f32;

    /// 扣除生命值，不做下限截断
    fn take_damage(&mut self, amount: f32);

    /// 是否存活
    fn is_alive(&self) -> bool {
        self.health() > 0.0
    }
}

/// 基础战斗单位：名字加三项属性
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entity {
    pub name: String,
    pub health: f32,
    pub attack_power: f32,
    pub defense_power: f32,
}

impl Entity {
    pub fn new(name: impl Into<String>, health: f32, attack_power: f32, defense_power: f32) -> Self {
        Self {
            name: name.into(),
            health,
            attack_power,
            defense_power,
        }
    }

    /// 所有属性都是有限数值
    pub fn is_finite(&self) -> bool {
        self.health.is_finite() && self.attack_power.is_finite() && self.defense_power.is_finite()
    }
}

impl Combatant for Entity {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> f32 {
        self.health
    }

    fn attack_power(&self) -> f32 {
        self.attack_power
    }

    fn defense_power(&self) -> f32 {
        self.defense_power
    }

    fn take_damage(&mut self, amount: f32) {
        self.health -= amount;
    }
}
