// src/hero/src/class.rs

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use items::{Item, ItemType};

/// 英雄职业枚举
///
/// The variant names double as the persisted job tags, so renaming one
/// breaks existing save files.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
pub enum Job {
    Knight, // 骑士（高生命值，攻击偏低）
    Wizard, // 法师（低生命值，高攻击）
}

impl Job {
    /// 获取职业的基础生命值
    pub fn base_health(&self) -> f32 {
        match self {
            Job::Knight => 75.0,
            Job::Wizard => 50.0,
        }
    }

    /// 获取职业的基础攻击力
    pub fn base_attack(&self) -> f32 {
        match self {
            Job::Knight => 15.0,
            Job::Wizard => 25.0,
        }
    }

    /// 获取职业的基础防御力
    pub fn base_defense(&self) -> f32 {
        match self {
            Job::Knight => 10.0,
            Job::Wizard => 5.0,
        }
    }

    /// 获取职业的固定物品目录
    ///
    /// Load re-derives the inventory from this catalog, so entry order is part
    /// of the save format (the equipped index points into it).
    pub fn starting_kit(&self) -> Vec<Item> {
        match self {
            Job::Knight => vec![
                Item::new("Wand", 1025.0, ItemType::Attack),
                Item::new("Shoes", 900.0, ItemType::Defense),
            ],
            Job::Wizard => vec![
                Item::new("Big Wand", 5.0, ItemType::Attack),
                Item::new("Big Shield", 15.0, ItemType::Defense),
            ],
        }
    }
}
