//src/items/src/lib.rs

use strum::{Display, EnumString};

/// 空装备槽的占位物品名
pub const NOTHING: &str = "Nothing";

/// 物品加成作用的属性
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum ItemType {
    Attack,
    Defense,
    #[default]
    None,
}

/// 属性加成物品（不可变的值类型）
#[derive(PartialEq, Debug, Clone)]
pub struct Item {
    pub name: String,
    pub stat_boost: f32,
    pub item_type: ItemType,
}

impl Item {
    pub fn new(name: impl Into<String>, stat_boost: f32, item_type: ItemType) -> Self {
        Self {
            name: name.into(),
            stat_boost,
            item_type,
        }
    }

    /// The "Nothing" placeholder held by an empty equip slot.
    pub fn nothing() -> Self {
        Self::new(NOTHING, 0.0, ItemType::None)
    }

    pub fn is_nothing(&self) -> bool {
        self.name == NOTHING
    }

    /// 对攻击力的加成（非攻击类物品为0）
    pub fn attack_bonus(&self) -> f32 {
        match self.item_type {
            ItemType::Attack => self.stat_boost,
            _ => 0.0,
        }
    }

    /// 对防御力的加成（非防御类物品为0）
    pub fn defense_bonus(&self) -> f32 {
        match self.item_type {
            ItemType::Defense => self.stat_boost,
            _ => 0.0,
        }
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::nothing()
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.item_type {
            ItemType::None => write!(f, "{}", self.name),
            kind => write!(f, "{} (+{} {})", self.name, self.stat_boost, kind),
        }
    }
}
