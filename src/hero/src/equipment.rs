// src/hero/src/equipment.rs

use items::Item;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EquipError {
    #[error("No item at inventory slot {index} (inventory holds {len})")]
    InvalidIndex { index: usize, len: usize },
    #[error("Nothing is equipped")]
    NothingEquipped,
}

/// 单一装备槽：保存背包物品的副本及其在背包中的位置
///
/// `item` and `index` always change together: the slot holds either the
/// "Nothing" placeholder with no index, or a copy of `inventory[index]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Equipment {
    item: Item,
    index: Option<usize>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// 装备背包中第 `index` 件物品，替换当前装备
    pub fn equip(&mut self, inventory: &[Item], index: usize) -> Result<&Item, EquipError> {
        let item = inventory.get(index).ok_or(EquipError::InvalidIndex {
            index,
            len: inventory.len(),
        })?;
        self.item = item.clone();
        self.index = Some(index);
        Ok(&self.item)
    }

    /// 卸下当前装备，返回被卸下的物品
    pub fn unequip(&mut self) -> Result<Item, EquipError> {
        if self.item.is_nothing() {
            return Err(EquipError::NothingEquipped);
        }
        self.index = None;
        Ok(std::mem::take(&mut self.item))
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_none()
    }
}
