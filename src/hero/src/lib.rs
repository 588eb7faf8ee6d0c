// src/hero/src/lib.rs

// 核心模块
mod equipment;
mod player;

// 子模块
pub mod class;

// 重新导出主要类型
pub use self::{
    class::Job,
    equipment::{EquipError, Equipment},
    player::Player,
};
