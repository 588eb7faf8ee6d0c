//! 游戏错误处理模块
//!
//! 处理存档读写、配置加载过程中可能出现的错误。

use thiserror::Error;

/// 游戏运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 存档缺少字段
    #[error("Save data is missing the `{0}` field")]
    MissingField(&'static str),

    /// 字段无法解析
    #[error("Invalid value {value:?} for `{field}`")]
    InvalidField { field: &'static str, value: String },

    /// 未知职业
    #[error("Unknown job: {0:?}")]
    UnknownJob(String),

    /// 存档末尾存在多余数据
    #[error("Unexpected trailing data in save file")]
    TrailingData,

    /// 存档字段能解析，但组合起来不合法
    #[error("Invalid save data: {0}")]
    InvalidSaveData(String),

    /// 游戏状态无效
    #[error("Invalid game state: {0}")]
    InvalidGameState(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GameError {
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        GameError::InvalidField {
            field,
            value: value.into(),
        }
    }

    /// 存档文件不存在
    pub fn is_missing_save(&self) -> bool {
        matches!(self, GameError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "No save file was found.".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                "Permission denied while accessing the save file.".to_string()
            }
            _ => format!("IO error: {}", e),
        },
        GameError::UnknownJob(job) => format!("The save file names an unknown class: {}", job),
        GameError::MissingField(_) | GameError::TrailingData => {
            "The save file is incomplete or corrupted.".to_string()
        }
        GameError::InvalidField { field, .. } => {
            format!("The save file is corrupted ({} could not be read).", field)
        }
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_file_is_reported_plainly() {
        let err = GameError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.is_missing_save());
        assert_eq!(handle_error(&err), "No save file was found.");
    }

    #[test]
    fn field_errors_name_the_field() {
        let err = GameError::invalid_field("enemy_index", "abc");
        assert!(!err.is_missing_save());
        assert!(handle_error(&err).contains("enemy_index"));
        assert_eq!(err.to_string(), "Invalid value \"abc\" for `enemy_index`");
    }

    #[test]
    fn unknown_job_keeps_the_tag() {
        let err = GameError::UnknownJob("Bard".into());
        assert!(handle_error(&err).contains("Bard"));
    }
}
