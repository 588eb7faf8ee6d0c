// src/save/src/lib.rs

pub mod codec;

use combat::{Combatant, Entity};
use error::GameError;
use hero::{Job, Player};
use scopeguard::ScopeGuard;
use std::{
    fs,
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// 存档数据：读档时先解码到这里，全部成功后才提交到游戏状态
#[derive(Debug, Clone, PartialEq)]
pub struct SaveData {
    /// Roster cursor of the enemy being fought.
    pub enemy_index: usize,
    /// Player name and base stats (equipment bonuses are not included).
    pub player: Entity,
    pub job: Job,
    pub equipped_index: Option<usize>,
    /// The current enemy, with its wounds.
    pub enemy: Entity,
}

impl SaveData {
    /// 记录当前对局
    pub fn capture(enemy_index: usize, player: &Player, enemy: &Entity) -> Self {
        Self {
            enemy_index,
            player: player.base().clone(),
            job: player.job(),
            equipped_index: player.equipped_index(),
            enemy: enemy.clone(),
        }
    }

    /// Rebuilds the player: the inventory comes from the job catalog and the
    /// saved slot is re-equipped.
    pub fn restore_player(&self) -> Result<Player, GameError> {
        let mut player = Player::with_stats(self.player.clone(), self.job);
        if let Some(index) = self.equipped_index {
            player
                .equip(index)
                .map_err(|e| GameError::InvalidSaveData(e.to_string()))?;
        }
        Ok(player)
    }

    pub fn encode(&self) -> Result<String, GameError> {
        codec::encode(self)
    }

    pub fn decode(text: &str) -> Result<Self, GameError> {
        codec::decode(text)
    }
}

/// 存档系统（单一存档文件）
#[derive(Debug, Clone)]
pub struct SaveSystem {
    path: PathBuf,
}

impl SaveSystem {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 保存游戏状态
    ///
    /// Writes to a sibling temp file and renames it over the save, so a failed
    /// write never clobbers the previous save.
    pub fn save_game(&self, data: &SaveData) -> Result<(), GameError> {
        let text = data.encode()?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let temp_path = self.path.with_extension("tmp");
        // 失败时删除临时文件
        let temp_guard = scopeguard::guard(temp_path, |path| {
            let _ = fs::remove_file(path);
        });

        {
            let file = fs::File::create(&*temp_guard)?;
            let mut writer = BufWriter::new(file);
            writer.write_all(text.as_bytes())?;
            writer.flush()?;
        }

        fs::rename(&*temp_guard, &self.path)?;
        // 已成功提交，不再需要清理
        ScopeGuard::into_inner(temp_guard);

        info!(
            path = %self.path.display(),
            player = %data.player.name,
            enemy_index = data.enemy_index,
            "game_saved"
        );
        Ok(())
    }

    /// 加载游戏状态
    pub fn load_game(&self) -> Result<SaveData, GameError> {
        let mut text = String::new();
        {
            let mut file = fs::File::open(&self.path)?;
            file.read_to_string(&mut text)?;
        }

        let data = SaveData::decode(&text)?;
        debug!(
            path = %self.path.display(),
            player = %data.player.name,
            health = data.player.health(),
            "save_decoded"
        );
        Ok(data)
    }

    /// 检查是否有存档
    pub fn has_save(&self) -> bool {
        self.path.is_file()
    }

    /// 获取存档文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn wounded_knight() -> Player {
        let mut player = Player::new("Arthur", Job::Knight);
        player.take_damage(12.5);
        player.equip(1).unwrap();
        player
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let system = SaveSystem::new(dir.path().join("arena.sav"));
        assert!(!system.has_save());

        let player = wounded_knight();
        let enemy = Entity::new("guy named Kris", 7.0, 10.0, 5.0);
        let data = SaveData::capture(2, &player, &enemy);

        system.save_game(&data).unwrap();
        assert!(system.has_save());
        assert!(!system.path().with_extension("tmp").exists());

        let loaded = system.load_game().unwrap();
        assert_eq!(loaded, data);

        let restored = loaded.restore_player().unwrap();
        assert_eq!(restored, player);
        assert_eq!(restored.defense_power(), 910.0);
        assert_eq!(restored.base().defense_power, 10.0);
    }

    #[test]
    fn save_overwrites_previous() {
        let dir = tempdir().unwrap();
        let system = SaveSystem::new(dir.path().join("nested").join("arena.sav"));
        let player = Player::new("Merlin", Job::Wizard);

        let first = SaveData::capture(0, &player, &Entity::new("Slime", 10.0, 1.0, 0.0));
        let second = SaveData::capture(1, &player, &Entity::new("Zomb-B", 15.0, 5.0, 2.0));
        system.save_game(&first).unwrap();
        system.save_game(&second).unwrap();

        assert_eq!(system.load_game().unwrap(), second);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let system = SaveSystem::new(dir.path().join("absent.sav"));
        let err = system.load_game().unwrap_err();
        assert!(err.is_missing_save());
    }

    #[test]
    fn unsaveable_name_writes_nothing() {
        let dir = tempdir().unwrap();
        let system = SaveSystem::new(dir.path().join("arena.sav"));
        let player = Player::new("Bad\nName", Job::Knight);
        let data = SaveData::capture(0, &player, &Entity::new("Slime", 10.0, 1.0, 0.0));

        assert!(system.save_game(&data).is_err());
        assert!(!system.has_save());
        assert!(!system.path().with_extension("tmp").exists());
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        // 存档路径被目录占用，写入临时文件成功但 rename 失败
        let blocked = dir.path().join("arena.sav");
        fs::create_dir(&blocked).unwrap();
        fs::write(blocked.join("keep"), "x").unwrap();
        let system = SaveSystem::new(&blocked);

        let player = Player::new("Merlin", Job::Wizard);
        let data = SaveData::capture(0, &player, &Entity::new("Slime", 10.0, 1.0, 0.0));

        assert!(system.save_game(&data).is_err());
        assert!(!system.path().with_extension("tmp").exists());
        assert!(blocked.join("keep").exists());
    }

    #[test]
    fn restore_rejects_equip_index_outside_catalog() {
        let player = Player::new("Arthur", Job::Knight);
        let mut data = SaveData::capture(0, &player, &Entity::new("Slime", 10.0, 1.0, 0.0));
        data.equipped_index = Some(5);
        assert!(matches!(
            data.restore_player(),
            Err(GameError::InvalidSaveData(_))
        ));
    }
}
