//! Line-oriented save format.
//!
//! One value per line, in this exact order:
//!
//! ```text
//! enemy_index      integer >= 0
//! player_name      string
//! player_health    float
//! player_attack    float (base, without equipment)
//! player_defense   float (base, without equipment)
//! player_job       Knight | Wizard
//! equipped_index   integer, -1 when nothing is equipped
//! enemy_name       string
//! enemy_health     float
//! enemy_attack     float
//! enemy_defense    float
//! ```
//!
//! There is no version field: any change to this layout is a breaking change.

use std::str::{FromStr, Lines};

use combat::Entity;
use error::GameError;
use hero::Job;

use crate::SaveData;

/// Number of lines in a save record.
pub const FIELD_COUNT: usize = 11;

/// 按固定顺序写出存档文本
pub fn encode(data: &SaveData) -> Result<String, GameError> {
    check_text("player_name", &data.player.name)?;
    check_text("enemy_name", &data.enemy.name)?;
    check_stats("player", &data.player)?;
    check_stats("enemy", &data.enemy)?;

    let equipped: i64 = match data.equipped_index {
        Some(index) => i64::try_from(index)
            .map_err(|_| GameError::InvalidGameState(format!("equipped index {index}")))?,
        None => -1,
    };

    let lines: [String; FIELD_COUNT] = [
        data.enemy_index.to_string(),
        data.player.name.clone(),
        data.player.health.to_string(),
        data.player.attack_power.to_string(),
        data.player.defense_power.to_string(),
        data.job.to_string(),
        equipped.to_string(),
        data.enemy.name.clone(),
        data.enemy.health.to_string(),
        data.enemy.attack_power.to_string(),
        data.enemy.defense_power.to_string(),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

/// 解析存档文本；任何字段出错都返回错误，不产生部分结果
pub fn decode(text: &str) -> Result<SaveData, GameError> {
    let mut fields = Fields::new(text);

    let enemy_index = fields.parse::<usize>("enemy_index")?;

    let player_name = fields.text("player_name")?;
    let player_health = fields.float("player_health")?;
    let player_attack = fields.float("player_attack")?;
    let player_defense = fields.float("player_defense")?;

    let job_tag = fields.text("player_job")?;
    let job = Job::from_str(job_tag).map_err(|_| GameError::UnknownJob(job_tag.to_string()))?;

    let equipped_index = match fields.parse::<i64>("equipped_index")? {
        -1 => None,
        raw => Some(
            usize::try_from(raw)
                .map_err(|_| GameError::invalid_field("equipped_index", raw.to_string()))?,
        ),
    };

    let enemy_name = fields.text("enemy_name")?;
    let enemy_health = fields.float("enemy_health")?;
    let enemy_attack = fields.float("enemy_attack")?;
    let enemy_defense = fields.float("enemy_defense")?;

    fields.finish()?;

    Ok(SaveData {
        enemy_index,
        player: Entity::new(player_name, player_health, player_attack, player_defense),
        job,
        equipped_index,
        enemy: Entity::new(enemy_name, enemy_health, enemy_attack, enemy_defense),
    })
}

fn check_text(field: &'static str, value: &str) -> Result<(), GameError> {
    if value.contains(['\n', '\r']) {
        return Err(GameError::InvalidGameState(format!(
            "{field} contains a line break"
        )));
    }
    Ok(())
}

fn check_stats(who: &str, entity: &Entity) -> Result<(), GameError> {
    if !entity.is_finite() {
        return Err(GameError::InvalidGameState(format!(
            "{who} stats are not finite"
        )));
    }
    Ok(())
}

/// Sequential reader over the save lines.
struct Fields<'a> {
    lines: Lines<'a>,
}

impl<'a> Fields<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
        }
    }

    /// Names are kept verbatim, surrounding spaces included.
    fn text(&mut self, field: &'static str) -> Result<&'a str, GameError> {
        self.lines.next().ok_or(GameError::MissingField(field))
    }

    fn parse<T: FromStr>(&mut self, field: &'static str) -> Result<T, GameError> {
        let raw = self.text(field)?;
        raw.trim()
            .parse::<T>()
            .map_err(|_| GameError::invalid_field(field, raw))
    }

    fn float(&mut self, field: &'static str) -> Result<f32, GameError> {
        let raw = self.text(field)?;
        match raw.trim().parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(GameError::invalid_field(field, raw)),
        }
    }

    /// Only blank lines may follow the last field.
    fn finish(mut self) -> Result<(), GameError> {
        if self.lines.any(|line| !line.trim().is_empty()) {
            return Err(GameError::TrailingData);
        }
        Ok(())
    }
}
