// src/combat/src/lib.rs

pub mod combatant;
pub mod enemy;

pub use crate::combatant::{Combatant, Entity};
pub use crate::enemy::{Roster, default_roster};

use tracing::debug;

/// Handles combat interactions between entities
pub struct Combat;

impl Combat {
    /// Damage `attacker` would deal to `defender`, clamped at zero.
    pub fn calculate_damage<T: Combatant + ?Sized, U: Combatant + ?Sized>(
        attacker: &T,
        defender: &U,
    ) -> f32 {
        (attacker.attack_power() - defender.defense_power()).max(0.0)
    }

    /// Resolve a single attack and return the damage dealt.
    ///
    /// Health only changes when the damage is positive; a defense stronger
    /// than the attack is a silent zero.
    pub fn resolve_attack<T: Combatant + ?Sized, U: Combatant + ?Sized>(
        attacker: &T,
        defender: &mut U,
    ) -> f32 {
        let damage = Self::calculate_damage(attacker, defender);
        if damage > 0.0 {
            defender.take_damage(damage);
        }

        debug!(
            attacker = attacker.name(),
            defender = defender.name(),
            damage,
            remaining = defender.health(),
            "attack_resolved"
        );
        damage
    }

    /// Attack followed by an immediate counter if the defender survives.
    ///
    /// Returns `(dealt, received)`; `received` is `None` when the defender
    /// fell and could not strike back.
    pub fn engage<T: Combatant + ?Sized, U: Combatant + ?Sized>(
        attacker: &mut T,
        defender: &mut U,
    ) -> (f32, Option<f32>) {
        let dealt = Self::resolve_attack(attacker, defender);
        let received = defender
            .is_alive()
            .then(|| Self::resolve_attack(defender, attacker));
        (dealt, received)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn attack_subtracts_difference() {
        let knight = Entity::new("Knight", 75.0, 15.0, 10.0);
        let mut slime = Entity::new("Slime", 10.0, 1.0, 0.0);
        let damage = Combat::resolve_attack(&knight, &mut slime);
        assert_eq!(damage, 15.0);
        assert_eq!(slime.health, -5.0);
        assert!(!slime.is_alive());
    }

    #[test]
    fn strong_defense_blocks_silently() {
        let slime = Entity::new("Slime", 10.0, 1.0, 0.0);
        let mut knight = Entity::new("Knight", 75.0, 15.0, 10.0);
        let damage = Combat::resolve_attack(&slime, &mut knight);
        assert_eq!(damage, 0.0);
        assert_eq!(knight.health, 75.0);
    }

    #[test]
    fn engage_skips_counter_on_kill() {
        let mut wizard = Entity::new("Wizard", 50.0, 25.0, 5.0);
        let mut slime = Entity::new("Slime", 10.0, 1.0, 0.0);
        assert_eq!(Combat::engage(&mut wizard, &mut slime), (25.0, None));
        assert_eq!(wizard.health, 50.0);
    }

    #[test]
    fn engage_counters_when_defender_survives() {
        let mut hero = Entity::new("Hero", 20.0, 3.0, 1.0);
        let mut kris = Entity::new("guy named Kris", 25.0, 10.0, 5.0);
        assert_eq!(Combat::engage(&mut hero, &mut kris), (0.0, Some(9.0)));
        assert_eq!(kris.health, 25.0);
        assert_eq!(hero.health, 11.0);
    }

    proptest! {
        #[test]
        fn damage_is_clamped_difference(
            health in -100.0f32..1000.0,
            atk in 0.0f32..2000.0,
            def in 0.0f32..2000.0,
        ) {
            let attacker = Entity::new("a", 1.0, atk, 0.0);
            let mut defender = Entity::new("d", health, 0.0, def);
            let damage = Combat::resolve_attack(&attacker, &mut defender);

            prop_assert!(damage >= 0.0);
            prop_assert_eq!(damage, (atk - def).max(0.0));
            if damage <= 0.0 {
                prop_assert_eq!(defender.health, health);
            } else {
                prop_assert_eq!(defender.health, health - damage);
            }
        }
    }
}
