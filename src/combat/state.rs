use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::combat::events::BattleEvent;
use crate::species::{ElementType, Move, SpeciesTemplate};

/// An active battler: species name, element, health pool and move list.
///
/// Everything except `current_health` is fixed at construction;
/// `current_health` mutates only through [`Combatant::apply_damage`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub element: ElementType,
    pub max_health: u32,
    pub current_health: u32,
    pub moves: Vec<Move>,
}

impl Combatant {
    /// Build a combatant at full health from a catalog template.
    pub fn from_template(template: &SpeciesTemplate) -> Self {
        Combatant {
            name: template.name.clone(),
            element: template.element,
            max_health: template.max_health,
            current_health: template.max_health,
            moves: template.moves.clone(),
        }
    }

    /// Subtract damage from current health, clamped at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.current_health = self.current_health.saturating_sub(amount);
    }

    /// A combatant at zero health is defeated and may no longer act.
    pub fn is_defeated(&self) -> bool {
        self.current_health == 0
    }

    /// Remaining health as a fraction of the maximum, for HP bars.
    pub fn health_fraction(&self) -> f32 {
        self.current_health as f32 / self.max_health as f32
    }
}

/// Which side of the battle an event or phase refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BattleSide {
    Player,
    Opponent,
}

impl BattleSide {
    pub fn other(self) -> BattleSide {
        match self {
            BattleSide::Player => BattleSide::Opponent,
            BattleSide::Opponent => BattleSide::Player,
        }
    }
}

/// Current phase of the battle.
///
/// A full turn walks `WaitingForPlayerMove -> ResolvingPlayerAttack ->
/// WaitingForOpponentMove -> ResolvingOpponentAttack` and back, with a
/// defeat check after each resolving phase that can short-circuit to
/// `Finished`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BattlePhase {
    WaitingForPlayerMove,
    ResolvingPlayerAttack,
    WaitingForOpponentMove,
    ResolvingOpponentAttack,
    Finished,
}

/// Outcome of a finished battle, from the player's perspective.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// Main state container for a single battle session.
#[derive(Debug)]
pub struct BattleState {
    pub battle_id: Uuid,
    pub player: Combatant,
    pub opponent: Combatant,
    pub turn_number: u32,
    pub battle_phase: BattlePhase,
    pub battle_log: Vec<BattleEvent>,
}

impl BattleState {
    /// Start a battle with both combatants at full health.
    pub fn new(player: Combatant, opponent: Combatant) -> Self {
        BattleState {
            battle_id: Uuid::new_v4(),
            player,
            opponent,
            turn_number: 1,
            battle_phase: BattlePhase::WaitingForPlayerMove,
            battle_log: Vec::new(),
        }
    }

    pub fn combatant(&self, side: BattleSide) -> &Combatant {
        match side {
            BattleSide::Player => &self.player,
            BattleSide::Opponent => &self.opponent,
        }
    }

    pub fn combatant_mut(&mut self, side: BattleSide) -> &mut Combatant {
        match side {
            BattleSide::Player => &mut self.player,
            BattleSide::Opponent => &mut self.opponent,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.battle_phase == BattlePhase::Finished
    }

    /// Outcome of the battle, or `None` while it is still running.
    ///
    /// Simultaneous defeat cannot happen: defeat is checked after each
    /// individual attack, so at most one side is ever at zero.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        if !self.is_finished() {
            return None;
        }
        if self.opponent.is_defeated() {
            Some(BattleOutcome::Victory)
        } else {
            Some(BattleOutcome::Defeat)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combatant(health: u32) -> Combatant {
        Combatant {
            name: "Charmander".to_string(),
            element: ElementType::Fire,
            max_health: health,
            current_health: health,
            moves: vec![Move {
                name: "Ascuas".to_string(),
                element: ElementType::Fire,
                power: 40,
            }],
        }
    }

    #[test]
    fn damage_is_clamped_at_zero() {
        let mut target = combatant(50);
        target.apply_damage(60);
        assert_eq!(target.current_health, 0);
        assert!(target.is_defeated());
    }

    #[test]
    fn exact_damage_defeats() {
        let mut target = combatant(50);
        target.apply_damage(50);
        assert_eq!(target.current_health, 0);
        assert!(target.is_defeated());
    }

    #[test]
    fn defeated_combatant_health_never_goes_negative() {
        let mut target = combatant(10);
        target.apply_damage(25);
        target.apply_damage(25);
        assert_eq!(target.current_health, 0);
    }

    #[test]
    fn new_battle_waits_for_the_player() {
        let state = BattleState::new(combatant(50), combatant(50));
        assert_eq!(state.battle_phase, BattlePhase::WaitingForPlayerMove);
        assert_eq!(state.turn_number, 1);
        assert!(state.outcome().is_none());
    }
}
