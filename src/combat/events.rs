use serde::{Deserialize, Serialize};

use crate::combat::state::{BattleOutcome, BattleSide};
use crate::species::ElementType;

/// Event emitted while resolving a battle, consumed by the presentation
/// layer for narration and kept in the battle log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event_type", content = "details", rename_all = "snake_case")]
pub enum BattleEvent {
    TurnStart {
        turn_number: u32,
    },
    MoveUsed {
        attacker: BattleSide,
        attacker_name: String,
        move_name: String,
        move_element: ElementType,
    },
    DamageDealt {
        target: BattleSide,
        target_name: String,
        damage: u32,
        effectiveness: f32,
        new_health: u32,
        max_health: u32,
    },
    CombatantDefeated {
        target: BattleSide,
        target_name: String,
    },
    BattleEnd {
        outcome: BattleOutcome,
    },
}
