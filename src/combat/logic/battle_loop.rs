use crate::combat::events::BattleEvent;
use crate::combat::logic::battle_calculations::apply_move;
use crate::combat::selector::MoveSelector;
use crate::combat::state::{BattleOutcome, BattlePhase, BattleSide, BattleState};

/// Processes a single turn of the battle: the player attacks, then the
/// opponent, with a defeat check after each individual attack. If the first
/// attack defeats the defender the turn ends immediately and the other side
/// does not act.
///
/// Returns the events of this turn; they are also appended to the battle log.
pub fn process_turn(
    state: &mut BattleState,
    player_selector: &mut dyn MoveSelector,
    opponent_selector: &mut dyn MoveSelector,
) -> Vec<BattleEvent> {
    let mut events = Vec::new();
    if state.is_finished() {
        return events;
    }

    events.push(BattleEvent::TurnStart {
        turn_number: state.turn_number,
    });

    execute_attack(state, BattleSide::Player, player_selector, &mut events);
    if check_defeat(state, &mut events) {
        state.battle_log.extend(events.iter().cloned());
        return events;
    }

    state.battle_phase = BattlePhase::WaitingForOpponentMove;
    execute_attack(state, BattleSide::Opponent, opponent_selector, &mut events);
    if check_defeat(state, &mut events) {
        state.battle_log.extend(events.iter().cloned());
        return events;
    }

    // Both sides survived the cycle; hand the next turn back to the player.
    state.turn_number += 1;
    state.battle_phase = BattlePhase::WaitingForPlayerMove;
    state.battle_log.extend(events.iter().cloned());
    events
}

/// Drive a battle to completion with two non-blocking selectors.
///
/// Termination is bounded by total health over minimum damage per turn:
/// catalog validation guarantees every move has positive power.
pub fn run_battle(
    state: &mut BattleState,
    player_selector: &mut dyn MoveSelector,
    opponent_selector: &mut dyn MoveSelector,
) -> BattleOutcome {
    while !state.is_finished() {
        process_turn(state, player_selector, opponent_selector);
    }
    if state.opponent.is_defeated() {
        BattleOutcome::Victory
    } else {
        BattleOutcome::Defeat
    }
}

/// Executes one side's attack against the other.
fn execute_attack(
    state: &mut BattleState,
    side: BattleSide,
    selector: &mut dyn MoveSelector,
    events: &mut Vec<BattleEvent>,
) {
    let attacker = state.combatant(side);
    let move_index = selector.select_move(attacker);
    let attack = attacker.moves[move_index].clone();
    let attacker_name = attacker.name.clone();

    state.battle_phase = match side {
        BattleSide::Player => BattlePhase::ResolvingPlayerAttack,
        BattleSide::Opponent => BattlePhase::ResolvingOpponentAttack,
    };

    events.push(BattleEvent::MoveUsed {
        attacker: side,
        attacker_name,
        move_name: attack.name.clone(),
        move_element: attack.element,
    });

    let defender = state.combatant_mut(side.other());
    let (damage, multiplier) = apply_move(&attack, defender);
    events.push(BattleEvent::DamageDealt {
        target: side.other(),
        target_name: defender.name.clone(),
        damage,
        effectiveness: multiplier,
        new_health: defender.current_health,
        max_health: defender.max_health,
    });
}

/// Checks whether either side reached zero health; if so, records the defeat
/// and finishes the battle. Returns true if the battle ended.
fn check_defeat(state: &mut BattleState, events: &mut Vec<BattleEvent>) -> bool {
    for side in [BattleSide::Player, BattleSide::Opponent] {
        if state.combatant(side).is_defeated() {
            events.push(BattleEvent::CombatantDefeated {
                target: side,
                target_name: state.combatant(side).name.clone(),
            });
            let outcome = match side {
                BattleSide::Player => BattleOutcome::Defeat,
                BattleSide::Opponent => BattleOutcome::Victory,
            };
            state.battle_phase = BattlePhase::Finished;
            events.push(BattleEvent::BattleEnd { outcome });
            return true;
        }
    }
    false
}
