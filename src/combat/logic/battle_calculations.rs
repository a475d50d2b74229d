use crate::combat::state::Combatant;
use crate::species::{ElementType, Move};

/// Damage multiplier for an attack element against a defender element.
///
/// The advantage table is the one-directional three-element cycle
/// (fire > grass, grass > electric, electric > fire). The attack prevailing
/// gives 1.5, the defender prevailing gives 0.75, and every other pairing,
/// including anything involving normal, is neutral.
pub fn effectiveness_multiplier(attack_element: ElementType, defender_element: ElementType) -> f32 {
    if attack_element.prevails_over() == Some(defender_element) {
        1.5
    } else if defender_element.prevails_over() == Some(attack_element) {
        0.75
    } else {
        1.0
    }
}

/// Damage a move deals against the given defender element, rounded down.
pub fn calculate_damage(attack: &Move, defender_element: ElementType) -> (u32, f32) {
    let multiplier = effectiveness_multiplier(attack.element, defender_element);
    let damage = (attack.power as f32 * multiplier).floor() as u32;
    (damage, multiplier)
}

/// Resolve one attack: compute damage from the move against the defender's
/// element and subtract it from the defender's health, clamped at zero.
///
/// Effectiveness depends on the move's element, not the attacker's own, so
/// an off-element move never inherits its user's advantage.
pub fn apply_move(attack: &Move, defender: &mut Combatant) -> (u32, f32) {
    let (damage, multiplier) = calculate_damage(attack, defender.element);
    defender.apply_damage(damage);
    (damage, multiplier)
}
