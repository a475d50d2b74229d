use battle_sim::combat::logic::{calculate_damage, effectiveness_multiplier, run_battle};
use battle_sim::combat::state::Combatant;
use battle_sim::combat::{BattleOutcome, BattleState, MoveSelector};
use battle_sim::species::{ElementType, Move, SpeciesCatalog};

use proptest::prelude::*;

/// Deterministic selector cycling through a fixed index sequence.
struct Scripted {
    indices: Vec<usize>,
    position: usize,
}

impl Scripted {
    fn new(indices: Vec<usize>) -> Self {
        Scripted {
            indices,
            position: 0,
        }
    }
}

impl MoveSelector for Scripted {
    fn select_move(&mut self, combatant: &Combatant) -> usize {
        let index = self.indices[self.position % self.indices.len()];
        self.position += 1;
        index % combatant.moves.len()
    }
}

#[test]
fn charmander_beats_bulbasaur_with_flame_moves() {
    let catalog = SpeciesCatalog::builtin();
    let mut state = BattleState::new(
        catalog.create_combatant("Charmander").unwrap(),
        catalog.create_combatant("Bulbasaur").unwrap(),
    );

    // Lanzallamas (fire 55) deals 82 against grass; two hits finish a
    // 110 HP Bulbasaur while Placaje (normal 30) only chips back once.
    let outcome = run_battle(
        &mut state,
        &mut Scripted::new(vec![1]),
        &mut Scripted::new(vec![2]),
    );

    assert_eq!(outcome, BattleOutcome::Victory);
    assert_eq!(state.opponent.current_health, 0);
    assert_eq!(state.player.current_health, 75);
    assert_eq!(state.turn_number, 2);
}

#[test]
fn ascuas_scenario_matches_the_damage_model() {
    let catalog = SpeciesCatalog::builtin();
    let charmander = catalog.create_combatant("Charmander").unwrap();
    let mut bulbasaur = catalog.create_combatant("Bulbasaur").unwrap();

    let ascuas = charmander.moves[0].clone();
    assert_eq!(ascuas.name, "Ascuas");
    let (damage, multiplier) =
        battle_sim::combat::logic::apply_move(&ascuas, &mut bulbasaur);
    assert_eq!(multiplier, 1.5);
    assert_eq!(damage, 60);
    assert_eq!(bulbasaur.current_health, 50);
}

#[test]
fn quick_attack_is_neutral_against_fire() {
    let catalog = SpeciesCatalog::builtin();
    let pikachu = catalog.create_combatant("Pikachu").unwrap();
    let mut charmander = catalog.create_combatant("Charmander").unwrap();

    let quick_attack = pikachu.moves[2].clone();
    assert_eq!(quick_attack.name, "Ataque Rápido");
    let (damage, multiplier) =
        battle_sim::combat::logic::apply_move(&quick_attack, &mut charmander);
    assert_eq!(multiplier, 1.0);
    assert_eq!(damage, 30);
    assert_eq!(charmander.current_health, 75);
}

fn element(index: usize) -> ElementType {
    ElementType::ALL[index % ElementType::ALL.len()]
}

proptest! {
    #[test]
    fn damage_is_floor_of_power_times_multiplier(
        power in 1u32..=200,
        attack_index in 0usize..4,
        defender_index in 0usize..4,
    ) {
        let attack = Move {
            name: "Test".to_string(),
            element: element(attack_index),
            power,
        };
        let defender_element = element(defender_index);
        let (damage, multiplier) = calculate_damage(&attack, defender_element);
        prop_assert_eq!(multiplier, effectiveness_multiplier(attack.element, defender_element));
        prop_assert_eq!(damage, (power as f32 * multiplier).floor() as u32);
    }

    #[test]
    fn every_battle_terminates_with_exactly_one_loser(
        player_index in 0usize..3,
        opponent_index in 0usize..3,
        player_moves in proptest::collection::vec(0usize..3, 1..16),
        opponent_moves in proptest::collection::vec(0usize..3, 1..16),
    ) {
        let catalog = SpeciesCatalog::builtin();
        let names: Vec<String> = catalog.species_names().map(String::from).collect();
        let mut state = BattleState::new(
            catalog.create_combatant(&names[player_index]).unwrap(),
            catalog.create_combatant(&names[opponent_index]).unwrap(),
        );

        let outcome = run_battle(
            &mut state,
            &mut Scripted::new(player_moves),
            &mut Scripted::new(opponent_moves),
        );

        prop_assert!(state.is_finished());
        // The weakest catalog hit deals 30 (normal moves are always neutral,
        // and the weakest reducible move is 40 * 0.75), so no matchup can
        // outlast ceil(110 / 30) = 4 full turns.
        prop_assert!(state.turn_number <= 4);
        match outcome {
            BattleOutcome::Victory => {
                prop_assert!(state.opponent.is_defeated());
                prop_assert!(!state.player.is_defeated());
            }
            BattleOutcome::Defeat => {
                prop_assert!(state.player.is_defeated());
                prop_assert!(!state.opponent.is_defeated());
            }
        }
    }
}
