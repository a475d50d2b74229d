use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::combat::{BattleEvent, BattleOutcome, BattleState, Combatant};
use crate::species::ElementType;

const HEALTH_BAR_CELLS: usize = 20;

/// Terminal color associated with an element.
pub fn element_color(element: ElementType) -> Color {
    match element {
        ElementType::Fire => Color::Red,
        ElementType::Grass => Color::Green,
        ElementType::Electric => Color::Yellow,
        ElementType::Normal => Color::Grey,
    }
}

fn health_color(fraction: f32) -> Color {
    if fraction > 0.5 {
        Color::Green
    } else if fraction > 0.25 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Print text in the given color, or plain when color is disabled.
pub fn print_colored(
    out: &mut impl Write,
    text: &str,
    color: Color,
    color_enabled: bool,
) -> io::Result<()> {
    if color_enabled {
        execute!(out, SetForegroundColor(color), Print(text), ResetColor)
    } else {
        execute!(out, Print(text))
    }
}

pub fn banner(out: &mut impl Write, color_enabled: bool) -> io::Result<()> {
    writeln!(out)?;
    print_colored(out, "=== POKEMON BATTLE ===\n", Color::Yellow, color_enabled)?;
    writeln!(out, "A turn-based arena for three old rivals.")
}

/// One status line per combatant: name, element tag, HP bar and numbers.
pub fn battle_status(out: &mut impl Write, state: &BattleState, color_enabled: bool) -> io::Result<()> {
    writeln!(out)?;
    combatant_line(out, &state.opponent, color_enabled)?;
    combatant_line(out, &state.player, color_enabled)
}

fn combatant_line(out: &mut impl Write, combatant: &Combatant, color_enabled: bool) -> io::Result<()> {
    write!(out, "{:<12} ", combatant.name)?;
    print_colored(
        out,
        &format!("[{:<8}] ", combatant.element.label()),
        element_color(combatant.element),
        color_enabled,
    )?;
    let fraction = combatant.health_fraction();
    let filled = (fraction * HEALTH_BAR_CELLS as f32).round() as usize;
    let bar = format!(
        "[{}{}]",
        "#".repeat(filled),
        " ".repeat(HEALTH_BAR_CELLS - filled)
    );
    write!(out, "HP ")?;
    print_colored(out, &bar, health_color(fraction), color_enabled)?;
    writeln!(out, " {}/{}", combatant.current_health, combatant.max_health)
}

/// Print one narration line per event, pausing between lines to pace the
/// exchange the way the original game did.
pub fn narrate(
    out: &mut impl Write,
    events: &[BattleEvent],
    delay: Duration,
    color_enabled: bool,
) -> io::Result<()> {
    for event in events {
        match event {
            BattleEvent::TurnStart { turn_number } => {
                writeln!(out, "\n--- Turn {turn_number} ---")?;
            }
            BattleEvent::MoveUsed {
                attacker_name,
                move_name,
                move_element,
                ..
            } => {
                print_colored(
                    out,
                    &format!("{attacker_name} used {move_name}!\n"),
                    element_color(*move_element),
                    color_enabled,
                )?;
            }
            BattleEvent::DamageDealt {
                target_name,
                damage,
                effectiveness,
                new_health,
                max_health,
                ..
            } => {
                writeln!(
                    out,
                    "{target_name} took {damage} damage ({new_health}/{max_health} HP left)."
                )?;
                if *effectiveness > 1.0 {
                    print_colored(out, "It's super effective!\n", Color::Red, color_enabled)?;
                } else if *effectiveness < 1.0 {
                    print_colored(
                        out,
                        "It's not very effective...\n",
                        Color::DarkGrey,
                        color_enabled,
                    )?;
                }
            }
            BattleEvent::CombatantDefeated { target_name, .. } => {
                writeln!(out, "{target_name} fainted!")?;
            }
            // The end screen narrates the outcome.
            BattleEvent::BattleEnd { .. } => {}
        }
        out.flush()?;
        thread::sleep(delay);
    }
    Ok(())
}

pub fn end_screen(
    out: &mut impl Write,
    outcome: BattleOutcome,
    state: &BattleState,
    color_enabled: bool,
) -> io::Result<()> {
    writeln!(out)?;
    match outcome {
        BattleOutcome::Victory => {
            print_colored(out, "*** VICTORY ***\n", Color::Green, color_enabled)?;
            writeln!(out, "You defeated {}!", state.opponent.name)
        }
        BattleOutcome::Defeat => {
            print_colored(out, "*** DEFEAT ***\n", Color::Red, color_enabled)?;
            writeln!(out, "{} was defeated...", state.player.name)
        }
    }
}
