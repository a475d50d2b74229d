pub mod render;

use std::io::{self, Write};

use tracing::{error, info};

use crate::combat::logic;
use crate::combat::state::Combatant;
use crate::combat::{BattleState, MoveSelector, RandomSelector};
use crate::config::Config;
use crate::species::SpeciesCatalog;

/// A move selection already made at the console prompt, handed to the
/// battle loop through the selector capability.
struct ChosenMove(usize);

impl MoveSelector for ChosenMove {
    fn select_move(&mut self, _combatant: &Combatant) -> usize {
        self.0
    }
}

/// Interactive console session: menus, battle screen, play-again loop.
pub struct ConsoleApp {
    config: Config,
    catalog: SpeciesCatalog,
}

impl ConsoleApp {
    pub fn new(config: Config, catalog: SpeciesCatalog) -> Self {
        ConsoleApp { config, catalog }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let mut out = io::stdout();
        let color = self.config.display.color_enabled;

        render::banner(&mut out, color)?;
        let player_name = match self.prompt_player_name(&mut out)? {
            Some(name) => name,
            None => return Ok(()),
        };
        writeln!(out, "Good luck, {player_name}!")?;

        loop {
            let Some(species_name) = self.prompt_species_choice(&mut out)? else {
                break;
            };
            let player = match self.catalog.create_combatant(&species_name) {
                Ok(player) => player,
                Err(err) => {
                    // Menu entries come straight from the catalog, so this
                    // only fires if the catalog changed under us.
                    error!("Failed to create combatant: {err}");
                    continue;
                }
            };
            let opponent_species = self.catalog.choose_opponent(&player).to_string();
            let opponent = match self.catalog.create_combatant(&opponent_species) {
                Ok(opponent) => opponent,
                Err(err) => {
                    error!("Failed to create opponent: {err}");
                    continue;
                }
            };

            writeln!(out, "\nA rival {} wants to fight!", opponent.name)?;
            self.run_battle_session(&mut out, player, opponent)?;

            if !self.prompt_play_again(&mut out)? {
                break;
            }
        }

        writeln!(out, "Thanks for playing, {player_name}!")
    }

    fn run_battle_session(
        &self,
        out: &mut impl Write,
        player: Combatant,
        opponent: Combatant,
    ) -> io::Result<()> {
        let mut state = BattleState::new(player, opponent);
        info!(
            "Starting battle {}: {} vs {}",
            state.battle_id, state.player.name, state.opponent.name
        );

        let mut opponent_selector = RandomSelector::new();
        let delay = self.config.narration_delay();
        let color = self.config.display.color_enabled;

        while !state.is_finished() {
            render::battle_status(out, &state, color)?;
            let Some(move_index) = self.prompt_move_choice(out, &state.player)? else {
                writeln!(out, "Input closed; leaving the battle.")?;
                return Ok(());
            };
            let events = logic::process_turn(
                &mut state,
                &mut ChosenMove(move_index),
                &mut opponent_selector,
            );
            render::narrate(out, &events, delay, color)?;
        }

        if let Some(outcome) = state.outcome() {
            info!("Battle {} finished: {:?}", state.battle_id, outcome);
            render::end_screen(out, outcome, &state, color)?;
        }
        Ok(())
    }

    fn prompt_player_name(&self, out: &mut impl Write) -> io::Result<Option<String>> {
        write!(out, "\nYour name [Ash]: ")?;
        out.flush()?;
        let Some(line) = read_line_trimmed()? else {
            return Ok(None);
        };
        if line.is_empty() {
            Ok(Some("Ash".to_string()))
        } else {
            Ok(Some(line))
        }
    }

    fn prompt_species_choice(&self, out: &mut impl Write) -> io::Result<Option<String>> {
        let color = self.config.display.color_enabled;
        writeln!(out, "\nChoose your combatant:")?;
        for (index, template) in self.catalog.templates().iter().enumerate() {
            write!(out, "  {}. {:<12} ", index + 1, template.name)?;
            render::print_colored(
                out,
                &format!("[{:<8}]", template.element.label()),
                render::element_color(template.element),
                color,
            )?;
            writeln!(out, " HP {}", template.max_health)?;
        }
        Ok(self
            .prompt_index(out, self.catalog.len())?
            .map(|index| self.catalog.templates()[index].name.clone()))
    }

    fn prompt_move_choice(
        &self,
        out: &mut impl Write,
        combatant: &Combatant,
    ) -> io::Result<Option<usize>> {
        let color = self.config.display.color_enabled;
        writeln!(out, "\nWhat will {} do?", combatant.name)?;
        for (index, attack) in combatant.moves.iter().enumerate() {
            write!(out, "  {}. {:<14} ", index + 1, attack.name)?;
            render::print_colored(
                out,
                &format!("[{:<8}]", attack.element.label()),
                render::element_color(attack.element),
                color,
            )?;
            writeln!(out, " power {}", attack.power)?;
        }
        self.prompt_index(out, combatant.moves.len())
    }

    /// Prompt until the user enters a number in `[1, max]`; a bad entry
    /// just re-prompts. Returns `None` when stdin is closed.
    fn prompt_index(&self, out: &mut impl Write, max: usize) -> io::Result<Option<usize>> {
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = read_line_trimmed()? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(choice) if (1..=max).contains(&choice) => return Ok(Some(choice - 1)),
                _ => writeln!(out, "Enter a number between 1 and {max}.")?,
            }
        }
    }

    fn prompt_play_again(&self, out: &mut impl Write) -> io::Result<bool> {
        write!(out, "\nPlay again? [y/N] ")?;
        out.flush()?;
        let Some(line) = read_line_trimmed()? else {
            return Ok(false);
        };
        Ok(matches!(line.to_lowercase().as_str(), "y" | "yes"))
    }
}

/// Read one line from stdin; `None` when stdin has been closed.
fn read_line_trimmed() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
