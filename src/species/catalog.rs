use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combat::state::Combatant;
use crate::species::SpeciesTemplate;

/// Default catalog compiled into the binary, used when no catalog file is
/// available on disk.
const BUILTIN_CATALOG: &str = include_str!("../../resources/species.json");

/// On-disk layout of the species catalog file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SpeciesCatalogFile {
    pub species: Vec<SpeciesTemplate>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown species: {0}")]
    UnknownSpecies(String),
    #[error("failed to read species catalog {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse species catalog")]
    Parse(#[from] serde_json::Error),
    #[error("species catalog has no entries")]
    EmptyCatalog,
    #[error("duplicate species entry: {0}")]
    DuplicateSpecies(String),
    #[error("invalid species {species}: {reason}")]
    InvalidTemplate {
        species: String,
        reason: &'static str,
    },
}

/// Read-only repository of species templates, loaded once at startup.
#[derive(Debug, Clone)]
pub struct SpeciesCatalog {
    templates: Vec<SpeciesTemplate>,
}

impl SpeciesCatalog {
    /// Load and validate a catalog from a JSON file.
    pub fn from_path(path: &str) -> Result<Self, CatalogError> {
        let file = File::open(Path::new(path)).map_err(|source| CatalogError::Io {
            path: path.to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        let catalog_file: SpeciesCatalogFile = serde_json::from_reader(reader)?;
        Self::from_templates(catalog_file.species)
    }

    /// The catalog shipped inside the binary.
    pub fn builtin() -> Self {
        let catalog_file: SpeciesCatalogFile =
            serde_json::from_str(BUILTIN_CATALOG).expect("built-in species catalog is valid JSON");
        Self::from_templates(catalog_file.species)
            .expect("built-in species catalog passes validation")
    }

    /// Build a catalog from templates, rejecting entries a battle could not
    /// use: zero health, an empty move list, or a zero-power move.
    pub fn from_templates(templates: Vec<SpeciesTemplate>) -> Result<Self, CatalogError> {
        if templates.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for (index, template) in templates.iter().enumerate() {
            if templates[..index].iter().any(|t| t.name == template.name) {
                return Err(CatalogError::DuplicateSpecies(template.name.clone()));
            }
            if template.max_health == 0 {
                return Err(CatalogError::InvalidTemplate {
                    species: template.name.clone(),
                    reason: "max health must be positive",
                });
            }
            if template.moves.is_empty() {
                return Err(CatalogError::InvalidTemplate {
                    species: template.name.clone(),
                    reason: "move list must not be empty",
                });
            }
            if template.moves.iter().any(|m| m.power == 0) {
                return Err(CatalogError::InvalidTemplate {
                    species: template.name.clone(),
                    reason: "move power must be positive",
                });
            }
        }
        Ok(SpeciesCatalog { templates })
    }

    /// Look up a template by species name.
    pub fn get(&self, species_name: &str) -> Option<&SpeciesTemplate> {
        self.templates.iter().find(|t| t.name == species_name)
    }

    /// Build a combatant at full health from the named species.
    pub fn create_combatant(&self, species_name: &str) -> Result<Combatant, CatalogError> {
        let template = self
            .get(species_name)
            .ok_or_else(|| CatalogError::UnknownSpecies(species_name.to_string()))?;
        Ok(Combatant::from_template(template))
    }

    /// Pick an opponent species at random, avoiding the player's own species
    /// whenever the catalog has any other entry.
    pub fn choose_opponent(&self, player: &Combatant) -> &str {
        let mut rng = rand::thread_rng();
        let candidates: Vec<&SpeciesTemplate> = self
            .templates
            .iter()
            .filter(|t| t.name != player.name)
            .collect();
        let template = candidates
            .choose(&mut rng)
            .copied()
            .or_else(|| self.templates.first())
            .expect("species catalog is never empty");
        &template.name
    }

    /// Species names in catalog order, for selection menus.
    pub fn species_names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.name.as_str())
    }

    /// All templates in catalog order.
    pub fn templates(&self) -> &[SpeciesTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::{ElementType, Move};

    fn template(name: &str, element: ElementType) -> SpeciesTemplate {
        SpeciesTemplate {
            name: name.to_string(),
            element,
            max_health: 50,
            moves: vec![Move {
                name: "Placaje".to_string(),
                element: ElementType::Normal,
                power: 30,
            }],
        }
    }

    #[test]
    fn builtin_catalog_has_the_three_default_species() {
        let catalog = SpeciesCatalog::builtin();
        let names: Vec<&str> = catalog.species_names().collect();
        assert_eq!(names, vec!["Pikachu", "Bulbasaur", "Charmander"]);
    }

    #[test]
    fn create_combatant_starts_at_full_health() {
        let catalog = SpeciesCatalog::builtin();
        let combatant = catalog.create_combatant("Bulbasaur").unwrap();
        assert_eq!(combatant.max_health, 110);
        assert_eq!(combatant.current_health, 110);
        assert_eq!(combatant.element, ElementType::Grass);
        assert_eq!(combatant.moves.len(), 3);
    }

    #[test]
    fn unknown_species_is_an_error() {
        let catalog = SpeciesCatalog::builtin();
        let err = catalog.create_combatant("Mewtwo").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSpecies(name) if name == "Mewtwo"));
    }

    #[test]
    fn opponent_choice_avoids_the_player_species() {
        let catalog = SpeciesCatalog::builtin();
        let player = catalog.create_combatant("Pikachu").unwrap();
        for _ in 0..50 {
            assert_ne!(catalog.choose_opponent(&player), "Pikachu");
        }
    }

    #[test]
    fn opponent_choice_falls_back_to_the_only_species() {
        let catalog =
            SpeciesCatalog::from_templates(vec![template("Solo", ElementType::Fire)]).unwrap();
        let player = catalog.create_combatant("Solo").unwrap();
        assert_eq!(catalog.choose_opponent(&player), "Solo");
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = SpeciesCatalog::from_templates(Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCatalog));
    }

    #[test]
    fn duplicate_species_are_rejected() {
        let err = SpeciesCatalog::from_templates(vec![
            template("Twin", ElementType::Fire),
            template("Twin", ElementType::Grass),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSpecies(name) if name == "Twin"));
    }

    #[test]
    fn zero_power_moves_are_rejected() {
        let mut bad = template("Weakling", ElementType::Normal);
        bad.moves[0].power = 0;
        let err = SpeciesCatalog::from_templates(vec![bad]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidTemplate { species, .. } if species == "Weakling"
        ));
    }

    #[test]
    fn empty_move_list_is_rejected() {
        let mut bad = template("Pacifist", ElementType::Normal);
        bad.moves.clear();
        let err = SpeciesCatalog::from_templates(vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidTemplate { .. }));
    }
}
