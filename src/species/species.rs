use serde::{Deserialize, Serialize};

/// Element carried by a species or a move.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Fire,
    Grass,
    Electric,
    Normal,
}

impl ElementType {
    /// The element this one prevails over in the advantage cycle.
    ///
    /// The cycle is one-directional and intentionally partial: fire burns
    /// grass, grass grounds electric, electric shocks fire, and normal has
    /// no entry at all.
    pub fn prevails_over(self) -> Option<ElementType> {
        match self {
            ElementType::Fire => Some(ElementType::Grass),
            ElementType::Grass => Some(ElementType::Electric),
            ElementType::Electric => Some(ElementType::Fire),
            ElementType::Normal => None,
        }
    }

    /// Lowercase label used in menus and narration.
    pub fn label(self) -> &'static str {
        match self {
            ElementType::Fire => "fire",
            ElementType::Grass => "grass",
            ElementType::Electric => "electric",
            ElementType::Normal => "normal",
        }
    }

    /// All elements, in catalog display order.
    pub const ALL: [ElementType; 4] = [
        ElementType::Fire,
        ElementType::Grass,
        ElementType::Electric,
        ElementType::Normal,
    ];
}

/// A named, typed, fixed-power action. Immutable once constructed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub name: String,
    pub element: ElementType,
    pub power: u32,
}

/// Static template defining a species' battle properties.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SpeciesTemplate {
    pub name: String,
    pub element: ElementType,
    pub max_health: u32,
    pub moves: Vec<Move>,
}
