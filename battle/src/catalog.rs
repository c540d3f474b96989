//! Move repertoire catalog
//!
//! Maps species names to their usable moves. Keys are normalized once
//! when the catalog is built, so resolution is a single lookup rather
//! than repeated string munging. Unknown species are an explicit
//! [`Repertoire::Fallback`] variant, not a hidden default path.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::Move;

/// A resolved move set for one species
#[derive(Debug, Clone, PartialEq)]
pub enum Repertoire {
    /// Species-specific moves from the catalog
    Known(Vec<Move>),

    /// Generic default repertoire for names absent from the catalog
    Fallback(Vec<Move>),
}

impl Repertoire {
    pub fn moves(&self) -> &[Move] {
        match self {
            Repertoire::Known(moves) | Repertoire::Fallback(moves) => moves,
        }
    }

    pub fn into_moves(self) -> Vec<Move> {
        match self {
            Repertoire::Known(moves) | Repertoire::Fallback(moves) => moves,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Repertoire::Fallback(_))
    }
}

/// Species-to-moves table with normalized keys
#[derive(Debug, Clone, Default)]
pub struct MoveCatalog {
    table: HashMap<String, Vec<Move>>,
}

impl MoveCatalog {
    /// An empty catalog; every lookup resolves to the fallback set
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog covering the marketplace species
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (species, moves) in builtin_species() {
            catalog.insert(species, moves);
        }
        catalog
    }

    /// Register a species move set, keeping at most 4 moves
    pub fn insert(&mut self, species: &str, mut moves: Vec<Move>) {
        moves.truncate(4);
        self.table.insert(normalize_name(species), moves);
    }

    /// Resolve a species name to its repertoire
    ///
    /// Never fails and never returns an empty move list: unknown names
    /// get the fixed 4-move fallback set.
    pub fn resolve(&self, name: &str) -> Repertoire {
        match self.table.get(&normalize_name(name)) {
            Some(moves) if !moves.is_empty() => Repertoire::Known(moves.clone()),
            _ => Repertoire::Fallback(fallback_moves()),
        }
    }

    /// Number of species registered
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Shared built-in catalog, constructed on first use
pub fn builtin_catalog() -> &'static MoveCatalog {
    static CATALOG: OnceLock<MoveCatalog> = OnceLock::new();
    CATALOG.get_or_init(MoveCatalog::builtin)
}

/// Normalize a species name for table lookup: strip whitespace and
/// punctuation, map gender symbols to letters, lowercase
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            '♀' => Some('f'),
            '♂' => Some('m'),
            c if c.is_whitespace() => None,
            '\'' | '’' | '"' | '.' | ',' | '-' => None,
            c => Some(c.to_ascii_lowercase()),
        })
        .collect()
}

/// The generic default repertoire: a weak fast move, an equal-power
/// alternative, a mid-power reliable move, and a high-power low-accuracy
/// move
fn fallback_moves() -> Vec<Move> {
    vec![
        Move::new("fallback", "Tackle", "Normal", 40, 1.0, 8),
        Move::new("fallback", "Quick Attack", "Normal", 40, 1.0, 6),
        Move::new("fallback", "Slam", "Normal", 70, 0.9, 5),
        Move::new("fallback", "Hyper Beam", "Normal", 90, 0.85, 3),
    ]
}

fn builtin_species() -> Vec<(&'static str, Vec<Move>)> {
    // (name, kind, power, accuracy, pp)
    let species: &[(&str, &[(&str, &str, u32, f64, u32)])] = &[
        (
            "Pikachu",
            &[
                ("Thunder Shock", "Electric", 40, 1.0, 10),
                ("Quick Attack", "Normal", 40, 1.0, 8),
                ("Electro Ball", "Electric", 60, 0.9, 6),
                ("Thunderbolt", "Electric", 90, 0.85, 4),
            ],
        ),
        (
            "Charmander",
            &[
                ("Scratch", "Normal", 40, 1.0, 10),
                ("Ember", "Fire", 40, 1.0, 8),
                ("Flame Burst", "Fire", 70, 0.9, 5),
                ("Flamethrower", "Fire", 90, 0.85, 3),
            ],
        ),
        (
            "Bulbasaur",
            &[
                ("Tackle", "Normal", 40, 1.0, 10),
                ("Vine Whip", "Grass", 45, 1.0, 8),
                ("Razor Leaf", "Grass", 55, 0.95, 6),
                ("Solar Beam", "Grass", 120, 0.8, 2),
            ],
        ),
        (
            "Squirtle",
            &[
                ("Tackle", "Normal", 40, 1.0, 10),
                ("Water Gun", "Water", 40, 1.0, 8),
                ("Bubble Beam", "Water", 65, 0.9, 5),
                ("Hydro Pump", "Water", 110, 0.8, 2),
            ],
        ),
        (
            "Eevee",
            &[
                ("Tackle", "Normal", 40, 1.0, 10),
                ("Quick Attack", "Normal", 40, 1.0, 8),
                ("Swift", "Normal", 60, 1.0, 6),
                ("Take Down", "Normal", 90, 0.85, 4),
            ],
        ),
        (
            "Gengar",
            &[
                ("Lick", "Ghost", 30, 1.0, 10),
                ("Shadow Punch", "Ghost", 60, 1.0, 8),
                ("Shadow Ball", "Ghost", 80, 0.9, 5),
                ("Dream Eater", "Psychic", 100, 0.8, 3),
            ],
        ),
        (
            "Mewtwo",
            &[
                ("Confusion", "Psychic", 50, 1.0, 10),
                ("Psycho Cut", "Psychic", 70, 1.0, 8),
                ("Psychic", "Psychic", 90, 0.9, 5),
                ("Psystrike", "Psychic", 100, 0.85, 3),
            ],
        ),
        (
            "Arcanine",
            &[
                ("Bite", "Dark", 60, 1.0, 10),
                ("Flame Wheel", "Fire", 60, 1.0, 8),
                ("Fire Fang", "Fire", 65, 0.95, 6),
                ("Flare Blitz", "Fire", 120, 0.8, 2),
            ],
        ),
        (
            "Dragonite",
            &[
                ("Wing Attack", "Flying", 60, 1.0, 10),
                ("Dragon Breath", "Dragon", 60, 1.0, 8),
                ("Dragon Claw", "Dragon", 80, 0.95, 5),
                ("Hyper Beam", "Normal", 90, 0.85, 3),
            ],
        ),
    ];

    species
        .iter()
        .map(|(name, moves)| {
            let key = normalize_name(name);
            let moves = moves
                .iter()
                .map(|&(mv, kind, power, accuracy, pp)| {
                    Move::new(&key, mv, kind, power, accuracy, pp)
                })
                .collect();
            (*name, moves)
        })
        .collect()
}
