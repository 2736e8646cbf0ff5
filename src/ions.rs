// ions.rs
// Ion registry: the fixed catalog of cations and anions that can be placed on the board

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;

const DEFAULT_CATALOG: &str = include_str!("../ions.toml");

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Cation,
    Anion,
}

impl Polarity {
    pub fn sign(self) -> char {
        match self {
            Polarity::Cation => '+',
            Polarity::Anion => '-',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IonDefinition {
    pub symbol: String,
    pub display_name: String,
    /// Absolute charge; also the number of connector points on the piece.
    pub charge_magnitude: u32,
    pub polarity: Polarity,
    pub color: [u8; 4],
}

impl IonDefinition {
    pub fn is_cation(&self) -> bool {
        self.polarity == Polarity::Cation
    }

    pub fn is_anion(&self) -> bool {
        self.polarity == Polarity::Anion
    }

    /// Signed charge, e.g. `-3` for phosphate.
    pub fn signed_charge(&self) -> i32 {
        match self.polarity {
            Polarity::Cation => self.charge_magnitude as i32,
            Polarity::Anion => -(self.charge_magnitude as i32),
        }
    }
}

impl fmt::Display for IonDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}{}{})",
            self.symbol,
            self.display_name,
            self.polarity.sign(),
            self.charge_magnitude
        )
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cations: Vec<CatalogEntry>,
    #[serde(default)]
    anions: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    symbol: String,
    name: String,
    charge: u32,
    #[serde(default = "default_color")]
    color: [u8; 4],
}

fn default_color() -> [u8; 4] {
    [255, 255, 255, 255]
}

/// Read-only lookup table of ion definitions, in catalog order.
#[derive(Clone, Debug)]
pub struct IonRegistry {
    definitions: Vec<Arc<IonDefinition>>,
    by_symbol: HashMap<String, usize>,
}

impl IonRegistry {
    pub fn from_toml_str(content: &str) -> Result<Self, PuzzleError> {
        let catalog: CatalogFile = toml::from_str(content)?;
        let entries = catalog
            .cations
            .into_iter()
            .map(|entry| (entry, Polarity::Cation))
            .chain(catalog.anions.into_iter().map(|entry| (entry, Polarity::Anion)));

        let mut definitions = Vec::new();
        let mut by_symbol = HashMap::new();
        for (entry, polarity) in entries {
            let symbol = entry.symbol.trim().to_string();
            if symbol.is_empty() {
                return Err(PuzzleError::Catalog("ion with empty symbol".to_string()));
            }
            if entry.charge == 0 {
                return Err(PuzzleError::Catalog(format!(
                    "ion {} must have a charge of at least 1",
                    symbol
                )));
            }
            if by_symbol.contains_key(&symbol) {
                return Err(PuzzleError::Catalog(format!("duplicate ion symbol {}", symbol)));
            }
            by_symbol.insert(symbol.clone(), definitions.len());
            definitions.push(Arc::new(IonDefinition {
                symbol,
                display_name: entry.name,
                charge_magnitude: entry.charge,
                polarity,
                color: entry.color,
            }));
        }
        Ok(Self {
            definitions,
            by_symbol,
        })
    }

    pub fn lookup(&self, symbol: &str) -> Result<Arc<IonDefinition>, PuzzleError> {
        self.by_symbol
            .get(symbol)
            .map(|&idx| Arc::clone(&self.definitions[idx]))
            .ok_or_else(|| PuzzleError::UnknownSymbol(symbol.to_string()))
    }

    pub fn definitions(&self) -> &[Arc<IonDefinition>] {
        &self.definitions
    }

    pub fn cations(&self) -> impl Iterator<Item = &Arc<IonDefinition>> {
        self.definitions.iter().filter(|def| def.is_cation())
    }

    pub fn anions(&self) -> impl Iterator<Item = &Arc<IonDefinition>> {
        self.definitions.iter().filter(|def| def.is_anion())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// The built-in catalog shipped with the puzzle.
pub static ION_REGISTRY: Lazy<IonRegistry> = Lazy::new(|| {
    IonRegistry::from_toml_str(DEFAULT_CATALOG).expect("embedded ions.toml is valid")
});
