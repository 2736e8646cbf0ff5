// formula.rs
// Formula synthesizer: tallies a compound, checks charge balance and renders its formula

use std::collections::HashMap;
use std::fmt::Write;

use crate::ions::{IonDefinition, Polarity};
use crate::partition::{self, Compound};
use crate::piece::{PieceId, PlacedIon};

pub const NO_COMPOUND_TEXT: &str = "No compound formed yet";
pub const UNBALANCED_PREFIX: &str = "Unbalanced: ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TallyEntry {
    pub symbol: String,
    pub polarity: Polarity,
    pub charge: u32,
    pub count: u32,
}

/// Per-symbol counts in first-encountered order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IonTally {
    entries: Vec<TallyEntry>,
}

impl IonTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, definition: &IonDefinition, count: u32) {
        match self.entries.iter_mut().find(|e| e.symbol == definition.symbol) {
            Some(entry) => entry.count += count,
            None => self.entries.push(TallyEntry {
                symbol: definition.symbol.clone(),
                polarity: definition.polarity,
                charge: definition.charge_magnitude,
                count,
            }),
        }
    }

    pub fn from_compound(compound: &Compound, pieces: &[PlacedIon]) -> Self {
        let by_id: HashMap<PieceId, &PlacedIon> = pieces.iter().map(|p| (p.id, p)).collect();
        let mut tally = Self::new();
        for id in &compound.members {
            if let Some(piece) = by_id.get(id) {
                tally.add(&piece.definition, 1);
            }
        }
        tally
    }

    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    fn total(&self, polarity: Polarity) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.polarity == polarity)
            .map(|e| e.count * e.charge)
            .sum()
    }

    pub fn total_positive(&self) -> u32 {
        self.total(Polarity::Cation)
    }

    pub fn total_negative(&self) -> u32 {
        self.total(Polarity::Anion)
    }

    pub fn is_balanced(&self) -> bool {
        self.total_positive() == self.total_negative()
    }

    /// Cations first, then anions, each in first-encountered order.
    pub fn render(&self) -> String {
        let mut text = String::new();
        for entry in self.entries.iter().filter(|e| e.polarity == Polarity::Cation) {
            push_term(&mut text, &entry.symbol, entry.count, false);
        }
        for entry in self.entries.iter().filter(|e| e.polarity == Polarity::Anion) {
            let parenthesize = entry.count > 1 && is_polyatomic(&entry.symbol);
            push_term(&mut text, &entry.symbol, entry.count, parenthesize);
        }
        text
    }
}

fn push_term(text: &mut String, symbol: &str, count: u32, parenthesize: bool) {
    if parenthesize {
        let _ = write!(text, "({})", symbol);
    } else {
        text.push_str(symbol);
    }
    if count > 1 {
        let _ = write!(text, "{}", count);
    }
}

/// True when the symbol names more than one atom: it carries a digit or
/// more than one element (capital letter). `PO4` and `OH` are polyatomic,
/// `Cl` is not.
pub fn is_polyatomic(symbol: &str) -> bool {
    symbol.chars().any(|c| c.is_ascii_digit())
        || symbol.chars().filter(|c| c.is_ascii_uppercase()).count() > 1
}

pub fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Smallest neutral formula for one cation and one anion.
pub fn balanced_pair_formula(cation: &IonDefinition, anion: &IonDefinition) -> String {
    let divisor = gcd(cation.charge_magnitude, anion.charge_magnitude).max(1);
    let mut tally = IonTally::new();
    tally.add(cation, anion.charge_magnitude / divisor);
    tally.add(anion, cation.charge_magnitude / divisor);
    tally.render()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormulaResult {
    pub balanced: bool,
    pub text: String,
}

pub fn synthesize(compound: &Compound, pieces: &[PlacedIon]) -> FormulaResult {
    let tally = IonTally::from_compound(compound, pieces);
    FormulaResult {
        balanced: tally.is_balanced(),
        text: tally.render(),
    }
}

/// Aggregate result for the whole board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardResult {
    /// At least one compound on the board is charge balanced
    pub is_valid: bool,
    pub display_text: String,
    /// Per-compound results in discovery order
    pub compounds: Vec<FormulaResult>,
}

impl Default for BoardResult {
    fn default() -> Self {
        Self::from_compounds(Vec::new())
    }
}

impl BoardResult {
    pub fn from_compounds(compounds: Vec<FormulaResult>) -> Self {
        let balanced: Vec<&str> = compounds
            .iter()
            .filter(|c| c.balanced)
            .map(|c| c.text.as_str())
            .collect();
        let unbalanced: Vec<&str> = compounds
            .iter()
            .filter(|c| !c.balanced)
            .map(|c| c.text.as_str())
            .collect();

        let display_text = match (balanced.is_empty(), unbalanced.is_empty()) {
            (true, true) => NO_COMPOUND_TEXT.to_string(),
            (false, true) => balanced.join(" + "),
            (true, false) => format!("{}{}", UNBALANCED_PREFIX, unbalanced.join(", ")),
            (false, false) => format!(
                "{} | {}{}",
                balanced.join(" + "),
                UNBALANCED_PREFIX,
                unbalanced.join(", ")
            ),
        };

        Self {
            is_valid: !balanced.is_empty(),
            display_text,
            compounds,
        }
    }

    pub fn balanced_formulas(&self) -> impl Iterator<Item = &str> {
        self.compounds
            .iter()
            .filter(|c| c.balanced)
            .map(|c| c.text.as_str())
    }
}

/// Partition the bonded pieces and synthesize a formula for each compound.
pub fn evaluate(pieces: &[PlacedIon]) -> BoardResult {
    let compounds = partition::partition(pieces)
        .iter()
        .map(|compound| synthesize(compound, pieces))
        .collect();
    BoardResult::from_compounds(compounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ions::ION_REGISTRY;

    fn tally(parts: &[(&str, u32)]) -> IonTally {
        let mut tally = IonTally::new();
        for (symbol, count) in parts {
            tally.add(&ION_REGISTRY.lookup(symbol).unwrap(), *count);
        }
        tally
    }

    fn pair(cation: &str, anion: &str) -> String {
        balanced_pair_formula(
            &ION_REGISTRY.lookup(cation).unwrap(),
            &ION_REGISTRY.lookup(anion).unwrap(),
        )
    }

    #[test]
    fn pair_subscripts_follow_reduced_charges() {
        assert_eq!(pair("Na", "Cl"), "NaCl");
        assert_eq!(pair("Na", "PO4"), "Na3PO4");
        assert_eq!(pair("Al", "PO4"), "AlPO4");
        assert_eq!(pair("Ba", "Cl"), "BaCl2");
        assert_eq!(pair("Ba", "CO3"), "BaCO3");
        assert_eq!(pair("Al", "CO3"), "Al2(CO3)3");
        assert_eq!(pair("Ba", "PO4"), "Ba3(PO4)2");
        assert_eq!(pair("Al", "Cl"), "AlCl3");
        assert_eq!(pair("Na", "SO4"), "Na2SO4");
    }

    #[test]
    fn every_registry_pair_balances() {
        for cation in ION_REGISTRY.cations() {
            for anion in ION_REGISTRY.anions() {
                let divisor = gcd(cation.charge_magnitude, anion.charge_magnitude);
                let mut t = IonTally::new();
                t.add(cation, anion.charge_magnitude / divisor);
                t.add(anion, cation.charge_magnitude / divisor);
                assert!(t.is_balanced(), "{} + {}", cation.symbol, anion.symbol);
            }
        }
    }

    #[test]
    fn polyatomic_anions_get_parentheses_only_when_repeated() {
        assert_eq!(tally(&[("Al", 2), ("PO4", 3)]).render(), "Al2(PO4)3");
        assert_eq!(tally(&[("Ba", 1), ("Cl", 2)]).render(), "BaCl2");
        assert_eq!(tally(&[("Na", 2), ("CO3", 1)]).render(), "Na2CO3");
    }

    #[test]
    fn cations_render_before_anions_regardless_of_tally_order() {
        assert_eq!(tally(&[("Cl", 1), ("Na", 1)]).render(), "NaCl");
        assert_eq!(tally(&[("Cl", 3), ("Na", 1), ("Ba", 1)]).render(), "NaBaCl3");
    }

    #[test]
    fn polyatomic_detection() {
        assert!(is_polyatomic("PO4"));
        assert!(is_polyatomic("CO3"));
        assert!(is_polyatomic("OH"));
        assert!(!is_polyatomic("Cl"));
        assert!(!is_polyatomic("O"));
    }

    #[test]
    fn charge_totals() {
        let t = tally(&[("Al", 1), ("PO4", 3)]);
        assert_eq!(t.total_positive(), 3);
        assert_eq!(t.total_negative(), 9);
        assert!(!t.is_balanced());
        let t = tally(&[("Al", 2), ("PO4", 3)]);
        assert_eq!((t.total_positive(), t.total_negative()), (6, 9));
        assert!(!t.is_balanced());
        assert!(tally(&[("Al", 2), ("SO4", 3)]).is_balanced());
        let t = tally(&[("Na", 1), ("CO3", 1)]);
        assert!(!t.is_balanced());
        assert_eq!(t.render(), "NaCO3");
    }

    #[test]
    fn board_text_for_mixed_results() {
        let ok = FormulaResult { balanced: true, text: "NaCl".to_string() };
        let ok2 = FormulaResult { balanced: true, text: "BaCl2".to_string() };
        let bad = FormulaResult { balanced: false, text: "NaCO3".to_string() };

        let empty = BoardResult::default();
        assert!(!empty.is_valid);
        assert_eq!(empty.display_text, NO_COMPOUND_TEXT);

        let both = BoardResult::from_compounds(vec![ok.clone(), ok2.clone()]);
        assert!(both.is_valid);
        assert_eq!(both.display_text, "NaCl + BaCl2");

        let only_bad = BoardResult::from_compounds(vec![bad.clone()]);
        assert!(!only_bad.is_valid);
        assert_eq!(only_bad.display_text, "Unbalanced: NaCO3");

        let mixed = BoardResult::from_compounds(vec![bad, ok]);
        assert!(mixed.is_valid);
        assert_eq!(mixed.display_text, "NaCl | Unbalanced: NaCO3");
        assert_eq!(mixed.balanced_formulas().collect::<Vec<_>>(), vec!["NaCl"]);
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(3, 2), 1);
        assert_eq!(gcd(2, 2), 2);
        assert_eq!(gcd(3, 3), 3);
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(5, 0), 5);
    }
}
