// grading.rs
// Optional grading layer: checks balanced formulas against a list of expected answers

use std::collections::HashSet;

use crate::formula::{self, BoardResult, NO_COMPOUND_TEXT};
use crate::ions::IonRegistry;

pub const INVALID_COMBINATION_PREFIX: &str = "Invalid combination: ";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormulaWhitelist {
    formulas: HashSet<String>,
}

impl FormulaWhitelist {
    pub fn new<I, S>(formulas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formulas: formulas.into_iter().map(Into::into).collect(),
        }
    }

    /// One expected answer per cation/anion pairing in the registry.
    pub fn from_registry(registry: &IonRegistry) -> Self {
        let formulas = registry
            .cations()
            .flat_map(|cation| {
                registry
                    .anions()
                    .map(move |anion| formula::balanced_pair_formula(cation, anion))
            })
            .collect();
        Self { formulas }
    }

    pub fn contains(&self, formula: &str) -> bool {
        self.formulas.contains(formula)
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    pub fn grade(&self, result: &BoardResult) -> GradeReport {
        let formulas: Vec<&str> = result.balanced_formulas().collect();
        if formulas.is_empty() {
            return GradeReport {
                is_valid: false,
                message: NO_COMPOUND_TEXT.to_string(),
            };
        }
        if !formulas.iter().any(|f| self.contains(f)) {
            return GradeReport {
                is_valid: false,
                message: format!("{}{}", INVALID_COMBINATION_PREFIX, formulas.join(", ")),
            };
        }
        GradeReport {
            is_valid: true,
            message: formulas.join(" + "),
        }
    }
}

impl<S: Into<String>> Extend<S> for FormulaWhitelist {
    fn extend<I: IntoIterator<Item = S>>(&mut self, formulas: I) {
        self.formulas.extend(formulas.into_iter().map(Into::into));
    }
}

/// Verdict of the grading layer, shown to the player instead of the raw result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeReport {
    pub is_valid: bool,
    pub message: String,
}
