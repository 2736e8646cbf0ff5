// init_config.rs
// Handles loading and parsing the starting board from init_config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use ultraviolet::Vec2;

use crate::config::PuzzleConfig;
use crate::error::PuzzleError;
use crate::grading::FormulaWhitelist;
use crate::ions::IonRegistry;

pub const DEFAULT_INIT_CONFIG: &str = "init_config.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitConfig {
    pub board: Option<BoardConfig>,
    #[serde(default)]
    pub pieces: Vec<PieceConfig>,
    #[serde(default)]
    pub random: Vec<RandomConfig>,
    #[serde(default)]
    pub drags: Vec<DragConfig>,
    pub grading: Option<GradingConfig>,
}

/// Overrides for the board defaults in `config.rs`. Omitted fields keep the default.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BoardConfig {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub snap_threshold: Option<f32>,
    pub piece_width: Option<f32>,
    pub piece_height: Option<f32>,
    pub snap_on_drag: Option<bool>,
}

impl BoardConfig {
    pub fn apply_to(&self, config: &mut PuzzleConfig) {
        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(threshold) = self.snap_threshold {
            config.snap_threshold = threshold;
        }
        if let Some(w) = self.piece_width {
            config.piece_size.x = w;
        }
        if let Some(h) = self.piece_height {
            config.piece_size.y = h;
        }
        if let Some(snap) = self.snap_on_drag {
            config.snap_on_drag = snap;
        }
    }
}

/// A single piece. Without coordinates it goes to the spawn point for its polarity.
#[derive(Debug, Deserialize, Serialize)]
pub struct PieceConfig {
    pub symbol: String,
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl PieceConfig {
    pub fn position(&self) -> Option<Vec2> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Vec2::new(x, y)),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RandomConfig {
    pub count: usize,
    pub symbol: String,
    /// Fixed seed for reproducible scatters
    pub seed: Option<u64>,
}

/// A scripted drag from one board point to another.
#[derive(Debug, Deserialize, Serialize)]
pub struct DragConfig {
    pub from: [f32; 2],
    pub to: [f32; 2],
    /// Intermediate pointer samples between `from` and `to`
    #[serde(default)]
    pub steps: usize,
}

impl DragConfig {
    /// Pointer positions after the pick, ending exactly at `to`.
    pub fn path(&self) -> Vec<Vec2> {
        let from = Vec2::new(self.from[0], self.from[1]);
        let to = Vec2::new(self.to[0], self.to[1]);
        let segments = self.steps + 1;
        (1..=segments)
            .map(|i| {
                if i == segments {
                    to
                } else {
                    from + (to - from) * (i as f32 / segments as f32)
                }
            })
            .collect()
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GradingConfig {
    #[serde(default)]
    pub whitelist: Vec<String>,
    /// Accept the balanced pair formula of every cation/anion in the catalog
    #[serde(default)]
    pub from_registry: bool,
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PuzzleError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, PuzzleError> {
        let config: InitConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, PuzzleError> {
        Self::load_from_file(DEFAULT_INIT_CONFIG)
    }

    /// Board parameters with overrides applied.
    pub fn puzzle_config(&self) -> Result<PuzzleConfig, PuzzleError> {
        let mut config = PuzzleConfig::default();
        if let Some(board) = &self.board {
            board.apply_to(&mut config);
        }
        let positive = [
            ("board.width", config.board_width),
            ("board.height", config.board_height),
            ("board.snap_threshold", config.snap_threshold),
            ("board.piece_width", config.piece_size.x),
            ("board.piece_height", config.piece_size.y),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(PuzzleError::Config(format!("{} must be positive, got {}", name, value)));
            }
        }
        Ok(config)
    }

    /// Check every symbol against the catalog and every piece for complete coordinates.
    pub fn validate(&self, registry: &IonRegistry) -> Result<(), PuzzleError> {
        for piece in &self.pieces {
            registry.lookup(&piece.symbol)?;
            if piece.x.is_some() != piece.y.is_some() {
                return Err(PuzzleError::Config(format!(
                    "piece {} needs both x and y, or neither",
                    piece.symbol
                )));
            }
        }
        for random in &self.random {
            registry.lookup(&random.symbol)?;
        }
        Ok(())
    }

    /// The grading whitelist, when a `[grading]` table is present.
    pub fn whitelist(&self, registry: &IonRegistry) -> Option<FormulaWhitelist> {
        let grading = self.grading.as_ref()?;
        let mut whitelist = if grading.from_registry {
            FormulaWhitelist::from_registry(registry)
        } else {
            FormulaWhitelist::default()
        };
        whitelist.extend(grading.whitelist.iter().cloned());
        Some(whitelist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ions::ION_REGISTRY;

    const SAMPLE: &str = r#"
        [board]
        width = 1000.0
        snap_on_drag = false

        [[pieces]]
        symbol = "Na"
        x = 100.0
        y = 100.0

        [[pieces]]
        symbol = "Cl"

        [[random]]
        count = 3
        symbol = "SO4"
        seed = 7

        [[drags]]
        from = [600.0, 250.0]
        to = [220.0, 100.0]
        steps = 3

        [grading]
        whitelist = ["NaCl"]
    "#;

    #[test]
    fn sample_parses() {
        let init = InitConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(init.pieces.len(), 2);
        assert_eq!(init.pieces[0].position(), Some(Vec2::new(100.0, 100.0)));
        assert_eq!(init.pieces[1].position(), None);
        assert_eq!(init.random[0].count, 3);
        assert_eq!(init.random[0].seed, Some(7));
        init.validate(&ION_REGISTRY).unwrap();

        let config = init.puzzle_config().unwrap();
        assert_eq!(config.board_width, 1000.0);
        assert_eq!(config.board_height, crate::config::BOARD_HEIGHT);
        assert!(!config.snap_on_drag);
    }

    #[test]
    fn empty_file_gives_defaults() {
        let init = InitConfig::from_toml_str("").unwrap();
        assert_eq!(init.puzzle_config().unwrap(), PuzzleConfig::default());
        assert!(init.whitelist(&ION_REGISTRY).is_none());
    }

    #[test]
    fn drag_path_ends_on_target() {
        let drag = DragConfig { from: [0.0, 0.0], to: [40.0, 0.0], steps: 3 };
        assert_eq!(
            drag.path(),
            vec![
                Vec2::new(10.0, 0.0),
                Vec2::new(20.0, 0.0),
                Vec2::new(30.0, 0.0),
                Vec2::new(40.0, 0.0),
            ]
        );
        let direct = DragConfig { from: [0.0, 0.0], to: [5.0, 5.0], steps: 0 };
        assert_eq!(direct.path(), vec![Vec2::new(5.0, 5.0)]);
    }

    #[test]
    fn whitelist_sources_combine() {
        let init = InitConfig::from_toml_str(
            "[grading]\nwhitelist = [\"Na2Cl2\"]\nfrom_registry = true\n",
        )
        .unwrap();
        let whitelist = init.whitelist(&ION_REGISTRY).unwrap();
        assert_eq!(whitelist.len(), 13);
        assert!(whitelist.contains("Na2Cl2"));
        assert!(whitelist.contains("Ba3(PO4)2"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let unknown = InitConfig::from_toml_str("[[pieces]]\nsymbol = \"Xx\"\n").unwrap();
        assert!(matches!(
            unknown.validate(&ION_REGISTRY),
            Err(PuzzleError::UnknownSymbol(_))
        ));

        let half = InitConfig::from_toml_str("[[pieces]]\nsymbol = \"Na\"\nx = 3.0\n").unwrap();
        assert!(matches!(half.validate(&ION_REGISTRY), Err(PuzzleError::Config(_))));

        let negative = InitConfig::from_toml_str("[board]\nsnap_threshold = -1.0\n").unwrap();
        assert!(matches!(negative.puzzle_config(), Err(PuzzleError::Config(_))));

        assert!(matches!(
            InitConfig::from_toml_str("[[pieces]]\nx = 1.0\n"),
            Err(PuzzleError::Parse(_))
        ));
    }
}
