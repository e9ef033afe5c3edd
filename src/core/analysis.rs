// analysis.rs - Genetic models and run-level analysis settings

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default FBAT offset: equal and opposite weight for cases and controls
pub const DEFAULT_OFFSET: f64 = 0.5;

/// Genetic model selecting which coefficient column a category contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneticModel {
    Additive,
    Dominant,
    Recessive,
}

impl GeneticModel {
    pub const ALL: [GeneticModel; 3] = [
        GeneticModel::Additive,
        GeneticModel::Dominant,
        GeneticModel::Recessive,
    ];

    /// Column-name suffix used in the report
    pub fn name(self) -> &'static str {
        match self {
            GeneticModel::Additive => "Additive",
            GeneticModel::Dominant => "Dominant",
            GeneticModel::Recessive => "Recessive",
        }
    }

    /// Pick this model's entry from an `[additive, dominant, recessive]` row
    pub fn select<T: Copy>(self, row: [T; 3]) -> T {
        match self {
            GeneticModel::Additive => row[0],
            GeneticModel::Dominant => row[1],
            GeneticModel::Recessive => row[2],
        }
    }

    /// Parse a comma-separated list of model codes, keeping a, d, r order
    pub fn parse_list(s: &str) -> Result<Vec<Self>, String> {
        let mut selected = Vec::new();
        for code in s.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            let model = GeneticModel::from_str(code)?;
            if !selected.contains(&model) {
                selected.push(model);
            }
        }
        if selected.is_empty() {
            return Err("At least one genetic model must be selected (a, d, r)".to_string());
        }
        selected.sort_by_key(|m| GeneticModel::ALL.iter().position(|x| x == m));
        Ok(selected)
    }
}

impl FromStr for GeneticModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(GeneticModel::Additive),
            "d" => Ok(GeneticModel::Dominant),
            "r" => Ok(GeneticModel::Recessive),
            _ => Err(format!("Unrecognised model: {}. Use: a (additive), d (dominant), r (recessive)", s)),
        }
    }
}

/// Which test families to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSelection {
    pub tdt: bool,
    pub fbat: bool,
}

impl FromStr for TestSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tdt" => Ok(TestSelection { tdt: true, fbat: false }),
            "fbat" => Ok(TestSelection { tdt: false, fbat: true }),
            "both" | "" => Ok(TestSelection { tdt: true, fbat: true }),
            _ => Err(format!("Invalid test: {}. Use: tdt, fbat, both", s)),
        }
    }
}

/// Exact statistics only, or exact plus missing-data bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisMode {
    Exact,
    Bounded,
}

impl AnalysisMode {
    pub fn is_bounded(self) -> bool {
        matches!(self, AnalysisMode::Bounded)
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "std" => Ok(AnalysisMode::Exact),
            "ext" | "" => Ok(AnalysisMode::Bounded),
            _ => Err(format!("Invalid mode: {}. Use: std (exact only), ext (exact + bounds)", s)),
        }
    }
}

/// Everything the statistic engine needs to know about a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub tests: TestSelection,
    pub models: Vec<GeneticModel>,
    pub mode: AnalysisMode,
    pub offset: f64,
}

impl AnalysisConfig {
    pub fn new(tests: TestSelection, models: Vec<GeneticModel>, mode: AnalysisMode, offset: f64) -> Result<Self, String> {
        if !(0.0..=1.0).contains(&offset) {
            return Err(format!("Offset must be between 0.0 and 1.0 (got {})", offset));
        }
        if models.is_empty() {
            return Err("At least one genetic model must be selected (a, d, r)".to_string());
        }
        Ok(Self { tests, models, mode, offset })
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tests: TestSelection { tdt: true, fbat: true },
            models: vec![GeneticModel::Additive],
            mode: AnalysisMode::Bounded,
            offset: DEFAULT_OFFSET,
        }
    }
}
