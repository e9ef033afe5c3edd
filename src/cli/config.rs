// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub genotypes: Option<String>,
    pub phenotype: Option<String>,
    pub gender: Option<String>,
    pub output: Option<String>,
    pub summary: Option<String>,

    // Pedigree selection
    pub pedigrees: Option<String>,
    pub include_pedigrees: Option<String>,
    pub exclude_pedigrees: Option<String>,

    // Analysis
    pub test: Option<String>,
    pub mode: Option<String>,
    pub models: Option<String>,
    pub offset: Option<f64>,

    // Performance
    pub threads: Option<usize>,
    pub chunk_size: Option<usize>,

    // Flags
    pub dry_run: Option<bool>,
    pub no_comments: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = Self::from_toml(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# mitdt.toml - Configuration file for mitdt
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Genotype matrix (.tsv or .tsv.gz): pedigree id row, member type row
# (1 = father, 2 = mother, 3 = offspring), then markerID<TAB>genotypes
genotypes = "/path/to/genotypes.tsv.gz"

# Pedigree id and offspring status (2 = case, 1 = control)
phenotype = "/path/to/phenotype.txt"

# Pedigree id and offspring sex (1 = male, 2 = female)
gender = "/path/to/gender.txt"

# Output report (gzip-compressed when the name ends in .gz)
output = "tdt.out.gz"

# JSON run summary
# summary = "tdt.summary.json"

# =============================================================================
# PEDIGREE SELECTION
# =============================================================================

# Analyse only the pedigree ids listed in this file
# pedigrees = "pedigrees.txt"

# Include only pedigrees matching regex pattern
# include_pedigrees = "^FAM"

# Exclude pedigrees matching regex pattern
# exclude_pedigrees = "_dup$"

# =============================================================================
# ANALYSIS
# =============================================================================

# Tests to run: tdt, fbat, both
test = "both"

# Statistics version: std (exact only), ext (exact + bounds for missing genotypes)
mode = "ext"

# Genetic models, comma-separated: a (additive), d (dominant), r (recessive)
models = "a,d,r"

# FBAT offset between 0.0 and 1.0
offset = 0.5

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
threads = 8

# Markers read per parallel batch
chunk_size = 1000

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs without testing markers (dry run)
dry_run = false

# Start the report with the column header instead of # comment lines
no_comments = false
"#
        .to_string()
    }
}
