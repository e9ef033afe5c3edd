// lib.rs - mitdt library root

//! # mitdt - Transmission disequilibrium tests for trios with missing genotypes
//!
//! This library classifies father/mother/offspring trios at each marker into
//! mating-type categories and computes the transmission disequilibrium test
//! (TDT) and the family-based association test (FBAT) from the resulting
//! counts. Trios with a missing call are not dropped: every completion of the
//! missing genotypes is considered and the statistics are reported as
//! `[min, max]` bounds.
//!
//! ## Features
//!
//! - **Autosomes and chromosome X**: hemizygous fathers and sons handled by dedicated tables
//! - **Three genetic models**: additive, dominant and recessive coding
//! - **Bounded statistics**: rTDT and extended FBAT over incomplete trios
//! - **Streaming**: plain or gzip-compressed matrices, processed in parallel chunks
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use mitdt::prelude::*;
//! use std::collections::HashMap;
//!
//! let mut reader = GenotypeMatrixReader::open(std::path::Path::new("genotypes.tsv.gz"))?;
//! let phenotypes: HashMap<String, String> = HashMap::new();
//! let sexes: HashMap<String, String> = HashMap::new();
//! let pedigrees = PedigreeSet::build(reader.header(), &phenotypes, &sexes, &PedigreeFilter::default())?;
//!
//! let config = AnalysisConfig::default();
//! let summary = process_markers(
//!     &mut reader,
//!     &pedigrees,
//!     &config,
//!     1000,
//!     |result| {
//!         println!("{}", result_row(result).join("\t"));
//!         Ok(())
//!     },
//!     |message| eprintln!("{}", message),
//! )?;
//! println!("{} markers tested", summary.markers_tested);
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{check_trio_groups, validate_args, Args, ValidationResult};
    pub use crate::core::{analyze_marker, classify, process_markers, process_with_progress};
    pub use crate::core::{AnalysisConfig, AnalysisMode, GeneticModel, TestSelection};
    pub use crate::core::{Chromosome, MarkerOutcome, MarkerResult, RunSummary};
    pub use crate::data::{GenotypeMatrixReader, PedigreeFilter, PedigreeSet, TrioGenotypes};
    pub use crate::data::{Affection, Genotype, Sex};
    pub use crate::output::{header_columns, result_row, ReportWriter};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use core::{AnalysisConfig, GeneticModel, MarkerResult, RunSummary};
pub use data::{Genotype, PedigreeSet, TrioGenotypes};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "mitdt v{} - TDT and FBAT for trios with missing genotypes",
        VERSION
    )
}
