// mod.rs - Core logic module

pub mod analysis;
pub mod classifier;
pub mod counts;
pub mod marker;
pub mod pipeline;
pub mod stats;
pub mod tables;

// Re-export main types for convenience
pub use analysis::{AnalysisConfig, AnalysisMode, GeneticModel, TestSelection, DEFAULT_OFFSET};
pub use classifier::{classify, AnyClassification, Autosomal, Chromosome, Classification, TableFamily, XLinked};
pub use counts::TrioTally;
pub use marker::{analyze_marker, MarkerOutcome, MarkerResult, MarkerTally, ModelReport};
pub use pipeline::{process_markers, process_with_progress, RunSummary};
pub use stats::{Bounds, Statistic};
