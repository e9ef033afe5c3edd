// mod.rs - Data structures module

pub mod genotype;
pub mod loaders;
pub mod pedigree;

// Re-export main types for convenience
pub use genotype::{Affection, ChromosomeKind, Genotype, MemberRole, Sex, TrioGenotypes};
pub use loaders::{GenotypeMatrixReader, MarkerRecord};
pub use pedigree::{ExcludedPedigree, MatrixHeader, PedigreeFilter, PedigreeSet, Trio};
