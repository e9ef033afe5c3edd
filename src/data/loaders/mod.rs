// mod.rs - Input file loaders

pub mod matrix;
pub mod phenotype;

pub use matrix::{open_text, GenotypeMatrixReader, MarkerRecord};
pub use phenotype::{load_code_table, load_pedigree_list};
