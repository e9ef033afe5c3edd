// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::{AnalysisConfig, AnalysisMode, GeneticModel, TestSelection};
use crate::data::loaders::load_pedigree_list;
use crate::data::{PedigreeFilter, PedigreeSet};
use regex::Regex;
use std::path::Path;
use std::str::FromStr;

pub struct ValidationResult {
    pub analysis: AnalysisConfig,
    pub filter: PedigreeFilter,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Required inputs
    args.genotypes.as_ref().ok_or("--genotypes is required")?;
    args.phenotype.as_ref().ok_or("--phenotype is required")?;
    args.gender.as_ref().ok_or("--gender is required")?;

    if args.chunk_size == 0 {
        return Err("--chunk-size must be at least 1".to_string());
    }
    if args.threads == Some(0) {
        return Err("--threads must be at least 1".to_string());
    }

    // Analysis settings
    let tests = TestSelection::from_str(&args.test)?;
    let mode = AnalysisMode::from_str(&args.mode)?;
    let models = GeneticModel::parse_list(&args.models)?;
    let analysis = AnalysisConfig::new(tests, models, mode, args.offset)?;

    // Compile regex patterns
    let include = if let Some(pattern) = &args.include_pedigrees {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_pedigrees regex: {}", e))?)
    } else {
        None
    };

    let exclude = if let Some(pattern) = &args.exclude_pedigrees {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_pedigrees regex: {}", e))?)
    } else {
        None
    };

    // Load the pedigree list
    let listed = if let Some(file_path) = &args.pedigrees {
        Some(load_pedigree_list(Path::new(file_path))?)
    } else {
        None
    };

    Ok(ValidationResult {
        analysis,
        filter: PedigreeFilter {
            listed,
            include,
            exclude,
        },
    })
}

/// Check the selected tests against the trios actually available.
///
/// FBAT compares cases with controls, so it needs at least one control trio;
/// a TDT-only run must be given case trios only.
pub fn check_trio_groups(config: &AnalysisConfig, pedigrees: &PedigreeSet) -> Result<(), String> {
    if pedigrees.is_empty() {
        return Err("No trio left to analyse after pedigree selection".to_string());
    }
    if config.tests.fbat && !pedigrees.has_controls() {
        return Err("FBAT requires at least one control trio; use --test tdt for case-only data".to_string());
    }
    if !config.tests.fbat && pedigrees.has_controls() {
        return Err(format!(
            "Pedigree selection must contain only case pedigrees for TDT ({} controls found); use --test both or filter them out",
            pedigrees.n_controls()
        ));
    }
    if config.tests.tdt && pedigrees.n_cases() == 0 {
        eprintln!("⚠️  Warning: no case trio selected, every TDT statistic will be NA");
    }
    Ok(())
}
