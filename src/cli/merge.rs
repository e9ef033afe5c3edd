// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.genotypes.is_none() {
            self.genotypes = config.genotypes;
        }
        if self.phenotype.is_none() {
            self.phenotype = config.phenotype;
        }
        if self.gender.is_none() {
            self.gender = config.gender;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.summary.is_none() {
            self.summary = config.summary;
        }

        // Pedigree selection
        if self.pedigrees.is_none() {
            self.pedigrees = config.pedigrees;
        }
        if self.include_pedigrees.is_none() {
            self.include_pedigrees = config.include_pedigrees;
        }
        if self.exclude_pedigrees.is_none() {
            self.exclude_pedigrees = config.exclude_pedigrees;
        }

        // Analysis settings (only override defaults, not explicit CLI values)
        if let Some(test) = config.test.filter(|_| self.test == "both") {
            self.test = test;
        }
        if let Some(mode) = config.mode.filter(|_| self.mode == "ext") {
            self.mode = mode;
        }
        if let Some(models) = config.models.filter(|_| self.models == "a") {
            self.models = models;
        }
        if let Some(offset) = config.offset.filter(|_| self.offset == 0.5) {
            self.offset = offset;
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }
        if let Some(chunk_size) = config.chunk_size.filter(|_| self.chunk_size == 1000) {
            self.chunk_size = chunk_size;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }
        if !self.no_comments && config.no_comments.unwrap_or(false) {
            self.no_comments = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
