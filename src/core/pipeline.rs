// pipeline.rs - Chunked parallel processing of the genotype matrix

use super::analysis::AnalysisConfig;
use super::marker::{analyze_marker, MarkerOutcome, MarkerResult, MarkerTally};
use crate::data::loaders::GenotypeMatrixReader;
use crate::data::pedigree::PedigreeSet;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::time::Instant;

/// Marker and trio counts gathered over one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub markers_read: usize,
    pub markers_tested: usize,
    /// Y and mitochondrial markers
    pub markers_excluded: usize,
    /// Markers dropped for an invalid genotype
    pub markers_skipped: usize,
    pub autosomal_markers: usize,
    pub x_markers: usize,
    pub trios: usize,
    pub case_trios: usize,
    pub control_trios: usize,
    pub total_mie: u64,
}

impl RunSummary {
    pub fn new(pedigrees: &PedigreeSet) -> Self {
        Self {
            trios: pedigrees.len(),
            case_trios: pedigrees.n_cases(),
            control_trios: pedigrees.n_controls(),
            ..Default::default()
        }
    }
}

/// Stream every marker through the analysis and hand tested rows to `sink` in input order.
///
/// Chunks of `chunk_size` rows are read sequentially and analysed in parallel;
/// `on_message` receives skip notices and MIE diagnostics.
pub fn process_markers<R, S, M>(
    reader: &mut GenotypeMatrixReader<R>,
    pedigrees: &PedigreeSet,
    config: &AnalysisConfig,
    chunk_size: usize,
    mut sink: S,
    mut on_message: M,
) -> Result<RunSummary, String>
where
    R: BufRead,
    S: FnMut(&MarkerResult) -> Result<(), String>,
    M: FnMut(&str),
{
    let chunk_size = chunk_size.max(1);
    let mut summary = RunSummary::new(pedigrees);

    loop {
        let chunk = reader.next_chunk(chunk_size)?;
        if chunk.is_empty() {
            break;
        }
        summary.markers_read += chunk.len();

        let outcomes: Vec<MarkerOutcome> = chunk
            .par_iter()
            .map(|record| analyze_marker(record, pedigrees, config))
            .collect();

        for outcome in outcomes {
            match outcome {
                MarkerOutcome::Tested(result) => {
                    for line in &result.diagnostics {
                        on_message(line);
                    }
                    match result.tally {
                        MarkerTally::Autosomal(_) => summary.autosomal_markers += 1,
                        MarkerTally::X(_) => summary.x_markers += 1,
                    }
                    summary.total_mie += u64::from(result.tally.mie());
                    summary.markers_tested += 1;
                    sink(&result)?;
                }
                MarkerOutcome::Skipped { marker_id, reason } => {
                    summary.markers_skipped += 1;
                    on_message(&format!(
                        "Invalid genotype found at {}. This marker will not be tested. ({})",
                        marker_id, reason
                    ));
                }
                MarkerOutcome::Excluded { .. } => summary.markers_excluded += 1,
            }
        }
    }

    Ok(summary)
}

/// Run [`process_markers`] behind a spinner, printing diagnostics above it
pub fn process_with_progress<R, S>(
    reader: &mut GenotypeMatrixReader<R>,
    pedigrees: &PedigreeSet,
    config: &AnalysisConfig,
    chunk_size: usize,
    mut sink: S,
) -> Result<RunSummary, String>
where
    R: BufRead,
    S: FnMut(&MarkerResult) -> Result<(), String>,
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} markers tested ({per_sec}) {msg}")
            .map_err(|e| format!("Invalid progress template: {}", e))?,
    );

    let start = Instant::now();
    let summary = process_markers(
        reader,
        pedigrees,
        config,
        chunk_size,
        |result| {
            pb.inc(1);
            sink(result)
        },
        |line| pb.println(format!("⚠️  {}", line)),
    );

    match &summary {
        Ok(s) => pb.finish_with_message(format!(
            "✅ {} markers processed in {:.2}s",
            s.markers_read,
            start.elapsed().as_secs_f64()
        )),
        Err(_) => pb.abandon(),
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::genotype::{Affection, Sex};
    use crate::data::pedigree::Trio;
    use std::io::Cursor;

    const MATRIX: &str = "ID\tp1\tp1\tp1\tp2\tp2\tp2\n\
                          Type\t1\t2\t3\t1\t2\t3\n\
                          chr1:100\t0\t1\t1\t1\t1\t2\n\
                          chrY:150\t0\t0\t0\t0\t0\t0\n\
                          chrX:200\t1\t1\t2\t0\t1\t0\n\
                          chr2:300\tNA\t0\t2\tNA\tNA\tNA\n\
                          chrX:400\t0\t1\t0\t0\t1\t1\n\
                          chr3:500\t5\t0\t0\t0\t0\t0\n";

    fn pedigrees() -> PedigreeSet {
        let trio = |id: &str, base: usize, affection, sex| Trio {
            pedigree_id: id.to_string(),
            father: base,
            mother: base + 1,
            offspring: base + 2,
            affection,
            sex: Some(sex),
        };
        PedigreeSet {
            trios: vec![
                trio("p1", 0, Affection::Case, Sex::Female),
                trio("p2", 3, Affection::Control, Sex::Male),
            ],
            ..Default::default()
        }
    }

    fn run(chunk_size: usize) -> (RunSummary, Vec<String>, Vec<String>) {
        let mut reader = GenotypeMatrixReader::from_reader(Cursor::new(MATRIX)).unwrap();
        let peds = pedigrees();
        let mut rows = Vec::new();
        let mut messages = Vec::new();
        let summary = process_markers(
            &mut reader,
            &peds,
            &AnalysisConfig::default(),
            chunk_size,
            |result| {
                rows.push(result.marker_id.clone());
                Ok(())
            },
            |line| messages.push(line.to_string()),
        )
        .unwrap();
        (summary, rows, messages)
    }

    #[test]
    fn test_summary_counts() {
        let (summary, rows, messages) = run(1000);
        assert_eq!(summary.markers_read, 6);
        assert_eq!(summary.markers_excluded, 1);
        // chrX:400 has a son called 1 (valid); chr3:500 has a 5
        assert_eq!(summary.markers_skipped, 1);
        assert_eq!(summary.markers_tested, 4);
        assert_eq!(summary.autosomal_markers, 2);
        assert_eq!(summary.x_markers, 2);
        assert_eq!(rows, vec!["chr1:100", "chrX:200", "chr2:300", "chrX:400"]);
        // {NA,0}->2 at chr2:300 is the only inconsistency
        assert_eq!(summary.total_mie, 1);
        assert!(messages.iter().any(|m| m.contains("chr3:500") && m.contains("will not be tested")));
        assert!(messages.iter().any(|m| m.starts_with("Unmatched trio type at chr2:300")));
        assert_eq!(summary.trios, 2);
        assert_eq!(summary.case_trios, 1);
    }

    #[test]
    fn test_output_order_independent_of_chunking() {
        let (whole, rows_whole, _) = run(1000);
        let (small, rows_small, _) = run(1);
        assert_eq!(rows_whole, rows_small);
        assert_eq!(whole, small);
    }

    #[test]
    fn test_sink_error_stops_the_run() {
        let mut reader = GenotypeMatrixReader::from_reader(Cursor::new(MATRIX)).unwrap();
        let peds = pedigrees();
        let err = process_markers(
            &mut reader,
            &peds,
            &AnalysisConfig::default(),
            2,
            |_| Err("disk full".to_string()),
            |_| {},
        )
        .unwrap_err();
        assert_eq!(err, "disk full");
    }
}
