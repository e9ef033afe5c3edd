// mod.rs - Report and run summary writers

use crate::core::analysis::AnalysisConfig;
use crate::core::marker::{FbatReport, MarkerResult, TdtReport};
use crate::core::pipeline::RunSummary;
use crate::core::stats::{Bounds, Statistic};
use chrono::{DateTime, Utc};
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

const NA: &str = "NA";

const COUNT_COLUMNS: [&str; 13] = [
    "nCompleteInformativeCases_MaleNB",
    "nCompleteInformativeCases_FemaleNB",
    "nCompleteInformativeControls_MaleNB",
    "nCompleteInformativeControls_FemaleNB",
    "nCompleteNonInformativeCases",
    "nCompleteNonInformativeControls",
    "nIncompleteInformativeCases_MaleNB",
    "nIncompleteInformativeCases_FemaleNB",
    "nIncompleteInformativeControls_MaleNB",
    "nIncompleteInformativeControls_FemaleNB",
    "nIncompleteNonInformativeCases",
    "nIncompleteNonInformativeControls",
    "nMIE",
];

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// Report columns for the selected tests, models and mode
pub fn header_columns(config: &AnalysisConfig) -> Vec<String> {
    let mut columns: Vec<String> = ["MarkerID", "MAF", "n[0/0,0/1,1/1,./.]"]
        .iter()
        .chain(COUNT_COLUMNS.iter())
        .map(|c| c.to_string())
        .collect();
    let bounded = config.mode.is_bounded();

    if config.tests.tdt {
        for model in &config.models {
            let name = model.name();
            columns.push(format!("ChiSq_TDT_{}", name));
            columns.push(format!("P-value_TDT_{}", name));
            if bounded {
                columns.push(format!("min_ChiSq_rTDT_{}", name));
                columns.push(format!("min_P-value_rTDT_{}", name));
                columns.push(format!("max_ChiSq_rTDT_{}", name));
                columns.push(format!("max_P-value_rTDT_{}", name));
            }
        }
    }
    if config.tests.fbat {
        for model in &config.models {
            let name = model.name();
            columns.push(format!("Z_FBAT_{}", name));
            columns.push(format!("P-value_FBAT_{}", name));
            if bounded {
                columns.push(format!("min_Z_extFBAT_{}", name));
                columns.push(format!("min_P-value_extFBAT_{}", name));
                columns.push(format!("max_Z_extFBAT_{}", name));
                columns.push(format!("max_P-value_extFBAT_{}", name));
            }
        }
    }
    columns
}

fn push_statistic(row: &mut Vec<String>, statistic: Option<Statistic>) {
    match statistic {
        Some(s) => {
            row.push(s.value.to_string());
            row.push(s.p_value.to_string());
        }
        None => {
            row.push(NA.to_string());
            row.push(NA.to_string());
        }
    }
}

fn push_bounds(row: &mut Vec<String>, bounds: Option<Bounds>) {
    if let Some(bounds) = bounds {
        push_statistic(row, bounds.min);
        push_statistic(row, bounds.max);
    }
}

/// One report row, aligned with [`header_columns`] for the config the result was computed with
pub fn result_row(result: &MarkerResult) -> Vec<String> {
    let mut row = vec![
        result.marker_id.clone(),
        result.maf.map_or_else(|| NA.to_string(), |maf| maf.to_string()),
        result.distribution.to_string(),
    ];
    row.extend(result.tally.count_columns());
    row.push(result.tally.mie().to_string());

    let tdt: Vec<TdtReport> = result.models.iter().filter_map(|m| m.tdt).collect();
    for report in tdt {
        push_statistic(&mut row, report.exact);
        push_bounds(&mut row, report.extended.map(|e| e.bounds));
    }
    let fbat: Vec<FbatReport> = result.models.iter().filter_map(|m| m.fbat).collect();
    for report in fbat {
        push_statistic(&mut row, report.exact);
        push_bounds(&mut row, report.extended);
    }
    row
}

/// Plain or gzip-compressed file behind the report writer
enum ReportSink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl ReportSink {
    fn create(file_path: &str) -> Result<Self, String> {
        ensure_parent_dir(file_path)?;
        let file = File::create(file_path)
            .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
        let writer = BufWriter::new(file);
        Ok(if file_path.ends_with(".gz") {
            ReportSink::Gzip(GzEncoder::new(writer, Compression::default()))
        } else {
            ReportSink::Plain(writer)
        })
    }

    fn finish(self) -> io::Result<()> {
        match self {
            ReportSink::Plain(mut w) => w.flush(),
            ReportSink::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for ReportSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            ReportSink::Plain(w) => w.write(buf),
            ReportSink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            ReportSink::Plain(w) => w.flush(),
            ReportSink::Gzip(w) => w.flush(),
        }
    }
}

/// Tab-separated result table, gzip-compressed when the path ends in `.gz`
pub struct ReportWriter {
    writer: csv::Writer<ReportSink>,
    path: String,
    rows: usize,
}

impl ReportWriter {
    /// Create the report and write the column header.
    ///
    /// With a command line, `#` comment lines recording it, the UTC time and
    /// the version come first; without one the header is the first line.
    pub fn create(file_path: &str, command_line: Option<&str>, config: &AnalysisConfig) -> Result<Self, String> {
        let mut sink = ReportSink::create(file_path)?;

        if let Some(command_line) = command_line {
            writeln!(sink, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
            writeln!(sink, "# Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))
                .map_err(|e| format!("Write error: {}", e))?;
            writeln!(sink, "# mitdt v{}", env!("CARGO_PKG_VERSION")).map_err(|e| format!("Write error: {}", e))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(sink);
        writer
            .write_record(header_columns(config))
            .map_err(|e| format!("Write error: {}", e))?;

        Ok(Self {
            writer,
            path: file_path.to_string(),
            rows: 0,
        })
    }

    pub fn write_result(&mut self, result: &MarkerResult) -> Result<(), String> {
        self.writer
            .write_record(result_row(result))
            .map_err(|e| format!("Write error at marker {}: {}", result.marker_id, e))?;
        self.rows += 1;
        Ok(())
    }

    /// Flush everything, completing the gzip stream if any
    pub fn finish(self) -> Result<usize, String> {
        let sink = self
            .writer
            .into_inner()
            .map_err(|e| format!("Flush error: {}", e.error()))?;
        sink.finish().map_err(|e| format!("Flush error: {}", e))?;
        println!("✅ {} markers written to: {}", self.rows, self.path);
        Ok(self.rows)
    }
}

/// JSON record of one run
#[derive(Debug, Serialize)]
pub struct RunRecord<'a> {
    pub version: &'a str,
    pub command: &'a str,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
    pub genotypes: &'a str,
    pub output: &'a str,
    pub excluded_pedigrees: usize,
    pub config: &'a AnalysisConfig,
    pub summary: &'a RunSummary,
}

/// Write the run summary as pretty-printed JSON
pub fn write_summary(file_path: &str, record: &RunRecord<'_>) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let json = serde_json::to_string_pretty(record)
        .map_err(|e| format!("Failed to serialize run summary: {}", e))?;
    std::fs::write(file_path, json)
        .map_err(|e| format!("Failed to write summary file '{}': {}", file_path, e))?;
    println!("📄 Run summary written to: {}", file_path);
    Ok(())
}
