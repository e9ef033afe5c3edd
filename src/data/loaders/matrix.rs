// matrix.rs - Streaming reader for tab-separated genotype matrices

use crate::data::genotype::{ChromosomeKind, MemberRole};
use crate::data::pedigree::MatrixHeader;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a text input, decompressing on the fly when the path ends in `.gz`
pub fn open_text(path: &Path) -> Result<Box<dyn BufRead>, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open '{}': {}", path.display(), e))?;

    let reader: Box<dyn BufRead> = if path.to_string_lossy().ends_with(".gz") {
        Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(reader)
}

/// One marker row: identifier, chromosome kind and the raw genotype cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRecord {
    pub marker_id: String,
    pub kind: ChromosomeKind,
    pub values: Vec<String>,
}

/// Genotype matrix reader.
///
/// Row 1 holds the pedigree id of every column, row 2 the member type (`1`
/// father, `2` mother, `3` offspring); the first cell of both is ignored. Every
/// later row is `markerID<TAB>genotypes...`.
pub struct GenotypeMatrixReader<R: BufRead> {
    header: MatrixHeader,
    lines: io::Lines<R>,
    line_number: usize,
}

impl GenotypeMatrixReader<Box<dyn BufRead>> {
    pub fn open(path: &Path) -> Result<Self, String> {
        let reader = open_text(path)?;
        Self::from_reader(reader)
            .map_err(|e| format!("Invalid genotype matrix '{}': {}", path.display(), e))
    }
}

impl<R: BufRead> GenotypeMatrixReader<R> {
    /// Read the two header rows and position the reader on the first marker
    pub fn from_reader(reader: R) -> Result<Self, String> {
        let mut lines = reader.lines();

        let id_line = lines
            .next()
            .ok_or("Empty genotype matrix")?
            .map_err(|e| format!("Failed to read pedigree id row: {}", e))?;
        let role_line = lines
            .next()
            .ok_or("Genotype matrix has no member type row")?
            .map_err(|e| format!("Failed to read member type row: {}", e))?;

        let pedigree_ids: Vec<String> = split_row(&id_line).skip(1).map(str::to_string).collect();
        let member_roles = split_row(&role_line)
            .skip(1)
            .enumerate()
            .map(|(i, code)| {
                code.parse::<MemberRole>()
                    .map_err(|e| format!("Member type row, column {}: {}", i + 2, e))
            })
            .collect::<Result<Vec<_>, String>>()?;

        if pedigree_ids.is_empty() {
            return Err("Pedigree id row has no sample columns".to_string());
        }
        if pedigree_ids.len() != member_roles.len() {
            return Err(format!(
                "Pedigree id row has {} columns but member type row has {}",
                pedigree_ids.len(),
                member_roles.len()
            ));
        }

        Ok(Self {
            header: MatrixHeader {
                pedigree_ids,
                member_roles,
            },
            lines,
            line_number: 2,
        })
    }

    pub fn header(&self) -> &MatrixHeader {
        &self.header
    }

    /// Read up to `size` marker rows; an empty chunk means the matrix is exhausted
    pub fn next_chunk(&mut self, size: usize) -> Result<Vec<MarkerRecord>, String> {
        let mut chunk = Vec::with_capacity(size);
        while chunk.len() < size {
            match self.next() {
                Some(record) => chunk.push(record?),
                None => break,
            }
        }
        Ok(chunk)
    }
}

impl<R: BufRead> Iterator for GenotypeMatrixReader<R> {
    type Item = Result<MarkerRecord, String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(format!("Failed to read line {}: {}", self.line_number + 1, e))),
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }

            let mut cells = split_row(&line);
            let marker_id = cells.next().unwrap_or_default().trim().to_string();
            let values: Vec<String> = cells.map(str::to_string).collect();

            if values.len() != self.header.n_columns() {
                return Some(Err(format!(
                    "Line {} ({}) has {} genotype columns, expected {}",
                    self.line_number,
                    marker_id,
                    values.len(),
                    self.header.n_columns()
                )));
            }

            return Some(Ok(MarkerRecord {
                kind: ChromosomeKind::from_marker_id(&marker_id),
                marker_id,
                values,
            }));
        }
    }
}

fn split_row(line: &str) -> std::str::Split<'_, char> {
    line.trim_end_matches(['\r', '\n']).split('\t')
}
