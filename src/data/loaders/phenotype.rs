// phenotype.rs - Pedigree-level phenotype, gender and id-list files

use super::matrix::open_text;
use std::collections::{HashMap, HashSet};
use std::io::BufRead;
use std::path::Path;

/// Load a whitespace-separated `pedigreeID code` table (phenotype or gender file).
///
/// Codes are kept raw; interpretation and exclusion happen when trios are built.
/// A row with no code column maps to an empty code.
pub fn load_code_table(path: &Path, what: &str) -> Result<HashMap<String, String>, String> {
    let reader = open_text(path)?;
    let table = read_code_table(reader)
        .map_err(|e| format!("Invalid {} file '{}': {}", what, path.display(), e))?;
    println!("📋 Loaded {} {} entries from '{}'", table.len(), what, path.display());
    Ok(table)
}

pub fn read_code_table<R: BufRead>(reader: R) -> Result<HashMap<String, String>, String> {
    let mut table = HashMap::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;
        let mut fields = line.split_whitespace();
        let Some(pedigree_id) = fields.next() else {
            continue;
        };
        if pedigree_id.starts_with('#') {
            continue;
        }
        let code = fields.next().unwrap_or_default();
        if table.insert(pedigree_id.to_string(), code.to_string()).is_some() {
            eprintln!("⚠️  Warning: pedigree '{}' listed twice, keeping line {}", pedigree_id, line_num + 1);
        }
    }
    Ok(table)
}

/// Load a list of pedigree ids, separated by any whitespace
pub fn load_pedigree_list(path: &Path) -> Result<HashSet<String>, String> {
    let reader = open_text(path)?;
    let set = read_pedigree_list(reader)
        .map_err(|e| format!("Invalid pedigree list '{}': {}", path.display(), e))?;
    println!("📋 Loaded {} pedigree ids from '{}'", set.len(), path.display());
    Ok(set)
}

pub fn read_pedigree_list<R: BufRead>(reader: R) -> Result<HashSet<String>, String> {
    let mut set = HashSet::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;
        set.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(set)
}
