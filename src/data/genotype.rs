// genotype.rs - Genotype calls and per-individual attributes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dosage-coded genotype call at one marker.
///
/// The ordering (`RefHom < Het < AltHom < Missing`) is used to normalise the
/// unordered parental pair of autosomal trios.
///
/// On the X chromosome a male carries one allele: his `0` and `1` calls are the
/// hemizygous reference and alternate genotypes, stored here as `RefHom` and
/// `Het` respectively. `AltHom` is never valid for a male on X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Genotype {
    RefHom,
    Het,
    AltHom,
    Missing,
}

impl Genotype {
    pub const ALL: [Genotype; 4] = [
        Genotype::RefHom,
        Genotype::Het,
        Genotype::AltHom,
        Genotype::Missing,
    ];

    pub fn is_missing(self) -> bool {
        matches!(self, Genotype::Missing)
    }

    /// Alternate allele dosage, `None` for a missing call
    pub fn dosage(self) -> Option<u32> {
        match self {
            Genotype::RefHom => Some(0),
            Genotype::Het => Some(1),
            Genotype::AltHom => Some(2),
            Genotype::Missing => None,
        }
    }

    /// Symbol used in genotype matrices and diagnostics
    pub fn code(self) -> &'static str {
        match self {
            Genotype::RefHom => "0",
            Genotype::Het => "1",
            Genotype::AltHom => "2",
            Genotype::Missing => "NA",
        }
    }
}

impl FromStr for Genotype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Genotype::RefHom),
            "1" => Ok(Genotype::Het),
            "2" => Ok(Genotype::AltHom),
            "NA" => Ok(Genotype::Missing),
            other => Err(format!("Invalid genotype '{}'. Use: 0, 1, 2, NA", other)),
        }
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Offspring sex as coded in the gender file (1 = male, 2 = female)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse a gender-file code; anything but `1`/`2` is unknown
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(Sex::Male),
            "2" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Offspring affection status (1 = control, 2 = case)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affection {
    Control,
    Case,
}

impl Affection {
    /// Parse a phenotype-file code; anything but `1`/`2` is unknown
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(Affection::Control),
            "2" => Some(Affection::Case),
            _ => None,
        }
    }
}

/// Role of a column within a pedigree (member-type row: 1, 2, 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberRole {
    Father,
    Mother,
    Offspring,
}

impl FromStr for MemberRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MemberRole::Father),
            "2" => Ok(MemberRole::Mother),
            "3" => Ok(MemberRole::Offspring),
            other => Err(format!("Invalid member type '{}'. Use: 1 (father), 2 (mother), 3 (offspring)", other)),
        }
    }
}

/// How a marker row is treated, derived from its `chr:pos` identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChromosomeKind {
    Autosomal,
    X,
    /// Y and mitochondrial markers are not tested
    Excluded,
}

impl ChromosomeKind {
    /// Derive the chromosome kind from a marker id such as `chrX:1234`
    pub fn from_marker_id(marker_id: &str) -> Self {
        let chrom = marker_id.split(':').next().unwrap_or(marker_id);
        let chrom = chrom
            .strip_prefix("chr")
            .or_else(|| chrom.strip_prefix("CHR"))
            .or_else(|| chrom.strip_prefix("Chr"))
            .unwrap_or(chrom);

        match chrom.to_ascii_uppercase().as_str() {
            "X" | "23" => ChromosomeKind::X,
            "Y" | "24" | "M" | "MT" | "25" => ChromosomeKind::Excluded,
            _ => ChromosomeKind::Autosomal,
        }
    }
}

/// The three genotype calls of one trio at one marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrioGenotypes {
    pub father: Genotype,
    pub mother: Genotype,
    pub offspring: Genotype,
}

impl TrioGenotypes {
    pub fn new(father: Genotype, mother: Genotype, offspring: Genotype) -> Self {
        Self { father, mother, offspring }
    }

    pub fn is_complete(&self) -> bool {
        !self.father.is_missing() && !self.mother.is_missing() && !self.offspring.is_missing()
    }
}

impl fmt::Display for TrioGenotypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.father, self.mother, self.offspring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genotype_parsing() {
        assert_eq!("0".parse::<Genotype>(), Ok(Genotype::RefHom));
        assert_eq!("1".parse::<Genotype>(), Ok(Genotype::Het));
        assert_eq!("2".parse::<Genotype>(), Ok(Genotype::AltHom));
        assert_eq!("NA".parse::<Genotype>(), Ok(Genotype::Missing));
        assert!("3".parse::<Genotype>().is_err());
        assert!("na".parse::<Genotype>().is_err());
        assert!("0/1".parse::<Genotype>().is_err());
    }

    #[test]
    fn test_chromosome_kind() {
        assert_eq!(ChromosomeKind::from_marker_id("chr1:12345"), ChromosomeKind::Autosomal);
        assert_eq!(ChromosomeKind::from_marker_id("chr22:1"), ChromosomeKind::Autosomal);
        assert_eq!(ChromosomeKind::from_marker_id("chrX:500"), ChromosomeKind::X);
        assert_eq!(ChromosomeKind::from_marker_id("chr23:500"), ChromosomeKind::X);
        assert_eq!(ChromosomeKind::from_marker_id("X:500"), ChromosomeKind::X);
        assert_eq!(ChromosomeKind::from_marker_id("chrY:10"), ChromosomeKind::Excluded);
        assert_eq!(ChromosomeKind::from_marker_id("chrM:10"), ChromosomeKind::Excluded);
        assert_eq!(ChromosomeKind::from_marker_id("chr25:10"), ChromosomeKind::Excluded);
        // chr2 must not be mistaken for chr23/chr24/chr25
        assert_eq!(ChromosomeKind::from_marker_id("chr2:10"), ChromosomeKind::Autosomal);
    }

    #[test]
    fn test_codes() {
        assert_eq!(Sex::from_code("1"), Some(Sex::Male));
        assert_eq!(Sex::from_code("2"), Some(Sex::Female));
        assert_eq!(Sex::from_code("NA"), None);
        assert_eq!(Affection::from_code("2"), Some(Affection::Case));
        assert_eq!(Affection::from_code("1"), Some(Affection::Control));
        assert_eq!(Affection::from_code("0"), None);
        assert_eq!("3".parse::<MemberRole>(), Ok(MemberRole::Offspring));
    }

    #[test]
    fn test_trio_completeness() {
        let complete = TrioGenotypes::new(Genotype::RefHom, Genotype::Het, Genotype::Het);
        let incomplete = TrioGenotypes::new(Genotype::Missing, Genotype::Het, Genotype::Het);
        assert!(complete.is_complete());
        assert!(!incomplete.is_complete());
        assert_eq!(incomplete.to_string(), "[NA 1 1]");
    }
}
