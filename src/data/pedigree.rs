// pedigree.rs - Trio definitions built from the genotype matrix header

use crate::data::genotype::{Affection, MemberRole, Sex};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Pedigree ids and member roles from the first two matrix rows, one entry per genotype column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixHeader {
    pub pedigree_ids: Vec<String>,
    pub member_roles: Vec<MemberRole>,
}

impl MatrixHeader {
    pub fn n_columns(&self) -> usize {
        self.pedigree_ids.len()
    }

    /// Distinct pedigree ids in order of first appearance
    pub fn pedigree_order(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.pedigree_ids
            .iter()
            .map(String::as_str)
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

/// One father/mother/offspring trio with the genotype columns of its members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trio {
    pub pedigree_id: String,
    pub father: usize,
    pub mother: usize,
    pub offspring: usize,
    pub affection: Affection,
    /// Offspring sex, `None` when the gender file has no usable code
    pub sex: Option<Sex>,
}

impl Trio {
    /// Columns with their roles, father first
    pub fn members(&self) -> [(MemberRole, usize); 3] {
        [
            (MemberRole::Father, self.father),
            (MemberRole::Mother, self.mother),
            (MemberRole::Offspring, self.offspring),
        ]
    }
}

/// Why a selected pedigree was left out of the analysis, or out of chrX markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionReason {
    NoPhenotype,
    UnknownPhenotype(String),
    NoSex,
    UnknownSex(String),
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::NoPhenotype => write!(f, "not listed in the phenotype file"),
            ExclusionReason::UnknownPhenotype(code) => write!(f, "missing phenotype '{}'", code),
            ExclusionReason::NoSex => write!(f, "not listed in the gender file"),
            ExclusionReason::UnknownSex(code) => write!(f, "missing offspring sex '{}'", code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedPedigree {
    pub pedigree_id: String,
    pub reason: ExclusionReason,
}

/// Which pedigrees from the matrix header to analyse
#[derive(Debug, Default)]
pub struct PedigreeFilter {
    /// Explicit id list; every header pedigree when absent
    pub listed: Option<HashSet<String>>,
    pub include: Option<Regex>,
    pub exclude: Option<Regex>,
}

impl PedigreeFilter {
    pub fn accepts(&self, pedigree_id: &str) -> bool {
        if let Some(listed) = &self.listed {
            if !listed.contains(pedigree_id) {
                return false;
            }
        }
        if let Some(include) = &self.include {
            if !include.is_match(pedigree_id) {
                return false;
            }
        }
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(pedigree_id) {
                return false;
            }
        }
        true
    }
}

/// The analysed trios, read-only for the rest of the run
#[derive(Debug, Clone, Default)]
pub struct PedigreeSet {
    pub trios: Vec<Trio>,
    pub excluded: Vec<ExcludedPedigree>,
    /// Analysed on autosomes only, for lack of an offspring sex
    pub x_excluded: Vec<ExcludedPedigree>,
    /// Pedigree-list ids that never appear in the matrix header
    pub unknown_listed: Vec<String>,
    pub filtered_out: usize,
}

impl PedigreeSet {
    /// Build trios for every accepted pedigree.
    ///
    /// A pedigree without exactly one father, mother and offspring column is a
    /// fatal error; one with unknown phenotype is excluded and reported. An
    /// unknown offspring sex only keeps the trio out of chrX markers.
    pub fn build(
        header: &MatrixHeader,
        phenotypes: &HashMap<String, String>,
        sexes: &HashMap<String, String>,
        filter: &PedigreeFilter,
    ) -> Result<Self, String> {
        let mut columns: HashMap<&str, Vec<(MemberRole, usize)>> = HashMap::new();
        for (index, (id, role)) in header.pedigree_ids.iter().zip(&header.member_roles).enumerate() {
            columns.entry(id.as_str()).or_default().push((*role, index));
        }

        let mut set = PedigreeSet::default();

        if let Some(listed) = &filter.listed {
            let mut unknown: Vec<String> = listed
                .iter()
                .filter(|id| !columns.contains_key(id.as_str()))
                .cloned()
                .collect();
            unknown.sort();
            set.unknown_listed = unknown;
        }

        for pedigree_id in header.pedigree_order() {
            if !filter.accepts(pedigree_id) {
                set.filtered_out += 1;
                continue;
            }

            let members = columns.get(pedigree_id).map(Vec::as_slice).unwrap_or(&[]);
            let father = single_member(pedigree_id, members, MemberRole::Father)?;
            let mother = single_member(pedigree_id, members, MemberRole::Mother)?;
            let offspring = single_member(pedigree_id, members, MemberRole::Offspring)?;

            let affection = match phenotypes.get(pedigree_id) {
                None => Err(ExclusionReason::NoPhenotype),
                Some(code) => Affection::from_code(code)
                    .ok_or_else(|| ExclusionReason::UnknownPhenotype(code.clone())),
            };
            let affection = match affection {
                Ok(affection) => affection,
                Err(reason) => {
                    set.excluded.push(ExcludedPedigree {
                        pedigree_id: pedigree_id.to_string(),
                        reason,
                    });
                    continue;
                }
            };

            let sex = match sexes.get(pedigree_id) {
                None => Err(ExclusionReason::NoSex),
                Some(code) => {
                    Sex::from_code(code).ok_or_else(|| ExclusionReason::UnknownSex(code.clone()))
                }
            };
            if let Err(reason) = &sex {
                set.x_excluded.push(ExcludedPedigree {
                    pedigree_id: pedigree_id.to_string(),
                    reason: reason.clone(),
                });
            }

            set.trios.push(Trio {
                pedigree_id: pedigree_id.to_string(),
                father,
                mother,
                offspring,
                affection,
                sex: sex.ok(),
            });
        }

        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.trios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trios.is_empty()
    }

    pub fn n_cases(&self) -> usize {
        self.trios.iter().filter(|t| t.affection == Affection::Case).count()
    }

    pub fn n_controls(&self) -> usize {
        self.trios.iter().filter(|t| t.affection == Affection::Control).count()
    }

    pub fn has_controls(&self) -> bool {
        self.trios.iter().any(|t| t.affection == Affection::Control)
    }
}

fn single_member(pedigree_id: &str, members: &[(MemberRole, usize)], role: MemberRole) -> Result<usize, String> {
    let mut matching = members.iter().filter(|(r, _)| *r == role).map(|(_, index)| *index);
    let first = matching.next().ok_or_else(|| {
        format!("Pedigree '{}' has no {:?} column in the genotype matrix", pedigree_id, role)
    })?;
    if matching.next().is_some() {
        return Err(format!(
            "Pedigree '{}' has more than one {:?} column; only trios are supported",
            pedigree_id, role
        ));
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(ids: &[&str], roles: &[MemberRole]) -> MatrixHeader {
        MatrixHeader {
            pedigree_ids: ids.iter().map(|s| s.to_string()).collect(),
            member_roles: roles.to_vec(),
        }
    }

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    use crate::data::genotype::MemberRole::{Father as F, Mother as M, Offspring as O};

    #[test]
    fn test_build_trios() {
        let header = header(&["p1", "p1", "p1", "p2", "p2", "p2"], &[O, F, M, F, M, O]);
        let phenotypes = table(&[("p1", "2"), ("p2", "1")]);
        let sexes = table(&[("p1", "1"), ("p2", "2")]);
        let set = PedigreeSet::build(&header, &phenotypes, &sexes, &PedigreeFilter::default()).unwrap();

        assert_eq!(set.len(), 2);
        let p1 = &set.trios[0];
        assert_eq!((p1.father, p1.mother, p1.offspring), (1, 2, 0));
        assert_eq!(p1.affection, Affection::Case);
        assert_eq!(p1.sex, Some(Sex::Male));
        assert_eq!(set.trios[1].pedigree_id, "p2");
        assert_eq!(set.n_cases(), 1);
        assert!(set.has_controls());
    }

    #[test]
    fn test_unknown_phenotype_is_excluded() {
        let header = header(&["a", "a", "a", "b", "b", "b", "c", "c", "c"], &[F, M, O, F, M, O, F, M, O]);
        let phenotypes = table(&[("a", "2"), ("b", "0")]);
        let sexes = table(&[("a", "1"), ("b", "1"), ("c", "2")]);
        let set = PedigreeSet::build(&header, &phenotypes, &sexes, &PedigreeFilter::default()).unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.excluded.len(), 2);
        assert_eq!(set.excluded[0].reason, ExclusionReason::UnknownPhenotype("0".to_string()));
        assert_eq!(set.excluded[1].reason, ExclusionReason::NoPhenotype);
        assert!(set.x_excluded.is_empty());
    }

    #[test]
    fn test_unknown_sex_keeps_trio_off_chrx_only() {
        let header = header(&["a", "a", "a", "b", "b", "b", "c", "c", "c"], &[F, M, O, F, M, O, F, M, O]);
        let phenotypes = table(&[("a", "2"), ("b", "1"), ("c", "2")]);
        let sexes = table(&[("a", "NA"), ("b", "2")]);
        let set = PedigreeSet::build(&header, &phenotypes, &sexes, &PedigreeFilter::default()).unwrap();

        assert_eq!(set.len(), 3);
        assert!(set.excluded.is_empty());
        assert_eq!(set.trios[0].sex, None);
        assert_eq!(set.trios[1].sex, Some(Sex::Female));
        assert_eq!(set.trios[2].sex, None);
        assert_eq!(set.x_excluded.len(), 2);
        assert_eq!(set.x_excluded[0].reason, ExclusionReason::UnknownSex("NA".to_string()));
        assert_eq!(set.x_excluded[1].pedigree_id, "c");
        assert_eq!(set.x_excluded[1].reason, ExclusionReason::NoSex);
    }

    #[test]
    fn test_missing_role_is_fatal() {
        let header = header(&["a", "a"], &[F, O]);
        let phenotypes = table(&[("a", "2")]);
        let sexes = table(&[("a", "1")]);
        let err = PedigreeSet::build(&header, &phenotypes, &sexes, &PedigreeFilter::default()).unwrap_err();
        assert!(err.contains("Mother"));

        let header = header_with_two_children();
        let err = PedigreeSet::build(&header, &phenotypes, &sexes, &PedigreeFilter::default()).unwrap_err();
        assert!(err.contains("only trios"));
    }

    fn header_with_two_children() -> MatrixHeader {
        header(&["a", "a", "a", "a"], &[F, M, O, O])
    }

    #[test]
    fn test_filters() {
        let header = header(
            &["fam1", "fam1", "fam1", "fam2", "fam2", "fam2", "ctl9", "ctl9", "ctl9"],
            &[F, M, O, F, M, O, F, M, O],
        );
        let phenotypes = table(&[("fam1", "2"), ("fam2", "2"), ("ctl9", "1")]);
        let sexes = table(&[("fam1", "1"), ("fam2", "1"), ("ctl9", "1")]);

        let filter = PedigreeFilter {
            listed: Some(["fam1", "fam2", "ghost"].iter().map(|s| s.to_string()).collect()),
            include: None,
            exclude: Some(Regex::new("2$").unwrap()),
        };
        let set = PedigreeSet::build(&header, &phenotypes, &sexes, &filter).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.trios[0].pedigree_id, "fam1");
        assert_eq!(set.filtered_out, 2);
        assert_eq!(set.unknown_listed, vec!["ghost".to_string()]);

        let filter = PedigreeFilter {
            listed: None,
            include: Some(Regex::new("^ctl").unwrap()),
            exclude: None,
        };
        let set = PedigreeSet::build(&header, &phenotypes, &sexes, &filter).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.n_controls(), 1);
    }

    #[test]
    fn test_trio_members() {
        let trio = Trio {
            pedigree_id: "p".to_string(),
            father: 2,
            mother: 0,
            offspring: 1,
            affection: Affection::Case,
            sex: Some(Sex::Female),
        };
        assert_eq!(
            trio.members(),
            [(F, 2), (M, 0), (O, 1)]
        );
    }
}
