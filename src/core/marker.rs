// marker.rs - Per-marker aggregation: validation, distribution, MAF, trio counts, statistics

use super::analysis::{AnalysisConfig, GeneticModel};
use super::classifier::{Autosomal, TableFamily, XLinked};
use super::counts::TrioTally;
use super::stats::{self, Bounds, ExtendedTdt, Statistic};
use crate::data::genotype::{ChromosomeKind, Genotype, MemberRole, Sex, TrioGenotypes};
use crate::data::loaders::MarkerRecord;
use crate::data::pedigree::{PedigreeSet, Trio};
use std::fmt;

/// Individuals per genotype class: `[0/0, 0/1, 1/1, ./.]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenotypeDistribution(pub [u32; 4]);

impl GenotypeDistribution {
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl fmt::Display for GenotypeDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [hom_ref, het, hom_alt, missing] = self.0;
        write!(f, "[{},{},{},{}]", hom_ref, het, hom_alt, missing)
    }
}

/// Reference and alternate allele copies observed at a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlleleCounts {
    pub reference: u32,
    pub alternate: u32,
}

impl AlleleCounts {
    /// `min(ref, alt) / (ref + alt)`, `None` when no allele was observed
    pub fn minor_allele_frequency(&self) -> Option<f64> {
        let total = self.reference + self.alternate;
        if total == 0 {
            return None;
        }
        Some(f64::from(self.reference.min(self.alternate)) / f64::from(total))
    }
}

/// Count every trio member into the genotype classes.
///
/// Hemizygous members fold onto the homozygous classes: `0` counts as 0/0 and
/// `1` as 1/1. Trios not analysed on this chromosome are left out.
pub fn record_genotype_distribution<F: TableFamily>(calls: &[TrioGenotypes], trios: &[Trio]) -> GenotypeDistribution {
    let mut bins = [0u32; 4];
    for (genotypes, sex) in analysed::<F>(calls, trios) {
        for (role, genotype) in member_calls(genotypes) {
            let bin = match genotype.dosage() {
                None => 3,
                Some(d) if F::is_hemizygous(role, sex) => (2 * d) as usize,
                Some(d) => d as usize,
            };
            bins[bin] += 1;
        }
    }
    GenotypeDistribution(bins)
}

/// Minor allele frequency over every trio member.
///
/// Diploid members contribute two allele copies, hemizygous members one.
pub fn minor_allele_frequency<F: TableFamily>(calls: &[TrioGenotypes], trios: &[Trio]) -> Option<f64> {
    allele_counts::<F>(calls, trios).minor_allele_frequency()
}

fn allele_counts<F: TableFamily>(calls: &[TrioGenotypes], trios: &[Trio]) -> AlleleCounts {
    let mut counts = AlleleCounts::default();
    for (genotypes, sex) in analysed::<F>(calls, trios) {
        for (role, genotype) in member_calls(genotypes) {
            let Some(dosage) = genotype.dosage() else {
                continue;
            };
            let copies: u32 = if F::is_hemizygous(role, sex) { 1 } else { 2 };
            counts.reference += copies.saturating_sub(dosage);
            counts.alternate += dosage.min(copies);
        }
    }
    counts
}

/// Calls paired with the sex each trio is classified under, skipping trios
/// this chromosome cannot analyse
fn analysed<'a, F: TableFamily>(
    calls: &'a [TrioGenotypes],
    trios: &'a [Trio],
) -> impl Iterator<Item = (&'a TrioGenotypes, Sex)> + 'a {
    calls
        .iter()
        .zip(trios)
        .filter_map(|(genotypes, trio)| F::offspring_sex(trio.sex).map(|sex| (genotypes, sex)))
}

fn member_calls(genotypes: &TrioGenotypes) -> [(MemberRole, Genotype); 3] {
    [
        (MemberRole::Father, genotypes.father),
        (MemberRole::Mother, genotypes.mother),
        (MemberRole::Offspring, genotypes.offspring),
    ]
}

/// Classify every trio at one marker.
///
/// Returns the counts and one diagnostic line per Mendelian inconsistency.
/// Trios without an offspring sex are not counted on chrX.
pub fn classify_all_trios<F: TableFamily>(
    marker_id: &str,
    calls: &[TrioGenotypes],
    trios: &[Trio],
) -> (TrioTally<F>, Vec<String>) {
    let mut tally = TrioTally::new();
    let mut diagnostics = Vec::new();

    for (genotypes, trio) in calls.iter().zip(trios) {
        let Some(sex) = F::offspring_sex(trio.sex) else {
            continue;
        };
        let classification = F::classify(*genotypes, sex);
        if classification.is_mendelian_error() {
            diagnostics.push(format!(
                "Unmatched trio type at {}: {} {}. Counting as MIE",
                marker_id, trio.pedigree_id, genotypes
            ));
        }
        tally.record(trio.affection, classification);
    }

    (tally, diagnostics)
}

/// Parse the trio members' cells of one marker row and check them against the chromosome kind.
///
/// Returns one entry per trio. A trio this chromosome cannot analyse keeps an
/// all-missing placeholder that the aggregators skip.
pub fn parse_trio_calls<F: TableFamily>(record: &MarkerRecord, trios: &[Trio]) -> Result<Vec<TrioGenotypes>, String> {
    let mut calls = Vec::with_capacity(trios.len());
    for trio in trios {
        let mut member = [Genotype::Missing; 3];
        let Some(sex) = F::offspring_sex(trio.sex) else {
            calls.push(TrioGenotypes::new(member[0], member[1], member[2]));
            continue;
        };
        for (slot, (role, column)) in member.iter_mut().zip(trio.members()) {
            let cell = record.values.get(column).ok_or_else(|| {
                format!(
                    "column {} of the {:?} of {} is beyond the {} genotypes of {}",
                    column,
                    role,
                    trio.pedigree_id,
                    record.values.len(),
                    record.marker_id
                )
            })?;
            let genotype = cell
                .parse::<Genotype>()
                .map_err(|e| format!("{} ({:?} of {})", e, role, trio.pedigree_id))?;
            if !F::is_valid_call(genotype, role, sex) {
                return Err(format!(
                    "genotype '{}' is impossible on {} for the {:?} of {}",
                    genotype,
                    F::NAME,
                    role,
                    trio.pedigree_id
                ));
            }
            *slot = genotype;
        }
        calls.push(TrioGenotypes::new(member[0], member[1], member[2]));
    }
    Ok(calls)
}

/// TDT columns for one model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TdtReport {
    pub exact: Option<Statistic>,
    /// Present in bounded mode
    pub extended: Option<ExtendedTdt>,
}

/// FBAT columns for one model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FbatReport {
    pub exact: Option<Statistic>,
    pub extended: Option<Bounds>,
}

/// Every requested statistic for one genetic model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelReport {
    pub model: GeneticModel,
    pub tdt: Option<TdtReport>,
    pub fbat: Option<FbatReport>,
}

/// Compute the configured statistics from one marker's counts
pub fn model_report<F: TableFamily>(tally: &TrioTally<F>, model: GeneticModel, config: &AnalysisConfig) -> ModelReport {
    let case = &tally.groups.case;
    let control = &tally.groups.control;
    let bounded = config.mode.is_bounded();

    let tdt = config.tests.tdt.then(|| {
        let complete = case.complete_informative.transmission(model);
        TdtReport {
            exact: stats::std_tdt(complete),
            extended: bounded
                .then(|| stats::extended_tdt(complete, case.incomplete_informative.transmission_bounds(model))),
        }
    });

    let fbat = config.tests.fbat.then(|| {
        let case_score = case.complete_informative.score(model);
        let control_score = control.complete_informative.score(model);
        FbatReport {
            exact: stats::std_fbat(case_score, control_score, config.offset),
            extended: bounded.then(|| {
                stats::extended_fbat(
                    case_score,
                    control_score,
                    case.incomplete_informative.score_bounds(model),
                    control.incomplete_informative.score_bounds(model),
                    config.offset,
                )
            }),
        }
    });

    ModelReport { model, tdt, fbat }
}

/// Trio counts of a marker in its chromosome's tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerTally {
    Autosomal(TrioTally<Autosomal>),
    X(TrioTally<XLinked>),
}

impl MarkerTally {
    pub fn mie(&self) -> u32 {
        match self {
            MarkerTally::Autosomal(t) => t.mie,
            MarkerTally::X(t) => t.mie,
        }
    }

    pub fn total(&self) -> u32 {
        match self {
            MarkerTally::Autosomal(t) => t.total(),
            MarkerTally::X(t) => t.total(),
        }
    }

    pub fn count_columns(&self) -> Vec<String> {
        match self {
            MarkerTally::Autosomal(t) => t.count_columns(),
            MarkerTally::X(t) => t.count_columns(),
        }
    }
}

/// Everything reported for one tested marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerResult {
    pub marker_id: String,
    pub maf: Option<f64>,
    pub distribution: GenotypeDistribution,
    pub tally: MarkerTally,
    pub models: Vec<ModelReport>,
    pub diagnostics: Vec<String>,
}

/// What happened to one matrix row
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerOutcome {
    Tested(MarkerResult),
    /// Invalid genotype somewhere in the row; nothing is reported for it
    Skipped { marker_id: String, reason: String },
    /// Y or mitochondrial marker
    Excluded { marker_id: String },
}

struct FamilyAnalysis<F: TableFamily> {
    maf: Option<f64>,
    distribution: GenotypeDistribution,
    tally: TrioTally<F>,
    models: Vec<ModelReport>,
    diagnostics: Vec<String>,
}

impl<F: TableFamily> FamilyAnalysis<F> {
    fn into_result(self, marker_id: &str, wrap: fn(TrioTally<F>) -> MarkerTally) -> MarkerResult {
        MarkerResult {
            marker_id: marker_id.to_string(),
            maf: self.maf,
            distribution: self.distribution,
            tally: wrap(self.tally),
            models: self.models,
            diagnostics: self.diagnostics,
        }
    }
}

fn analyze_family<F: TableFamily>(
    record: &MarkerRecord,
    pedigrees: &PedigreeSet,
    config: &AnalysisConfig,
) -> Result<FamilyAnalysis<F>, String> {
    let trios = &pedigrees.trios;
    let calls = parse_trio_calls::<F>(record, trios)?;
    let distribution = record_genotype_distribution::<F>(&calls, trios);
    let maf = minor_allele_frequency::<F>(&calls, trios);
    let (tally, diagnostics) = classify_all_trios::<F>(&record.marker_id, &calls, trios);
    let models = config
        .models
        .iter()
        .map(|&model| model_report(&tally, model, config))
        .collect();

    Ok(FamilyAnalysis {
        maf,
        distribution,
        tally,
        models,
        diagnostics,
    })
}

/// Run the whole per-marker pipeline on one matrix row
pub fn analyze_marker(record: &MarkerRecord, pedigrees: &PedigreeSet, config: &AnalysisConfig) -> MarkerOutcome {
    let marker_id = &record.marker_id;
    let result = match record.kind {
        ChromosomeKind::Excluded => {
            return MarkerOutcome::Excluded {
                marker_id: marker_id.clone(),
            }
        }
        ChromosomeKind::Autosomal => analyze_family::<Autosomal>(record, pedigrees, config)
            .map(|a| a.into_result(marker_id, MarkerTally::Autosomal)),
        ChromosomeKind::X => {
            analyze_family::<XLinked>(record, pedigrees, config).map(|a| a.into_result(marker_id, MarkerTally::X))
        }
    };

    match result {
        Ok(result) => MarkerOutcome::Tested(result),
        Err(reason) => MarkerOutcome::Skipped {
            marker_id: marker_id.clone(),
            reason,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::{AnalysisMode, TestSelection};
    use crate::core::tables::{AutosomalComplete, Category};
    use crate::data::genotype::Affection;

    fn trio(id: &str, base: usize, affection: Affection, sex: Sex) -> Trio {
        Trio {
            pedigree_id: id.to_string(),
            father: base,
            mother: base + 1,
            offspring: base + 2,
            affection,
            sex: Some(sex),
        }
    }

    fn pedigrees(specs: &[(Affection, Sex)]) -> PedigreeSet {
        PedigreeSet {
            trios: specs
                .iter()
                .enumerate()
                .map(|(i, &(a, s))| trio(&format!("ped{}", i + 1), i * 3, a, s))
                .collect(),
            ..Default::default()
        }
    }

    fn record(marker_id: &str, cells: &[&str]) -> MarkerRecord {
        MarkerRecord {
            marker_id: marker_id.to_string(),
            kind: ChromosomeKind::from_marker_id(marker_id),
            values: cells.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn config(models: Vec<GeneticModel>) -> AnalysisConfig {
        AnalysisConfig::new(
            TestSelection { tdt: true, fbat: true },
            models,
            AnalysisMode::Bounded,
            0.5,
        )
        .unwrap()
    }

    fn tested(outcome: MarkerOutcome) -> MarkerResult {
        match outcome {
            MarkerOutcome::Tested(result) => result,
            other => panic!("expected a tested marker, got {:?}", other),
        }
    }

    #[test]
    fn test_het_het_het_scenario() {
        let peds = pedigrees(&[(Affection::Case, Sex::Male); 10]);
        let cells: Vec<&str> = std::iter::repeat("1").take(30).collect();
        let result = tested(analyze_marker(&record("chr1:1000", &cells), &peds, &config(vec![GeneticModel::Additive])));

        let MarkerTally::Autosomal(tally) = &result.tally else {
            panic!("autosomal marker expected");
        };
        let male = &tally.groups.case.complete_informative.male;
        assert_eq!(male.get(AutosomalComplete::HetHetToHet), 10);
        assert_eq!(male.total(), 10);
        assert_eq!(result.tally.mie(), 0);
        assert_eq!(result.maf, Some(0.5));
        assert_eq!(result.distribution, GenotypeDistribution([0, 30, 0, 0]));

        let tdt = result.models[0].tdt.unwrap();
        let exact = tdt.exact.unwrap();
        assert_eq!(exact.value, 0.0);
        assert_eq!(exact.p_value, 1.0);
        let ext = tdt.extended.unwrap();
        assert_eq!((ext.range.b_min, ext.range.c_max), (10, 10));
        assert_eq!(ext.bounds.min, tdt.exact);
    }

    #[test]
    fn test_maf_boundaries() {
        let peds = pedigrees(&[(Affection::Case, Sex::Female), (Affection::Control, Sex::Male)]);
        let trios = &peds.trios;

        let all_ref = [TrioGenotypes::new(Genotype::RefHom, Genotype::RefHom, Genotype::RefHom); 2];
        assert_eq!(minor_allele_frequency::<Autosomal>(&all_ref, trios), Some(0.0));

        let all_missing = [TrioGenotypes::new(Genotype::Missing, Genotype::Missing, Genotype::Missing); 2];
        assert_eq!(minor_allele_frequency::<Autosomal>(&all_missing, trios), None);
        assert_eq!(minor_allele_frequency::<XLinked>(&all_missing, trios), None);

        let all_alt = [TrioGenotypes::new(Genotype::AltHom, Genotype::AltHom, Genotype::AltHom); 2];
        assert_eq!(minor_allele_frequency::<Autosomal>(&all_alt, trios), Some(0.0));
    }

    #[test]
    fn test_x_allele_copies() {
        let peds = pedigrees(&[(Affection::Case, Sex::Male)]);
        // Father alt (1 copy), mother het (1 ref, 1 alt), son ref (1 copy)
        let calls = [TrioGenotypes::new(Genotype::Het, Genotype::Het, Genotype::RefHom)];
        let counts = allele_counts::<XLinked>(&calls, &peds.trios);
        assert_eq!(counts, AlleleCounts { reference: 2, alternate: 2 });

        let distribution = record_genotype_distribution::<XLinked>(&calls, &peds.trios);
        assert_eq!(distribution, GenotypeDistribution([1, 1, 1, 0]));

        let autosomal = record_genotype_distribution::<Autosomal>(&calls, &peds.trios);
        assert_eq!(autosomal, GenotypeDistribution([1, 2, 0, 0]));
        assert_eq!(autosomal.to_string(), "[1,2,0,0]");
    }

    #[test]
    fn test_invalid_genotypes_skip_marker() {
        let peds = pedigrees(&[(Affection::Case, Sex::Male)]);
        let cfg = config(vec![GeneticModel::Additive]);

        let outcome = analyze_marker(&record("chr2:5", &["0", "3", "1"]), &peds, &cfg);
        assert!(matches!(outcome, MarkerOutcome::Skipped { .. }));

        // A son cannot be homozygous alternate on X
        let outcome = analyze_marker(&record("chrX:5", &["0", "1", "2"]), &peds, &cfg);
        assert!(matches!(outcome, MarkerOutcome::Skipped { .. }));

        // The same call is fine on an autosome
        let outcome = analyze_marker(&record("chr3:5", &["0", "1", "2"]), &peds, &cfg);
        assert!(matches!(outcome, MarkerOutcome::Tested(_)));

        let outcome = analyze_marker(&record("chrY:5", &["0", "1", "2"]), &peds, &cfg);
        assert!(matches!(outcome, MarkerOutcome::Excluded { .. }));
    }

    #[test]
    fn test_mie_diagnostics() {
        let peds = pedigrees(&[(Affection::Case, Sex::Female), (Affection::Control, Sex::Female)]);
        let cells = ["0", "0", "1", "NA", "0", "2"];
        let result = tested(analyze_marker(&record("chr4:9", &cells), &peds, &config(vec![GeneticModel::Additive])));
        // {0,0}->1 is non-informative (parents only); {NA,0}->2 is impossible
        assert_eq!(result.tally.mie(), 1);
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].contains("chr4:9"));
        assert!(result.diagnostics[0].contains("ped2"));
        assert!(result.diagnostics[0].contains("[NA 0 2]"));
        assert_eq!(result.tally.total(), 2);
    }

    #[test]
    fn test_conservation_over_all_models() {
        let specs = [
            (Affection::Case, Sex::Male),
            (Affection::Case, Sex::Female),
            (Affection::Control, Sex::Male),
            (Affection::Control, Sex::Female),
        ];
        let peds = pedigrees(&specs);
        let cfg = config(GeneticModel::ALL.to_vec());
        let codes = ["0", "1", "2", "NA"];

        for kind in ["chr7:1", "chrX:1"] {
            for &a in &codes {
                for &b in &codes {
                    for &c in &codes {
                        let row: Vec<&str> = (0..specs.len()).flat_map(|_| [a, b, c]).collect();
                        match analyze_marker(&record(kind, &row), &peds, &cfg) {
                            MarkerOutcome::Tested(result) => {
                                assert_eq!(result.tally.total(), specs.len() as u32);
                                assert_eq!(result.models.len(), 3);
                                assert_eq!(result.distribution.total(), 12);
                                assert_eq!(result.diagnostics.len() as u32, result.tally.mie());
                            }
                            MarkerOutcome::Skipped { .. } => assert!(kind.starts_with("chrX")),
                            MarkerOutcome::Excluded { .. } => panic!("not an excluded chromosome"),
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_bounded_columns_follow_mode() {
        let peds = pedigrees(&[(Affection::Case, Sex::Male), (Affection::Control, Sex::Male)]);
        let mut cfg = config(vec![GeneticModel::Dominant]);
        cfg.mode = AnalysisMode::Exact;
        cfg.tests = TestSelection { tdt: false, fbat: true };
        let cells = ["0", "1", "1", "1", "1", "NA"];
        let result = tested(analyze_marker(&record("chr1:1", &cells), &peds, &cfg));
        let report = result.models[0];
        assert_eq!(report.model, GeneticModel::Dominant);
        assert!(report.tdt.is_none());
        let fbat = report.fbat.unwrap();
        assert!(fbat.extended.is_none());
        // case {0,1}->1 dominant: U = 0.5, Var = 0.25 -> Z = 0.5*0.5 / sqrt(0.25*0.25)
        assert!((fbat.exact.unwrap().value - 1.0).abs() < 1e-12);
        assert_eq!(AutosomalComplete::count(), 7);
    }

    #[test]
    fn test_unknown_sex_counted_on_autosomes_only() {
        let mut peds = pedigrees(&[(Affection::Case, Sex::Female), (Affection::Case, Sex::Male)]);
        peds.trios[1].sex = None;
        let cfg = config(vec![GeneticModel::Additive]);

        let autosomal = tested(analyze_marker(&record("chr1:10", &["0", "1", "1", "0", "1", "1"]), &peds, &cfg));
        let MarkerTally::Autosomal(tally) = &autosomal.tally else {
            panic!("autosomal marker expected");
        };
        assert_eq!(autosomal.tally.total(), 2);
        assert_eq!(tally.groups.case.complete_informative.female.total(), 1);
        assert_eq!(tally.groups.case.complete_informative.male.total(), 1);
        assert_eq!(autosomal.distribution.total(), 6);

        // The second father's `2` would be impossible on X, but that trio is not read there
        let x = tested(analyze_marker(&record("chrX:10", &["0", "1", "1", "2", "1", "2"]), &peds, &cfg));
        let MarkerTally::X(tally) = &x.tally else {
            panic!("chrX marker expected");
        };
        assert_eq!(x.tally.total(), 1);
        assert_eq!(tally.groups.case.complete_informative.female.total(), 1);
        assert_eq!(tally.groups.case.complete_informative.male.total(), 0);
        assert_eq!(x.distribution.total(), 3);
        // Father 0 (one copy), mother and daughter 1
        assert_eq!(x.maf, Some(0.4));
        assert!(x.diagnostics.is_empty());
    }

    #[test]
    fn test_short_row_names_the_pedigree() {
        let peds = pedigrees(&[(Affection::Case, Sex::Male), (Affection::Case, Sex::Male)]);
        let outcome = analyze_marker(&record("chr5:1", &["0", "1", "1", "0"]), &peds, &config(vec![GeneticModel::Additive]));
        match outcome {
            MarkerOutcome::Skipped { marker_id, reason } => {
                assert_eq!(marker_id, "chr5:1");
                assert!(reason.contains("ped2"), "{}", reason);
                assert!(reason.contains("beyond"), "{}", reason);
            }
            other => panic!("expected a skipped marker, got {:?}", other),
        }
    }

    #[test]
    fn test_fbat_flips_sign_when_labels_swap() {
        // Cases lean toward the alternate allele, controls mirror them
        let cases = [["0", "1", "1"], ["0", "1", "1"], ["0", "1", "1"], ["0", "1", "0"]];
        let controls = [["0", "1", "0"], ["0", "1", "0"], ["0", "1", "0"], ["0", "1", "1"]];
        let row: Vec<&str> = cases.iter().chain(controls.iter()).flatten().copied().collect();

        let mut specs = vec![(Affection::Case, Sex::Male); 4];
        specs.extend(vec![(Affection::Control, Sex::Male); 4]);
        let forward = pedigrees(&specs);
        let mut swapped = forward.clone();
        for trio in &mut swapped.trios {
            trio.affection = match trio.affection {
                Affection::Case => Affection::Control,
                Affection::Control => Affection::Case,
            };
        }

        let cfg = config(GeneticModel::ALL.to_vec());
        assert_eq!(cfg.offset, 0.5);
        for marker in ["chr8:3", "chrX:3"] {
            let a = tested(analyze_marker(&record(marker, &row), &forward, &cfg));
            let b = tested(analyze_marker(&record(marker, &row), &swapped, &cfg));
            let mut defined = 0;
            for (ma, mb) in a.models.iter().zip(&b.models) {
                let za = ma.fbat.unwrap().exact;
                let zb = mb.fbat.unwrap().exact;
                match (za, zb) {
                    (Some(za), Some(zb)) => {
                        assert!(za.value != 0.0);
                        assert!((za.value + zb.value).abs() < 1e-12, "{} vs {}", za.value, zb.value);
                        assert!((za.p_value - zb.p_value).abs() < 1e-12);
                        defined += 1;
                    }
                    (None, None) => {}
                    other => panic!("swap changed definedness: {:?}", other),
                }
            }
            assert!(defined >= 1, "no defined FBAT at {}", marker);
        }
    }

    #[test]
    fn test_extended_tdt_bound_ordering_over_incomplete_trios() {
        let codes = ["0", "1", "2", "NA"];
        let mut incomplete = Vec::new();
        for &f in &codes {
            for &m in &codes {
                for &o in &codes {
                    if [f, m, o].contains(&"NA") {
                        incomplete.push([f, m, o]);
                    }
                }
            }
        }
        let backgrounds = [(0, 0), (2, 0), (0, 2), (1, 3)];
        let cfg = config(GeneticModel::ALL.to_vec());
        let mut checked = 0;

        for marker in ["chr1:1", "chrX:1"] {
            for sex in [Sex::Male, Sex::Female] {
                for first in &incomplete {
                    for second in incomplete.iter().step_by(5) {
                        for n in 1..=2 {
                            for &(to_ref, to_alt) in &backgrounds {
                                let mut rows: Vec<[&str; 3]> = vec![*first; n];
                                rows.push(*second);
                                rows.extend(std::iter::repeat(["0", "1", "0"]).take(to_ref));
                                rows.extend(std::iter::repeat(["0", "1", "1"]).take(to_alt));
                                let peds = pedigrees(&vec![(Affection::Case, sex); rows.len()]);
                                let cells: Vec<&str> = rows.iter().flatten().copied().collect();

                                let MarkerOutcome::Tested(result) = analyze_marker(&record(marker, &cells), &peds, &cfg)
                                else {
                                    continue;
                                };
                                for report in &result.models {
                                    let bounds = report.tdt.unwrap().extended.unwrap().bounds;
                                    if let (Some(min), Some(max)) = (bounds.min, bounds.max) {
                                        assert!(min.value <= max.value, "{} {:?} {:?}", marker, rows, report.model);
                                        assert!(min.p_value >= max.p_value, "{} {:?} {:?}", marker, rows, report.model);
                                        checked += 1;
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        assert!(checked > 1000);
    }
}
