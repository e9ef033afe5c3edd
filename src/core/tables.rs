// tables.rs - Mating-type categories and their per-model coefficients
//
// Each table family is a closed enum. Coefficients are exhaustive matches that
// return an `[additive, dominant, recessive]` row, so adding a category without
// its coefficients does not compile.
//
// Category names read `<father><mother>To<offspring>`. Autosomal parents are an
// unordered pair and are named lowest genotype first. On X the father (and a
// male offspring) is hemizygous, so his `1` call is named `Alt`.

use super::analysis::GeneticModel;
use crate::data::genotype::Genotype;
use crate::data::genotype::Genotype::{AltHom as A, Het as H, Missing as M, RefHom as R};
use std::fmt;
use std::ops::Add;

const THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;
const TWO_NINTHS: f64 = 2.0 / 9.0;

/// A member of one category table
pub trait Category: Copy + Eq + fmt::Debug + 'static {
    /// Every category in the table, in output-vector order
    const ALL: &'static [Self];

    fn index(self) -> usize;

    fn label(self) -> &'static str;

    fn count() -> usize {
        Self::ALL.len()
    }
}

/// Reference (B) and alternate (C) allele transmissions contributed by one trio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transmission {
    pub b: u32,
    pub c: u32,
}

/// FBAT score and variance contributed by one trio
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Score {
    pub u: f64,
    pub var_u: f64,
}

/// Worst-case transmissions for a trio with a missing call.
///
/// `b_max`/`c_max` are the most the trio could add under any completion;
/// `b_min`/`c_min` are added only where every completion transmits that allele.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransmissionBounds {
    pub b_max: u32,
    pub c_max: u32,
    pub b_min: u32,
    pub c_min: u32,
}

/// Lowest and highest score over every completion of a trio with a missing call
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBounds {
    pub low: Score,
    pub high: Score,
}

impl Transmission {
    /// Contribution of `n` trios of the same category
    pub fn times(self, n: u32) -> Self {
        t(self.b * n, self.c * n)
    }
}

impl Add for Transmission {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        t(self.b + other.b, self.c + other.c)
    }
}

impl Score {
    pub fn times(self, n: u32) -> Self {
        s(self.u * f64::from(n), self.var_u * f64::from(n))
    }

    /// Weight the score by an affection offset; the variance takes the squared weight
    pub fn weighted(self, weight: f64) -> Self {
        s(self.u * weight, self.var_u * weight * weight)
    }
}

impl Add for Score {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        s(self.u + other.u, self.var_u + other.var_u)
    }
}

impl TransmissionBounds {
    pub fn times(self, n: u32) -> Self {
        tb(self.b_max * n, self.c_max * n, self.b_min * n, self.c_min * n)
    }
}

impl Add for TransmissionBounds {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        tb(
            self.b_max + other.b_max,
            self.c_max + other.c_max,
            self.b_min + other.b_min,
            self.c_min + other.c_min,
        )
    }
}

impl ScoreBounds {
    pub fn times(self, n: u32) -> Self {
        ScoreBounds {
            low: self.low.times(n),
            high: self.high.times(n),
        }
    }
}

impl Add for ScoreBounds {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        ScoreBounds {
            low: self.low + other.low,
            high: self.high + other.high,
        }
    }
}

/// Complete trios that carry transmission information
pub trait InformativeCategory: Category {
    fn transmission(self, model: GeneticModel) -> Transmission;
    fn score(self, model: GeneticModel) -> Score;
}

/// Incomplete trios that could carry transmission information
pub trait IncompleteCategory: Category {
    fn transmission_bounds(self, model: GeneticModel) -> TransmissionBounds;
    fn score_bounds(self, model: GeneticModel) -> ScoreBounds;
}

const fn t(b: u32, c: u32) -> Transmission {
    Transmission { b, c }
}

const fn s(u: f64, var_u: f64) -> Score {
    Score { u, var_u }
}

const fn tb(b_max: u32, c_max: u32, b_min: u32, c_min: u32) -> TransmissionBounds {
    TransmissionBounds { b_max, c_max, b_min, c_min }
}

const fn sb(low_u: f64, low_var: f64, high_u: f64, high_var: f64) -> ScoreBounds {
    ScoreBounds {
        low: s(low_u, low_var),
        high: s(high_u, high_var),
    }
}

macro_rules! categories {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Category for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn index(self) -> usize {
                self as usize
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

/// Order an autosomal parental pair so lookups ignore which parent is which
pub fn parental_pair(father: Genotype, mother: Genotype) -> (Genotype, Genotype) {
    if father <= mother {
        (father, mother)
    } else {
        (mother, father)
    }
}

// ============================================================================
// AUTOSOMAL
// ============================================================================

categories! {
    /// Complete autosomal trios with at least one heterozygous parent
    AutosomalComplete {
        RefHetToRef => "{0,1}->0",
        RefHetToHet => "{0,1}->1",
        HetHetToRef => "{1,1}->0",
        HetHetToHet => "{1,1}->1",
        HetHetToAlt => "{1,1}->2",
        HetAltToHet => "{1,2}->1",
        HetAltToAlt => "{1,2}->2",
    }
}

impl AutosomalComplete {
    pub fn lookup(father: Genotype, mother: Genotype, offspring: Genotype) -> Option<Self> {
        use AutosomalComplete::*;
        let (lo, hi) = parental_pair(father, mother);
        match (lo, hi, offspring) {
            (R, H, R) => Some(RefHetToRef),
            (R, H, H) => Some(RefHetToHet),
            (H, H, R) => Some(HetHetToRef),
            (H, H, H) => Some(HetHetToHet),
            (H, H, A) => Some(HetHetToAlt),
            (H, A, H) => Some(HetAltToHet),
            (H, A, A) => Some(HetAltToAlt),
            _ => None,
        }
    }
}

impl InformativeCategory for AutosomalComplete {
    fn transmission(self, model: GeneticModel) -> Transmission {
        use AutosomalComplete::*;
        model.select(match self {
            RefHetToRef => [t(1, 0), t(1, 0), t(0, 0)],
            RefHetToHet => [t(0, 1), t(0, 1), t(0, 0)],
            HetHetToRef => [t(2, 0), t(1, 0), t(1, 0)],
            HetHetToHet => [t(1, 1), t(0, 1), t(1, 0)],
            HetHetToAlt => [t(0, 2), t(0, 1), t(0, 1)],
            HetAltToHet => [t(1, 0), t(0, 0), t(1, 0)],
            HetAltToAlt => [t(0, 1), t(0, 0), t(0, 1)],
        })
    }

    fn score(self, model: GeneticModel) -> Score {
        use AutosomalComplete::*;
        model.select(match self {
            RefHetToRef => [s(-0.5, 0.25), s(-0.5, 0.25), s(0.0, 0.0)],
            RefHetToHet => [s(0.5, 0.25), s(0.5, 0.25), s(0.0, 0.0)],
            HetHetToRef => [s(-1.0, 0.5), s(-TWO_THIRDS, TWO_NINTHS), s(-THIRD, TWO_NINTHS)],
            HetHetToHet => [s(0.0, 0.5), s(THIRD, TWO_NINTHS), s(TWO_THIRDS, TWO_NINTHS)],
            HetHetToAlt => [s(1.0, 0.5), s(THIRD, TWO_NINTHS), s(TWO_THIRDS, TWO_NINTHS)],
            HetAltToHet => [s(-0.5, 0.25), s(0.0, 0.0), s(-0.5, 0.25)],
            HetAltToAlt => [s(0.5, 0.25), s(0.0, 0.0), s(0.5, 0.25)],
        })
    }
}

categories! {
    /// Autosomal trios with at least one missing call that may still be informative
    AutosomalIncomplete {
        MissMissToMiss => "{NA,NA}->NA",
        MissMissToRef => "{NA,NA}->0",
        MissMissToHet => "{NA,NA}->1",
        MissMissToAlt => "{NA,NA}->2",
        RefMissToMiss => "{NA,0}->NA",
        RefMissToRef => "{NA,0}->0",
        RefMissToHet => "{NA,0}->1",
        HetMissToMiss => "{NA,1}->NA",
        HetMissToRef => "{NA,1}->0",
        HetMissToHet => "{NA,1}->1",
        HetMissToAlt => "{NA,1}->2",
        AltMissToMiss => "{NA,2}->NA",
        AltMissToHet => "{NA,2}->1",
        AltMissToAlt => "{NA,2}->2",
        RefHetToMiss => "{0,1}->NA",
        HetHetToMiss => "{1,1}->NA",
        HetAltToMiss => "{1,2}->NA",
    }
}

impl AutosomalIncomplete {
    pub fn lookup(father: Genotype, mother: Genotype, offspring: Genotype) -> Option<Self> {
        use AutosomalIncomplete::*;
        let (lo, hi) = parental_pair(father, mother);
        match (lo, hi, offspring) {
            (M, M, M) => Some(MissMissToMiss),
            (M, M, R) => Some(MissMissToRef),
            (M, M, H) => Some(MissMissToHet),
            (M, M, A) => Some(MissMissToAlt),
            (R, M, M) => Some(RefMissToMiss),
            (R, M, R) => Some(RefMissToRef),
            (R, M, H) => Some(RefMissToHet),
            (H, M, M) => Some(HetMissToMiss),
            (H, M, R) => Some(HetMissToRef),
            (H, M, H) => Some(HetMissToHet),
            (H, M, A) => Some(HetMissToAlt),
            (A, M, M) => Some(AltMissToMiss),
            (A, M, H) => Some(AltMissToHet),
            (A, M, A) => Some(AltMissToAlt),
            (R, H, M) => Some(RefHetToMiss),
            (H, H, M) => Some(HetHetToMiss),
            (H, A, M) => Some(HetAltToMiss),
            _ => None,
        }
    }
}

impl IncompleteCategory for AutosomalIncomplete {
    fn transmission_bounds(self, model: GeneticModel) -> TransmissionBounds {
        use AutosomalIncomplete::*;
        model.select(match self {
            MissMissToMiss => [tb(2, 2, 0, 0), tb(1, 1, 0, 0), tb(1, 1, 0, 0)],
            MissMissToRef => [tb(2, 0, 0, 0), tb(1, 0, 0, 0), tb(1, 0, 0, 0)],
            MissMissToHet => [tb(1, 1, 0, 0), tb(0, 1, 0, 0), tb(1, 0, 0, 0)],
            MissMissToAlt => [tb(0, 2, 0, 0), tb(0, 1, 0, 0), tb(0, 1, 0, 0)],
            RefMissToMiss => [tb(1, 1, 0, 0), tb(1, 1, 0, 0), tb(0, 0, 0, 0)],
            RefMissToRef => [tb(1, 0, 0, 0), tb(1, 0, 0, 0), tb(0, 0, 0, 0)],
            RefMissToHet => [tb(0, 1, 0, 0), tb(0, 1, 0, 0), tb(0, 0, 0, 0)],
            HetMissToMiss => [tb(2, 2, 0, 0), tb(1, 1, 0, 0), tb(1, 1, 0, 0)],
            HetMissToRef => [tb(2, 0, 1, 0), tb(1, 0, 1, 0), tb(1, 0, 0, 0)],
            HetMissToHet => [tb(1, 1, 0, 0), tb(0, 1, 0, 0), tb(1, 0, 0, 0)],
            HetMissToAlt => [tb(0, 2, 0, 1), tb(0, 1, 0, 0), tb(0, 1, 0, 1)],
            AltMissToMiss => [tb(1, 1, 0, 0), tb(0, 0, 0, 0), tb(1, 1, 0, 0)],
            AltMissToHet => [tb(1, 0, 0, 0), tb(0, 0, 0, 0), tb(1, 0, 0, 0)],
            AltMissToAlt => [tb(0, 1, 0, 0), tb(0, 0, 0, 0), tb(0, 1, 0, 0)],
            RefHetToMiss => [tb(1, 1, 0, 0), tb(1, 1, 0, 0), tb(0, 0, 0, 0)],
            HetHetToMiss => [tb(2, 2, 0, 0), tb(1, 1, 0, 0), tb(1, 1, 0, 0)],
            HetAltToMiss => [tb(1, 1, 0, 0), tb(0, 0, 0, 0), tb(1, 1, 0, 0)],
        })
    }

    fn score_bounds(self, model: GeneticModel) -> ScoreBounds {
        use AutosomalIncomplete::*;
        model.select(match self {
            MissMissToMiss | HetMissToMiss => [
                sb(-1.0, 0.5, 1.0, 0.5),
                sb(-TWO_THIRDS, TWO_NINTHS, 0.5, 0.25),
                sb(-0.5, 0.25, TWO_THIRDS, TWO_NINTHS),
            ],
            MissMissToRef => [
                sb(-1.0, 0.5, 0.0, 0.0),
                sb(-TWO_THIRDS, TWO_NINTHS, 0.0, 0.0),
                sb(-THIRD, TWO_NINTHS, 0.0, 0.0),
            ],
            MissMissToHet | HetMissToHet => [
                sb(-0.5, 0.25, 0.5, 0.25),
                sb(0.0, 0.0, 0.5, 0.25),
                sb(-0.5, 0.25, TWO_THIRDS, TWO_NINTHS),
            ],
            MissMissToAlt => [
                sb(0.0, 0.0, 1.0, 0.5),
                sb(0.0, 0.0, THIRD, TWO_NINTHS),
                sb(0.0, 0.0, TWO_THIRDS, TWO_NINTHS),
            ],
            RefMissToMiss | RefHetToMiss => [
                sb(-0.5, 0.25, 0.5, 0.25),
                sb(-0.5, 0.25, 0.5, 0.25),
                sb(0.0, 0.0, 0.0, 0.0),
            ],
            RefMissToRef => [
                sb(-0.5, 0.25, 0.0, 0.0),
                sb(-0.5, 0.25, 0.0, 0.0),
                sb(0.0, 0.0, 0.0, 0.0),
            ],
            RefMissToHet => [
                sb(0.0, 0.0, 0.5, 0.25),
                sb(0.0, 0.0, 0.5, 0.25),
                sb(0.0, 0.0, 0.0, 0.0),
            ],
            HetMissToRef => [
                sb(-1.0, 0.5, -0.5, 0.25),
                sb(-TWO_THIRDS, TWO_NINTHS, -0.5, 0.25),
                sb(-THIRD, TWO_NINTHS, 0.0, 0.0),
            ],
            HetMissToAlt => [
                sb(0.5, 0.25, 1.0, 0.5),
                sb(0.0, 0.0, THIRD, TWO_NINTHS),
                sb(0.5, 0.25, TWO_THIRDS, TWO_NINTHS),
            ],
            AltMissToMiss | HetAltToMiss => [
                sb(-0.5, 0.25, 0.5, 0.25),
                sb(0.0, 0.0, 0.0, 0.0),
                sb(-0.5, 0.25, 0.5, 0.25),
            ],
            AltMissToHet => [
                sb(-0.5, 0.25, 0.0, 0.0),
                sb(0.0, 0.0, 0.0, 0.0),
                sb(-0.5, 0.25, 0.0, 0.0),
            ],
            AltMissToAlt => [
                sb(0.0, 0.0, 0.5, 0.25),
                sb(0.0, 0.0, 0.0, 0.0),
                sb(0.0, 0.0, 0.5, 0.25),
            ],
            HetHetToMiss => [
                sb(-1.0, 0.5, 1.0, 0.5),
                sb(-TWO_THIRDS, TWO_NINTHS, THIRD, TWO_NINTHS),
                sb(-THIRD, TWO_NINTHS, TWO_THIRDS, TWO_NINTHS),
            ],
        })
    }
}

categories! {
    /// Autosomal mating types that can never transmit information, keyed on the parents
    AutosomalNonInformative {
        RefRef => "{0,0}",
        RefAlt => "{0,2}",
        AltAlt => "{2,2}",
    }
}

impl AutosomalNonInformative {
    /// The offspring call plays no part in this lookup
    pub fn lookup(father: Genotype, mother: Genotype) -> Option<Self> {
        use AutosomalNonInformative::*;
        match parental_pair(father, mother) {
            (R, R) => Some(RefRef),
            (R, A) => Some(RefAlt),
            (A, A) => Some(AltAlt),
            _ => None,
        }
    }
}

// ============================================================================
// X CHROMOSOME
// ============================================================================

categories! {
    /// Complete X trios with a heterozygous mother and a son
    XMaleComplete {
        RefHetToRef => "(0,1,0)",
        RefHetToAlt => "(0,1,1)",
        AltHetToRef => "(1,1,0)",
        AltHetToAlt => "(1,1,1)",
    }
}

impl XMaleComplete {
    pub fn lookup(father: Genotype, mother: Genotype, offspring: Genotype) -> Option<Self> {
        use XMaleComplete::*;
        match (father, mother, offspring) {
            (R, H, R) => Some(RefHetToRef),
            (R, H, H) => Some(RefHetToAlt),
            (H, H, R) => Some(AltHetToRef),
            (H, H, H) => Some(AltHetToAlt),
            _ => None,
        }
    }
}

impl InformativeCategory for XMaleComplete {
    // A son inherits only the maternal allele, so every model agrees
    fn transmission(self, _model: GeneticModel) -> Transmission {
        use XMaleComplete::*;
        match self {
            RefHetToRef | AltHetToRef => t(1, 0),
            RefHetToAlt | AltHetToAlt => t(0, 1),
        }
    }

    fn score(self, _model: GeneticModel) -> Score {
        use XMaleComplete::*;
        match self {
            RefHetToRef | AltHetToRef => s(-0.5, 0.25),
            RefHetToAlt | AltHetToAlt => s(0.5, 0.25),
        }
    }
}

categories! {
    /// Complete X trios with a heterozygous mother and a daughter
    XFemaleComplete {
        RefHetToRef => "(0,1,0)",
        RefHetToHet => "(0,1,1)",
        AltHetToHet => "(1,1,1)",
        AltHetToAlt => "(1,1,2)",
    }
}

impl XFemaleComplete {
    pub fn lookup(father: Genotype, mother: Genotype, offspring: Genotype) -> Option<Self> {
        use XFemaleComplete::*;
        match (father, mother, offspring) {
            (R, H, R) => Some(RefHetToRef),
            (R, H, H) => Some(RefHetToHet),
            (H, H, H) => Some(AltHetToHet),
            (H, H, A) => Some(AltHetToAlt),
            _ => None,
        }
    }
}

impl InformativeCategory for XFemaleComplete {
    fn transmission(self, model: GeneticModel) -> Transmission {
        use XFemaleComplete::*;
        model.select(match self {
            RefHetToRef => [t(1, 0), t(1, 0), t(0, 0)],
            RefHetToHet => [t(0, 1), t(0, 1), t(0, 0)],
            AltHetToHet => [t(1, 0), t(0, 0), t(1, 0)],
            AltHetToAlt => [t(0, 1), t(0, 0), t(0, 1)],
        })
    }

    fn score(self, model: GeneticModel) -> Score {
        use XFemaleComplete::*;
        model.select(match self {
            RefHetToRef => [s(-0.5, 0.25), s(-0.5, 0.25), s(0.0, 0.0)],
            RefHetToHet => [s(0.5, 0.25), s(0.5, 0.25), s(0.0, 0.0)],
            AltHetToHet => [s(-0.5, 0.25), s(0.0, 0.0), s(-0.5, 0.25)],
            AltHetToAlt => [s(0.5, 0.25), s(0.0, 0.0), s(0.5, 0.25)],
        })
    }
}

categories! {
    /// X trios with a son and at least one missing call
    XMaleIncomplete {
        MissMissToMiss => "(NA,NA,NA)",
        MissMissToRef => "(NA,NA,0)",
        MissMissToAlt => "(NA,NA,1)",
        MissHetToMiss => "(NA,1,NA)",
        MissHetToRef => "(NA,1,0)",
        MissHetToAlt => "(NA,1,1)",
        RefMissToMiss => "(0,NA,NA)",
        RefMissToRef => "(0,NA,0)",
        RefMissToAlt => "(0,NA,1)",
        AltMissToMiss => "(1,NA,NA)",
        AltMissToRef => "(1,NA,0)",
        AltMissToAlt => "(1,NA,1)",
        RefHetToMiss => "(0,1,NA)",
        AltHetToMiss => "(1,1,NA)",
    }
}

impl XMaleIncomplete {
    pub fn lookup(father: Genotype, mother: Genotype, offspring: Genotype) -> Option<Self> {
        use XMaleIncomplete::*;
        match (father, mother, offspring) {
            (M, M, M) => Some(MissMissToMiss),
            (M, M, R) => Some(MissMissToRef),
            (M, M, H) => Some(MissMissToAlt),
            (M, H, M) => Some(MissHetToMiss),
            (M, H, R) => Some(MissHetToRef),
            (M, H, H) => Some(MissHetToAlt),
            (R, M, M) => Some(RefMissToMiss),
            (R, M, R) => Some(RefMissToRef),
            (R, M, H) => Some(RefMissToAlt),
            (H, M, M) => Some(AltMissToMiss),
            (H, M, R) => Some(AltMissToRef),
            (H, M, H) => Some(AltMissToAlt),
            (R, H, M) => Some(RefHetToMiss),
            (H, H, M) => Some(AltHetToMiss),
            _ => None,
        }
    }
}

impl IncompleteCategory for XMaleIncomplete {
    fn transmission_bounds(self, _model: GeneticModel) -> TransmissionBounds {
        use XMaleIncomplete::*;
        match self {
            MissHetToRef => tb(1, 0, 1, 0),
            MissHetToAlt => tb(0, 1, 0, 1),
            MissMissToRef | RefMissToRef | AltMissToRef => tb(1, 0, 0, 0),
            MissMissToAlt | RefMissToAlt | AltMissToAlt => tb(0, 1, 0, 0),
            MissMissToMiss | MissHetToMiss | RefMissToMiss | AltMissToMiss | RefHetToMiss
            | AltHetToMiss => tb(1, 1, 0, 0),
        }
    }

    fn score_bounds(self, _model: GeneticModel) -> ScoreBounds {
        use XMaleIncomplete::*;
        match self {
            MissHetToRef => sb(-0.5, 0.25, -0.5, 0.25),
            MissHetToAlt => sb(0.5, 0.25, 0.5, 0.25),
            MissMissToRef | RefMissToRef | AltMissToRef => sb(-0.5, 0.25, 0.0, 0.0),
            MissMissToAlt | RefMissToAlt | AltMissToAlt => sb(0.0, 0.0, 0.5, 0.25),
            MissMissToMiss | MissHetToMiss | RefMissToMiss | AltMissToMiss | RefHetToMiss
            | AltHetToMiss => sb(-0.5, 0.25, 0.5, 0.25),
        }
    }
}

categories! {
    /// X trios with a daughter and at least one missing call
    XFemaleIncomplete {
        MissMissToMiss => "(NA,NA,NA)",
        MissMissToRef => "(NA,NA,0)",
        MissMissToHet => "(NA,NA,1)",
        MissMissToAlt => "(NA,NA,2)",
        MissHetToMiss => "(NA,1,NA)",
        MissHetToRef => "(NA,1,0)",
        MissHetToHet => "(NA,1,1)",
        MissHetToAlt => "(NA,1,2)",
        RefMissToMiss => "(0,NA,NA)",
        RefMissToRef => "(0,NA,0)",
        RefMissToHet => "(0,NA,1)",
        AltMissToMiss => "(1,NA,NA)",
        AltMissToHet => "(1,NA,1)",
        AltMissToAlt => "(1,NA,2)",
        RefHetToMiss => "(0,1,NA)",
        AltHetToMiss => "(1,1,NA)",
    }
}

impl XFemaleIncomplete {
    pub fn lookup(father: Genotype, mother: Genotype, offspring: Genotype) -> Option<Self> {
        use XFemaleIncomplete::*;
        match (father, mother, offspring) {
            (M, M, M) => Some(MissMissToMiss),
            (M, M, R) => Some(MissMissToRef),
            (M, M, H) => Some(MissMissToHet),
            (M, M, A) => Some(MissMissToAlt),
            (M, H, M) => Some(MissHetToMiss),
            (M, H, R) => Some(MissHetToRef),
            (M, H, H) => Some(MissHetToHet),
            (M, H, A) => Some(MissHetToAlt),
            (R, M, M) => Some(RefMissToMiss),
            (R, M, R) => Some(RefMissToRef),
            (R, M, H) => Some(RefMissToHet),
            (H, M, M) => Some(AltMissToMiss),
            (H, M, H) => Some(AltMissToHet),
            (H, M, A) => Some(AltMissToAlt),
            (R, H, M) => Some(RefHetToMiss),
            (H, H, M) => Some(AltHetToMiss),
            _ => None,
        }
    }
}

impl IncompleteCategory for XFemaleIncomplete {
    fn transmission_bounds(self, model: GeneticModel) -> TransmissionBounds {
        use XFemaleIncomplete::*;
        model.select(match self {
            MissMissToMiss | MissHetToMiss => [tb(1, 1, 0, 0), tb(1, 1, 0, 0), tb(1, 1, 0, 0)],
            MissMissToRef => [tb(1, 0, 0, 0), tb(1, 0, 0, 0), tb(0, 0, 0, 0)],
            MissMissToHet | MissHetToHet => [tb(1, 1, 0, 0), tb(0, 1, 0, 0), tb(1, 0, 0, 0)],
            MissMissToAlt => [tb(0, 1, 0, 0), tb(0, 0, 0, 0), tb(0, 1, 0, 0)],
            MissHetToRef => [tb(1, 0, 1, 0), tb(1, 0, 1, 0), tb(0, 0, 0, 0)],
            MissHetToAlt => [tb(0, 1, 0, 1), tb(0, 0, 0, 0), tb(0, 1, 0, 1)],
            RefMissToMiss | RefHetToMiss => [tb(1, 1, 0, 0), tb(1, 1, 0, 0), tb(0, 0, 0, 0)],
            RefMissToRef => [tb(1, 0, 0, 0), tb(1, 0, 0, 0), tb(0, 0, 0, 0)],
            RefMissToHet => [tb(0, 1, 0, 0), tb(0, 1, 0, 0), tb(0, 0, 0, 0)],
            AltMissToMiss | AltHetToMiss => [tb(1, 1, 0, 0), tb(0, 0, 0, 0), tb(1, 1, 0, 0)],
            AltMissToHet => [tb(1, 0, 0, 0), tb(0, 0, 0, 0), tb(1, 0, 0, 0)],
            AltMissToAlt => [tb(0, 1, 0, 0), tb(0, 0, 0, 0), tb(0, 1, 0, 0)],
        })
    }

    fn score_bounds(self, model: GeneticModel) -> ScoreBounds {
        use XFemaleIncomplete::*;
        let both = sb(-0.5, 0.25, 0.5, 0.25);
        let none = sb(0.0, 0.0, 0.0, 0.0);
        let toward_ref = sb(-0.5, 0.25, 0.0, 0.0);
        let toward_alt = sb(0.0, 0.0, 0.5, 0.25);
        model.select(match self {
            MissMissToMiss | MissHetToMiss => [both, both, both],
            MissMissToRef | RefMissToRef => [toward_ref, toward_ref, none],
            MissMissToHet | MissHetToHet => [both, toward_alt, toward_ref],
            MissMissToAlt | AltMissToAlt => [toward_alt, none, toward_alt],
            MissHetToRef => [sb(-0.5, 0.25, -0.5, 0.25), sb(-0.5, 0.25, -0.5, 0.25), none],
            MissHetToAlt => [sb(0.5, 0.25, 0.5, 0.25), none, sb(0.5, 0.25, 0.5, 0.25)],
            RefMissToMiss | RefHetToMiss => [both, both, none],
            RefMissToHet => [toward_alt, toward_alt, none],
            AltMissToMiss | AltHetToMiss => [both, none, both],
            AltMissToHet => [toward_ref, none, toward_ref],
        })
    }
}

categories! {
    /// X mating types with a homozygous mother, whatever the father and offspring carry
    XNonInformative {
        MotherRef => "(*,0,*)",
        MotherAlt => "(*,2,*)",
    }
}

impl XNonInformative {
    pub fn lookup(mother: Genotype) -> Option<Self> {
        match mother {
            R => Some(XNonInformative::MotherRef),
            A => Some(XNonInformative::MotherAlt),
            _ => None,
        }
    }
}
