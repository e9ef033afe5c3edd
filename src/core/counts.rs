// counts.rs - Per-marker count vectors over the category tables

use super::analysis::GeneticModel;
use super::classifier::{Classification, Sexed, TableFamily};
use super::tables::{
    Category, IncompleteCategory, InformativeCategory, Score, ScoreBounds, Transmission,
    TransmissionBounds,
};
use crate::data::genotype::Affection;
use std::fmt;
use std::marker::PhantomData;

/// One counter per category of table `C`, in table order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounts<C: Category> {
    counts: Vec<u32>,
    _table: PhantomData<C>,
}

impl<C: Category> CategoryCounts<C> {
    pub fn new() -> Self {
        Self {
            counts: vec![0; C::count()],
            _table: PhantomData,
        }
    }

    pub fn increment(&mut self, category: C) {
        self.counts[category.index()] += 1;
    }

    pub fn get(&self, category: C) -> u32 {
        self.counts[category.index()]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, u32)> + '_ {
        C::ALL.iter().copied().zip(self.counts.iter().copied())
    }
}

impl<C: Category> Default for CategoryCounts<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: InformativeCategory> CategoryCounts<C> {
    pub fn transmission(&self, model: GeneticModel) -> Transmission {
        self.iter()
            .map(|(category, n)| category.transmission(model).times(n))
            .fold(Transmission::default(), |acc, x| acc + x)
    }

    pub fn score(&self, model: GeneticModel) -> Score {
        self.iter()
            .map(|(category, n)| category.score(model).times(n))
            .fold(Score::default(), |acc, x| acc + x)
    }
}

impl<C: IncompleteCategory> CategoryCounts<C> {
    pub fn transmission_bounds(&self, model: GeneticModel) -> TransmissionBounds {
        self.iter()
            .map(|(category, n)| category.transmission_bounds(model).times(n))
            .fold(TransmissionBounds::default(), |acc, x| acc + x)
    }

    pub fn score_bounds(&self, model: GeneticModel) -> ScoreBounds {
        self.iter()
            .map(|(category, n)| category.score_bounds(model).times(n))
            .fold(ScoreBounds::default(), |acc, x| acc + x)
    }
}

/// Written as `[n1,n2,...]`
impl<C: Category> fmt::Display for CategoryCounts<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.counts.iter().map(|n| n.to_string()).collect();
        write!(f, "[{}]", joined.join(","))
    }
}

/// Count vectors split by offspring sex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SexedCounts<Ma: Category, Fe: Category> {
    pub male: CategoryCounts<Ma>,
    pub female: CategoryCounts<Fe>,
}

impl<Ma: Category, Fe: Category> SexedCounts<Ma, Fe> {
    pub fn new() -> Self {
        Self {
            male: CategoryCounts::new(),
            female: CategoryCounts::new(),
        }
    }

    pub fn increment(&mut self, category: Sexed<Ma, Fe>) {
        match category {
            Sexed::Male(c) => self.male.increment(c),
            Sexed::Female(c) => self.female.increment(c),
        }
    }

    pub fn total(&self) -> u32 {
        self.male.total() + self.female.total()
    }
}

impl<Ma: Category, Fe: Category> Default for SexedCounts<Ma, Fe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ma: InformativeCategory, Fe: InformativeCategory> SexedCounts<Ma, Fe> {
    pub fn transmission(&self, model: GeneticModel) -> Transmission {
        self.male.transmission(model) + self.female.transmission(model)
    }

    pub fn score(&self, model: GeneticModel) -> Score {
        self.male.score(model) + self.female.score(model)
    }
}

impl<Ma: IncompleteCategory, Fe: IncompleteCategory> SexedCounts<Ma, Fe> {
    pub fn transmission_bounds(&self, model: GeneticModel) -> TransmissionBounds {
        self.male.transmission_bounds(model) + self.female.transmission_bounds(model)
    }

    pub fn score_bounds(&self, model: GeneticModel) -> ScoreBounds {
        self.male.score_bounds(model) + self.female.score_bounds(model)
    }
}

/// A pair of values, one for case trios and one for control trios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByAffection<T> {
    pub case: T,
    pub control: T,
}

impl<T> ByAffection<T> {
    pub fn get_mut(&mut self, affection: Affection) -> &mut T {
        match affection {
            Affection::Case => &mut self.case,
            Affection::Control => &mut self.control,
        }
    }
}

/// The four count vectors of one affection group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCounts<F: TableFamily> {
    pub complete_informative: SexedCounts<F::MaleComplete, F::FemaleComplete>,
    pub complete_non_informative: CategoryCounts<F::NonInformative>,
    pub incomplete_informative: SexedCounts<F::MaleIncomplete, F::FemaleIncomplete>,
    pub incomplete_non_informative: CategoryCounts<F::NonInformative>,
}

impl<F: TableFamily> GroupCounts<F> {
    pub fn new() -> Self {
        Self {
            complete_informative: SexedCounts::new(),
            complete_non_informative: CategoryCounts::new(),
            incomplete_informative: SexedCounts::new(),
            incomplete_non_informative: CategoryCounts::new(),
        }
    }

    pub fn total(&self) -> u32 {
        self.complete_informative.total()
            + self.complete_non_informative.total()
            + self.incomplete_informative.total()
            + self.incomplete_non_informative.total()
    }
}

impl<F: TableFamily> Default for GroupCounts<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// All classification counts of one marker: case and control groups plus MIE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrioTally<F: TableFamily> {
    pub groups: ByAffection<GroupCounts<F>>,
    pub mie: u32,
}

impl<F: TableFamily> TrioTally<F> {
    pub fn new() -> Self {
        Self {
            groups: ByAffection {
                case: GroupCounts::new(),
                control: GroupCounts::new(),
            },
            mie: 0,
        }
    }

    /// File one classified trio under its affection group
    pub fn record(&mut self, affection: Affection, classification: Classification<F>) {
        let group = self.groups.get_mut(affection);
        match classification {
            Classification::CompleteInformative(c) => group.complete_informative.increment(c),
            Classification::CompleteNonInformative(c) => group.complete_non_informative.increment(c),
            Classification::IncompleteInformative(c) => group.incomplete_informative.increment(c),
            Classification::IncompleteNonInformative(c) => {
                group.incomplete_non_informative.increment(c)
            }
            Classification::MendelianError => self.mie += 1,
        }
    }

    /// Number of trios recorded, MIE included
    pub fn total(&self) -> u32 {
        self.groups.case.total() + self.groups.control.total() + self.mie
    }

    /// The twelve count vectors in report order
    pub fn count_columns(&self) -> Vec<String> {
        let case = &self.groups.case;
        let control = &self.groups.control;
        vec![
            case.complete_informative.male.to_string(),
            case.complete_informative.female.to_string(),
            control.complete_informative.male.to_string(),
            control.complete_informative.female.to_string(),
            case.complete_non_informative.to_string(),
            control.complete_non_informative.to_string(),
            case.incomplete_informative.male.to_string(),
            case.incomplete_informative.female.to_string(),
            control.incomplete_informative.male.to_string(),
            control.incomplete_informative.female.to_string(),
            case.incomplete_non_informative.to_string(),
            control.incomplete_non_informative.to_string(),
        ]
    }
}

impl<F: TableFamily> Default for TrioTally<F> {
    fn default() -> Self {
        Self::new()
    }
}
