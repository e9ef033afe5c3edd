// classifier.rs - Map one trio's genotypes to a mating-type category

use super::tables::{
    AutosomalComplete, AutosomalIncomplete, AutosomalNonInformative, Category, IncompleteCategory,
    InformativeCategory, XFemaleComplete, XFemaleIncomplete, XMaleComplete, XMaleIncomplete,
    XNonInformative,
};
use crate::data::genotype::{Genotype, MemberRole, Sex, TrioGenotypes};
use std::fmt;

/// Chromosome context a trio is classified in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chromosome {
    Autosomal,
    /// X-linked, carrying the offspring's sex
    X(Sex),
}

/// A value that depends on the offspring's sex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sexed<Ma, Fe> {
    Male(Ma),
    Female(Fe),
}

impl<Ma: Category, Fe: Category> Sexed<Ma, Fe> {
    pub fn index(self) -> usize {
        match self {
            Sexed::Male(c) => c.index(),
            Sexed::Female(c) => c.index(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sexed::Male(c) => c.label(),
            Sexed::Female(c) => c.label(),
        }
    }

    pub fn sex(self) -> Sex {
        match self {
            Sexed::Male(_) => Sex::Male,
            Sexed::Female(_) => Sex::Female,
        }
    }
}

/// Which count vector a classified trio belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    CompleteInformative,
    CompleteNonInformative,
    IncompleteInformative,
    IncompleteNonInformative,
    MendelianError,
}

/// A set of category tables for one chromosome kind.
///
/// Implemented by zero-sized marker types so the aggregator is monomorphised
/// per chromosome kind.
pub trait TableFamily: Copy + fmt::Debug + PartialEq + 'static {
    type MaleComplete: InformativeCategory;
    type FemaleComplete: InformativeCategory;
    type MaleIncomplete: IncompleteCategory;
    type FemaleIncomplete: IncompleteCategory;
    type NonInformative: Category;

    const NAME: &'static str;

    fn classify(trio: TrioGenotypes, sex: Sex) -> Classification<Self>;

    /// Sex a trio is classified under, `None` when it cannot be analysed on this chromosome
    fn offspring_sex(sex: Option<Sex>) -> Option<Sex>;

    /// Whether this member carries a single copy of the chromosome
    fn is_hemizygous(role: MemberRole, offspring_sex: Sex) -> bool;

    /// Whether a call is possible for this member; hemizygous members cannot be `2`
    fn is_valid_call(genotype: Genotype, role: MemberRole, offspring_sex: Sex) -> bool {
        !(Self::is_hemizygous(role, offspring_sex) && genotype == Genotype::AltHom)
    }
}

/// Outcome of classifying one trio: exactly one category, or a Mendelian inconsistency
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification<F: TableFamily> {
    CompleteInformative(Sexed<F::MaleComplete, F::FemaleComplete>),
    CompleteNonInformative(F::NonInformative),
    IncompleteInformative(Sexed<F::MaleIncomplete, F::FemaleIncomplete>),
    IncompleteNonInformative(F::NonInformative),
    MendelianError,
}

impl<F: TableFamily> Classification<F> {
    pub fn bucket(&self) -> Bucket {
        match self {
            Classification::CompleteInformative(_) => Bucket::CompleteInformative,
            Classification::CompleteNonInformative(_) => Bucket::CompleteNonInformative,
            Classification::IncompleteInformative(_) => Bucket::IncompleteInformative,
            Classification::IncompleteNonInformative(_) => Bucket::IncompleteNonInformative,
            Classification::MendelianError => Bucket::MendelianError,
        }
    }

    /// Position within the bucket's count vector, `None` for MIE
    pub fn index(&self) -> Option<usize> {
        match *self {
            Classification::CompleteInformative(c) => Some(c.index()),
            Classification::CompleteNonInformative(c) => Some(c.index()),
            Classification::IncompleteInformative(c) => Some(c.index()),
            Classification::IncompleteNonInformative(c) => Some(c.index()),
            Classification::MendelianError => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Classification::CompleteInformative(c) => c.label(),
            Classification::CompleteNonInformative(c) => c.label(),
            Classification::IncompleteInformative(c) => c.label(),
            Classification::IncompleteNonInformative(c) => c.label(),
            Classification::MendelianError => "MIE",
        }
    }

    pub fn is_mendelian_error(&self) -> bool {
        matches!(self, Classification::MendelianError)
    }
}

fn sexed<C: Copy>(sex: Sex, category: C) -> Sexed<C, C> {
    match sex {
        Sex::Male => Sexed::Male(category),
        Sex::Female => Sexed::Female(category),
    }
}

/// Autosomal tables: unordered parental pair, both sexes share one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autosomal;

impl TableFamily for Autosomal {
    type MaleComplete = AutosomalComplete;
    type FemaleComplete = AutosomalComplete;
    type MaleIncomplete = AutosomalIncomplete;
    type FemaleIncomplete = AutosomalIncomplete;
    type NonInformative = AutosomalNonInformative;

    const NAME: &'static str = "autosomal";

    fn classify(trio: TrioGenotypes, sex: Sex) -> Classification<Self> {
        let TrioGenotypes { father, mother, offspring } = trio;
        let non_informative = AutosomalNonInformative::lookup(father, mother);

        if trio.is_complete() {
            match AutosomalComplete::lookup(father, mother, offspring) {
                Some(category) => Classification::CompleteInformative(sexed(sex, category)),
                None => non_informative
                    .map(Classification::CompleteNonInformative)
                    .unwrap_or(Classification::MendelianError),
            }
        } else {
            match AutosomalIncomplete::lookup(father, mother, offspring) {
                Some(category) => Classification::IncompleteInformative(sexed(sex, category)),
                None => non_informative
                    .map(Classification::IncompleteNonInformative)
                    .unwrap_or(Classification::MendelianError),
            }
        }
    }

    /// The tables do not depend on sex: unknown-sex offspring are filed with the male vectors
    fn offspring_sex(sex: Option<Sex>) -> Option<Sex> {
        Some(sex.unwrap_or(Sex::Male))
    }

    fn is_hemizygous(_role: MemberRole, _offspring_sex: Sex) -> bool {
        false
    }
}

/// X tables: ordered (father, mother, offspring), split by offspring sex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XLinked;

impl TableFamily for XLinked {
    type MaleComplete = XMaleComplete;
    type FemaleComplete = XFemaleComplete;
    type MaleIncomplete = XMaleIncomplete;
    type FemaleIncomplete = XFemaleIncomplete;
    type NonInformative = XNonInformative;

    const NAME: &'static str = "chrX";

    fn classify(trio: TrioGenotypes, sex: Sex) -> Classification<Self> {
        let TrioGenotypes { father, mother, offspring } = trio;
        let non_informative = XNonInformative::lookup(mother);

        if trio.is_complete() {
            let informative = match sex {
                Sex::Male => XMaleComplete::lookup(father, mother, offspring).map(Sexed::Male),
                Sex::Female => XFemaleComplete::lookup(father, mother, offspring).map(Sexed::Female),
            };
            match informative {
                Some(category) => Classification::CompleteInformative(category),
                None => non_informative
                    .map(Classification::CompleteNonInformative)
                    .unwrap_or(Classification::MendelianError),
            }
        } else {
            let informative = match sex {
                Sex::Male => XMaleIncomplete::lookup(father, mother, offspring).map(Sexed::Male),
                Sex::Female => XFemaleIncomplete::lookup(father, mother, offspring).map(Sexed::Female),
            };
            match informative {
                Some(category) => Classification::IncompleteInformative(category),
                None => non_informative
                    .map(Classification::IncompleteNonInformative)
                    .unwrap_or(Classification::MendelianError),
            }
        }
    }

    fn offspring_sex(sex: Option<Sex>) -> Option<Sex> {
        sex
    }

    fn is_hemizygous(role: MemberRole, offspring_sex: Sex) -> bool {
        match role {
            MemberRole::Father => true,
            MemberRole::Mother => false,
            MemberRole::Offspring => offspring_sex == Sex::Male,
        }
    }
}

/// Result of classifying a trio in either chromosome context
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyClassification {
    Autosomal(Classification<Autosomal>),
    X(Classification<XLinked>),
}

impl AnyClassification {
    pub fn bucket(&self) -> Bucket {
        match self {
            AnyClassification::Autosomal(c) => c.bucket(),
            AnyClassification::X(c) => c.bucket(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnyClassification::Autosomal(c) => c.label(),
            AnyClassification::X(c) => c.label(),
        }
    }
}

/// Classify one trio. Never fails: anything outside the tables is a Mendelian error.
///
/// Autosomal trios are filed under the offspring's sex as well, so the sex is
/// passed alongside the chromosome context.
pub fn classify(trio: TrioGenotypes, chromosome: Chromosome, offspring_sex: Sex) -> AnyClassification {
    match chromosome {
        Chromosome::Autosomal => AnyClassification::Autosomal(Autosomal::classify(trio, offspring_sex)),
        Chromosome::X(sex) => AnyClassification::X(XLinked::classify(trio, sex)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::genotype::Genotype::{AltHom, Het, Missing, RefHom};

    fn trio(f: Genotype, m: Genotype, o: Genotype) -> TrioGenotypes {
        TrioGenotypes::new(f, m, o)
    }

    #[test]
    fn test_autosomal_totality() {
        for &f in &Genotype::ALL {
            for &m in &Genotype::ALL {
                for &o in &Genotype::ALL {
                    for sex in [Sex::Male, Sex::Female] {
                        let t = trio(f, m, o);
                        let c = Autosomal::classify(t, sex);
                        match c.bucket() {
                            Bucket::CompleteInformative | Bucket::CompleteNonInformative => {
                                assert!(t.is_complete(), "{} -> {:?}", t, c)
                            }
                            Bucket::IncompleteInformative | Bucket::IncompleteNonInformative => {
                                assert!(!t.is_complete(), "{} -> {:?}", t, c)
                            }
                            Bucket::MendelianError => assert!(c.index().is_none()),
                        }
                        // Parent order never matters for autosomes
                        assert_eq!(c, Autosomal::classify(trio(m, f, o), sex));
                    }
                }
            }
        }
    }

    #[test]
    fn test_x_totality_over_valid_calls() {
        for sex in [Sex::Male, Sex::Female] {
            for &f in &Genotype::ALL {
                for &m in &Genotype::ALL {
                    for &o in &Genotype::ALL {
                        if !XLinked::is_valid_call(f, MemberRole::Father, sex)
                            || !XLinked::is_valid_call(o, MemberRole::Offspring, sex)
                        {
                            continue;
                        }
                        let t = trio(f, m, o);
                        let c = XLinked::classify(t, sex);
                        match c {
                            Classification::CompleteInformative(cat) => {
                                assert!(t.is_complete());
                                assert_eq!(cat.sex(), sex);
                            }
                            Classification::IncompleteInformative(cat) => {
                                assert!(!t.is_complete());
                                assert_eq!(cat.sex(), sex);
                            }
                            Classification::CompleteNonInformative(_) => assert!(t.is_complete()),
                            Classification::IncompleteNonInformative(_) => assert!(!t.is_complete()),
                            Classification::MendelianError => {}
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_known_autosomal_examples() {
        let c = Autosomal::classify(trio(Het, Het, Het), Sex::Female);
        assert_eq!(
            c,
            Classification::CompleteInformative(Sexed::Female(AutosomalComplete::HetHetToHet))
        );
        assert_eq!(c.label(), "{1,1}->1");

        let c = Autosomal::classify(trio(RefHom, AltHom, Het), Sex::Male);
        assert_eq!(c, Classification::CompleteNonInformative(AutosomalNonInformative::RefAlt));

        // The non-informative lookup only looks at the parents
        let c = Autosomal::classify(trio(RefHom, RefHom, AltHom), Sex::Male);
        assert_eq!(c, Classification::CompleteNonInformative(AutosomalNonInformative::RefRef));

        let c = Autosomal::classify(trio(Missing, RefHom, AltHom), Sex::Male);
        assert_eq!(c, Classification::MendelianError);

        let c = Autosomal::classify(trio(RefHom, Missing, Het), Sex::Male);
        assert_eq!(
            c,
            Classification::IncompleteInformative(Sexed::Male(AutosomalIncomplete::RefMissToHet))
        );

        let c = Autosomal::classify(trio(AltHom, AltHom, Missing), Sex::Female);
        assert_eq!(c, Classification::IncompleteNonInformative(AutosomalNonInformative::AltAlt));

        // Complete parents, missing child, uninformative pair
        let c = Autosomal::classify(trio(RefHom, AltHom, Missing), Sex::Female);
        assert_eq!(c.bucket(), Bucket::IncompleteNonInformative);
    }

    #[test]
    fn test_known_x_examples() {
        let c = XLinked::classify(trio(Het, Het, Het), Sex::Male);
        assert_eq!(c, Classification::CompleteInformative(Sexed::Male(XMaleComplete::AltHetToAlt)));

        // A father carrying the alternate allele must pass it to a daughter
        let c = XLinked::classify(trio(Het, Het, RefHom), Sex::Female);
        assert_eq!(c, Classification::MendelianError);

        let c = XLinked::classify(trio(Het, AltHom, Het), Sex::Female);
        assert_eq!(c, Classification::CompleteNonInformative(XNonInformative::MotherAlt));

        let c = XLinked::classify(trio(Missing, Het, RefHom), Sex::Male);
        assert_eq!(
            c,
            Classification::IncompleteInformative(Sexed::Male(XMaleIncomplete::MissHetToRef))
        );

        let c = XLinked::classify(trio(Missing, RefHom, Missing), Sex::Male);
        assert_eq!(c, Classification::IncompleteNonInformative(XNonInformative::MotherRef));

        let c = XLinked::classify(trio(Missing, Missing, AltHom), Sex::Female);
        assert_eq!(
            c,
            Classification::IncompleteInformative(Sexed::Female(XFemaleIncomplete::MissMissToAlt))
        );
    }

    #[test]
    fn test_x_validity() {
        assert!(!XLinked::is_valid_call(AltHom, MemberRole::Father, Sex::Female));
        assert!(!XLinked::is_valid_call(AltHom, MemberRole::Offspring, Sex::Male));
        assert!(XLinked::is_valid_call(AltHom, MemberRole::Offspring, Sex::Female));
        assert!(XLinked::is_valid_call(AltHom, MemberRole::Mother, Sex::Male));
        assert!(XLinked::is_valid_call(Missing, MemberRole::Father, Sex::Male));
        assert!(Autosomal::is_valid_call(AltHom, MemberRole::Father, Sex::Male));
    }

    #[test]
    fn test_unknown_offspring_sex() {
        assert_eq!(Autosomal::offspring_sex(None), Some(Sex::Male));
        assert_eq!(Autosomal::offspring_sex(Some(Sex::Female)), Some(Sex::Female));
        assert_eq!(XLinked::offspring_sex(None), None);
        assert_eq!(XLinked::offspring_sex(Some(Sex::Male)), Some(Sex::Male));
    }

    #[test]
    fn test_dispatch() {
        let t = trio(RefHom, Het, RefHom);
        assert!(matches!(
            classify(t, Chromosome::Autosomal, Sex::Male),
            AnyClassification::Autosomal(_)
        ));
        let x = classify(t, Chromosome::X(Sex::Female), Sex::Female);
        assert_eq!(x.label(), "(0,1,0)");
        assert_eq!(x.bucket(), Bucket::CompleteInformative);
    }
}
