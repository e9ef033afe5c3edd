// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// mitdt - TDT and FBAT association tests for trios with missing genotypes
pub struct Args {
    /// genotype matrix: pedigree id row, member type row, then one marker per row (.tsv or .tsv.gz)
    #[argh(option)]
    pub genotypes: Option<String>,

    /// phenotype file: pedigree id and offspring status (2 = case, 1 = control)
    #[argh(option)]
    pub phenotype: Option<String>,

    /// gender file: pedigree id and offspring sex (1 = male, 2 = female)
    #[argh(option)]
    pub gender: Option<String>,

    /// file listing the pedigree ids to analyse (default: every pedigree in the matrix)
    #[argh(option)]
    pub pedigrees: Option<String>,

    /// include only pedigrees matching regex pattern
    #[argh(option)]
    pub include_pedigrees: Option<String>,

    /// exclude pedigrees matching regex pattern
    #[argh(option)]
    pub exclude_pedigrees: Option<String>,

    /// FBAT offset between 0.0 and 1.0 (default: 0.5)
    #[argh(option, default = "0.5")]
    pub offset: f64,

    /// tests to run: tdt, fbat, both (default: both)
    #[argh(option, default = "String::from(\"both\")")]
    pub test: String,

    /// statistics version: std (exact only), ext (exact + bounds for missing genotypes) (default: ext)
    #[argh(option, default = "String::from(\"ext\")")]
    pub mode: String,

    /// comma-separated genetic models: a (additive), d (dominant), r (recessive) (default: a)
    #[argh(option, default = "String::from(\"a\")")]
    pub models: String,

    /// output report file, gzip-compressed when ending in .gz (default: tdt.out.gz)
    #[argh(option)]
    pub output: Option<String>,

    /// write a JSON run summary to this file
    #[argh(option)]
    pub summary: Option<String>,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// markers read per parallel batch (default: 1000)
    #[argh(option, default = "1000")]
    pub chunk_size: usize,

    /// start the report with the column header, without the # comment lines
    #[argh(switch)]
    pub no_comments: bool,

    /// validate inputs and pedigrees without testing markers (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

/// Default report path when neither the command line nor the config file names one
pub const DEFAULT_OUTPUT: &str = "tdt.out.gz";
