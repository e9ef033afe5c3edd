// main.rs - CLI entry point

use mitdt::cli::{Config, DEFAULT_OUTPUT};
use mitdt::data::loaders::load_code_table;
use mitdt::output::{write_summary, RunRecord};
use mitdt::prelude::*;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    println!("🚀 mitdt v{}", env!("CARGO_PKG_VERSION"));

    // Validate all arguments
    let validation_result = validate_args(&args)?;
    let analysis = validation_result.analysis;
    let genotypes = args.genotypes.as_deref().ok_or("--genotypes is required")?;
    let phenotype = args.phenotype.as_deref().ok_or("--phenotype is required")?;
    let gender = args.gender.as_deref().ok_or("--gender is required")?;
    let output = args.output.as_deref().unwrap_or(DEFAULT_OUTPUT);

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        let num_threads = rayon::current_num_threads();
        println!("🧵 Threads: {} (auto-detected)", num_threads);
    }

    let total_start = Instant::now();
    let started = chrono::Utc::now();

    // Load inputs
    let mut reader = GenotypeMatrixReader::open(Path::new(genotypes))?;
    println!(
        "📋 Genotype matrix '{}': {} sample columns",
        genotypes,
        reader.header().n_columns()
    );
    let phenotypes = load_code_table(Path::new(phenotype), "phenotype")?;
    let sexes = load_code_table(Path::new(gender), "gender")?;

    // Build trios
    let pedigrees = PedigreeSet::build(reader.header(), &phenotypes, &sexes, &validation_result.filter)?;
    for excluded in &pedigrees.excluded {
        eprintln!("⚠️  Warning: pedigree '{}' excluded: {}", excluded.pedigree_id, excluded.reason);
    }
    for unsexed in &pedigrees.x_excluded {
        eprintln!(
            "⚠️  Warning: pedigree '{}' will not be analysed for chrX: {}",
            unsexed.pedigree_id, unsexed.reason
        );
    }
    if !pedigrees.unknown_listed.is_empty() {
        eprintln!(
            "⚠️  Warning: {} listed pedigrees are not in the genotype matrix: {}",
            pedigrees.unknown_listed.len(),
            pedigrees.unknown_listed.join(", ")
        );
    }
    if pedigrees.filtered_out > 0 {
        println!("🔍 {} pedigrees left out by the pedigree filters", pedigrees.filtered_out);
    }
    println!(
        "👪 Trios: {} ({} cases, {} controls)",
        pedigrees.len(),
        pedigrees.n_cases(),
        pedigrees.n_controls()
    );
    check_trio_groups(&analysis, &pedigrees)?;

    let tests: Vec<&str> = [("TDT", analysis.tests.tdt), ("FBAT", analysis.tests.fbat)]
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();
    let models: Vec<&str> = analysis.models.iter().map(|m| m.name()).collect();
    println!(
        "🎯 Tests: {} | Models: {} | {}",
        tests.join(" + "),
        models.join(", "),
        if analysis.mode.is_bounded() {
            "exact + bounds for missing genotypes"
        } else {
            "exact only"
        }
    );
    if analysis.tests.fbat {
        println!("⚖️  FBAT offset: {}", analysis.offset);
    }

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    // Test markers
    println!("\n🔄 Testing markers...");
    let comment = (!args.no_comments).then_some(command_line.as_str());
    let mut writer = ReportWriter::create(output, comment, &analysis)?;
    let summary = process_with_progress(&mut reader, &pedigrees, &analysis, args.chunk_size, |result| {
        writer.write_result(result)
    })?;
    writer.finish()?;

    if let Some(summary_path) = &args.summary {
        let record = RunRecord {
            version: mitdt::VERSION,
            command: &command_line,
            started,
            finished: chrono::Utc::now(),
            genotypes,
            output,
            excluded_pedigrees: pedigrees.excluded.len(),
            config: &analysis,
            summary: &summary,
        };
        write_summary(summary_path, &record)?;
    }

    // Print summary
    let total_elapsed = total_start.elapsed();
    println!("\n🎉 === MITDT COMPLETED SUCCESSFULLY ===");
    println!("⏱️  Total execution time: {:.2}s", total_elapsed.as_secs_f64());
    println!(
        "📊 Markers: {} read, {} tested ({} autosomal, {} chrX), {} excluded (Y/MT), {} skipped",
        summary.markers_read,
        summary.markers_tested,
        summary.autosomal_markers,
        summary.x_markers,
        summary.markers_excluded,
        summary.markers_skipped
    );
    println!("🧬 Mendelian inconsistencies: {}", summary.total_mie);
    println!("📁 Output written to: {}", output);
    println!("🔧 Command: {}", command_line);

    Ok(())
}
