use crate::cli::RunArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::output;
use crate::utils::progress::CliProgressHandler;
use ribopose::core::templates::TemplateLibrary;
use ribopose::engine::progress::ProgressReporter;
use ribopose::workflows::assemble::{self, AssembleOptions};
use ribopose::workflows::problems;
use tracing::{info, warn};

pub fn run(args: RunArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = config::build_config(&args)?;

    let library = match &config.template_set {
        Some(path) => {
            info!("Loading nucleotide templates from {:?}", path);
            TemplateLibrary::load(path)?
        }
        None => TemplateLibrary::builtin().clone(),
    };

    let problem = problems::by_name(&config.problem, &library)?.ok_or_else(|| {
        CliError::Argument(format!(
            "Unknown problem '{}'. Run 'ribopose problems' for the built-in list.",
            config.problem
        ))
    })?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Assembling '{}'...", problem.name);
    info!("Invoking the core assembly workflow...");

    let options = AssembleOptions {
        max_solutions: config.max_solutions,
        parallel: config.parallel,
    };
    let result = assemble::run(&problem, &options, &reporter)?;

    info!(
        "Workflow finished, received {} solution(s).",
        result.solutions.len()
    );

    if result.solutions.is_empty() {
        warn!("Search completed but found no consistent structure.");
        println!("Warning: search finished but found no consistent structure.");
        return Ok(());
    }

    println!(
        "Found {} solution(s) of {} residues ({} atoms each).",
        result.stats.solution_count, result.stats.residue_count, result.stats.atoms_per_solution,
    );
    println!(
        "Most distant atom: {:.3} Å from the reference origin.",
        result.stats.most_distant_atom
    );

    if let Some(dir) = &config.output.directory {
        let written = output::pdb::write_solutions(dir, &config.problem, &result.solutions)?;
        println!("✓ {} PDB file(s) written to: {}", written, dir.display());
    }

    if let Some(path) = &config.output.stats {
        output::stats::append_run(path, &config.problem, &result.stats)?;
        println!("✓ Run summary appended to: {}", path.display());
    }

    Ok(())
}
