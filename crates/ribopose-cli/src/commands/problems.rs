use crate::cli::ProblemsArgs;
use crate::error::Result;
use ribopose::core::templates::TemplateLibrary;
use ribopose::workflows::problems;
use tracing::info;

pub fn run(args: ProblemsArgs) -> Result<()> {
    let library = match &args.template_set {
        Some(path) => {
            info!("Loading nucleotide templates from {:?}", path);
            TemplateLibrary::load(path)?
        }
        None => TemplateLibrary::builtin().clone(),
    };

    println!("Built-in assembly problems:");
    println!();
    for problem in problems::all(&library)? {
        println!(
            "  {:<12} {:>3} residues   {}",
            problem.name,
            problem.residue_count(),
            problem.description
        );
    }
    println!();
    println!("Assemble one with: ribopose run --problem <NAME>");

    Ok(())
}
