//! PDB output for assembled structures.
//!
//! Each solution becomes one single-chain PDB file. Residues are written in
//! ascending number order and atoms within a residue in the canonical order
//! defined by [`AtomName::ordering_weight`], so files diff cleanly between
//! runs regardless of search order.

use crate::error::Result;
use ribopose::core::models::atom::AtomName;
use ribopose::core::models::residue::PlacedResidue;
use ribopose::engine::state::Assignment;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

const CHAIN_ID: char = 'A';

/// Writes one `{problem}_{index:04}.pdb` file per solution into `dir`,
/// creating the directory if needed. Returns the number of files written.
pub fn write_solutions(dir: &Path, problem: &str, solutions: &[Assignment]) -> Result<usize> {
    fs::create_dir_all(dir)?;

    for (index, solution) in solutions.iter().enumerate() {
        let path = dir.join(format!("{}_{:04}.pdb", problem, index + 1));
        debug!("Writing solution {} to {:?}", index + 1, path);

        let mut file = BufWriter::new(File::create(&path)?);
        write_solution(&mut file, problem, index + 1, solutions.len(), solution)?;
        file.flush()?;
    }

    info!("Wrote {} PDB file(s) to {:?}", solutions.len(), dir);
    Ok(solutions.len())
}

fn write_solution(
    writer: &mut impl Write,
    problem: &str,
    index: usize,
    total: usize,
    solution: &Assignment,
) -> Result<()> {
    writeln!(writer, "REMARK   1 PROBLEM {}", problem.to_uppercase())?;
    writeln!(writer, "REMARK   1 SOLUTION {} OF {}", index, total)?;

    let mut residues: Vec<&PlacedResidue> = solution.iter().collect();
    residues.sort_by_key(|residue| residue.id);

    let mut serial = 0u32;
    let mut last_residue: Option<(&'static str, u32)> = None;

    for residue in residues {
        let mut atoms: Vec<_> = residue.template.atoms().collect();
        atoms.sort_by_key(|(name, _)| name.ordering_weight());

        let residue_name = residue.template.kind().code();
        for (name, local) in atoms {
            let world = residue.world_point(&local);
            serial += 1;
            writeln!(
                writer,
                "ATOM  {:>5} {:<4} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}",
                serial,
                pdb_atom_name(name),
                residue_name,
                CHAIN_ID,
                residue.id.0,
                world.x,
                world.y,
                world.z,
                1.00,
                0.00,
                name.element(),
            )?;
        }
        last_residue = Some((residue_name, residue.id.0));
    }

    if let Some((residue_name, residue_number)) = last_residue {
        serial += 1;
        writeln!(
            writer,
            "TER   {:>5}      {:>3} {}{:>4}",
            serial, residue_name, CHAIN_ID, residue_number
        )?;
    }
    writeln!(writer, "END")?;
    Ok(())
}

/// Lays the name out in PDB columns 13-16. All RNA atoms here have
/// one-letter elements, so names shorter than four characters start in
/// column 14.
fn pdb_atom_name(name: AtomName) -> String {
    let text = name.as_str();
    if text.len() == 4 {
        text.to_string()
    } else {
        format!(" {:<3}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ribopose::core::templates::TemplateLibrary;
    use ribopose::engine::progress::ProgressReporter;
    use ribopose::workflows::assemble::{self, AssembleOptions};
    use ribopose::workflows::problems;
    use tempfile::tempdir;

    fn two_anticodon_solutions() -> Vec<Assignment> {
        let problem = problems::anticodon(TemplateLibrary::builtin()).unwrap();
        let options = AssembleOptions {
            max_solutions: Some(2),
            parallel: false,
        };
        assemble::run(&problem, &options, &ProgressReporter::new())
            .unwrap()
            .solutions
    }

    #[test]
    fn one_file_is_written_per_solution() {
        let dir = tempdir().unwrap();
        let solutions = two_anticodon_solutions();

        let written = write_solutions(dir.path(), "anticodon", &solutions).unwrap();

        assert_eq!(written, 2);
        assert!(dir.path().join("anticodon_0001.pdb").exists());
        assert!(dir.path().join("anticodon_0002.pdb").exists());
    }

    #[test]
    fn atom_records_use_the_fixed_pdb_columns() {
        let dir = tempdir().unwrap();
        let solutions = two_anticodon_solutions();
        write_solutions(dir.path(), "anticodon", &solutions).unwrap();

        let content = fs::read_to_string(dir.path().join("anticodon_0001.pdb")).unwrap();
        let first_atom = content
            .lines()
            .find(|line| line.starts_with("ATOM"))
            .expect("at least one ATOM record");

        assert_eq!(first_atom.len(), 78);
        // The anticodon reference residue is C27 and phosphate leads the
        // canonical atom order.
        assert_eq!(&first_atom[6..11], "    1");
        assert_eq!(&first_atom[12..16], " P  ");
        assert_eq!(&first_atom[17..20], "  C");
        assert_eq!(first_atom.as_bytes()[21], b'A');
        assert_eq!(&first_atom[22..26], "  27");
        assert_eq!(&first_atom[76..78], " P");

        for range in [30..38, 38..46, 46..54] {
            let field = &first_atom[range];
            field.trim().parse::<f64>().expect("coordinate parses");
        }
    }

    #[test]
    fn atoms_follow_the_canonical_order_within_a_residue() {
        let dir = tempdir().unwrap();
        let solutions = two_anticodon_solutions();
        write_solutions(dir.path(), "anticodon", &solutions).unwrap();

        let content = fs::read_to_string(dir.path().join("anticodon_0001.pdb")).unwrap();
        let names: Vec<&str> = content
            .lines()
            .filter(|line| line.starts_with("ATOM"))
            .take(4)
            .map(|line| line[12..16].trim())
            .collect();

        assert_eq!(names, vec!["P", "OP1", "OP2", "O5'"]);
    }

    #[test]
    fn residues_are_sorted_by_number() {
        let dir = tempdir().unwrap();
        let solutions = two_anticodon_solutions();
        write_solutions(dir.path(), "anticodon", &solutions).unwrap();

        let content = fs::read_to_string(dir.path().join("anticodon_0001.pdb")).unwrap();
        let numbers: Vec<u32> = content
            .lines()
            .filter(|line| line.starts_with("ATOM"))
            .map(|line| line[22..26].trim().parse().unwrap())
            .collect();

        assert!(numbers.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(numbers.first(), Some(&27));
        assert_eq!(numbers.last(), Some(&43));
    }

    #[test]
    fn files_end_with_ter_and_end_records() {
        let dir = tempdir().unwrap();
        let solutions = two_anticodon_solutions();
        write_solutions(dir.path(), "anticodon", &solutions).unwrap();

        let content = fs::read_to_string(dir.path().join("anticodon_0001.pdb")).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.last(), Some(&"END"));
        assert!(lines[lines.len() - 2].starts_with("TER"));

        let atom_count = lines.iter().filter(|l| l.starts_with("ATOM")).count();
        assert_eq!(atom_count, 544);
    }
}
