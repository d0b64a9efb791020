//! CSV run summaries, one row per assembly run.

use crate::error::Result;
use ribopose::workflows::assemble::AssemblyStats;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::debug;

const HEADERS: [&str; 5] = [
    "problem",
    "solutions",
    "residues",
    "atoms-per-solution",
    "most-distant-atom",
];

/// Appends one summary row for the run, writing the header first when the
/// file does not exist yet.
pub fn append_run(path: &Path, problem: &str, stats: &AssemblyStats) -> Result<()> {
    let write_header = !path.exists();

    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = csv::Writer::from_writer(file);

    if write_header {
        debug!("Creating stats file {:?}", path);
        writer.write_record(HEADERS)?;
    }
    writer.write_record(&[
        problem.to_string(),
        stats.solution_count.to_string(),
        stats.residue_count.to_string(),
        stats.atoms_per_solution.to_string(),
        stats.most_distant_atom.to_string(),
    ])?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_stats() -> AssemblyStats {
        AssemblyStats {
            solution_count: 8,
            residue_count: 17,
            atoms_per_solution: 544,
            most_distant_atom: 23.264,
        }
    }

    #[test]
    fn first_append_writes_header_and_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("runs.csv");

        append_run(&path, "anticodon", &sample_stats()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "problem,solutions,residues,atoms-per-solution,most-distant-atom"
        );
        assert_eq!(lines[1], "anticodon,8,17,544,23.264");
    }

    #[test]
    fn later_appends_add_rows_without_a_second_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("runs.csv");

        append_run(&path, "anticodon", &sample_stats()).unwrap();
        let mut second = sample_stats();
        second.solution_count = 12;
        append_run(&path, "pseudoknot", &second).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("anticodon,"));
        assert!(lines[2].starts_with("pseudoknot,12,"));
        assert_eq!(
            content.matches("problem,solutions").count(),
            1,
            "header must appear exactly once"
        );
    }
}
