use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The on-disk shape of a run configuration file. Every field is optional;
/// the builder fills the gaps from CLI arguments and defaults.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RunFileConfig {
    pub problem: Option<String>,
    pub template_set: Option<PathBuf>,
    pub search: Option<FileSearchConfig>,
    pub output: Option<FileOutputConfig>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSearchConfig {
    pub max_solutions: Option<usize>,
    pub parallel: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileOutputConfig {
    pub directory: Option<PathBuf>,
    pub stats: Option<PathBuf>,
}

impl RunFileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading run configuration from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn full_file_parses_every_section() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.toml");
        fs::write(
            &path,
            r#"
            problem = "pseudoknot"
            template-set = "sets/custom.toml"

            [search]
            max-solutions = 4
            parallel = false

            [output]
            directory = "out"
            stats = "runs.csv"
            "#,
        )
        .unwrap();

        let config = RunFileConfig::from_file(&path).unwrap();
        assert_eq!(config.problem.as_deref(), Some("pseudoknot"));
        assert_eq!(
            config.template_set.as_deref(),
            Some(Path::new("sets/custom.toml"))
        );

        let search = config.search.unwrap();
        assert_eq!(search.max_solutions, Some(4));
        assert_eq!(search.parallel, Some(false));

        let output = config.output.unwrap();
        assert_eq!(output.directory.as_deref(), Some(Path::new("out")));
        assert_eq!(output.stats.as_deref(), Some(Path::new("runs.csv")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.toml");
        fs::write(&path, "problem = \"anticodon\"\nmax-solutions = 4\n").unwrap();

        let result = RunFileConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_surfaces_an_io_error() {
        let dir = tempdir().unwrap();
        let result = RunFileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
