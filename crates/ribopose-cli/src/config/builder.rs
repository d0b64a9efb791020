use super::file::RunFileConfig;
use super::models::{OutputConfig, RunConfig};
use crate::cli::RunArgs;
use crate::error::{CliError, Result};

/// Parallel search is on unless the file or a flag turns it off; the engine
/// falls back to the sequential search when built without the feature.
const DEFAULT_PARALLEL: bool = true;

/// Resolves the final run configuration. CLI arguments win over the config
/// file, which wins over built-in defaults.
pub fn build_config(args: &RunArgs) -> Result<RunConfig> {
    let file_config = if let Some(config_path) = &args.config {
        RunFileConfig::from_file(config_path)?
    } else {
        RunFileConfig::default()
    };

    let problem = args.problem.clone().or(file_config.problem).ok_or_else(|| {
        CliError::Config(
            "No problem selected; pass --problem or set `problem` in the config file.".to_string(),
        )
    })?;

    let template_set = args.template_set.clone().or(file_config.template_set);

    let search_file = file_config.search.unwrap_or_default();
    let max_solutions = args.max_solutions.or(search_file.max_solutions);
    let parallel = match (args.parallel.parallel, args.parallel.no_parallel) {
        (true, false) => true,
        (false, true) => false,
        _ => search_file.parallel.unwrap_or(DEFAULT_PARALLEL),
    };

    let output_file = file_config.output.unwrap_or_default();
    let output = OutputConfig {
        directory: args.output_dir.clone().or(output_file.directory),
        stats: args.stats.clone().or(output_file.stats),
    };

    Ok(RunConfig {
        problem,
        template_set,
        max_solutions,
        parallel,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ParallelSwitch;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn base_run_args() -> RunArgs {
        RunArgs {
            problem: None,
            config: None,
            template_set: None,
            max_solutions: None,
            parallel: ParallelSwitch {
                parallel: false,
                no_parallel: false,
            },
            output_dir: None,
            stats: None,
        }
    }

    #[test]
    fn problem_flag_alone_uses_defaults_for_the_rest() {
        let mut args = base_run_args();
        args.problem = Some("anticodon".to_string());

        let config = build_config(&args).expect("build ok");

        assert_eq!(config.problem, "anticodon");
        assert!(config.template_set.is_none());
        assert!(config.max_solutions.is_none());
        assert_eq!(config.parallel, DEFAULT_PARALLEL);
        assert!(config.output.directory.is_none());
        assert!(config.output.stats.is_none());
    }

    #[test]
    fn config_file_fills_unset_arguments() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("run.toml");
        fs::write(
            &cfg_path,
            r#"
            problem = "pseudoknot"

            [search]
            max-solutions = 6
            parallel = false

            [output]
            directory = "structures"
            "#,
        )
        .unwrap();

        let mut args = base_run_args();
        args.config = Some(cfg_path);

        let config = build_config(&args).expect("build ok");

        assert_eq!(config.problem, "pseudoknot");
        assert_eq!(config.max_solutions, Some(6));
        assert!(!config.parallel);
        assert_eq!(
            config.output.directory,
            Some(PathBuf::from("structures"))
        );
    }

    #[test]
    fn cli_arguments_override_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("run.toml");
        fs::write(
            &cfg_path,
            r#"
            problem = "pseudoknot"

            [search]
            max-solutions = 6
            parallel = false
            "#,
        )
        .unwrap();

        let mut args = base_run_args();
        args.config = Some(cfg_path);
        args.problem = Some("anticodon".to_string());
        args.max_solutions = Some(2);
        args.parallel = ParallelSwitch {
            parallel: true,
            no_parallel: false,
        };

        let config = build_config(&args).expect("build ok");

        assert_eq!(config.problem, "anticodon");
        assert_eq!(config.max_solutions, Some(2));
        assert!(config.parallel);
    }

    #[test]
    fn no_parallel_flag_wins_over_file_and_default() {
        let mut args = base_run_args();
        args.problem = Some("anticodon".to_string());
        args.parallel = ParallelSwitch {
            parallel: false,
            no_parallel: true,
        };

        let config = build_config(&args).expect("build ok");
        assert!(!config.parallel);
    }

    #[test]
    fn missing_problem_everywhere_is_a_config_error() {
        let args = base_run_args();
        let result = build_config(&args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
