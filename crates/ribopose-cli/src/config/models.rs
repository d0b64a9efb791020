use std::path::PathBuf;

/// The fully resolved configuration for one `run` invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub problem: String,
    /// Custom template set; `None` uses the built-in library.
    pub template_set: Option<PathBuf>,
    pub max_solutions: Option<usize>,
    pub parallel: bool,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Directory for per-solution PDB files. `None` skips structure output.
    pub directory: Option<PathBuf>,
    /// CSV file the run summary is appended to.
    pub stats: Option<PathBuf>,
}
