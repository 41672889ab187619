use std::path::PathBuf;

use clap::Parser;

use charlm_core::experiment::Experiment;

#[derive(Parser, Debug)]
#[command(name = "charlm")]
#[command(about = "Character n-gram coverage of test words across UDHR languages")]
pub struct Args {
    /// Folder holding one file per corpus document
    #[arg(short, long, default_value = "data/udhr")]
    pub corpus: PathBuf,

    /// JSON experiment plan (defaults to the four reference runs)
    #[arg(short, long)]
    pub plan: Option<PathBuf>,

    /// Experiment as MODEL_ID:MODEL_LANG:DATA_ID:DATA_LANG (repeatable, overrides the plan)
    #[arg(short, long = "experiment", value_parser = parse_experiment)]
    pub experiments: Vec<Experiment>,

    /// Number of test words per experiment
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Print reports as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// List the corpus documents and exit
    #[arg(long)]
    pub list: bool,
}

/// Parses `MODEL_ID:MODEL_LANG:DATA_ID:DATA_LANG`.
pub fn parse_experiment(s: &str) -> Result<Experiment, String> {
    let parts: Vec<&str> = s.split(':').map(str::trim).collect();
    match parts.as_slice() {
        [model_document, model_language, data_document, data_language]
            if parts.iter().all(|p| !p.is_empty()) =>
        {
            Ok(Experiment::new(*model_document, *model_language, *data_document, *data_language))
        }
        _ => Err(format!(
            "expected MODEL_ID:MODEL_LANG:DATA_ID:DATA_LANG, got '{}'",
            s
        )),
    }
}
