mod args;
mod plan;
mod table;

use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use log::info;

use args::Args;
use charlm_core::corpus::{CorpusProvider, DirectoryCorpus};
use charlm_core::experiment::run_experiment;
use plan::Plan;

/// Resolves the plan: file or defaults, then command line overrides.
fn resolve_plan(args: &Args) -> Result<Plan, Box<dyn Error>> {
    let mut plan = match &args.plan {
        Some(path) => Plan::load(path)?,
        None => Plan::default(),
    };
    if !args.experiments.is_empty() {
        plan.experiments = args.experiments.clone();
    }
    if let Some(limit) = args.limit {
        plan.word_limit = limit;
    }
    Ok(plan)
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    // Open the corpus folder (one file per document)
    let corpus = DirectoryCorpus::new(&args.corpus)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.list {
        for id in corpus.document_ids() {
            writeln!(out, "{}", id)?;
        }
        out.flush()?;
        return Ok(());
    }

    let plan = resolve_plan(&args)?;
    info!(
        "{} experiment(s), {} test words each, corpus {}",
        plan.experiments.len(),
        plan.word_limit,
        corpus.root().display()
    );

    // A missing document stops the whole run, later experiments included
    let mut reports = Vec::with_capacity(plan.experiments.len());
    for experiment in &plan.experiments {
        let report = run_experiment(&corpus, experiment, plan.word_limit)?;
        if args.json {
            reports.push(report);
        } else {
            table::write_report(&mut out, &report)?;
            out.flush()?;
        }
    }

    if args.json {
        serde_json::to_writer_pretty(&mut out, &reports)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
