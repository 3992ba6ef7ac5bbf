use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use symscan_core::pipeline::{
    run_steps, PipelineEventKind, PipelineStep, Session, UploadOutcome,
};
use symscan_core::service::{check_extension, DetectionService};

use super::{export_rows, GlobalArgs};
use crate::summary::print_results;

#[derive(Args)]
pub struct RunArgs {
    /// Drawing to analyse (jpg, jpeg, png, pdf, dwf, dwfx, dwg, dxf)
    pub file: PathBuf,

    /// Page to show after the run (1-based, clamped to the document)
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Export the page's detection summary as CSV (default file name from config)
    #[arg(long, value_name = "PATH")]
    pub export: Option<Option<PathBuf>>,
}

pub fn run(global: &GlobalArgs, args: &RunArgs) -> Result<()> {
    check_extension(&args.file)?;
    let (config, service) = global.connect()?;

    println!("Symscan");
    println!("  Service:  {}", service.base_url());
    println!("  Input:    {}", args.file.display());
    println!();

    let mut session = Session::new();
    session.reset(&service);

    let outcome = match service.upload(&args.file) {
        Ok(outcome) => outcome,
        Err(e) => UploadOutcome::failed(e.to_string()),
    };
    let Some(run) = session.accept_upload(&outcome) else {
        let reason = outcome.error.unwrap_or_else(|| outcome.status.clone());
        bail!("{}: {}", session.pipeline().status_message(), reason);
    };

    let pb = ProgressBar::new(PipelineStep::SEQUENCE.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    run_steps(&service, run, |event| {
        match event.kind {
            PipelineEventKind::StepStarted(step) => pb.set_message(step.status_message()),
            PipelineEventKind::StepFinished(_) => pb.inc(1),
            PipelineEventKind::Completed(_) | PipelineEventKind::Failed { .. } => {}
        }
        session.apply(event);
    });

    if session.pipeline().is_failure() {
        pb.abandon_with_message("Failed");
        bail!("{}", session.pipeline().status_message());
    }
    pb.finish_with_message("Done");

    let results = session
        .results()
        .context("Pipeline finished without results")?;
    let page = print_results(results, args.page);

    if let Some(ref path) = args.export {
        export_rows(&results.page_rows(page), path.as_deref(), &config)?;
    }
    Ok(())
}
