use std::time::Instant;

use anyhow::Context;
use colored::*;
use huntdeck_common::{
    config::Config, info, session::kind::ReconScan, session::target::Target, success, warn,
};
use huntdeck_core::scanner::{ScanController, ScanView};

use crate::commands::page;
use crate::hprint;
use crate::terminal::{format, print};

pub async fn recon(target: Target, kinds: Vec<ReconScan>, cfg: &Config) -> anyhow::Result<()> {
    let mut controller = ScanController::recon();

    for kind in kinds {
        controller
            .start_scan(target.clone(), kind)
            .with_context(|| format!("cannot start a {kind} scan"))?;
        if cfg.quiet == 0 {
            info!("Started {} scan of {}", kind.to_string().bold(), target);
        }

        let start_time = Instant::now();
        let busy_text = format::recon_busy_text(kind);
        let Some(view) = page::wait_until_settled(controller.subscribe(), "recon", busy_text, cfg).await
        else {
            warn!("Left the recon page, {kind} scan discarded");
            controller.teardown();
            return Ok(());
        };

        render(&view, cfg)?;
        success!(
            "{} scan of {} finished in {}",
            kind.to_string().bold(),
            target.to_string().green(),
            format!("{:.2}s", start_time.elapsed().as_secs_f64()).yellow()
        );
    }

    Ok(())
}

fn render(view: &ScanView<ReconScan>, cfg: &Config) -> anyhow::Result<()> {
    if let Some(cause) = &view.failure {
        return Err(cause.clone()).context("recon scan failed");
    }
    let (Some(kind), Some(target)) = (view.result_kind, &view.target) else {
        anyhow::bail!("recon page settled without a result");
    };

    if cfg.quiet > 1 {
        return Ok(());
    }

    for (title, body) in format::recon_sections(kind, target) {
        print::header(title, cfg.quiet);
        print::block(&body);
        hprint!();
    }
    Ok(())
}
