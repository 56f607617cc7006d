use anyhow::Context;
use colored::*;
use huntdeck_common::{config::Config, session::kind::VulnScan, session::target::Target, success, warn};
use huntdeck_core::scanner::ScanController;

use crate::commands::page;
use crate::hprint;
use crate::terminal::{format, print};

pub async fn vulns(target: Target, cfg: &Config) -> anyhow::Result<()> {
    let mut controller = ScanController::vulnerabilities();
    controller
        .start_scan(target, VulnScan::AiPowered)
        .context("cannot start the vulnerability scan")?;

    let Some(view) =
        page::wait_until_settled(controller.subscribe(), "vulnerabilities", "Scanning...", cfg).await
    else {
        warn!("Left the vulnerability page, scan discarded");
        controller.teardown();
        return Ok(());
    };

    if let Some(cause) = view.failure {
        return Err(cause).context("vulnerability scan failed");
    }
    let target = view.target.context("vulnerability page settled without a target")?;

    if cfg.quiet < 2 {
        print::header("Vulnerability List", cfg.quiet);
        for (idx, finding) in format::FINDINGS.iter().enumerate() {
            print::tree_head(idx, &format!("{} {}", finding.id, finding.name));
            print::as_tree_one_level(format::finding_to_detail(finding, &target));
            if idx + 1 != format::FINDINGS.len() {
                hprint!();
            }
        }
        if cfg.quiet == 0 {
            print::fat_separator();
        }
    }

    let critical = format::FINDINGS
        .iter()
        .filter(|finding| finding.severity == format::Severity::Critical)
        .count();
    success!(
        "Scan of {} complete: {} findings, {} critical",
        target.to_string().green(),
        format::FINDINGS.len().to_string().bold(),
        critical.to_string().red().bold()
    );
    Ok(())
}
