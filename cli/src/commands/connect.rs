use anyhow::Context;
use colored::*;
use huntdeck_common::{config::Config, error, session::endpoint::LlmEndpoint, success, warn};
use huntdeck_core::connection::{ConnectionController, ConnectionView};

use crate::commands::page;
use crate::terminal::{format, print};

pub async fn connect(endpoint: LlmEndpoint, prompt: Option<String>, cfg: &Config) -> anyhow::Result<()> {
    let mut controller = ConnectionController::simulated();
    let has_api_key = endpoint.has_api_key();
    controller
        .connect(endpoint)
        .context("cannot test the LLM connection")?;

    let Some(view) =
        page::wait_until_settled(controller.subscribe(), "settings", "Connecting...", cfg).await
    else {
        warn!("Left the settings page, connection test discarded");
        controller.teardown();
        return Ok(());
    };

    render_status(&view, has_api_key, cfg);
    if let Some(cause) = &view.failure {
        error!("Could not reach {}", view.endpoint);
        return Err(cause.clone()).context("connection test failed");
    }
    success!("Successfully connected to LLM at {}", view.endpoint.green());

    if let Some(prompt) = prompt {
        let active = controller
            .ensure_connected()
            .context("the LLM test console needs a connection")?;
        print::header("LLM Test Console", cfg.quiet);
        print::print_status(&prompt);
        print::block(&format::llm_test_response(&active.model));
    }
    Ok(())
}

fn render_status(view: &ConnectionView, has_api_key: bool, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::header("LLM Configuration", cfg.quiet);
    let status: ColoredString = if view.connected {
        "● Connected".green().bold()
    } else {
        "● Not Connected".red().bold()
    };
    print::aligned_line("Status", status);
    print::aligned_line("Endpoint", view.endpoint.as_str());
    if let Some(model) = &view.model {
        print::aligned_line("Model", model.as_str());
    }
    print::aligned_line("API key", if has_api_key { "set" } else { "none" });
}
