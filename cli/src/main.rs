mod commands;
mod terminal;

use commands::{CommandLine, Commands, connect, recon, vulns};
use huntdeck_common::session::endpoint::LlmEndpoint;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Recon { target, kinds } => {
            print::header("reconnaissance", cfg.quiet);
            recon::recon(target, kinds, &cfg).await
        }
        Commands::Vulns { target } => {
            print::header("vulnerability management", cfg.quiet);
            vulns::vulns(target, &cfg).await
        }
        Commands::Connect {
            endpoint,
            api_key,
            model,
            prompt,
        } => {
            print::header("settings", cfg.quiet);
            let endpoint = LlmEndpoint::new(endpoint, api_key).with_model(model);
            connect::connect(endpoint, prompt, &cfg).await
        }
    }
}
