pub mod connect;
pub mod page;
pub mod recon;
pub mod vulns;

use clap::builder::{NonEmptyStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser, Subcommand};
use huntdeck_common::config::Config;
use huntdeck_common::session::endpoint::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use huntdeck_common::session::kind::ReconScan;
use huntdeck_common::session::target::Target;

#[derive(Parser)]
#[command(name = "huntdeck")]
#[command(about = "A bug bounty workbench.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less; repeat for even less (-qq)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Do not listen for 'q' while a page is busy
    #[arg(long, global = true)]
    pub disable_input: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run reconnaissance scans against a target
    #[command(alias = "r")]
    Recon {
        /// Domain or IP, e.g. example.com or 192.168.1.1
        #[arg(value_parser = non_empty_target())]
        target: Target,
        /// Scan kinds to run one after another
        #[arg(short, long = "kind", default_value = "comprehensive")]
        kinds: Vec<ReconScan>,
    },
    /// Scan a target for vulnerabilities
    #[command(alias = "v")]
    Vulns {
        /// Target URL, e.g. https://example.com
        #[arg(value_parser = non_empty_target())]
        target: Target,
    },
    /// Test the connection to an LLM endpoint
    #[command(alias = "c")]
    Connect {
        #[arg(long, default_value = DEFAULT_ENDPOINT, value_parser = NonEmptyStringValueParser::new())]
        endpoint: String,
        /// Optional, local servers usually need none
        #[arg(long, default_value = "")]
        api_key: String,
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,
        /// Send a test prompt once connected
        #[arg(long)]
        prompt: Option<String>,
    },
}

/// Targets are opaque, but an empty one never starts a scan.
fn non_empty_target() -> impl TypedValueParser<Value = Target> {
    NonEmptyStringValueParser::new().map(Target::from)
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            disable_input: self.disable_input,
        }
    }
}
