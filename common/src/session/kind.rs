//! # Scan Kinds
//!
//! Every page owns a closed set of scan variants. The set is an enum per page
//! so a controller built for one page cannot be handed a kind from another.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use crate::error::SessionError;

/// A page-specific scan variant.
///
/// `name` is the stable tag shown to users and accepted on the command line
/// (e.g. `"top-ports"`).
pub trait ScanKind:
    Copy + Eq + Debug + Display + FromStr<Err = SessionError> + Send + Sync + 'static
{
    /// Every variant, in the order the page lists them.
    const ALL: &'static [Self];

    fn name(&self) -> &'static str;

    /// Looks a variant up by its tag.
    fn from_name(name: &str) -> Result<Self, SessionError> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| SessionError::UnknownKind(name.to_string()))
    }
}

/// Scans offered by the reconnaissance page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReconScan {
    Comprehensive,
    Passive,
    Active,
    Bruteforce,
    Permutation,
    TopPorts,
    FullScan,
    TechStack,
    SecurityHeaders,
    AiAnalysis,
}

/// The result panel a recon scan fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReconCategory {
    /// Fills every panel at once.
    Comprehensive,
    Subdomains,
    Ports,
    TechStack,
    SecurityHeaders,
    AiAnalysis,
}

impl ReconScan {
    pub fn category(&self) -> ReconCategory {
        match self {
            ReconScan::Comprehensive => ReconCategory::Comprehensive,
            ReconScan::Passive
            | ReconScan::Active
            | ReconScan::Bruteforce
            | ReconScan::Permutation => ReconCategory::Subdomains,
            ReconScan::TopPorts | ReconScan::FullScan => ReconCategory::Ports,
            ReconScan::TechStack => ReconCategory::TechStack,
            ReconScan::SecurityHeaders => ReconCategory::SecurityHeaders,
            ReconScan::AiAnalysis => ReconCategory::AiAnalysis,
        }
    }
}

impl ScanKind for ReconScan {
    const ALL: &'static [Self] = &[
        ReconScan::Comprehensive,
        ReconScan::Passive,
        ReconScan::Active,
        ReconScan::Bruteforce,
        ReconScan::Permutation,
        ReconScan::TopPorts,
        ReconScan::FullScan,
        ReconScan::TechStack,
        ReconScan::SecurityHeaders,
        ReconScan::AiAnalysis,
    ];

    fn name(&self) -> &'static str {
        match self {
            ReconScan::Comprehensive => "comprehensive",
            ReconScan::Passive => "passive",
            ReconScan::Active => "active",
            ReconScan::Bruteforce => "bruteforce",
            ReconScan::Permutation => "permutation",
            ReconScan::TopPorts => "top-ports",
            ReconScan::FullScan => "full-scan",
            ReconScan::TechStack => "tech-stack",
            ReconScan::SecurityHeaders => "security-headers",
            ReconScan::AiAnalysis => "ai-analysis",
        }
    }
}

impl FromStr for ReconScan {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(&s.to_ascii_lowercase())
    }
}

impl Display for ReconScan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Scans offered by the vulnerability page. It has a single trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VulnScan {
    AiPowered,
}

impl ScanKind for VulnScan {
    const ALL: &'static [Self] = &[VulnScan::AiPowered];

    fn name(&self) -> &'static str {
        match self {
            VulnScan::AiPowered => "ai-powered",
        }
    }
}

impl FromStr for VulnScan {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(&s.to_ascii_lowercase())
    }
}

impl Display for VulnScan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
