//! Result content for every page.
//!
//! The core only reports which kind resolved for which target; the text shown
//! for it lives here.

use colored::*;
use huntdeck_common::session::kind::{ReconCategory, ReconScan};
use huntdeck_common::session::target::Target;

use crate::terminal::colors;

/// Text shown on the recon page while `kind` runs.
pub fn recon_busy_text(kind: ReconScan) -> &'static str {
    match kind.category() {
        ReconCategory::Comprehensive | ReconCategory::Subdomains => "Scanning in progress...",
        ReconCategory::Ports => "Port scan in progress...",
        ReconCategory::TechStack => "Technology analysis in progress...",
        ReconCategory::SecurityHeaders => "Security headers analysis in progress...",
        ReconCategory::AiAnalysis => "AI analysis in progress...",
    }
}

/// Result panels filled by a resolved recon scan, as `(title, body)` pairs.
pub fn recon_sections(kind: ReconScan, target: &Target) -> Vec<(&'static str, String)> {
    let categories: &[ReconCategory] = match kind.category() {
        ReconCategory::Comprehensive => &[
            ReconCategory::Subdomains,
            ReconCategory::Ports,
            ReconCategory::TechStack,
            ReconCategory::SecurityHeaders,
            ReconCategory::AiAnalysis,
        ],
        ReconCategory::Subdomains => &[ReconCategory::Subdomains],
        ReconCategory::Ports => &[ReconCategory::Ports],
        ReconCategory::TechStack => &[ReconCategory::TechStack],
        ReconCategory::SecurityHeaders => &[ReconCategory::SecurityHeaders],
        ReconCategory::AiAnalysis => &[ReconCategory::AiAnalysis],
    };

    categories
        .iter()
        .map(|category| recon_section(*category, kind, target))
        .collect()
}

fn recon_section(
    category: ReconCategory,
    kind: ReconScan,
    target: &Target,
) -> (&'static str, String) {
    match category {
        ReconCategory::Subdomains => (
            "Subdomain Enumeration",
            format!(
                "# Subdomain scan results for {target} using {kind} method\n\n\
                 Found subdomains:\n{}\n\n\
                 AI Analysis: The subdomain pattern suggests a standard corporate structure with \
                 development, staging, and production environments. The 'admin' subdomain may be \
                 worth investigating for potential access control issues.",
                ["api", "admin", "dev", "stage", "mail", "www", "blog", "shop", "support"]
                    .iter()
                    .map(|prefix| format!("- {prefix}.{target}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        ),
        ReconCategory::Ports => (
            "Port Scan",
            format!(
                "# Port scan results for {target} using {kind} method\n\n\
                 PORT     STATE    SERVICE\n\
                 22/tcp   open     ssh\n\
                 80/tcp   open     http\n\
                 443/tcp  open     https\n\
                 8080/tcp open     http-proxy\n\
                 8443/tcp open     https-alt\n\n\
                 Service Details:\n\
                 - SSH: OpenSSH 8.9p1\n\
                 - HTTP: nginx 1.22.1\n\
                 - HTTPS: TLS 1.3\n\n\
                 AI Analysis: The open ports indicate a standard web server setup with SSH for \
                 remote administration. The presence of alternative HTTP/HTTPS ports (8080/8443) \
                 may indicate a proxy service or development environment."
            ),
        ),
        ReconCategory::TechStack => (
            "Technology Stack",
            format!(
                "# Technology stack analysis for {target}\n\n\
                 Web Server: Nginx 1.22.1\n\
                 CMS: WordPress 6.2.3\n\
                 JavaScript Frameworks: React 18.2.0, jQuery 3.6.0\n\
                 Analytics: Google Analytics\n\
                 CDN: Cloudflare\n\
                 Programming Language: PHP 8.1\n\
                 Database: MySQL (inferred)\n\
                 Security: WAF detected (Cloudflare)\n\n\
                 AI Analysis: The technology stack reveals an up-to-date WordPress installation \
                 with React for frontend functionality. The Cloudflare WAF protection adds security \
                 but may be bypassed through specific techniques. The combination of WordPress \
                 plugins and PHP could present potential attack vectors worth exploring."
            ),
        ),
        ReconCategory::SecurityHeaders => (
            "Security Headers",
            format!(
                "# Security headers analysis for {target}\n\n\
                 Content-Security-Policy: ❌ Missing\n\
                 X-XSS-Protection: ✅ 1; mode=block\n\
                 X-Frame-Options: ✅ SAMEORIGIN\n\
                 X-Content-Type-Options: ✅ nosniff\n\
                 Referrer-Policy: ✅ strict-origin-when-cross-origin\n\
                 Permissions-Policy: ❌ Missing\n\
                 Strict-Transport-Security (HSTS): ❌ Missing\n\n\
                 Security Score: C (70/100)\n\n\
                 AI Analysis: The absence of Content-Security-Policy leaves the application \
                 vulnerable to XSS attacks despite the X-XSS-Protection header. The missing HSTS \
                 header indicates that the site does not force secure connections, potentially \
                 allowing connection downgrade attacks. Implementing the missing headers would \
                 significantly improve security posture."
            ),
        ),
        ReconCategory::AiAnalysis | ReconCategory::Comprehensive => (
            "AI Analysis",
            format!(
                "# AI Attack Surface Analysis for {target}\n\n\
                 HIGH PRIORITY FINDINGS:\n\n\
                 1. WordPress version 6.2.3 detected with potentially vulnerable plugins\n\
                 \x20  - Contact Form 7 < 5.7.2 (XSS vulnerability)\n\
                 \x20  - WooCommerce < 7.1.0 (SQL injection)\n\
                 \x20  Recommendation: Update all plugins to latest versions\n\n\
                 2. Exposed .git directory at {target}/.git/\n\
                 \x20  Risk: Source code disclosure\n\
                 \x20  Recommendation: Remove or restrict access to .git directory\n\n\
                 3. Subdomain Takeover Opportunity\n\
                 \x20  - Subdomain: legacy.{target} points to unregistered AWS S3 bucket\n\
                 \x20  Risk: Complete subdomain control\n\
                 \x20  Recommendation: Remove DNS record or secure the resource\n\n\
                 MEDIUM PRIORITY:\n\n\
                 1. Missing security headers (CSP, HSTS)\n\
                 \x20  Risk: XSS and connection downgrade attacks\n\n\
                 2. Open ports: 22 (SSH), 80, 443, 8080\n\
                 \x20  Risk: Increased attack surface\n\
                 \x20  Note: SSH version appears up-to-date\n\n\
                 LOW PRIORITY:\n\n\
                 1. Information disclosure in HTTP headers\n\
                 \x20  - Server version exposed\n\
                 \x20  - X-Powered-By header reveals PHP version\n\n\
                 RECOMMENDED NEXT STEPS:\n\n\
                 1. Focus on the WordPress plugin vulnerabilities first\n\
                 2. Investigate the exposed .git directory\n\
                 3. Address subdomain takeover opportunity immediately"
            ),
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    pub fn colored(&self) -> ColoredString {
        let (label, color) = match self {
            Severity::Critical => ("Critical", colors::CRITICAL),
            Severity::High => ("High", colors::HIGH),
            Severity::Medium => ("Medium", colors::MEDIUM),
        };
        label.color(color).bold()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Finding {
    pub id: &'static str,
    pub name: &'static str,
    pub severity: Severity,
    pub path: &'static str,
    pub description: &'static str,
    pub verified: bool,
}

pub const FINDINGS: &[Finding] = &[
    Finding {
        id: "VUL-001",
        name: "SQL Injection",
        severity: Severity::Critical,
        path: "/search.php?id=1",
        description: "Input parameter 'id' is vulnerable to SQL injection attacks, allowing extraction of database contents.",
        verified: true,
    },
    Finding {
        id: "VUL-002",
        name: "Cross-Site Scripting (XSS)",
        severity: Severity::High,
        path: "/profile?name=test",
        description: "The 'name' parameter is reflected without sanitization, allowing arbitrary JavaScript execution.",
        verified: true,
    },
    Finding {
        id: "VUL-003",
        name: "Broken Authentication",
        severity: Severity::High,
        path: "/reset-password",
        description: "Password reset functionality doesn't properly validate reset tokens, allowing account takeover.",
        verified: true,
    },
    Finding {
        id: "VUL-004",
        name: "Information Disclosure",
        severity: Severity::Medium,
        path: "/api/users",
        description: "API endpoint exposes sensitive user information without proper authorization checks.",
        verified: false,
    },
    Finding {
        id: "VUL-005",
        name: "Server Misconfiguration",
        severity: Severity::Medium,
        path: "/.git/config",
        description: "Git repository is publicly accessible, potentially exposing source code and sensitive information.",
        verified: true,
    },
];

pub fn finding_to_detail(finding: &Finding, target: &Target) -> Vec<(String, ColoredString)> {
    let status: ColoredString = if finding.verified {
        "Verified".green()
    } else {
        "Needs Verification".yellow()
    };

    vec![
        (String::from("Severity"), finding.severity.colored()),
        (
            String::from("Location"),
            format!("{target}{}", finding.path).color(colors::ACCENT),
        ),
        (String::from("Details"), finding.description.normal()),
        (String::from("Status"), status),
    ]
}

/// The canned answer of the LLM test console.
pub fn llm_test_response(model: &str) -> String {
    format!(
        "# Test Response from LLM\n\n\
         Your LLM is configured and ready to assist with bug bounty tasks including:\n\n\
         1. Reconnaissance analysis\n\
         2. Vulnerability verification\n\
         3. PoC code generation\n\
         4. Report writing assistance\n\n\
         The model ({model}) is properly connected and operational."
    )
}
