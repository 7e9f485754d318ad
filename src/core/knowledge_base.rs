//! Static, read-only descriptions of every finding the analyzer can report.
//! Front-ends use these to explain why a query was flagged and what to do about it.

use crate::core::models::{AnalysisResult, RiskSignal, Severity};
use std::fmt;

/// Code used for the finding raised by unrecognized `name:` operators.
pub const UNSUPPORTED_OPERATOR_CODE: &str = "unsupported_operator";

/// High-level grouping of findings, used for prefixes in the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FindingCategory {
    /// Content the query is trying to surface.
    Exposure,
    /// Query syntax the classifier could not recognize.
    Syntax,
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCategory::Exposure => write!(f, "Exposure"),
            FindingCategory::Syntax => write!(f, "Syntax"),
        }
    }
}

/// Everything needed to present a finding to a reviewer.
pub struct FindingDetail {
    /// Machine-readable identifier. For risk signals this is the signal name.
    pub code: &'static str,
    pub title: &'static str,
    pub category: FindingCategory,
    pub severity: Severity,
    /// What the pattern means and why it matters.
    pub description: &'static str,
    /// What a reviewer should do before letting the query run.
    pub remediation: &'static str,
}

static FINDINGS: &[FindingDetail] = &[
    FindingDetail {
        code: "credential_keyword",
        title: "Credential Keyword",
        category: FindingCategory::Exposure,
        severity: Severity::Critical,
        description: "The query contains a word such as 'password', 'secret', 'api_key' or 'token'. Queries like this are commonly used to find credentials that were published by mistake in pages, logs or configuration dumps.",
        remediation: "Do not run this query from automated workflows. If it is part of an authorized assessment, scope it with 'site:' to assets you own and get manual approval first.",
    },
    FindingDetail {
        code: "sensitive_file",
        title: "Sensitive File Reference",
        category: FindingCategory::Exposure,
        severity: Severity::Critical,
        description: "The query names a file that usually holds secrets or full data sets, such as '.env', 'id_rsa', 'wp-config.php', 'config.json' or 'database.sql'.",
        remediation: "Restrict execution to owned domains. If the file is found on one of your own assets, remove it from the public web root and rotate every secret it contained.",
    },
    FindingDetail {
        code: "directory_listing",
        title: "Directory Listing Search",
        category: FindingCategory::Exposure,
        severity: Severity::Warning,
        description: "The query looks for 'index of' pages. These are auto-generated listings exposed by web servers with directory indexing enabled, and they often reveal backups and internal files.",
        remediation: "Review the target scope before running. On your own servers, disable automatic directory indexing (e.g. 'autoindex off' on Nginx, 'Options -Indexes' on Apache)."
    },
    FindingDetail {
        code: UNSUPPORTED_OPERATOR_CODE,
        title: "Unsupported Operator",
        category: FindingCategory::Syntax,
        severity: Severity::Info,
        description: "The query uses a 'name:value' fragment that is not one of site, filetype, inurl, intitle, intext, ext or cache. Search engines may ignore it or treat it as plain text, and unusual operators can hide intent from reviewers.",
        remediation: "Check the spelling of the operator. Replace it with a supported one or quote the fragment if it is meant as literal text.",
    },
];

/// Retrieves the detail for a finding code, or `None` if the code is unknown.
pub fn get_finding_detail(code: &str) -> Option<&'static FindingDetail> {
    FINDINGS.iter().find(|f| f.code == code)
}

pub fn signal_detail(signal: RiskSignal) -> Option<&'static FindingDetail> {
    get_finding_detail(signal.as_ref())
}

/// Lists the finding codes that apply to a result: each fired signal, then one
/// entry if any unsupported operator was seen.
pub fn findings_for(result: &AnalysisResult) -> Vec<&'static FindingDetail> {
    let mut findings: Vec<&'static FindingDetail> = result
        .risk_signals
        .iter()
        .filter_map(|signal| signal_detail(*signal))
        .collect();
    if !result.unsupported_operators.is_empty() {
        findings.extend(get_finding_detail(UNSUPPORTED_OPERATOR_CODE));
    }
    findings
}
