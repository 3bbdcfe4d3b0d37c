use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use log::debug;

use crate::domain::Domain;
use crate::error::{GuardError, Result};

/// Regex pattern for a blocklist line: one domain name, dot-separated labels
static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.\-]+$").expect("DOMAIN_PATTERN: hardcoded regex is invalid")
});

/// Maximum nesting depth for `file:` include directives.
const MAX_INCLUDE_DEPTH: usize = 10;

/// Parse a domain blocklist from text, one domain per line.
///
/// Blank lines and `#` comments (full-line or inline) are skipped. Supports a
/// `file: /path/to/list.txt` directive to include domains from an external
/// file.
pub fn parse_domains(text: &str) -> Result<Vec<Domain>> {
    parse_domains_inner(text, 0)
}

fn parse_domains_inner(text: &str, depth: usize) -> Result<Vec<Domain>> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(GuardError::ParseError(format!(
            "file include depth exceeds maximum ({MAX_INCLUDE_DEPTH}), possible circular include"
        )));
    }

    let mut domains = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers

        // Remove comments and trim whitespace
        let line = if let Some(comment_pos) = line.find('#') {
            &line[..comment_pos]
        } else {
            line
        };
        let line = line.trim();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        // Handle file include directive
        if let Some(path) = line.strip_prefix("file:") {
            let path = path.trim();
            let file_domains = parse_domains_from_file_inner(path, depth + 1)?;
            domains.extend(file_domains);
            continue;
        }

        if !DOMAIN_PATTERN.is_match(line) {
            return Err(GuardError::ParseErrorAtLine {
                line: line_num,
                message: format!("Invalid domain: {}", line),
            });
        }

        domains.push(Domain::parse(line)?);
    }

    debug!("parsed {} domain(s)", domains.len());
    Ok(domains)
}

/// Parse a domain blocklist from a file.
pub fn parse_domains_from_file(path: impl AsRef<Path>) -> Result<Vec<Domain>> {
    parse_domains_from_file_inner(path, 0)
}

fn parse_domains_from_file_inner(path: impl AsRef<Path>, depth: usize) -> Result<Vec<Domain>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        GuardError::ParseError(format!(
            "Failed to read blocklist file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_domains_inner(&text, depth)
}
