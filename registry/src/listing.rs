//! The listing channel: a textual resource naming override identities.
//!
//! The resource holds one identity per line, service-file style: blank lines
//! and `#` comments are skipped, surrounding whitespace is trimmed. The
//! resource itself is optional; a host that has none simply never calls this.

use regex_lite::Regex;
use warden_core::{Diagnostic, Diagnostics};

/// Dotted-identifier syntax for override identities.
const IDENTITY_PATTERN: &str = r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$";

/// Parse a listing resource into candidate identities.
///
/// Malformed lines are skipped with a note; they never fail the parse.
pub fn parse_listing(text: &str, diagnostics: &mut Diagnostics) -> Vec<String> {
    let identity = Regex::new(IDENTITY_PATTERN).expect("identity pattern is valid");
    let mut identities = Vec::new();

    for line in text.lines() {
        // Strip trailing comments, then whitespace
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if identity.is_match(line) {
            identities.push(line.to_string());
        } else {
            diagnostics.push(Diagnostic::note(format!(
                "Ignoring malformed override listing entry: {line}"
            )));
        }
    }

    identities
}
