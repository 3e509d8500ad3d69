//! Delivered diagnostics and the two destination strategies (text stream,
//! collected JSON document).

use serde::ser::Serializer;
use serde::Serialize;
use std::io::{self, Write};

use crate::issues::IssueSeverity;

/// One delivered diagnostic. `severity` keeps the catalog severity even
/// when warnings are counted as errors by policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    #[serde(rename = "id")]
    pub id: u16,
    #[serde(rename = "type", serialize_with = "serialize_severity")]
    pub severity: IssueSeverity,
    pub message: String,
    pub details: String,
}

fn serialize_severity<S: Serializer>(
    severity: &IssueSeverity,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(severity.name())
}

#[derive(Serialize)]
struct ValidationDocument<'a> {
    valid: bool,
    messages: &'a [ValidationReport],
}

/// Streams each report to a writer as it arrives:
///
/// ```text
/// error-3008: Mismatching pixelWidth and pixelHeight for a cube map.
///     pixelWidth is 64 and pixelHeight is 32, but for a cube map they must be equal.
/// ```
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn report(&mut self, report: &ValidationReport) -> io::Result<()> {
        writeln!(
            self.out,
            "{}-{:04}: {}",
            report.severity.name(),
            report.id,
            report.message
        )?;
        writeln!(self.out, "    {}", report.details)
    }
}

/// Collects reports and renders the final
/// `{ "valid": bool, "messages": [...] }` document at the end of the run.
#[derive(Default)]
pub struct JsonReporter {
    messages: Vec<ValidationReport>,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, report: &ValidationReport) {
        self.messages.push(report.clone());
    }

    /// Renders the document. `valid` reflects the run's error count under
    /// the active warnings-as-errors policy.
    ///
    /// # Return
    ///
    /// The JSON text; serialization of these plain structs cannot fail.
    pub fn finish(&self, valid: bool, minified: bool) -> String {
        let document = ValidationDocument {
            valid,
            messages: &self.messages,
        };
        let rendered = if minified {
            serde_json::to_string(&document)
        } else {
            serde_json::to_string_pretty(&document)
        };
        rendered.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ValidationReport {
        ValidationReport {
            id: 3008,
            severity: IssueSeverity::Error,
            message: "Mismatching pixelWidth and pixelHeight for a cube map.".to_string(),
            details: "pixelWidth is 64 and pixelHeight is 32, but for a cube map they must be equal."
                .to_string(),
        }
    }

    #[test]
    fn text_reporter_formats_severity_id_and_indented_details() {
        let mut out = Vec::new();
        TextReporter::new(&mut out).report(&sample_report()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "error-3008: Mismatching pixelWidth and pixelHeight for a cube map.\n    \
             pixelWidth is 64 and pixelHeight is 32, but for a cube map they must be equal.\n"
        );
    }

    #[test]
    fn json_reporter_collects_and_renders_document() {
        let mut reporter = JsonReporter::new();
        reporter.report(&sample_report());
        let json = reporter.finish(false, true);
        assert_eq!(
            json,
            "{\"valid\":false,\"messages\":[{\"id\":3008,\"type\":\"error\",\
             \"message\":\"Mismatching pixelWidth and pixelHeight for a cube map.\",\
             \"details\":\"pixelWidth is 64 and pixelHeight is 32, but for a cube map they must be equal.\"}]}"
        );
    }

    #[test]
    fn json_escapes_quotes_and_backslashes() {
        let mut reporter = JsonReporter::new();
        reporter.report(&ValidationReport {
            id: 7010,
            severity: IssueSeverity::Warning,
            message: "Custom key in keyValueData.".to_string(),
            details: "Custom key \"weird\\key\" found in keyValueData.".to_string(),
        });
        let json = reporter.finish(true, true);
        assert!(json.contains("\\\"weird\\\\key\\\""));
        assert!(json.contains("\"valid\":true"));
    }

    #[test]
    fn pretty_json_is_indented() {
        let mut reporter = JsonReporter::new();
        reporter.report(&sample_report());
        let json = reporter.finish(false, false);
        assert!(json.starts_with("{\n  \"valid\": false"));
    }
}
