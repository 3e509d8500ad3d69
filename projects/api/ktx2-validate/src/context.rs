//! The validation context: input buffer, forward-only cursor, diagnostic
//! sink and the state the stages share.
//!
//! The three public entry points (`validate_file`, `validate_stream`,
//! `validate_memory`) funnel into one routine. A fatal issue delivers its
//! report through the sink and then unwinds the stage driver as a typed
//! `Err`; the entry points translate that into exit code 3.

use std::fmt::Display;
use std::io::Read;
use std::path::Path;

use ktx2_format::dfd::DataFormatDescriptor;
use ktx2_format::header::Header;
use thiserror::Error;

use crate::issues::{IoError, Issue, IssueSeverity};
use crate::reports::ValidationReport;

/// Exit code of a clean run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code of a run that recorded errors or hit a fatal issue.
pub const EXIT_INVALID_FILE: i32 = 3;

/// Policy switches for a validation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationOptions {
    /// Count every warning as an error (the report keeps its warning
    /// severity, only the counters and the exit code change).
    pub warnings_as_errors: bool,
    /// Additionally check KHR_texture_basisu (glTF) compatibility.
    pub check_gltf_basisu: bool,
}

/// Control-flow escape raised by fatal issues. The report has already been
/// delivered when this value exists; it carries no data of its own.
#[derive(Debug, Error)]
#[error("fatal validation issue; the remaining bytes cannot be interpreted")]
pub(crate) struct FatalValidationError;

pub(crate) type ValidationResult<T = ()> = Result<T, FatalValidationError>;

pub(crate) struct ValidationContext<'a, F: FnMut(&ValidationReport)> {
    data: &'a [u8],
    position: usize,
    sink: F,
    options: ValidationOptions,
    num_errors: u32,
    num_warnings: u32,

    // State produced by earlier stages for later ones.
    pub(crate) header: Header,
    pub(crate) layer_count: u32,
    pub(crate) level_count: u32,
    pub(crate) dimension_count: u32,
    pub(crate) expected_file_end: Option<u64>,
    pub(crate) payload_start: Option<u64>,
    pub(crate) dfd: Option<DataFormatDescriptor>,
    pub(crate) cubemap_incomplete_found: bool,
}

impl<'a, F: FnMut(&ValidationReport)> ValidationContext<'a, F> {
    pub(crate) fn new(data: &'a [u8], options: ValidationOptions, sink: F) -> Self {
        Self {
            data,
            position: 0,
            sink,
            options,
            num_errors: 0,
            num_warnings: 0,
            header: Header::default(),
            layer_count: 0,
            level_count: 0,
            dimension_count: 0,
            expected_file_end: None,
            payload_start: None,
            dfd: None,
            cubemap_incomplete_found: false,
        }
    }

    pub(crate) fn file_size(&self) -> u64 {
        self.data.len() as u64
    }

    pub(crate) fn error_count(&self) -> u32 {
        self.num_errors
    }

    pub(crate) fn options(&self) -> ValidationOptions {
        self.options
    }

    fn deliver(&mut self, issue: &Issue, args: &[&dyn Display]) {
        let report = ValidationReport {
            id: issue.id,
            severity: issue.severity,
            message: issue.message.to_string(),
            details: issue.format_details(args),
        };
        (self.sink)(&report);
    }

    /// Records a warning, counting it as an error under the
    /// warnings-as-errors policy.
    pub(crate) fn warning(&mut self, issue: &Issue, args: &[&dyn Display]) {
        debug_assert_eq!(issue.severity, IssueSeverity::Warning);
        if self.options.warnings_as_errors {
            self.num_errors += 1;
        } else {
            self.num_warnings += 1;
        }
        self.deliver(issue, args);
    }

    /// Records an error; validation continues.
    pub(crate) fn error(&mut self, issue: &Issue, args: &[&dyn Display]) {
        debug_assert_eq!(issue.severity, IssueSeverity::Error);
        self.num_errors += 1;
        self.deliver(issue, args);
    }

    /// Records a fatal issue and returns the escape value for the caller
    /// to propagate with `?`. The report is delivered before the escape.
    pub(crate) fn fatal(&mut self, issue: &Issue, args: &[&dyn Display]) -> FatalValidationError {
        debug_assert_eq!(issue.severity, IssueSeverity::Fatal);
        self.num_errors += 1;
        self.deliver(issue, args);
        FatalValidationError
    }

    /// Current cursor position.
    pub(crate) fn position(&self) -> u64 {
        self.position as u64
    }

    /// Reads `len` bytes at the cursor.
    ///
    /// Reading past the end of the buffer is fatal (issue 1003); `name`
    /// describes what was being read for the diagnostic.
    pub(crate) fn read_bytes(&mut self, len: usize, name: &str) -> ValidationResult<&'a [u8]> {
        let available = self.data.len() - self.position;
        if len > available {
            return Err(self.fatal(&IoError::UNEXPECTED_EOF, &[&len, &name, &available]));
        }
        let bytes = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    /// Moves the cursor forward to an absolute offset.
    ///
    /// Seeking past the end of the buffer is fatal (issue 1007). Seeking
    /// backward is a stage-ordering bug, not a file defect.
    pub(crate) fn seek_to(&mut self, offset: u64, name: &str) -> ValidationResult {
        if offset > self.data.len() as u64 {
            let size = self.data.len();
            return Err(self.fatal(&IoError::UNEXPECTED_EOF_SEEK, &[&offset, &name, &size]));
        }
        debug_assert!(offset >= self.position as u64, "cursor is forward-only");
        self.position = offset as usize;
        Ok(())
    }
}

/// Validates an in-memory byte sequence.
///
/// Reports are delivered to `sink` in detection order.
///
/// # Return
///
/// [`EXIT_SUCCESS`] when no errors were recorded, [`EXIT_INVALID_FILE`]
/// otherwise.
pub fn validate_memory(
    data: &[u8],
    options: ValidationOptions,
    sink: impl FnMut(&ValidationReport),
) -> i32 {
    let mut ctx = ValidationContext::new(data, options, sink);
    let outcome = ctx.run();
    match outcome {
        Ok(()) if ctx.error_count() == 0 => EXIT_SUCCESS,
        _ => EXIT_INVALID_FILE,
    }
}

/// Slurps a stream and validates it. Read failures surface as fatal issue
/// 1002 through the sink.
pub fn validate_stream(
    reader: &mut dyn Read,
    options: ValidationOptions,
    mut sink: impl FnMut(&ValidationReport),
) -> i32 {
    let mut data = Vec::new();
    if let Err(error) = reader.read_to_end(&mut data) {
        emit_entry_fatal(&mut sink, &IoError::FILE_READ, &[&error]);
        return EXIT_INVALID_FILE;
    }
    validate_memory(&data, options, sink)
}

/// Opens and validates a file. Open/read failures surface as fatal issue
/// 1001 through the sink.
pub fn validate_file(
    path: &Path,
    options: ValidationOptions,
    mut sink: impl FnMut(&ValidationReport),
) -> i32 {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(error) => {
            emit_entry_fatal(&mut sink, &IoError::FILE_OPEN, &[&path.display(), &error]);
            return EXIT_INVALID_FILE;
        }
    };
    validate_memory(&data, options, sink)
}

fn emit_entry_fatal(
    sink: &mut impl FnMut(&ValidationReport),
    issue: &Issue,
    args: &[&dyn Display],
) {
    sink(&ValidationReport {
        id: issue.id,
        severity: issue.severity,
        message: issue.message.to_string(),
        details: issue.format_details(args),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(data: &[u8], options: ValidationOptions) -> (i32, Vec<ValidationReport>) {
        let mut reports = Vec::new();
        let code = validate_memory(data, options, |report| reports.push(report.clone()));
        (code, reports)
    }

    #[test]
    fn empty_input_is_a_fatal_short_read() {
        let (code, reports) = collect(&[], ValidationOptions::default());
        assert_eq!(code, EXIT_INVALID_FILE);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, 1003);
        assert_eq!(reports[0].severity, IssueSeverity::Fatal);
    }

    #[test]
    fn stream_and_memory_agree() {
        let data = b"not a ktx2 file at all".to_vec();
        let (memory_code, memory_reports) = collect(&data, ValidationOptions::default());

        let mut stream_reports = Vec::new();
        let stream_code = validate_stream(&mut &data[..], ValidationOptions::default(), |report| {
            stream_reports.push(report.clone())
        });

        assert_eq!(memory_code, stream_code);
        assert_eq!(memory_reports, stream_reports);
    }

    #[test]
    fn missing_file_reports_open_failure() {
        let mut reports = Vec::new();
        let code = validate_file(
            Path::new("/nonexistent/definitely-missing.ktx2"),
            ValidationOptions::default(),
            |report| reports.push(report.clone()),
        );
        assert_eq!(code, EXIT_INVALID_FILE);
        assert_eq!(reports[0].id, 1001);
    }
}
