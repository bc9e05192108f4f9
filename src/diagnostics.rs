//! Error reporting for the Blink CLI.
//!
//! Renders lex, parse, and runtime errors as [ariadne] reports on
//! stderr, with the offending source range highlighted. File-read
//! failures have no source to point into and print a plain line.
//!
//! [ariadne]: https://docs.rs/ariadne

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use blink::token::Span;

use crate::driver::CompileError;

/// Renders a labeled error report for a source range.
fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Returns a labelable range for `span`.
///
/// Errors at end of input carry a zero-width span; those are widened
/// to the last character of the source so the label has something to
/// point at.
fn diagnostic_range(span: Span, source: &str) -> Range<usize> {
    if span.start < span.end {
        span.start..span.end
    } else if source.is_empty() {
        0..0
    } else {
        let end = source.len().saturating_sub(1);
        end..source.len()
    }
}

/// Reports a spanned error, falling back to a plain line when the
/// report itself cannot be rendered.
fn report_spanned(filename: &str, source: &str, span: Span, message: &str) {
    let range = diagnostic_range(span, source);
    if let Err(report_err) = print_range_report(filename, source, range, message) {
        eprintln!("Error: {} (at {}:{})", message, span.line, span.column);
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}

/// Reports a failed run on stderr.
pub(crate) fn report_error(filename: &str, source: &str, error: &CompileError) {
    match error {
        CompileError::FileRead {
            path,
            source: io_err,
        } => {
            eprintln!("Error reading file {}: {}", path, io_err);
        }
        CompileError::Lex(error) => {
            report_spanned(filename, source, error.span(), error.message());
        }
        CompileError::Parse(error) => {
            report_spanned(filename, source, error.span(), error.message());
        }
        CompileError::Runtime(error) => {
            report_spanned(filename, source, error.span(), error.message());
        }
    }
}
