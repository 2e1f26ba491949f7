//! Diagnostic and error reporting for Ember.
//! Ember 的诊断和错误报告。
//!
//! This crate defines `LexicalError`, the single failure type of the lexer,
//! and renders it as a source-annotated report using ariadne.
//! 本 crate 定义词法分析器唯一的错误类型 `LexicalError`，并使用 ariadne 渲染带源码标注的报告。

mod codes;
mod diagnostic;
mod error;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, Label};
pub use error::LexicalError;

use ariadne::{ColorGenerator, Config, IndexType, Label as AriadneLabel, Report, ReportKind, Source};
use std::io::{self, Write};
use std::ops::Range;

/// Build the ariadne report for a diagnostic.
/// 为诊断信息构建 ariadne 报告。
///
/// Spans are byte offsets, so ariadne must index by byte.
fn build_report<'a>(
    filename: &'a str,
    diagnostic: &Diagnostic,
    color: bool,
) -> Report<'a, (&'a str, Range<usize>)> {
    let config = Config::default()
        .with_index_type(IndexType::Byte)
        .with_color(color);

    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Error, filename, diagnostic.span.start.0 as usize)
        .with_config(config)
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let mut ariadne_label =
            AriadneLabel::new((filename, label.span.range())).with_message(&label.message);
        if color {
            ariadne_label = ariadne_label.with_color(colors.next());
        }
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}

/// Render a diagnostic to stderr.
/// 将诊断信息渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<()> {
    build_report(filename, diagnostic, true).eprint((filename, Source::from(source)))
}

/// Render a diagnostic without colors into `out`.
/// 将诊断信息以无颜色形式渲染到 `out`。
pub fn write(
    source: &str,
    filename: &str,
    diagnostic: &Diagnostic,
    out: impl Write,
) -> io::Result<()> {
    build_report(filename, diagnostic, false).write((filename, Source::from(source)), out)
}

/// Render a lexical error to stderr.
/// 将词法错误渲染到标准错误输出。
pub fn emit_error(source: &str, filename: &str, err: &LexicalError) -> io::Result<()> {
    emit(source, filename, &Diagnostic::from(err))
}
