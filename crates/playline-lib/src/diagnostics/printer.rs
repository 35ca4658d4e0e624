//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use indexmap::IndexMap;
use playline_core::{Diagnostic, Position, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d [Diagnostic],
    sources: IndexMap<&'s str, &'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d [Diagnostic]) -> Self {
        Self {
            diagnostics,
            sources: IndexMap::new(),
            colored: false,
        }
    }

    /// Source text for diagnostics whose file name is `path`.
    pub fn source(mut self, path: &'s str, text: &'s str) -> Self {
        self.sources.insert(path, text);
        self
    }

    pub fn sources(mut self, sources: &'s IndexMap<String, String>) -> Self {
        for (path, text) in sources {
            self.sources.insert(path.as_str(), text.as_str());
        }
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }

            let Some(source) = self.sources.get(diag.file_name.as_str()) else {
                writeln!(w, "{diag}")?;
                continue;
            };

            let range = span(source, diag.range.start, diag.range.end);
            let snippet = Snippet::source(*source)
                .line_start(1)
                .path(diag.file_name.as_str())
                .annotation(AnnotationKind::Primary.span(range));

            let level = severity_to_level(diag.severity);
            let report = vec![level.primary_title(&diag.message).element(snippet)];
            writeln!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
        Severity::Info => Level::INFO,
    }
}

/// Byte range for a pair of zero-based line/character positions.
///
/// Positions past the end of a line or of the text are clamped. An empty
/// range is widened to one byte so it stays visible.
pub(super) fn span(source: &str, start: Position, end: Position) -> Range<usize> {
    let start = offset(source, start);
    let end = offset(source, end).max(start);

    if start == end {
        let next = source[start..]
            .chars()
            .next()
            .map_or(start, |c| start + c.len_utf8());
        return start..next;
    }

    start..end
}

fn offset(source: &str, position: Position) -> usize {
    let line = usize::try_from(position.line).unwrap_or(0);
    let character = usize::try_from(position.character).unwrap_or(0);

    let mut line_start = 0;
    for _ in 0..line {
        match source[line_start..].find('\n') {
            Some(i) => line_start += i + 1,
            None => return source.len(),
        }
    }

    let text = &source[line_start..];
    let line_text = text.split('\n').next().unwrap_or(text);
    line_text
        .char_indices()
        .nth(character)
        .map_or(line_start + line_text.len(), |(i, _)| line_start + i)
}
