//! Usage and help rendering.
//!
//! Rendering is a pure function of the registry and a target width. The only
//! impure piece is [`terminal_width`], which callers are expected to combine
//! with [`FALLBACK_WIDTH`].
use std::fmt::Write;

use crate::{spec::dashed, ArgumentSpec, Nargs, Registry};

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

/// Width used when no terminal is attached.
pub const FALLBACK_WIDTH: usize = 80;

/// Narrower targets are rendered at this width.
pub const MIN_WIDTH: usize = 20;

const ENTRY_INDENT: usize = 4;
const DOC_INDENT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no terminal attached")]
pub struct NoTerminal;

/// Column count of the controlling terminal.
pub fn terminal_width() -> Result<usize, NoTerminal> {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => Ok(usize::from(cols)),
        _ => Err(NoTerminal),
    }
}

/// [`terminal_width`], or [`FALLBACK_WIDTH`] when detection fails.
pub fn width_or_fallback() -> usize {
    terminal_width().unwrap_or_else(|NoTerminal| {
        tracing::debug!(FALLBACK_WIDTH, "terminal width unavailable, using fallback");
        FALLBACK_WIDTH
    })
}

/// Everything shown on a help page.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    pub prog: &'a str,
    pub description: Option<&'a str>,
    pub epilog: Option<&'a str>,
    pub registry: &'a Registry,
}

impl Page<'_> {
    /// The `Usage:` line, wrapped with continuation lines indented.
    pub fn usage(&self, width: usize) -> String {
        let width = width.max(MIN_WIDTH);
        let mut items = vec!["Usage:".to_string(), self.prog.to_string()];
        items.extend(self.registry.optionals().map(option_usage));
        items.extend(self.registry.positionals().map(positional_usage));

        let mut buf = String::new();
        let lines = fill(items.iter().map(String::as_str), width, width - ENTRY_INDENT);
        for (i, line) in lines.iter().enumerate() {
            let indent = if i == 0 { 0 } else { ENTRY_INDENT };
            w!(buf, "{blank:indent$}{line}\n", blank = "");
        }
        buf
    }

    /// Usage, description, positional arguments, options, epilog.
    pub fn render(&self, width: usize) -> String {
        let width = width.max(MIN_WIDTH);
        let mut buf = self.usage(width);

        if let Some(doc) = self.description {
            blank_line(&mut buf);
            write_lines_indented(&mut buf, doc, 0, width);
        }

        let args = self.registry.positionals().collect::<Vec<_>>();
        if !args.is_empty() {
            blank_line(&mut buf);
            w!(buf, "ARGS:\n");
            write_entries(&mut buf, &args, positional_usage, width);
        }

        let flags = self.registry.optionals().collect::<Vec<_>>();
        if !flags.is_empty() {
            blank_line(&mut buf);
            w!(buf, "OPTIONS:\n");
            write_entries(&mut buf, &flags, option_invocation, width);
        }

        if let Some(doc) = self.epilog {
            blank_line(&mut buf);
            write_lines_indented(&mut buf, doc, 0, width);
        }
        buf
    }
}

fn write_entries(
    buf: &mut String,
    specs: &[&ArgumentSpec],
    name: fn(&ArgumentSpec) -> String,
    width: usize,
) {
    let mut blank = "";
    for spec in specs {
        w!(buf, "{blank}");
        blank = "\n";

        write_lines_indented(buf, &name(spec), ENTRY_INDENT, width);
        let doc = entry_doc(spec);
        if !doc.is_empty() {
            write_lines_indented(buf, &doc, DOC_INDENT, width);
        }
    }
}

fn entry_doc(spec: &ArgumentSpec) -> String {
    let mut doc = spec.get_help().unwrap_or_default().to_string();
    let mut note = |text: String| {
        if !doc.is_empty() {
            doc.push(' ');
        }
        doc.push_str(&text);
    };
    if let Some(choices) = spec.get_choices() {
        note(format!("[possible values: {}]", choices.join(", ")));
    }
    if let Some(default) = spec.get_default() {
        note(format!("[default: {}]", default.as_slice().join(" ")));
    }
    doc
}

/// `-u, --upper <UPPER>`
fn option_invocation(spec: &ArgumentSpec) -> String {
    let names = spec.qualifiers().iter().map(|it| dashed(it)).collect::<Vec<_>>().join(", ");
    format!("{names}{}", value_suffix(spec))
}

/// `[-u]`, or `-n <N>` for a required option.
fn option_usage(spec: &ArgumentSpec) -> String {
    let name = spec.qualifiers().first().map(|it| dashed(it)).unwrap_or_default();
    let res = format!("{name}{}", value_suffix(spec));
    if spec.is_required() {
        res
    } else {
        format!("[{res}]")
    }
}

fn value_suffix(spec: &ArgumentSpec) -> String {
    let v = spec.value_name();
    match spec.get_nargs() {
        Nargs::Exact(n) => format!(" <{v}>").repeat(n),
        Nargs::Optional => format!(" [{v}]"),
        Nargs::ZeroOrMore => format!(" [{v}]..."),
        Nargs::OneOrMore => format!(" <{v}>..."),
        Nargs::Remainder => " ...".to_string(),
    }
}

fn positional_usage(spec: &ArgumentSpec) -> String {
    let v = spec.value_name();
    match spec.get_nargs() {
        Nargs::Exact(n) if spec.is_required() => vec![format!("<{v}>"); n].join(" "),
        Nargs::Exact(n) => format!("[{}]", vec![v; n].join(" ")),
        Nargs::Optional => format!("[{v}]"),
        Nargs::ZeroOrMore | Nargs::Remainder => format!("[{v}]..."),
        Nargs::OneOrMore => format!("<{v}>..."),
    }
}

fn write_lines_indented(buf: &mut String, multiline_str: &str, indent: usize, width: usize) {
    for line in multiline_str.split('\n').map(str::trim_end) {
        if line.is_empty() {
            w!(buf, "\n");
            continue;
        }
        for chunk in wrap(line, width - indent) {
            w!(buf, "{blank:indent$}{chunk}\n", blank = "");
        }
    }
}

fn blank_line(buf: &mut String) {
    w!(buf, "\n");
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    fill(text.split_whitespace(), width, width)
}

fn fill<'a>(
    items: impl IntoIterator<Item = &'a str>,
    first_width: usize,
    rest_width: usize,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let limit = |lines: &Vec<String>| {
        let width = if lines.is_empty() { first_width } else { rest_width };
        width.max(1)
    };

    for mut item in items {
        while item.chars().count() > limit(&lines) {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let at = item.char_indices().nth(limit(&lines)).map_or(item.len(), |(i, _)| i);
            lines.push(item[..at].to_string());
            item = &item[at..];
        }
        if item.is_empty() {
            continue;
        }
        let len = line.chars().count();
        if len > 0 && len + 1 + item.chars().count() > limit(&lines) {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(item);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
