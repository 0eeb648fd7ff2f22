//! Markdown → ratatui `Text` renderer for lesson bodies and examples.
//!
//! Thin wrapper around `pulldown_cmark` that converts markdown events into
//! styled `Line`/`Span` values using the active [`Palette`]. Supports
//! headings, bold, italic, inline code, lists, rules, and fenced code blocks.
//! Code blocks are buffered until they close and then highlighted with
//! syntect through [`code_block`], which also renders lesson examples.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::tui::theme::Palette;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Parse markdown content into styled `Text`.
///
/// Returns owned text (`'static`) so callers aren't constrained by input lifetime.
pub fn render(content: &str, palette: &Palette) -> Text<'static> {
    let mut w = Writer::new(*palette);
    for event in Parser::new_ext(content, Options::ENABLE_STRIKETHROUGH) {
        w.handle(event);
    }
    w.text
}

/// A bordered, syntax-highlighted code block.
///
/// ```text
/// ╭── python ──
/// │ print("hi")
/// ╰──
/// ```
pub fn code_block(code: &str, lang: &str, palette: &Palette) -> Vec<Line<'static>> {
    let border = Style::default().fg(palette.muted);
    let mut lines = Vec::new();

    lines.push(if lang.is_empty() {
        Line::from(Span::styled("╭──", border))
    } else {
        Line::from(vec![
            Span::styled("╭── ", border),
            Span::styled(lang.to_owned(), border.add_modifier(Modifier::BOLD)),
            Span::styled(" ──", border),
        ])
    });

    for mut spans in highlight(code, lang, palette) {
        spans.insert(0, Span::styled("│ ", border));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled("╰──", border)));
    lines
}

/// One span list per source line. Falls back to plain text when the language
/// or theme is unknown.
fn highlight(code: &str, lang: &str, palette: &Palette) -> Vec<Vec<Span<'static>>> {
    // Expand tabs → 4 spaces (ratatui renders \t as zero-width)
    let code = code.replace('\t', "    ");

    let syntax = (!lang.is_empty())
        .then(|| SYNTAX_SET.find_syntax_by_token(lang))
        .flatten();
    let theme = THEME_SET.themes.get(palette.syntax_theme);

    let (Some(syntax), Some(theme)) = (syntax, theme) else {
        let plain = Style::default().fg(palette.code_fg);
        return code
            .lines()
            .map(|line| vec![Span::styled(line.to_owned(), plain)])
            .collect();
    };

    let mut hl = HighlightLines::new(syntax, theme);
    let mut out = Vec::new();
    for line in LinesWithEndings::from(code.as_str()) {
        let Ok(ranges) = hl.highlight_line(line, &SYNTAX_SET) else {
            out.push(vec![Span::raw(line.trim_end_matches('\n').to_owned())]);
            continue;
        };
        let spans: Vec<Span<'static>> = ranges
            .into_iter()
            .filter_map(|(hl_style, frag)| {
                let content = frag.trim_end_matches('\n');
                if content.is_empty() {
                    return None;
                }
                let fg = Color::Rgb(
                    hl_style.foreground.r,
                    hl_style.foreground.g,
                    hl_style.foreground.b,
                );
                Some(Span::styled(content.to_owned(), Style::default().fg(fg)))
            })
            .collect();
        out.push(spans);
    }
    out
}

// ── Writer ──────────────────────────────────────────────────────────────────

struct Writer {
    text: Text<'static>,
    palette: Palette,
    /// Inline style stack. Styles compose via `patch` so nested bold+italic works.
    styles: Vec<Style>,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_indices: Vec<Option<u64>>,
    /// Language and buffered source of the open fenced code block.
    code: Option<(String, String)>,
    /// Whether the next block element should be preceded by a blank line.
    needs_newline: bool,
}

impl Writer {
    fn new(palette: Palette) -> Self {
        Self {
            text: Text::default(),
            palette,
            styles: vec![],
            list_indices: vec![],
            code: None,
            needs_newline: false,
        }
    }

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.palette.fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn push_line(&mut self, line: Line<'static>) {
        self.text.lines.push(line);
    }

    fn push_span(&mut self, span: Span<'static>) {
        match self.text.lines.last_mut() {
            Some(line) => line.push_span(span),
            None => self.push_line(Line::from(vec![span])),
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => {
                let style = Style::default()
                    .fg(self.palette.code_fg)
                    .bg(self.palette.code_bg);
                self.push_span(Span::styled(c.to_string(), style));
            }
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => {
                self.blank_line_if_needed();
                self.push_line(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(self.palette.muted),
                )));
                self.needs_newline = true;
            }
            _ => {} // Raw HTML and footnotes are not rendered
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
            }
            Tag::Heading { level, .. } => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
                self.push_style(heading_style(self.palette.accent, level));
            }
            Tag::CodeBlock(kind) => {
                self.blank_line_if_needed();
                let lang = match kind {
                    CodeBlockKind::Fenced(l) => l.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code = Some((lang, String::new()));
            }
            Tag::List(start) => {
                if self.list_indices.is_empty() {
                    self.blank_line_if_needed();
                }
                self.list_indices.push(start);
            }
            Tag::Item => {
                self.push_line(Line::default());
                let indent = "  ".repeat(self.list_indices.len().saturating_sub(1));
                let marker = match self.list_indices.last_mut() {
                    Some(Some(n)) => {
                        let s = format!("{indent}{n}. ");
                        *n += 1;
                        s
                    }
                    _ => format!("{indent}• "),
                };
                self.push_span(Span::styled(marker, Style::default().fg(self.palette.muted)));
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { .. } => self.push_style(
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            _ => {} // Tables and images are not rendered
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.needs_newline = true,
            TagEnd::Heading(_) => {
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::CodeBlock => {
                if let Some((lang, source)) = self.code.take() {
                    for line in code_block(source.trim_end_matches('\n'), &lang, &self.palette) {
                        self.push_line(line);
                    }
                }
                self.needs_newline = true;
            }
            TagEnd::List(_) => {
                self.list_indices.pop();
                self.needs_newline = true;
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link => {
                self.pop_style()
            }
            _ => {}
        }
    }

    fn text(&mut self, cow: CowStr<'_>) {
        if let Some((_, source)) = self.code.as_mut() {
            source.push_str(&cow);
            return;
        }
        let style = self.style();
        self.push_span(Span::styled(cow.replace('\t', "    "), style));
    }
}

fn heading_style(accent: Color, level: HeadingLevel) -> Style {
    let style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    match level {
        HeadingLevel::H1 => style.add_modifier(Modifier::UNDERLINED),
        HeadingLevel::H2 => style,
        _ => style.add_modifier(Modifier::ITALIC),
    }
}
