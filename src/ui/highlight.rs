use std::sync::LazyLock;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const THEME: &str = "base16-ocean.dark";

/// Colorize `text` for a ratatui paragraph. Falls back to plain text when the
/// language or theme is unknown; line breaks are preserved one-to-one.
pub fn highlight_text(text: &str, lang: &str) -> Text<'static> {
    let syntax = SYNTAX_SET
        .find_syntax_by_extension(lang)
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
    let Some(theme) = THEME_SET.themes.get(THEME) else {
        return Text::raw(text.to_string());
    };

    let mut highlighter = HighlightLines::new(syntax, theme);
    let lines = LinesWithEndings::from(text)
        .map(|line| match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => Line::from(
                ranges
                    .into_iter()
                    .map(|(style, piece)| {
                        let fg = style.foreground;
                        Span::styled(
                            piece.trim_end_matches(['\r', '\n']).to_string(),
                            Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                        )
                    })
                    .collect::<Vec<_>>(),
            ),
            Err(_) => Line::raw(line.trim_end_matches(['\r', '\n']).to_string()),
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}

/// Guess a syntect language token from the first non-blank character.
pub fn detect_lang(text: &str) -> &'static str {
    let t = text.trim_start();
    if t.starts_with('{') || t.starts_with('[') {
        "json"
    } else if t.starts_with('<') {
        "xml"
    } else {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_lang() {
        assert_eq!(detect_lang("  {\"a\": 1}"), "json");
        assert_eq!(detect_lang("[1]"), "json");
        assert_eq!(detect_lang("<html>"), "xml");
        assert_eq!(detect_lang("plain"), "txt");
    }

    #[test]
    fn test_highlight_keeps_line_count() {
        let text = "{\n  \"a\": 1\n}";
        assert_eq!(highlight_text(text, "json").lines.len(), 3);
    }
}
