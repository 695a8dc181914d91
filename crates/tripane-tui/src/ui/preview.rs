//! Preview pane rendering.
//!
//! Turns a [`PreviewContent`] into styled lines: folder listings, text
//! with tabs expanded, and notices for binary or unreadable files.
//! Truncated content ends with [`TRUNCATION_MARKER`].

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tripane_core::config::theme::{parse_color, Theme};
use tripane_core::projector::{PreviewContent, TRUNCATION_MARKER};

const TAB_WIDTH: usize = 4;

/// Renders the preview pane for the current Selection.
pub fn render_preview(f: &mut Frame, area: Rect, content: &PreviewContent, theme: &Theme) {
    let border_fg = parse_color(&theme.preview.border_fg);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Preview")
        .border_style(Style::default().fg(border_fg));

    // Pad every line to the full inner width and fill remaining height so
    // that no cell keeps characters from a previous, longer preview.
    let inner = block.inner(area);
    let inner_width = inner.width as usize;
    let inner_height = inner.height as usize;

    let mut lines = preview_lines(content, theme);
    if lines.len() > inner_height {
        // The truncation marker is the last line; keep it on the last row.
        let marker = if content.is_truncated() { lines.pop() } else { None };
        lines.truncate(inner_height.saturating_sub(usize::from(marker.is_some())));
        lines.extend(marker.filter(|_| inner_height > 0));
    }
    for line in &mut lines {
        let current_width = line.width();
        if current_width < inner_width {
            line.spans.push(Span::raw(" ".repeat(inner_width - current_width)));
        }
    }
    while lines.len() < inner_height {
        lines.push(Line::from(" ".repeat(inner_width)));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Builds the styled lines for `content`.
pub fn preview_lines(content: &PreviewContent, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = match content {
        PreviewContent::Empty => Vec::new(),
        PreviewContent::Listing { items, .. } if items.is_empty() => {
            vec![notice("(empty folder)", theme)]
        }
        PreviewContent::Listing { items, .. } => {
            let dir_style = Style::default()
                .fg(parse_color(&theme.preview.dir_fg))
                .add_modifier(Modifier::BOLD);
            items
                .iter()
                .map(|item| {
                    if item.is_folder {
                        Line::from(Span::styled(format!("/{}", item.label), dir_style))
                    } else {
                        Line::from(format!(" {}", item.label))
                    }
                })
                .collect()
        }
        PreviewContent::Text { text, .. } => text
            .lines()
            .map(|l| Line::from(expand_tabs(l)))
            .collect(),
        PreviewContent::Binary => vec![notice("(binary file)", theme)],
        PreviewContent::Unavailable { reason } => vec![Line::from(Span::styled(
            format!("(unable to preview: {reason})"),
            Style::default().fg(parse_color(&theme.preview.error_fg)),
        ))],
    };

    if content.is_truncated() {
        lines.push(Line::from(Span::styled(
            TRUNCATION_MARKER,
            Style::default()
                .fg(parse_color(&theme.preview.truncation_fg))
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

fn notice(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(parse_color(&theme.preview.notice_fg))
            .add_modifier(Modifier::ITALIC),
    ))
}

/// Replaces tabs with spaces up to the next tab stop.
fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let spaces = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(spaces));
            column += spaces;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripane_core::projector::PaneItem;

    fn texts(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn empty_content_has_no_lines() {
        assert!(preview_lines(&PreviewContent::Empty, &Theme::default()).is_empty());
    }

    #[test]
    fn text_lines_expand_tabs() {
        let content = PreviewContent::Text {
            text: "a\tb\n\tc".to_string(),
            truncated: false,
        };
        assert_eq!(
            texts(&preview_lines(&content, &Theme::default())),
            vec!["a   b", "    c"]
        );
    }

    #[test]
    fn truncated_text_ends_with_marker() {
        let content = PreviewContent::Text {
            text: "xxxx".to_string(),
            truncated: true,
        };
        let lines = texts(&preview_lines(&content, &Theme::default()));
        assert_eq!(lines.last().map(String::as_str), Some(TRUNCATION_MARKER));
    }

    #[test]
    fn listing_marks_folders() {
        let content = PreviewContent::Listing {
            items: vec![
                PaneItem {
                    label: "sub".to_string(),
                    is_folder: true,
                },
                PaneItem {
                    label: "f.txt".to_string(),
                    is_folder: false,
                },
            ],
            truncated: true,
        };
        assert_eq!(
            texts(&preview_lines(&content, &Theme::default())),
            vec!["/sub", " f.txt", TRUNCATION_MARKER]
        );
    }

    #[test]
    fn empty_listing_shows_notice() {
        let content = PreviewContent::Listing {
            items: Vec::new(),
            truncated: false,
        };
        assert_eq!(
            texts(&preview_lines(&content, &Theme::default())),
            vec!["(empty folder)"]
        );
    }

    #[test]
    fn binary_and_unavailable_notices() {
        let theme = Theme::default();
        assert_eq!(
            texts(&preview_lines(&PreviewContent::Binary, &theme)),
            vec!["(binary file)"]
        );
        let unavailable = PreviewContent::Unavailable {
            reason: "permission denied: /x".to_string(),
        };
        assert!(texts(&preview_lines(&unavailable, &theme))[0].contains("permission denied"));
    }

    #[test]
    fn long_truncated_text_keeps_marker_visible() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        let text = (0..200).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let content = PreviewContent::Text {
            text,
            truncated: true,
        };
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|f| render_preview(f, f.area(), &content, &Theme::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect();
        assert!(rows.iter().any(|r| r.contains("line 8")));
        assert!(!rows.iter().any(|r| r.contains("line 9")));
        assert!(rows[10].contains(TRUNCATION_MARKER));
    }

    #[test]
    fn expand_tabs_aligns_to_stops() {
        assert_eq!(expand_tabs("abc\td"), "abc d");
        assert_eq!(expand_tabs("abcd\te"), "abcd    e");
        assert_eq!(expand_tabs("plain"), "plain");
    }
}
