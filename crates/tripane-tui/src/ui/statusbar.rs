//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the terminal and
//! shows the cursor position, selected entry info, the staged transfer
//! and the message produced by the last command.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tripane_core::config::theme::{parse_color, Theme};
use tripane_core::fs::entry::FileEntry;
use tripane_core::nav::clipboard::Transfer;

use crate::app::StatusMessage;

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub entry_count: usize,
    pub selected_index: Option<usize>,
    pub selected_entry: Option<&'a FileEntry>,
    pub pending: Option<&'a Transfer>,
    pub status: Option<&'a StatusMessage>,
}

/// Renders the bottom status bar.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = parse_color(&theme.statusbar.bg);
    let line = Line::from(statusbar_spans(props, theme));
    let bar = Paragraph::new(line).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}

/// Builds the status bar spans.
pub fn statusbar_spans(props: &StatusBarProps<'_>, theme: &Theme) -> Vec<Span<'static>> {
    let bg = parse_color(&theme.statusbar.bg);
    let position_fg = parse_color(&theme.statusbar.position_fg);
    let transfer_fg = parse_color(&theme.statusbar.transfer_fg);

    let position = match props.selected_index {
        Some(index) if props.entry_count > 0 => format!(" {}/{}", index + 1, props.entry_count),
        _ => format!(" 0/{}", props.entry_count),
    };

    let file_info = props
        .selected_entry
        .map(|e| {
            if e.is_folder() {
                format!("  [DIR] {}", e.name())
            } else {
                format!("  {} ({})", e.name(), format_size(e.size()))
            }
        })
        .unwrap_or_default();

    let transfer_span = props
        .pending
        .map(|transfer| {
            let name = transfer
                .source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| transfer.source.display().to_string());
            Span::styled(
                format!("  [{}] {name}", transfer.kind.label()),
                Style::default()
                    .fg(transfer_fg)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .unwrap_or_default();

    let status_span = props
        .status
        .map(|status| {
            let fg = if status.is_error {
                parse_color(&theme.statusbar.error_fg)
            } else {
                parse_color(&theme.statusbar.message_fg)
            };
            Span::styled(
                format!("  {}", status.text),
                Style::default().fg(fg).bg(bg).add_modifier(Modifier::ITALIC),
            )
        })
        .unwrap_or_default();

    vec![
        Span::styled(
            position,
            Style::default()
                .fg(position_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(file_info, Style::default().fg(position_fg).bg(bg)),
        transfer_span,
        status_span,
    ]
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tripane_core::fs::entry::EntryKind;
    use tripane_core::nav::clipboard::TransferKind;

    fn text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn props<'a>() -> StatusBarProps<'a> {
        StatusBarProps {
            entry_count: 0,
            selected_index: None,
            selected_entry: None,
            pending: None,
            status: None,
        }
    }

    #[test]
    fn format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn format_size_larger_units() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GB");
    }

    #[test]
    fn empty_folder_shows_zero_position() {
        assert_eq!(text(&statusbar_spans(&props(), &Theme::default())), " 0/0");
    }

    #[test]
    fn shows_position_and_file_size() {
        let entry = FileEntry::from_parts(PathBuf::from("/a/c.txt"), EntryKind::File, 2048);
        let p = StatusBarProps {
            entry_count: 3,
            selected_index: Some(1),
            selected_entry: Some(&entry),
            ..props()
        };
        assert_eq!(
            text(&statusbar_spans(&p, &Theme::default())),
            " 2/3  c.txt (2.0 KB)"
        );
    }

    #[test]
    fn shows_folder_marker() {
        let entry = FileEntry::from_parts(PathBuf::from("/a/b"), EntryKind::Folder, 0);
        let p = StatusBarProps {
            entry_count: 1,
            selected_index: Some(0),
            selected_entry: Some(&entry),
            ..props()
        };
        assert_eq!(text(&statusbar_spans(&p, &Theme::default())), " 1/1  [DIR] b");
    }

    #[test]
    fn shows_staged_transfer_and_message() {
        let transfer = Transfer {
            kind: TransferKind::Move,
            source: PathBuf::from("/a/c.txt"),
        };
        let status = StatusMessage {
            text: "cut: c.txt".to_string(),
            is_error: false,
        };
        let p = StatusBarProps {
            pending: Some(&transfer),
            status: Some(&status),
            ..props()
        };
        let spans = statusbar_spans(&p, &Theme::default());
        assert_eq!(text(&spans), " 0/0  [cut] c.txt  cut: c.txt");
    }

    #[test]
    fn error_message_uses_error_color() {
        let status = StatusMessage {
            text: "paste failed: already exists".to_string(),
            is_error: true,
        };
        let p = StatusBarProps {
            status: Some(&status),
            ..props()
        };
        let spans = statusbar_spans(&p, &Theme::default());
        let last = spans.last().map(|s| s.style.fg);
        assert_eq!(last, Some(Some(ratatui::style::Color::Red)));
    }
}
