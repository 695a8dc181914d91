//! Listing pane rendering for the parent and current folders.
//!
//! Renders a [`PaneView`] as a `List` widget with the selection
//! highlighted, or an inline error when the folder could not be read.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tripane_core::config::theme::{parse_color, Theme};
use tripane_core::projector::{PaneItem, PaneView};

/// Renders one listing pane.
///
/// Folders are shown bold in the theme's folder color with a `/` marker.
/// The active pane gets the highlighted border.
pub fn render_pane(
    f: &mut Frame,
    area: Rect,
    view: &PaneView,
    title: &str,
    theme: &Theme,
    is_active: bool,
) {
    let border_color = if is_active {
        parse_color(&theme.panel.active_border_fg)
    } else {
        parse_color(&theme.panel.border_fg)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_owned())
        .border_style(Style::default().fg(border_color));

    if let Some(error) = &view.error {
        let message = Paragraph::new(Line::from(Span::styled(
            format!("({error})"),
            Style::default()
                .fg(parse_color(&theme.panel.error_fg))
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block);
        f.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = view
        .items
        .iter()
        .map(|item| ListItem::new(item_line(item, theme)))
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(parse_color(&theme.panel.selected_bg))
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(view.selected);

    f.render_stateful_widget(list, area, &mut state);
}

/// Builds the display line for a pane row.
pub fn item_line(item: &PaneItem, theme: &Theme) -> Line<'static> {
    let marker = if item.is_folder { "/" } else { " " };
    Line::from(Span::styled(
        format!("{marker}{}", item.label),
        item_style(item.is_folder, theme),
    ))
}

fn item_style(is_folder: bool, theme: &Theme) -> Style {
    if is_folder {
        Style::default()
            .fg(parse_color(&theme.panel.dir_fg))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(parse_color(&theme.panel.file_fg))
    }
}
