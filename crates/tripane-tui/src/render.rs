use std::path::Path;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};
use tripane_core::action::{ActionCategory, ActionRegistry};
use tripane_core::config::keymap::Keymap;
use tripane_core::config::theme::{parse_color, Theme};
use tripane_core::projector::{project_current, project_parent, PaneView};

use crate::app::{App, AppMode};
use crate::ui::breadcrumb::render_breadcrumb;
use crate::ui::panel::render_pane;
use crate::ui::popup::render_popup;
use crate::ui::preview::render_preview;
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

/// Composes the full UI layout each frame.
pub fn render(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let nav = app.browser().navigation();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_breadcrumb(f, vertical[0], nav.location(), theme);

    let (parent_area, current_area, preview_area) =
        pane_areas(vertical[1], app.narrow_width());

    if let Some(area) = parent_area {
        let title = nav.parent_location().map(pane_title).unwrap_or_default();
        let view = match nav.parent_location() {
            Some(_) => project_parent(nav),
            None => PaneView {
                items: Vec::new(),
                selected: None,
                error: None,
            },
        };
        render_pane(f, area, &view, &title, theme, false);
    }

    render_pane(
        f,
        current_area,
        &project_current(nav),
        &pane_title(nav.location()),
        theme,
        true,
    );
    render_preview(f, preview_area, app.browser().preview(), theme);

    let props = StatusBarProps {
        entry_count: nav.entries().len(),
        selected_index: nav.selected_index(),
        selected_entry: nav.selection(),
        pending: app.browser().clipboard().pending(),
        status: app.status(),
    };
    render_statusbar(f, vertical[2], &props, theme);

    match app.mode() {
        AppMode::Help => render_help_popup(f, app.registry(), app.keymap(), theme),
        AppMode::Confirm(target) => render_confirm_popup(f, &target, theme),
        AppMode::Normal => {}
    }
}

/// Splits the body into parent, current and preview areas.
///
/// Below `narrow_width` columns the parent pane is hidden.
fn pane_areas(body: Rect, narrow_width: u16) -> (Option<Rect>, Rect, Rect) {
    if body.width < narrow_width {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(body);
        return (None, split[0], split[1]);
    }
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(40),
            Constraint::Percentage(40),
        ])
        .split(body);
    (Some(split[0]), split[1], split[2])
}

fn pane_title(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn render_help_popup(f: &mut Frame, registry: &ActionRegistry, keymap: &Keymap, theme: &Theme) {
    let key_style = Style::default().fg(parse_color(&theme.popup.key_fg));
    let mut lines: Vec<Line> = Vec::new();

    for category in [
        ActionCategory::Navigation,
        ActionCategory::FileOps,
        ActionCategory::System,
    ] {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            category.label(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for descriptor in registry.all().iter().filter(|d| d.category == category) {
            let keys = keymap
                .keys_for_action(descriptor.action)
                .map(|keys| keys.join("/"))
                .unwrap_or_else(|| "-".to_owned());
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<9}"), key_style),
                Span::raw(descriptor.description),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<9}", "Arrows"), key_style),
        Span::raw("Move, parent, open"),
    ]));
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<9}", "Ctrl+c"), key_style),
        Span::raw("Quit"),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from("Press Esc or ? to close"));

    render_popup(f, "Help", lines, (60, 80), theme);
}

fn render_confirm_popup(f: &mut Frame, target: &Path, theme: &Theme) {
    let lines = vec![
        Line::from(format!("Delete {}?", pane_title(target))),
        Line::from(""),
        Line::from("y - Yes, delete"),
        Line::from("n - No, cancel"),
    ];
    render_popup(f, "Confirm", lines, (40, 30), theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputAction;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::fs;
    use tempfile::TempDir;
    use tripane_core::config::ConfigSet;
    use tripane_core::event::Command;

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn setup() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("a");
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("b").join("inner.txt"), "x").unwrap();
        fs::write(root.join("c.txt"), "hello").unwrap();
        let app = App::new(&root, &ConfigSet::default()).unwrap();
        (dir, app)
    }

    #[test]
    fn pane_areas_wide_has_three_panes() {
        let (parent, current, preview) = pane_areas(Rect::new(0, 0, 120, 20), 100);
        let parent = parent.unwrap();
        assert_eq!(parent.width, 24);
        assert_eq!(current.width, 48);
        assert_eq!(preview.width, 48);
    }

    #[test]
    fn pane_areas_narrow_hides_parent() {
        let (parent, current, preview) = pane_areas(Rect::new(0, 0, 80, 20), 100);
        assert!(parent.is_none());
        assert_eq!(current.width, 40);
        assert_eq!(preview.width, 40);
    }

    #[test]
    fn pane_title_uses_last_component() {
        assert_eq!(pane_title(Path::new("/home/kim/a")), "a");
        assert_eq!(pane_title(Path::new("/")), "/");
    }

    #[test]
    fn renders_three_panes() {
        let (_dir, app) = setup();
        let screen = draw(&app, 120, 12);
        assert!(screen.contains("/b"));
        assert!(screen.contains(" c.txt"));
        assert!(screen.contains("Preview"));
        assert!(screen.contains("inner.txt"));
        assert!(screen.contains(" 1/2"));
    }

    #[test]
    fn renders_text_preview_for_file() {
        let (_dir, app) = setup();
        let app = app.apply(InputAction::Command(Command::Select(1)));
        let screen = draw(&app, 120, 12);
        assert!(screen.contains("hello"));
    }

    #[test]
    fn renders_confirm_popup() {
        let (_dir, app) = setup();
        let app = app
            .apply(InputAction::Command(Command::Select(1)))
            .apply(InputAction::Command(Command::Delete));
        let screen = draw(&app, 120, 20);
        assert!(screen.contains("Delete c.txt?"));
        assert!(screen.contains("y - Yes, delete"));
    }

    #[test]
    fn renders_help_popup_with_bound_keys() {
        let (_dir, app) = setup();
        let app = app.apply(InputAction::ToggleHelp);
        let screen = draw(&app, 120, 40);
        assert!(screen.contains("Help"));
        assert!(screen.contains("Navigation"));
        assert!(screen.contains("Enter/l"));
    }
}
