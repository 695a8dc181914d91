use std::path::Path;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tripane_core::config::theme::{parse_color, Theme};

/// Renders the title bar with the current Location as a breadcrumb trail.
/// Example: " ~ / projects / tripane"
pub fn render_breadcrumb(f: &mut Frame, area: Rect, current_dir: &Path, theme: &Theme) {
    let bg = parse_color(&theme.breadcrumb.bg);
    let home = home_dir();
    let line = Line::from(breadcrumb_spans(current_dir, home.as_deref(), theme));
    let breadcrumb = Paragraph::new(line).style(Style::default().bg(bg));
    f.render_widget(breadcrumb, area);
}

/// Builds the breadcrumb spans, collapsing `home` to `~`.
pub fn breadcrumb_spans(current_dir: &Path, home: Option<&Path>, theme: &Theme) -> Vec<Span<'static>> {
    let home_fg = parse_color(&theme.breadcrumb.home_fg);
    let sep_fg = parse_color(&theme.breadcrumb.separator_fg);
    let comp_fg = parse_color(&theme.breadcrumb.component_fg);

    let stripped = home
        .filter(|h| h.parent().is_some())
        .and_then(|h| current_dir.strip_prefix(h).ok());

    match stripped {
        Some(rest) => {
            let mut parts = vec![Span::styled(
                " ~",
                Style::default().fg(home_fg).add_modifier(Modifier::BOLD),
            )];
            for component in rest.components() {
                parts.push(Span::styled(" / ", Style::default().fg(sep_fg)));
                parts.push(Span::styled(
                    component.as_os_str().to_string_lossy().into_owned(),
                    Style::default().fg(comp_fg),
                ));
            }
            parts
        }
        None => vec![Span::styled(
            format!(" {}", current_dir.display()),
            Style::default().fg(comp_fg),
        )],
    }
}

fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME").map(std::path::PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn collapses_home() {
        let spans = breadcrumb_spans(
            Path::new("/home/kim/projects/tripane"),
            Some(Path::new("/home/kim")),
            &Theme::default(),
        );
        assert_eq!(text(&spans), " ~ / projects / tripane");
    }

    #[test]
    fn home_itself_is_tilde() {
        let spans = breadcrumb_spans(
            Path::new("/home/kim"),
            Some(Path::new("/home/kim")),
            &Theme::default(),
        );
        assert_eq!(text(&spans), " ~");
    }

    #[test]
    fn outside_home_shows_full_path() {
        let spans = breadcrumb_spans(
            Path::new("/etc/ssh"),
            Some(Path::new("/home/kim")),
            &Theme::default(),
        );
        assert_eq!(text(&spans), " /etc/ssh");
    }

    #[test]
    fn root_home_is_not_collapsed() {
        let spans = breadcrumb_spans(Path::new("/var"), Some(Path::new("/")), &Theme::default());
        assert_eq!(text(&spans), " /var");
    }
}
