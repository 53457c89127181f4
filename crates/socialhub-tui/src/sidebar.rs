//! Navigation shell sidebar

use crate::app::{App, Tab};
use crate::theme::connection_dot;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use socialhub_core::fixtures::SIDEBAR_PLATFORMS;
use socialhub_core::models::User;

pub const EXPANDED_WIDTH: u16 = 26;
pub const COLLAPSED_WIDTH: u16 = 6;

/// Badge letter: first character of the name, or "U"
pub fn avatar_initial(user: Option<&User>) -> char {
    user.and_then(User::initial).unwrap_or('U')
}

pub fn display_name(user: Option<&User>) -> &str {
    match user {
        Some(u) if !u.name.is_empty() => &u.name,
        _ => "Utilisateur",
    }
}

pub fn width(collapsed: bool) -> u16 {
    if collapsed {
        COLLAPSED_WIDTH
    } else {
        EXPANDED_WIDTH
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let collapsed = app.sidebar_collapsed;
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let platforms_height = if collapsed {
        0
    } else {
        SIDEBAR_PLATFORMS.len() as u16 + 2
    };
    let user_height = if collapsed { 2 } else { 4 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + toggle
            Constraint::Min(Tab::all().len() as u16), // Navigation
            Constraint::Length(platforms_height),
            Constraint::Length(user_height),
        ])
        .split(inner);

    // Header
    let header = if collapsed {
        Line::from(Span::styled(" ≡", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(vec![
            Span::styled(" SocialHub", Style::default().fg(Color::Cyan).bold()),
            Span::styled("  ≡ b", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(header), chunks[0]);

    // Navigation entries; active is the one whose path equals the current path
    let current = app.current_path();
    let nav: Vec<Line> = Tab::all()
        .iter()
        .map(|tab| {
            let active = tab.route().path() == current;
            let style = if active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let text = if collapsed {
                format!(" {} ", tab.icon())
            } else {
                format!(" {} {} {:<16}", tab.icon(), tab.shortcut(), tab.name())
            };
            Line::from(Span::styled(text, style))
        })
        .collect();
    frame.render_widget(Paragraph::new(nav), chunks[1]);

    if !collapsed {
        let mut lines = vec![Line::from(Span::styled(
            " COMPTES CONNECTÉS",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ))];
        for (platform, connected) in SIDEBAR_PLATFORMS.iter() {
            let (dot, color) = connection_dot(*connected);
            lines.push(Line::from(vec![
                Span::raw(format!(" {:<12}", platform.name())),
                Span::styled(dot, Style::default().fg(color)),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), chunks[2]);
    }

    let user = app.session.user();
    let badge = Span::styled(
        format!(" {} ", avatar_initial(user.as_ref())),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let mut lines = vec![Line::default()];
    if collapsed {
        lines.push(Line::from(vec![Span::raw(" "), badge]));
    } else {
        lines.push(Line::from(vec![
            Span::raw(" "),
            badge,
            Span::styled(
                format!(" {}", display_name(user.as_ref())),
                Style::default().fg(Color::White).bold(),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", user.as_ref().map(|u| u.email.as_str()).unwrap_or("")),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            " ⏻ Déconnexion (L)",
            Style::default().fg(Color::Gray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(name: &str) -> User {
        User {
            id: "1".to_string(),
            email: "x@y.fr".to_string(),
            name: name.to_string(),
            avatar: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(avatar_initial(None), 'U');
        assert_eq!(display_name(None), "Utilisateur");
        assert_eq!(avatar_initial(Some(&user(""))), 'U');
        assert_eq!(display_name(Some(&user(""))), "Utilisateur");
        assert_eq!(avatar_initial(Some(&user("élodie"))), 'é');
        assert_eq!(display_name(Some(&user("élodie"))), "élodie");
    }
}
