//! Dashboard tab - stat cards, recent and upcoming posts, quick actions

use super::{muted, platform_tags};
use crate::components::render_stat_card;
use crate::theme::platform_color;
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use socialhub_core::format::format_number;
use socialhub_core::views::dashboard::{
    recent_post_date, upcoming_post_date, DashboardView, QUICK_ACTIONS,
};

const CARD_COLORS: [Color; 4] = [Color::Cyan, Color::Green, Color::Yellow, Color::Magenta];

pub struct DashboardTab {
    view: DashboardView,
}

impl Default for DashboardTab {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardTab {
    pub fn new() -> Self {
        Self {
            view: DashboardView::load(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Stat cards
                Constraint::Min(8),    // Recent / upcoming
                Constraint::Length(3), // Quick actions
            ])
            .split(area);

        self.render_cards(frame, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        self.render_recent(frame, columns[0]);
        self.render_upcoming(frame, columns[1]);

        self.render_quick_actions(frame, chunks[2]);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for ((card, color), chunk) in self.view.cards.iter().zip(CARD_COLORS).zip(chunks.iter()) {
            render_stat_card(frame, *chunk, card.title, &card.value, &card.caption, color);
        }
    }

    fn render_recent(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for post in &self.view.recent_posts {
            lines.push(Line::from(vec![
                Span::styled(
                    post.platform.name(),
                    Style::default()
                        .fg(platform_color(post.platform))
                        .add_modifier(Modifier::BOLD),
                ),
                muted(format!("  {}", recent_post_date(post, &Local))),
            ]));
            lines.push(Line::from(post.content.clone()));
            lines.push(Line::from(vec![
                muted("Portée "),
                Span::raw(format_number(post.reach)),
                muted("  Engagements "),
                Span::raw(format_number(post.engagements)),
            ]));
            lines.push(Line::default());
        }

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(section(" Publications Récentes ")),
            area,
        );
    }

    fn render_upcoming(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for post in &self.view.upcoming_posts {
            lines.push(Line::from(Span::styled(
                upcoming_post_date(post, &Local),
                Style::default().fg(Color::Cyan),
            )));
            lines.push(Line::from(post.content.clone()));
            lines.push(Line::from(platform_tags(&post.platforms)));
            lines.push(Line::default());
        }

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(section(" Publications à Venir ")),
            area,
        );
    }

    fn render_quick_actions(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for action in QUICK_ACTIONS {
            spans.push(Span::styled(
                format!(" [ {} ] ", action),
                Style::default().fg(Color::Gray),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).block(section(" Actions Rapides ")),
            area,
        );
    }
}

pub(crate) fn section(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(title, Style::default().fg(Color::White).bold()))
}
