//! Schedule tab - counts and the list of scheduled posts

use super::dashboard::section;
use super::{muted, platform_tags};
use crate::components::render_stat_card;
use crate::theme::post_status_color;
use chrono::{DateTime, Local};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use socialhub_core::views::schedule::{
    scheduled_label, ScheduleView, EMPTY_MESSAGE, EMPTY_TITLE, QUICK_ACTIONS,
};

#[derive(Default)]
pub struct ScheduleTab {
    scroll: u16,
}

impl ScheduleTab {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        self.render_at(frame, area, &Local::now());
    }

    /// Render relative to an explicit "now"
    pub fn render_at(&self, frame: &mut Frame, area: Rect, now: &DateTime<Local>) {
        let view = ScheduleView::load(now);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(chunks[0]);
        for (card, chunk) in view.cards.iter().zip(cards.iter()) {
            render_stat_card(frame, *chunk, card.title, &card.value, &card.caption, Color::Cyan);
        }

        if view.posts.is_empty() {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        EMPTY_TITLE,
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(muted(EMPTY_MESSAGE)),
                ])
                .alignment(Alignment::Center)
                .block(section(" Publications Programmées ")),
                chunks[1],
            );
        } else {
            let mut lines = Vec::new();
            for post in &view.posts {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("◷ {}", post.status.label()),
                        Style::default().fg(post_status_color(post.status)),
                    ),
                    muted(format!("  {}", scheduled_label(post, now))),
                    muted(
                        post.media_label()
                            .map(|m| format!("  {}", m))
                            .unwrap_or_default(),
                    ),
                ]));
                lines.push(Line::from(post.content.clone()));
                lines.push(Line::from(platform_tags(&post.platforms)));
                lines.push(Line::default());
            }
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .scroll((self.scroll, 0))
                    .block(section(" Publications Programmées ")),
                chunks[1],
            );
        }

        let actions: Vec<Span> = QUICK_ACTIONS
            .iter()
            .map(|a| Span::styled(format!(" [ {} ] ", a), Style::default().fg(Color::Gray)))
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(actions)).block(section(" Actions Rapides ")),
            chunks[2],
        );
    }
}
