//! Posts tab - search, status filter and post cards

use super::dashboard::section;
use super::{muted, platform_tags};
use crate::components::search_bar::highlight_matches;
use crate::components::SearchBar;
use crate::theme::post_status_color;
use chrono::Local;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use socialhub_core::fixtures;
use socialhub_core::format::format_number;
use socialhub_core::models::{cycle, Post};
use socialhub_core::views::posts::{
    actions, date_line, empty_message, filter_posts, PostFilter, StatusFilter, EMPTY_TITLE,
    SEARCH_PLACEHOLDER,
};

pub struct PostsTab {
    posts: Vec<Post>,
    pub search: SearchBar,
    pub status: StatusFilter,
    scroll: u16,
}

impl Default for PostsTab {
    fn default() -> Self {
        Self::new()
    }
}

impl PostsTab {
    pub fn new() -> Self {
        Self {
            posts: fixtures::posts(),
            search: SearchBar::new().with_placeholder(SEARCH_PLACEHOLDER),
            status: StatusFilter::All,
            scroll: 0,
        }
    }

    pub fn filter(&self) -> PostFilter {
        PostFilter::new(self.search.query.clone(), self.status)
    }

    pub fn visible(&self) -> Vec<Post> {
        filter_posts(&self.posts, &self.filter())
    }

    /// True while the search field captures keystrokes
    pub fn is_editing(&self) -> bool {
        self.search.active
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        if self.search.handle_key(key) {
            self.scroll = 0;
            return;
        }

        match key {
            KeyCode::Char('/') => self.search.active = true,
            KeyCode::Char('f') => {
                self.status = cycle(&StatusFilter::OPTIONS, self.status, true);
                self.scroll = 0;
            }
            KeyCode::Char('F') => {
                self.status = cycle(&StatusFilter::OPTIONS, self.status, false);
                self.scroll = 0;
            }
            KeyCode::Esc => {
                self.search.clear();
                self.status = StatusFilter::All;
                self.scroll = 0;
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let bar = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(26)])
            .split(chunks[0]);
        self.search.render(frame, bar[0]);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(self.status.label(), Style::default().fg(Color::Cyan)),
                Span::styled(" ▾", Style::default().fg(Color::DarkGray)),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Statut (f) "),
            ),
            bar[1],
        );

        let visible = self.visible();
        if visible.is_empty() {
            self.render_empty(frame, chunks[1]);
            return;
        }

        let mut lines = Vec::new();
        for post in &visible {
            lines.extend(self.card_lines(post));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0))
                .block(section(" Publications ")),
            chunks[1],
        );
    }

    fn card_lines(&self, post: &Post) -> Vec<Line<'static>> {
        let mut header = vec![Span::styled(
            format!(" {} ", post.status.label()),
            Style::default()
                .fg(Color::Black)
                .bg(post_status_color(post.status))
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(when) = date_line(post, &Local) {
            header.push(muted(format!("  {}", when)));
        }

        let mut platforms = vec![muted("Plateformes: ")];
        platforms.extend(platform_tags(&post.platforms));
        if let Some(media) = post.media_label() {
            platforms.push(muted(format!("  {}", media)));
        }

        let mut lines = vec![
            Line::from(header),
            Line::from(highlight_matches(&post.content, &self.search.query)),
            Line::from(platforms),
        ];

        if post.shows_analytics() {
            lines.push(Line::from(vec![
                muted("Portée "),
                Span::raw(format_number(post.reach)),
                muted("  Engagements "),
                Span::raw(post.engagements.to_string()),
                muted("  Likes "),
                Span::raw(post.likes.to_string()),
                muted("  Commentaires "),
                Span::raw(post.comments.to_string()),
                muted("  Partages "),
                Span::raw(post.shares.to_string()),
            ]));
        }

        let buttons: Vec<Span> = actions(post)
            .iter()
            .map(|a| Span::styled(format!("[{}] ", a.label()), Style::default().fg(Color::Gray)))
            .collect();
        lines.push(Line::from(buttons));
        lines.push(Line::from(muted("─".repeat(40))));
        lines
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                EMPTY_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(muted(empty_message(&self.filter()))),
            Line::default(),
            Line::from(Span::styled(
                "[ Créer une Publication ]",
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(section(" Publications ")),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialhub_core::models::PostStatus;

    #[test]
    fn test_status_cycle_and_reset() {
        let mut tab = PostsTab::new();
        tab.handle_key(KeyCode::Char('f'));
        assert_eq!(tab.status, StatusFilter::Only(PostStatus::Published));
        tab.handle_key(KeyCode::Char('F'));
        tab.handle_key(KeyCode::Char('F'));
        assert_eq!(tab.status, StatusFilter::Only(PostStatus::Draft));
        assert_eq!(tab.visible().len(), 1);

        tab.handle_key(KeyCode::Esc);
        assert_eq!(tab.status, StatusFilter::All);
        assert_eq!(tab.visible().len(), 4);
    }

    #[test]
    fn test_search_typing() {
        let mut tab = PostsTab::new();
        tab.handle_key(KeyCode::Char('/'));
        assert!(tab.is_editing());
        for c in "flashback".chars() {
            tab.handle_key(KeyCode::Char(c));
        }
        tab.handle_key(KeyCode::Enter);
        assert!(!tab.is_editing());

        let visible = tab.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }
}
