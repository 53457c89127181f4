//! Analytics tab - period selector, metric trends, platforms, top posts

use super::dashboard::section;
use super::muted;
use crate::theme::{platform_color, trend_style};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};
use socialhub_core::format::{format_date, format_number};
use socialhub_core::models::cycle;
use socialhub_core::views::analytics::{AnalyticsPeriod, AnalyticsView};

pub struct AnalyticsTab {
    pub period: AnalyticsPeriod,
    view: AnalyticsView,
}

impl Default for AnalyticsTab {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsTab {
    pub fn new() -> Self {
        let period = AnalyticsPeriod::default();
        Self {
            period,
            view: AnalyticsView::load(period),
        }
    }

    pub fn set_period(&mut self, period: AnalyticsPeriod) {
        self.period = period;
        self.view = AnalyticsView::load(period);
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::F(n @ 1..=4) => self.set_period(AnalyticsPeriod::ALL[(n - 1) as usize]),
            KeyCode::Char('p') => self.set_period(cycle(&AnalyticsPeriod::ALL, self.period, true)),
            KeyCode::Char('P') => {
                self.set_period(cycle(&AnalyticsPeriod::ALL, self.period, false))
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Period
                Constraint::Length(4), // Metric cards
                Constraint::Min(6),    // Platforms + top posts
            ])
            .split(area);

        let mut period_line = vec![muted("Période: ")];
        for period in AnalyticsPeriod::ALL {
            let style = if period == self.period {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            period_line.push(Span::styled(format!(" {} ", period.label()), style));
        }
        period_line.push(muted("  │ [ Exporter ]"));
        frame.render_widget(Paragraph::new(Line::from(period_line)), chunks[0]);

        self.render_metrics(frame, chunks[1]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);
        self.render_platforms(frame, bottom[0]);
        self.render_top_posts(frame, bottom[1]);
    }

    fn render_metrics(&self, frame: &mut Frame, area: Rect) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for (card, chunk) in self.view.metrics.iter().zip(cards.iter()) {
            let (arrow, color) = trend_style(card.metric.trend);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" {} ", card.title),
                    Style::default().fg(Color::White).bold(),
                ));
            let lines = vec![
                Line::from(Span::styled(
                    format_number(card.metric.value),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(
                        format!("{} {}", arrow, card.metric.change_label()),
                        Style::default().fg(color),
                    ),
                    muted(" vs période précédente"),
                ]),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), *chunk);
        }
    }

    fn render_platforms(&self, frame: &mut Frame, area: Rect) {
        let header = Row::new(["Plateforme", "Followers", "Portée", "Engagements"])
            .style(Style::default().fg(Color::DarkGray));
        let rows = self.view.platforms.iter().map(|p| {
            Row::new(vec![
                Cell::from(p.platform.name()).style(Style::default().fg(platform_color(p.platform))),
                Cell::from(format_number(p.followers)),
                Cell::from(format_number(p.reach)),
                Cell::from(format_number(p.engagements)),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Min(11),
            ],
        )
        .header(header)
        .block(section(" Performance par Plateforme "));
        frame.render_widget(table, area);
    }

    fn render_top_posts(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for (rank, post) in self.view.top_posts.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("#{} ", rank + 1),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(post.content.clone()),
            ]));
            lines.push(Line::from(vec![
                Span::styled(
                    post.platform.name(),
                    Style::default().fg(platform_color(post.platform)),
                ),
                muted(format!(
                    "  {}  Portée {}  Engagements {}",
                    format_date(&post.date),
                    format_number(post.reach),
                    format_number(post.engagements)
                )),
            ]));
            lines.push(Line::default());
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(section(" Publications les Plus Performantes ")),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_keys_pick_period() {
        let mut tab = AnalyticsTab::new();
        tab.handle_key(KeyCode::F(4));
        assert_eq!(tab.period, AnalyticsPeriod::Year);
        tab.handle_key(KeyCode::Char('p'));
        assert_eq!(tab.period, AnalyticsPeriod::Week);
        tab.handle_key(KeyCode::Char('P'));
        assert_eq!(tab.period, AnalyticsPeriod::Year);
    }
}
