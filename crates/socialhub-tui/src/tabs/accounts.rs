//! Accounts tab - connected accounts summary and account list

use super::dashboard::section;
use super::muted;
use crate::components::render_stat_card;
use crate::theme::{account_status_color, platform_color};
use chrono::Local;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Row, Table, TableState},
    Frame,
};
use socialhub_core::views::accounts::{
    action_label, followers_label, last_sync_label, AccountsView,
};

pub struct AccountsTab {
    view: AccountsView,
    table_state: TableState,
}

impl Default for AccountsTab {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountsTab {
    pub fn new() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self {
            view: AccountsView::load(),
            table_state,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        let count = self.view.accounts.len();
        if count == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                self.table_state.select(Some((current + 1).min(count - 1)));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.table_state.select(Some(current.saturating_sub(1)));
            }
            _ => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(6)])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(chunks[0]);
        for (card, chunk) in self.view.cards.iter().zip(cards.iter()) {
            render_stat_card(frame, *chunk, card.title, &card.value, &card.caption, Color::Green);
        }

        let header = Row::new(["Plateforme", "Compte", "Statut", "Followers", "Sync", ""])
            .style(Style::default().fg(Color::DarkGray));
        let rows: Vec<Row> = self
            .view
            .accounts
            .iter()
            .map(|account| {
                Row::new(vec![
                    Cell::from(account.platform.name())
                        .style(Style::default().fg(platform_color(account.platform))),
                    Cell::from(Line::from(vec![
                        Span::raw(account.display_name.clone()),
                        muted(format!(" {}", account.username)),
                    ])),
                    Cell::from(account.status.label())
                        .style(Style::default().fg(account_status_color(account.status))),
                    Cell::from(followers_label(account).unwrap_or_default()),
                    Cell::from(last_sync_label(account, &Local).unwrap_or_default()),
                    Cell::from(format!("[{}]", action_label(account))),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Min(28),
                Constraint::Length(12),
                Constraint::Length(18),
                Constraint::Length(30),
                Constraint::Length(15),
            ],
        )
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(section(" Comptes "));

        frame.render_stateful_widget(table, chunks[1], &mut self.table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamped() {
        let mut tab = AccountsTab::new();
        for _ in 0..10 {
            tab.handle_key(KeyCode::Char('j'));
        }
        assert_eq!(tab.selected(), Some(4));
        tab.handle_key(KeyCode::Up);
        assert_eq!(tab.selected(), Some(3));
    }
}
