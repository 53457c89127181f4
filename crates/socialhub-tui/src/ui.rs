//! TUI rendering logic

use crate::app::{App, Tab};
use crate::sidebar;
use crate::tabs::{
    AccountsTab, AnalyticsTab, DashboardTab, PostsTab, ScheduleTab, SettingsAction, SettingsTab,
};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use socialhub_core::Access;

/// Main UI renderer
pub struct Ui {
    dashboard: DashboardTab,
    posts: PostsTab,
    schedule: ScheduleTab,
    analytics: AnalyticsTab,
    accounts: AccountsTab,
    settings: SettingsTab,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self {
            dashboard: DashboardTab::new(),
            posts: PostsTab::new(),
            schedule: ScheduleTab::new(),
            analytics: AnalyticsTab::new(),
            accounts: AccountsTab::new(),
            settings: SettingsTab::new(),
        }
    }

    /// A text field on the active tab is capturing keystrokes
    pub fn is_editing(&self, app: &App) -> bool {
        match app.active_tab {
            Tab::Posts => self.posts.is_editing(),
            Tab::Settings => self.settings.is_editing(),
            _ => false,
        }
    }

    /// Handle key input for the active tab
    pub fn handle_tab_key(&mut self, key: KeyCode, app: &mut App) {
        match app.active_tab {
            Tab::Dashboard => {
                // Quick actions are inert
            }
            Tab::Posts => self.posts.handle_key(key),
            Tab::Schedule => self.schedule.handle_key(key),
            Tab::Analytics => self.analytics.handle_key(key),
            Tab::Accounts => self.accounts.handle_key(key),
            Tab::Settings => {
                self.settings.sync_user(app.session.user().as_ref());
                match self.settings.handle_key(key) {
                    Some(SettingsAction::SaveProfile(profile)) => app.save_profile(profile),
                    Some(SettingsAction::SaveNotifications(n)) => app.save_notifications(n),
                    None => {}
                }
            }
        }
    }

    /// Render the full UI
    pub fn render(&mut self, frame: &mut Frame, app: &mut App) {
        let size = frame.area();
        app.spinner.tick();

        match app.access() {
            Access::Pending => self.render_loading_screen(frame, size, app),
            Access::Redirect(_) => {
                let busy = app.is_busy();
                app.auth.render(frame, size, busy, &app.spinner);
            }
            Access::Granted => self.render_shell(frame, size, app),
        }

        app.toasts.render(frame, size);
    }

    fn render_shell(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(sidebar::width(app.sidebar_collapsed)),
                Constraint::Min(0),
            ])
            .split(area);

        sidebar::render(frame, columns[0], app);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Page header
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(columns[1]);

        self.render_header(frame, main[0], app.active_tab);
        self.render_tab_content(frame, main[1], app);
        self.render_status_bar(frame, main[2], app);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, tab: Tab) {
        let (title, subtitle) = page_heading(tab);
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let lines = vec![
            Line::from(Span::styled(
                format!(" {}", title),
                Style::default().fg(Color::White).bold(),
            )),
            Line::from(Span::styled(
                format!(" {}", subtitle),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_tab_content(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        match app.active_tab {
            Tab::Dashboard => self.dashboard.render(frame, area),
            Tab::Posts => self.posts.render(frame, area),
            Tab::Schedule => self.schedule.render(frame, area),
            Tab::Analytics => self.analytics.render(frame, area),
            Tab::Accounts => self.accounts.render(frame, area),
            Tab::Settings => {
                self.settings.sync_user(app.session.user().as_ref());
                self.settings.render(frame, area, app.is_busy());
            }
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, app: &App) {
        let hint = match app.active_tab {
            Tab::Dashboard => "",
            Tab::Posts => "/ rechercher │ f/F statut │ Esc réinitialiser │ j/k défiler",
            Tab::Schedule => "j/k défiler",
            Tab::Analytics => "F1-F4 / p période",
            Tab::Accounts => "j/k sélectionner",
            Tab::Settings => "j/k naviguer │ Entrée modifier │ ←→ choisir │ s sauvegarder",
        };

        let mut spans = vec![
            Span::styled(" q", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" quitter ", Style::default().fg(Color::DarkGray)),
            Span::styled("│", Style::default().fg(Color::DarkGray)),
            Span::styled(" 1-6/Tab", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" pages ", Style::default().fg(Color::DarkGray)),
            Span::styled("│", Style::default().fg(Color::DarkGray)),
            Span::styled(" b", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" menu ", Style::default().fg(Color::DarkGray)),
        ];
        if !hint.is_empty() {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                format!(" {}", hint),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if app.is_busy() {
            spans.push(Span::raw("  "));
            spans.push(app.spinner.render());
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_loading_screen(&self, frame: &mut Frame, area: Rect, app: &App) {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Length(3),
                Constraint::Percentage(45),
            ])
            .split(area);

        let line = Line::from(vec![
            app.spinner.render(),
            Span::styled("  Chargement...", Style::default().fg(Color::White)),
        ]);
        frame.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Cyan))
                        .title(" SocialHub "),
                ),
            vertical[1],
        );
    }
}

fn page_heading(tab: Tab) -> (&'static str, &'static str) {
    match tab {
        Tab::Dashboard => (
            "Dashboard",
            "Vue d'ensemble de votre activité sur les réseaux sociaux",
        ),
        Tab::Posts => (
            "Publications",
            "Gérez toutes vos publications sur les réseaux sociaux",
        ),
        Tab::Schedule => (
            "Planification",
            "Gérez vos publications programmées et planifiez votre contenu",
        ),
        Tab::Analytics => (
            "Analytics",
            "Suivez les performances de vos publications et l'engagement de votre audience",
        ),
        Tab::Accounts => (
            "Comptes Réseaux Sociaux",
            "Gérez la connexion à vos différents comptes de réseaux sociaux",
        ),
        Tab::Settings => ("Paramètres", "Gérez votre compte et vos préférences"),
    }
}
