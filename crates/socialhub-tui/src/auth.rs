//! Login / registration screen

use crate::components::Spinner;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use socialhub_core::Route;

pub const EMPTY_FIELDS_ERROR: &str = "Veuillez remplir tous les champs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Se connecter",
            AuthMode::Register => "S'inscrire",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            AuthMode::Login => Route::Login,
            AuthMode::Register => Route::Register,
        }
    }

    fn fields(&self) -> &'static [AuthField] {
        match self {
            AuthMode::Login => &[AuthField::Email, AuthField::Password],
            AuthMode::Register => &[AuthField::Name, AuthField::Email, AuthField::Password],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
}

impl AuthField {
    fn label(&self) -> &'static str {
        match self {
            AuthField::Name => "Nom",
            AuthField::Email => "Email",
            AuthField::Password => "Mot de passe",
        }
    }
}

/// What Enter hands to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSubmit {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    focus: usize,
    pub error: Option<String>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> AuthField {
        let fields = self.mode.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    /// Clear all inputs, keep the mode
    pub fn reset(&mut self) {
        let mode = self.mode;
        *self = Self {
            mode,
            ..Self::default()
        };
    }

    pub fn switch_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.focus = 0;
        self.error = None;
    }

    fn field_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }

    /// Edit the form; Enter yields a submission
    pub fn handle_key(&mut self, key: KeyCode) -> Option<AuthSubmit> {
        let count = self.mode.fields().len();
        match key {
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % count,
            KeyCode::BackTab | KeyCode::Up => self.focus = (self.focus + count - 1) % count,
            KeyCode::F(2) => self.switch_mode(),
            KeyCode::Char(c) => {
                let field = self.focused();
                self.field_mut(field).push(c);
            }
            KeyCode::Backspace => {
                let field = self.focused();
                self.field_mut(field).pop();
            }
            KeyCode::Enter => {
                self.error = None;
                return Some(AuthSubmit {
                    mode: self.mode,
                    name: self.name.trim().to_string(),
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                });
            }
            _ => {}
        }
        None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, busy: bool, spinner: &Spinner) {
        let fields = self.mode.fields();
        let height = fields.len() as u16 * 3 + 8;

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height),
                Constraint::Min(0),
            ])
            .split(area);
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(56),
                Constraint::Min(0),
            ])
            .split(vertical[1]);
        let form_area = horizontal[1];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                format!(" SocialHub · {} ", self.mode.title()),
                Style::default().fg(Color::Cyan).bold(),
            ));
        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
        constraints.extend([Constraint::Length(2), Constraint::Min(0)]);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        frame.render_widget(
            Paragraph::new("Gérez tous vos réseaux sociaux en un seul endroit.")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            rows[0],
        );

        let focused = self.focused();
        for (i, field) in fields.iter().enumerate() {
            let value = self.value(*field);
            let shown = if *field == AuthField::Password {
                "•".repeat(value.chars().count())
            } else {
                value.to_string()
            };
            let border = if *field == focused {
                Color::Cyan
            } else {
                Color::DarkGray
            };
            frame.render_widget(
                Paragraph::new(shown).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border))
                        .title(format!(" {} ", field.label())),
                ),
                rows[i + 1],
            );
        }

        let status = if busy {
            Line::from(vec![
                spinner.render(),
                Span::raw(" Connexion en cours..."),
            ])
        } else if let Some(err) = &self.error {
            Line::from(Span::styled(
                err.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                "Entrée valider · Tab champ suivant · F2 changer de mode · Ctrl+C quitter",
                Style::default().fg(Color::DarkGray),
            ))
        };
        frame.render_widget(
            Paragraph::new(status).alignment(Alignment::Center),
            rows[fields.len() + 1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut AuthForm, text: &str) {
        for c in text.chars() {
            form.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_login_form_submit() {
        let mut form = AuthForm::new();
        type_text(&mut form, "ana@example.com");
        form.handle_key(KeyCode::Tab);
        type_text(&mut form, "pw");

        let submit = form.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(submit.mode, AuthMode::Login);
        assert_eq!(submit.email, "ana@example.com");
        assert_eq!(submit.password, "pw");
    }

    #[test]
    fn test_register_has_name_field_first() {
        let mut form = AuthForm::new();
        form.handle_key(KeyCode::F(2));
        assert_eq!(form.mode, AuthMode::Register);
        assert_eq!(form.focused(), AuthField::Name);

        form.handle_key(KeyCode::BackTab);
        assert_eq!(form.focused(), AuthField::Password);
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut form = AuthForm::new();
        form.switch_mode();
        type_text(&mut form, "Ana");
        form.reset();
        assert_eq!(form.mode, AuthMode::Register);
        assert!(form.name.is_empty());
    }
}
