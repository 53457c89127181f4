//! Settings tab - profile, notifications, preferences, data actions

use super::dashboard::section;
use super::muted;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use socialhub_core::models::{
    cycle, Language, NotificationSettings, NotificationToggle, ProfileSettings, SettingsForm,
    Theme, Timezone, User,
};
use socialhub_core::views::settings::{DATA_ACTIONS, SAVE_LABEL, SAVING_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Bio,
    Website,
    Location,
}

impl ProfileField {
    const ALL: [ProfileField; 5] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Bio,
        ProfileField::Website,
        ProfileField::Location,
    ];

    fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Nom complet",
            ProfileField::Email => "Email",
            ProfileField::Bio => "Bio",
            ProfileField::Website => "Site web",
            ProfileField::Location => "Localisation",
        }
    }

    fn value<'a>(&self, profile: &'a ProfileSettings) -> &'a str {
        match self {
            ProfileField::Name => &profile.name,
            ProfileField::Email => &profile.email,
            ProfileField::Bio => &profile.bio,
            ProfileField::Website => &profile.website,
            ProfileField::Location => &profile.location,
        }
    }

    fn value_mut<'a>(&self, profile: &'a mut ProfileSettings) -> &'a mut String {
        match self {
            ProfileField::Name => &mut profile.name,
            ProfileField::Email => &mut profile.email,
            ProfileField::Bio => &mut profile.bio,
            ProfileField::Website => &mut profile.website,
            ProfileField::Location => &mut profile.location,
        }
    }
}

/// One selectable row of the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    Profile(ProfileField),
    SaveProfile,
    Notification(NotificationToggle),
    SaveNotifications,
    Theme,
    Language,
    Timezone,
    Data(usize),
}

fn items() -> Vec<SettingsItem> {
    let mut items: Vec<SettingsItem> = ProfileField::ALL
        .iter()
        .map(|f| SettingsItem::Profile(*f))
        .collect();
    items.push(SettingsItem::SaveProfile);
    items.extend(
        NotificationToggle::ALL
            .iter()
            .map(|t| SettingsItem::Notification(*t)),
    );
    items.push(SettingsItem::SaveNotifications);
    items.extend([SettingsItem::Theme, SettingsItem::Language, SettingsItem::Timezone]);
    items.extend((0..DATA_ACTIONS.len()).map(SettingsItem::Data));
    items
}

/// Requests the tab hands back to the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    SaveProfile(ProfileSettings),
    SaveNotifications(NotificationSettings),
}

pub struct SettingsTab {
    pub form: SettingsForm,
    /// Whose data pre-filled the profile
    owner: Option<String>,
    items: Vec<SettingsItem>,
    selected: usize,
    /// Editing the selected profile field
    editing: bool,
}

impl Default for SettingsTab {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsTab {
    pub fn new() -> Self {
        Self {
            form: SettingsForm::for_user(None),
            owner: None,
            items: items(),
            selected: 0,
            editing: false,
        }
    }

    /// Re-fill the form when a different user is signed in
    pub fn sync_user(&mut self, user: Option<&User>) {
        let id = user.map(|u| format!("{}:{}", u.id, u.email));
        if id != self.owner {
            self.form = SettingsForm::for_user(user);
            self.owner = id;
            self.editing = false;
        }
    }

    pub fn selected_item(&self) -> SettingsItem {
        self.items[self.selected.min(self.items.len() - 1)]
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<SettingsAction> {
        let item = self.selected_item();

        if self.editing {
            if let SettingsItem::Profile(field) = item {
                let value = field.value_mut(&mut self.form.profile);
                match key {
                    KeyCode::Char(c) => value.push(c),
                    KeyCode::Backspace => {
                        value.pop();
                    }
                    KeyCode::Enter | KeyCode::Esc => self.editing = false,
                    _ => {}
                }
            }
            return None;
        }

        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.items.len() - 1);
            }
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Char('s') => return self.save_for(item),
            KeyCode::Enter | KeyCode::Char(' ') => return self.activate(item, true),
            KeyCode::Left | KeyCode::Char('h') => {
                self.cycle_choice(item, false);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cycle_choice(item, true);
            }
            _ => {}
        }
        None
    }

    fn activate(&mut self, item: SettingsItem, forward: bool) -> Option<SettingsAction> {
        match item {
            SettingsItem::Profile(_) => self.editing = true,
            SettingsItem::SaveProfile | SettingsItem::SaveNotifications => {
                return self.save_for(item)
            }
            SettingsItem::Notification(toggle) => self.form.notifications.toggle(toggle),
            SettingsItem::Theme | SettingsItem::Language | SettingsItem::Timezone => {
                self.cycle_choice(item, forward)
            }
            SettingsItem::Data(_) => {}
        }
        None
    }

    fn cycle_choice(&mut self, item: SettingsItem, forward: bool) {
        let prefs = &mut self.form.preferences;
        match item {
            SettingsItem::Theme => prefs.theme = cycle(&Theme::ALL, prefs.theme, forward),
            SettingsItem::Language => {
                prefs.language = cycle(&Language::ALL, prefs.language, forward)
            }
            SettingsItem::Timezone => {
                prefs.timezone = cycle(&Timezone::ALL, prefs.timezone, forward)
            }
            _ => {}
        }
    }

    /// Save the section `item` belongs to, if it has a save button
    fn save_for(&self, item: SettingsItem) -> Option<SettingsAction> {
        match item {
            SettingsItem::Profile(_) | SettingsItem::SaveProfile => {
                Some(SettingsAction::SaveProfile(self.form.profile.clone()))
            }
            SettingsItem::Notification(_) | SettingsItem::SaveNotifications => Some(
                SettingsAction::SaveNotifications(self.form.notifications),
            ),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, saving: bool) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(7)])
            .split(columns[0]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(4)])
            .split(columns[1]);

        let save_label = if saving { SAVING_LABEL } else { SAVE_LABEL };

        let mut profile = Vec::new();
        for field in ProfileField::ALL {
            let item = SettingsItem::Profile(field);
            let mut value = field.value(&self.form.profile).to_string();
            if self.editing && self.selected_item() == item {
                value.push('_');
            }
            profile.push(self.row(item, vec![muted(format!("{:<13}", field.label())), Span::raw(value)]));
        }
        profile.push(self.row(
            SettingsItem::SaveProfile,
            vec![Span::styled(format!("[ {} ]", save_label), Style::default().fg(Color::Cyan))],
        ));
        frame.render_widget(Paragraph::new(profile).block(section(" Profil ")), left[0]);

        let mut notifications = Vec::new();
        for toggle in NotificationToggle::ALL {
            let on = self.form.notifications.get(toggle);
            let (mark, color) = if on {
                ("[x]", Color::Green)
            } else {
                ("[ ]", Color::DarkGray)
            };
            notifications.push(self.row(
                SettingsItem::Notification(toggle),
                vec![
                    Span::styled(format!("{} ", mark), Style::default().fg(color)),
                    Span::raw(toggle.label()),
                    muted(format!("  {}", toggle.description())),
                ],
            ));
        }
        notifications.push(self.row(
            SettingsItem::SaveNotifications,
            vec![Span::styled(format!("[ {} ]", save_label), Style::default().fg(Color::Cyan))],
        ));
        frame.render_widget(
            Paragraph::new(notifications).block(section(" Notifications ")),
            left[1],
        );

        let prefs = &self.form.preferences;
        let appearance = vec![
            self.row(
                SettingsItem::Theme,
                vec![muted("Thème        "), Span::raw(format!("◂ {} ▸", prefs.theme.label()))],
            ),
            self.row(
                SettingsItem::Language,
                vec![muted("Langue       "), Span::raw(format!("◂ {} ▸", prefs.language.label()))],
            ),
            self.row(
                SettingsItem::Timezone,
                vec![muted("Fuseau       "), Span::raw(format!("◂ {} ▸", prefs.timezone.label()))],
            ),
        ];
        frame.render_widget(
            Paragraph::new(appearance).block(section(" Apparence et Région ")),
            right[0],
        );

        let data: Vec<Line> = DATA_ACTIONS
            .iter()
            .enumerate()
            .map(|(i, label)| self.row(SettingsItem::Data(i), vec![Span::raw(format!("[ {} ]", label))]))
            .collect();
        frame.render_widget(
            Paragraph::new(data).block(section(" Données et Confidentialité ")),
            right[1],
        );
    }

    fn row(&self, item: SettingsItem, spans: Vec<Span<'static>>) -> Line<'static> {
        let selected = self.selected_item() == item;
        let mut line = vec![Span::styled(
            if selected { "▸ " } else { "  " },
            Style::default().fg(Color::Cyan),
        )];
        line.extend(spans);
        let line = Line::from(line);
        if selected {
            line.style(Style::default().add_modifier(Modifier::BOLD))
        } else {
            line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user() -> User {
        User {
            id: "1".to_string(),
            email: "ana@example.com".to_string(),
            name: "ana".to_string(),
            avatar: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_sync_user_prefills_profile() {
        let mut tab = SettingsTab::new();
        tab.sync_user(Some(&user()));
        assert_eq!(tab.form.profile.name, "ana");
        assert_eq!(tab.form.profile.location, "Paris, France");

        tab.form.profile.bio.clear();
        tab.sync_user(Some(&user()));
        assert!(tab.form.profile.bio.is_empty(), "same user keeps edits");
    }

    #[test]
    fn test_edit_name_then_save() {
        let mut tab = SettingsTab::new();
        tab.handle_key(KeyCode::Enter);
        assert!(tab.is_editing());
        for c in "Ana".chars() {
            tab.handle_key(KeyCode::Char(c));
        }
        tab.handle_key(KeyCode::Enter);

        match tab.handle_key(KeyCode::Char('s')) {
            Some(SettingsAction::SaveProfile(profile)) => assert_eq!(profile.name, "Ana"),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_toggle_notification() {
        let mut tab = SettingsTab::new();
        // Five profile fields and the save button come first
        for _ in 0..6 {
            tab.handle_key(KeyCode::Down);
        }
        assert_eq!(
            tab.selected_item(),
            SettingsItem::Notification(NotificationToggle::Email)
        );
        tab.handle_key(KeyCode::Char(' '));
        assert!(!tab.form.notifications.email_notifications);
    }

    #[test]
    fn test_cycle_theme() {
        let mut tab = SettingsTab::new();
        while tab.selected_item() != SettingsItem::Theme {
            tab.handle_key(KeyCode::Down);
        }
        tab.handle_key(KeyCode::Right);
        assert_eq!(tab.form.preferences.theme, Theme::Light);
        tab.handle_key(KeyCode::Left);
        assert_eq!(tab.form.preferences.theme, Theme::System);
    }
}
