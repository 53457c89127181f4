use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Single-line text filter for the posts tab
pub struct SearchBar {
    pub query: String,
    /// Focused: keystrokes edit the query
    pub active: bool,
    pub placeholder: String,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            active: false,
            placeholder: "Rechercher...".to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Edit the query while active. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        if !self.active {
            return false;
        }
        match key {
            KeyCode::Char(c) => self.query.push(c),
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Enter | KeyCode::Esc => self.active = false,
            _ => return false,
        }
        true
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let (text, style) = if self.query.is_empty() {
            (
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (self.query.as_str(), Style::default().fg(Color::White))
        };

        let border_color = if self.active {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let mut spans = vec![
            Span::styled("🔍 ", Style::default().fg(Color::Cyan)),
            Span::styled(text, style),
        ];
        if self.active {
            spans.push(Span::styled(
                "_",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(Span::styled(
                    " Recherche (/) ",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
        );

        frame.render_widget(paragraph, area);
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Highlight case-insensitive matches of `query` in `text`
///
/// Works on chars, so accented content never splits a UTF-8 sequence.
pub fn highlight_matches(text: &str, query: &str) -> Vec<Span<'static>> {
    let hay: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    if needle.is_empty() || needle.len() > hay.len() {
        return vec![Span::raw(text.to_string())];
    }

    let highlight = Style::default()
        .bg(Color::Yellow)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        let hit = hay[i..i + needle.len()]
            .iter()
            .zip(&needle)
            .all(|(a, b)| fold(*a) == *b);
        if hit {
            if i > plain_start {
                spans.push(Span::raw(hay[plain_start..i].iter().collect::<String>()));
            }
            spans.push(Span::styled(
                hay[i..i + needle.len()].iter().collect::<String>(),
                highlight,
            ));
            i += needle.len();
            plain_start = i;
        } else {
            i += 1;
        }
    }
    if plain_start < hay.len() {
        spans.push(Span::raw(hay[plain_start..].iter().collect::<String>()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_empty_query() {
        assert_eq!(highlight_matches("bonjour", "").len(), 1);
    }

    #[test]
    fn test_highlight_case_insensitive() {
        let spans = highlight_matches("Merci à tous", "MERCI");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "Merci");
    }

    #[test]
    fn test_highlight_accented_text() {
        let spans = highlight_matches("Découvrez nos nouveautés", "nos");
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "Découvrez ");
        assert_eq!(spans[1].content, "nos");
    }

    #[test]
    fn test_editing_only_when_active() {
        let mut bar = SearchBar::new();
        assert!(!bar.handle_key(KeyCode::Char('a')));

        bar.active = true;
        bar.handle_key(KeyCode::Char('é'));
        bar.handle_key(KeyCode::Char('t'));
        bar.handle_key(KeyCode::Backspace);
        assert_eq!(bar.query, "é");

        bar.handle_key(KeyCode::Esc);
        assert!(!bar.active);
    }
}
