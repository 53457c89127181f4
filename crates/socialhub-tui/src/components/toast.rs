//! Toast notifications (save confirmations, login failures)

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Error => Color::Red,
            Self::Info => Color::Cyan,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Info => "ℹ",
        }
    }
}

/// Title line plus an optional description
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
    pub kind: ToastKind,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(title: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            title: title.into(),
            description: None,
            kind,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, ToastKind::Success)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title, ToastKind::Error)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title, ToastKind::Info)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }

    fn height(&self) -> u16 {
        if self.description.is_some() {
            4
        } else {
            3
        }
    }

    fn width(&self) -> usize {
        let title = self.title.chars().count();
        let desc = self
            .description
            .as_deref()
            .map(|d| d.chars().count())
            .unwrap_or(0);
        title.max(desc) + 6
    }
}

/// Stack of live toasts, newest at the bottom
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.toasts.retain(|t| !t.is_expired());

        // Bottom-right corner, at most 3 visible
        let mut bottom = area.y + area.height.saturating_sub(1);
        for toast in self.toasts.iter().rev().take(3) {
            let width = (toast.width() as u16).min(area.width);
            let height = toast.height();
            if bottom < area.y + height {
                break;
            }
            let toast_area = Rect {
                x: area.x + area.width.saturating_sub(width + 1),
                y: bottom - height,
                width,
                height,
            };
            render_single_toast(frame, toast_area, toast);
            bottom -= height;
        }
    }
}

fn render_single_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let color = toast.kind.color();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", toast.kind.icon()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            toast.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ])];
    if let Some(desc) = &toast.description {
        lines.push(Line::from(Span::styled(
            desc.clone(),
            Style::default().fg(Color::Gray),
        )));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_sizes() {
        let short = Toast::info("Ok");
        assert_eq!(short.height(), 3);

        let long = Toast::success("Profil mis à jour")
            .with_description("Vos informations ont été sauvegardées avec succès.");
        assert_eq!(long.height(), 4);
        assert_eq!(
            long.width(),
            "Vos informations ont été sauvegardées avec succès.".chars().count() + 6
        );
    }

    #[test]
    fn test_manager_keeps_order() {
        let mut manager = ToastManager::new();
        manager.push(Toast::info("a"));
        manager.push(Toast::error("b"));
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.latest().unwrap().title, "b");
    }
}
