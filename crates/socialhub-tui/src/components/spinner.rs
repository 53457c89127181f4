//! Braille spinner shown while the session restores or a submit is pending

use ratatui::{
    style::{Color, Style},
    text::Span,
};
use std::time::{Duration, Instant};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug)]
pub struct Spinner {
    frame: usize,
    last_update: Instant,
    frame_duration: Duration,
    color: Color,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            frame: 0,
            last_update: Instant::now(),
            frame_duration: Duration::from_millis(80),
            color: Color::Cyan,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Advance when a frame's worth of time has passed (call on each draw)
    pub fn tick(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_update) >= self.frame_duration {
            self.frame = (self.frame + 1) % FRAMES.len();
            self.last_update = now;
        }
    }

    pub fn render(&self) -> Span<'static> {
        Span::styled(FRAMES[self.frame], Style::default().fg(self.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_stays_in_range() {
        let mut spinner = Spinner::new();
        for _ in 0..25 {
            spinner.tick();
        }
        assert!(spinner.frame < FRAMES.len());
    }

    #[test]
    fn test_custom_color() {
        let spinner = Spinner::new().with_color(Color::Yellow);
        assert_eq!(spinner.render().style.fg, Some(Color::Yellow));
    }
}
