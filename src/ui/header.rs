use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Screen;
use crate::ui::theme::{ACCENT, BADGE, GLOBAL_BORDER, SEPARATOR, TEXT, TEXT_MUTED};

/// Navigation bar: brand, screen tabs, favorites badge.
///
/// The badge shows the current favorite count and is re-derived from
/// the membership snapshot on every draw, so it updates within one
/// change-signal delivery of any mutation, from any screen.
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, active: Screen, favorite_count: usize) -> Paragraph<'static> {
        let separator_style = Style::default().fg(SEPARATOR);

        let mut spans = vec![
            Span::styled("  🎬 ReelScout", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            tab("Search", active == Screen::Search),
            Span::styled("  │  ", separator_style),
            tab("Details", active == Screen::Detail),
            Span::styled("  │  ", separator_style),
            tab("Favorites", active == Screen::Favorites),
        ];

        if favorite_count > 0 {
            spans.push(Span::styled(
                format!(" ({})", favorite_count),
                Style::default().fg(BADGE),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn tab(label: &'static str, active: bool) -> Span<'static> {
    if active {
        Span::styled(label, Style::default().fg(TEXT).add_modifier(Modifier::BOLD))
    } else {
        Span::styled(label, Style::default().fg(TEXT_MUTED))
    }
}
