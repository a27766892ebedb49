use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Screen;
use crate::ui::theme::{GLOBAL_BORDER, STATUS_ERROR, TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        area: Rect,
        screen: Screen,
        command_error: Option<&str>,
    ) -> Paragraph<'static> {
        if let Some(error) = command_error {
            let line = Line::from(Span::styled(
                format!(" {}", error),
                Style::default().fg(STATUS_ERROR),
            ));
            return Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            );
        }

        let hints = match screen {
            Screen::Search => {
                " Tab: Focus │ Enter: Search/Open │ Space: ♥ │ Ctrl+T: Type │ Ctrl+F: Favorites │ Ctrl+Q: Quit"
            }
            Screen::Detail => " f/Space: ♥ │ Esc: Back │ Ctrl+Q: Quit",
            Screen::Favorites => {
                " Enter: Open │ x: Remove │ r: Reload │ Ctrl+H: Search │ Ctrl+Q: Quit"
            }
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count (hints contain Unicode).
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
