use crate::ui::state::MAX_SHIFT;
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Horizontal slider for the shift key, `0..=25`.
pub struct ShiftSlider {
    shift: u8,
}

impl ShiftSlider {
    pub fn new(shift: u8) -> Self {
        Self { shift }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        // Two columns of border plus one space of padding per side.
        let track_width = area.width.saturating_sub(4).max(2) as usize;
        let knob = usize::from(self.shift) * (track_width - 1) / usize::from(MAX_SHIFT);

        let mut spans = vec![Span::raw(" ")];
        for position in 0..track_width {
            let span = if position == knob {
                Span::styled("●", Style::default().fg(ACCENT))
            } else if position < knob {
                Span::styled("━", Style::default().fg(ACCENT))
            } else {
                Span::styled("─", Style::default().fg(DIM_TEXT))
            };
            spans.push(span);
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(format!("Shift key: {}", self.shift))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
