use crate::cipher::Alignment;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment as HAlign;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// The two-row alphabet correspondence: plain alphabet on top, shifted
/// alphabet below, a marker between them for every column whose letter
/// occurs in the input text.
pub struct AlignmentTable<'a> {
    alignment: &'a Alignment,
}

impl<'a> AlignmentTable<'a> {
    pub fn new(alignment: &'a Alignment) -> Self {
        Self { alignment }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let plain_style = Style::default().fg(HEADER_TEXT);
        let active_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut top = Vec::with_capacity(self.alignment.top_row.len());
        let mut markers = Vec::with_capacity(self.alignment.top_row.len());
        let mut bottom = Vec::with_capacity(self.alignment.top_row.len());

        for (index, letter) in self.alignment.top_row.iter().enumerate() {
            let active = self.alignment.is_active(*letter);
            let style = if active { active_style } else { plain_style };
            top.push(Span::styled(format!(" {letter} "), style));
            markers.push(Span::styled(
                if active { " ↓ " } else { "   " }.to_string(),
                active_style,
            ));
            bottom.push(Span::styled(
                format!(" {} ", self.alignment.bottom_row[index]),
                style,
            ));
        }

        Paragraph::new(vec![
            Line::from(top),
            Line::from(markers),
            Line::from(bottom),
        ])
        .alignment(HAlign::Center)
        .block(
            Block::default()
                .title("Alignment")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
