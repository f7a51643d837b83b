use crate::cipher::{encrypt, Alignment};
use crate::ui::app::{AnalysisPopup, App};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::slider::ShiftSlider;
use crate::ui::state::ViewState;
use crate::ui::table::AlignmentTable;
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, POPUP_BORDER};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body, footer_area) = layout_regions(area);
    let state = app.state();

    // Derived, never stored: both views are recomputed from the state on
    // every draw so they cannot drift apart.
    let shift = i32::from(state.shift);
    let ciphertext = encrypt(&state.text, shift);
    let alignment = Alignment::new(&state.text, shift);

    let header = Header::new(state.shift, state.text.chars().count());
    frame.render_widget(header.widget(), header_area);
    let footer = Footer::new();
    frame.render_widget(footer.widget(footer_area), footer_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(3),
        ])
        .split(body);

    draw_input(frame, state, rows[0]);
    frame.render_widget(ShiftSlider::new(state.shift).widget(rows[1]), rows[1]);
    frame.render_widget(AlignmentTable::new(&alignment).widget(), rows[2]);
    draw_output(frame, state, &ciphertext, rows[3]);

    if let Some(popup) = app.popup() {
        draw_popup(frame, popup, body);
    }
}

fn draw_input(frame: &mut Frame<'_>, state: &ViewState, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;
    // Scroll so the cursor stays inside the box.
    let scroll = state
        .cursor
        .saturating_sub(inner_width.saturating_sub(1).max(1));

    let widget = Paragraph::new(state.text.clone())
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .title("Plaintext")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(widget, area);

    if inner_width > 0 && area.height > 2 {
        let x = area.x + 1 + (state.cursor - scroll).min(inner_width - 1) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_output(frame: &mut Frame<'_>, state: &ViewState, ciphertext: &str, area: Rect) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let original = Paragraph::new(state.text.clone())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Original")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(original, panels[0]);

    let encrypted = Paragraph::new(ciphertext.to_string())
        .style(Style::default().fg(ACCENT))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Encrypted")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(encrypted, panels[1]);
}

fn draw_popup(frame: &mut Frame<'_>, popup: &AnalysisPopup, body: Rect) {
    let mut lines = Vec::new();
    match popup {
        AnalysisPopup::Empty => {
            lines.push(Line::from("Enter some text first."));
        }
        AnalysisPopup::Report(report) => {
            lines.push(Line::from(format!(
                "Score of the text as given: {:.1}",
                report.input_score
            )));
            lines.push(Line::from(""));
            lines.push(Line::from("Best shifts, treating the text as ciphertext:"));
            for (rank, candidate) in report.candidates.iter().take(5).enumerate() {
                let marker = if candidate.dictionary_hit { "✓" } else { " " };
                let preview: String = candidate.plaintext.chars().take(36).collect();
                lines.push(Line::from(format!(
                    "{:>2}. shift {:>2}  score {:>5.1} {} {}",
                    rank + 1,
                    candidate.shift,
                    candidate.score,
                    marker,
                    preview
                )));
            }
            if !report.is_confident() {
                lines.push(Line::from(""));
                lines.push(Line::styled(
                    "No candidate passed the word check.",
                    Style::default().fg(DIM_TEXT),
                ));
            }
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Esc: Close",
        Style::default().fg(DIM_TEXT),
    ));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(30);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(ratatui::text::Span::styled(
            "Analysis",
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
