use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{app::App, session::Face};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;
// border plus padding on each side of the card
const CARD_CHROME: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.session;

        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let title_style = Style::default().patch(bold_style).fg(Color::Cyan);
        let answer_label_style = Style::default().patch(bold_style).fg(Color::Yellow);
        let answer_style = Style::default().fg(Color::Green);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // padding
                Constraint::Length(1), // progress
                Constraint::Length(1), // padding
                Constraint::Min(3),    // card
                Constraint::Length(1), // toggle caption
                Constraint::Length(1), // legend
            ])
            .split(area);

        Paragraph::new(Span::styled(self.title.as_str(), title_style))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        Gauge::default()
            .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
            .ratio(session.progress_fraction())
            .label(Span::styled(session.position_label(), bold_style))
            .render(chunks[2], buf);

        let face = session.face();
        let mut lines: Vec<Line> = face
            .question()
            .lines()
            .map(|l| Line::styled(l.to_string(), bold_style))
            .collect();
        if let Face::Both { answer, .. } = face {
            lines.push(Line::default());
            lines.push(Line::styled("Answer", answer_label_style));
            lines.extend(answer.lines().map(|l| Line::styled(l.to_string(), answer_style)));
        }

        let card_chunk = chunks[4];
        let inner_width = card_chunk.width.saturating_sub(CARD_CHROME * 2);
        let card_height = wrapped_height(&face_text(&face), inner_width)
            .saturating_add(CARD_CHROME * 2)
            .min(card_chunk.height);
        let card_area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(card_chunk.height.saturating_sub(card_height) / 2),
                Constraint::Length(card_height),
                Constraint::Min(0),
            ])
            .split(card_chunk)[1];

        Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .padding(Padding::uniform(1)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(card_area, buf);

        Paragraph::new(Span::styled(
            format!("(space) {}", session.toggle_label()),
            dim_style,
        ))
        .alignment(Alignment::Center)
        .render(chunks[5], buf);

        Paragraph::new(Span::styled(
            "(←/h) prev / (space) flip / (→/l) next / (esc)ape",
            italic_style,
        ))
        .alignment(Alignment::Center)
        .render(chunks[6], buf);
    }
}

/// The lines the card box has to hold, in the same shape they are rendered.
fn face_text(face: &Face) -> String {
    match face {
        Face::Question(q) => q.to_string(),
        Face::Both { question, answer } => format!("{question}\n\nAnswer\n{answer}"),
    }
}

/// Rows needed to show `text` wrapped at `width` columns.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let rows: usize = text
        .lines()
        .map(|line| line.width().div_ceil(width as usize).max(1))
        .sum();
    rows.min(u16::MAX as usize) as u16
}
