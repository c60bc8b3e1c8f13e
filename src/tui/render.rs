use crate::menu::{MenuRow, MenuViewModel, PreferencePanel, RowStyle};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Padding, Paragraph};
use ratatui::Frame;

fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

fn row_style(style: RowStyle) -> Style {
    match style {
        RowStyle::Normal => Style::default().fg(Color::Gray),
        RowStyle::Selected => Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
        RowStyle::Dimmed => Style::default().fg(Color::DarkGray),
        RowStyle::Editing => Style::default().fg(Color::LightYellow),
    }
}

fn dim_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn row_line(row: &MenuRow) -> Line<'static> {
    let mut spans = vec![Span::styled(row.text.clone(), row_style(row.style))];
    if let Some(note) = &row.note {
        spans.push(Span::styled(format!("  {note}"), dim_style()));
    }
    Line::from(spans)
}

fn panel_title_style(panel: &PreferencePanel) -> Style {
    if panel.active {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    } else {
        dim_style()
    }
}

pub fn footer_lines(view: &MenuViewModel) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(selection) = &view.selection_line {
        lines.push(Line::from(Span::styled(
            selection.clone(),
            row_style(RowStyle::Normal),
        )));
    }
    if let Some(error) = &view.error_line {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(Span::styled(
        view.hint.clone(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));
    lines
}

pub fn draw_menu(frame: &mut Frame<'_>, view: &MenuViewModel) {
    let footer = footer_lines(view);
    let panel_height = view
        .preferences
        .as_ref()
        .map_or(0, |panel| panel.rows.len() as u16 + 2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(panel_height),
            Constraint::Length(footer.len() as u16 + 2),
        ])
        .split(frame.area());

    let header = Paragraph::new(Line::from(Span::styled(view.title.clone(), title_style())))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem<'static>> = view
        .rows
        .iter()
        .map(|row| ListItem::new(row_line(row)))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, chunks[1]);

    if let Some(panel) = &view.preferences {
        let lines: Vec<Line<'static>> = panel.rows.iter().map(row_line).collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(panel.title.clone(), panel_title_style(panel)))
            .padding(Padding::horizontal(1));
        frame.render_widget(Paragraph::new(lines).block(block), chunks[2]);
    }

    frame.render_widget(
        Paragraph::new(footer).block(Block::default().borders(Borders::ALL)),
        chunks[3],
    );
}
