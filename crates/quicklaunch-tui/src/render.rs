//! Palette rendering.
//!
//! Drawing reads a fresh [`PageView`] every frame and never mutates the palette.

use crate::app::App;
use crate::colors;
use quicklaunch_core::PageView;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn render(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(colors::BG));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_input(f, app, chunks[0]);

    let view = app.palette.page_view();
    if view.is_empty() {
        render_empty(f, &view, chunks[1]);
    } else {
        render_page(f, &view, chunks[1]);
    }

    render_footer(f, app, &view, chunks[2]);
}

// Query length is bounded by terminal width
#[allow(clippy::cast_possible_truncation)]
fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let query = app.palette.query();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Launch ")
        .style(Style::default().bg(colors::SURFACE))
        .border_style(Style::default().fg(colors::OUTLINE));

    let text = if query.is_empty() {
        Span::styled(app.placeholder.as_str(), Style::default().fg(colors::OUTLINE))
    } else {
        Span::styled(query, Style::default().fg(colors::ON_SURFACE))
    };

    f.render_widget(Paragraph::new(text).block(block), area);
    f.set_cursor_position((area.x + query.chars().count() as u16 + 1, area.y + 1));
}

fn render_page(f: &mut Frame, view: &PageView<'_>, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = view
        .items
        .iter()
        .map(|item| {
            let name_width = item.key.chars().count();
            let exec_room = width.saturating_sub(name_width + 4);
            let exec: String = item.exec.chars().take(exec_room).collect();

            ListItem::new(Line::from(vec![
                Span::styled(item.key.clone(), Style::default().fg(colors::ON_SURFACE)),
                Span::raw("  "),
                Span::styled(exec, Style::default().fg(colors::OUTLINE)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::OUTLINE)),
        )
        .highlight_style(
            Style::default()
                .bg(colors::SURFACE_HIGH)
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(view.selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_empty(f: &mut Frame, view: &PageView<'_>, area: Rect) {
    let message = if view.catalog_len == 0 {
        "No applications installed"
    } else {
        "No applications found"
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(colors::SUBTEXT),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::OUTLINE)),
    );
    f.render_widget(paragraph, area);
}

fn render_footer(f: &mut Frame, app: &App, view: &PageView<'_>, area: Rect) {
    let position = if view.is_empty() {
        " 0 matches ".to_string()
    } else {
        format!(
            " page {}/{} · {} matches ",
            view.page_index + 1,
            view.page_count,
            view.total_matches
        )
    };

    let right = match &app.status_message {
        Some(msg) if msg.starts_with("Failed") => {
            Span::styled(msg.clone(), Style::default().fg(colors::ERROR))
        }
        Some(msg) => Span::styled(msg.clone(), Style::default().fg(colors::PRIMARY)),
        None => Span::styled(
            "↑↓ move  ←→ page  ⏎ launch  esc quit",
            Style::default().fg(colors::OUTLINE),
        ),
    };

    let line = Line::from(vec![
        Span::styled(position, Style::default().fg(colors::SUBTEXT)),
        right,
    ]);
    f.render_widget(Paragraph::new(line), area);
}
