//! Rendering. Everything here reads the [`App`] and draws; state only ever
//! changes in the app itself.

use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Span, Spans};
use tui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use tui::Frame;

use crate::app::{App, Field, Form, Mode};
use crate::util;

const DESCRIPTION_WIDTH: usize = 60;

pub fn draw<B: Backend>(f: &mut Frame<B>, app: &mut App) {
    let (header_area, banner_area, list_area, help_area) = if app.banner.is_some() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ]
                .as_ref(),
            )
            .split(f.size());
        (chunks[0], Some(chunks[1]), chunks[2], chunks[3])
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(3),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ]
                .as_ref(),
            )
            .split(f.size());
        (chunks[0], None, chunks[1], chunks[2])
    };

    draw_header(f, app, header_area);
    if let Some(area) = banner_area {
        draw_banner(f, app, area);
    }
    draw_list(f, app, list_area);
    draw_help(f, help_area);

    match &app.mode {
        Mode::Normal => {}
        Mode::Adding(form) => draw_form_popup(f, "New To-Do", form, app.adding, "Adding..."),
        Mode::Editing { id, form } => {
            draw_form_popup(f, "Edit To-Do", form, app.updating.contains(id), "Saving...")
        }
        Mode::ConfirmDelete { .. } => draw_confirm_popup(f),
    }
}

fn draw_header<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "Your To-Do List",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  {} of {} shown",
            app.visible().len(),
            app.todos.len()
        )),
        Span::raw("  |  filter: "),
        Span::styled(app.filter.label(), Style::default().fg(Color::Cyan)),
    ];
    if app.fetching {
        spans.push(Span::styled(
            "  Loading...",
            Style::default().fg(Color::Yellow),
        ));
    }
    let header = Paragraph::new(Spans::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_banner<B: Backend>(f: &mut Frame<B>, app: &App, area: Rect) {
    let message = app.banner.as_deref().unwrap_or_default();
    let banner = Paragraph::new(Spans::from(vec![
        Span::styled(message, Style::default().fg(Color::Red)),
        Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Error", Style::default().fg(Color::Red)))
            .border_style(Style::default().fg(Color::LightRed)),
    );
    f.render_widget(banner, area);
}

fn draw_list<B: Backend>(f: &mut Frame<B>, app: &mut App, area: Rect) {
    if app.fetching {
        let loading = Paragraph::new("Loading...")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("To-Dos"));
        f.render_widget(loading, area);
        return;
    }

    let items = rows(app);
    if items.is_empty() {
        let message = if app.todos.is_empty() {
            "No To-Dos yet!"
        } else {
            "Nothing matches this filter"
        };
        let empty = Paragraph::new(message)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("To-Dos"));
        f.render_widget(empty, area);
        return;
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("To-Dos"))
        .highlight_style(
            Style::default()
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// Rows own their text so the stateful render below can borrow the
/// selection mutably.
fn rows(app: &App) -> Vec<ListItem<'static>> {
    app.visible()
        .into_iter()
        .map(|todo| {
            let checkbox = if todo.completed { "[x] " } else { "[ ] " };
            let mut title_style = Style::default();
            if todo.completed {
                title_style = title_style
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT);
            }
            let mut first = vec![
                Span::raw(checkbox),
                Span::styled(todo.title.clone(), title_style),
            ];
            if app.updating.contains(&todo.id) {
                first.push(Span::styled(
                    " (saving...)",
                    Style::default().fg(Color::Yellow),
                ));
            }
            if app.deleting.contains(&todo.id) {
                first.push(Span::styled(
                    " (deleting...)",
                    Style::default().fg(Color::Red),
                ));
            }

            let mut lines = vec![Spans::from(first)];
            if !todo.description.is_empty() {
                lines.push(Spans::from(Span::styled(
                    format!(
                        "    {}",
                        util::truncate(&todo.description, DESCRIPTION_WIDTH)
                    ),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Spans::from(Span::styled(
                format!("    updated {}", util::format_timestamp(todo.updated_at)),
                Style::default().fg(Color::DarkGray),
            )));
            ListItem::new(lines)
        })
        .collect()
}

fn draw_help<B: Backend>(f: &mut Frame<B>, area: Rect) {
    let help = Paragraph::new(Span::styled(
        "q quit  r refresh  a add  e edit  space toggle  x delete  f filter  j/k move",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(help, area);
}

fn draw_form_popup<B: Backend>(
    f: &mut Frame<B>,
    title: &str,
    form: &Form,
    busy: bool,
    busy_label: &'static str,
) {
    let area = centered_rect(60, 50, f.size());
    f.render_widget(Clear, area);
    f.render_widget(Block::default().borders(Borders::ALL).title(title), area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
            ]
            .as_ref(),
        )
        .split(area);

    let title_input = Paragraph::new(form.title.as_ref())
        .style(field_style(form.focus == Field::Title))
        .block(Block::default().borders(Borders::ALL).title("Title"));
    f.render_widget(title_input, inner[0]);

    let description_input = Paragraph::new(form.description.as_ref())
        .style(field_style(form.focus == Field::Description))
        .block(Block::default().borders(Borders::ALL).title("Description"));
    f.render_widget(description_input, inner[1]);

    let status = if busy {
        Spans::from(Span::styled(busy_label, Style::default().fg(Color::Yellow)))
    } else if let Some(error) = &form.error {
        Spans::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)))
    } else {
        Spans::from(Span::styled(
            "Enter save  Tab switch field  Esc cancel",
            Style::default().fg(Color::DarkGray),
        ))
    };
    f.render_widget(Paragraph::new(status).wrap(Wrap { trim: true }), inner[2]);
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn draw_confirm_popup<B: Backend>(f: &mut Frame<B>) {
    let area = centered_rect(40, 20, f.size());
    f.render_widget(Clear, area);
    let body = Paragraph::new(Spans::from(vec![
        Span::raw("Delete this todo? "),
        Span::styled("y", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" / "),
        Span::styled("n", Style::default().add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Confirm", Style::default().fg(Color::Red)))
            .border_style(Style::default().fg(Color::LightRed)),
    );
    f.render_widget(body, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}
