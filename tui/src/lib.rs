//! TUI rendering for the Udyam wizard using ratatui.
//!
//! This crate is a pure consumer of [`udyam_engine::App`]: it renders the
//! stepper, the active step's fields, the OTP row, and the submission
//! payload, and forwards key events back through the engine's transition
//! methods. No wizard state lives here.

mod input;
mod theme;

pub use input::handle_events;
pub use theme::{Palette, palette};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use udyam_engine::{App, Focus, MessageTone, OTP_LENGTH, steps};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = palette();
    let bg = Block::default().style(Style::default().bg(palette.bg).fg(palette.text));
    frame.render_widget(bg, frame.area());

    if let Some(payload) = app.submission() {
        draw_payload(frame, &payload.to_pretty_json(), &palette);
        return;
    }

    let otp_height = if app.active_step_index() == 0 { 6 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),          // Stepper
            Constraint::Length(2),          // Step title + description
            Constraint::Min(6),             // Fields
            Constraint::Length(otp_height), // OTP row (step 0 only)
            Constraint::Length(2),          // Banner message
            Constraint::Length(1),          // Status bar
        ])
        .split(frame.area());

    draw_stepper(frame, app, chunks[0], &palette);
    draw_step_heading(frame, app, chunks[1], &palette);
    draw_fields(frame, app, chunks[2], &palette);
    if app.active_step_index() == 0 {
        draw_otp_row(frame, app, chunks[3], &palette);
    }
    draw_message(frame, app, chunks[4], &palette);
    draw_status_bar(frame, app, chunks[5], &palette);
}

fn draw_stepper(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut spans = vec![Span::styled(
        " Udyam Registration ",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    for (index, step) in steps().iter().enumerate() {
        let active = index == app.active_step_index();
        let dot = if active { "●" } else { "○" };
        let style = if active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.faint)
        };
        spans.push(Span::styled(
            format!("  {dot} {}. {}", index + 1, step.key),
            style,
        ));
    }
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(palette.faint));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_step_heading(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let step = app.step();
    let lines = vec![
        Line::from(Span::styled(
            step.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            step.description,
            Style::default().fg(palette.faint),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_fields(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut lines = Vec::new();
    for (index, field) in app.step().fields.iter().enumerate() {
        let focused = app.focus() == Focus::Field(index);
        let marker = if focused { "▸ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut header = vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(field.label, label_style),
        ];
        if field.required {
            header.push(Span::styled(
                "  Required",
                Style::default().fg(palette.pill),
            ));
        }
        if field.read_only {
            header.push(Span::styled(
                "  (auto-filled)",
                Style::default().fg(palette.faint),
            ));
        }
        lines.push(Line::from(header));

        let value = app.value(field.name);
        let value_line = if value.is_empty() {
            Line::from(Span::styled(
                format!("    {}", field.placeholder),
                Style::default().fg(palette.faint),
            ))
        } else {
            let mut spans = vec![Span::raw(format!("    {value}"))];
            if focused && !field.read_only {
                spans.push(Span::styled("▏", Style::default().fg(palette.accent)));
            }
            Line::from(spans)
        };
        lines.push(value_line);

        if let Some(error) = app.error(field.name) {
            lines.push(Line::from(Span::styled(
                format!("    {error}"),
                Style::default().fg(palette.error),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_otp_row(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let focused = app.focus() == Focus::Otp;
    let editable = app.otp_editable();

    let marker = if focused { "▸ " } else { "  " };
    let title_style = if focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mut lines = vec![Line::from(vec![
        Span::styled(marker, Style::default().fg(palette.accent)),
        Span::styled("OTP Verification", title_style),
        Span::styled(
            if app.otp().verified() {
                "  verified"
            } else if app.otp().sent() {
                "  awaiting code"
            } else {
                "  not sent"
            },
            Style::default().fg(if app.otp().verified() {
                palette.ok
            } else {
                palette.faint
            }),
        ),
    ])];

    let mut cells = vec![Span::raw("    ")];
    for index in 0..OTP_LENGTH {
        let digit = app.otp_input().digit_at(index).unwrap_or(' ');
        let at_cursor = focused && editable && index == app.otp_input().cursor();
        let style = if at_cursor {
            Style::default()
                .fg(palette.bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else if editable {
            Style::default().fg(palette.text)
        } else {
            Style::default().fg(palette.faint)
        };
        cells.push(Span::styled(format!("[{digit}]"), style));
        cells.push(Span::raw(" "));
    }
    lines.push(Line::from(cells));

    let hint = if app.otp().verified() {
        "OTP verified."
    } else if app.otp().sent() {
        "Type the code, then press Enter to verify."
    } else {
        "Ctrl-S sends a simulated OTP once Aadhaar and mobile are valid."
    };
    lines.push(Line::from(Span::styled(
        format!("    {hint}"),
        Style::default().fg(palette.faint),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_message(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(message) = app.message() else {
        return;
    };
    let color = match app.message_tone() {
        MessageTone::Success => palette.ok,
        MessageTone::Error => palette.error,
        MessageTone::Warning | MessageTone::Info => palette.pill,
    };
    let style = Style::default().fg(color);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(message.to_string(), style)))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints = if app.active_step_index() == 0 {
        "Tab field · Ctrl-S send OTP · Enter verify/next · Esc quit"
    } else {
        "Tab field · Ctrl-B back · Enter submit · Esc quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(palette.faint),
        ))),
        area,
    );
}

fn draw_payload(frame: &mut Frame, json: &str, palette: &Palette) {
    let block = Block::default()
        .title(" Registration submitted ")
        .title_style(
            Style::default()
                .fg(palette.ok)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.ok))
        .padding(Padding::uniform(1));
    let mut lines: Vec<Line> = json.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc to exit.",
        Style::default().fg(palette.faint),
    )));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        frame.area(),
    );
}
