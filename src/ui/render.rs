//! Main rendering module for student-form
//!
//! Renders the complete UI in one centred column:
//! - Project title
//! - Success / error banner
//! - "Student Information" form (text inputs, subject grid, buttons)
//! - "Submitted Data" summary once something was submitted
//! - Global status bar (bottom)

use crate::app::{App, Focus};
use crate::types::{Subject, TextField};
use crate::ui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const COLUMN_WIDTH: u16 = 72;
const FORM_HEIGHT: u16 = 20;
const SUMMARY_HEIGHT: u16 = 6;
const SUBJECT_COLUMNS: usize = 3;

const KEY_HINTS: &str =
    " Tab/↑↓ move · Space toggle · Enter/^S submit · ^R reset · F2 theme · Esc quit";

/// Main render function – entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = &app.theme;

    // Fill entire background
    frame.render_widget(Block::default().style(theme.block_style()), area);

    // Everything above the status bar, centred horizontally
    let body = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let column = widgets::centered_rect(COLUMN_WIDTH, body.height, body);

    let summary_height = if app.form.submitted().is_some() {
        SUMMARY_HEIGHT
    } else {
        0
    };

    let vertical = Layout::vertical([
        Constraint::Length(2),              // title
        Constraint::Length(1),              // banner
        Constraint::Length(FORM_HEIGHT),    // form
        Constraint::Length(summary_height), // submitted data
        Constraint::Min(0),
    ])
    .split(column);

    let title = Paragraph::new("Computer Science Project")
        .style(theme.title())
        .alignment(Alignment::Center);
    frame.render_widget(title, vertical[0]);

    if let Some(banner) = app.form.banner() {
        widgets::render_banner(frame, banner, theme, vertical[1]);
    }

    render_form(frame, app, vertical[2]);

    if summary_height > 0 {
        render_summary(frame, app, vertical[3]);
    }

    widgets::render_status_bar(frame, KEY_HINTS, app.config.theme.as_str(), theme, area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .style(theme.block_style())
        .title(" Student Information ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(3), // name
        Constraint::Length(1),
        Constraint::Length(3), // class
        Constraint::Length(1),
        Constraint::Length(3), // percentage
        Constraint::Length(1),
        Constraint::Length(4), // subjects
        Constraint::Length(1),
        Constraint::Length(1), // buttons
    ])
    .split(Rect {
        x: inner.x + 1,
        y: inner.y,
        width: inner.width.saturating_sub(2),
        height: inner.height,
    });

    for (i, field) in TextField::all().iter().enumerate() {
        render_text_field(frame, app, *field, rows[i * 2], rows[i * 2 + 1]);
    }
    render_subjects(frame, app, rows[6], rows[7]);
    render_buttons(frame, app, rows[8]);
}

fn render_text_field(frame: &mut Frame, app: &App, field: TextField, input: Rect, error: Rect) {
    let theme = &app.theme;
    let is_active = app.focus.text_field() == Some(field);
    let message = app.form.errors().get(field.key());

    let border_style = if message.is_some() {
        theme.border_invalid()
    } else if is_active {
        theme.border_focused()
    } else {
        theme.border()
    };
    let title_style = if is_active {
        theme.title()
    } else {
        theme.text_dim()
    };

    let block = Block::default()
        .style(theme.block_style())
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} * ", field.label()))
        .title_style(title_style);
    let inner = block.inner(input);
    frame.render_widget(block, input);

    let value = app.form.draft().field(field);
    let (offset, cursor) = input_scroll(value, inner.width);

    let content = if value.is_empty() {
        Paragraph::new(field.placeholder()).style(theme.text_dim())
    } else {
        Paragraph::new(value).style(theme.text()).scroll((0, offset))
    };
    frame.render_widget(content, inner);

    if is_active && inner.width > 0 {
        frame.set_cursor_position(Position::new(inner.x + cursor, inner.y));
    }

    if let Some(msg) = message {
        frame.render_widget(Paragraph::new(msg).style(theme.error()), error);
    }
}

/// Horizontal scroll offset and cursor column for a single-line input,
/// both in terminal cells. The end of long input stays visible.
fn input_scroll(value: &str, width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }
    let text_width = u16::try_from(Span::raw(value).width()).unwrap_or(u16::MAX);
    let offset = text_width.saturating_sub(width - 1);
    (offset, (text_width - offset).min(width - 1))
}

fn render_subjects(frame: &mut Frame, app: &App, area: Rect, error: Rect) {
    let theme = &app.theme;
    let is_active = app.focus == Focus::Subjects;
    let message = app.form.errors().get(crate::types::FieldKey::Subjects);

    let border_style = if message.is_some() {
        theme.border_invalid()
    } else if is_active {
        theme.border_focused()
    } else {
        theme.border()
    };

    let block = Block::default()
        .style(theme.block_style())
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Subjects Offered * ")
        .title_style(if is_active {
            theme.title()
        } else {
            theme.text_dim()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cell_width = (inner.width as usize / SUBJECT_COLUMNS).max(1);
    let selected = &app.form.draft().subjects;

    let lines: Vec<Line> = Subject::all()
        .chunks(SUBJECT_COLUMNS)
        .enumerate()
        .map(|(row, chunk)| {
            let spans: Vec<Span> = chunk
                .iter()
                .enumerate()
                .map(|(col, subject)| {
                    let idx = row * SUBJECT_COLUMNS + col;
                    let checked = selected.contains(subject);
                    let mark = if checked { "[x]" } else { "[ ]" };
                    let style = if is_active && idx == app.subject_cursor {
                        theme.selected()
                    } else if checked {
                        theme.text().add_modifier(Modifier::BOLD)
                    } else {
                        theme.text()
                    };
                    let cell = format!("{} {}", mark, subject.label());
                    Span::styled(format!("{:<w$}", cell, w = cell_width), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(theme.text()), inner);

    if let Some(msg) = message {
        frame.render_widget(Paragraph::new(msg).style(theme.error()), error);
    }
}

fn render_buttons(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let submit_style = if app.form.can_submit() {
        theme.button(app.focus == Focus::Submit)
    } else {
        theme.button_disabled()
    };

    let line = Line::from(vec![
        Span::styled("[ Reset ]", theme.button(app.focus == Focus::Reset)),
        Span::raw("   "),
        Span::styled("[ Submit ]", submit_style),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .style(theme.text())
            .alignment(Alignment::Right),
        area,
    );
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let Some(record) = app.form.submitted() else {
        return;
    };
    let theme = &app.theme;

    let block = Block::default()
        .style(theme.block_style())
        .title(" Submitted Data ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        widgets::labeled_line("Name", record.name().to_string(), theme),
        widgets::labeled_line("Class", record.class_name().to_string(), theme),
        widgets::labeled_line("Percentage", record.percentage_display(), theme),
        widgets::labeled_line("Subjects", record.subjects_display(), theme),
    ];
    frame.render_widget(Paragraph::new(lines).style(theme.text()), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn filled_app() -> App {
        let mut app = App::new(Config::default());
        app.form.update_field(TextField::Name, "Ada");
        app.form.update_field(TextField::ClassName, "10th");
        app.form.update_field(TextField::Percentage, "95.5");
        app.form.toggle_subject("Maths", true);
        app.form.toggle_subject("Science", true);
        app
    }

    #[test]
    fn test_initial_screen() {
        let app = App::new(Config::default());
        let screen = draw(&app);
        assert!(screen.contains("Computer Science Project"));
        assert!(screen.contains("Student Information"));
        assert!(screen.contains("Enter your full name"));
        assert!(screen.contains("[ ] Computer Science"));
        assert!(!screen.contains("Submitted Data"));
        assert!(!screen.contains("Please fill all required fields"));
    }

    #[test]
    fn test_failed_submit_shows_errors() {
        let mut app = App::new(Config::default());
        app.form.submit().unwrap_err();
        let screen = draw(&app);
        assert!(screen.contains("Please fill all required fields"));
        assert!(screen.contains("Name is required"));
        assert!(screen.contains("Class is required"));
        assert!(screen.contains("Percentage is required"));
        assert!(screen.contains("At least one subject must be selected"));
    }

    #[test]
    fn test_success_shows_summary() {
        let mut app = filled_app();
        app.form.submit().unwrap();
        let screen = draw(&app);
        assert!(screen.contains("Form submitted successfully!"));
        assert!(screen.contains("Submitted Data"));
        assert!(screen.contains("Name: Ada"));
        assert!(screen.contains("Percentage: 95.5%"));
        assert!(screen.contains("Subjects: Science, Maths"));
    }

    #[test]
    fn test_checked_subjects_are_marked() {
        let app = filled_app();
        let screen = draw(&app);
        assert!(screen.contains("[x] Maths"));
        assert!(screen.contains("[x] Science"));
        assert!(screen.contains("[ ] Hindi"));
    }

    #[test]
    fn test_input_scroll_counts_display_width() {
        assert_eq!(input_scroll("", 20), (0, 0));
        assert_eq!(input_scroll("Ada", 20), (0, 3));
        // Two wide characters take four cells
        assert_eq!(input_scroll("日本", 20), (0, 4));
        assert_eq!(input_scroll("日本語の名前", 8), (5, 7));
        assert_eq!(input_scroll("abc", 0), (0, 0));
    }

    #[test]
    fn test_column_is_centred() {
        let app = App::new(Config::default());
        let screen = draw(&app);
        let top_border = screen
            .lines()
            .find(|line| line.contains("Student Information"))
            .unwrap();
        // 80 wide terminal, 72 wide column
        assert_eq!(top_border.chars().position(|c| c == '┌'), Some(4));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = filled_app();
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }
}
