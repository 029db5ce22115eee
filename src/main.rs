//! student-form - Student information form for the terminal
//!
//! Collects name, class, percentage and subjects, validates them on submit
//! and shows what was submitted.
//!
//! Usage: student-form [--json] [--help] [--version]

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use student_form::app::App;
use student_form::form::SubmittedRecord;
use student_form::{config, logging, ui};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("student-form {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let print_json = args.iter().any(|a| a == "--json");

    match run_app() {
        Ok(record) if print_json => {
            if let Some(json) = json_output(record.as_ref())? {
                println!("{}", json);
            }
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Text printed for `--json`: the record as pretty JSON, nothing without one
fn json_output(record: Option<&SubmittedRecord>) -> Result<Option<String>> {
    record
        .map(|r| serde_json::to_string_pretty(r).context("Failed to serialize submitted data"))
        .transpose()
}

fn print_help() {
    println!(
        r#"student-form - Student information form

USAGE:
    student-form [OPTIONS]

OPTIONS:
    --json           Print the last submitted record as JSON on exit
    -h, --help       Print help information
    -v, --version    Print version information

KEYBINDINGS:
    Tab / Down       Next field
    Shift+Tab / Up   Previous field
    Left / Right     Move within subjects
    Space            Toggle subject
    Enter / Ctrl+S   Submit
    Ctrl+R           Reset
    F2               Cycle theme
    Esc / Ctrl+C     Quit

CONFIG:
    ~/.config/student-form/config.toml
"#
    );
}

/// Run the UI until the user quits. Returns the last submitted record.
fn run_app() -> Result<Option<SubmittedRecord>> {
    let config = config::Config::load().context("Failed to load configuration")?;
    logging::init(&config).context("Failed to set up logging")?;

    let mut app = App::new(config);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Restore the terminal before the default hook prints the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        let _ = execute!(std::io::stdout(), crossterm::cursor::Show);
        original_hook(info);
    }));

    let result = main_loop(&mut terminal, &mut app);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result?;
    Ok(app.form.submitted().cloned())
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use student_form::form::FormState;
    use student_form::types::TextField;

    #[test]
    fn test_json_output_matches_record() {
        let mut form = FormState::new();
        form.update_field(TextField::Name, "Ada");
        form.update_field(TextField::ClassName, "10th");
        form.update_field(TextField::Percentage, "95.5");
        form.toggle_subject("Science", true);
        form.toggle_subject("Maths", true);
        form.submit().unwrap();

        let text = json_output(form.submitted()).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada",
                "className": "10th",
                "percentage": "95.5",
                "subjects": ["Science", "Maths"],
            })
        );
        // Pretty printed, one key per line
        assert!(text.contains("\n  \"name\": \"Ada\""));
    }

    #[test]
    fn test_json_output_without_record() {
        assert_eq!(json_output(None).unwrap(), None);
    }
}
