//! Application core and key handling

use crate::config::TuiConfig;
use crate::sink::{LogSink, Submission, SubmissionSink};
use crate::state::{ContactForm, Form, FormEvent};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application state: the form, the submission sink, and transient UI bits
pub struct App {
    pub form: ContactForm,
    pub config: TuiConfig,
    sink: Box<dyn SubmissionSink>,
    pub status_message: Option<String>,
    pub last_submission: Option<Submission>,
    should_quit: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load()?;
        let sink = Box::new(LogSink::new(config.pretty_log.unwrap_or(false)));
        Ok(Self {
            form: ContactForm::new(),
            config,
            sink,
            status_message: None,
            last_submission: None,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle a key event; one discrete message per user action
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_actions = self.form.is_actions_row_active();

        match key.code {
            KeyCode::Tab => self.form.next_field(),
            KeyCode::BackTab => self.form.prev_field(),
            // Up/Down for actions row navigation
            KeyCode::Up | KeyCode::Char('k') if on_actions => self.form.prev_button(),
            KeyCode::Down | KeyCode::Char('j') if on_actions => self.form.next_button(),
            // Enter on the actions row triggers the selected button
            // Button order: 0=Submit, 1=Clear, 2=Quit
            KeyCode::Enter if on_actions => match self.form.selected_button {
                0 => self.submit_form()?,
                1 => {
                    self.form.clear();
                    self.status_message = Some("Form cleared".to_string());
                }
                2 => self.should_quit = true,
                _ => {}
            },
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form()?;
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_last_submission()?;
            }
            KeyCode::Esc => self.should_quit = true,
            // Form field input (only when not on the actions row)
            KeyCode::Char(c) if !on_actions => self.form.push_char(c),
            KeyCode::Backspace if !on_actions => self.form.backspace(),
            KeyCode::Enter if !on_actions => self.form.insert_newline(),
            _ => {}
        }
        Ok(())
    }

    /// Emit the current mapping to the sink. `SubmitRequested` is an
    /// identity transition, so re-submitting without edits emits the
    /// same mapping again.
    fn submit_form(&mut self) -> Result<()> {
        self.form.apply(&FormEvent::SubmitRequested);
        let submission = self.sink.submit(&self.form.data)?;
        self.status_message = Some(format!("Submitted at {}", submission.at.format("%H:%M:%S")));
        self.last_submission = Some(submission);
        Ok(())
    }

    fn copy_last_submission(&mut self) -> Result<()> {
        let payload = self.last_submission.as_ref().map(|s| s.payload.clone());
        match payload {
            Some(payload) => {
                self.copy_to_clipboard(&payload)?;
                self.status_message = Some("Submission copied to clipboard".to_string());
            }
            None => {
                self.status_message = Some("Nothing submitted yet".to_string());
            }
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
