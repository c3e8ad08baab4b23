//! Application state and core logic

use crate::collector::{self, CollectorApi, CollectorClient, SubmissionPayload};
use crate::config::FormConfig;
use crate::state::{
    reduce, FocusState, FocusTarget, FormAction, FormState, Gender, TextField, Toast,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

/// Result of one spawned submission
#[derive(Debug)]
pub struct SubmitOutcome {
    /// Sequence number assigned when the submission was sent
    pub id: u64,
    pub result: collector::Result<serde_json::Value>,
}

/// Counters kept for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionStats {
    pub sent: u64,
    pub succeeded: u64,
    pub failed: u64,
}

/// Main application struct
pub struct App {
    /// Form record, edited only through [`App::dispatch`]
    pub form: FormState,
    /// Keyboard focus
    pub focus: FocusState,
    /// Success toast, if visible
    pub toast: Option<Toast>,
    pub stats: SubmissionStats,
    collector: Arc<dyn CollectorApi>,
    outcome_tx: UnboundedSender<SubmitOutcome>,
    outcome_rx: UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App posting to the configured collector
    pub fn new(config: &FormConfig) -> Result<Self> {
        let client = CollectorClient::new(config)?;
        info!("Submissions will be posted to {}", client.url());
        Ok(Self::with_collector(Arc::new(client)))
    }

    /// Create an App around any collector implementation
    pub fn with_collector(collector: Arc<dyn CollectorApi>) -> Self {
        let (outcome_tx, outcome_rx) = unbounded_channel();
        Self {
            form: FormState::new(),
            focus: FocusState::default(),
            toast: None,
            stats: SubmissionStats::default(),
            collector,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Run an action through the reducer
    pub fn dispatch(&mut self, action: FormAction) {
        let state = std::mem::take(&mut self.form);
        self.form = reduce(state, action);
    }

    /// Send the current form to the collector without waiting for the reply.
    ///
    /// Every call spawns its own request; nothing stops a second submit
    /// while the first is still in flight. Returns the submission id.
    pub fn submit(&mut self) -> u64 {
        self.stats.sent += 1;
        let id = self.stats.sent;
        let payload = SubmissionPayload::from_state(&self.form);
        info!("Submission {id} sent");
        if !self.form.skills.is_empty() {
            let skills: Vec<&str> = self.form.skills.iter().map(|s| s.value()).collect();
            debug!("Selected skills are not part of the payload: {skills:?}");
        }

        let collector = Arc::clone(&self.collector);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = collector.submit(&payload).await;
            // The receiver lives as long as the App
            let _ = tx.send(SubmitOutcome { id, result });
        });

        id
    }

    /// Apply every submission outcome that has arrived so far
    pub fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Apply one submission outcome. Failures are logged and otherwise
    /// leave the form untouched.
    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        match outcome.result {
            Ok(data) => {
                self.stats.succeeded += 1;
                info!("Submission {} succeeded", outcome.id);
                debug!("Collector response: {data}");
                self.dispatch(FormAction::MarkSubmitted);
                self.toast = Some(Toast::submitted());
            }
            Err(err) => {
                self.stats.failed += 1;
                error!("Submission {} failed: {err}", outcome.id);
            }
        }
    }

    /// Hide the toast once it has been up long enough
    pub fn update_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.dismiss_toast();
        }
    }

    fn dismiss_toast(&mut self) {
        self.toast = None;
        self.dispatch(FormAction::DismissNotification);
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let submit_modifier = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER);
        // Up/Down stay inside a multiline field instead of moving focus
        let in_multiline = matches!(
            self.focus.current(),
            FocusTarget::Text(field) if field.is_multiline()
        );

        match key.code {
            KeyCode::Esc if self.toast.is_some() => self.dismiss_toast(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if submit_modifier => {
                self.submit();
            }
            KeyCode::Tab => self.focus.next(),
            KeyCode::BackTab => self.focus.prev(),
            KeyCode::Down if !in_multiline => self.focus.next(),
            KeyCode::Up if !in_multiline => self.focus.prev(),
            _ => match self.focus.current() {
                FocusTarget::Text(field) => self.handle_text_key(field, key),
                FocusTarget::Gender => self.handle_gender_key(key),
                FocusTarget::Education => self.handle_education_key(key),
                FocusTarget::Skills => self.handle_skills_key(key),
                FocusTarget::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit();
                    }
                }
            },
        }
    }

    fn handle_text_key(&mut self, field: TextField, key: KeyEvent) {
        let is_shortcut = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
        let current = self.form.values.get(field);
        let value = match key.code {
            KeyCode::Char(c) if !is_shortcut && field.accepts(c) => format!("{current}{c}"),
            KeyCode::Backspace => {
                let mut value = current.to_string();
                value.pop();
                value
            }
            KeyCode::Enter if field.is_multiline() => format!("{current}\n"),
            KeyCode::Enter => {
                self.focus.next();
                return;
            }
            _ => return,
        };
        self.dispatch(FormAction::EditField { field, value });
    }

    fn handle_gender_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                let gender = self.form.gender.toggle();
                self.dispatch(FormAction::SetGender(gender));
            }
            KeyCode::Char('f') => self.dispatch(FormAction::SetGender(Gender::Female)),
            KeyCode::Char('m') => self.dispatch(FormAction::SetGender(Gender::Male)),
            KeyCode::Enter => self.focus.next(),
            _ => {}
        }
    }

    fn handle_education_key(&mut self, key: KeyEvent) {
        let level = self.form.values.educational_level;
        match key.code {
            KeyCode::Left => self.dispatch(FormAction::SelectEducation(level.prev())),
            KeyCode::Right | KeyCode::Char(' ') => {
                self.dispatch(FormAction::SelectEducation(level.next()))
            }
            KeyCode::Enter => self.focus.next(),
            _ => {}
        }
    }

    fn handle_skills_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.focus.prev_skill(),
            KeyCode::Right => self.focus.next_skill(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                let skill = self.focus.skill_cursor();
                self.dispatch(FormAction::ToggleSkill(skill));
            }
            _ => {}
        }
    }
}
