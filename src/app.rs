//! Application state and core logic

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::import;
use crate::platform::PRIMARY_MODIFIER;
use crate::state::{
    AppState, AutoSaveDebouncer, FieldId, SaveStatus, View, IMPORT_BUTTON, SUBMIT_BUTTON,
};
use crate::storage::{self, SnapshotStore};
use crate::submit::CampaignSubmitter;
use crate::validation::{self, ValidationErrors};

/// How long the event loop waits for input when no auto-save is pending
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Snapshot storage for the in-progress draft
    store: Box<dyn SnapshotStore>,
    /// Where validated campaigns are sent
    submitter: Box<dyn CampaignSubmitter>,
    /// Announce successful auto-saves with a toast
    autosave_toasts: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance, restoring any persisted draft.
    ///
    /// The snapshot is read exactly once, here. Malformed or unreadable
    /// snapshots fall back to a fresh draft. Restoring does not arm the
    /// auto-save debouncer; only user edits do.
    #[allow(clippy::field_reassign_with_default)]
    pub fn new(
        config: &AppConfig,
        store: Box<dyn SnapshotStore>,
        submitter: Box<dyn CampaignSubmitter>,
    ) -> Self {
        let mut state = AppState::default();
        state.autosave = AutoSaveDebouncer::new(config.autosave_quiet_period());

        if let Some(draft) = storage::load_draft(store.as_ref()) {
            info!("restored draft from snapshot");
            state.draft = draft;
        }

        Self {
            state,
            store,
            submitter,
            autosave_toasts: config.autosave_toasts(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Cancel any pending auto-save; called before the terminal unwinds
    pub fn teardown(&mut self) {
        if self.state.autosave.is_armed() {
            debug!("teardown cancelled a pending auto-save");
        }
        self.state.autosave.cancel();
    }

    /// Poll timeout for the event loop, capped so a due auto-save never
    /// waits behind a long poll
    pub fn next_poll_timeout(&self) -> Duration {
        match self.state.autosave.time_until_fire(Instant::now()) {
            Some(remaining) => IDLE_POLL.min(remaining),
            None => IDLE_POLL,
        }
    }

    /// Timer maintenance between input events
    pub fn on_tick(&mut self) {
        let now = Instant::now();
        if self.state.autosave.fire_due(now) {
            self.autosave_now();
        }
        self.state.toasts.prune(now);
    }

    /// Record a draft mutation: dirty status plus a fresh auto-save deadline
    fn mark_draft_edited(&mut self) {
        self.state.save_status = SaveStatus::Dirty;
        self.state.autosave.record_change(Instant::now());
    }

    /// Persist the draft once the quiet period has elapsed.
    ///
    /// Fire-and-forget: a failed write logs a warning, skips the toast, and
    /// leaves the status dirty. The next edit arms a fresh attempt.
    fn autosave_now(&mut self) {
        match storage::save_draft(self.store.as_ref(), &self.state.draft) {
            Ok(()) => {
                self.state.save_status = SaveStatus::Saved;
                debug!("draft auto-saved");
                if self.autosave_toasts {
                    self.state.toasts.push(
                        "Auto-saved",
                        "Your changes have been automatically saved.",
                    );
                }
            }
            Err(err) => warn!("auto-save failed: {err:#}"),
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Form => self.handle_form_key(key).await?,
            View::ImportCsv => self.handle_import_key(key),
        }

        Ok(())
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        // Check if we're on the action panel (past the last field)
        let on_action_panel = self.state.on_buttons_row();

        match key.code {
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            // Up/Down for action panel navigation
            KeyCode::Up | KeyCode::Char('k') if on_action_panel => self.state.prev_button(),
            KeyCode::Down | KeyCode::Char('j') if on_action_panel => self.state.next_button(),
            // Enter on action panel triggers selected button
            KeyCode::Enter if on_action_panel => match self.state.selected_button {
                SUBMIT_BUTTON => self.submit_campaign().await,
                IMPORT_BUTTON => self.open_import(),
                _ => {}
            },
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_campaign().await;
            }
            KeyCode::Char('s') if key.modifiers.contains(PRIMARY_MODIFIER) => {
                self.submit_campaign().await;
            }
            KeyCode::Char('o')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(PRIMARY_MODIFIER) =>
            {
                self.open_import();
            }
            KeyCode::Esc => self.quit = true,
            // Form field input (only when not on action panel)
            KeyCode::Char(c) if !on_action_panel => self.insert_char(c),
            KeyCode::Backspace if !on_action_panel => self.delete_char(),
            KeyCode::Enter if !on_action_panel => {
                // Enter adds a newline only in multiline fields
                if let Some(field) = self.state.active_field_id() {
                    if field.is_multiline() {
                        self.state.draft.field_mut(field).push('\n');
                        self.mark_draft_edited();
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_import_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.import_path.clear();
                self.state.current_view = View::Form;
            }
            KeyCode::Enter => self.run_import(),
            KeyCode::Char(c) => self.state.import_path.push(c),
            KeyCode::Backspace => {
                self.state.import_path.pop();
            }
            _ => {}
        }
    }

    /// Type into the active field, clearing its stale validation message
    fn insert_char(&mut self, c: char) {
        if let Some(field) = self.state.active_field_id() {
            self.state.draft.field_mut(field).push(c);
            self.state.validation.clear_field(field);
            self.mark_draft_edited();
        }
    }

    fn delete_char(&mut self) {
        if let Some(field) = self.state.active_field_id() {
            if self.state.draft.field_mut(field).pop().is_some() {
                self.state.validation.clear_field(field);
                self.mark_draft_edited();
            }
        }
    }

    fn open_import(&mut self) {
        self.state.import_path.clear();
        self.state.current_view = View::ImportCsv;
    }

    /// Validate the draft and, only on success, hand it to the submitter
    async fn submit_campaign(&mut self) {
        match validation::validate(&self.state.draft) {
            Ok(campaign) => match self.submitter.submit(&campaign).await {
                Ok(id) => {
                    info!("campaign {:?} submitted as {id}", campaign.name);
                    self.state.validation = ValidationErrors::default();
                    self.state.toasts.push(
                        "Campaign submitted",
                        format!("\"{}\" was recorded as {id}.", campaign.name),
                    );
                }
                Err(err) => {
                    warn!("submission failed: {err:#}");
                    self.state
                        .push_error(format!("Failed to submit campaign: {err:#}"));
                }
            },
            Err(errors) => {
                debug!("validation blocked submission ({} problems)", errors.len());
                if let Some(field) = errors.first_field() {
                    self.state.focus_field(field);
                }
                self.state.validation = errors;
            }
        }
    }

    /// Parse the chosen file and, on success, replace the draft wholesale.
    ///
    /// Every failure surfaces in the error dialog and leaves the draft
    /// exactly as it was.
    fn run_import(&mut self) {
        let path = PathBuf::from(self.state.import_path.trim());
        match import::read_first_row(&path) {
            Ok(row) => {
                let ignored = row.ignored_rows;
                self.state.draft = row.into_draft();
                self.state.validation = ValidationErrors::default();
                self.mark_draft_edited();
                self.state.current_view = View::Form;
                self.state.focus_field(FieldId::Name);
                self.state.import_path.clear();
                info!("imported campaign draft from {}", path.display());

                let description = match ignored {
                    0 => "Campaign data has been imported from CSV.".to_string(),
                    1 => "Campaign data has been imported from CSV. 1 additional row was ignored."
                        .to_string(),
                    n => format!(
                        "Campaign data has been imported from CSV. {n} additional rows were ignored."
                    ),
                };
                self.state.toasts.push("CSV Imported", description);
            }
            Err(err) => {
                warn!("csv import failed: {err}");
                self.state.push_error(format!("CSV import failed: {err}"));
            }
        }
    }
}
