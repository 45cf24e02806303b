//! The editor: session, keybindings, prompt and status line glued together
//!
//! Key events come in through [`Editor::handle_key`]. While a prompt is
//! open it gets every key (see `input_dispatch`); otherwise the key is
//! resolved to an [`Action`] and run through [`Editor::handle_action`].

mod file_actions;
mod input_dispatch;
mod prompt_actions;
mod undo_actions;

use crate::action::Action;
use crate::config::Config;
use crate::keybindings::KeybindingResolver;
use crate::model::buffer::closing_bracket;
use crate::model::search::SearchMatch;
use crate::session::EditorSession;
use crate::view::prompt::{Prompt, PromptType};
use crate::view::theme::Theme;
use crate::view::ui::{StatusBarRenderer, TextAreaRenderer};
use crate::view::viewport::Viewport;
use anyhow::Result as AnyhowResult;
use crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;
use std::path::{Path, PathBuf};

pub struct Editor {
    config: Config,
    session: EditorSession,
    keybindings: KeybindingResolver,
    theme: Theme,
    viewport: Viewport,

    /// Open minibuffer, if any
    prompt: Option<Prompt>,
    status_message: Option<String>,

    /// Needle of the last search, reused by find-next
    last_search: Option<String>,
    /// Last search hit, highlighted until the text changes
    last_match: Option<SearchMatch>,

    /// Relative paths typed into prompts resolve against this
    working_dir: PathBuf,
    should_quit: bool,
}

impl Editor {
    pub fn new(config: Config) -> Self {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_working_dir(config, working_dir)
    }

    pub fn with_working_dir(config: Config, working_dir: PathBuf) -> Self {
        let session = EditorSession::from_config(&config.editor);
        let keybindings = KeybindingResolver::new(&config);
        let theme = Theme::from_name(&config.theme);
        tracing::debug!(
            "Editor created: history {:?} x{}, theme {}, working dir {}",
            config.editor.history_mode,
            config.editor.history_depth,
            theme.name,
            working_dir.display()
        );
        Self {
            config,
            session,
            keybindings,
            theme,
            viewport: Viewport::default(),
            prompt: None,
            status_message: None,
            last_search: None,
            last_match: None,
            working_dir,
            should_quit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn is_prompting(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Status: {}", message);
        self.status_message = Some(message);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Window title: "<file name> - Text Editor"
    pub fn title(&self) -> String {
        self.session.title()
    }

    /// Handle a key press.
    ///
    /// Errors from the action are reported in the status bar rather than
    /// returned, so a failed save never takes the editor down.
    pub fn handle_key(&mut self, event: KeyEvent) {
        if self.dispatch_modal_input(&event).is_some() {
            return;
        }

        let Some(action) = self.keybindings.resolve(&event) else {
            tracing::trace!("Unbound key: {:?}", event);
            return;
        };
        if let Err(e) = self.handle_action(action) {
            tracing::warn!("{:?} failed: {:#}", action, e);
            self.set_status_message(format!("Error: {e:#}"));
        }
    }

    /// Insert pasted text. A paste into the buffer is a single undo step;
    /// a paste into the prompt keeps only the first line.
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(prompt) = &mut self.prompt {
            if prompt.prompt_type.is_confirmation() {
                return;
            }
            for c in text.lines().next().unwrap_or_default().chars() {
                prompt.insert_char(c);
            }
            return;
        }

        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        if self.session.edit(|buffer| buffer.insert_str(&text)) {
            self.last_match = None;
        }
    }

    /// The command table: run one action against the editor.
    pub fn handle_action(&mut self, action: Action) -> AnyhowResult<()> {
        if action.is_edit() {
            self.last_match = None;
        }

        match action {
            Action::InsertChar(c) => {
                let auto_close = self.config.editor.auto_close_brackets;
                self.session.edit(|buffer| match closing_bracket(c) {
                    Some(_) if auto_close => buffer.insert_bracket_pair(c),
                    _ => buffer.insert_char(c),
                });
            }
            Action::InsertNewline => {
                self.session.edit(|buffer| buffer.insert_newline());
            }
            Action::InsertTab => {
                let spaces = " ".repeat(self.config.editor.tab_size);
                self.session.edit(|buffer| buffer.insert_str(&spaces));
            }
            Action::DeleteBackward => {
                self.session.edit(|buffer| {
                    buffer.delete_backward();
                });
            }
            Action::DeleteForward => {
                self.session.edit(|buffer| {
                    buffer.delete_forward();
                });
            }

            Action::MoveLeft => self.session.cursor_mut().move_left(),
            Action::MoveRight => self.session.cursor_mut().move_right(),
            Action::MoveUp => self.session.cursor_mut().move_up(),
            Action::MoveDown => self.session.cursor_mut().move_down(),
            Action::MoveLineStart => self.session.cursor_mut().move_line_start(),
            Action::MoveLineEnd => self.session.cursor_mut().move_line_end(),
            Action::MoveDocumentStart => self.session.cursor_mut().move_document_start(),
            Action::MoveDocumentEnd => self.session.cursor_mut().move_document_end(),

            Action::Undo => self.handle_undo(),
            Action::Redo => self.handle_redo(),

            Action::Find => self.start_find(),
            Action::FindNext => self.find_next(),
            Action::Replace => self.start_replace(),

            Action::Save => self.save()?,
            Action::SaveAs => self.start_save_as(),
            Action::NewFile => self.new_file(),
            Action::OpenFile => self.start_open(),
            Action::ShowPath => self.show_path(),
            Action::Quit => self.quit(),
        }
        Ok(())
    }

    /// Draw the whole editor: text area, status bar and the prompt line
    /// when a prompt is open.
    pub fn render(&mut self, frame: &mut Frame) {
        let prompt_height = u16::from(self.prompt.is_some());
        let [text_area, status_area, prompt_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(prompt_height),
        ])
        .areas(frame.area());

        let highlight = self.last_match.map(|found| found.offset..found.end());
        TextAreaRenderer::render(
            frame,
            text_area,
            self.session.buffer(),
            &mut self.viewport,
            highlight,
            self.config.editor.line_numbers,
            &self.theme,
        );
        StatusBarRenderer::render_status_bar(
            frame,
            status_area,
            &self.session,
            self.status_message.as_deref(),
            &self.theme,
        );

        // Rendered last so the terminal cursor ends up in the prompt
        if let Some(prompt) = &self.prompt {
            StatusBarRenderer::render_prompt(frame, prompt_area, prompt, &self.theme);
        }
    }

    /// Resolve a path typed by the user: `~` expands to the home
    /// directory, relative paths are taken from the working directory.
    fn resolve_path(&self, input: &str) -> PathBuf {
        let input = input.trim();
        let expanded = match input.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => dirs::home_dir()
                .map(|home| home.join(rest.trim_start_matches('/')))
                .unwrap_or_else(|| PathBuf::from(input)),
            _ => PathBuf::from(input),
        };
        if expanded.is_absolute() {
            expanded
        } else {
            self.working_dir.join(expanded)
        }
    }

    /// Open `path` on startup (the FILE argument). A missing file becomes
    /// the path of an empty buffer so that saving creates it.
    pub fn open_initial_file(&mut self, path: &Path) -> AnyhowResult<()> {
        let path = self.resolve_path(&path.to_string_lossy());
        if path.exists() {
            self.session.open(&path)?;
            self.set_status_message(format!("Opened {}", path.display()));
        } else {
            tracing::info!("{} does not exist yet", path.display());
            self.session.set_current_path(Some(path.clone()));
            self.set_status_message(format!("New file {}", path.display()));
        }
        Ok(())
    }
}
