// Drives an Editor over ratatui's TestBackend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use scribe::app::Editor;
use scribe::config::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct EditorTestHarness {
    editor: Editor,
    terminal: Terminal<TestBackend>,
    /// Working directory for relative paths typed into prompts
    temp_dir: TempDir,
}

impl EditorTestHarness {
    pub fn new(width: u16, height: u16) -> anyhow::Result<Self> {
        Self::with_config(width, height, Config::default())
    }

    pub fn with_config(width: u16, height: u16, config: Config) -> anyhow::Result<Self> {
        super::tracing::init_tracing_from_env();
        let temp_dir = tempfile::tempdir()?;
        let editor = Editor::with_working_dir(config, temp_dir.path().to_path_buf());
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let mut harness = Self {
            editor,
            terminal,
            temp_dir,
        };
        harness.render()?;
        Ok(harness)
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// The buffer text
    pub fn text(&self) -> &str {
        self.editor.session().text()
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn temp_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Send one key and re-render
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<()> {
        self.editor.handle_key(KeyEvent::new(code, modifiers));
        self.render()
    }

    pub fn send_ctrl(&mut self, c: char) -> anyhow::Result<()> {
        self.send_key(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Type text one key at a time, the way a user would
    pub fn type_text(&mut self, text: &str) -> anyhow::Result<()> {
        for c in text.chars() {
            let event = match c {
                '\n' => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                c if c.is_ascii_uppercase() => KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT),
                c => KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
            };
            self.editor.handle_key(event);
        }
        self.render()
    }

    /// Type into a prompt and press Enter
    pub fn answer_prompt(&mut self, text: &str) -> anyhow::Result<()> {
        self.type_text(text)?;
        self.send_key(KeyCode::Enter, KeyModifiers::NONE)
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let editor = &mut self.editor;
        self.terminal.draw(|frame| editor.render(frame))?;
        Ok(())
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Screen contents, one line per row
    pub fn screen_to_string(&self) -> String {
        let buffer = self.buffer();
        let mut result = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                result.push_str(buffer[(x, y)].symbol());
            }
            result.push('\n');
        }
        result
    }

    pub fn screen_row(&self, y: u16) -> String {
        let buffer = self.buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen to not contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn status_message(&self) -> Option<&str> {
        self.editor.status_message()
    }

    pub fn cursor_position(&mut self) -> (u16, u16) {
        let position = self
            .terminal
            .get_cursor_position()
            .expect("TestBackend always reports a cursor");
        (position.x, position.y)
    }
}
