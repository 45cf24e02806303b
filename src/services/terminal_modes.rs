//! Terminal mode management
//!
//! Raw mode, the alternate screen, keyboard enhancement flags and
//! bracketed paste. `TerminalModes` remembers which ones were turned on so
//! that `undo()` restores exactly those.

use anyhow::Result;
use crossterm::{
    event::{
        DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
    ExecutableCommand,
};
use std::io::{stdout, Write};

/// Tracks which terminal modes have been enabled and provides cleanup.
#[derive(Debug, Default)]
pub struct TerminalModes {
    raw_mode: bool,
    alternate_screen: bool,
    keyboard_enhancement: bool,
    bracketed_paste: bool,
}

impl TerminalModes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable every mode the editor uses.
    ///
    /// Raw mode and the alternate screen are required; on failure anything
    /// already enabled is undone. The rest are best effort.
    pub fn enable() -> Result<Self> {
        let mut modes = Self::new();

        if let Err(e) = enable_raw_mode() {
            tracing::error!("Failed to enable raw mode: {}", e);
            return Err(e.into());
        }
        modes.raw_mode = true;
        tracing::debug!("Enabled raw mode");

        // Lets terminals report Ctrl+Alt chords and Esc unambiguously
        match supports_keyboard_enhancement() {
            Ok(true) => {
                let flags = KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES;
                if let Err(e) = stdout().execute(PushKeyboardEnhancementFlags(flags)) {
                    tracing::warn!("Failed to enable keyboard enhancement: {}", e);
                } else {
                    modes.keyboard_enhancement = true;
                    tracing::debug!("Enabled keyboard enhancement flags: {:?}", flags);
                }
            }
            Ok(false) => tracing::info!("Keyboard enhancement not supported by terminal"),
            Err(e) => tracing::warn!("Failed to query keyboard enhancement support: {}", e),
        }

        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            tracing::error!("Failed to enter alternate screen: {}", e);
            modes.undo();
            return Err(e.into());
        }
        modes.alternate_screen = true;
        tracing::debug!("Entered alternate screen");

        if let Err(e) = stdout().execute(EnableBracketedPaste) {
            tracing::warn!("Failed to enable bracketed paste: {}", e);
        } else {
            modes.bracketed_paste = true;
            tracing::debug!("Enabled bracketed paste mode");
        }

        Ok(modes)
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn undo(&mut self) {
        if self.bracketed_paste {
            let _ = stdout().execute(DisableBracketedPaste);
            self.bracketed_paste = false;
            tracing::debug!("Disabled bracketed paste");
        }

        if self.keyboard_enhancement {
            let _ = stdout().execute(PopKeyboardEnhancementFlags);
            self.keyboard_enhancement = false;
            tracing::debug!("Popped keyboard enhancement flags");
        }

        // Raw mode goes before leaving the alternate screen
        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
            tracing::debug!("Disabled raw mode");
        }

        if self.alternate_screen {
            let _ = stdout().execute(LeaveAlternateScreen);
            self.alternate_screen = false;
            tracing::debug!("Left alternate screen");
        }

        let _ = stdout().flush();
    }

    pub fn raw_mode_enabled(&self) -> bool {
        self.raw_mode
    }

    pub fn alternate_screen_enabled(&self) -> bool {
        self.alternate_screen
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}

/// Unconditionally restore terminal state without tracking.
///
/// For panic hooks, which have no access to the `TerminalModes` instance.
pub fn emergency_cleanup() {
    let _ = stdout().execute(DisableBracketedPaste);
    let _ = stdout().execute(PopKeyboardEnhancementFlags);
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = stdout().flush();
}
