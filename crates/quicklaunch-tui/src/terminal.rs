//! Raw-mode session for the palette UI.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;

/// Puts the terminal into raw mode on the alternate screen and restores it on drop,
/// including when setup fails halfway or the UI loop panics.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be entered.
    /// Anything already switched on is switched back off first.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_tty_does_not_panic() {
        // No raw mode was enabled here; restoring must still be safe
        drop(TerminalGuard { _private: () });
    }

    #[test]
    fn test_restore_runs_during_unwind() {
        let result = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard { _private: () };
            panic!("ui loop failed");
        });
        assert!(result.is_err());
    }
}
