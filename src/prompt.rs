//! Blocking Dialogs
//!
//! Confirmation before an unregister and the alert shown when it fails.

/// Blocking confirm/alert dialogs
pub trait Prompter {
    /// Ask a yes/no question. `false` aborts the pending action.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

impl<T: Prompter + ?Sized> Prompter for &T {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

/// Terminal dialogs on stdin/stderr
#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter {
    /// Answer every confirmation with yes without reading stdin
    pub assume_yes: bool,
}

#[cfg(feature = "native")]
impl TerminalPrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

#[cfg(feature = "native")]
impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> bool {
        use std::io::{BufRead, Write};

        if self.assume_yes {
            return true;
        }

        eprint!("{} [y/N] ", message);
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }

    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}

#[cfg(feature = "native")]
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
