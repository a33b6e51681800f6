//! Code fence tracking.
//!
//! Directive syntax inside fenced code blocks is literal text: a C++ example
//! full of `::` must reach the code block untouched.

/// An open fence: its marker character and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence {
    marker: char,
    len: usize,
}

/// Tracks code fence state during line-by-line processing.
///
/// A closing fence uses the same marker as the opening one, is at least as
/// long, and carries nothing but whitespace after the marker run.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<Fence>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Check if currently inside a fenced code block.
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed one line. Returns `true` if the line opened or closed a fence.
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        let Some(run) = fence_run(trimmed) else {
            return false;
        };

        match self.open {
            Some(open) => {
                let closes = run.marker == open.marker
                    && run.len >= open.len
                    && trimmed[run.len..].trim().is_empty();
                if closes {
                    self.open = None;
                }
                closes
            }
            None => {
                self.open = Some(run);
                true
            }
        }
    }
}

/// Detect a run of three or more backticks or tildes at the start of a line.
fn fence_run(trimmed: &str) -> Option<Fence> {
    let marker = trimmed.chars().next().filter(|&c| c == '`' || c == '~')?;
    let len = trimmed.chars().take_while(|&c| c == marker).count();
    (len >= 3).then_some(Fence { marker, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fence_initially() {
        assert!(!FenceTracker::new().in_fence());
    }

    #[test]
    fn test_backtick_fence() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.update("```cpp"));
        assert!(tracker.in_fence());
        assert!(!tracker.update("auto s = fs::basic_fixed_string{\"abc\"};"));
        assert!(tracker.in_fence());
        assert!(tracker.update("```"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_tilde_fence() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.update("~~~"));
        assert!(tracker.in_fence());
        assert!(tracker.update("~~~~"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_shorter_fence_not_closing() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.update("````"));
        assert!(!tracker.update("```"));
        assert!(tracker.in_fence());
        assert!(tracker.update("````"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_mixed_fence_chars() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.update("```"));
        assert!(!tracker.update("~~~"));
        assert!(tracker.in_fence());
    }

    #[test]
    fn test_closing_fence_with_info_does_not_close() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.update("```cpp"));
        assert!(!tracker.update("```cpp"));
        assert!(tracker.in_fence());
    }

    #[test]
    fn test_indented_fence_and_trailing_whitespace() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.update("   ```cpp"));
        assert!(tracker.update("  ```  "));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_regular_lines() {
        let mut tracker = FenceTracker::new();

        assert!(!tracker.update(":::overloads"));
        assert!(!tracker.update("``inline code``"));
        assert!(!tracker.in_fence());
    }
}
