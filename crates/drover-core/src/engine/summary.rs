//! Engine run outcome

use std::time::Duration;

/// Outcome of a single engine run.
///
/// The original tooling this replaces discarded the engine's result; drover
/// surfaces it so callers can report status and map failures to a nonzero
/// exit.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Whether the engine exited successfully
    pub success: bool,
    /// Engine process exit code, if one was available
    pub exit_code: Option<i32>,
    /// Wall-clock duration of the run
    pub duration: Duration,
    /// Number of confirmation prompts that were auto-declined
    pub declined_prompts: u32,
}

impl RunSummary {
    /// Check if the engine run completed successfully
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Short status description suitable for display
    pub fn status_message(&self) -> &'static str {
        if self.success {
            "completed"
        } else {
            "failed"
        }
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Engine run {} in {:.1}s ({} prompt(s) auto-declined)",
            self.status_message(),
            self.duration.as_secs_f64(),
            self.declined_prompts
        )?;
        if let Some(code) = self.exit_code {
            if !self.success {
                write!(f, ", exit code {}", code)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_success() {
        let summary = RunSummary {
            success: true,
            exit_code: Some(0),
            duration: Duration::from_millis(2500),
            declined_prompts: 1,
        };
        let line = summary.to_string();
        assert!(line.contains("completed"));
        assert!(line.contains("2.5s"));
        assert!(line.contains("1 prompt(s) auto-declined"));
    }

    #[test]
    fn test_display_failure_includes_exit_code() {
        let summary = RunSummary {
            success: false,
            exit_code: Some(2),
            duration: Duration::from_secs(1),
            declined_prompts: 0,
        };
        let line = summary.to_string();
        assert!(line.contains("failed"));
        assert!(line.contains("exit code 2"));
    }
}
