use resume_core::{ReconcileReport, Session};

pub struct TableFormatter {
    name_width: usize,
    status_width: usize,
}

impl TableFormatter {
    pub fn new(sessions: &[Session]) -> Self {
        let name_width = sessions
            .iter()
            .map(|s| s.name.len())
            .max()
            .unwrap_or(4)
            .clamp(4, 50); // Between "Name" header min and reasonable terminal width max

        Self {
            name_width,
            status_width: 8,
        }
    }

    pub fn print_table(&self, sessions: &[Session]) {
        println!(
            "┌{}┬{}┐",
            "─".repeat(self.name_width + 2),
            "─".repeat(self.status_width + 2)
        );
        println!(
            "│ {:<name_w$} │ {:<status_w$} │",
            "Name",
            "Status",
            name_w = self.name_width,
            status_w = self.status_width
        );
        println!(
            "├{}┼{}┤",
            "─".repeat(self.name_width + 2),
            "─".repeat(self.status_width + 2)
        );
        for session in sessions {
            let status = if session.attached {
                "attached"
            } else {
                "detached"
            };
            println!(
                "│ {:<name_w$} │ {:<status_w$} │",
                truncate(&session.name, self.name_width),
                status,
                name_w = self.name_width,
                status_w = self.status_width
            );
        }
        println!(
            "└{}┴{}┘",
            "─".repeat(self.name_width + 2),
            "─".repeat(self.status_width + 2)
        );
    }
}

/// Print one line per session outcome, with the error for failed ones.
pub fn print_report(report: &ReconcileReport) {
    for outcome in &report.outcomes {
        match &outcome.error {
            None => println!("  {}  {}", outcome.name, outcome.action),
            Some(error) => println!("  {}  failed: {}", outcome.name, error),
        }
    }
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
