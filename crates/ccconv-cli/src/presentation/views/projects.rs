use crate::presentation::formatters::{format_thousands, time};
use ccconv_engine::ProjectSummary;
use std::fmt;

/// Detailed per-project listing followed by a grand total
pub struct ProjectListView<'a> {
    summaries: &'a [ProjectSummary],
}

impl<'a> ProjectListView<'a> {
    pub fn new(summaries: &'a [ProjectSummary]) -> Self {
        Self { summaries }
    }
}

impl fmt::Display for ProjectListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.summaries.is_empty() {
            return writeln!(f, "No projects found");
        }

        writeln!(f, "Projects:")?;
        writeln!(f)?;

        for summary in self.summaries {
            writeln!(f, "📁 {}", summary.name)?;
            writeln!(f, "   📊 Files: {}", summary.file_count)?;
            writeln!(f, "   📅 Last update: {}", time::format_local(summary.last_update))?;
            writeln!(
                f,
                "   💬 Messages: {}",
                format_thousands(summary.total_messages as u64)
            )?;
            writeln!(
                f,
                "   🎯 Tokens: input={}, output={}",
                format_thousands(summary.input_tokens),
                format_thousands(summary.output_tokens)
            )?;
            if let Some(cwd) = &summary.cwd {
                writeln!(f, "   📂 Working directory: {}", cwd)?;
            }
            if let Some(branch) = &summary.git_branch {
                writeln!(f, "   🌿 Git branch: {}", branch)?;
            }
            writeln!(
                f,
                "   ⏱️  Session: {}",
                time::format_date_range(summary.session_start, summary.session_end)
            )?;
            writeln!(f)?;
        }

        let messages: usize = self.summaries.iter().map(|s| s.total_messages).sum();
        let tokens: u64 = self.summaries.iter().map(|s| s.total_tokens).sum();
        writeln!(
            f,
            "Total: {} projects, {} messages, {} tokens",
            self.summaries.len(),
            format_thousands(messages as u64),
            format_thousands(tokens)
        )
    }
}

/// `<short-name> 💬<messages> ⏱️<period> 📅<last update>` per project
pub struct OneLineView<'a> {
    summaries: &'a [ProjectSummary],
}

impl<'a> OneLineView<'a> {
    pub fn new(summaries: &'a [ProjectSummary]) -> Self {
        Self { summaries }
    }
}

impl fmt::Display for OneLineView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.summaries.is_empty() {
            return writeln!(f, "No projects found");
        }

        for summary in self.summaries {
            writeln!(
                f,
                "{} 💬{} ⏱️{} 📅{}",
                summary.short_name(),
                format_thousands(summary.total_messages as u64),
                time::format_period(summary.session_start, summary.session_end),
                time::format_slash(summary.last_update)
            )?;
        }
        Ok(())
    }
}
