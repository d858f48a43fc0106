use crate::presentation::formatters::format_thousands;
use ccconv_engine::TokenTally;
use std::fmt;

pub struct TokenUsageView {
    hours: u32,
    tally: TokenTally,
}

impl TokenUsageView {
    pub fn new(hours: u32, tally: TokenTally) -> Self {
        Self { hours, tally }
    }
}

impl fmt::Display for TokenUsageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let usage = &self.tally.usage;
        writeln!(f, "Token usage in the last {} hours:", self.hours)?;
        writeln!(f, "  Input:        {}", format_thousands(usage.input_tokens))?;
        writeln!(f, "  Output:       {}", format_thousands(usage.output_tokens))?;
        writeln!(
            f,
            "  Cache create: {}",
            format_thousands(usage.cache_creation_input_tokens)
        )?;
        writeln!(
            f,
            "  Cache read:   {}",
            format_thousands(usage.cache_read_input_tokens)
        )?;
        writeln!(f, "  Records:      {}", format_thousands(self.tally.records as u64))
    }
}
