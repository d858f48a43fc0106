use serde::Serialize;
use serde_json::Value;
use std::ops::{Add, AddAssign};

/// Token counters from `message.usage`. Missing or non-numeric counters are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UsageStats {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cache_creation_input_tokens: u64,
    pub cache_read_input_tokens: u64,
}

impl UsageStats {
    pub fn from_value(usage: &Value) -> Self {
        Self {
            input_tokens: counter(usage, "input_tokens"),
            output_tokens: counter(usage, "output_tokens"),
            cache_creation_input_tokens: counter(usage, "cache_creation_input_tokens"),
            cache_read_input_tokens: counter(usage, "cache_read_input_tokens"),
        }
    }

    /// Input plus output, the figure reported per project
    pub fn total(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }

}

fn counter(usage: &Value, key: &str) -> u64 {
    usage.get(key).and_then(Value::as_u64).unwrap_or(0)
}

impl Add for UsageStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            input_tokens: self.input_tokens.saturating_add(rhs.input_tokens),
            output_tokens: self.output_tokens.saturating_add(rhs.output_tokens),
            cache_creation_input_tokens: self
                .cache_creation_input_tokens
                .saturating_add(rhs.cache_creation_input_tokens),
            cache_read_input_tokens: self
                .cache_read_input_tokens
                .saturating_add(rhs.cache_read_input_tokens),
        }
    }
}

impl AddAssign for UsageStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_defaults_missing_counters() {
        let usage = UsageStats::from_value(&json!({
            "input_tokens": 4,
            "output_tokens": 26,
            "cache_creation_input_tokens": 14785,
            "service_tier": "standard"
        }));
        assert_eq!(usage.input_tokens, 4);
        assert_eq!(usage.output_tokens, 26);
        assert_eq!(usage.cache_creation_input_tokens, 14785);
        assert_eq!(usage.cache_read_input_tokens, 0);
        assert_eq!(usage.total(), 30);
    }

    #[test]
    fn test_non_numeric_counter_is_zero() {
        let usage = UsageStats::from_value(&json!({"input_tokens": "12"}));
        assert_eq!(usage, UsageStats::default());
    }

    #[test]
    fn test_add() {
        let a = UsageStats {
            input_tokens: 1,
            output_tokens: 2,
            cache_creation_input_tokens: 3,
            cache_read_input_tokens: 4,
        };
        let mut b = a;
        b += a;
        assert_eq!(b.input_tokens, 2);
        assert_eq!(b.cache_read_input_tokens, 8);
    }

    #[test]
    fn test_add_saturates() {
        let huge = UsageStats {
            input_tokens: u64::MAX,
            output_tokens: 1,
            ..Default::default()
        };
        let one = UsageStats {
            input_tokens: 1,
            ..Default::default()
        };

        let sum = huge + one;
        assert_eq!(sum.input_tokens, u64::MAX);
        assert_eq!(sum.output_tokens, 1);
        assert_eq!(sum.total(), u64::MAX);
    }
}
