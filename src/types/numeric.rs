use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Drops non-finite values. Every numeric field read from the backend goes through this.
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Accepts a number, `null`, or a numeric string (the backend sometimes quotes `"NaN"`).
/// Anything non-finite or unparseable becomes `None`.
pub(crate) fn deserialize_nullable_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(finite(number))
}

/// Running mean that ignores missing values.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Mean {
    sum: f64,
    count: u32,
}

impl Mean {
    pub(crate) fn push(&mut self, value: Option<f64>) {
        if let Some(v) = finite(value) {
            self.sum += v;
            self.count += 1;
        }
    }

    pub(crate) fn value(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            finite(Some(self.sum / self.count as f64))
        }
    }
}
