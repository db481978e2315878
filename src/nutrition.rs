use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::display::{classify, ColorName};
use crate::error::{LogError, ReadingError, Result};

/// Sample log bundled with the dashboard.
pub const SAMPLE_LOG: &str = include_str!("../static/sample_log.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NutritionLog {
    pub days: Vec<DayRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DayRecord {
    pub date: String,
    #[serde(default)]
    pub nutrients: Vec<NutrientRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NutrientRecord {
    pub label: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub current: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub target: Option<f64>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub color: ColorName,
}

impl NutritionLog {
    pub fn from_json(content: &str) -> Result<Self> {
        let log: NutritionLog = serde_json::from_str(content)?;
        if log.days.is_empty() {
            return Err(LogError::Empty);
        }
        Ok(log)
    }

    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_LOG)
    }

    pub fn day(&self, date: &str) -> Option<&DayRecord> {
        self.days.iter().find(|day| day.date == date)
    }

    /// Most recent day, assuming ISO dates.
    pub fn latest(&self) -> Option<&DayRecord> {
        self.days.iter().max_by(|a, b| a.date.cmp(&b.date))
    }

    pub fn dates(&self) -> Vec<String> {
        self.days.iter().map(|day| day.date.clone()).collect()
    }
}

/// Read a JSON value as a reading, rejecting anything that is not a number.
pub fn reading_from_value(value: &Value) -> std::result::Result<f64, ReadingError> {
    match value {
        Value::Null => Err(ReadingError::Missing),
        Value::Number(n) => classify(n.as_f64()),
        Value::Bool(_) => Err(ReadingError::NotANumber("boolean".to_string())),
        Value::String(_) => Err(ReadingError::NotANumber("string".to_string())),
        Value::Array(_) => Err(ReadingError::NotANumber("array".to_string())),
        Value::Object(_) => Err(ReadingError::NotANumber("object".to_string())),
    }
}

// Bad readings are kept as `None` so the bar shows its no-data state
// instead of failing the whole log.
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(reading_from_value(&value).ok())
}
