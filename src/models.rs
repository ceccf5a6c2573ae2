use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Ordered list of report identifiers as served by `GET /api/reports`.
/// Server order is kept; the first entry is the most recent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReportIndex {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reports: Vec<String>,
}

impl ReportIndex {
    pub fn new(reports: Vec<String>) -> Self {
        Self { reports }
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.reports.first().map(String::as_str)
    }
}

/// Body of `GET /api/reports/{identifier}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReportDetail {
    #[serde(
        rename = "top_10_attacks",
        alias = "attacks",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub attacks: Vec<Attack>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Attack {
    #[serde(default, deserialize_with = "lenient_rank")]
    pub rank: Option<i64>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Lesson {
    #[serde(default, deserialize_with = "lenient_rank")]
    pub rank: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub real_world_impact: Option<String>,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub learning_objectives: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub mitigation_strategies: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub discussion_questions: Vec<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts integers, integral floats and numeric strings. Anything else is
/// treated as an absent rank rather than a decode failure.
fn lenient_rank<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(rank_from_value))
}

fn rank_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect())
}
