use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Request
// ────────────────────────────────────────────────────────────────────────────

/// The five raw form fields sent to the generator.
///
/// Values are forwarded exactly as typed: no trimming, no numeric coercion.
/// A control missing from the submitted form is collected as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub semesters: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub focus: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Response envelope
// ────────────────────────────────────────────────────────────────────────────

/// A decoded generator body, classified by shape.
///
/// Precedence is `Failed` > `Wrapped` > `Unwrapped`; see
/// [`crate::curriculum::normalizer::classify`].
#[derive(Debug, Clone, PartialEq)]
pub enum CurriculumEnvelope {
    /// The body carried a truthy `error` key.
    Failed { error: Value },
    /// `{ "curriculum": { ... } }`
    Wrapped { curriculum: Value },
    /// The curriculum fields sit at the top level of the body.
    Unwrapped(Value),
}

// ────────────────────────────────────────────────────────────────────────────
// Canonical curriculum
// ────────────────────────────────────────────────────────────────────────────

/// A validated curriculum.
///
/// Scalar fields keep their raw JSON value because the generator may send
/// either strings or numbers. On the wire the semester list is called
/// `courses`, the same name as the course list inside a semester; internally
/// the two are `semester_groups` and `course_entries`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Curriculum {
    pub domain: Option<Value>,
    pub level: Option<Value>,
    #[serde(rename = "industryOrientation")]
    pub industry_orientation: Option<Value>,
    pub semesters: Option<Value>,
    #[serde(rename = "weeklyHours")]
    pub weekly_hours: Option<Value>,
    #[serde(rename = "courses", deserialize_with = "lenient_entries")]
    pub semester_groups: Vec<Semester>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Semester {
    pub semester: Option<Value>,
    /// `None` when the wire field is absent or not an array.
    #[serde(rename = "courses", default, deserialize_with = "lenient_optional_entries")]
    pub course_entries: Option<Vec<Course>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Course {
    pub name: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    pub description: Option<Value>,
    #[serde(rename = "hoursPerWeek")]
    pub hours_per_week: Option<Value>,
}

/// Decodes an array whose elements are read leniently: an element that does
/// not fit `T` (a bare number, `null`, ...) becomes `T::default()` instead of
/// failing the whole document.
fn lenient_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().map(lenient_entry).collect()),
        other => Err(serde::de::Error::custom(format!(
            "expected an array of entries, found {other}"
        ))),
    }
}

fn lenient_optional_entries<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(items.into_iter().map(lenient_entry).collect())),
        _ => Ok(None),
    }
}

fn lenient_entry<T: DeserializeOwned + Default>(value: Value) -> T {
    serde_json::from_value(value).unwrap_or_default()
}
