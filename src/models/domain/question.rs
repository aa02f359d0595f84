use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A quiz question as submitted by an admin. The shape belongs to the
/// frontend, so the record is stored and returned verbatim.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Question(pub Value);

impl Question {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for Question {
    fn from(value: Value) -> Self {
        Question(value)
    }
}
