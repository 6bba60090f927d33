//! Wire Models
//!
//! JSON bodies returned by the server's AJAX views.

use serde::{Deserialize, Deserializer};

/// `{"result": "<html>"}`, or `{"is_valid": true}` when a form was accepted.
/// Only `result` matters; the acceptance flag reads as a falsy result.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FragmentResponse {
    /// Rendered fragment; `None` for any falsy value
    #[serde(default, deserialize_with = "truthy_html")]
    pub result: Option<String>,
}

impl FragmentResponse {
    pub fn html(&self) -> Option<&str> {
        self.result.as_deref()
    }
}

/// Accept whatever the view put under `result` and keep it only when it is
/// a non-empty string. `false`, `null`, `""` and numbers count as absent.
fn truthy_html<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"result": "<table></table>"}"#, Some("<table></table>"))]
    #[case(r#"{"result": ""}"#, None)]
    #[case(r#"{"result": false}"#, None)]
    #[case(r#"{"result": null}"#, None)]
    #[case(r#"{"is_valid": true}"#, None)]
    #[case(r#"{}"#, None)]
    fn test_result_truthiness(#[case] body: &str, #[case] expected: Option<&str>) {
        let parsed: FragmentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.html(), expected);
    }
}
