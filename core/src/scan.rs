use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A food-name candidate extracted from a vision-model scan reply.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScanSuggestion {
    pub name: String,

    /// Model confidence in [0, 1].
    pub confidence: f64,
}

impl ScanSuggestion {
    /// Confidence as the rounded percentage shown to the user.
    pub fn confidence_percent(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }
}

/// Shape a raw model reply into suggestions. The expected reply is
/// `{"items":[{"name":"milk","confidence":0.92}]}`; anything that deviates
/// degrades to no suggestions rather than an error.
pub fn parse_scan_reply(raw: &str) -> Vec<ScanSuggestion> {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };
    let Some(items) = value.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let name = item.get("name")?.as_str()?.trim().to_string();
            let confidence = item
                .get("confidence")
                .and_then(Value::as_f64)
                .unwrap_or(0.0);
            Some(ScanSuggestion { name, confidence })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_a_well_formed_reply() {
        let reply = r#"{"items":[{"name":" milk ","confidence":0.92},{"name":"eggs","confidence":0.4}]}"#;
        let suggestions = parse_scan_reply(reply);
        assert_eq!(
            suggestions,
            vec![
                ScanSuggestion { name: "milk".to_string(), confidence: 0.92 },
                ScanSuggestion { name: "eggs".to_string(), confidence: 0.4 },
            ]
        );
    }

    #[test]
    fn missing_or_non_numeric_confidence_becomes_zero() {
        let reply = r#"{"items":[{"name":"milk"},{"name":"eggs","confidence":"high"}]}"#;
        let suggestions = parse_scan_reply(reply);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].confidence, 0.0);
        assert_eq!(suggestions[1].confidence, 0.0);
    }

    #[test]
    fn drops_items_without_a_string_name() {
        let reply = r#"{"items":[{"confidence":0.9},{"name":42},{"name":"milk","confidence":0.5}]}"#;
        let suggestions = parse_scan_reply(reply);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "milk");
    }

    #[test]
    fn malformed_replies_yield_nothing() {
        assert!(parse_scan_reply("not json at all").is_empty());
        assert!(parse_scan_reply(r#"{"items":"none"}"#).is_empty());
        assert!(parse_scan_reply(r#"{"foods":[]}"#).is_empty());
        assert!(parse_scan_reply("").is_empty());
    }

    #[test]
    fn confidence_surfaces_as_a_rounded_percentage() {
        let suggestion = ScanSuggestion { name: "milk".to_string(), confidence: 0.918 };
        assert_eq!(suggestion.confidence_percent(), 92);
        let low = ScanSuggestion { name: "eggs".to_string(), confidence: 0.004 };
        assert_eq!(low.confidence_percent(), 0);
    }
}
