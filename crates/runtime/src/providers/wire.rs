//! JSON shapes served by the item API.
//!
//! The API has shipped two field spellings over time (`tag_name` and
//! `displayName`, `num_searches` and `metricValue`, `image` and `imageRef`);
//! both are accepted. Conversion into [`Item`] checks every required field and
//! resolves relative image paths against the API base URL.

use game_core::{Item, ItemPair};
use serde::Deserialize;
use serde_json::Value;

use crate::api::ProviderError;

/// Item identifiers arrive as either strings or numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(serde_json::Number),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Text(text) => text,
            WireId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireItem {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(default, alias = "displayName")]
    pub tag_name: Option<String>,
    #[serde(default, alias = "metricValue")]
    pub num_searches: Option<Value>,
    #[serde(default, alias = "imageRef")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePair {
    pub left_item: Option<WireItem>,
    pub right_item: Option<WireItem>,
}

impl WireItem {
    /// Validates the record and converts it into a game item.
    pub fn into_item(self, base_url: &str) -> Result<Item, ProviderError> {
        let id = self
            .id
            .map(WireId::into_string)
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ProviderError::InvalidItem("missing id".into()))?;

        let name = self
            .tag_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| ProviderError::InvalidItem(format!("item {id} has no name")))?;

        let metric = parse_metric(self.num_searches)
            .map_err(|reason| ProviderError::InvalidItem(format!("item {id}: {reason}")))?;

        let mut item = Item::new(id, name, metric);
        if let Some(image) = self.image.filter(|image| !image.trim().is_empty()) {
            item = item.with_image(resolve_image(base_url, &image));
        }
        Ok(item)
    }
}

impl WirePair {
    pub fn into_pair(self, base_url: &str) -> Result<ItemPair, ProviderError> {
        let (Some(left), Some(right)) = (self.left_item, self.right_item) else {
            return Err(ProviderError::InvalidItem(
                "missing item data in response".into(),
            ));
        };
        Ok(ItemPair::new(
            left.into_item(base_url)?,
            right.into_item(base_url)?,
        ))
    }
}

/// Absent or null metrics are allowed; anything else must be a non-negative
/// integer (numeric strings included).
fn parse_metric(value: Option<Value>) -> Result<Option<u64>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => {
            if let Some(metric) = number.as_u64() {
                return Ok(Some(metric));
            }
            match number.as_f64() {
                Some(float) if float >= 0.0 && float.fract() == 0.0 && float <= u64::MAX as f64 => {
                    Ok(Some(float as u64))
                }
                _ => Err(format!("metric {number} is not a non-negative integer")),
            }
        }
        Some(Value::String(text)) => text
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| format!("metric {text:?} is not a non-negative integer")),
        Some(other) => Err(format!("metric has unexpected type: {other}")),
    }
}

/// Joins a relative image path onto the API base; absolute URLs pass through.
pub fn resolve_image(base_url: &str, image: &str) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        return image.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if image.starts_with('/') {
        format!("{base}{image}")
    } else {
        format!("{base}/{image}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.example.com/";

    fn parse(json: &str) -> Result<Item, ProviderError> {
        serde_json::from_str::<WireItem>(json)
            .unwrap()
            .into_item(BASE)
    }

    #[test]
    fn legacy_field_names() {
        let item = parse(
            r#"{"id": 17, "tag_name": "Cricket", "num_searches": 1500, "image": "/media/cricket.jpg"}"#,
        )
        .unwrap();
        assert_eq!(item.id.as_str(), "17");
        assert_eq!(item.display_name, "Cricket");
        assert_eq!(item.metric, Some(1500));
        assert_eq!(
            item.image_ref.as_deref(),
            Some("https://api.example.com/media/cricket.jpg")
        );
    }

    #[test]
    fn current_field_names() {
        let item = parse(
            r#"{"id": "a-1", "displayName": "Chess", "metricValue": null, "imageRef": "https://cdn.example.com/c.png"}"#,
        )
        .unwrap();
        assert_eq!(item.metric, None);
        assert_eq!(item.image_ref.as_deref(), Some("https://cdn.example.com/c.png"));
    }

    #[test]
    fn integral_float_and_numeric_string_metrics() {
        assert_eq!(
            parse(r#"{"id": 1, "tag_name": "A", "num_searches": 40.0}"#)
                .unwrap()
                .metric,
            Some(40)
        );
        assert_eq!(
            parse(r#"{"id": 1, "tag_name": "A", "num_searches": "2200"}"#)
                .unwrap()
                .metric,
            Some(2200)
        );
    }

    #[test]
    fn rejects_bad_records() {
        for json in [
            r#"{"tag_name": "No id", "num_searches": 1}"#,
            r#"{"id": 2, "tag_name": "  ", "num_searches": 1}"#,
            r#"{"id": 3, "tag_name": "Negative", "num_searches": -5}"#,
            r#"{"id": 4, "tag_name": "Fraction", "num_searches": 2.5}"#,
            r#"{"id": 5, "tag_name": "Words", "num_searches": "lots"}"#,
        ] {
            assert!(
                matches!(parse(json), Err(ProviderError::InvalidItem(_))),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn pair_requires_both_sides() {
        let pair: WirePair = serde_json::from_str(
            r#"{"leftItem": {"id": 1, "tag_name": "A", "num_searches": 5}}"#,
        )
        .unwrap();
        assert!(matches!(
            pair.into_pair(BASE),
            Err(ProviderError::InvalidItem(_))
        ));
    }

    #[test]
    fn image_resolution() {
        assert_eq!(
            resolve_image("https://h.example", "img/a.png"),
            "https://h.example/img/a.png"
        );
        assert_eq!(
            resolve_image("https://h.example/", "/img/a.png"),
            "https://h.example/img/a.png"
        );
    }
}
