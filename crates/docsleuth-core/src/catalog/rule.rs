/// A single document-type rule — one entry in the user-maintained catalog.
///
/// Serde field names follow the historical on-disk JSON: the display name is
/// stored under `type` and the content tags under `internal_tags`, so catalog
/// files written by earlier tooling keep loading unchanged.
use serde::{Deserialize, Serialize};

/// Which tag list a mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagArea {
    /// Tags matched against filename tokens.
    Name,
    /// Tags matched as substrings of spreadsheet rows.
    Content,
}

/// One recognisable document type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeRule {
    /// Stable id — the key of the catalog entry, e.g. `"1"` or `"7.1"`.
    /// Stored as the JSON object key, not inside the entry body.
    #[serde(skip)]
    pub id: String,

    /// Human-readable type name shown in result tables.
    #[serde(rename = "type")]
    pub display_name: String,

    /// Tags compared for exact, case-insensitive equality against
    /// filename tokens.
    pub name_tags: Vec<String>,

    /// Tags searched as case-insensitive substrings of spreadsheet rows.
    #[serde(rename = "internal_tags")]
    pub content_tags: Vec<String>,

    /// Rename mask for this type. Opaque to the engine — copied onto
    /// matching records verbatim.
    pub mask: String,
}

impl DocumentTypeRule {
    /// Borrow the tag list for an area.
    pub fn tags(&self, area: TagArea) -> &[String] {
        match area {
            TagArea::Name => &self.name_tags,
            TagArea::Content => &self.content_tags,
        }
    }

    pub(crate) fn tags_mut(&mut self, area: TagArea) -> &mut Vec<String> {
        match area {
            TagArea::Name => &mut self.name_tags,
            TagArea::Content => &mut self.content_tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The JSON entry body must round-trip through the historical field
    /// names (`type`, `internal_tags`) and must not contain the id.
    #[test]
    fn rule_serialises_with_historical_field_names() {
        let rule = DocumentTypeRule {
            id: "1".to_string(),
            display_name: "Локальная смета".to_string(),
            name_tags: vec!["лс".to_string()],
            content_tags: vec!["локальная смета".to_string()],
            mask: "ЛС-ГС".to_string(),
        };

        let json = serde_json::to_value(&rule).expect("serialise rule");
        assert_eq!(json["type"], "Локальная смета");
        assert_eq!(json["internal_tags"][0], "локальная смета");
        assert!(json.get("id").is_none(), "id must live in the object key");
        assert!(json.get("display_name").is_none());

        let back: DocumentTypeRule = serde_json::from_value(json).expect("deserialise rule");
        assert_eq!(back.display_name, rule.display_name);
        assert_eq!(back.id, "", "id is restored by the store, not serde");
    }

    #[test]
    fn tags_selects_the_requested_area() {
        let rule = DocumentTypeRule {
            id: "1".to_string(),
            display_name: "t".to_string(),
            name_tags: vec!["n".to_string()],
            content_tags: vec!["c".to_string()],
            mask: "m".to_string(),
        };
        assert_eq!(rule.tags(TagArea::Name), ["n".to_string()]);
        assert_eq!(rule.tags(TagArea::Content), ["c".to_string()]);
    }
}
