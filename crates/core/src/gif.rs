use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One cat GIF entry.
///
/// `id` is absent until the catalog assigns one on insert; once assigned it
/// is immutable. The tag list is always present, possibly empty, and is
/// serialized as `tag` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GifRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub url: String,
    #[serde(rename = "tag", default)]
    pub tags: Vec<String>,
}

/// Payload for creating a record: a full record sans id.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewGif {
    pub name: String,
    pub url: String,
    #[serde(rename = "tag")]
    pub tags: Vec<String>,
}

impl NewGif {
    /// Turn the payload into a record carrying the assigned id.
    pub fn into_record(self, id: String) -> GifRecord {
        GifRecord {
            id: Some(id),
            name: self.name,
            url: self.url,
            tags: self.tags,
        }
    }
}

/// A set of optional updates to one record. Fields left out of the request
/// body (or sent as explicit nulls) deserialize to `None` and are left
/// untouched by the merge.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct GifPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "tag")]
    pub tags: Option<Vec<String>>,
}

impl GifPatch {
    /// True when the patch carries no fields. An empty patch is still a
    /// valid request: the target must exist, but nothing changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none() && self.tags.is_none()
    }

    /// Apply the supplied fields onto `record`, leaving the rest unchanged.
    pub fn apply(&self, record: &mut GifRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(url) = &self.url {
            record.url = url.clone();
        }
        if let Some(tags) = &self.tags {
            record.tags = tags.clone();
        }
    }
}

/// Wrapper for list responses, so they never expose a top-level JSON array.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GifCollection {
    pub gifs: Vec<GifRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_roundtrips_with_tag_alias() {
        let json = r#"{"id":"685343594050c9b94faa4359","name":"oiia","url":"https://tenor.com/fFr2do9u7Kw.gif","tag":["oiia"]}"#;
        let record: GifRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tags, vec!["oiia"]);
        let back = serde_json::to_string(&record).unwrap();
        assert!(back.contains("\"tag\""));
        assert!(!back.contains("\"tags\""));
    }

    #[test]
    fn absent_id_is_skipped_on_serialize() {
        let record = GifRecord {
            id: None,
            name: "happycat".into(),
            url: "https://tenor.com/bXAn9.gif".into(),
            tags: vec![],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn explicit_nulls_are_not_supplied() {
        let patch: GifPatch =
            serde_json::from_str(r#"{"name":null,"url":null,"tag":null}"#).unwrap();
        assert!(patch.is_empty());

        let mut record = GifRecord {
            id: Some("0".repeat(24)),
            name: "happycat".into(),
            url: "https://tenor.com/bXAn9.gif".into(),
            tags: vec!["happycat".into()],
        };
        let before = record.clone();
        patch.apply(&mut record);
        assert_eq!(record, before);
    }

    #[test]
    fn patch_applies_only_supplied_fields() {
        let patch: GifPatch = serde_json::from_str(r#"{"name":"renamed"}"#).unwrap();
        let mut record = GifRecord {
            id: Some("0".repeat(24)),
            name: "happycat".into(),
            url: "https://tenor.com/bXAn9.gif".into(),
            tags: vec!["happycat".into()],
        };
        patch.apply(&mut record);
        assert_eq!(record.name, "renamed");
        assert_eq!(record.url, "https://tenor.com/bXAn9.gif");
        assert_eq!(record.tags, vec!["happycat"]);
    }
}
