use serde::{Deserialize, Serialize};

/// Annotated record stored under its title.
///
/// Missing fields decode to their zero values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalInfo {
    #[serde(rename = "title")]
    pub title: String,
    #[serde(rename = "text")]
    pub text: String,
    /// Numeric annotation. Returned only as the raw query payload, never in
    /// [`RecordView`].
    #[serde(rename = "code")]
    pub code: i64,
}

impl AdditionalInfo {
    /// Create a record from its three fields.
    pub fn new(title: impl Into<String>, text: impl Into<String>, code: i64) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            code,
        }
    }

    /// Serialize to the stored JSON form.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Decode the stored JSON form.
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

/// Human-readable view of a balance returned by `query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceView {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Amount")]
    pub amount: String,
}

/// Human-readable view of an annotated record returned by `morequery`.
///
/// `title` is the lookup key, not the decoded field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Text")]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_form_uses_lowercase_tags() {
        let info = AdditionalInfo::new("t", "hello", 7);
        let json = String::from_utf8(info.to_bytes().unwrap()).unwrap();
        assert_eq!(json, r#"{"title":"t","text":"hello","code":7}"#);
    }

    #[test]
    fn decode_stored_form() {
        let info = AdditionalInfo::from_bytes(br#"{"title":"t","text":"x","code":-3}"#).unwrap();
        assert_eq!(info, AdditionalInfo::new("t", "x", -3));
    }

    #[test]
    fn decode_rejects_garbage_and_empty() {
        assert!(AdditionalInfo::from_bytes(b"100").is_err());
        assert!(AdditionalInfo::from_bytes(b"").is_err());
    }

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let info = AdditionalInfo::from_bytes(br#"{"title":"t","text":"hello"}"#).unwrap();
        assert_eq!(info, AdditionalInfo::new("t", "hello", 0));

        let info = AdditionalInfo::from_bytes(br#"{"title":"t"}"#).unwrap();
        assert_eq!(info, AdditionalInfo::new("t", "", 0));

        assert_eq!(AdditionalInfo::from_bytes(b"{}").unwrap(), AdditionalInfo::default());
    }

    #[test]
    fn views_use_capitalized_tags() {
        let balance = BalanceView {
            name: "alice".into(),
            amount: "100".into(),
        };
        assert_eq!(
            serde_json::to_string(&balance).unwrap(),
            r#"{"Name":"alice","Amount":"100"}"#
        );

        let record = RecordView {
            title: "t".into(),
            text: "with \"quotes\"".into(),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"Title":"t","Text":"with \"quotes\""}"#
        );
    }
}
