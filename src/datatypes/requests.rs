use serde_json::Value;

/// Payload of `POST /comments/{city}`.
#[derive(Debug)]
pub struct NewComment {
    pub nick: String,
    pub text: String,
}

impl NewComment {
    /// Both fields must be present, strings and non-empty; anything else is
    /// rejected before the store is touched.
    pub fn from_value(body: &Value) -> Result<Self, &'static str> {
        let nick = body.get("nick").and_then(Value::as_str).unwrap_or_default();
        let text = body.get("text").and_then(Value::as_str).unwrap_or_default();
        if nick.is_empty() || text.is_empty() {
            return Err("nick and text must be non-empty strings");
        }
        Ok(Self {
            nick: nick.to_owned(),
            text: text.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_non_empty_strings() {
        let parsed = NewComment::from_value(&json!({"nick": "a", "text": "hi"})).unwrap();
        assert_eq!(parsed.nick, "a");
        assert_eq!(parsed.text, "hi");
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(NewComment::from_value(&json!({})).is_err());
        assert!(NewComment::from_value(&json!({"nick": "a"})).is_err());
    }

    #[test]
    fn rejects_empty_strings() {
        assert!(NewComment::from_value(&json!({"nick": "", "text": "hi"})).is_err());
        assert!(NewComment::from_value(&json!({"nick": "a", "text": ""})).is_err());
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(NewComment::from_value(&json!({"nick": 1, "text": "hi"})).is_err());
        assert!(NewComment::from_value(&json!({"nick": "a", "text": ["hi"]})).is_err());
    }
}
