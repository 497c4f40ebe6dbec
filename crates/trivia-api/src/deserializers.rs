use serde::{Deserialize, Deserializer, de::Error};

// Browser forms and <select> values arrive as strings ("3"), API clients send numbers (3)
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

pub fn i64_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::String(value) => value
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {value:?}"))),
    }
}

pub fn i32_from_number_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64_from_number_or_string(deserializer)?;
    i32::try_from(value).map_err(|_| D::Error::custom(format!("{value} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(deserialize_with = "i64_from_number_or_string")]
        category: i64,
        #[serde(deserialize_with = "i32_from_number_or_string")]
        difficulty: i32,
    }

    #[test]
    fn test_accepts_numbers() {
        let payload: Payload =
            serde_json::from_value(json!({ "category": 3, "difficulty": 2 })).unwrap();
        assert_eq!(payload.category, 3);
        assert_eq!(payload.difficulty, 2);
    }

    #[test]
    fn test_accepts_numeric_strings() {
        let payload: Payload =
            serde_json::from_value(json!({ "category": "3", "difficulty": " 4 " })).unwrap();
        assert_eq!(payload.category, 3);
        assert_eq!(payload.difficulty, 4);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(serde_json::from_value::<Payload>(json!({ "category": "abc", "difficulty": 1 })).is_err());
        assert!(serde_json::from_value::<Payload>(json!({ "category": 1.5, "difficulty": 1 })).is_err());
        assert!(serde_json::from_value::<Payload>(json!({ "category": null, "difficulty": 1 })).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_difficulty() {
        assert!(
            serde_json::from_value::<Payload>(json!({ "category": 1, "difficulty": 5_000_000_000_i64 }))
                .is_err()
        );
    }
}
