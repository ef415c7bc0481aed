//! Parsing of the serialized image-list attribute.

use serde_json::Value;

use crate::error::{CarouselError, CarouselResult};

/// Parse a JSON array of image references.
///
/// Entries are opaque; only their type is checked.
///
/// # Errors
///
/// Returns [`CarouselError::MalformedImageList`] when `raw` is not JSON or not
/// an array, and [`CarouselError::InvalidImageEntry`] for a non-string entry.
pub fn parse_image_list(raw: &str) -> CarouselResult<Vec<String>> {
    let value: Value =
        serde_json::from_str(raw).map_err(|source| CarouselError::MalformedImageList { source })?;
    let Value::Array(entries) = value else {
        return Err(CarouselError::MalformedImageList {
            source: <serde_json::Error as serde::de::Error>::custom("expected a JSON array"),
        });
    };
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::String(src) => Ok(src),
            _ => Err(CarouselError::InvalidImageEntry {
                index,
                reason: "must be a string",
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_arrays() {
        let images = parse_image_list(r#"["a.jpg", "https://cdn/b.png", ""]"#).expect("valid list");
        assert_eq!(images, vec!["a.jpg", "https://cdn/b.png", ""]);
        assert!(parse_image_list("[]").expect("empty list").is_empty());
    }

    #[test]
    fn rejects_invalid_json_and_non_arrays() {
        for raw in ["", "[\"a\"", "{\"images\": []}", "\"a.jpg\"", "null"] {
            let err = parse_image_list(raw).unwrap_err();
            assert!(
                matches!(err, CarouselError::MalformedImageList { .. }),
                "{raw}"
            );
        }
    }

    #[test]
    fn rejects_non_string_entries() {
        let err = parse_image_list(r#"["a", 3, "c"]"#).unwrap_err();
        assert!(matches!(
            err,
            CarouselError::InvalidImageEntry { index: 1, .. }
        ));
    }
}
