use serde::{Serialize, Serializer};

/// Metadata of a file attached to an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFileInfo {
    pub file_name: String,
    pub file_type: String,
    pub file_size: u64,
}

/// Document stored in the `customorder` collection.
///
/// The file fields are either all present or all absent; holding them as one
/// `Option` keeps that true by construction. Serialized flat, with `null` for
/// absent values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomOrder {
    pub name: String,
    pub email: String,
    pub description: Option<String>,
    pub file: Option<UploadedFileInfo>,
}

#[derive(Serialize)]
struct CustomOrderDocument<'a> {
    name: &'a str,
    email: &'a str,
    description: Option<&'a str>,
    file_name: Option<&'a str>,
    file_type: Option<&'a str>,
    file_size: Option<u64>,
}

impl Serialize for CustomOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let file = self.file.as_ref();
        CustomOrderDocument {
            name: &self.name,
            email: &self.email,
            description: self.description.as_deref(),
            file_name: file.map(|f| f.file_name.as_str()),
            file_type: file.map(|f| f.file_type.as_str()),
            file_size: file.map(|f| f.file_size),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_without_file_as_nulls() {
        let order = CustomOrder {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            description: None,
            file: None,
        };

        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "description": null,
                "file_name": null,
                "file_type": null,
                "file_size": null,
            })
        );
    }

    #[test]
    fn test_serializes_file_fields_together() {
        let order = CustomOrder {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            description: Some("Engraved lid".to_string()),
            file: Some(UploadedFileInfo {
                file_name: "sketch.png".to_string(),
                file_type: "image/png".to_string(),
                file_size: 42,
            }),
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["description"], "Engraved lid");
        assert_eq!(value["file_name"], "sketch.png");
        assert_eq!(value["file_type"], "image/png");
        assert_eq!(value["file_size"], 42);
    }
}
