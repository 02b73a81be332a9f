//! Transport-independent `multipart/form-data` forms.

/// The value carried by one form part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    /// A plain text field
    Text(String),
    /// A file upload
    File {
        /// File name sent in the part's `Content-Disposition`
        file_name: String,
        /// MIME type sent as the part's `Content-Type`
        mime_type: String,
        /// File content
        data: Vec<u8>,
    },
}

/// A named part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    /// Form field name
    pub name: String,
    /// Field content
    pub value: PartValue,
}

/// An ordered `multipart/form-data` form.
///
/// Parts keep insertion order. The boundary is not part of this type:
/// the [`HttpClient`](super::HttpClient) generates it when encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Appends a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: PartValue::Text(value.into()),
        });
        self
    }

    /// Appends a file part.
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: PartValue::File {
                file_name: file_name.into(),
                mime_type: mime_type.into(),
                data,
            },
        });
        self
    }

    /// Returns the parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Consumes the form, returning its parts in insertion order.
    #[must_use]
    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    /// Returns the field names in insertion order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }

    /// Returns the value of the first text field with the given name.
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match &p.value {
            PartValue::Text(value) if p.name == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Returns the number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if the form has no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
