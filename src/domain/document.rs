#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub filename: String,
    pub content: String,
    pub document_type: String,
}

impl UploadedDocument {
    pub fn new(filename: String, content: String, document_type: String) -> Self {
        Self {
            filename,
            content,
            document_type,
        }
    }

    /// Length of the content in characters, not bytes.
    pub fn size(&self) -> usize {
        self.content.chars().count()
    }
}
