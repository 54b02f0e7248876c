use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// A named text, as supplied by a [`DocumentSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }
}

/// Supplies the ordered document set of a run.
///
/// Sources own their failure modes (missing directories, unreadable files);
/// those never surface as [`crate::Error`].
pub trait DocumentSource {
    type Error;

    fn load(&self) -> Result<Vec<Document>, Self::Error>;
}

impl DocumentSource for Vec<Document> {
    type Error = Infallible;

    fn load(&self) -> Result<Vec<Document>, Infallible> {
        Ok(self.clone())
    }
}

impl DocumentSource for [Document] {
    type Error = Infallible;

    fn load(&self) -> Result<Vec<Document>, Infallible> {
        Ok(self.to_vec())
    }
}
