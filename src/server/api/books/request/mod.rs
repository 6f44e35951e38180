use serde::Deserialize;

/// Payload for creating or fully overwriting a book. The isbn comes from the
/// path; any isbn in the body is ignored.
#[derive(Deserialize, Debug)]
pub struct BookPayload {
    /// Title of the book.
    pub title: String,
}

/// Payload for a partial book update. Absent fields keep their stored value.
#[derive(Deserialize, Debug)]
pub struct BookPatch {
    /// New title, if it should change.
    pub title: Option<String>,
}
