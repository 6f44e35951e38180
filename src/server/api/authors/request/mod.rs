use serde::Deserialize;

/// Payload for creating an author or fully overwriting one.
///
/// Any `id` in the body is ignored; identity comes from the store on create
/// and from the path on update.
#[derive(Deserialize, Debug)]
pub struct AuthorPayload {
    /// Full name of the author.
    pub name: String,
    /// Age of the author in years.
    pub age: i64,
}

/// Payload for a partial author update. Absent fields keep their stored
/// value.
#[derive(Deserialize, Debug)]
pub struct AuthorPatch {
    /// New name, if it should change.
    pub name: Option<String>,
    /// New age, if it should change.
    pub age: Option<i64>,
}
