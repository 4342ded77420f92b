use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub body: String,
}
