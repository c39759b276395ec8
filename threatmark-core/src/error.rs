use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("dataflow \"{label}\" references an endpoint not in this model: {endpoint}")]
    UnknownEndpoint { label: String, endpoint: uuid::Uuid },

    #[error("model declares no elements")]
    EmptyModel,

    #[error("{kind} element declared with an empty name")]
    EmptyName { kind: &'static str },

    #[error("dataflow from {from} to {sink} has no label")]
    UnlabeledDataflow { from: String, sink: String },

    #[error("threat catalog is invalid: {0}")]
    Catalog(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
