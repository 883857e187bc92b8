use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Cannot write {path}: {source}")]
    Export {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type DemoResult<T> = Result<T, DemoError>;
