use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid pattern for category `{category}`: {source}")]
    Configuration {
        category: String,
        #[source]
        source: regex::Error,
    },

    #[error("Category registered twice: {0}")]
    DuplicateCategory(String),

    #[error("Invalid rule file: {0}")]
    RuleFile(#[from] serde_json::Error),

    #[error("Input of {len} bytes exceeds the limit of {max} bytes")]
    SizeLimitExceeded { len: usize, max: usize },
}
