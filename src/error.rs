use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Missing required environment variable '{name}'. Description: {description}\n\
         Please set it according to the instructions in README.md."
    )]
    MissingConfiguration {
        name: &'static str,
        description: &'static str,
    },

    #[error("environment variable '{name}' is not valid unicode")]
    NotUnicode { name: &'static str },

    #[error("`{0}` is not a known test environment variable")]
    UnknownVariable(String),

    #[error("{0} required environment variable(s) missing")]
    MissingVariables(usize),

    #[error("{source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn is_missing(&self) -> bool {
        matches!(self, Error::MissingConfiguration { .. })
    }
}
