use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("`{selector}` references undeclared variable `{variable}` in theme `{theme}`")]
    OrphanVariable {
        selector: String,
        variable: String,
        theme: String,
    },

    #[error("invalid content glob `{pattern}`")]
    BadGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
