#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("no configured value for segment <{name}>")]
    MissingConfiguration { name: Box<str> },

    #[error("configured value {value:?} for segment <{name}> can never match")]
    InvalidConfiguration { name: Box<str>, value: Box<str> },

    #[error("pattern collision occurred with {existing:?}")]
    Collision { existing: Box<str> },
}
