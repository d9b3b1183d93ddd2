use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown validator '{name}'")]
    UnknownValidator { name: String },

    #[error("The modifier separator must not be empty")]
    EmptySeparator,

    #[error("Class group '{id}' has neither a base class name nor any definitions")]
    EmptyClassGroup { id: String },

    #[error("Class group '{id}' is defined more than once")]
    DuplicateClassGroup { id: String },
}
