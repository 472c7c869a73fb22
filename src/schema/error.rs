#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to read shape file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid shape file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown fragment '{fragment}' referenced at '{path}'")]
    UnknownFragment { fragment: String, path: String },

    #[error("fragment '{fragment}' contains itself (via '{path}')")]
    FragmentCycle { fragment: String, path: String },

    #[error("member '{path}' uses a reserved name")]
    ReservedName { path: String },
}
