use thiserror::Error;

/// Errors raised while turning user-supplied text (UI controls, URL query,
/// command line) into scene values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown preset `{0}` (expected space, neon or minimal)")]
    UnknownPreset(String),
    #[error("invalid color `{0}` (expected #rrggbb)")]
    InvalidColor(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidConfig { key: String, value: String },
    #[error("unknown config key `{0}`")]
    UnknownConfigKey(String),
}
