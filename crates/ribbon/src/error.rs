pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("mismatched input: {coordinates} coordinates for {values} points")]
    MismatchedInput { coordinates: usize, values: usize },

    #[error("SVG path syntax error: {message}")]
    PathSyntax { message: String },

    #[error("unsupported SVG path command: {command}")]
    UnsupportedPathCommand { command: char },

    #[error("invalid interpolation config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
