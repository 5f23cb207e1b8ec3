use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("At least one character set must be selected.")]
    NoClassSelected,

    #[error("No valid characters available after applying exclusions.")]
    EmptyAlphabet,

    #[error(
        "Length {requested} is too short: {required} characters are needed to cover every selected set."
    )]
    LengthTooShort { requested: usize, required: usize },

    #[error("Length {requested} is too long: at most {max} characters are supported.")]
    LengthTooLong { requested: usize, max: usize },
}
