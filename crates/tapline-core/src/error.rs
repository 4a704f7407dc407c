/// Errors surfaced by the input pipeline's configuration API.
///
/// Event capture and dispatch never fail; only requests the pipeline cannot
/// honour end up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Unsupported { operation: &'static str },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Unsupported { operation } => {
                write!(f, "{operation} is not supported by this backend")
            }
        }
    }
}

impl std::error::Error for InputError {}
