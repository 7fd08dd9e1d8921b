/// Numeric operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumError {
    // Decimal text errors
    #[error("expected number, got nothing")]
    EmptyInput,
    #[error("expected number, got only a sign")]
    SignOnly,
    #[error("expected digit, got {found:?} at position {pos}")]
    InvalidDigit { found: char, pos: usize },

    // Arithmetic errors
    #[error("division by zero")]
    DivisionByZero,
}
