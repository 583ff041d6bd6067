// ⚠️ Tool Errors
// Every failure here is recoverable: it becomes a notice or an empty display value

// ============================================================================
// ERROR TYPE
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToolError {
    /// Password generator was asked for output with every character class disabled
    #[error("Please select at least one character type")]
    EmptyCharset,

    #[error("unknown conversion category: {0}")]
    UnknownCategory(String),

    #[error("unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: String, unit: String },

    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// Simulated network failure while fetching an exchange rate
    #[error("Failed to fetch exchange rate. Please try again.")]
    RateUnavailable,

    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

impl ToolError {
    /// Validation errors come from the user's own input; the rest are transient
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ToolError::EmptyCharset
                | ToolError::UnknownCategory(_)
                | ToolError::UnknownUnit { .. }
                | ToolError::UnknownCurrency(_)
        )
    }
}

pub type ToolResult<T> = Result<T, ToolError>;

// ============================================================================
// TESTS
// ============================================================================
