// 🔑 Password Generator - charset from toggles, uniform sampling with replacement

use crate::error::{ToolError, ToolResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 50;

pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

// ============================================================================
// POLICY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharClasses {
    fn default() -> Self {
        CharClasses {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: false,
        }
    }
}

impl CharClasses {
    pub const NONE: CharClasses = CharClasses {
        uppercase: false,
        lowercase: false,
        digits: false,
        symbols: false,
    };

    /// Enabled classes concatenated in fixed order: upper, lower, digits, symbols
    pub fn charset(&self) -> String {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, chars)| *chars)
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    pub length: usize,
    #[serde(flatten)]
    pub classes: CharClasses,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        PasswordPolicy {
            length: 12,
            classes: CharClasses::default(),
        }
    }
}

// ============================================================================
// GENERATION
// ============================================================================

/// Generate with the thread-local RNG
pub fn generate(length: usize, classes: CharClasses) -> ToolResult<String> {
    generate_with(&mut rand::rng(), length, classes)
}

/// Generate with a caller-supplied RNG
pub fn generate_with<R: Rng>(
    rng: &mut R,
    length: usize,
    classes: CharClasses,
) -> ToolResult<String> {
    let charset: Vec<char> = classes.charset().chars().collect();
    if charset.is_empty() {
        return Err(ToolError::EmptyCharset);
    }

    Ok((0..length)
        .map(|_| charset[rng.random_range(0..charset.len())])
        .collect())
}

// ============================================================================
// GENERATOR STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PasswordGenerator {
    pub policy: PasswordPolicy,
    pub password: String,
    pub notice: Option<String>,
}

impl PasswordGenerator {
    pub fn new(length: usize) -> Self {
        PasswordGenerator {
            policy: PasswordPolicy {
                length: clamp_length(length),
                ..PasswordPolicy::default()
            },
            password: String::new(),
            notice: None,
        }
    }

    pub fn set_length(&mut self, length: usize) {
        self.policy.length = clamp_length(length);
    }

    pub fn lengthen(&mut self) {
        self.set_length(self.policy.length + 1);
    }

    pub fn shorten(&mut self) {
        self.set_length(self.policy.length.saturating_sub(1));
    }

    pub fn toggle_uppercase(&mut self) {
        self.policy.classes.uppercase = !self.policy.classes.uppercase;
    }

    pub fn toggle_lowercase(&mut self) {
        self.policy.classes.lowercase = !self.policy.classes.lowercase;
    }

    pub fn toggle_digits(&mut self) {
        self.policy.classes.digits = !self.policy.classes.digits;
    }

    pub fn toggle_symbols(&mut self) {
        self.policy.classes.symbols = !self.policy.classes.symbols;
    }

    /// Regenerate; on an empty charset the old password stays and a notice is raised
    pub fn regenerate(&mut self) -> ToolResult<()> {
        self.regenerate_with(&mut rand::rng())
    }

    pub fn regenerate_with<R: Rng>(&mut self, rng: &mut R) -> ToolResult<()> {
        match generate_with(rng, self.policy.length, self.policy.classes) {
            Ok(password) => {
                self.password = password;
                self.notice = None;
                Ok(())
            }
            Err(e) => {
                tracing::info!(error = %e, "password generation skipped");
                self.notice = Some(e.to_string());
                Err(e)
            }
        }
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(PasswordPolicy::default().length)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_charset_order() {
        let all = CharClasses {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        };
        assert_eq!(
            all.charset(),
            format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SYMBOLS}")
        );

        let digits_and_symbols = CharClasses {
            digits: true,
            symbols: true,
            ..CharClasses::NONE
        };
        assert_eq!(digits_and_symbols.charset(), format!("{DIGITS}{SYMBOLS}"));
    }

    #[test]
    fn test_generated_length_matches() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in [0, 1, 4, 12, 50, 128] {
            let password = generate_with(&mut rng, length, CharClasses::default()).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_only_enabled_classes_used() {
        let digits_only = CharClasses {
            digits: true,
            ..CharClasses::NONE
        };
        let password = generate(200, digits_only).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));

        let symbols_only = CharClasses {
            symbols: true,
            ..CharClasses::NONE
        };
        let password = generate(200, symbols_only).unwrap();
        assert!(password.chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn test_empty_charset_is_validation_error() {
        assert_eq!(generate(12, CharClasses::NONE), Err(ToolError::EmptyCharset));
    }

    #[test]
    fn test_failed_regenerate_keeps_previous_password() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut generator = PasswordGenerator::default();
        generator.regenerate_with(&mut rng).unwrap();
        let previous = generator.password.clone();
        assert_eq!(previous.len(), 12);

        generator.toggle_uppercase();
        generator.toggle_lowercase();
        generator.toggle_digits();

        assert_eq!(generator.regenerate_with(&mut rng), Err(ToolError::EmptyCharset));
        assert_eq!(generator.password, previous);
        assert_eq!(
            generator.notice.as_deref(),
            Some("Please select at least one character type")
        );
    }

    #[test]
    fn test_length_is_clamped() {
        let mut generator = PasswordGenerator::new(100);
        assert_eq!(generator.policy.length, MAX_LENGTH);

        generator.set_length(1);
        assert_eq!(generator.policy.length, MIN_LENGTH);
        generator.shorten();
        assert_eq!(generator.policy.length, MIN_LENGTH);
        generator.lengthen();
        assert_eq!(generator.policy.length, MIN_LENGTH + 1);
    }
}
