// 🧮 Calculator - four-function, chained left to right (no precedence)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Subtract),
            '*' | 'x' | '×' => Some(Operation::Multiply),
            '/' | '÷' => Some(Operation::Divide),
            _ => None,
        }
    }

    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

/// Render a result for the display: integral values without a fraction,
/// non-finite values spelled out, very large or small magnitudes as `1e+21` / `1e-7`
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // Covers -0
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        // `{:e}` already picks the shortest mantissa; only the sign of the exponent differs
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    pub display: String,
    previous: Option<f64>,
    operation: Option<Operation>,
    waiting_for_operand: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            display: "0".to_string(),
            previous: None,
            operation: None,
            waiting_for_operand: false,
        }
    }

    pub fn pending(&self) -> Option<Operation> {
        self.operation
    }

    /// Value currently shown, as a number
    pub fn current_value(&self) -> f64 {
        parse_display(&self.display)
    }

    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }

        if self.waiting_for_operand {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    pub fn input_decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn input_operation(&mut self, next: Operation) {
        let input = self.current_value();

        match (self.previous, self.operation) {
            (None, _) => self.previous = Some(input),
            (Some(previous), Some(op)) => {
                let result = op.apply(previous, input);
                self.display = format_number(result);
                self.previous = Some(result);
            }
            (Some(_), None) => {}
        }

        self.waiting_for_operand = true;
        self.operation = Some(next);
    }

    /// "="
    pub fn calculate(&mut self) {
        if let (Some(previous), Some(op)) = (self.previous, self.operation) {
            let result = op.apply(previous, self.current_value());
            self.display = format_number(result);
            self.previous = None;
            self.operation = None;
            self.waiting_for_operand = true;
        }
    }

    pub fn clear(&mut self) {
        *self = Calculator::new();
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_display(display: &str) -> f64 {
    match display {
        "Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        other => other.parse().unwrap_or(f64::NAN),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &mut Calculator, keys: &str) {
        for key in keys.chars() {
            match key {
                '0'..='9' => calc.input_digit(key),
                '.' => calc.input_decimal(),
                '=' => calc.calculate(),
                'C' => calc.clear(),
                other => calc.input_operation(Operation::from_char(other).unwrap()),
            }
        }
    }

    #[test]
    fn test_simple_addition() {
        let mut calc = Calculator::new();
        press(&mut calc, "12+30=");
        assert_eq!(calc.display, "42");
    }

    #[test]
    fn test_chains_left_to_right() {
        let mut calc = Calculator::new();
        press(&mut calc, "2+3×4=");
        assert_eq!(calc.display, "20");
    }

    #[test]
    fn test_intermediate_result_shown() {
        let mut calc = Calculator::new();
        press(&mut calc, "9-4+");
        assert_eq!(calc.display, "5");
        assert_eq!(calc.pending(), Some(Operation::Add));
    }

    #[test]
    fn test_decimals() {
        let mut calc = Calculator::new();
        press(&mut calc, ".5+1.2.5=");
        assert_eq!(calc.display, "1.75");

        press(&mut calc, "C0.1+0.2=");
        assert_eq!(calc.display, "0.30000000000000004");
    }

    #[test]
    fn test_leading_zero_replaced() {
        let mut calc = Calculator::new();
        press(&mut calc, "007");
        assert_eq!(calc.display, "7");
    }

    #[test]
    fn test_divide_by_zero_does_not_panic() {
        let mut calc = Calculator::new();
        press(&mut calc, "5÷0=");
        assert_eq!(calc.display, "Infinity");

        press(&mut calc, "C0÷0=");
        assert_eq!(calc.display, "NaN");
    }

    #[test]
    fn test_equals_without_operation_is_noop() {
        let mut calc = Calculator::new();
        press(&mut calc, "8=");
        assert_eq!(calc.display, "8");
    }

    #[test]
    fn test_clear_resets() {
        let mut calc = Calculator::new();
        press(&mut calc, "8×");
        calc.clear();
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_number_exponent_range() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }
}
