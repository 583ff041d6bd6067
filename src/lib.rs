// Toolbox - Core Library
// Exposes all tool kernels for use in the TUI, the API server, and tests

pub mod error;
pub mod config;
pub mod logging;
pub mod units;       // Unit Converter - conversion tables
pub mod currency;    // Currency Converter - mock rates + sequenced lookups
pub mod password;    // Password Generator
pub mod text_stats;  // Word Counter
pub mod color;       // Color Picker
pub mod calculator;  // Basic Calculator
pub mod clipboard;
pub mod shell;       // Catalog + navigation state

// Re-export commonly used types
pub use error::{ToolError, ToolResult};
pub use config::Config;
pub use units::{
    Category, Unit, UnitConverter, TemperatureUnit, Side,
    convert, convert_value, convert_temperature, format_display,
};
pub use currency::{
    Currency, RateTable, MockRateSource, CurrencyConverter, RateRequest, RateResponse,
    rate, converted_amount, convert_at, format_currency,
};
pub use password::{CharClasses, PasswordPolicy, PasswordGenerator, generate};
pub use text_stats::{TextStats, WordCounter, analyze};
pub use color::{Rgb, Hsl, ColorPicker, hex_to_rgb, hex_to_hsl};
pub use calculator::{Calculator, Operation};
pub use clipboard::{Clipboard, MemoryClipboard, Osc52Clipboard};
pub use shell::{Shell, ToolId, ToolCategory, ActiveTool, CATALOG, catalog_entries};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
