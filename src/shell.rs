// 🧭 Presentation Shell - tool catalog and the one piece of navigation state
// Tools are a closed set; the open tool's state lives only while it is open

use crate::calculator::Calculator;
use crate::color::ColorPicker;
use crate::config::Config;
use crate::currency::CurrencyConverter;
use crate::password::PasswordGenerator;
use crate::text_stats::WordCounter;
use crate::units::UnitConverter;
use serde::Serialize;

// ============================================================================
// TOOL IDENTIFIERS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    BasicCalculator,
    TipCalculator,
    UnitConverter,
    CurrencyConverter,
    PasswordGenerator,
    QrGenerator,
    WordCounter,
    CaseConverter,
    ColorPicker,
    TimestampConverter,
}

impl ToolId {
    pub fn id(&self) -> &'static str {
        match self {
            ToolId::BasicCalculator => "basic-calculator",
            ToolId::TipCalculator => "tip-calculator",
            ToolId::UnitConverter => "unit-converter",
            ToolId::CurrencyConverter => "currency-converter",
            ToolId::PasswordGenerator => "password-generator",
            ToolId::QrGenerator => "qr-generator",
            ToolId::WordCounter => "word-counter",
            ToolId::CaseConverter => "case-converter",
            ToolId::ColorPicker => "color-picker",
            ToolId::TimestampConverter => "timestamp-converter",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolId::BasicCalculator => "Basic Calculator",
            ToolId::TipCalculator => "Tip Calculator",
            ToolId::UnitConverter => "Unit Converter",
            ToolId::CurrencyConverter => "Currency Converter",
            ToolId::PasswordGenerator => "Password Generator",
            ToolId::QrGenerator => "QR Code Generator",
            ToolId::WordCounter => "Word Counter",
            ToolId::CaseConverter => "Case Converter",
            ToolId::ColorPicker => "Color Picker",
            ToolId::TimestampConverter => "Timestamp Converter",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolId::BasicCalculator => "Simple arithmetic calculator",
            ToolId::TipCalculator => "Calculate tips and split bills",
            ToolId::UnitConverter => "Convert between different units of measurement",
            ToolId::CurrencyConverter => "Convert between different currencies",
            ToolId::PasswordGenerator => "Generate secure passwords",
            ToolId::QrGenerator => "Create QR codes instantly",
            ToolId::WordCounter => "Count words, characters, and paragraphs",
            ToolId::CaseConverter => "Convert text case formats",
            ToolId::ColorPicker => "Pick and convert colors",
            ToolId::TimestampConverter => "Convert timestamps and dates",
        }
    }

    /// Catalog entries without an implementation are shown but inert
    pub fn is_available(&self) -> bool {
        !matches!(
            self,
            ToolId::TipCalculator
                | ToolId::QrGenerator
                | ToolId::CaseConverter
                | ToolId::TimestampConverter
        )
    }
}

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ToolCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tools: &'static [ToolId],
}

pub const CATALOG: &[ToolCategory] = &[
    ToolCategory {
        id: "calculators",
        title: "Calculators",
        description: "Mathematical and financial calculators",
        tools: &[ToolId::BasicCalculator, ToolId::TipCalculator],
    },
    ToolCategory {
        id: "converters",
        title: "Converters",
        description: "Convert between different units and currencies",
        tools: &[ToolId::UnitConverter, ToolId::CurrencyConverter],
    },
    ToolCategory {
        id: "generators",
        title: "Generators",
        description: "Generate passwords, QR codes, and more",
        tools: &[ToolId::PasswordGenerator, ToolId::QrGenerator],
    },
    ToolCategory {
        id: "text-tools",
        title: "Text Tools",
        description: "Text manipulation and analysis tools",
        tools: &[ToolId::WordCounter, ToolId::CaseConverter],
    },
    ToolCategory {
        id: "utilities",
        title: "Utilities",
        description: "Useful everyday utilities",
        tools: &[ToolId::ColorPicker, ToolId::TimestampConverter],
    },
];

/// Every tool in catalog order, flattened
pub fn all_tools() -> Vec<ToolId> {
    CATALOG.iter().flat_map(|c| c.tools.iter().copied()).collect()
}

/// Serializable catalog view
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tools: Vec<ToolEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub available: bool,
}

pub fn catalog_entries() -> Vec<CategoryEntry> {
    CATALOG
        .iter()
        .map(|category| CategoryEntry {
            id: category.id,
            title: category.title,
            description: category.description,
            tools: category
                .tools
                .iter()
                .map(|tool| ToolEntry {
                    id: tool.id(),
                    name: tool.name(),
                    description: tool.description(),
                    available: tool.is_available(),
                })
                .collect(),
        })
        .collect()
}

// ============================================================================
// ACTIVE TOOL
// ============================================================================

/// State of the one open tool
#[derive(Debug, Clone)]
pub enum ActiveTool {
    Calculator(Calculator),
    UnitConverter(UnitConverter),
    CurrencyConverter(CurrencyConverter),
    PasswordGenerator(PasswordGenerator),
    WordCounter(WordCounter),
    ColorPicker(ColorPicker),
}

impl ActiveTool {
    /// Fresh state for a tool, or None when the catalog entry is inert
    pub fn open(id: ToolId, config: &Config) -> Option<Self> {
        let tool = match id {
            ToolId::BasicCalculator => ActiveTool::Calculator(Calculator::new()),
            ToolId::UnitConverter => ActiveTool::UnitConverter(UnitConverter::new()),
            ToolId::CurrencyConverter => ActiveTool::CurrencyConverter(CurrencyConverter::new()),
            ToolId::PasswordGenerator => {
                ActiveTool::PasswordGenerator(PasswordGenerator::new(config.password_length))
            }
            ToolId::WordCounter => ActiveTool::WordCounter(WordCounter::new()),
            ToolId::ColorPicker => ActiveTool::ColorPicker(ColorPicker::new()),
            ToolId::TipCalculator
            | ToolId::QrGenerator
            | ToolId::CaseConverter
            | ToolId::TimestampConverter => return None,
        };
        Some(tool)
    }

    pub fn id(&self) -> ToolId {
        match self {
            ActiveTool::Calculator(_) => ToolId::BasicCalculator,
            ActiveTool::UnitConverter(_) => ToolId::UnitConverter,
            ActiveTool::CurrencyConverter(_) => ToolId::CurrencyConverter,
            ActiveTool::PasswordGenerator(_) => ToolId::PasswordGenerator,
            ActiveTool::WordCounter(_) => ToolId::WordCounter,
            ActiveTool::ColorPicker(_) => ToolId::ColorPicker,
        }
    }
}

// ============================================================================
// SHELL
// ============================================================================

#[derive(Debug, Clone)]
pub struct Shell {
    config: Config,
    active: Option<ActiveTool>,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Shell { config, active: None }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn selected(&self) -> Option<ToolId> {
        self.active.as_ref().map(ActiveTool::id)
    }

    pub fn active(&self) -> Option<&ActiveTool> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveTool> {
        self.active.as_mut()
    }

    /// Open a tool with default state. Inert entries leave the shell untouched.
    pub fn select(&mut self, id: ToolId) -> bool {
        match ActiveTool::open(id, &self.config) {
            Some(tool) => {
                tracing::info!(tool = id.id(), "tool opened");
                self.active = Some(tool);
                true
            }
            None => {
                tracing::debug!(tool = id.id(), "tool has no implementation");
                false
            }
        }
    }

    /// Close the open tool and drop its state
    pub fn back(&mut self) {
        if let Some(tool) = self.active.take() {
            tracing::info!(tool = tool.id().id(), "tool closed");
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(CATALOG.len(), 5);
        assert_eq!(all_tools().len(), 10);
        assert_eq!(all_tools().iter().filter(|t| t.is_available()).count(), 6);
    }

    #[test]
    fn test_select_and_back() {
        let mut shell = Shell::new(Config::default());
        assert_eq!(shell.selected(), None);

        assert!(shell.select(ToolId::UnitConverter));
        assert_eq!(shell.selected(), Some(ToolId::UnitConverter));

        shell.back();
        assert_eq!(shell.selected(), None);
        assert!(shell.active().is_none());
    }

    #[test]
    fn test_inert_tool_is_noop() {
        let mut shell = Shell::new(Config::default());
        assert!(!shell.select(ToolId::QrGenerator));
        assert_eq!(shell.selected(), None);

        shell.select(ToolId::ColorPicker);
        assert!(!shell.select(ToolId::TimestampConverter));
        assert_eq!(shell.selected(), Some(ToolId::ColorPicker));
    }

    #[test]
    fn test_reopen_resets_state() {
        let mut shell = Shell::new(Config::default());
        shell.select(ToolId::WordCounter);
        if let Some(ActiveTool::WordCounter(counter)) = shell.active_mut() {
            counter.set_text("some words here");
        }

        shell.back();
        shell.select(ToolId::WordCounter);

        match shell.active() {
            Some(ActiveTool::WordCounter(counter)) => assert!(counter.text.is_empty()),
            other => panic!("expected word counter, got {other:?}"),
        }
    }

    #[test]
    fn test_password_length_from_config() {
        let config = Config {
            password_length: 20,
            ..Config::default()
        };
        let mut shell = Shell::new(config);
        shell.select(ToolId::PasswordGenerator);

        match shell.active() {
            Some(ActiveTool::PasswordGenerator(generator)) => {
                assert_eq!(generator.policy.length, 20)
            }
            other => panic!("expected password generator, got {other:?}"),
        }
    }

    #[test]
    fn test_unit_converter_end_to_end() {
        let mut shell = Shell::new(Config::default());
        shell.select(ToolId::UnitConverter);

        let Some(ActiveTool::UnitConverter(converter)) = shell.active_mut() else {
            panic!("unit converter should be open");
        };
        converter.set_category(crate::units::Category::Length);
        converter.set_from_unit("meter").unwrap();
        converter.set_to_unit("kilometer").unwrap();
        converter.set_from_value("1000");
        assert_eq!(converter.to_value, "1");

        converter.swap();
        assert_eq!((converter.from_unit, converter.from_value.as_str()), ("kilometer", "1"));
        assert_eq!((converter.to_unit, converter.to_value.as_str()), ("meter", "1000"));
    }

    #[test]
    fn test_catalog_entries_serialize() {
        let json = serde_json::to_value(catalog_entries()).unwrap();
        assert_eq!(json[1]["tools"][1]["id"], "currency-converter");
        assert_eq!(json[2]["tools"][1]["available"], false);
    }
}
