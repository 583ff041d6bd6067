// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;

use toolbox::{catalog_entries, Config};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = Config::from_env();

    if args.len() > 1 && args[1] == "catalog" {
        // Catalog mode
        print_catalog();
    } else {
        // UI mode (default)
        run_ui_mode(config)?;
    }

    Ok(())
}

fn print_catalog() {
    println!("🧰 Toolbox v{}", toolbox::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for category in catalog_entries() {
        println!("\n{} - {}", category.title, category.description);
        for tool in category.tools {
            let marker = if tool.available { "✓" } else { "·" };
            println!("  {} {:<22} {}", marker, tool.name, tool.description);
        }
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: Config) -> Result<()> {
    use anyhow::Context;
    use toolbox::Osc52Clipboard;

    toolbox::logging::init_for_tui(&config)?;

    // Currency lookups run here; the UI thread stays on the terminal
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    tracing::info!(version = toolbox::VERSION, "starting toolbox ui");

    let clipboard = Box::new(Osc52Clipboard::new(std::io::stdout()));
    let mut app = ui::App::new(config, runtime.handle().clone(), clipboard);
    ui::run_ui(&mut app)?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: Config) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the API: cargo run --bin toolbox-server --features server");
    std::process::exit(1);
}
