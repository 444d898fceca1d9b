//! Terminal inventory application.

use anyhow::Context;

use stockroom_console::{ConsoleConfig, MainScreen, Terminal, session};
use stockroom_registry::Inventory;

fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env();
    stockroom_observability::init(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let inventory = if config.demo_data {
        Inventory::with_demo_data().context("failed to load demo data")?
    } else {
        Inventory::new()
    };
    tracing::info!(
        parts = inventory.all_parts().len(),
        products = inventory.all_products().len(),
        "inventory ready"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());
    let mut screen = MainScreen::new(inventory);

    session::run(&mut screen, &mut terminal, &config.prompt)
}
