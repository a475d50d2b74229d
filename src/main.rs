pub use battle_sim::*;

fn main() {
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();

    let catalog = match species::SpeciesCatalog::from_path(&config.species.catalog_path) {
        Ok(catalog) => {
            tracing::info!(
                "Loaded {} species from {}",
                catalog.len(),
                config.species.catalog_path
            );
            catalog
        }
        Err(err) => {
            tracing::warn!("Falling back to the built-in species catalog: {err}");
            species::SpeciesCatalog::builtin()
        }
    };

    let mut app = console::ConsoleApp::new(config, catalog);
    if let Err(err) = app.run() {
        tracing::error!("Console session failed: {err}");
        std::process::exit(1);
    }
}
