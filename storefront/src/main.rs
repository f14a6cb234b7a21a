use storefront::checkout::Checkout;
use storefront::money::format_lei;
use storefront::tui::App;
use storefront::{Catalog, Config, print_banner, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. .env
    setup_environment();

    // 2. Load configuration
    let config = Config::from_env();
    let print_only = std::env::args().skip(1).any(|arg| arg == "--print");

    if print_only {
        storefront::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
        print_banner();
    } else {
        storefront::init_tui_logger(&config.log_level);
    }

    // 3. Catalog
    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    tracing::info!(
        products = catalog.len(),
        recipient = %config.recipient,
        "Kombucha storefront starting..."
    );

    if print_only {
        for product in catalog.products() {
            println!("{:>3}  {:<20} {:>12}", product.id, product.name, format_lei(product.price));
            println!("     {}", product.description);
        }
        return Ok(());
    }

    // 4. Storefront
    let mut app = App::new(catalog, Checkout::from_config(&config));
    if let Err(e) = storefront::tui::run(&mut app) {
        tracing::error!("Storefront error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
