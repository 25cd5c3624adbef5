use crate::mprint;
use crate::terminal::{format, print};
use tally_common::catalog::Product;
use tally_common::config::Config;
use tally_core::catalog::Catalog;

pub fn catalog(cfg: &Config) -> anyhow::Result<()> {
    let mut catalog = Catalog::demo()?;
    print_catalog(&catalog, cfg);

    catalog.push(Product::new(3, "Weee", 35.0)?);
    tracing::debug!(len = catalog.len(), "product appended");

    if cfg.quiet < 2 {
        mprint!();
        print::header("after append", cfg.quiet);
    }
    print_catalog(&catalog, cfg);

    Ok(())
}

fn print_catalog(catalog: &Catalog, cfg: &Config) {
    if cfg.quiet > 1 {
        mprint!(&format::list(catalog.products()));
        return;
    }

    for (idx, product) in catalog.iter().enumerate() {
        print::tree_head(idx, product.title());
        print::as_tree_one_level(format::product_to_details(product));
    }
}
