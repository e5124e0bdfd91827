//! Financial product catalog walkthrough
//!
//! This example demonstrates:
//! - Loading list settings (from `catalog.yaml` when present)
//! - Seeding an in-memory provider
//! - Searching, sorting and paging through the list
//! - Creating and deleting products with automatic reload
//! - Listening to list events

use catalog::prelude::*;
use std::path::Path;

fn seed() -> anyhow::Result<Vec<FinancialProduct>> {
    let rows = [
        ("trj-crd", "Tarjeta de crédito", "Credit card for everyday purchases", (2025, 1, 1)),
        ("cta-aho", "Cuenta de ahorro", "Savings account with monthly interest", (2024, 6, 15)),
        ("cdt-360", "CDT 360", "Fixed-term deposit over one year", (2025, 3, 10)),
        ("hip-vvd", "Crédito hipotecario", "Home loan up to twenty years", (2023, 11, 2)),
        ("inv-fnd", "Fondo de inversión", "Managed fund for long-term savings", (2024, 9, 30)),
        ("seg-vid", "Seguro de vida", "Life insurance bundled with the account", (2025, 5, 20)),
        ("crd-lib", "Crédito libre inversión", "Personal loan for any purpose", (2024, 2, 1)),
    ];

    rows.into_iter()
        .map(|(id, name, description, (y, m, d))| -> anyhow::Result<FinancialProduct> {
            let release = NaiveDate::from_ymd_opt(y, m, d)
                .ok_or_else(|| anyhow::anyhow!("invalid seed date for {}", id))?;
            let revision = NaiveDate::from_ymd_opt(y + 1, m, d)
                .ok_or_else(|| anyhow::anyhow!("invalid revision date for {}", id))?;
            Ok(FinancialProduct::new(
                id,
                name,
                description,
                format!("https://cdn.example.com/logos/{}.png", id),
                release,
                revision,
            )?)
        })
        .collect()
}

fn print_page<P: DataProvider<FinancialProduct>>(
    title: &str,
    list: &ListController<FinancialProduct, P>,
) {
    println!("── {} ──", title);
    for product in list.page_items() {
        println!(
            "   {:<10} {:<26} released {}",
            product.id, product.name, product.date_release
        );
    }
    println!(
        "   page {} of {} ({} matching, {} per page)\n",
        list.current_page(),
        list.total_pages(),
        list.view().matched(),
        list.page_size()
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = if Path::new("catalog.yaml").exists() {
        CatalogConfig::from_yaml_file("catalog.yaml")?
    } else {
        CatalogConfig::default_config()
    };
    config.logging.init();

    println!("Financial Product Catalog Demo");
    println!("==============================\n");

    let provider = Arc::new(InMemoryDataProvider::with_items(seed()?));
    let mut list = ListController::new(Arc::clone(&provider), &config.list)?;
    let mut events = list.subscribe();

    list.reload().await?;
    print_page("First page", &list);

    list.go_to_page(2);
    print_page("Second page", &list);

    list.set_search_term("crédito");
    print_page("Search: crédito", &list);

    list.set_search_term("");
    list.sort_by("date_release");
    print_page("Oldest first", &list);

    list.sort_by("date_release");
    print_page("Newest first", &list);

    list.set_page_size(10);
    print_page("Page size 10", &list);

    // ?search=cr%C3%A9dito&sort=name:desc&page=1&limit=2
    let params: QueryParams = serde_json::from_value(serde_json::json!({
        "search": "crédito", "sort": "name:desc", "page": 1, "limit": 2
    }))?;
    list.apply_query(&params);
    print_page("Query: search=crédito sort=name:desc limit=2", &list);

    list.apply_query(&QueryParams {
        limit: 10,
        ..QueryParams::default()
    });
    print_page("Query reset", &list);

    list.open_create();
    list.create_from(ProductDraft {
        id: "tar-dig".to_string(),
        name: "Tarjeta digital".to_string(),
        description: "Virtual card for online shopping".to_string(),
        logo: "https://cdn.example.com/logos/tar-dig.png".to_string(),
        date_release: "2025-08-01".to_string(),
        date_revision: "2026-08-01".to_string(),
    })
    .await?;
    print_page("After create", &list);

    let invalid = ProductDraft {
        id: "bad".to_string(),
        name: "No dates".to_string(),
        ..ProductDraft::default()
    };
    if let Err(e) = list.create_from(invalid).await {
        println!("Rejected draft: {}\n", e);
    }

    if let Some(target) = list.page_items().first().cloned() {
        list.open_delete(target.clone())?;
        list.delete(target.id()).await?;
        print_page(&format!("After deleting {}", target.id()), &list);
    }

    if let Err(e) = list.delete("missing").await {
        println!("Delete failed: {}", e);
        println!("List error: {:?}\n", list.error());
    }

    println!("Events:");
    while let Ok(envelope) = events.try_recv() {
        println!(
            "   {} {}",
            envelope.timestamp.format("%H:%M:%S%.3f"),
            serde_json::to_string(&envelope.event)?
        );
    }

    Ok(())
}
