//! Shop view: the public product listing.

use tabled::{Table, Tabled};

use fruitstand_client::api::{ApiClient, Product};
use fruitstand_client::session::SessionStore;

use super::CommandError;

#[derive(Tabled)]
struct ShopRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Price")]
    price: String,
}

impl From<&Product> for ShopRow {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
        }
    }
}

/// Fetch and render the product listing.
///
/// Open to everyone: greets the persisted user by name, or notes guest
/// browsing. Each fetch fully replaces whatever was shown before - nothing
/// is cached client-side.
///
/// # Errors
///
/// Returns an error if the listing request fails.
pub async fn browse(api: &ApiClient, session: &SessionStore) -> Result<(), CommandError> {
    match session.user() {
        Some(user) => tracing::info!("Hello, {}!", user.name),
        None => tracing::info!("Browsing as guest"),
    }

    let products = api.list_products().await?;
    render(&products);
    Ok(())
}

fn render(products: &[Product]) {
    if products.is_empty() {
        println!("No products yet.");
        return;
    }

    let table = Table::new(products.iter().map(ShopRow::from));
    println!("{table}");
}
