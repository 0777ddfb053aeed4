//! Admin area: login, inventory dashboard, product creation.
//!
//! The dashboard and create commands gate their *rendering* on the recorded
//! admin flag. The create request itself is authorized by the credentials in
//! its body - the backend verifies them on every call, and the flag never
//! influences the request.

use tabled::{Table, Tabled};

use fruitstand_client::api::{ApiClient, NewProduct, Product};
use fruitstand_client::routes::{Route, RouteDecision};
use fruitstand_client::session::SessionStore;
use fruitstand_core::{AdminCredentials, Email, Price};

use super::CommandError;

#[derive(Tabled)]
struct InventoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Stock")]
    stock: u32,
}

impl From<&Product> for InventoryRow {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            stock: product.stock,
        }
    }
}

/// Admin login: on success, record the admin flag and show the dashboard.
///
/// The backend's response payload is discarded - only the marker is kept,
/// never an admin identity or token.
///
/// # Errors
///
/// Returns an error if the email is malformed, the login is rejected, or
/// the marker cannot be written.
pub async fn login(
    api: &ApiClient,
    session: &SessionStore,
    email: &str,
    password: &str,
) -> Result<(), CommandError> {
    let email = Email::parse(email)?;
    api.login_admin(&email, password).await?;
    session.set_admin_flag()?;
    dashboard(api, session).await
}

/// Render the inventory dashboard.
///
/// # Errors
///
/// Returns [`CommandError::AdminRequired`] when no admin login is recorded,
/// or an error if the listing request fails.
pub async fn dashboard(api: &ApiClient, session: &SessionStore) -> Result<(), CommandError> {
    require_dashboard(session)?;

    let products = api.list_products().await?;
    render_inventory(&products);
    Ok(())
}

/// Input for [`create_product`].
pub struct CreateProductInput {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: u32,
    pub email: String,
    pub password: String,
}

/// Create a product.
///
/// # Errors
///
/// Returns [`CommandError::AdminRequired`] when no admin login is recorded,
/// or an error if the input fails local parsing or the backend rejects the
/// request. A rejected create triggers no listing refresh.
pub async fn create_product(
    api: &ApiClient,
    session: &SessionStore,
    input: CreateProductInput,
) -> Result<(), CommandError> {
    require_dashboard(session)?;

    let product = NewProduct {
        name: input.name,
        description: input.description,
        price: Price::parse(&input.price)?,
        stock: input.stock,
    };
    let credentials = AdminCredentials::new(Email::parse(&input.email)?, input.password);

    api.create_product(&product, &credentials).await?;
    tracing::info!("Product created");
    Ok(())
}

/// Render-or-redirect for the admin dashboard views.
fn require_dashboard(session: &SessionStore) -> Result<(), CommandError> {
    match Route::AdminDashboard.resolve(session) {
        RouteDecision::Render => Ok(()),
        RouteDecision::Redirect(target) => {
            tracing::warn!(
                "Restricted access. Use the dedicated admin credentials (see {})",
                target.path()
            );
            Err(CommandError::AdminRequired)
        }
    }
}

fn render_inventory(products: &[Product]) {
    if products.is_empty() {
        println!("No products yet.");
        return;
    }

    let table = Table::new(products.iter().map(InventoryRow::from));
    println!("{table}");
}
