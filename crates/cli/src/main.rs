//! Fruitstand CLI - terminal storefront.
//!
//! Subcommands map onto the storefront's views: browsing is open to
//! everyone, login persists the session across invocations, and the admin
//! dashboard is gated by a recorded admin login.
//!
//! # Usage
//!
//! ```bash
//! # Browse the shop (guest or logged in)
//! fruitstand shop
//!
//! # Create an account, then sign in
//! fruitstand signup -n "Jane Doe" -e jane@example.com -p secret
//! fruitstand login -e jane@example.com -p secret
//!
//! # Admin area
//! fruitstand admin login -e admin@example.com -p secret
//! fruitstand admin dashboard
//! fruitstand admin create-product -n Kiwi -d "Fuzzy and green" \
//!     --price 2.50 -s 12 -e admin@example.com -p secret
//! ```
//!
//! # Environment Variables
//!
//! - `FRUITSTAND_BACKEND_URL` - Backend API base URL (default: `http://localhost:8000`)
//! - `FRUITSTAND_SESSION_DIR` - Session state directory (default: `$HOME/.fruitstand`)

#![cfg_attr(not(test), forbid(unsafe_code))]
// Rendered views (product tables, identity dumps) go to stdout; status goes to tracing.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use fruitstand_client::api::ApiClient;
use fruitstand_client::config::ClientConfig;
use fruitstand_client::session::SessionStore;

mod commands;

use commands::admin::CreateProductInput;

#[derive(Parser)]
#[command(name = "fruitstand")]
#[command(author, version, about = "Fruitstand terminal storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product listing
    Shop,
    /// Create a user account
    Signup {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Log in and browse the shop
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Log out the current user
    Logout,
    /// Show the persisted identity
    Whoami,
    /// Admin area
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Log in with the dedicated admin credentials
    Login {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
    /// Show the inventory dashboard
    Dashboard,
    /// Create a product
    CreateProduct {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Product description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Price, e.g. 2.50
        #[arg(long)]
        price: String,

        /// Units on hand
        #[arg(short, long)]
        stock: u32,

        /// Admin email, re-sent with the request
        #[arg(short, long)]
        email: String,

        /// Admin password, re-sent with the request
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing; defaults to info for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fruitstand_cli=info,fruitstand_client=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let session = SessionStore::open(config.session_dir.clone());
    let api = ApiClient::new(&config);

    match cli.command {
        Commands::Shop => commands::shop::browse(&api, &session).await?,
        Commands::Signup {
            name,
            email,
            password,
        } => commands::auth::signup(&api, &name, &email, &password).await?,
        Commands::Login { email, password } => {
            commands::auth::login(&api, &session, &email, &password).await?;
        }
        Commands::Logout => commands::auth::logout(&session)?,
        Commands::Whoami => commands::auth::whoami(&session)?,
        Commands::Admin { action } => match action {
            AdminAction::Login { email, password } => {
                commands::admin::login(&api, &session, &email, &password).await?;
            }
            AdminAction::Dashboard => commands::admin::dashboard(&api, &session).await?,
            AdminAction::CreateProduct {
                name,
                description,
                price,
                stock,
                email,
                password,
            } => {
                commands::admin::create_product(
                    &api,
                    &session,
                    CreateProductInput {
                        name,
                        description,
                        price,
                        stock,
                        email,
                        password,
                    },
                )
                .await?;
            }
        },
    }
    Ok(())
}
