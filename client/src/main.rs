use anyhow::Context;
use bookstore_client::{telemetry, BookstoreApi, Settings};
use bookstore_core::{CartItem, Customer, NewOrder, OrderId, OrderStatus};
use clap::{Parser, Subcommand};

/// Query and update the bookstore API.
#[derive(Debug, Parser)]
#[command(name = "bookstore", version)]
struct Cli {
    /// Base address of the bookstore API; overrides configuration.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List books, optionally filtered by title or author.
    Books {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Create, fetch, or update orders.
    #[command(subcommand)]
    Order(OrderCommand),
}

#[derive(Debug, Subcommand)]
enum OrderCommand {
    /// Place an order for one or more books.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        address: String,
        /// BOOK_ID or BOOK_ID:QUANTITY; repeat for several books.
        #[arg(long = "item", required = true, value_parser = parse_item)]
        items: Vec<CartItem>,
    },
    /// Show an order with its customer and lines.
    Get { id: OrderId },
    /// Set an order's status: en_attente, payee or livree.
    Status { id: OrderId, status: OrderStatus },
}

fn parse_item(raw: &str) -> Result<CartItem, String> {
    let (book_id, quantite) = match raw.split_once(':') {
        Some((book_id, quantite)) => (book_id, quantite),
        None => (raw, "1"),
    };
    let book_id = book_id
        .trim()
        .parse()
        .map_err(|_| format!("invalid book id in {raw:?}"))?;
    let quantite = quantite
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity in {raw:?}"))?;
    Ok(CartItem { book_id, quantite })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().context("failed to load bookstore settings")?;
    if let Some(base_url) = cli.base_url {
        settings.api.base_url = base_url;
    }
    telemetry::init(&settings.log);

    let api = BookstoreApi::from_settings(&settings.api).context("failed to build HTTP client")?;
    tracing::debug!(base_url = api.client().base_url(), "bookstore client ready");

    let output = match cli.command {
        Command::Books { search } => serde_json::to_value(api.list_books(search.as_deref()).await?)?,
        Command::Order(OrderCommand::Create {
            name,
            email,
            address,
            items,
        }) => {
            let payload = NewOrder {
                client: Customer {
                    id: None,
                    nom: name,
                    email,
                    adresse: address,
                    extra: Default::default(),
                },
                items,
            };
            serde_json::to_value(api.create_order(&payload).await?)?
        }
        Command::Order(OrderCommand::Get { id }) => serde_json::to_value(api.get_order(id).await?)?,
        Command::Order(OrderCommand::Status { id, status }) => {
            serde_json::to_value(api.update_order_status(id, status).await?)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
