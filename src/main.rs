use checkout_client::application::client::CustomerSources;
use checkout_client::application::registry::ClientRegistry;
use checkout_client::config::PublishableKey;
use checkout_client::domain::source::{
    CardBrand, ChargeAmount, FundingType, PaymentSource, SourceId, SourceToken,
};
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Merchant backend base URL. Omit to keep sources in memory only.
    #[arg(long)]
    base_url: Option<String>,

    /// Customer identifier on the merchant backend.
    #[arg(long)]
    customer: Option<String>,

    /// Publishable key issued by the payment provider.
    #[arg(long, env = "PUBLISHABLE_KEY")]
    publishable_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the customer's saved sources, marking the default.
    Fetch,
    /// Charge a source.
    Charge {
        /// Source token id to charge.
        #[arg(long)]
        source: String,

        /// Amount in minor currency units (e.g. cents).
        #[arg(long)]
        amount: u64,
    },
    /// Make a source the customer's default.
    Select {
        #[arg(long)]
        source: String,
    },
    /// Attach a card source, then print the resulting list.
    Attach {
        #[arg(long)]
        source: String,

        #[arg(long)]
        last4: String,

        #[arg(long)]
        brand: CardBrand,

        #[arg(long)]
        exp_month: u32,

        #[arg(long)]
        exp_year: u32,

        #[arg(long, default_value = "credit")]
        funding: FundingType,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut registry = ClientRegistry::new(cli.publishable_key.map(PublishableKey::new));
    let client = registry
        .get_or_create(cli.base_url.as_deref(), cli.customer.as_deref())
        .into_diagnostic()?;

    match cli.command {
        Command::Fetch => {
            let listing = client.fetch_sources().await.into_diagnostic()?;
            print_sources(&listing);
        }
        Command::Charge { source, amount } => {
            let amount = ChargeAmount::new(amount).into_diagnostic()?;
            let token = SourceToken::Opaque(SourceId::new(source));
            client.charge(&token, amount).await.into_diagnostic()?;
            println!("charge accepted");
        }
        Command::Select { source } => {
            let token = SourceToken::Opaque(SourceId::new(source));
            client
                .select_default_source(&token)
                .await
                .into_diagnostic()?;
            println!("select request accepted");
        }
        Command::Attach {
            source,
            last4,
            brand,
            exp_month,
            exp_year,
            funding,
        } => {
            let card = PaymentSource {
                id: SourceId::new(source),
                brand,
                last4,
                exp_month,
                exp_year,
                funding,
            };
            client
                .attach_source(&SourceToken::Card(card))
                .await
                .into_diagnostic()?;

            let listing = client.fetch_sources().await.into_diagnostic()?;
            print_sources(&listing);
        }
    }

    Ok(())
}

fn print_sources(listing: &CustomerSources) {
    if listing.sources.is_empty() {
        println!("no saved sources");
        return;
    }
    for card in &listing.sources {
        let marker = if listing.default_source_id.as_ref() == Some(&card.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {} {} **** {} ({}/{}, {})",
            card.id, card.brand, card.last4, card.exp_month, card.exp_year, card.funding
        );
    }
}
