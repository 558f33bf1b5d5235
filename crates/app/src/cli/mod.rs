use clap::{Parser, Subcommand};
use storefront_app::database::{self, Db};

mod customer;
mod product;

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront admin CLI", long_about = None)]
pub(crate) struct Cli {
    /// PostgreSQL connection string
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Customer(customer::CustomerCommand),
    Product(product::ProductCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let url = self
            .database_url
            .ok_or_else(|| "DATABASE_URL or --database-url is required".to_string())?;

        let pool = database::connect(&url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        let db = Db::new(pool);

        match self.command {
            Commands::Customer(command) => customer::run(db, command).await,
            Commands::Product(command) => product::run(db, command).await,
        }
    }
}
