use clap::{Args, Subcommand};
use storefront_app::{
    database::Db,
    domain::customers::{CustomersService, PgCustomersService, models::NewCustomer},
};

#[derive(Debug, Args)]
pub(crate) struct CustomerCommand {
    #[command(subcommand)]
    command: CustomerSubcommand,
}

#[derive(Debug, Subcommand)]
enum CustomerSubcommand {
    /// Register a customer who can then check out
    Create(CreateCustomerArgs),
}

#[derive(Debug, Args)]
struct CreateCustomerArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,
}

pub(crate) async fn run(db: Db, command: CustomerCommand) -> Result<(), String> {
    match command.command {
        CustomerSubcommand::Create(args) => {
            let customer = PgCustomersService::new(db)
                .create_customer(NewCustomer {
                    name: args.name,
                    email: args.email,
                })
                .await
                .map_err(|error| format!("failed to create customer: {error}"))?;

            println!("customer_id: {}", customer.customer_id);
            println!("customer_email: {}", customer.email);

            Ok(())
        }
    }
}
