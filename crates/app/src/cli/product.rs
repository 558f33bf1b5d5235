use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use storefront_app::{
    database::Db,
    domain::products::{
        PgProductsService, ProductsService,
        models::{NewProduct, Product, ProductId, ProductUpdate},
    },
};

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Add a product to the catalog
    Create(CreateProductArgs),

    /// Set a product's stock level
    Restock(RestockArgs),
}

#[derive(Debug, Args)]
struct CreateProductArgs {
    #[arg(long)]
    name: String,

    /// Unique product code
    #[arg(long)]
    code: String,

    #[arg(long, default_value = "")]
    description: String,

    /// Unit price, e.g. 19.99
    #[arg(long)]
    price: Decimal,

    #[arg(long, default_value_t = 0)]
    stock: u32,
}

#[derive(Debug, Args)]
struct RestockArgs {
    #[arg(long)]
    product: ProductId,

    /// New absolute stock level
    #[arg(long)]
    stock: u32,
}

pub(crate) async fn run(db: Db, command: ProductCommand) -> Result<(), String> {
    let service = PgProductsService::new(db);

    let product = match command.command {
        ProductSubcommand::Create(args) => service
            .create_product(NewProduct {
                name: args.name,
                code: args.code,
                description: args.description,
                price: args.price,
                stock: args.stock,
            })
            .await
            .map_err(|error| format!("failed to create product: {error}"))?,
        ProductSubcommand::Restock(args) => {
            let current = service
                .get_product(args.product)
                .await
                .map_err(|error| format!("failed to load product {}: {error}", args.product))?;

            service
                .update_product(
                    args.product,
                    ProductUpdate {
                        stock: args.stock,
                        ..ProductUpdate::from(current)
                    },
                )
                .await
                .map_err(|error| format!("failed to restock product: {error}"))?
        }
    };

    print_product(&product);

    Ok(())
}

fn print_product(product: &Product) {
    println!("product_id: {}", product.product_id);
    println!("product_code: {}", product.code);
    println!("price: {}", product.price);
    println!("stock: {}", product.stock);
}
