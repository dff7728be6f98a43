use sky_api_client::endpoints::categories;

use super::table::{Table, field};
use crate::Result;
use crate::cli::CategoriesCommand;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, command: CategoriesCommand) -> Result<()> {
    let client = &ctx.client;
    match command {
        CategoriesCommand::List => list(ctx).await,
        CategoriesCommand::Add { name } => {
            categories::create(client, &name).await?;
            println!("Category \"{}\" added.", name.trim());
            Ok(())
        }
        CategoriesCommand::Rename { id, name } => {
            categories::rename(client, &id, &name).await?;
            println!("Category {id} renamed to \"{}\".", name.trim());
            Ok(())
        }
        CategoriesCommand::Delete { id } => {
            categories::delete(client, &id).await?;
            println!("Category {id} deleted.");
            Ok(())
        }
    }
}

pub async fn list(ctx: &AppContext) -> Result<()> {
    let listing = categories::list(&ctx.client).await?;
    let mut table = Table::new(["id", "name"]);
    for category in listing.as_array().map(Vec::as_slice).unwrap_or_default() {
        table.row([field(category, "id"), field(category, "nome")]);
    }
    if table.is_empty() {
        println!("No categories.");
    } else {
        print!("{table}");
    }
    Ok(())
}
