use serde_json::Value;
use sky_api_client::endpoints::denuncias;

use super::table::{Table, date, field, text};
use crate::Result;
use crate::cli::DenunciasCommand;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, command: DenunciasCommand) -> Result<()> {
    match command {
        DenunciasCommand::List => list(ctx).await,
        DenunciasCommand::Delete { id } => {
            denuncias::delete(&ctx.client, &id).await?;
            println!("Report {id} dismissed.");
            Ok(())
        }
    }
}

pub async fn list(ctx: &AppContext) -> Result<()> {
    let listing = denuncias::list(&ctx.client).await?;
    let table = reports_table(&listing);
    if table.is_empty() {
        println!("No reports.");
    } else {
        print!("{table}");
    }
    Ok(())
}

fn reports_table(listing: &Value) -> Table {
    let mut table = Table::new(["id", "product", "reason", "status", "date"]);
    for report in listing.as_array().map(Vec::as_slice).unwrap_or_default() {
        // `produto` is either a nested record or a bare ID.
        let product = match report.get("produto") {
            Some(p @ Value::Object(_)) => text(p.get("nome")),
            other => text(other),
        };
        table.row([
            field(report, "id"),
            product,
            field(report, "motivo"),
            field(report, "status"),
            date(report.get("data_denuncia")),
        ]);
    }
    table
}
