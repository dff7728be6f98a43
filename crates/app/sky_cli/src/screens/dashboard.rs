use sky_api_client::endpoints::dashboard::{self, DashboardSummary};
use sky_core::format::{format_currency, format_date};

use super::table::Table;
use crate::Result;
use crate::context::AppContext;

pub async fn show(ctx: &AppContext) -> Result<()> {
    let summary = dashboard::summary(&ctx.client).await?;
    print!("{}", summary_table(&summary));
    Ok(())
}

/// Logged-in admin and session expiry, read from the token.
pub fn whoami(ctx: &AppContext) -> Result<()> {
    let admin = ctx
        .session
        .admin_id()
        .map_or_else(|| "-".to_string(), |id| id.to_string());
    let expires = ctx
        .session
        .claims()
        .and_then(|c| c.expires_at())
        .map_or_else(|| "-".to_string(), |at| format_date(&at.to_rfc3339()));

    println!("admin:   {admin}");
    println!("expires: {expires}");
    println!("server:  {}", ctx.client.base_url());
    Ok(())
}

fn summary_table(summary: &DashboardSummary) -> Table {
    let mut table = Table::new(["metric", "value"]);
    table
        .row(["users".to_string(), summary.total_usuarios.to_string()])
        .row(["pro users".to_string(), summary.usuarios_pro.to_string()])
        .row(["products".to_string(), summary.total_produtos.to_string()])
        .row([
            "active products".to_string(),
            summary.total_produtos_ativos.to_string(),
        ])
        .row(["total balance".to_string(), format_currency(summary.saldo_total)]);
    table
}
