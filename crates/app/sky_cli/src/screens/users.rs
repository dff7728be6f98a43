//! Users, verification reviews and identity documents.

use serde_json::Value;
use sky_api_client::endpoints::users::{self, ReviewDecision, UserFilter};

use super::table::{Table, date, details, field, money, text};
use crate::cli::{UserListFilter, UsersCommand};
use crate::context::AppContext;
use crate::{Error, Result};

impl From<UserListFilter> for UserFilter {
    fn from(filter: UserListFilter) -> Self {
        match filter {
            UserListFilter::All => UserFilter::All,
            UserListFilter::Verified => UserFilter::Verified,
            UserListFilter::Unverified => UserFilter::Unverified,
            UserListFilter::Pending => UserFilter::Pending,
        }
    }
}

pub async fn run(ctx: &AppContext, command: UsersCommand) -> Result<()> {
    let client = &ctx.client;
    match command {
        UsersCommand::List { filter } => list(ctx, filter.into()).await,
        UsersCommand::Show { id } => show(ctx, &id).await,
        UsersCommand::Photos { id } => photos(ctx, &id).await,
        UsersCommand::Products { id, page, limit } => {
            let listing = users::products(client, &id, page, limit).await?;
            print!("{}", products_table(&listing));
            println!(
                "page {page} · {} products in total",
                text(listing.get("total"))
            );
            Ok(())
        }
        UsersCommand::Transactions { id } => {
            let listing = users::transactions(client, &id).await?;
            print!("{}", transactions_table(&listing));
            Ok(())
        }
        UsersCommand::Activate { id } => {
            users::set_active(client, &id, true).await?;
            println!("User {id} activated.");
            Ok(())
        }
        UsersCommand::Deactivate { id } => {
            users::set_active(client, &id, false).await?;
            println!("User {id} deactivated.");
            Ok(())
        }
        UsersCommand::Approve { id } => {
            users::review(client, &id, &ReviewDecision::Approve).await?;
            println!("User {id} approved.");
            Ok(())
        }
        UsersCommand::Reject { id, reason } => {
            users::review(client, &id, &ReviewDecision::Reject { reason }).await?;
            println!("User {id} rejected.");
            Ok(())
        }
        UsersCommand::Delete { id } => {
            users::delete(client, &id).await?;
            println!("User {id} deleted.");
            Ok(())
        }
    }
}

pub async fn list(ctx: &AppContext, filter: UserFilter) -> Result<()> {
    let listing = users::list(&ctx.client, filter).await?;
    let rows = users::user_rows(&listing);
    if rows.is_empty() {
        println!("No users.");
        return Ok(());
    }
    print!("{}", users_table(&rows));
    Ok(())
}

/// The user record comes from the full listing; there is no single-user
/// endpoint.
pub async fn show(ctx: &AppContext, id: &str) -> Result<()> {
    let user = find(ctx, id, UserFilter::All).await?;
    print!("{}", details(&user));
    Ok(())
}

/// Document links are only present on the verified-users listing.
pub async fn photos(ctx: &AppContext, id: &str) -> Result<()> {
    let user = find(ctx, id, UserFilter::Verified).await?;
    let docs = users::document_photos(&user);
    if docs.is_empty() {
        println!("User {id} has no documents.");
        return Ok(());
    }
    let mut table = Table::new(["document", "url"]);
    for (kind, file) in docs {
        let url = users::document_url(&ctx.client, &file)?;
        table.row([kind.to_string(), url.to_string()]);
    }
    print!("{table}");
    Ok(())
}

async fn find(ctx: &AppContext, id: &str, filter: UserFilter) -> Result<Value> {
    let listing = users::list(&ctx.client, filter).await?;
    users::find_user(&listing, id)
        .ok_or_else(|| Error::Custom(format!("User {id} not found")))
}

fn users_table(rows: &[Value]) -> Table {
    let mut table = Table::new(["id", "name", "email", "type", "active", "balance"]);
    for user in rows {
        let name = user
            .get("nome")
            .or_else(|| user.get("nome_completo"))
            .or_else(|| user.get("username"));
        table.row([
            field(user, "id"),
            text(name),
            field(user, "email"),
            field(user, "tipo"),
            field(user, "ativo"),
            money(user.get("saldo")),
        ]);
    }
    table
}

fn products_table(listing: &Value) -> Table {
    let mut table = Table::new(["id", "name", "price", "active", "published"]);
    let products = listing
        .get("produtos")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for product in products {
        table.row([
            field(product, "id"),
            field(product, "nome"),
            money(product.get("preco")),
            field(product, "ativo"),
            date(product.get("data_publicacao")),
        ]);
    }
    table
}

fn transactions_table(listing: &Value) -> Table {
    let mut table = Table::new(["id", "type", "amount", "status", "date"]);
    let transactions = match listing {
        Value::Array(items) => items.as_slice(),
        other => other
            .get("transacoes")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
    };
    for tx in transactions {
        table.row([
            field(tx, "id"),
            field(tx, "tipo"),
            money(tx.get("valor")),
            field(tx, "status"),
            date(tx.get("data")),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn users_table_falls_back_to_full_name() {
        let rows = vec![json!({"id": 1, "nome_completo": "Ana M.", "email": "a@x.mz", "ativo": true, "saldo": 250})];
        let out = users_table(&rows).to_string();
        assert!(out.contains("Ana M."));
        assert!(out.contains("MZN 250,00"));
        assert!(out.contains("yes"));
    }

    #[test]
    fn products_table_reads_paged_listing() {
        let listing = json!({
            "total": 1,
            "limit": 10,
            "produtos": [{"id": 4, "nome": "Capulana", "preco": "1200", "ativo": false, "data_publicacao": "2024-03-05T14:30:00"}]
        });
        let out = products_table(&listing).to_string();
        assert!(out.contains("Capulana"));
        assert!(out.contains("MZN 1.200,00"));
        assert!(out.contains("05/03/2024, 14:30"));
    }

    #[test]
    fn transactions_accept_bare_or_wrapped_lists() {
        let wrapped = json!({"total": 1, "transacoes": [{"id": 8, "tipo": "deposito", "valor": 50, "status": "concluido"}]});
        let bare = json!([{"id": 8, "tipo": "deposito", "valor": 50, "status": "concluido"}]);
        assert_eq!(
            transactions_table(&wrapped).to_string(),
            transactions_table(&bare).to_string()
        );
        assert!(transactions_table(&bare).to_string().contains("deposito"));
    }
}
