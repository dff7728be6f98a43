//! Panel administrators.

use serde_json::Value;
use sky_api_client::endpoints::admins::{self, AdminUpdate, NewAdmin, id_string};
use sky_core::session::AdminId;

use super::table::{Table, details, field};
use crate::Result;
use crate::cli::{AdminFields, AdminsCommand};
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, command: AdminsCommand) -> Result<()> {
    let client = &ctx.client;
    match command {
        AdminsCommand::List { ids } => list(ctx, ids.into_iter().map(AdminId::new)).await,
        AdminsCommand::Show { id } => show(ctx, &id).await,
        AdminsCommand::Create {
            name,
            email,
            password,
        } => {
            let created = admins::create(client, &NewAdmin::new(&name, &email, password)).await?;
            match created.get("id").and_then(id_string) {
                Some(id) => {
                    ctx.remember_admin(AdminId::new(id.as_str()))?;
                    println!("Admin {id} created.");
                }
                None => println!("Admin created."),
            }
            Ok(())
        }
        AdminsCommand::Edit { id, fields } => {
            let current = admins::get(client, &id).await?;
            let update = apply(AdminUpdate::from_record(&current), fields);
            admins::update(client, &id, &update).await?;
            println!("Admin {id} updated.");
            Ok(())
        }
        AdminsCommand::Delete { id } => {
            admins::delete(client, &id).await?;
            ctx.forget_admin(&AdminId::new(id.as_str()))?;
            println!("Admin {id} deleted.");
            Ok(())
        }
    }
}

pub async fn list(ctx: &AppContext, extra: impl IntoIterator<Item = AdminId>) -> Result<()> {
    let mut known = ctx.known_admins();
    known.extend(extra);
    let records = admins::list(&ctx.client, &known).await?;
    print!("{}", admins_table(&records));
    Ok(())
}

pub async fn show(ctx: &AppContext, id: &str) -> Result<()> {
    let record = admins::get(&ctx.client, id).await?;
    print!("{}", details(&record));
    Ok(())
}

fn apply(mut update: AdminUpdate, fields: AdminFields) -> AdminUpdate {
    if let Some(name) = fields.name {
        update.nome_completo = name.trim().to_string();
    }
    if let Some(email) = fields.email {
        update.email = email.trim().to_lowercase();
    }
    if let Some(username) = fields.username {
        update.username = username.trim().to_string();
    }
    update
}

fn admins_table(records: &[Value]) -> Table {
    let mut table = Table::new(["id", "name", "email", "username"]);
    for admin in records {
        let name = if admin.get("nome_completo").is_some() {
            field(admin, "nome_completo")
        } else {
            field(admin, "nome")
        };
        table.row([
            field(admin, "id"),
            name,
            field(admin, "email"),
            field(admin, "username"),
        ]);
    }
    table
}
