//! Advertisements.

use std::path::Path;

use serde_json::Value;
use sky_api_client::endpoints::ads::{self, AdPhoto, AdReview, AdStatus};

use super::table::{Table, date, details, field, money};
use crate::cli::AdsCommand;
use crate::context::AppContext;
use crate::{Error, Result};

pub async fn run(ctx: &AppContext, command: AdsCommand) -> Result<()> {
    match command {
        AdsCommand::List { managed } => list(ctx, managed).await,
        AdsCommand::Show { id } => show(ctx, &id).await,
        AdsCommand::Review {
            id,
            status,
            days,
            name,
            description,
            price,
            link,
            photo,
        } => {
            let status: AdStatus = status.parse()?;
            let mut review = AdReview::new(status, days);
            review.nome = name;
            review.descricao = description;
            review.preco = price;
            review.link = link;
            review.foto = photo.as_deref().map(read_photo).transpose()?;

            ads::review(&ctx.client, &id, review).await?;
            println!("Ad {id} marked {}.", status.as_str());
            Ok(())
        }
    }
}

pub async fn list(ctx: &AppContext, managed: bool) -> Result<()> {
    let listing = if managed {
        ads::list_managed(&ctx.client).await?
    } else {
        ads::list(&ctx.client).await?
    };
    let table = ads_table(&listing);
    if table.is_empty() {
        println!("No ads.");
    } else {
        print!("{table}");
    }
    Ok(())
}

pub async fn show(ctx: &AppContext, id: &str) -> Result<()> {
    let ad = ads::get(&ctx.client, id).await?;
    print!("{}", details(&ad));
    Ok(())
}

fn read_photo(path: &Path) -> Result<AdPhoto> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| Error::Custom(format!("Not a file: {}", path.display())))?;
    Ok(AdPhoto { file_name, bytes })
}

fn ads_table(listing: &Value) -> Table {
    let items = match listing {
        Value::Array(items) => items.as_slice(),
        other => other
            .get("anuncios")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
    };
    let mut table = Table::new(["id", "name", "price", "status", "created", "expires"]);
    for ad in items {
        table.row([
            field(ad, "id"),
            field(ad, "nome"),
            money(ad.get("preco")),
            field(ad, "status"),
            date(ad.get("criado_em")),
            date(ad.get("expira_em")),
        ]);
    }
    table
}
