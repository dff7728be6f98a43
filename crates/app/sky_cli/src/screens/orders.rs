use serde_json::Value;
use sky_api_client::endpoints::orders;

use super::table::{Table, date, field, money, nested};
use crate::Result;
use crate::cli::OrdersCommand;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, command: OrdersCommand) -> Result<()> {
    let OrdersCommand::List {
        page,
        status,
        search,
    } = command;
    list(ctx, page, status.as_deref(), search.as_deref()).await
}

pub async fn list(
    ctx: &AppContext,
    page: u64,
    status: Option<&str>,
    search: Option<&str>,
) -> Result<()> {
    let page_no = page.max(1);
    let page = orders::list(&ctx.client, page_no).await?;
    let shown = orders::filter_orders(&page.pedidos, status, search);

    print!("{}", orders_table(&shown));
    println!(
        "page {page_no} of {} · {} orders in total",
        page.total_pages().max(1),
        page.total
    );
    Ok(())
}

fn orders_table(orders: &[&Value]) -> Table {
    let mut table = Table::new(["id", "buyer", "product", "total", "status", "date"]);
    for order in orders {
        table.row([
            field(order, "id"),
            nested(order, "comprador", "nome"),
            nested(order, "produto", "nome"),
            money(order.get("preco_total")),
            field(order, "status"),
            date(order.get("data_pedido")),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rows_show_buyer_and_product_names() {
        let order = json!({
            "id": 31,
            "comprador": {"nome": "Ana"},
            "produto": {"nome": "Capulana"},
            "preco_total": 1500,
            "status": "pendente",
            "data_pedido": "2024-11-02T09:15:00Z"
        });
        let out = orders_table(&[&order]).to_string();
        let row = out.lines().nth(2).unwrap();
        assert!(row.starts_with("31"));
        assert!(row.contains("Ana"));
        assert!(row.contains("Capulana"));
        assert!(row.contains("MZN 1.500,00"));
        assert!(row.contains("02/11/2024, 09:15"));
    }
}
