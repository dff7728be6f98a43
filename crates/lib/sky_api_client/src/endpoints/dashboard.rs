//! System summary shown on the dashboard.

use serde::Deserialize;
use serde_json::Value;
use sky_core::format::number_from_json;

use crate::{ApiClient, ApiResult};

/// `/admin/sistema/resumo/`. Missing counters read as zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    pub total_usuarios: u64,
    pub total_produtos_ativos: u64,
    pub total_produtos: u64,
    #[serde(deserialize_with = "lenient_number")]
    pub saldo_total: f64,
    pub usuarios_pro: u64,
}

// The balance arrives as a number or a decimal string depending on the backend version.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_json(&value).unwrap_or_default())
}

pub async fn summary(client: &ApiClient) -> ApiResult<DashboardSummary> {
    let summary: Option<DashboardSummary> = client.get_json("/admin/sistema/resumo/").await?;
    Ok(summary.unwrap_or_default())
}
