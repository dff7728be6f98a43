//! Advertisements and their review.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::{ApiClient, ApiError, ApiResult};

/// Review status accepted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdStatus {
    Aprovado,
    Pendente,
    Rejeitado,
}

impl AdStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AdStatus::Aprovado => "aprovado",
            AdStatus::Pendente => "pendente",
            AdStatus::Rejeitado => "rejeitado",
        }
    }
}

impl std::str::FromStr for AdStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aprovado" => Ok(AdStatus::Aprovado),
            "pendente" => Ok(AdStatus::Pendente),
            "rejeitado" => Ok(AdStatus::Rejeitado),
            other => Err(ApiError::Validation(format!(
                "unknown ad status '{other}' (expected aprovado, pendente or rejeitado)"
            ))),
        }
    }
}

/// Replacement image for an ad.
#[derive(Clone)]
pub struct AdPhoto {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for AdPhoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdPhoto")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Review form. `None` fields are left out of the request.
#[derive(Debug, Clone)]
pub struct AdReview {
    pub status: AdStatus,
    pub dias_para_expirar: u32,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub preco: Option<f64>,
    pub link: Option<String>,
    pub foto: Option<AdPhoto>,
}

impl AdReview {
    pub fn new(status: AdStatus, dias_para_expirar: u32) -> Self {
        Self {
            status,
            dias_para_expirar,
            nome: None,
            descricao: None,
            preco: None,
            link: None,
            foto: None,
        }
    }

    /// Text fields of the multipart body, in submission order.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("status", self.status.as_str().to_string()),
            ("dias_para_expirar", self.dias_para_expirar.to_string()),
        ];
        if let Some(nome) = &self.nome {
            fields.push(("nome", nome.clone()));
        }
        if let Some(descricao) = &self.descricao {
            fields.push(("descricao", descricao.clone()));
        }
        if let Some(preco) = self.preco {
            fields.push(("preco", preco.to_string()));
        }
        if let Some(link) = &self.link {
            fields.push(("link", link.clone()));
        }
        fields
    }

    fn into_form(self) -> Form {
        let form = self
            .text_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));
        match self.foto {
            Some(photo) => form.part("foto", Part::bytes(photo.bytes).file_name(photo.file_name)),
            None => form,
        }
    }
}

/// Ads as listed on the advertisements management page.
pub async fn list_managed(client: &ApiClient) -> ApiResult<Value> {
    client.get_json("/admin/anuncios/").await
}

pub async fn list(client: &ApiClient) -> ApiResult<Value> {
    client.get_json("/admin/anuncios/listar").await
}

pub async fn get(client: &ApiClient, id: &str) -> ApiResult<Value> {
    client.get_json(&format!("/admin/anuncios/listar/{id}")).await
}

/// Submit a review as `multipart/form-data`.
pub async fn review(client: &ApiClient, id: &str, review: AdReview) -> ApiResult<Value> {
    let builder = client
        .request(Method::PUT, &format!("/admin/anuncios/revisar/{id}"))?
        .multipart(review.into_form());
    client.execute(builder).await
}
