//! Cliente HTTP para a API do Todoist

use crate::error::{Result, TodoistError};
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// URL base da superfície REST (v8): projetos e tarefas
pub const DEFAULT_REST_URL: &str = "https://beta.todoist.com/API/v8";

/// URL base da superfície sync (v7): coleção de itens concluídos
pub const DEFAULT_SYNC_URL: &str = "https://todoist.com/api/v7";

/// Cliente para interagir com a API do Todoist
///
/// Suporta ambas as superfícies da API:
/// - REST v8: projetos e tarefas (CRUD)
/// - sync v7: itens concluídos (`/completed/get_all`)
///
/// O cliente guarda apenas configuração imutável (token, URLs base,
/// handle do `reqwest::Client`) e pode ser clonado e compartilhado entre
/// tasks concorrentes.
#[derive(Clone)]
pub struct TodoistClient {
    http_client: HttpClient,
    api_token: String,
    base_url: String,
    sync_base_url: String,
}

impl TodoistClient {
    /// Cria um novo cliente Todoist
    ///
    /// # Argumentos
    ///
    /// * `api_token` - Token de autenticação (enviado como `Bearer <token>`)
    ///
    /// # Timeouts
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_timeouts(api_token, 30, 5)
    }

    /// Cria um novo cliente com timeouts customizados
    pub fn with_timeouts(
        api_token: impl Into<String>,
        total_timeout_secs: u64,
        connect_timeout_secs: u64,
    ) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(total_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
            .map_err(|e| TodoistError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_token: api_token.into(),
            base_url: DEFAULT_REST_URL.to_string(),
            sync_base_url: DEFAULT_SYNC_URL.to_string(),
        })
    }

    /// Cria um cliente apontando para URLs base alternativas
    ///
    /// Usado em testes para apontar o cliente a um servidor local.
    pub fn with_base_urls(
        api_token: impl Into<String>,
        base_url: &str,
        sync_base_url: &str,
    ) -> Result<Self> {
        let mut client = Self::new(api_token)?;
        client.base_url = base_url.trim_end_matches('/').to_string();
        client.sync_base_url = sync_base_url.trim_end_matches('/').to_string();
        Ok(client)
    }

    /// Executa uma requisição GET na superfície REST
    pub(crate) async fn get(&self, endpoint: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", self.bearer())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Executa uma requisição GET na superfície REST e parseia JSON
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let body = self.get(endpoint).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Executa uma requisição GET na superfície sync
    pub(crate) async fn get_sync(&self, endpoint: &str) -> Result<String> {
        let url = format!("{}{}", self.sync_base_url, endpoint);

        tracing::debug!("GET sync {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", self.bearer())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Executa uma requisição GET na superfície sync e parseia JSON
    pub(crate) async fn get_sync_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let body = self.get_sync(endpoint).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Executa uma requisição POST com corpo JSON
    pub(crate) async fn post(&self, endpoint: &str, body: &Value) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", self.bearer())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Executa uma requisição POST com corpo JSON e parseia a resposta
    pub(crate) async fn post_json<T: DeserializeOwned>(&self, endpoint: &str, body: &Value) -> Result<T> {
        let body = self.post(endpoint, body).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Executa uma requisição POST sem corpo
    ///
    /// Usado pelos sub-endpoints `/close` e `/reopen`, que respondem 204
    /// sem corpo; nenhum decode é feito sobre a resposta.
    pub(crate) async fn post_empty(&self, endpoint: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", self.bearer())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Executa uma requisição DELETE
    pub(crate) async fn delete(&self, endpoint: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("DELETE {}", url);

        let response = self
            .http_client
            .delete(&url)
            .header("Authorization", self.bearer())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Processa a resposta HTTP e trata erros
    ///
    /// 2xx (incluindo 204 com corpo vazio) é sucesso e devolve o corpo
    /// bruto. Qualquer outro status vira `TodoistError::Api` com o corpo
    /// preservado na íntegra.
    async fn handle_response(&self, response: Response) -> Result<String> {
        let status = response.status();

        if status.is_success() {
            Ok(response.text().await?)
        } else {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Todoist API error ({}): {}", status_code, body);

            Err(TodoistError::Api {
                status: status_code,
                body,
            })
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_token)
    }

    /// Obtém o token de autenticação
    pub fn token(&self) -> &str {
        &self.api_token
    }

    /// Obtém a URL base da superfície REST
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Obtém a URL base da superfície sync
    pub fn sync_base_url(&self) -> &str {
        &self.sync_base_url
    }
}
