//! Tipos de erro para o crate todoist

use thiserror::Error;

/// Erros do cliente Todoist
#[derive(Debug, Error)]
pub enum TodoistError {
    /// Erro de requisição HTTP (falha de rede antes de qualquer resposta)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Erro da API do Todoist (status code não-2xx)
    ///
    /// O corpo da resposta é preservado na íntegra para diagnóstico de
    /// erros de validação do lado remoto.
    #[error("Todoist API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Erro de parsing JSON
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Recurso não encontrado por uma busca local (por nome, por task_id)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, TodoistError>;
