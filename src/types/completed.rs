//! Itens concluídos da superfície sync
//!
//! A superfície sync (v7) é a única que expõe a coleção de itens
//! concluídos, embrulhada num objeto `{"items": [...]}`. Os ids chegam
//! como números nessa superfície e são normalizados no decode, como em
//! todo o resto do crate.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserialize, Deserializer};

use super::id::deserialize_id;

/// Representa uma tarefa concluída
///
/// Somente leitura: não existe endpoint por item nem operação de escrita
/// para itens concluídos.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct CompletedTask {
    /// ID do item concluído
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// ID da tarefa de origem
    #[serde(deserialize_with = "deserialize_id")]
    pub task_id: String,

    /// ID do projeto dono
    #[serde(deserialize_with = "deserialize_id")]
    pub project_id: String,

    /// Texto da tarefa
    pub content: String,

    /// Metadados opacos do servidor
    #[serde(default)]
    pub meta_data: Option<String>,

    /// Momento da conclusão
    #[serde(deserialize_with = "deserialize_completed_date")]
    pub completed_date: DateTime<Utc>,

    /// ID do usuário dono
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
}

/// Container devolvido por `/completed/get_all`
#[derive(Debug, serde::Deserialize)]
pub(crate) struct CompletedItems {
    pub items: Vec<CompletedTask>,
}

/// Deserializa o timestamp de conclusão da superfície sync
///
/// Formato observado: `"Fri 26 Sep 2014 08:25:05 +0000"`. Aceita também
/// RFC 3339 como fallback.
fn deserialize_completed_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_str(&s, "%a %d %b %Y %H:%M:%S %z")
        .or_else(|_| DateTime::parse_from_rfc3339(&s))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| de::Error::custom(format!("invalid completed_date '{}': {}", s, e)))
}
