//! Project types do Todoist

use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

/// Representa um projeto do Todoist
///
/// Construído exclusivamente pelo decode de uma resposta do servidor;
/// não há mutação em memória. `order`/`indent` seguem a ordem devolvida
/// pelo servidor e permitem ao caller reconstruir o outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// ID do projeto (normalizado para string, mesmo quando a API envia número)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Nome do projeto
    pub name: String,

    /// Posição do projeto na listagem
    #[serde(default)]
    pub order: i32,

    /// Nível de indentação (1 = raiz)
    #[serde(default)]
    pub indent: i32,

    /// Número de comentários
    #[serde(default)]
    pub comment_count: i32,
}

/// Payload de criação de projeto (write-only)
#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    /// Nome do projeto (obrigatório)
    pub name: String,
}

impl NewProject {
    /// Cria um novo payload com o nome obrigatório
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
