//! Cliente tipado da API do Todoist
//!
//! Este crate fornece uma interface tipo-segura para interagir com a API do
//! Todoist: listar, buscar, criar, atualizar, concluir/reabrir e remover
//! projetos e tarefas, além de ler a coleção de itens concluídos.
//!
//! # Versões da API (Híbrido REST v8 + sync v7)
//!
//! O Todoist expõe duas superfícies inconsistentes entre si. Este crate
//! adota deliberadamente uma **abordagem híbrida**:
//!
//! ## REST v8 (Padrão)
//! Utilizada para todo o CRUD de projetos e tarefas:
//! - **Projects**: `/projects`, `/projects/{id}`
//! - **Tasks**: `/tasks`, `/tasks/{id}`, `/tasks/{id}/close`, `/tasks/{id}/reopen`
//!
//! ## sync v7
//! Utilizada apenas onde a REST não tem equivalente:
//! - **Itens concluídos**: `/completed/get_all`
//!
//! ## Normalização de identificadores
//! As duas superfícies divergem no tipo dos ids (número JSON na sync,
//! string na REST, e a REST ainda emite número em alguns campos). Todo
//! decode normaliza ids para `String` num único ponto (`types::id`);
//! nenhum id numérico chega ao caller. A forma das entidades segue a
//! superfície REST v8.
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use todoist::{NewTask, Priority, TodoistClient};
//!
//! #[tokio::main]
//! async fn main() -> todoist::Result<()> {
//!     // IMPORTANTE: Ler de variáveis de ambiente (NUNCA hardcode!)
//!     let api_token = std::env::var("TODOIST_API_TOKEN")
//!         .expect("TODOIST_API_TOKEN não configurado");
//!
//!     let client = TodoistClient::new(api_token)?;
//!
//!     let inbox = client.get_project_by_name("Inbox").await?;
//!
//!     let task = NewTask::new("Comprar leite")
//!         .project_id(inbox.id)
//!         .priority(Priority::High);
//!     let created = client.create_task(&task).await?;
//!
//!     client.close_task(&created.id).await?;
//!     Ok(())
//! }
//! ```

// Módulos públicos
pub mod client;
pub mod completed;
pub mod error;
pub mod projects;
pub mod tasks;
pub mod types;

// Re-exports principais
pub use client::TodoistClient;
pub use error::{Result, TodoistError};
pub use types::{CompletedTask, Due, NewProject, NewTask, Priority, Project, Task};
