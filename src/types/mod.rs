//! Tipos da API do Todoist
//!
//! Este módulo contém as estruturas de dados type-safe das duas
//! superfícies da API:
//!
//! - **Project / NewProject**: projetos (REST v8)
//! - **Task / NewTask / Due**: tarefas (REST v8)
//! - **Priority**: níveis de prioridade (1-4)
//! - **CompletedTask**: itens concluídos (sync v7)
//!
//! ## ⚠️ Notas Importantes
//!
//! - **Identificadores**: a API envia ids ora como número, ora como string;
//!   todo decode normaliza para `String` (ver `id.rs`). Nenhum id numérico
//!   escapa deste módulo.
//! - **Campos opcionais de escrita**: nunca serializados quando ausentes
//!   (`skip_serializing_if`), porque zero é valor válido de `order`.

pub(crate) mod id;

pub mod completed;
pub mod priority;
pub mod project;
pub mod task;

// Re-exports principais para facilitar uso
pub use completed::CompletedTask;
pub use priority::Priority;
pub use project::{NewProject, Project};
pub use task::{Due, NewTask, Task};
