// ============================================================================
// Completed - Itens concluídos (superfície sync)
// ============================================================================
//
// A coleção de itens concluídos só existe na superfície sync (v7) e não
// tem endpoint por item: o fetch individual é uma varredura linear sobre
// a coleção inteira.

use crate::client::TodoistClient;
use crate::error::{Result, TodoistError};
use crate::types::completed::CompletedItems;
use crate::types::CompletedTask;

impl TodoistClient {
    /// Lista todos os itens concluídos
    ///
    /// # Endpoint da API
    ///
    /// `GET {sync}/completed/get_all`. A resposta embrulha a lista num
    /// objeto `{"items": [...]}`, desembrulhado aqui.
    pub async fn get_completed_tasks(&self) -> Result<Vec<CompletedTask>> {
        let container: CompletedItems = self.get_sync_json("/completed/get_all").await?;
        Ok(container.items)
    }

    /// Busca um item concluído pelo id da tarefa de origem
    ///
    /// Não há endpoint por item na superfície sync: esta operação busca a
    /// coleção inteira e faz uma varredura linear, O(n) por natureza.
    /// Ausência de match vira `TodoistError::NotFound` com o id buscado.
    pub async fn get_completed_task(&self, task_id: &str) -> Result<CompletedTask> {
        let items = self.get_completed_tasks().await?;

        items
            .into_iter()
            .find(|item| item.task_id == task_id)
            .ok_or_else(|| TodoistError::NotFound(format!("completed item for task id '{}'", task_id)))
    }
}
