// ============================================================================
// Tasks - Operações sobre tarefas do Todoist
// ============================================================================
//
// Cada operação é um único round trip stateless à superfície REST.
// Não há cache: toda entidade reflete apenas o estado do último fetch
// bem-sucedido.

use crate::client::TodoistClient;
use crate::error::Result;
use crate::types::{NewTask, Task};

impl TodoistClient {
    /// Lista todas as tarefas ativas
    ///
    /// # Endpoint da API
    ///
    /// `GET /tasks`
    ///
    /// A ordem devolvida pelo servidor é preservada; `order`/`indent`
    /// permitem ao caller reconstruir o outline, mas o cliente não
    /// interpreta hierarquia.
    pub async fn get_tasks(&self) -> Result<Vec<Task>> {
        self.get_json("/tasks").await
    }

    /// Busca uma tarefa pelo id
    ///
    /// # Endpoint da API
    ///
    /// `GET /tasks/{id}`
    pub async fn get_task(&self, id: &str) -> Result<Task> {
        let endpoint = format!("/tasks/{}", urlencoding::encode(id));
        self.get_json(&endpoint).await
    }

    /// Cria uma tarefa
    ///
    /// # Endpoint da API
    ///
    /// `POST /tasks`
    ///
    /// Campos opcionais não definidos no `NewTask` são omitidos do corpo
    /// por completo; o servidor aplica seus defaults (projeto Inbox,
    /// prioridade normal).
    ///
    /// # Exemplo
    ///
    /// ```rust,ignore
    /// use todoist::{NewTask, Priority};
    ///
    /// let task = NewTask::new("Comprar leite")
    ///     .project_id("128501470")
    ///     .priority(Priority::High)
    ///     .due_string("amanhã às 10h");
    ///
    /// let created = client.create_task(&task).await?;
    /// println!("Task criada: {}", created.id);
    /// ```
    pub async fn create_task(&self, task: &NewTask) -> Result<Task> {
        let body = serde_json::to_value(task)?;
        let created: Task = self.post_json("/tasks", &body).await?;

        tracing::info!("Task criada: {}", created.id);
        Ok(created)
    }

    /// Atualiza uma tarefa reenviando a entidade inteira
    ///
    /// # Endpoint da API
    ///
    /// `POST /tasks/{id}`. Não há update parcial; a resposta não traz
    /// corpo e nenhum decode é feito.
    pub async fn update_task(&self, task: &Task) -> Result<()> {
        let endpoint = format!("/tasks/{}", urlencoding::encode(&task.id));
        let body = serde_json::to_value(task)?;
        self.post(&endpoint, &body).await?;
        Ok(())
    }

    /// Fecha (conclui) uma tarefa
    ///
    /// # Endpoint da API
    ///
    /// `POST /tasks/{id}/close`, responde 204 sem corpo. O servidor não
    /// devolve a tarefa atualizada: é o caller quem marca `completed` na
    /// sua cópia após o sucesso.
    pub async fn close_task(&self, id: &str) -> Result<()> {
        let endpoint = format!("/tasks/{}/close", urlencoding::encode(id));
        self.post_empty(&endpoint).await?;
        Ok(())
    }

    /// Reabre uma tarefa concluída
    ///
    /// # Endpoint da API
    ///
    /// `POST /tasks/{id}/reopen`, responde 204 sem corpo, como `/close`.
    pub async fn reopen_task(&self, id: &str) -> Result<()> {
        let endpoint = format!("/tasks/{}/reopen", urlencoding::encode(id));
        self.post_empty(&endpoint).await?;
        Ok(())
    }

    /// Remove uma tarefa
    ///
    /// # Endpoint da API
    ///
    /// `DELETE /tasks/{id}`
    ///
    /// O comportamento de deletes repetidos é o que o servidor devolver;
    /// o cliente não acrescenta idempotência própria.
    pub async fn delete_task(&self, id: &str) -> Result<()> {
        let endpoint = format!("/tasks/{}", urlencoding::encode(id));
        self.delete(&endpoint).await?;
        Ok(())
    }
}
