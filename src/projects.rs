// ============================================================================
// Projects - Operações sobre projetos do Todoist
// ============================================================================
//
// Cada operação é um único round trip stateless à superfície REST:
// listagem, fetch por id, busca por nome (client-side), criação,
// atualização e remoção.

use crate::client::TodoistClient;
use crate::error::{Result, TodoistError};
use crate::types::{NewProject, Project};

impl TodoistClient {
    /// Lista todos os projetos
    ///
    /// # Endpoint da API
    ///
    /// `GET /projects`
    ///
    /// Uma coleção vazia (`[]`) devolve `Ok(vec![])`, não erro.
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        self.get_json("/projects").await
    }

    /// Busca um projeto pelo id
    ///
    /// # Endpoint da API
    ///
    /// `GET /projects/{id}`
    ///
    /// Para um id desconhecido a API responde com status não-2xx, que
    /// chega ao caller como `TodoistError::Api` com o corpo preservado
    /// (a superfície REST não distingue 404 de outros 4xx aqui).
    pub async fn get_project(&self, id: &str) -> Result<Project> {
        let endpoint = format!("/projects/{}", urlencoding::encode(id));
        self.get_json(&endpoint).await
    }

    /// Busca um projeto pelo nome exato
    ///
    /// A API não oferece filtro por nome no servidor: esta operação lista
    /// a coleção inteira e faz uma varredura linear, O(n) por natureza.
    /// Ausência de match vira `TodoistError::NotFound` com o nome buscado.
    pub async fn get_project_by_name(&self, name: &str) -> Result<Project> {
        let projects = self.get_projects().await?;

        projects
            .into_iter()
            .find(|project| project.name == name)
            .ok_or_else(|| TodoistError::NotFound(format!("project named '{}'", name)))
    }

    /// Cria um projeto
    ///
    /// # Endpoint da API
    ///
    /// `POST /projects`
    ///
    /// Devolve a representação canônica do servidor (com id atribuído).
    pub async fn create_project(&self, project: &NewProject) -> Result<Project> {
        let body = serde_json::to_value(project)?;
        let created: Project = self.post_json("/projects", &body).await?;

        tracing::info!("Projeto criado: {}", created.id);
        Ok(created)
    }

    /// Atualiza um projeto reenviando a entidade inteira
    ///
    /// # Endpoint da API
    ///
    /// `POST /projects/{id}`. Não há update parcial; a resposta não traz
    /// corpo e nenhum decode é feito.
    pub async fn update_project(&self, project: &Project) -> Result<()> {
        let endpoint = format!("/projects/{}", urlencoding::encode(&project.id));
        let body = serde_json::to_value(project)?;
        self.post(&endpoint, &body).await?;
        Ok(())
    }

    /// Remove um projeto
    ///
    /// # Endpoint da API
    ///
    /// `DELETE /projects/{id}`
    pub async fn delete_project(&self, id: &str) -> Result<()> {
        let endpoint = format!("/projects/{}", urlencoding::encode(id));
        self.delete(&endpoint).await?;
        Ok(())
    }
}
