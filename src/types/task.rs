//! Task types do Todoist
//!
//! Estrutura completa de uma tarefa da superfície REST v8, mais o payload
//! de criação (`NewTask`) e a estrutura de vencimento (`Due`).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::id::{deserialize_id, deserialize_id_vec};
use super::priority::Priority;

/// Representa uma tarefa do Todoist
///
/// Construída exclusivamente pelo decode de uma resposta do servidor.
/// Em `update_task` a entidade inteira é reenviada ao endpoint do item;
/// não há update parcial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// ID da tarefa (normalizado para string, mesmo quando a API envia número)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// ID do projeto dono da tarefa
    #[serde(deserialize_with = "deserialize_id")]
    pub project_id: String,

    /// Texto da tarefa (obrigatório)
    pub content: String,

    /// Flag de conclusão
    ///
    /// Os endpoints `/close` e `/reopen` respondem sem corpo; após uma
    /// chamada bem-sucedida é o caller quem atualiza esta flag na sua
    /// cópia da tarefa.
    #[serde(default)]
    pub completed: bool,

    /// IDs das labels (normalizados para string, elemento a elemento)
    #[serde(default, deserialize_with = "deserialize_id_vec")]
    pub label_ids: Vec<String>,

    /// Posição da tarefa na listagem
    #[serde(default)]
    pub order: i32,

    /// Nível de indentação (1 = raiz)
    #[serde(default)]
    pub indent: i32,

    /// Prioridade (1 = normal, 4 = urgente)
    #[serde(default)]
    pub priority: Priority,

    /// Vencimento, quando definido
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<Due>,

    /// URL canônica da tarefa
    #[serde(default)]
    pub url: String,

    /// Número de comentários
    #[serde(default)]
    pub comment_count: i32,
}

/// Vencimento de uma tarefa
///
/// `string` e `date` são tratados como obrigatórios em conjunto pela API;
/// `datetime` e `timezone` só aparecem em vencimentos com hora marcada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Due {
    /// Texto livre do vencimento (e.g., "every day @ 10")
    pub string: String,

    /// Data no calendário
    pub date: NaiveDate,

    /// Timestamp completo, quando o vencimento tem hora
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<DateTime<Utc>>,

    /// Timezone do usuário, quando o vencimento tem hora
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Payload de criação de tarefa (write-only)
///
/// Apenas `content` é obrigatório. Todo campo opcional não definido é
/// omitido por completo do JSON de saída: zero é um valor válido de
/// `order`, então ausência é `None`, nunca sentinela.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTask {
    /// Texto da tarefa (obrigatório)
    pub content: String,

    /// ID do projeto destino (default do servidor: Inbox)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Posição na listagem
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    /// IDs das labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,

    /// Prioridade (1 = normal, 4 = urgente)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Vencimento em texto livre (e.g., "amanhã às 10h")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,

    /// Vencimento como data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Vencimento como timestamp completo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<DateTime<Utc>>,

    /// Idioma usado para interpretar `due_string`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
}

impl NewTask {
    /// Cria um novo payload com o conteúdo obrigatório
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Define o projeto destino
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Define a posição na listagem
    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Define as labels
    pub fn label_ids(mut self, label_ids: Vec<String>) -> Self {
        self.label_ids = Some(label_ids);
        self
    }

    /// Define a prioridade
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Define o vencimento em texto livre
    pub fn due_string(mut self, due_string: impl Into<String>) -> Self {
        self.due_string = Some(due_string.into());
        self
    }

    /// Define o vencimento como data
    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Define o vencimento como timestamp completo
    pub fn due_datetime(mut self, due_datetime: DateTime<Utc>) -> Self {
        self.due_datetime = Some(due_datetime);
        self
    }

    /// Define o idioma de interpretação de `due_string`
    pub fn due_lang(mut self, due_lang: impl Into<String>) -> Self {
        self.due_lang = Some(due_lang.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_decodes_numeric_and_string_ids() {
        let json = r#"{
            "id": 2995104339,
            "project_id": "128501470",
            "content": "Comprar leite",
            "completed": false,
            "label_ids": [2156154810, "2156154820"],
            "order": 1,
            "indent": 1,
            "priority": 4,
            "url": "https://todoist.com/showTask?id=2995104339",
            "comment_count": 10
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "2995104339");
        assert_eq!(task.project_id, "128501470");
        assert_eq!(task.label_ids, vec!["2156154810", "2156154820"]);
        assert_eq!(task.priority, Priority::Urgent);
        assert!(task.due.is_none());
    }

    #[test]
    fn test_task_missing_content_is_decode_error() {
        assert!(serde_json::from_str::<Task>(r#"{"id": 1, "project_id": 2}"#).is_err());
    }

    #[test]
    fn test_task_due_decodes_date_and_datetime() {
        let json = r#"{
            "id": "1",
            "project_id": "2",
            "content": "Reunião",
            "due": {
                "string": "1 Sep",
                "date": "2016-09-01",
                "datetime": "2016-09-01T11:00:00Z",
                "timezone": "Europe/Lisbon"
            }
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        let due = task.due.unwrap();
        assert_eq!(due.string, "1 Sep");
        assert_eq!(due.date, NaiveDate::from_ymd_opt(2016, 9, 1).unwrap());
        assert!(due.datetime.is_some());
        assert_eq!(due.timezone.as_deref(), Some("Europe/Lisbon"));
    }

    #[test]
    fn test_due_without_datetime_omits_optional_keys() {
        let due = Due {
            string: "1 Sep".to_string(),
            date: NaiveDate::from_ymd_opt(2016, 9, 1).unwrap(),
            datetime: None,
            timezone: None,
        };
        let value = serde_json::to_value(&due).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["date"], "2016-09-01");
    }

    #[test]
    fn test_new_task_with_only_content_serializes_one_key() {
        let value = serde_json::to_value(NewTask::new("Comprar leite")).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["content"], "Comprar leite");
    }

    #[test]
    fn test_new_task_order_zero_is_serialized() {
        // zero é valor válido de order: presente quando definido, ausente quando não
        let value = serde_json::to_value(NewTask::new("x").order(0)).unwrap();
        assert_eq!(value.as_object().unwrap()["order"], 0);
    }

    #[test]
    fn test_new_task_chained_fields_serialize() {
        let task = NewTask::new("Comprar leite")
            .project_id("128501470")
            .priority(Priority::High)
            .due_string("amanhã às 10h")
            .due_lang("pt");
        let value = serde_json::to_value(&task).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert_eq!(obj["project_id"], "128501470");
        assert_eq!(obj["priority"], 3);
        assert_eq!(obj["due_lang"], "pt");
    }
}
