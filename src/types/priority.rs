//! Priority levels para tarefas do Todoist
//!
//! A API aceita valores de 1 a 4:
//! - 1 = Normal (padrão)
//! - 2 = Média
//! - 3 = Alta
//! - 4 = Urgente

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Representa os níveis de prioridade do Todoist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Prioridade normal (valor 1) - padrão
    Normal = 1,
    /// Prioridade média (valor 2)
    Medium = 2,
    /// Prioridade alta (valor 3)
    High = 3,
    /// Prioridade urgente (valor 4)
    Urgent = 4,
}

// Na API a prioridade é sempre o inteiro, nunca o nome do nível
impl Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(*self as i64)
    }
}

// Deserializer customizado que aceita null e valores inválidos
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<i64>::deserialize(deserializer)?;
        match value {
            Some(1) => Ok(Priority::Normal),
            Some(2) => Ok(Priority::Medium),
            Some(3) => Ok(Priority::High),
            Some(4) => Ok(Priority::Urgent),
            Some(_) => Ok(Priority::default()),
            None => Ok(Priority::default()),
        }
    }
}

impl Priority {
    /// Converte para o valor inteiro usado pela API
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// Cria a partir de um valor inteiro
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(Priority::Normal),
            2 => Some(Priority::Medium),
            3 => Some(Priority::High),
            4 => Some(Priority::Urgent),
            _ => None,
        }
    }

    /// Retorna o nome legível da prioridade
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "Normal",
            Priority::Medium => "Média",
            Priority::High => "Alta",
            Priority::Urgent => "Urgente",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Normal
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_values() {
        assert_eq!(Priority::Normal.as_i32(), 1);
        assert_eq!(Priority::Medium.as_i32(), 2);
        assert_eq!(Priority::High.as_i32(), 3);
        assert_eq!(Priority::Urgent.as_i32(), 4);
    }

    #[test]
    fn test_priority_from_i32() {
        assert_eq!(Priority::from_i32(1), Some(Priority::Normal));
        assert_eq!(Priority::from_i32(4), Some(Priority::Urgent));
        assert_eq!(Priority::from_i32(0), None);
        assert_eq!(Priority::from_i32(5), None);
    }

    #[test]
    fn test_priority_serializes_as_integer() {
        assert_eq!(serde_json::to_value(Priority::Urgent).unwrap(), serde_json::json!(4));
        assert_eq!(serde_json::to_value(Priority::Normal).unwrap(), serde_json::json!(1));
    }

    #[test]
    fn test_priority_tolerant_deserialize() {
        let p: Priority = serde_json::from_str("3").unwrap();
        assert_eq!(p, Priority::High);

        let p: Priority = serde_json::from_str("null").unwrap();
        assert_eq!(p, Priority::Normal);

        let p: Priority = serde_json::from_str("99").unwrap();
        assert_eq!(p, Priority::Normal);
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::Urgent.to_string(), "Urgente");
        assert_eq!(Priority::Normal.to_string(), "Normal");
    }
}
