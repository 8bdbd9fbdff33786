//! Normalização de identificadores da API
//!
//! A API representa identificadores ora como número JSON, ora como string,
//! dependendo da superfície/versão. Toda conversão acontece aqui, no decode:
//! nenhum outro código do crate assume id numérico.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

/// Deserializa um id que pode vir como string ou número
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    id_from_value(value).map_err(de::Error::custom)
}

/// Deserializa um array de ids, normalizando cada elemento
pub(crate) fn deserialize_id_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    values
        .into_iter()
        .map(|v| id_from_value(v).map_err(de::Error::custom))
        .collect()
}

fn id_from_value(value: Value) -> Result<String, &'static str> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err("id must be string or number"),
    }
}
