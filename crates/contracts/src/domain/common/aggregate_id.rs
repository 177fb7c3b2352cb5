use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов каталога
///
/// Опции select и атрибуты `data-*` хранят только строки.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_round_trip_through_string() {
        assert_eq!(i64::from_string(&42i64.as_string()), Ok(42));
    }

    #[test]
    fn test_i64_accepts_padding_rejects_garbage() {
        assert_eq!(i64::from_string(" 7 "), Ok(7));
        assert!(i64::from_string("all").is_err());
        assert!(i64::from_string("").is_err());
    }
}
