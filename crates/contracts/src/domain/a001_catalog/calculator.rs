use thiserror::Error;

use super::aggregate::{CatalogDocument, Product, ProductId};
use crate::domain::common::AggregateId;

/// Ошибка валидации калькулятора. `Display` - текст сообщения пользователю.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Por favor, selecione um produto.")]
    NoProductSelected,
    #[error("Por favor, insira uma quantidade válida (número positivo).")]
    InvalidQuantity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub product_id: ProductId,
    pub quantity: i64,
    pub total: f64,
}

/// Целое число в начале строки, как страница читает поле количества:
/// пробелы по краям и всё после ведущих цифр игнорируется.
pub fn parse_quantity(input: &str) -> Option<i64> {
    let s = input.trim();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }
    let value = rest[..digits_len].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Валидация формы калькулятора и расчёт итога.
///
/// Товар проверяется раньше количества: пустая форма сообщает
/// об отсутствии товара.
pub fn quote(
    catalog: &CatalogDocument,
    selected_product: &str,
    quantity: &str,
) -> Result<Quote, QuoteError> {
    if selected_product.trim().is_empty() {
        return Err(QuoteError::NoProductSelected);
    }

    let quantity = match parse_quantity(quantity) {
        Some(q) if q >= 1 => q,
        _ => return Err(QuoteError::InvalidQuantity),
    };

    let product: &Product = ProductId::from_string(selected_product)
        .ok()
        .and_then(|id| catalog.product(id))
        .ok_or(QuoteError::NoProductSelected)?;

    Ok(Quote {
        product_id: product.id,
        quantity,
        total: product.price * quantity as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> CatalogDocument {
        serde_json::from_value(json!({
            "categories": [{ "id": 1, "name": "A" }],
            "products": [
                { "id": 1, "name": "X", "price": 10.0, "category": 1, "image": "x.png", "description": "d" },
                { "id": 2, "name": "Y", "price": 0.1, "category": 1, "image": "y.png", "description": "e" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity(" 12 "), Some(12));
        assert_eq!(parse_quantity("+4"), Some(4));
        assert_eq!(parse_quantity("-2"), Some(-2));
        assert_eq!(parse_quantity("2.5"), Some(2));
        assert_eq!(parse_quantity("7abc"), Some(7));
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity("-"), None);
        assert_eq!(parse_quantity("99999999999999999999999"), None);
    }

    #[test]
    fn test_quote_multiplies_price() {
        let q = quote(&doc(), "1", "3").unwrap();
        assert_eq!(q.product_id, ProductId(1));
        assert_eq!(q.quantity, 3);
        assert_eq!(q.total, 30.0);
    }

    #[test]
    fn test_no_product_selected_wins_over_bad_quantity() {
        assert_eq!(quote(&doc(), "", "0"), Err(QuoteError::NoProductSelected));
        assert_eq!(quote(&doc(), "", "5"), Err(QuoteError::NoProductSelected));
    }

    #[test]
    fn test_invalid_quantities() {
        for bad in ["0", "-1", "abc", "", " "] {
            assert_eq!(quote(&doc(), "1", bad), Err(QuoteError::InvalidQuantity), "{bad:?}");
        }
    }

    #[test]
    fn test_unknown_product_counts_as_unselected() {
        assert_eq!(quote(&doc(), "42", "1"), Err(QuoteError::NoProductSelected));
        assert_eq!(quote(&doc(), "x", "1"), Err(QuoteError::NoProductSelected));
    }

    #[test]
    fn test_alert_texts() {
        assert_eq!(
            QuoteError::NoProductSelected.to_string(),
            "Por favor, selecione um produto."
        );
        assert_eq!(
            QuoteError::InvalidQuantity.to_string(),
            "Por favor, insira uma quantidade válida (número positivo)."
        );
    }
}
