//! Форматирование денежных сумм для страницы каталога

use rust_decimal::prelude::*;

/// Округляет до 2 знаков по точному значению f64, половину от нуля.
/// 0.125 -> 0.13, а 1.005 (на деле 1.00499…) -> 1.00.
fn round_money(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(d) => format!(
            "{:.2}",
            d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        // Вне диапазона Decimal
        None => format!("{:.2}", value),
    }
}

/// Цена с двумя знаками после запятой и префиксом валюты: `R$ 10.00`
pub fn format_price(currency_prefix: &str, value: f64) -> String {
    format!("{} {}", currency_prefix, round_money(value))
}

/// Строка итога калькулятора: `Total: R$ 30.00`
pub fn format_total(currency_prefix: &str, value: f64) -> String {
    format!("Total: {}", format_price(currency_prefix, value))
}
