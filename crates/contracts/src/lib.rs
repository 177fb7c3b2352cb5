//! Типы документа каталога и логика страницы, общие для фронтенда

pub mod domain;
pub mod shared;
