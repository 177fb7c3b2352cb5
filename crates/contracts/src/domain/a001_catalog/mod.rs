pub mod aggregate;
pub mod calculator;
pub mod filter;
pub mod presentation;

pub use aggregate::{
    CatalogDocument, CatalogError, Category, CategoryId, Product, ProductId,
    FALLBACK_CATEGORY_NAME,
};
pub use calculator::{parse_quantity, quote, Quote, QuoteError};
pub use filter::{CategoryFilter, ALL_CATEGORIES};
pub use presentation::{FilterOption, ProductCard, ProductDetails, ProductOption};
