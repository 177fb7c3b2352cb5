use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Путь к документу каталога относительно страницы
    pub catalog_url: String,
    /// Каталог с изображениями товаров
    pub image_base: String,
    pub currency_prefix: String,
}

/// Конфигурация по умолчанию, встроенная в сборку
pub const DEFAULT_CONFIG: &str = r#"
catalog_url = "catalog.json"
image_base = "images/"
currency_prefix = "R$"
"#;

/// Переопределения из строки запроса страницы
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub catalog_url: Option<String>,
    pub image_base: Option<String>,
}

impl CatalogConfig {
    pub fn embedded() -> anyhow::Result<Self> {
        let config: CatalogConfig = toml::from_str(DEFAULT_CONFIG)?;
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.catalog_url.filter(|u| !u.trim().is_empty()) {
            self.catalog_url = url;
        }
        if let Some(base) = overrides.image_base {
            self.image_base = base;
        }
        self
    }

    /// Полный путь к изображению относительно `image_base`
    pub fn image_src(&self, file_name: &str) -> String {
        if self.image_base.is_empty() || self.image_base.ends_with('/') {
            format!("{}{}", self.image_base, file_name)
        } else {
            format!("{}/{}", self.image_base, file_name)
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_url: "catalog.json".to_string(),
            image_base: "images/".to_string(),
            currency_prefix: "R$".to_string(),
        }
    }
}
