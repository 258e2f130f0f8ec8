use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub locale: String,
    pub default_page_size: i32,
    pub max_page_size: i32,
}

impl AppConfig {
    pub fn init() -> Result<Self> {
        dotenv::dotenv().ok();

        let locale = std::env::var("APP_LOCALE").unwrap_or_else(|_| "en".to_string());

        let default_page_size = std::env::var("DEFAULT_PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<i32>()
            .context("DEFAULT_PAGE_SIZE must be a valid i32 integer")?;

        let max_page_size = std::env::var("MAX_PAGE_SIZE")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<i32>()
            .context("MAX_PAGE_SIZE must be a valid i32 integer")?;

        if default_page_size <= 0 {
            return Err(anyhow!(
                "DEFAULT_PAGE_SIZE must be positive, got '{}'",
                default_page_size
            ));
        }
        if max_page_size < default_page_size {
            return Err(anyhow!(
                "MAX_PAGE_SIZE must be at least DEFAULT_PAGE_SIZE, got '{}'",
                max_page_size
            ));
        }

        Ok(Self {
            locale,
            default_page_size,
            max_page_size,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}
