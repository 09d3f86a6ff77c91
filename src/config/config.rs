use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct AppConfig {
    pub base: BaseConfig,
    pub page: PageConfig,
    pub http: HttpConfig,
}

#[derive(Deserialize)]
pub struct BaseConfig {
    pub name: String,
    pub version: String,
}

#[derive(Deserialize)]
pub struct PageConfig {
    /// Host page HTML to read.
    pub source_file: String,
    /// Where the updated page is written.
    pub output_file: String,
    /// Absolute URL the page is served from, used to resolve relative links.
    pub base_url: String,
    /// CSS class marking the elements to process.
    pub marker_class: String,
}

#[derive(Deserialize)]
pub struct HttpConfig {
    pub user_agent: String,
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::new("Settings.toml", config::FileFormat::Toml))
        .add_source(Environment::with_prefix("APP"))
        .build()?;

    settings.try_deserialize::<AppConfig>()
}
