use config::{Config, Environment, File, FileFormat};
use observable::observers::ObserverKind;
use serde::Deserialize;
use validator::Validate;

use crate::AppError;

use super::env_list::deserialize_list;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";
const LIST_SEPARATOR: &str = ",";

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    pub initial_value: i64,
    #[serde(deserialize_with = "deserialize_list")]
    #[validate(length(max = 1024))]
    pub assignments: Vec<i64>,
    #[serde(deserialize_with = "deserialize_list")]
    #[validate(length(max = 64))]
    pub observers: Vec<ObserverKind>,
}

impl AppConfig {
    /// Embedded defaults overridden by `APP_*` env vars. List values are
    /// comma separated, e.g. `APP_OBSERVERS=logging,cheering`; an empty value
    /// clears the list.
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(
                Environment::with_prefix(DEFAULT_CONFIG_PREFIX)
                    .try_parsing(true)
                    .list_separator(LIST_SEPARATOR)
                    .with_list_parse_key("assignments")
                    .with_list_parse_key("observers"),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}
