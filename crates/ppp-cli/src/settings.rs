use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use ppp_card::CardConfig;
use ppp_core::{page_start, GeneratorConfig};

/// Settings loaded from a `--config` file.
///
/// ```json
/// { "generator": { "alphabet": "0123456789", "length": 6 }, "card": { "columns": 5 } }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub generator: GeneratorConfig,
    pub card: CardConfig,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parse config file {}", path.display()))
    }
}

/// Command-line values that override the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub count: Option<u64>,
    pub start: Option<u128>,
    pub page: Option<u128>,
    pub length: Option<usize>,
    pub chars: Option<String>,
    pub columns: Option<usize>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub generator: GeneratorConfig,
    pub card: CardConfig,
    pub start: u128,
}

impl Settings {
    pub fn resolve(file: FileConfig, overrides: &Overrides) -> anyhow::Result<Self> {
        let FileConfig {
            mut generator,
            mut card,
        } = file;

        if let Some(count) = overrides.count {
            generator.count = count;
        }
        if let Some(length) = overrides.length {
            generator.length = length;
        }
        if let Some(chars) = &overrides.chars {
            generator.alphabet = chars.clone();
        }
        if let Some(columns) = overrides.columns {
            card.columns = columns;
        }
        generator.validate().context("invalid generator settings")?;

        let page = overrides.page.or(card.page);
        let start = match (page, overrides.start) {
            (Some(_), Some(start)) if start != 0 => {
                anyhow::bail!("specify either a start index or a page, not both")
            }
            (Some(page), _) => {
                card.page = Some(page);
                page_start(page, generator.count).context("invalid page")?
            }
            (None, start) => start.unwrap_or(0),
        };

        Ok(Settings {
            generator,
            card,
            start,
        })
    }
}
