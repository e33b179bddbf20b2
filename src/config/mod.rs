//! Configuration for the incident pipeline.

use chrono::format::{Item, StrftimeItems};

use crate::algorithm::incident::translation::LexicalTranslator;
use crate::error::{IncidentReaderError, Result};
use crate::schema::types::DateFormatConfig;

/// Configuration for the `IncidentPipeline`
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Formats tried when a date cell holds text
    pub date_format_config: DateFormatConfig,
    /// Phrase dictionary for free-text answers
    pub translator: LexicalTranslator,
    /// Log every rejected row at warn level
    pub log_rejections: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            date_format_config: DateFormatConfig::default(),
            translator: LexicalTranslator::default(),
            log_rejections: true,
        }
    }
}

impl PipelineConfig {
    /// Replace the phrase dictionary
    #[must_use]
    pub fn with_translator(mut self, translator: LexicalTranslator) -> Self {
        self.translator = translator;
        self
    }

    /// Replace the textual date formats
    #[must_use]
    pub fn with_date_formats(mut self, date_format_config: DateFormatConfig) -> Self {
        self.date_format_config = date_format_config;
        self
    }

    /// Enable or disable per-row rejection logging
    #[must_use]
    pub fn with_rejection_logging(mut self, enabled: bool) -> Self {
        self.log_rejections = enabled;
        self
    }

    /// Check that every configured date format is a valid strftime pattern
    pub fn validate(&self) -> Result<()> {
        for format in self.date_format_config.all_formats() {
            if format.is_empty() {
                return Err(IncidentReaderError::config_error("empty date format"));
            }
            if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
                return Err(IncidentReaderError::config_error(format!(
                    "invalid date format '{format}'"
                )));
            }
        }
        Ok(())
    }
}
