use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub data: DataConfig,
    pub classifier: ClassifierConfig,
    pub logging: LoggingConfig,
}

/// File layout for corpora, dictionaries and evaluation logs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Training corpus of normal messages, one message per line
    pub learn_normal_path: String,
    /// Training corpus of spam messages, one message per line
    pub learn_spam_path: String,
    /// Test corpus of normal messages
    pub test_normal_path: String,
    /// Test corpus of spam messages
    pub test_spam_path: String,
    /// Persisted frequency dictionary built from normal messages
    pub dictionary_normal_path: String,
    /// Persisted frequency dictionary built from spam messages
    pub dictionary_spam_path: String,
    /// Per-message evaluation log for the normal test corpus
    pub log_normal_path: String,
    /// Per-message evaluation log for the spam test corpus
    pub log_spam_path: String,
    /// Directory holding raw data files to be joined into corpora
    pub raw_dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Decision threshold: a message is spam when its score is >= threshold
    pub threshold: f64,
    /// Keep only the K most spam-indicative token probabilities when fusing.
    /// `None` keeps all of them.
    pub top_k: Option<usize>,
    /// Thresholds evaluated by the sweep during batch evaluation
    pub sweep_thresholds: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::SpamError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::SpamError::Config(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig {
                learn_normal_path: "data/learn/normal.txt".to_string(),
                learn_spam_path: "data/learn/spam.txt".to_string(),
                test_normal_path: "data/test/testnormal.txt".to_string(),
                test_spam_path: "data/test/testspam.txt".to_string(),
                dictionary_normal_path: "data/save/wnormal.txt".to_string(),
                dictionary_spam_path: "data/save/wspam.txt".to_string(),
                log_normal_path: "data/test/log_testnormal.txt".to_string(),
                log_spam_path: "data/test/log_testspam.txt".to_string(),
                raw_dir: "data/raw".to_string(),
            },
            classifier: ClassifierConfig {
                threshold: 0.09,
                top_k: None,
                sweep_thresholds: vec![0.01, 0.03, 0.05, 0.07, 0.09],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.classifier.threshold, 0.09);
        assert_eq!(config.classifier.top_k, None);
        assert_eq!(config.classifier.sweep_thresholds.len(), 5);
        assert_eq!(config.data.learn_normal_path, "data/learn/normal.txt");
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            [data]
            learn_normal_path = "corpora/normal.txt"
            learn_spam_path = "corpora/spam.txt"
            test_normal_path = "corpora/testnormal.txt"
            test_spam_path = "corpora/testspam.txt"
            dictionary_normal_path = "dicts/wnormal.txt"
            dictionary_spam_path = "dicts/wspam.txt"
            log_normal_path = "logs/normal.log"
            log_spam_path = "logs/spam.log"
            raw_dir = "corpora/raw"

            [classifier]
            threshold = 0.5
            top_k = 15
            sweep_thresholds = [0.1, 0.5, 0.9]

            [logging]
            level = "debug"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.classifier.threshold, 0.5);
        assert_eq!(config.classifier.top_k, Some(15));
        assert_eq!(config.data.raw_dir, "corpora/raw");
        assert_eq!(config.logging.level, "debug");
    }
}
