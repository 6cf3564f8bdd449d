//! Configuration loaded from a TOML file, with defaults for every setting.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corpus::CorpusLoader;
use crate::normalize::{Lexicon, Normalizer};
use crate::search::{MatchCountScorer, QueryEngine, ScoringPolicy};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("Failed to read lexicon {path}: {source}")]
    Lexicon {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Directory holding one text file per document
    #[serde(default = "default_corpus_dir")]
    pub directory: PathBuf,

    /// Skip dot files such as `.DS_Store`
    #[serde(default = "default_true")]
    pub skip_hidden: bool,

    /// Skip files with no more than this many words (0 keeps all)
    #[serde(default)]
    pub min_words: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Snippet length in words
    #[serde(default = "default_snippet_window")]
    pub snippet_window: usize,

    #[serde(default)]
    pub scoring: ScoringPolicy,

    /// Maximum results per query (0 = unlimited)
    #[serde(default)]
    pub max_results: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NormalizeConfig {
    #[serde(default)]
    pub extra_stop_words: Vec<String>,

    /// Newline-separated list of known base forms
    #[serde(default)]
    pub lexicon_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

fn default_corpus_dir() -> PathBuf {
    PathBuf::from("mycorpus")
}

fn default_true() -> bool {
    true
}

fn default_snippet_window() -> usize {
    crate::search::DEFAULT_WINDOW
}

fn default_export_path() -> PathBuf {
    PathBuf::from("corpus_output.txt")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            directory: default_corpus_dir(),
            skip_hidden: true,
            min_words: 0,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            snippet_window: default_snippet_window(),
            scoring: ScoringPolicy::default(),
            max_results: 0,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.snippet_window == 0 {
            return Err(ConfigError::Invalid(
                "search.snippet_window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Lexicon with configured extras, built once per process.
    pub fn lexicon(&self) -> Result<Lexicon, ConfigError> {
        let mut lexicon = Lexicon::english().with_stop_words(&self.normalize.extra_stop_words);
        if let Some(path) = &self.normalize.lexicon_file {
            lexicon = lexicon
                .load_known_words(path)
                .map_err(|source| ConfigError::Lexicon {
                    path: path.clone(),
                    source,
                })?;
        }
        Ok(lexicon)
    }

    pub fn normalizer(&self) -> Result<Normalizer, ConfigError> {
        Ok(Normalizer::new(Arc::new(self.lexicon()?)))
    }

    pub fn loader(&self) -> CorpusLoader {
        CorpusLoader::new(&self.corpus.directory)
            .skip_hidden(self.corpus.skip_hidden)
            .min_words(self.corpus.min_words)
    }

    pub fn query_engine(&self) -> QueryEngine<MatchCountScorer> {
        QueryEngine::new(MatchCountScorer::new(self.search.scoring))
            .with_snippet_window(self.search.snippet_window)
            .with_max_results(self.search.max_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_file() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.corpus.directory, PathBuf::from("mycorpus"));
        assert_eq!(config.search.snippet_window, 30);
        assert_eq!(config.search.scoring, ScoringPolicy::PerOccurrence);
        assert_eq!(config.export.path, PathBuf::from("corpus_output.txt"));
        assert!(config.corpus.skip_hidden);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [search]
            scoring = "distinct"
            max_results = 5

            [normalize]
            extra_stop_words = ["said", "Reuter"]
            "#,
        )
        .unwrap();
        assert_eq!(config.search.scoring, ScoringPolicy::Distinct);
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.search.snippet_window, 30);

        let lexicon = config.lexicon().unwrap();
        assert!(lexicon.is_stop_word("reuter"));
        assert!(lexicon.is_stop_word("said"));
        assert!(lexicon.is_stop_word("the"));
    }

    #[test]
    fn zero_snippet_window_is_rejected() {
        let err = Config::from_toml("[search]\nsnippet_window = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::from_toml("[search\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_lexicon_file_is_reported() {
        let config = Config::from_toml("[normalize]\nlexicon_file = \"/nonexistent/words.txt\"\n")
            .unwrap();
        assert!(matches!(config.lexicon(), Err(ConfigError::Lexicon { .. })));
    }
}
