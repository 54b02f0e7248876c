use crate::report::{render, Format};
use crate::source::DirectorySource;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use simcore::{
    DocumentSource, Reference, SimilarityChecker, SimilarityConfig, SimilarityResult,
    VocabularyOrder,
};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment fallback for `--config`.
pub const CONFIG_ENV: &str = "SIMCHECK_CONFIG";

#[derive(Parser, Debug)]
#[command(name = "simcheck")]
#[command(about = "Report each file's similarity to a reference document", long_about = None)]
pub struct Cli {
    /// Directory holding the documents
    #[arg(long, default_value = "text")]
    pub dir: PathBuf,
    /// Only files with this extension are read
    #[arg(long, default_value = "txt")]
    pub ext: String,
    /// Reference document id (defaults to the first document in name order)
    #[arg(long)]
    pub reference: Option<String>,
    /// Descend into subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,
    /// Also report the reference against itself
    #[arg(long, default_value_t = false)]
    pub include_self: bool,
    /// Lowercase text before tokenizing
    #[arg(long, default_value_t = false)]
    pub ignore_case: bool,
    /// Apply NFKC normalization before tokenizing
    #[arg(long, default_value_t = false)]
    pub normalize_unicode: bool,
    /// Drop tokens shorter than this many characters
    #[arg(long)]
    pub min_token_len: Option<usize>,
    /// How vocabulary indices are assigned
    #[arg(long, value_enum)]
    pub vocabulary_order: Option<OrderArg>,
    /// Score documents on a thread pool
    #[arg(long, default_value_t = false)]
    pub parallel: bool,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
    /// JSON file with tokenizer/order/scoring settings; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Lexicographic,
    FirstSeen,
}

impl From<OrderArg> for VocabularyOrder {
    fn from(o: OrderArg) -> Self {
        match o {
            OrderArg::Lexicographic => VocabularyOrder::Lexicographic,
            OrderArg::FirstSeen => VocabularyOrder::FirstSeen,
        }
    }
}

pub fn load_config(path: &Path) -> Result<SimilarityConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg = serde_json::from_str(&raw)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

impl Cli {
    /// Config file (from `--config` or the environment) with flags applied on top.
    pub fn similarity_config(&self) -> Result<SimilarityConfig> {
        let path = self.config.clone().or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        let mut cfg = match path {
            Some(p) => load_config(&p)?,
            None => SimilarityConfig::default(),
        };
        if self.ignore_case {
            cfg.tokenizer.case_sensitive = false;
        }
        if self.normalize_unicode {
            cfg.tokenizer.normalize_unicode = true;
        }
        if let Some(n) = self.min_token_len {
            cfg.tokenizer.min_token_len = n;
        }
        if let Some(order) = self.vocabulary_order {
            cfg.order = order.into();
        }
        if self.include_self {
            cfg.scoring.include_self = true;
        }
        if self.parallel {
            cfg.scoring.parallel = true;
        }
        Ok(cfg)
    }

    pub fn source(&self) -> DirectorySource {
        DirectorySource::new(&self.dir, &self.ext).recursive(self.recursive)
    }

    pub fn reference(&self) -> Reference {
        match &self.reference {
            Some(id) => Reference::Id(id.clone()),
            None => Reference::First,
        }
    }
}

/// Load the documents, score them and write the report to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<SimilarityResult> {
    let config = cli.similarity_config()?;
    tracing::debug!(?config, "effective configuration");

    let documents = cli.source().load()?;
    tracing::info!(dir = %cli.dir.display(), num_docs = documents.len(), "documents loaded");

    let result = SimilarityChecker::new(&config)
        .compare(&documents, &cli.reference())
        .with_context(|| format!("failed to compare documents in {}", cli.dir.display()))?;
    tracing::info!(
        reference = %result.reference,
        vocabulary_size = result.vocabulary_size,
        "comparison complete"
    );

    render(&result, cli.format, out)?;
    Ok(result)
}
