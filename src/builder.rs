use std::{fs, path::Path, str::FromStr};

use crate::{
    decode::decode_content,
    errors::{OfxCleanupError, OfxCleanupResult},
    transforms::prelude::*,
    types::DuplicateReport,
};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_NAME: &str = "statement";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "format")]
    Format,
    #[serde(rename = "fix-fitid")]
    FixFitid,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Format, Action::FixFitid];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Format => "format",
            Action::FixFitid => "fix-fitid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::Format => "Format OFX (one tag per line)",
            Action::FixFitid => "Fix duplicate FITIDs",
        }
    }

    pub fn output_suffix(&self) -> &'static str {
        match self {
            Action::Format => "formatado",
            Action::FixFitid => "corrigido",
        }
    }

    pub fn apply(&self, content: &str) -> (String, Option<DuplicateReport>) {
        match self {
            Action::Format => (OfxFormatter::apply(content), None),
            Action::FixFitid => {
                let Deduplicated { content, report } = FitidDeduplicator::apply(content);
                (content, Some(report))
            }
        }
    }
}

impl FromStr for Action {
    type Err = OfxCleanupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| OfxCleanupError::InvalidChoice(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Processed {
    pub action: Action,
    pub content: String,
    pub report: Option<DuplicateReport>,
    pub file_name: String,
}

/// `{stem}_{suffix}.ofx`, where the stem drops the final extension and any
/// leading directories of `original`.
pub fn output_file_name(original: Option<&str>, action: Action) -> String {
    let stem = original
        .and_then(|name| Path::new(name).file_stem())
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(DEFAULT_BASE_NAME);

    format!("{}_{}.ofx", stem, action.output_suffix())
}

pub fn is_ofx(filename: Option<&str>, content: &str) -> bool {
    if let Some(name) = filename {
        let ext = name.to_lowercase();
        if ext.ends_with(".qfx") || ext.ends_with(".ofx") {
            return true;
        }
    }

    content.contains("<OFX>") || content.contains("OFXHEADER:") || content.contains("DATA:OFXSGML")
}

#[derive(Default)]
pub struct CleanupBuilder {
    content: Option<String>,
    bytes: Option<Vec<u8>>,
    filepath: Option<String>,
    action: Option<Action>,
}

impl CleanupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.bytes = Some(bytes.to_vec());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn run(self) -> OfxCleanupResult<Processed> {
        let action = self.action.ok_or(OfxCleanupError::MissingAction)?;

        let content = match (self.content, self.bytes) {
            (Some(content), _) => content,
            (None, Some(bytes)) => decode_content(&bytes)?.text,
            (None, None) => {
                let path = self
                    .filepath
                    .as_deref()
                    .ok_or(OfxCleanupError::MissingContentAndFilepath)?;
                decode_content(&fs::read(path)?)?.text
            }
        };

        if !is_ofx(self.filepath.as_deref(), &content) {
            tracing::warn!("input does not look like an OFX document, processing anyway");
        }

        let (content, report) = action.apply(&content);

        Ok(Processed {
            action,
            content,
            report,
            file_name: output_file_name(self.filepath.as_deref(), action),
        })
    }
}
