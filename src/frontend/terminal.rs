use std::{
    fs,
    io::{BufRead, Write},
    path::PathBuf,
};

use super::{Frontend, Upload};
use crate::{
    builder::Action,
    errors::{OfxCleanupError, OfxCleanupResult},
    types::DuplicateReport,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write `<derived file name>` inside this directory.
    Directory(PathBuf),
    /// Write exactly this path.
    File(PathBuf),
}

/// Line-oriented frontend: prompts on `reader`, prints on `writer` and
/// works on files from disk.
pub struct TerminalFrontend<R, W> {
    input: PathBuf,
    output: OutputTarget,
    action: Option<Action>,
    report_json: bool,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(input: PathBuf, output: OutputTarget, reader: R, writer: W) -> Self {
        Self {
            input,
            output,
            action: None,
            report_json: false,
            reader,
            writer,
        }
    }

    /// Skips the prompt and always picks `action`.
    pub fn with_action(mut self, action: Option<Action>) -> Self {
        self.action = action;
        self
    }

    pub fn with_report_json(mut self, report_json: bool) -> Self {
        self.report_json = report_json;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, text: &str) -> OfxCleanupResult<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(OfxCleanupError::TerminalIo)
    }
}

fn parse_choice(answer: &str, options: &[Action]) -> Option<Action> {
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).copied();
    }

    answer.parse::<Action>().ok().filter(|action| options.contains(action))
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn receive_upload(&mut self) -> OfxCleanupResult<Upload> {
        let bytes = fs::read(&self.input)?;
        let name = self
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Upload { name, bytes })
    }

    fn present_choice(&mut self, options: &[Action]) -> OfxCleanupResult<Action> {
        if let Some(action) = self.action {
            return Ok(action);
        }

        let mut menu = String::from("Choose an action:\n");
        for (i, action) in options.iter().enumerate() {
            menu.push_str(&format!("  {}) {}\n", i + 1, action.label()));
        }
        menu.push_str("> ");
        self.say(&menu)?;

        let mut answer = String::new();
        let read = self
            .reader
            .read_line(&mut answer)
            .map_err(OfxCleanupError::TerminalIo)?;
        if read == 0 {
            return Err(OfxCleanupError::InvalidChoice("end of input".to_string()));
        }

        let answer = answer.trim();
        parse_choice(answer, options).ok_or_else(|| OfxCleanupError::InvalidChoice(answer.to_string()))
    }

    fn show_report(&mut self, report: &DuplicateReport) -> OfxCleanupResult<()> {
        let text = if self.report_json {
            format!("{}\n", serde_json::to_string_pretty(report)?)
        } else {
            format!("Duplicate FITIDs found:\n{}", report)
        };
        self.say(&text)
    }

    fn offer_download(&mut self, bytes: &[u8], file_name: &str) -> OfxCleanupResult<()> {
        let path = match &self.output {
            OutputTarget::Directory(dir) => dir.join(file_name),
            OutputTarget::File(path) => path.clone(),
        };

        fs::write(&path, bytes).map_err(|source| OfxCleanupError::WriteOutputFailed {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote processed statement");
        self.say(&format!("Saved {}\n", path.display()))
    }
}
