//! Presentation side of a cleanup session: where the statement comes from,
//! how the action is chosen and where the result goes.

mod terminal;

pub use terminal::{OutputTarget, TerminalFrontend};

use crate::{
    builder::{Action, CleanupBuilder, Processed},
    decode::decode_content,
    errors::OfxCleanupResult,
    types::DuplicateReport,
};

#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

pub trait Frontend {
    fn receive_upload(&mut self) -> OfxCleanupResult<Upload>;

    fn present_choice(&mut self, options: &[Action]) -> OfxCleanupResult<Action>;

    fn show_report(&mut self, report: &DuplicateReport) -> OfxCleanupResult<()>;

    fn offer_download(&mut self, bytes: &[u8], file_name: &str) -> OfxCleanupResult<()>;
}

/// Runs one upload → choose → process → download round trip.
pub fn run_session<F: Frontend>(frontend: &mut F) -> OfxCleanupResult<Processed> {
    let upload = frontend.receive_upload()?;
    let decoded = decode_content(&upload.bytes)?;
    tracing::info!(
        file = %upload.name,
        bytes = upload.bytes.len(),
        encoding = decoded.encoding.name(),
        "received statement"
    );

    let action = frontend.present_choice(&Action::ALL)?;

    let processed = CleanupBuilder::new()
        .content(&decoded.text)
        .filename(&upload.name)
        .action(action)
        .run()?;

    if let Some(report) = processed.report.as_ref().filter(|r| !r.is_empty()) {
        frontend.show_report(report)?;
    }

    frontend.offer_download(processed.content.as_bytes(), &processed.file_name)?;
    Ok(processed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::OfxCleanupError;

    #[derive(Default)]
    struct RecordingFrontend {
        upload: Option<Upload>,
        choice: Option<Action>,
        offered: Vec<Action>,
        reports: Vec<DuplicateReport>,
        downloads: Vec<(Vec<u8>, String)>,
    }

    impl Frontend for RecordingFrontend {
        fn receive_upload(&mut self) -> OfxCleanupResult<Upload> {
            self.upload
                .take()
                .ok_or(OfxCleanupError::MissingContentAndFilepath)
        }

        fn present_choice(&mut self, options: &[Action]) -> OfxCleanupResult<Action> {
            self.offered = options.to_vec();
            self.choice.ok_or(OfxCleanupError::MissingAction)
        }

        fn show_report(&mut self, report: &DuplicateReport) -> OfxCleanupResult<()> {
            self.reports.push(report.clone());
            Ok(())
        }

        fn offer_download(&mut self, bytes: &[u8], file_name: &str) -> OfxCleanupResult<()> {
            self.downloads.push((bytes.to_vec(), file_name.to_string()));
            Ok(())
        }
    }

    fn frontend(bytes: &[u8], choice: Action) -> RecordingFrontend {
        RecordingFrontend {
            upload: Some(Upload {
                name: "extrato.ofx".to_string(),
                bytes: bytes.to_vec(),
            }),
            choice: Some(choice),
            ..Default::default()
        }
    }

    #[test]
    fn test_fix_fitid_session_reports_and_downloads() {
        let mut ui = frontend(b"<FITID>A\n<FITID>A\n<FITID>B", Action::FixFitid);
        let processed = run_session(&mut ui).unwrap();

        assert_eq!(ui.offered, Action::ALL.to_vec());
        assert_eq!(ui.reports.len(), 1);
        assert_eq!(ui.reports[0].get("A"), Some(2));
        assert_eq!(ui.downloads.len(), 1);
        assert_eq!(ui.downloads[0].0, b"<FITID>A\n<FITID>A_02\n<FITID>B".to_vec());
        assert_eq!(ui.downloads[0].1, "extrato_corrigido.ofx");
        assert_eq!(processed.action, Action::FixFitid);
    }

    #[test]
    fn test_no_report_without_duplicates() {
        let mut ui = frontend(b"<FITID>A\n<FITID>B", Action::FixFitid);
        run_session(&mut ui).unwrap();

        assert!(ui.reports.is_empty());
        assert_eq!(ui.downloads.len(), 1);
    }

    #[test]
    fn test_format_session() {
        let mut ui = frontend(b"<OFX><FITID>A</OFX>", Action::Format);
        run_session(&mut ui).unwrap();

        assert!(ui.reports.is_empty());
        assert_eq!(ui.downloads[0].0, b"\n<OFX>\n<FITID>A</OFX>".to_vec());
        assert_eq!(ui.downloads[0].1, "extrato_formatado.ofx");
    }

    #[test]
    fn test_undecodable_upload_stops_before_choice() {
        let mut ui = frontend(b"\x81\x8d", Action::Format);
        let result = run_session(&mut ui);

        assert!(matches!(result, Err(OfxCleanupError::UndecodableContent)));
        assert!(ui.offered.is_empty());
        assert!(ui.downloads.is_empty());
    }
}
