use crate::transforms::lines::{join_lines, split_lines};
use crate::transforms::traits::Transform;

/// Puts every tag on its own line by breaking between adjacent `><`.
///
/// The output always starts with one blank line, so repeated runs keep
/// adding leading blank lines.
pub struct OfxFormatter;

impl Transform for OfxFormatter {
    type Output = String;

    fn apply(content: &str) -> Self::Output {
        let broken = content.replace("><", ">\n<");
        let mut lines = split_lines(&broken);
        lines.insert(0, "");

        tracing::debug!(lines = lines.len(), "formatted OFX content");
        join_lines(&lines)
    }
}

pub fn format_ofx(content: &str) -> String {
    OfxFormatter::apply(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE_ONE_LINE_OFX: &str = "<OFX><BANKMSGSRSV1><STMTTRNRS><STMTRS><BANKTRANLIST><STMTTRN><TRNTYPE>DEBIT<FITID>202512260<NAME>Coffee Shop</STMTTRN></BANKTRANLIST></STMTRS></STMTTRNRS></BANKMSGSRSV1></OFX>";

    #[test]
    fn test_format_splits_adjacent_tags() {
        let result = format_ofx("<A><B></B></A>");
        assert_eq!(result, "\n<A>\n<B>\n</B>\n</A>");
        assert_eq!(result.strip_prefix('\n').unwrap(), "<A>\n<B>\n</B>\n</A>");
    }

    #[rstest]
    #[case("", "")]
    #[case("plain text", "\nplain text")]
    #[case("<FITID>1</FITID>", "\n<FITID>1</FITID>")]
    #[case("<A>\r\n<B>", "\n<A>\n<B>")]
    #[case("<A> <B>", "\n<A> <B>")]
    fn test_format_edge_cases(#[case] content: &str, #[case] expected: &str) {
        assert_eq!(format_ofx(content), expected);
    }

    #[test]
    fn test_format_one_line_statement() {
        let result = format_ofx(SAMPLE_ONE_LINE_OFX);
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "<OFX>");
        assert!(lines.contains(&"<TRNTYPE>DEBIT"));
        assert!(lines.contains(&"<NAME>Coffee Shop"));
        assert_eq!(*lines.last().unwrap(), "</OFX>");
        assert!(!result.contains("><"));
    }

    #[test]
    fn test_format_twice_only_adds_blank_line() {
        let once = format_ofx(SAMPLE_ONE_LINE_OFX);
        let twice = format_ofx(&once);

        assert!(!twice.contains("><"));
        assert_eq!(twice, format!("\n{}", once));
    }
}
