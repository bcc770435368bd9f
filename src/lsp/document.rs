use crate::validation::{validate_document, CueStateMachine, LintReport, Phase};

/// State for each open document
#[derive(Debug)]
pub struct DocumentState {
    pub content: String,
    pub report: LintReport,
    /// UTF-16 length of every line, for LSP ranges
    line_lens: Vec<u32>,
}

impl DocumentState {
    /// Lint the content once; diagnostics and symbols are served from here
    pub fn new(content: String) -> Self {
        let report = validate_document(&content);
        let line_lens = content
            .lines()
            .map(|line| line.encode_utf16().count() as u32)
            .collect();

        Self {
            content,
            report,
            line_lens,
        }
    }

    /// Length of a 0-based line in UTF-16 code units, 0 past the end
    pub fn line_len(&self, line_idx: usize) -> u32 {
        self.line_lens.get(line_idx).copied().unwrap_or(0)
    }
}

/// Where a cue sits in the document, for the symbol outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueOutline {
    /// 0-based line of the index
    pub start_line: usize,
    /// 0-based line of the last timing or text line
    pub end_line: usize,
    pub label: String,
    pub timing: Option<String>,
}

/// Locate cues by replaying the state machine and watching its phase
pub fn cue_outline(content: &str) -> Vec<CueOutline> {
    let mut machine = CueStateMachine::new();
    let mut outline: Vec<CueOutline> = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let before = machine.phase();
        machine.process(line);

        match (before, machine.phase()) {
            (Phase::ExpectIndex, Phase::ExpectTiming) => outline.push(CueOutline {
                start_line: line_idx,
                end_line: line_idx,
                label: line.trim().to_string(),
                timing: None,
            }),
            (Phase::ExpectTiming, Phase::ExpectText) => {
                if let Some(cue) = outline.last_mut() {
                    cue.timing = Some(line.trim().to_string());
                    cue.end_line = line_idx;
                }
            }
            (Phase::ExpectText, Phase::ExpectText) => {
                if let Some(cue) = outline.last_mut() {
                    cue.end_line = line_idx;
                }
            }
            _ => {}
        }
    }

    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline() {
        let content = "1\n00:00:01,000 --> 00:00:02,000\nHello\nthere\n\n2\n00:00:03,000 --> 00:00:04,000\n\n";
        let outline = cue_outline(content);

        assert_eq!(
            outline,
            vec![
                CueOutline {
                    start_line: 0,
                    end_line: 3,
                    label: "1".to_string(),
                    timing: Some("00:00:01,000 --> 00:00:02,000".to_string()),
                },
                CueOutline {
                    start_line: 5,
                    end_line: 6,
                    label: "2".to_string(),
                    timing: Some("00:00:03,000 --> 00:00:04,000".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_outline_keeps_malformed_cues() {
        let outline = cue_outline("x\nnot a timing\ntext\n\n");
        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].label, "x");
        assert_eq!(outline[0].timing.as_deref(), Some("not a timing"));
    }

    #[test]
    fn test_document_state_lints_on_creation() {
        let state = DocumentState::new("\n".to_string());
        assert_eq!(state.report.diagnostics.len(), 1);
        assert_eq!(state.line_len(0), 0);
        assert_eq!(state.line_len(10), 0);
    }

    #[test]
    fn test_line_lengths_in_utf16_units() {
        let state = DocumentState::new("1
00:00:01,000 --> 00:00:02,000
café 🎬

".to_string());
        assert_eq!(state.line_len(0), 1);
        assert_eq!(state.line_len(1), 29);
        assert_eq!(state.line_len(2), 7);
        assert_eq!(state.line_len(3), 0);
        assert_eq!(state.line_len(4), 0);
    }
}
