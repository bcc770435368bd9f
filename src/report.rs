//! Console rendering and the `lint` command driver.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::discovery::collect_files;
use crate::validation::{lint_file, LintReport};
use crate::Config;

const RULE: &str = ".....................";

/// Write one file's results in the console format:
///
/// ```text
/// ....... movie.srt .......
/// error: Extra Space near line: 12
/// .....................
/// ```
pub fn render_report<W: Write>(out: &mut W, path: &Path, report: &LintReport) -> io::Result<()> {
    writeln!(out, "....... {} .......", path.display())?;

    if report.is_clean() {
        writeln!(out, "No errors found")?;
    } else {
        for diagnostic in report {
            writeln!(
                out,
                "error: {} near line: {}",
                diagnostic.kind, diagnostic.line
            )?;
        }
    }

    writeln!(out, "{}", RULE)
}

/// Outcome of a `lint` run across all files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintSummary {
    pub files: usize,
    pub files_with_errors: usize,
    pub unreadable: usize,
}

impl LintSummary {
    /// 0 when everything is clean, 1 when diagnostics were found, 2 when a
    /// file could not be read
    pub fn exit_code(&self) -> u8 {
        if self.unreadable > 0 {
            2
        } else if self.files_with_errors > 0 {
            1
        } else {
            0
        }
    }
}

/// Lint every file reachable from `paths`, rendering results to `out`.
///
/// A missing argument path aborts the run. A file that cannot be read is
/// reported on stderr and skipped.
pub fn run_lint<W: Write>(paths: &[PathBuf], config: &Config, out: &mut W) -> Result<LintSummary> {
    let files = collect_files(paths, config)?;
    let mut summary = LintSummary::default();

    for file in &files {
        summary.files += 1;

        match lint_file(file) {
            Ok(report) => {
                log::info!("{}: {} diagnostics", file.display(), report.diagnostics.len());
                if !report.is_clean() {
                    summary.files_with_errors += 1;
                }
                render_report(out, file, &report)?;
            }
            Err(err) => {
                summary.unreadable += 1;
                eprintln!("error: {:#}", err);
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    fn render(path: &str, report: &LintReport) -> String {
        let mut out = Vec::new();
        render_report(&mut out, Path::new(path), report).expect("write to vec");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn test_render_clean() {
        assert_eq!(
            render("a.srt", &LintReport::new()),
            "....... a.srt .......\nNo errors found\n.....................\n"
        );
    }

    #[test]
    fn test_render_diagnostics() {
        let mut report = LintReport::new();
        report.push(1, ErrorKind::ExtraSpace);
        report.push(9, ErrorKind::InvalidNum);

        assert_eq!(
            render("b.srt", &report),
            "....... b.srt .......\n\
             error: Extra Space near line: 1\n\
             error: Subtitle index should increase 1 near line: 9\n\
             .....................\n"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(LintSummary::default().exit_code(), 0);

        let dirty = LintSummary {
            files: 2,
            files_with_errors: 1,
            unreadable: 0,
        };
        assert_eq!(dirty.exit_code(), 1);

        let broken = LintSummary {
            unreadable: 1,
            ..dirty
        };
        assert_eq!(broken.exit_code(), 2);
    }
}
