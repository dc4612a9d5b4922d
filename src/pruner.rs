//! The prune workflow: scan, preview, confirm, delete, report.
//!
//! Each invocation walks `Scanning -> Previewing -> {Idle | AwaitingConfirmation}
//! -> {Aborted | Deleting} -> Reported`. Nothing is kept between invocations.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::error::PruneError;
use crate::output;
use crate::prompt::{Confirm, LinePrompt};
use crate::selection::{self, NumberRange, Selection};
use crate::utils;

pub const PROCEED_PROMPT: &str = "\nProceed with deletion? (y/N): ";
pub const RUN_ACTUAL_PROMPT: &str = "\nRun actual deletion? (y/N): ";

/// Where an invocation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Scanning,
    Previewing,
    Idle,
    AwaitingConfirmation,
    Aborted,
    Deleting,
    Reported,
}

/// What the operator was shown before any deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub count: usize,
    pub range: NumberRange,
    pub first: PathBuf,
    pub last: PathBuf,
}

/// Result of a deletion pass.
#[derive(Debug, Clone, Default)]
pub struct PruneReport {
    pub deleted: usize,
    pub bytes_freed: u64,
    pub errors: Vec<(PathBuf, String)>,
}

impl PruneReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Terminal state of one invocation.
#[derive(Debug, Clone)]
pub enum PruneOutcome {
    NothingInRange,
    DryRun(Preview),
    Aborted(Preview),
    Completed(PruneReport),
}

type ProgressFn<'a> = Box<dyn FnMut(usize, usize, &Path) + 'a>;

pub struct Pruner<'a, C> {
    confirm: C,
    progress_fn: Option<ProgressFn<'a>>,
    progress_bar: bool,
    phase: Phase,
}

impl<'a, C: Confirm> Pruner<'a, C> {
    pub fn new(confirm: C) -> Self {
        Self {
            confirm,
            progress_fn: None,
            progress_bar: true,
            phase: Phase::Scanning,
        }
    }

    /// Called after each directory is attempted with
    /// `(completed, total, path)`.
    pub fn on_progress(mut self, f: impl FnMut(usize, usize, &Path) + 'a) -> Self {
        self.progress_fn = Some(Box::new(f));
        self
    }

    pub fn progress_bar(mut self, enabled: bool) -> Self {
        self.progress_bar = enabled;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn into_confirm(self) -> C {
        self.confirm
    }

    fn enter(&mut self, phase: Phase) {
        debug!(from = ?self.phase, to = ?phase, "phase transition");
        self.phase = phase;
    }

    /// Remove every numbered directory in `range` under `base_dir`.
    ///
    /// With `dry_run` set, stops after the preview. Otherwise the operator
    /// must confirm before anything is removed.
    pub fn prune(
        &mut self,
        base_dir: &Path,
        range: NumberRange,
        dry_run: bool,
    ) -> Result<PruneOutcome, PruneError> {
        self.phase = Phase::Scanning;
        let selection = selection::scan(base_dir, range)?;

        self.enter(Phase::Previewing);
        let Some(preview) = preview(&selection, range) else {
            output::print_no_directories(range);
            self.enter(Phase::Idle);
            return Ok(PruneOutcome::NothingInRange);
        };
        output::print_preview(
            preview.count,
            range,
            &utils::display_path(&preview.first),
            &utils::display_path(&preview.last),
        );

        if dry_run {
            output::print_dry_run_footer();
            self.enter(Phase::Idle);
            return Ok(PruneOutcome::DryRun(preview));
        }

        self.enter(Phase::AwaitingConfirmation);
        if !self.confirm.confirm(PROCEED_PROMPT)? {
            output::print_cancelled();
            self.enter(Phase::Aborted);
            return Ok(PruneOutcome::Aborted(preview));
        }

        self.enter(Phase::Deleting);
        let report = self.delete_all(&selection);

        output::print_summary(report.deleted, &utils::format_size(report.bytes_freed));
        if report.has_errors() {
            output::print_error_count(report.errors.len());
            for (path, err) in &report.errors {
                output::print_delete_error(&utils::display_path(path), err);
            }
        }

        self.enter(Phase::Reported);
        Ok(PruneOutcome::Completed(report))
    }

    /// Dry run first, then ask whether to do it for real.
    pub fn preview_then_prune(
        &mut self,
        base_dir: &Path,
        range: NumberRange,
    ) -> Result<PruneOutcome, PruneError> {
        output::print_dry_run_header();
        let outcome = self.prune(base_dir, range, true)?;
        if matches!(outcome, PruneOutcome::NothingInRange) {
            return Ok(outcome);
        }

        if self.confirm.confirm(RUN_ACTUAL_PROMPT)? {
            self.prune(base_dir, range, false)
        } else {
            Ok(outcome)
        }
    }

    fn delete_all(&mut self, selection: &Selection) -> PruneReport {
        output::print_deleting_header();

        let total = selection.len();
        let bar = if self.progress_bar {
            new_progress_bar(total as u64)
        } else {
            ProgressBar::hidden()
        };

        let mut report = PruneReport::default();

        for (i, candidate) in selection.iter().enumerate() {
            match utils::remove_tree(&candidate.path) {
                Ok(freed) => {
                    debug!(path = %candidate.path.display(), bytes = freed, "removed");
                    report.deleted += 1;
                    report.bytes_freed += freed;
                }
                Err(e) => {
                    warn!(path = %candidate.path.display(), error = %e, "failed to remove");
                    report.errors.push((candidate.path.clone(), e.to_string()));
                }
            }

            bar.inc(1);
            if let Some(f) = self.progress_fn.as_mut() {
                f(i + 1, total, &candidate.path);
            }
        }

        bar.finish_and_clear();
        report
    }
}

fn preview(selection: &Selection, range: NumberRange) -> Option<Preview> {
    let first = selection.first()?;
    let last = selection.last()?;
    Some(Preview {
        count: selection.len(),
        range,
        first: first.path.clone(),
        last: last.path.clone(),
    })
}

fn new_progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}<{eta}]")
    {
        bar.set_style(style);
    }
    bar
}

/// Run one invocation against stdin/stdout.
pub fn prune(
    base_dir: &Path,
    start: i64,
    end: i64,
    dry_run: bool,
) -> Result<PruneOutcome, PruneError> {
    Pruner::new(LinePrompt::stdin()).prune(base_dir, NumberRange::new(start, end), dry_run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompt;
    use std::fs;
    use tempfile::tempdir;

    fn pruner(answers: &[&str]) -> Pruner<'static, ScriptedPrompt> {
        Pruner::new(ScriptedPrompt::new(answers.iter().copied())).progress_bar(false)
    }

    fn make_dirs(base: &Path, names: &[&str]) {
        for name in names {
            fs::create_dir(base.join(name)).unwrap();
            fs::write(base.join(name).join("data.txt"), name.as_bytes()).unwrap();
        }
    }

    #[test]
    fn dry_run_previews_without_prompting() {
        let tmp = tempdir().unwrap();
        make_dirs(tmp.path(), &["100", "200", "abc", "300"]);

        let mut p = pruner(&["y"]);
        let outcome = p.prune(tmp.path(), NumberRange::new(150, 300), true).unwrap();

        let PruneOutcome::DryRun(preview) = outcome else {
            panic!("expected dry run, got {outcome:?}");
        };
        assert_eq!(preview.count, 2);
        assert_eq!(preview.first, tmp.path().join("200"));
        assert_eq!(preview.last, tmp.path().join("300"));
        assert_eq!(p.phase(), Phase::Idle);
        assert!(p.into_confirm().asked.is_empty());
        for name in ["100", "200", "abc", "300"] {
            assert!(tmp.path().join(name).is_dir());
        }
    }

    #[test]
    fn empty_selection_never_prompts() {
        let tmp = tempdir().unwrap();
        make_dirs(tmp.path(), &["1", "abc"]);

        let mut p = pruner(&["y"]);
        let outcome = p.prune(tmp.path(), NumberRange::new(50, 60), false).unwrap();

        assert!(matches!(outcome, PruneOutcome::NothingInRange));
        assert!(p.into_confirm().asked.is_empty());
        assert!(tmp.path().join("1").is_dir());
    }

    #[test]
    fn decline_leaves_everything_in_place() {
        let tmp = tempdir().unwrap();
        make_dirs(tmp.path(), &["1", "2", "3"]);

        for answer in ["", "n", "yes", " y"] {
            let mut p = pruner(&[answer]);
            let outcome = p.prune(tmp.path(), NumberRange::new(1, 3), false).unwrap();
            assert!(matches!(outcome, PruneOutcome::Aborted(_)), "answer {answer:?}");
            assert_eq!(p.phase(), Phase::Aborted);
        }
        for name in ["1", "2", "3"] {
            assert!(tmp.path().join(name).is_dir());
        }
    }

    #[test]
    fn confirmed_pass_removes_selection_and_reports_progress() {
        let tmp = tempdir().unwrap();
        make_dirs(tmp.path(), &["5", "6", "7", "keep", "8"]);

        let mut seen = Vec::new();
        let outcome = {
            let mut p = Pruner::new(ScriptedPrompt::new(["Y"]))
                .progress_bar(false)
                .on_progress(|done, total, _path| seen.push((done, total)));
            let outcome = p.prune(tmp.path(), NumberRange::new(6, 8), false).unwrap();
            assert_eq!(p.phase(), Phase::Reported);
            outcome
        };

        let PruneOutcome::Completed(report) = outcome else {
            panic!("expected completed pass");
        };
        assert_eq!(report.deleted, 3);
        assert_eq!(report.bytes_freed, 3);
        assert!(!report.has_errors());
        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
        assert!(tmp.path().join("5").is_dir());
        assert!(tmp.path().join("keep").is_dir());
        for name in ["6", "7", "8"] {
            assert!(!tmp.path().join(name).exists());
        }
    }

    #[test]
    fn vanished_directory_is_recorded_not_fatal() {
        let tmp = tempdir().unwrap();
        make_dirs(tmp.path(), &["1", "2", "3"]);
        let doomed = tmp.path().join("2");

        let mut p = Pruner::new(ScriptedPrompt::new(["y"]))
            .progress_bar(false)
            .on_progress(|done, _, _| {
                if done == 1 {
                    fs::remove_dir_all(&doomed).unwrap();
                }
            });
        let outcome = p.prune(tmp.path(), NumberRange::new(1, 3), false).unwrap();

        let PruneOutcome::Completed(report) = outcome else {
            panic!("expected completed pass");
        };
        assert_eq!(report.deleted, 2);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].0, tmp.path().join("2"));
        assert!(!report.errors[0].1.is_empty());
    }

    #[test]
    fn preview_then_prune_declined_is_dry_only() {
        let tmp = tempdir().unwrap();
        make_dirs(tmp.path(), &["10", "11"]);

        let mut p = pruner(&["n"]);
        let outcome = p.preview_then_prune(tmp.path(), NumberRange::new(10, 11)).unwrap();

        assert!(matches!(outcome, PruneOutcome::DryRun(_)));
        assert_eq!(p.into_confirm().asked, vec![RUN_ACTUAL_PROMPT]);
        assert!(tmp.path().join("10").is_dir());
    }

    #[test]
    fn preview_then_prune_asks_twice_before_deleting() {
        let tmp = tempdir().unwrap();
        make_dirs(tmp.path(), &["10", "11"]);

        let mut p = pruner(&["y", "y"]);
        let outcome = p.preview_then_prune(tmp.path(), NumberRange::new(10, 11)).unwrap();

        assert!(matches!(outcome, PruneOutcome::Completed(ref r) if r.deleted == 2));
        assert_eq!(p.into_confirm().asked, vec![RUN_ACTUAL_PROMPT, PROCEED_PROMPT]);
        assert!(!tmp.path().join("10").exists());
    }

    #[test]
    fn missing_base_fails_before_prompting() {
        let tmp = tempdir().unwrap();
        let mut p = pruner(&["y"]);
        let err = p.prune(&tmp.path().join("missing"), NumberRange::new(0, 1), false);
        assert!(matches!(err, Err(PruneError::Access { .. })));
        assert!(p.into_confirm().asked.is_empty());
    }
}
