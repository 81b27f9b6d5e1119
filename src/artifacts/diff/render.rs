use crate::artifacts::diff::diff_tree::Diff;
use crate::artifacts::diff::patch::Patch;
use colored::Colorize;
use derive_new::new;
use std::fmt::Display;
use std::io::Write;

/// Writes diffs one node per line, indented by depth
///
/// Unchanged subtrees are collapsed to a single line. Colours follow the
/// global `colored` settings, so they disappear when output is not a terminal
/// or when `colored::control::set_override(false)` is in effect.
#[derive(new)]
pub struct DiffPrinter<W: Write> {
    writer: W,
}

impl<W: Write> DiffPrinter<W> {
    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn print_script<L: Clone + Display>(&mut self, script: &[Diff<L>]) -> anyhow::Result<()> {
        for diff in script {
            self.print_diff(diff)?;
        }

        Ok(())
    }

    pub fn print_diff<L: Clone + Display>(&mut self, diff: &Diff<L>) -> anyhow::Result<()> {
        let mut pending = vec![(0, diff)];

        while let Some((depth, diff)) = pending.pop() {
            let indent = "  ".repeat(depth);

            match diff {
                Diff::Patch(patch) => self.print_patch(&indent, patch)?,
                Diff::Merge { .. } if diff.is_unchanged() => {
                    if let Some(term) = diff.after() {
                        writeln!(self.writer, "{indent}  {term}")?;
                    }
                }
                Diff::Merge { label, children } => {
                    writeln!(self.writer, "{indent}  {label}")?;
                    pending.extend(children.iter().rev().map(|child| (depth + 1, child)));
                }
            }
        }

        Ok(())
    }

    fn print_patch<T: Display>(&mut self, indent: &str, patch: &Patch<T>) -> anyhow::Result<()> {
        match patch {
            Patch::Insert(term) => writeln!(self.writer, "{}", format!("{indent}+ {term}").green())?,
            Patch::Delete(term) => writeln!(self.writer, "{}", format!("{indent}- {term}").red())?,
            Patch::Replace(old, new) => writeln!(
                self.writer,
                "{}",
                format!("{indent}~ {old} -> {new}").yellow()
            )?,
        }

        Ok(())
    }
}
