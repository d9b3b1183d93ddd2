use anyhow::{Context, Result};
use std::io::BufRead;
use tailwind_merge::TwMerge;

pub struct MergeResult {
    /// One merged class list per input list
    pub lines: Vec<String>,
}

/// Merges the class arguments as a single list. Without arguments every line
/// of `input` is merged on its own.
pub fn execute(engine: &TwMerge, classes: &[String], input: impl BufRead) -> Result<MergeResult> {
    if !classes.is_empty() {
        return Ok(MergeResult {
            lines: vec![engine.merge(classes)],
        });
    }

    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read class list from stdin")?;
        lines.push(engine.merge([line]));
    }
    Ok(MergeResult { lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Cursor;

    #[test]
    fn test_merge_arguments_as_one_list() {
        let engine = TwMerge::default();
        let classes = ["px-2".to_string(), "py-1 p-4".to_string(), "custom".to_string()];
        let result = execute(&engine, &classes, Cursor::new("")).unwrap();
        assert_eq!(result.lines, ["p-4 custom"]);
    }

    #[test]
    fn test_merge_stdin_line_by_line() {
        let engine = TwMerge::default();
        let input = indoc! {"
            p-2 p-4
            hover:block hover:inline

            text-lg/7 leading-9 text-lg/8
        "};
        let result = execute(&engine, &[], Cursor::new(input)).unwrap();
        assert_eq!(result.lines, ["p-4", "hover:inline", "", "text-lg/8"]);
    }
}
