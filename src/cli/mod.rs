pub mod explain;
pub mod merge;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tailwind_merge::TwMerge;

/// The default engine, or one patched by a TOML config file.
pub fn load_engine(config_path: Option<&Path>) -> Result<TwMerge> {
    let Some(path) = config_path else {
        return Ok(TwMerge::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    TwMerge::from_toml_str(&contents)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_load_default_engine() {
        let engine = load_engine(None).unwrap();
        assert_eq!(engine.merge(["p-2 p-4"]), "p-4");
    }

    #[test]
    fn test_load_engine_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("twmerge.toml");
        fs::write(
            &path,
            indoc! {r#"
                separator = "_"

                [extend.class_groups.elevation]
                base = "elevation"
                values = [{ validator = "integer" }]
            "#},
        )
        .unwrap();

        let engine = load_engine(Some(&path)).unwrap();
        assert_eq!(engine.merge(["hover_p-2 hover_p-4"]), "hover_p-4");
        assert_eq!(engine.merge(["elevation-1 elevation-2"]), "elevation-2");
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load_engine(Some(&path)).err().unwrap();
        assert!(format!("{err:#}").starts_with("Failed to read config file"));
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(
            &path,
            "[extend.class_groups.x]\nvalues = [{ validator = \"nope\" }]\n",
        )
        .unwrap();
        let err = load_engine(Some(&path)).err().unwrap();
        assert!(format!("{err:#}").contains("nope"));
    }
}
