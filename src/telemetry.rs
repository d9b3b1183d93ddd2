//! Routes the library's `tracing` events to stderr.

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Warnings by default, debug events under `--verbose`. `RUST_LOG` wins over both.
pub fn init(verbose: bool) {
    subscriber(verbose, std::io::stderr).init();
}

fn subscriber<W>(verbose: bool, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_target(false),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::load_engine;
    use indoc::indoc;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn load_with_logs(verbose: bool, config: &str) -> (tailwind_merge::TwMerge, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("twmerge.toml");
        std::fs::write(&path, config).unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        let engine = tracing::subscriber::with_default(
            subscriber(verbose, move || writer.clone()),
            || load_engine(Some(&path)),
        )
        .unwrap();
        (engine, captured.contents())
    }

    #[test]
    fn test_missing_theme_key_is_reported() {
        let (engine, logs) = load_with_logs(
            false,
            indoc! {r#"
                [extend.class_groups.gutter]
                base = "gutter"
                values = [{ theme = "gutters" }]
            "#},
        );

        assert_eq!(engine.merge(["gutter-1 gutter-2"]), "gutter-1 gutter-2");
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("class group references a missing theme key"), "{logs}");
        assert!(logs.contains("gutters"), "{logs}");
        assert!(!logs.contains("built class map"), "{logs}");
    }

    #[test]
    fn test_unknown_conflict_group_is_reported() {
        let (_, logs) = load_with_logs(
            false,
            indoc! {r#"
                [extend.conflicting_class_groups]
                paddingg = ["px"]
            "#},
        );
        assert!(logs.contains("paddingg"), "{logs}");
    }

    #[test]
    fn test_verbose_reports_class_map_build() {
        let (_, logs) = load_with_logs(true, "separator = \":\"\n");
        assert!(logs.contains("built class map"), "{logs}");
    }
}
