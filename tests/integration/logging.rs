//! Definitions and rejections are logged through `tracing`.

use std::io;
use std::sync::{Arc, Mutex};

use enumkit::{DefinitionError, Family};
use tracing_subscriber::EnvFilter;

/// In-memory sink for formatted events.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records `enumkit` events up to `trace`.
fn capture(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("enumkit=trace"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn definition_is_logged_with_its_shape() {
    let output = capture(|| {
        let family =
            Family::<i64>::from_texts("Logged", &["Low = -9", "High = 9", "_default = 9"]).unwrap();
        assert_eq!(family.default_value(), 9);
    });

    assert!(output.contains("defined enumeration"), "{output}");
    assert!(output.contains("family=Logged"), "{output}");
    assert!(output.contains("declared=3"), "{output}");
    assert!(output.contains("size=2"), "{output}");
    assert!(output.contains("min=-9"), "{output}");
    assert!(output.contains("max=9"), "{output}");
    assert!(output.contains("DEBUG"), "{output}");
}

#[test]
fn rejection_is_logged_as_a_warning() {
    let output = capture(|| {
        let err =
            Family::<i64>::from_texts("Logged", &["_max = 1", "_min = 2", "A = 1"]).unwrap_err();
        assert_eq!(err, DefinitionError::InvertedRange { min: 2, max: 1 });
    });

    assert!(output.contains("rejected enumeration definition"), "{output}");
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("family=Logged"), "{output}");
    assert!(!output.contains("defined enumeration"), "{output}");
}

#[test]
fn name_table_build_is_traced_once() {
    let output = capture(|| {
        let family = Family::<u8>::from_texts("Traced", &["On", "Off"]).unwrap();
        assert_eq!(family.find("Off"), Ok(1));
        assert_eq!(family.desc(0), Ok("On"));
    });

    assert_eq!(output.matches("building name table").count(), 1, "{output}");
    assert!(output.contains("entries=2"), "{output}");
}
