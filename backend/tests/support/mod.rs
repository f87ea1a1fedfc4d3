#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::sync::Mutex;

use tempfile::NamedTempFile;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// A small Play Store export: extra columns, a shifted row, quoting, one row
/// without reviews and one with an unusable rating.
pub const RAW_FIXTURE: &str = "\
App,Category,Rating,Reviews,Installs
Photo Editor,ART_AND_DESIGN,4.1,159,\"10,000+\"
Coloring book moana,ART_AND_DESIGN,3.9,967,\"500,000+\"
X,TOOLS,4.5,,100+
Sketch,ART_AND_DESIGN,NaN,215644,\"50,000,000+\"
Y,TOOLS,3,100,\"1,000+\"
Frame,,19,3.0M,Free
Zero,TOOLS,0,0,0
Ghost,TOOLS,0,50,10+
";

/// What the cleaner writes for [`RAW_FIXTURE`].
pub const CLEANED_FIXTURE: &str = "\
App,Reviews,Rating,Sentiment
Photo Editor,159,4.1,Positive
Coloring book moana,967,3.9,Negative
Y,100,3.0,Neutral
Frame,3.0M,19.0,Positive
Zero,0,0.0,Negative
Ghost,50,0.0,Negative
";

/// Write `contents` to a fresh temporary file.
pub fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file.flush().expect("flush fixture");
    file
}

/// The derived table of [`CLEANED_FIXTURE`].
pub fn fixture_table() -> app_insights::models::AppTable {
    app_insights::io::parse_app_table(CLEANED_FIXTURE.as_bytes()).expect("parse fixture")
}

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
