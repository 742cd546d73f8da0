//! Golden-file fixtures for merge scenarios
//!
//! Each directory under `tests/fixtures/scenarios/` holds an `origin.yaml`,
//! an `override.yaml` and the `expected.yaml` the merge must produce.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Path to the scenario fixtures
pub fn scenarios_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scenarios")
}

/// One merge scenario on disk
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub origin: PathBuf,
    pub overlay: PathBuf,
    pub expected: PathBuf,
}

impl Scenario {
    /// Expected merged output
    pub fn expected_output(&self) -> io::Result<String> {
        fs::read_to_string(&self.expected)
    }
}

/// Load a single scenario by directory name
pub fn scenario(name: &str) -> Scenario {
    let dir = scenarios_path().join(name);
    Scenario {
        name: name.to_string(),
        origin: dir.join("origin.yaml"),
        overlay: dir.join("override.yaml"),
        expected: dir.join("expected.yaml"),
    }
}

/// All scenarios, sorted by name
pub fn load_scenarios() -> io::Result<Vec<Scenario>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(scenarios_path())? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names.iter().map(|name| scenario(name)).collect())
}
