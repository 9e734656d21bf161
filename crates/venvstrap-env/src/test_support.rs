//! Fake `python3` and `with_venv.sh` for exercising the bootstrap without
//! a real interpreter.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::layout::VenvLayout;

/// `python3 -m venv <name>`: creates `<name>/bin` and counts invocations.
pub const FAKE_PYTHON: &str = r#"#!/bin/sh
[ "$1" = "-m" ] && [ "$2" = "venv" ] || exit 2
mkdir -p "$3/bin" || exit 1
echo venv >> "$3/created"
"#;

/// `python3` that always fails, like a broken interpreter.
pub const FAILING_PYTHON: &str = "#!/bin/sh\necho 'no interpreter' >&2\nexit 1\n";

/// `with_venv.sh <name> pip install -r <file>`: fails when the venv or the
/// manifest is missing, otherwise copies the manifest into `<name>/installed`.
pub const FAKE_WITH_VENV: &str = r#"#!/bin/sh
name="$1"
shift
[ -d "$name/bin" ] || exit 1
[ "$1" = "pip" ] && [ "$2" = "install" ] || exit 2
if [ "$3" = "-r" ]; then
    [ -f "$4" ] || exit 1
    cat "$4" >> "$name/installed"
else
    shift 2
    echo "$@" >> "$name/installed"
fi
"#;

pub fn write_script(path: &Path, body: &str) {
    std::fs::write(path, body).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// `<root>/tests/{python3,with_venv.sh,requirements.pip}` wired into a layout.
pub struct Project {
    _root: tempfile::TempDir,
    pub layout: VenvLayout,
}

impl Project {
    pub fn new(python: &str, requirements: Option<&str>) -> Self {
        let root = tempfile::tempdir().unwrap();
        let tests = root.path().join("tests");
        std::fs::create_dir(&tests).unwrap();
        let python_path = tests.join("python3");
        write_script(&python_path, python);
        write_script(&tests.join("with_venv.sh"), FAKE_WITH_VENV);
        if let Some(req) = requirements {
            std::fs::write(tests.join("requirements.pip"), req).unwrap();
        }
        let layout = VenvLayout::new(tests, ".venv", python_path.to_string_lossy());
        Self { _root: root, layout }
    }

    pub fn venv_file(&self, name: &str) -> PathBuf {
        self.layout.venv_dir().join(name)
    }
}
