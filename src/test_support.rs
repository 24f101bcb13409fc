use crate::commands::DEFAULT_TEMPLATE_DIR;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) const VALID_TEMPLATE: &str =
    "---\nname: Bug\nabout: x\ntitle: '[BUG] y'\n---\n## A\n## B\n## C\n- [ ] done\n";

pub(crate) const VALID_CONFIG: &str = "blank_issues_enabled: false\ncontact_links:\n  - name: Chat\n    url: https://chat.example.com\n    about: Ask questions\n";

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Create a repository root with `.github/ISSUE_TEMPLATE` holding `files`.
pub(crate) fn create_template_repo(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let dir = template_dir(temp_dir.path());
    std::fs::create_dir_all(&dir).unwrap();

    for (name, content) in files {
        std::fs::write(dir.join(name), content).unwrap();
    }

    temp_dir
}

pub(crate) fn template_dir(repo_root: &Path) -> PathBuf {
    repo_root.join(DEFAULT_TEMPLATE_DIR)
}
