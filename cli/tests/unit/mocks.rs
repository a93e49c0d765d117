//! Shared mock infrastructure for unit tests.
//!
//! Provides an in-memory [`ConfigStore`] so service tests never touch the
//! real filesystem.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use anyhow::Result;
use oh_my_resume_cli::application::ports::ConfigStore;
use oh_my_resume_cli::domain::InstallError;

/// How the mock should behave when asked to create the file.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CreateBehaviour {
    /// Accept the write.
    Write,
    /// Simulate another process creating the file first.
    LoseRace,
    /// Simulate an I/O failure (e.g. disk full).
    Fail,
}

pub struct MemConfigStore {
    path: PathBuf,
    pub dir_exists: Cell<bool>,
    pub dir_fails: bool,
    pub contents: RefCell<Option<String>>,
    pub create_behaviour: CreateBehaviour,
    pub create_calls: Cell<usize>,
}

impl MemConfigStore {
    pub fn empty() -> Self {
        Self {
            path: PathBuf::from("/home/test/.config/opencode/oh-my-resume.json"),
            dir_exists: Cell::new(false),
            dir_fails: false,
            contents: RefCell::new(None),
            create_behaviour: CreateBehaviour::Write,
            create_calls: Cell::new(0),
        }
    }

    pub fn with_existing(contents: &str) -> Self {
        let store = Self::empty();
        store.dir_exists.set(true);
        *store.contents.borrow_mut() = Some(contents.to_string());
        store
    }
}

impl ConfigStore for MemConfigStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> Result<()> {
        if self.dir_fails {
            return Err(InstallError::DirectoryFailed {
                path: self.path.parent().map(Path::to_path_buf).unwrap_or_default(),
                reason: "permission denied".to_string(),
            }
            .into());
        }
        self.dir_exists.set(true);
        Ok(())
    }

    fn exists(&self) -> bool {
        self.contents.borrow().is_some()
    }

    fn create_new(&self, contents: &str) -> Result<bool> {
        self.create_calls.set(self.create_calls.get() + 1);
        assert!(self.dir_exists.get(), "create_new called before ensure_dir");
        match self.create_behaviour {
            CreateBehaviour::Write => {
                *self.contents.borrow_mut() = Some(contents.to_string());
                Ok(true)
            }
            CreateBehaviour::LoseRace => Ok(false),
            CreateBehaviour::Fail => Err(InstallError::WriteFailed {
                path: self.path.clone(),
                reason: "No space left on device".to_string(),
            }
            .into()),
        }
    }
}
