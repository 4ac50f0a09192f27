// fontdemo-fs: Directory inspection for the fontdemo Android library
//
// Lists the immediate children of a directory and renders the text report
// shown by the app. Reads go through the `Filesystem` trait so failures can be
// injected in tests; `LocalFs` is the std-backed implementation.

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// What sits at the inspected path, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    NotDirectory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    File,
    Directory,
    Other,
}

/// One raw directory child as returned by [`Filesystem::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub name: String,
    pub path: PathBuf,
    pub kind: ChildKind,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "type", content = "size", rename_all = "snake_case")]
pub enum EntryKind {
    File(u64),
    FileSizeUnreadable,
    Directory,
    Other,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntryLine {
    pub name: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DirectoryReport {
    pub directory: String,
    /// Native enumeration order, never sorted.
    pub entries: Vec<EntryLine>,
}

/// Outcome of one inspection. Rendered to text only at the boundary.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Inspection {
    Listed(DirectoryReport),
    NotFound {
        directory: String,
    },
    NotADirectory {
        directory: String,
    },
    Failed {
        #[serde(serialize_with = "serialize_error")]
        error: anyhow::Error,
    },
}

fn serialize_error<S: Serializer>(
    error: &anyhow::Error,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{error:#}"))
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

pub trait Filesystem: Send + Sync {
    /// `Ok(None)` when nothing exists at `path`. Follows symlinks.
    fn probe(&self, path: &Path) -> Result<Option<PathKind>>;
    /// Immediate children of `path`, in the order the OS yields them.
    fn list(&self, path: &Path) -> Result<Vec<Child>>;
    fn file_size(&self, path: &Path) -> Result<u64>;
}

// ---------------------------------------------------------------------------
// Local implementation
// ---------------------------------------------------------------------------

pub struct LocalFs;

impl LocalFs {
    fn classify(entry: &std::fs::DirEntry) -> Result<ChildKind> {
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to read file type of {}", entry.path().display()))?;

        // Symlinks are reported as whatever they point at; dangling ones are "other".
        let file_type = if file_type.is_symlink() {
            match std::fs::metadata(entry.path()) {
                Ok(meta) => meta.file_type(),
                Err(_) => return Ok(ChildKind::Other),
            }
        } else {
            file_type
        };

        Ok(if file_type.is_file() {
            ChildKind::File
        } else if file_type.is_dir() {
            ChildKind::Directory
        } else {
            ChildKind::Other
        })
    }
}

impl Filesystem for LocalFs {
    fn probe(&self, path: &Path) -> Result<Option<PathKind>> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Some(PathKind::Directory)),
            Ok(_) => Ok(Some(PathKind::NotDirectory)),
            // A path component that is a regular file means the path cannot exist.
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to stat {}", path.display())),
        }
    }

    fn list(&self, path: &Path) -> Result<Vec<Child>> {
        let read_dir = std::fs::read_dir(path)
            .with_context(|| format!("failed to read directory {}", path.display()))?;

        let mut children = Vec::new();
        for entry in read_dir {
            let entry =
                entry.with_context(|| format!("failed to iterate directory {}", path.display()))?;
            children.push(Child {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind: Self::classify(&entry)?,
                path: entry.path(),
            });
        }
        Ok(children)
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        let meta = std::fs::metadata(path)
            .with_context(|| format!("failed to read size of {}", path.display()))?;
        Ok(meta.len())
    }
}

// ---------------------------------------------------------------------------
// Inspection
// ---------------------------------------------------------------------------

/// Inspect `directory` on the local filesystem.
pub fn inspect(directory: &str) -> Inspection {
    inspect_dir(&LocalFs, directory)
}

/// Inspect `directory` through `fs`. Never fails: every failure is an
/// [`Inspection`] variant, except unreadable file sizes which stay inline as
/// [`EntryKind::FileSizeUnreadable`].
pub fn inspect_dir(fs: &dyn Filesystem, directory: &str) -> Inspection {
    let path = Path::new(directory);

    match fs.probe(path) {
        Ok(Some(PathKind::Directory)) => {}
        Ok(Some(PathKind::NotDirectory)) => {
            return Inspection::NotADirectory {
                directory: directory.to_string(),
            };
        }
        Ok(None) => {
            return Inspection::NotFound {
                directory: directory.to_string(),
            };
        }
        Err(error) => {
            log::error!("Cannot access {}: {:#}", directory, error);
            return Inspection::Failed { error };
        }
    }

    let children = match fs.list(path) {
        Ok(children) => children,
        Err(error) => {
            log::error!("Cannot list {}: {:#}", directory, error);
            return Inspection::Failed { error };
        }
    };

    let entries: Vec<EntryLine> = children.into_iter().map(|child| describe(fs, child)).collect();
    log::debug!("Listed {} entries in {}", entries.len(), directory);

    Inspection::Listed(DirectoryReport {
        directory: directory.to_string(),
        entries,
    })
}

fn describe(fs: &dyn Filesystem, child: Child) -> EntryLine {
    let kind = match child.kind {
        ChildKind::File => match fs.file_size(&child.path) {
            Ok(size) => EntryKind::File(size),
            Err(e) => {
                log::warn!("{:#}", e);
                EntryKind::FileSizeUnreadable
            }
        },
        ChildKind::Directory => EntryKind::Directory,
        ChildKind::Other => EntryKind::Other,
    };
    log::debug!("  {} ({:?})", child.name, kind);
    EntryLine {
        name: child.name,
        kind,
    }
}

impl Inspection {
    /// Short outcome name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Inspection::Listed(report) if report.entries.is_empty() => "empty",
            Inspection::Listed(_) => "listed",
            Inspection::NotFound { .. } => "not_found",
            Inspection::NotADirectory { .. } => "not_a_directory",
            Inspection::Failed { .. } => "failed",
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

impl fmt::Display for EntryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EntryKind::File(size) => write!(f, "{} -> {} Bytes", self.name, size),
            EntryKind::FileSizeUnreadable => write!(f, "{} -> 无法读取文件大小", self.name),
            EntryKind::Directory => write!(f, "{} -> [目录]", self.name),
            EntryKind::Other => write!(f, "{} -> [其他类型]", self.name),
        }
    }
}

impl fmt::Display for DirectoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "目录 '{}' 中没有找到任何文件", self.directory);
        }

        write!(f, "目录: {}\n找到 {} 个项目:\n\n", self.directory, self.entries.len())?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inspection::Listed(report) => fmt::Display::fmt(report, f),
            Inspection::NotFound { directory } => write!(f, "错误: 目录 '{directory}' 不存在"),
            Inspection::NotADirectory { directory } => {
                write!(f, "错误: '{directory}' 不是一个目录")
            }
            Inspection::Failed { error } => write!(f, "访问目录时发生错误: {error:#}"),
        }
    }
}
