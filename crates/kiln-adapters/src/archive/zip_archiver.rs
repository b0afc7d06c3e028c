//! Zip archive adapter built on `walkdir` and `zip`.

use std::fs::File;
use std::io;
use std::path::{Component, Path, PathBuf};

use ::zip::{CompressionMethod, ZipWriter, result::ZipError, write::SimpleFileOptions};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use kiln_core::{
    application::{ApplicationError, ArchiveSummary, ports::Archiver},
    error::{KilnError, KilnResult},
};

use crate::filesystem::map_io_error;

/// Writes a deflate-compressed zip of a directory tree.
///
/// Members are named relative to the root with `/` separators and appear in
/// byte order of those names, so `a-b` precedes `a/`. Empty directories are kept as directory entries. No
/// timestamps are recorded, so the same tree always yields the same bytes.
#[derive(Debug, Clone, Copy)]
pub struct ZipArchiver {
    compression: CompressionMethod,
}

impl ZipArchiver {
    pub fn new() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }

    /// Store members uncompressed.
    pub fn stored() -> Self {
        Self {
            compression: CompressionMethod::Stored,
        }
    }
}

impl Default for ZipArchiver {
    fn default() -> Self {
        Self::new()
    }
}

impl Archiver for ZipArchiver {
    #[instrument(skip_all, fields(root = %root.display(), destination = %destination.display()))]
    fn archive(&self, root: &Path, destination: &Path) -> KilnResult<ArchiveSummary> {
        if !root.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: root.to_path_buf(),
                reason: "Archive root is not a directory".into(),
            }
            .into());
        }

        let file = File::create(destination).map_err(|e| archive_failed(destination, e))?;
        let destination_canonical = destination
            .canonicalize()
            .map_err(|e| archive_failed(destination, e))?;

        let mut zip = ZipWriter::new(file);
        let file_options = SimpleFileOptions::default()
            .compression_method(self.compression)
            .unix_permissions(0o644);
        let dir_options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Stored)
            .unix_permissions(0o755);

        let mut summary = ArchiveSummary {
            path: destination.to_path_buf(),
            files: 0,
            directories: 0,
        };

        for member in collect_members(root, &destination_canonical)? {
            let path = member.path.as_path();
            if member.is_dir {
                zip.add_directory(member.name, dir_options)
                    .map_err(|e| zip_failed(destination, e))?;
                summary.directories += 1;
            } else {
                zip.start_file(member.name, file_options)
                    .map_err(|e| zip_failed(destination, e))?;
                let mut source = File::open(path).map_err(|e| map_io_error(path, e, "read file"))?;
                io::copy(&mut source, &mut zip).map_err(|e| archive_failed(destination, e))?;
                summary.files += 1;
            }
        }

        zip.finish().map_err(|e| zip_failed(destination, e))?;
        debug!(
            files = summary.files,
            directories = summary.directories,
            "Zip archive finished"
        );
        Ok(summary)
    }
}

struct Member {
    /// Zip entry name; directories end in `/`.
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Every entry under `root` except the archive itself, sorted by member name.
fn collect_members(root: &Path, destination: &Path) -> KilnResult<Vec<Member>> {
    let mut members = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            map_io_error(&path, io::Error::from(e), "walk directory")
        })?;
        let path = entry.path();
        let file_type = entry.file_type();

        if file_type.is_dir() {
            members.push(Member {
                name: format!("{}/", member_name(root, path)?),
                path: path.to_path_buf(),
                is_dir: true,
            });
        } else if file_type.is_file() {
            if is_destination(path, destination) {
                debug!(path = %path.display(), "Skipping the archive itself");
                continue;
            }
            members.push(Member {
                name: member_name(root, path)?,
                path: path.to_path_buf(),
                is_dir: false,
            });
        } else {
            warn!(path = %path.display(), "Skipping entry that is neither file nor directory");
        }
    }
    members.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(members)
}

/// `a/b/c` for `<root>/a/b/c`, independent of the platform separator.
fn member_name(root: &Path, path: &Path) -> KilnResult<String> {
    let relative = path.strip_prefix(root).map_err(|_| KilnError::Internal {
        message: format!("{} is outside {}", path.display(), root.display()),
    })?;

    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    Ok(parts.join("/"))
}

fn is_destination(path: &Path, destination: &Path) -> bool {
    path.file_name() == destination.file_name()
        && path.canonicalize().is_ok_and(|p| p == destination)
}

fn archive_failed(destination: &Path, e: io::Error) -> KilnError {
    ApplicationError::ArchiveFailed {
        path: destination.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn zip_failed(destination: &Path, e: ZipError) -> KilnError {
    ApplicationError::ArchiveFailed {
        path: PathBuf::from(destination),
        reason: e.to_string(),
    }
    .into()
}
