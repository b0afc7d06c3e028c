//! Integration tests for kiln-core.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use kiln_core::{
    application::{ApplicationError, EntryKind, RemoteStatus},
    domain::{catalog, render},
    prelude::*,
};

/// Minimal in-test filesystem recording what the exporter does.
#[derive(Clone, Default)]
struct RecordingFs {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    dirs: Vec<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> KilnResult<()> {
        let mut state = self.state.lock().map_err(|_| ApplicationError::StoreLockError)?;
        for ancestor in path.ancestors() {
            if !state.dirs.iter().any(|d| d == ancestor) {
                state.dirs.push(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()> {
        let mut state = self.state.lock().map_err(|_| ApplicationError::StoreLockError)?;
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

impl RecordingFs {
    fn exists(&self, path: &Path) -> bool {
        self.is_dir(path) || self.state.lock().is_ok_and(|s| s.files.contains_key(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.lock().is_ok_and(|s| s.dirs.iter().any(|d| d == path))
    }
}

struct NoArchiver;

impl Archiver for NoArchiver {
    fn archive(&self, _root: &Path, destination: &Path) -> KilnResult<ArchiveSummary> {
        Ok(ArchiveSummary {
            path: destination.to_path_buf(),
            files: 0,
            directories: 0,
        })
    }
}

struct FakeGit;

impl SourceControl for FakeGit {
    fn validate_remote(&self, url: &str) -> KilnResult<()> {
        if url.starts_with("https://") {
            Ok(())
        } else {
            Err(ApplicationError::InvalidRemoteUrl {
                url: url.to_string(),
                reason: "only https in tests".into(),
            }
            .into())
        }
    }

    fn initialize(&self, root: &Path, remote: Option<&str>) -> KilnResult<ScmOutcome> {
        Ok(ScmOutcome::Configured {
            root: root.to_path_buf(),
            created: true,
            remote: if remote.is_some() {
                RemoteStatus::Added
            } else {
                RemoteStatus::NotRequested
            },
        })
    }
}

fn service(fs: &RecordingFs) -> GenerateService {
    GenerateService::new(Box::new(fs.clone()), Box::new(NoArchiver), Box::new(FakeGit))
}

#[test]
fn catalog_is_consistent() {
    catalog::assert_catalog_integrity();
}

#[test]
fn every_reported_path_exists_with_its_kind() {
    let fs = RecordingFs::default();
    let descriptor = ProjectDescriptor::builder("svc")
        .language(Language::Java)
        .language(Language::Kotlin)
        .testing(TestingFramework::JUnit5)
        .logging(LoggingFramework::Logback)
        .license(License::Mit)
        .build()
        .unwrap();

    let outcome = service(&fs)
        .generate(&descriptor, Path::new("/work/svc"), None)
        .unwrap();

    for entry in outcome.report.entries() {
        match entry.kind {
            EntryKind::Directory => assert!(fs.is_dir(&entry.path), "{:?}", entry.path),
            EntryKind::File => {
                assert!(fs.exists(&entry.path) && !fs.is_dir(&entry.path), "{:?}", entry.path)
            }
        }
    }
    assert!(outcome.report.files().any(|f| f == Path::new("/work/svc/src/main/resources/logback.xml")));
    assert!(outcome.report.files().any(|f| f == Path::new("/work/svc/LICENSE")));
}

#[test]
fn export_is_idempotent() {
    let fs = RecordingFs::default();
    let service = service(&fs);
    let descriptor = ProjectDescriptor::builder("svc")
        .language(Language::Scala)
        .build()
        .unwrap();

    let plan = service.render(&descriptor).unwrap();
    let first = service.export(&plan, Path::new("/work/svc")).unwrap();
    let second = service.export(&plan, Path::new("/work/svc")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn written_content_matches_the_plan() {
    let fs = RecordingFs::default();
    let descriptor = ProjectDescriptor::builder("svc")
        .language(Language::Groovy)
        .testing(TestingFramework::Spock)
        .build()
        .unwrap();
    let plan = render(&descriptor).unwrap();
    service(&fs).export(&plan, Path::new("/work/svc")).unwrap();

    let state = fs.state.lock().unwrap();
    for file in plan.files() {
        let written = &state.files[&Path::new("/work/svc").join(&file.path)];
        assert_eq!(written, &file.content);
    }
}

#[test]
fn license_none_writes_no_license_file() {
    let fs = RecordingFs::default();
    let descriptor = ProjectDescriptor::builder("svc")
        .language(Language::Java)
        .build()
        .unwrap();
    let outcome = service(&fs)
        .generate(&descriptor, Path::new("/work/svc"), None)
        .unwrap();
    assert!(!outcome.report.files().any(|f| f.ends_with("LICENSE")));
}

#[test]
fn git_request_adds_gitignore_and_configures_remote() {
    let fs = RecordingFs::default();
    let descriptor = ProjectDescriptor::builder("svc")
        .language(Language::Java)
        .git_init(true)
        .git_repo("https://example.com/repo.git")
        .build()
        .unwrap();
    let outcome = service(&fs)
        .generate(&descriptor, Path::new("/work/svc"), Some(Path::new("/work/svc.zip")))
        .unwrap();

    assert!(fs.exists(Path::new("/work/svc/.gitignore")));
    assert_eq!(
        outcome.source_control,
        ScmOutcome::Configured {
            root: PathBuf::from("/work/svc"),
            created: true,
            remote: RemoteStatus::Added,
        }
    );
    assert_eq!(outcome.archive.unwrap().path, PathBuf::from("/work/svc.zip"));
}

#[test]
fn invalid_name_fails_before_any_write() {
    let fs = RecordingFs::default();
    let descriptor: ProjectDescriptor =
        serde_json::from_str(r#"{"name":"bad name","languages":["java"]}"#).unwrap();

    let err = service(&fs)
        .generate(&descriptor, Path::new("/work/svc"), None)
        .unwrap_err();
    assert!(matches!(err, KilnError::Domain(_)));
    assert!(!fs.exists(Path::new("/work/svc")));
}

#[test]
fn rejected_remote_fails_before_any_write() {
    let fs = RecordingFs::default();
    let descriptor = ProjectDescriptor::builder("svc")
        .language(Language::Java)
        .git_repo("ftp://example.com/repo")
        .build()
        .unwrap();

    let err = service(&fs)
        .generate(&descriptor, Path::new("/work/svc"), None)
        .unwrap_err();
    assert_eq!(err.category(), kiln_core::error::ErrorCategory::Configuration);
    assert!(!fs.exists(Path::new("/work/svc")));
}
