use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;
use crate::config::SamplerKind;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/h5lint")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let config = loader.load().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new().with_file(
        "/project/.h5lint.toml",
        "[scan]\nhuge_attribute_bytes = 64\n",
    );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.scan.huge_attribute_bytes, 64);
    assert_eq!(config.scan.tiny_chunk_elements, 8);
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/h5lint/config.toml",
        "[report]\nsoft_fail = true\n",
    );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!(config.report.soft_fail);
}

#[test]
fn local_config_takes_precedence_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.h5lint.toml", "[scan]\nsampler = \"parallel\"\n")
        .with_file(
            "/home/user/.config/h5lint/config.toml",
            "[scan]\nsampler = \"scalar\"\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.scan.sampler, SamplerKind::Parallel);
}

#[test]
fn missing_config_dir_falls_back_to_default() {
    let fs = MockFileSystem::new().with_config_dir(None);

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_from_path_reports_unreadable_file() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader
        .load_from_path(Path::new("/nowhere/h5lint.toml"))
        .unwrap_err();

    assert!(matches!(err, H5LintError::FileAccess { .. }));
}

#[test]
fn load_from_path_rejects_invalid_toml() {
    let fs = MockFileSystem::new().with_file("/project/bad.toml", "[scan\n");
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader.load_from_path(Path::new("/project/bad.toml")).unwrap_err();

    assert!(matches!(err, H5LintError::TomlParse(_)));
}

#[test]
fn load_from_path_rejects_zero_limits() {
    let fs = MockFileSystem::new().with_file(
        "/project/zero.toml",
        "[scan]\nnumeric_sample_limit = 0\n",
    );
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader.load_from_path(Path::new("/project/zero.toml")).unwrap_err();

    assert!(matches!(err, H5LintError::Config(_)));
    assert!(err.to_string().contains("scan.numeric_sample_limit"));
}
