//! 設定ファイルの探索と読み込み

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    Settings,
};

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".string-tags.json";

/// 設定ファイルを探す
///
/// `start_dir` から親ディレクトリへ順にさかのぼり、最初に見つかった
/// `.string-tags.json` のパスを返す。
///
/// # Arguments
/// * `start_dir` - 探索を開始するディレクトリ
pub(super) fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let found = start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file());

    match &found {
        Some(path) => tracing::debug!(path = %path.display(), "Found configuration file"),
        None => tracing::debug!(
            start_dir = %start_dir.display(),
            "Configuration file not found, using defaults"
        ),
    }
    found
}

/// 設定ファイルを読み込む
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub(super) fn load_settings_file(config_path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(config_path)?;
    let settings: Settings = serde_json::from_str(&content)?;

    tracing::debug!(?settings, "Loaded configuration");
    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// `find_config_file`: 開始ディレクトリにある場合
    #[rstest]
    fn find_config_file_in_start_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();

        let found = find_config_file(temp_dir.path());

        assert_eq!(found, Some(temp_dir.path().join(CONFIG_FILE_NAME)));
    }

    /// `find_config_file`: 親ディレクトリにある場合
    #[rstest]
    fn find_config_file_in_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("site/templates");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();

        let found = find_config_file(&nested);

        assert_eq!(found, Some(temp_dir.path().join(CONFIG_FILE_NAME)));
    }

    /// `find_config_file`: 同名のディレクトリは無視する
    #[rstest]
    fn find_config_file_skips_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("app");
        fs::create_dir_all(nested.join(CONFIG_FILE_NAME)).unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();

        let found = find_config_file(&nested);

        assert_eq!(found, Some(temp_dir.path().join(CONFIG_FILE_NAME)));
    }

    /// `load_settings_file`: 有効な設定
    #[rstest]
    fn load_settings_file_valid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"language": "pt", "tags": {"entityEncode": true}}"#).unwrap();

        let settings = load_settings_file(&path).unwrap();

        assert_that!(settings.language, some(eq("pt")));
        assert_that!(settings.tags.entity_encode, eq(true));
    }

    /// `load_settings_file`: JSON パースエラー
    #[rstest]
    fn load_settings_file_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "invalid json").unwrap();

        let result = load_settings_file(&path);

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    /// `load_settings_file`: ファイルが存在しない場合
    #[rstest]
    fn load_settings_file_missing() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_settings_file(&temp_dir.path().join(CONFIG_FILE_NAME));

        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
