//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    Settings,
    loader,
};
use crate::catalog::{
    Catalog,
    CatalogError,
};

/// 設定管理を行う
///
/// 設定ファイルの場所をワークスペースのルートとし、カタログの
/// ディレクトリはそこからの相対パスとして解決する。
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: Settings,

    /// ワークスペースのルートパス（設定ファイルのあるディレクトリ）
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: Settings::default(), workspace_root: None }
    }

    /// 設定を読み込む
    ///
    /// `start_dir` から親ディレクトリへ設定ファイルを探す。見つからない場合は
    /// デフォルト設定を使い、`start_dir` をワークスペースのルートとする。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, start_dir: &Path) -> Result<(), ConfigError> {
        let (settings, workspace_root) = match loader::find_config_file(start_dir) {
            Some(config_path) => {
                let root = config_path.parent().unwrap_or(start_dir).to_path_buf();
                (loader::load_settings_file(&config_path)?, root)
            }
            None => (Settings::default(), start_dir.to_path_buf()),
        };

        // バリデーション
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        tracing::debug!(workspace_root = %workspace_root.display(), "Settings loaded successfully");
        self.current_settings = settings;
        self.workspace_root = Some(workspace_root);

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &Settings {
        &self.current_settings
    }

    /// カタログのルートディレクトリを取得
    ///
    /// 設定が未読み込みの場合は相対パスのまま返す
    #[must_use]
    pub fn catalog_root(&self) -> PathBuf {
        let directory = &self.current_settings.catalog.directory;
        self.workspace_root
            .as_ref()
            .map_or_else(|| PathBuf::from(directory), |root| root.join(directory))
    }

    /// 現在の設定に従ってカタログを読み込む
    ///
    /// # Errors
    /// - カタログファイルの読み込み・パースエラー
    /// - 無効なファイルパターン
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::load(&self.catalog_root(), &self.current_settings)
    }
}
