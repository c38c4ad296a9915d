//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use crate::catalog::{
    Catalog,
    TextDomain,
};

/// テスト用の Catalog を作成する
///
/// - `cart`: "Total", "Checkout", 未翻訳扱いの "Same" ("=") と "Blank" ("")
/// - `site/templates/home.php`: "Hello {name}", "Save"（コンテキスト付き）, "Total"
pub(crate) fn sample_catalog() -> Catalog {
    let cart = TextDomain::new("cart");
    let home = TextDomain::new("site/templates/home.php");

    let mut catalog = Catalog::new().with_language("es");
    catalog.insert(cart.clone(), None, "Total", "Total del carrito");
    catalog.insert(cart.clone(), None, "Checkout", "Pagar");
    catalog.insert(cart.clone(), None, "Same", "=");
    catalog.insert(cart, None, "Blank", "");
    catalog.insert(home.clone(), None, "Hello {name}", "Hola {name}");
    catalog.insert(home.clone(), None, "Save", "Guardar");
    catalog.insert(home.clone(), Some("menu"), "Save", "Guardar cambios");
    catalog.insert(home, None, "Total", "Total");
    catalog
}

/// テスト用の翻訳ファイルを書き込む
///
/// # Arguments
/// * `root` - カタログのルートディレクトリ
/// * `relative_path` - ルートからの相対パス（例: "es/cart.json"）
/// * `content` - ファイルの内容
pub(crate) fn write_catalog_file(root: &Path, relative_path: &str, content: &str) {
    let path = root.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
