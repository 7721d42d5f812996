//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **TypeRegistry**: 起動時に登録する名前 → 型ハンドルの明示的レジストリ（TypeLookup）
//! - **LayoutCatalog**: レイアウトリソースの代用品（ViewFactory）
//! - **FormFactorVariants / NoVariants**: VariantResolver

pub mod registry;
pub mod layout_catalog;
pub mod variants;

// 主要な型を再エクスポート
pub use self::registry::TypeRegistry;
pub use self::layout_catalog::LayoutCatalog;
pub use self::variants::{FormFactorVariants, NoVariants};
