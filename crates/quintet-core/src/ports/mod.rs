//! Ports - 外部コラボレーターの抽象化レイヤー
//!
//! 組み立てコアが依存する外部サービスを trait として定義します。
//! 実装はホストアプリケーション側、または `impls` の開発用実装が提供します。
//!
//! # 含まれる port
//! - **TypeLookup**: 修飾名から型ハンドルを引く（見つからなければ `None`）
//! - **ViewFactory**: 型ハンドルから View を生成（レイアウトリソース経由など）
//! - **VariantResolver**: 環境に応じた View の派生名サフィックスを決定

pub mod type_lookup;
pub mod view_factory;
pub mod variant;

// 主要な trait を再エクスポート
pub use self::type_lookup::{Provides, TypeHandle, TypeLookup};
pub use self::view_factory::{ViewFactory, ViewRequest};
pub use self::variant::VariantResolver;
