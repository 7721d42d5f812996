//! App - 組み立てロジック
//!
//! # 主要コンポーネント
//! - **TypeResolver**: module key + 役割 → 具体型（View のみ環境による派生あり）
//! - **ModuleAssembler**: 解決・生成・配線を原子的に行う
//! - **Module**: 配線済みグラフ（差し替え対応）
//! - **AssemblerBuilder**: 構築と起動時検証
//! - **AssemblerConfig**: JSON 設定

pub mod resolver;
pub mod assembler;
pub mod module;
pub mod builder;
pub mod config;

// 主要な型を再エクスポート
pub use self::resolver::TypeResolver;
pub use self::assembler::ModuleAssembler;
pub use self::module::{EdgeReport, Module, ModuleReport, Role};
pub use self::builder::AssemblerBuilder;
pub use self::config::AssemblerConfig;
