//! quintet-core
//!
//! Convention-based assembly of five-role modules
//! (view, interactor, presenter, router, display data).
//!
//! # モジュール構成
//! - **domain**: 値型（ComponentKind, ModuleKey, Environment, Edge, errors）
//! - **components**: 役割ごとの capability trait と非所有リンク（Link）
//! - **ports**: 外部サービスの抽象化（TypeLookup, ViewFactory, VariantResolver）
//! - **impls**: ports の実装（TypeRegistry, LayoutCatalog, FormFactorVariants）
//! - **app**: 組み立てロジック（TypeResolver, ModuleAssembler, Module, AssemblerBuilder）
//!
//! # 使用例
//! ```ignore
//! let mut registry = TypeRegistry::new(Namespace::new("My App"));
//! registry.register_module::<LoginInteractor, LoginPresenter, LoginRouter, LoginDisplayData>(&key)?;
//!
//! let assembler = AssemblerBuilder::new()
//!     .namespace("My App")
//!     .lookup(Arc::new(registry))
//!     .expect_modules(&[key.clone()])
//!     .build()?;
//!
//! let module = assembler.assemble(&key, &Environment::large(), &catalog)?;
//! ```

pub mod domain;
pub mod components;
pub mod ports;
pub mod impls;
pub mod app;

#[cfg(test)]
pub(crate) mod testing;

pub use self::app::{AssemblerBuilder, AssemblerConfig, Module, ModuleAssembler, TypeResolver};
pub use self::domain::{AssemblyError, ComponentKind, Environment, FormFactor, ModuleKey};
