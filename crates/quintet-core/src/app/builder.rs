//! AssemblerBuilder - assembler の構築と起動時検証
//!
//! # Fail-fast 設計
//! - expect_modules() で組み立て予定の module key を登録
//! - build() 時に、各 key の 5 つの役割がすべて解決できるかチェック
//! - 不足があれば BuildError を返す（命名規約のずれを起動時に検出）

use std::sync::Arc;

use super::assembler::ModuleAssembler;
use super::config::AssemblerConfig;
use super::resolver::TypeResolver;
use crate::domain::{BuildError, ComponentKind, Environment, ModuleKey, Namespace};
use crate::impls::FormFactorVariants;
use crate::ports::{TypeLookup, VariantResolver};

/// # 使用例
/// ```ignore
/// let assembler = AssemblerBuilder::new()
///     .namespace("My App")
///     .lookup(Arc::new(registry))
///     .expect_modules(&[ModuleKey::new("login")?])
///     .build()?;
/// ```
pub struct AssemblerBuilder {
    namespace: Namespace,
    lookup: Option<Arc<dyn TypeLookup>>,
    variants: Arc<dyn VariantResolver>,
    expected_modules: Vec<ModuleKey>,
}

impl AssemblerBuilder {
    pub fn new() -> Self {
        Self {
            namespace: Namespace::default(),
            lookup: None,
            variants: Arc::new(FormFactorVariants::default()),
            expected_modules: Vec::new(),
        }
    }

    /// Namespace and variant policy from a config.
    pub fn config(mut self, config: &AssemblerConfig) -> Self {
        self.namespace = config.namespace();
        self.variants = Arc::new(config.variant_resolver());
        self
    }

    pub fn namespace(mut self, identity: impl AsRef<str>) -> Self {
        self.namespace = Namespace::new(identity);
        self
    }

    pub fn lookup(mut self, lookup: Arc<dyn TypeLookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn variants(mut self, variants: Arc<dyn VariantResolver>) -> Self {
        self.variants = variants;
        self
    }

    /// Module keys that must resolve completely at build time.
    pub fn expect_modules(mut self, keys: &[ModuleKey]) -> Self {
        self.expected_modules = keys.to_vec();
        self
    }

    /// # 検証
    /// - lookup が未設定なら BuildError::MissingLookup
    /// - 期待 module の役割が解決できなければ BuildError::IncompleteModules（`"key:Role"` 形式）
    pub fn build(self) -> Result<ModuleAssembler, BuildError> {
        let lookup = self.lookup.ok_or(BuildError::MissingLookup)?;
        let assembler = ModuleAssembler::new(TypeResolver::new(lookup, self.variants, self.namespace));

        let environment = &Environment::default();
        let checked = &assembler;
        let incomplete: Vec<String> = self
            .expected_modules
            .iter()
            .flat_map(|key| {
                ComponentKind::ALL
                    .into_iter()
                    .filter(move |kind| checked.resolve_role(key, *kind, environment).is_err())
                    .map(move |kind| format!("{key}:{}", kind.fragment()))
            })
            .collect();
        if !incomplete.is_empty() {
            return Err(BuildError::IncompleteModules(incomplete));
        }
        Ok(assembler)
    }
}

impl Default for AssemblerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
