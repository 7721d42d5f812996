//! Assemble a sample module and print its wiring as JSON.

mod demo;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use quintet_core::{AssemblerBuilder, AssemblerConfig, Environment, ModuleKey};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quintet-cli")]
#[command(version, about = "Assemble a sample module and print its wiring as JSON", long_about = None)]
struct Args {
    /// Module key to assemble (`login` or `profile`)
    #[arg(default_value = "profile")]
    module: ModuleKey,

    /// Assemble for a large form factor (selects view variants)
    #[arg(long)]
    large: bool,

    /// JSON assembler config (namespace, variant_suffix, variant_form_factor)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn environment(&self) -> Environment {
        if self.large {
            Environment::large()
        } else {
            Environment::compact()
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => AssemblerConfig::from_json_file(path)?,
        None => AssemblerConfig {
            namespace: "Quintet Demo".to_string(),
            ..AssemblerConfig::default()
        },
    };

    // (A) 起動時に型を登録し、期待する module がすべて揃っているか検証
    let registry = demo::registry(config.namespace())?;
    let assembler = AssemblerBuilder::new()
        .config(&config)
        .lookup(Arc::new(registry))
        .expect_modules(&[demo::login()?, demo::profile()?])
        .build()?;

    // (B) 組み立て
    let key = &args.module;
    let layouts = demo::layouts();
    let module = assembler
        .assemble(key, &args.environment(), &layouts)
        .with_context(|| format!("assembling module '{key}'"))?;
    info!(module = %key, wired = module.is_fully_wired(), "done");

    // (C) 配線結果を出力
    println!("{}", serde_json::to_string_pretty(&module.report())?);
    Ok(())
}
