//! Writes foreign-language bindings for IDE hosts from `closeguard_core.udl`.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use uniffi_bindgen::bindings::{
    KotlinBindingGenerator, PythonBindingGenerator, SwiftBindingGenerator,
};
use uniffi_bindgen::BindingGenerator;

const CRATE_NAME: &str = "closeguard_core";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Language {
    Swift,
    Kotlin,
    Python,
}

impl Language {
    const fn dir_name(self) -> &'static str {
        match self {
            Self::Swift => "swift",
            Self::Kotlin => "kotlin",
            Self::Python => "python",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "generate_bindings", about = "Generate CloseGuard host bindings")]
struct Args {
    /// Target language.
    #[arg(value_enum, default_value = "swift")]
    language: Language,

    /// Output directory (defaults to <workspace>/bindings/<language>).
    #[arg(long, value_name = "DIR")]
    out_dir: Option<Utf8PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let manifest_dir = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let udl_path = manifest_dir.join("src/closeguard_core.udl");

    let output_dir = match args.out_dir {
        Some(dir) => dir,
        None => manifest_dir
            .parent()
            .context("failed to locate workspace root")?
            .join("bindings")
            .join(args.language.dir_name()),
    };

    std::fs::create_dir_all(output_dir.as_std_path())
        .with_context(|| format!("failed to create {output_dir}"))?;

    match args.language {
        Language::Swift => generate(&udl_path, &output_dir, SwiftBindingGenerator),
        Language::Kotlin => generate(&udl_path, &output_dir, KotlinBindingGenerator),
        Language::Python => generate(&udl_path, &output_dir, PythonBindingGenerator),
    }?;

    println!(
        "Generated {} bindings in {output_dir}",
        args.language.dir_name()
    );
    Ok(())
}

fn generate<G: BindingGenerator>(
    udl_path: &Utf8Path,
    output_dir: &Utf8Path,
    generator: G,
) -> Result<()> {
    uniffi_bindgen::generate_bindings(
        udl_path,
        None,
        generator,
        Some(output_dir),
        None,
        Some(CRATE_NAME),
        true,
    )
    .with_context(|| format!("failed to generate bindings from {udl_path}"))
}
