use anyhow::Context;
use serde::Deserialize;

/// Package that must stay free of I/O and runtime crates.
const DOMAIN_PACKAGE: &str = "monsterforge-domain";

/// Crates the domain package may never depend on.
const FORBIDDEN_DOMAIN_DEPS: &[&str] = &["reqwest", "axum", "tokio", "rand", "tracing-subscriber"];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let violations = forbidden_deps(&metadata)?;

    if !violations.is_empty() {
        anyhow::bail!(
            "{DOMAIN_PACKAGE} must not depend on: {}",
            violations.join(", ")
        );
    }

    println!("arch-check passed: {DOMAIN_PACKAGE} has no infrastructure dependencies");
    Ok(())
}

/// Normal and build dependencies of the domain package that are forbidden.
/// Dev-dependencies are allowed.
fn forbidden_deps(metadata: &Metadata) -> anyhow::Result<Vec<String>> {
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_PACKAGE)
        .with_context(|| format!("{DOMAIN_PACKAGE} not found in workspace"))?;

    Ok(domain
        .dependencies
        .iter()
        .filter(|d| d.kind.as_deref() != Some("dev"))
        .filter(|d| FORBIDDEN_DOMAIN_DEPS.contains(&d.name.as_str()))
        .map(|d| d.name.clone())
        .collect())
}
