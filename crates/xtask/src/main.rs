use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Layering check: the domain and shared crates must stay free of
/// transport dependencies.
fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: serde_json::Value =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let packages = metadata["packages"]
        .as_array()
        .context("metadata has no packages")?;

    const FORBIDDEN: &[(&str, &[&str])] = &[
        ("lodestone-domain", &["axum", "reqwest", "tower", "tokio", "dashmap"]),
        ("lodestone-shared", &["axum", "reqwest", "tower", "dashmap"]),
    ];

    let mut violations = Vec::new();
    for (package_name, forbidden) in FORBIDDEN {
        let Some(package) = packages
            .iter()
            .find(|p| p["name"].as_str() == Some(package_name))
        else {
            anyhow::bail!("package {package_name} missing from workspace");
        };
        for dependency in package["dependencies"].as_array().into_iter().flatten() {
            let dep_name = dependency["name"].as_str().unwrap_or_default();
            if forbidden.contains(&dep_name) {
                violations.push(format!("{package_name} depends on {dep_name}"));
            }
        }
    }

    if violations.is_empty() {
        println!("arch-check passed");
        Ok(())
    } else {
        anyhow::bail!("layering violations:\n  {}", violations.join("\n  "))
    }
}
