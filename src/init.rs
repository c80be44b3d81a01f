//! Site initialization module.
//!
//! Creates new site structure with default configuration, a starter
//! profile and a sample article.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Default config filename
const CONFIG_FILE: &str = "folio.toml";

/// Default site directory structure
const SITE_DIRS: &[&str] = &[
    "content/articles/getting-started",
    "assets/images",
    "assets/styles",
];

/// Starter files: (relative path, embedded content)
const SITE_FILES: &[(&str, &str)] = &[
    ("site.toml", include_str!("embed/site.toml")),
    ("assets/styles/main.css", include_str!("embed/main.css")),
    (
        "content/articles/getting-started/01-hello-world.md",
        include_str!("embed/sample-article.md"),
    ),
];

/// Create a new site with default structure
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `folio init <SITE_NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(root)?;
    init_site_files(root)?;
    init_default_config(root)?;
    init_ignored_files(root, &["public"])?;

    log!("init"; "site created at {}", root.display());
    log!("init"; "next: edit site.toml, then run `folio serve`");
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `folio init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Write the starter profile, stylesheet and sample article
fn init_site_files(root: &Path) -> Result<()> {
    for (rel, content) in SITE_FILES {
        let path = root.join(rel);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

/// Initialize .gitignore and .ignore files with specified paths
fn init_ignored_files(root: &Path, paths: &[&str]) -> Result<()> {
    let content = paths.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}
