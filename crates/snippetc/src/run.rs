use std::path::Path;

use anyhow::{bail, Context, Result};
use snippet::{splice_hook, ManifestError, SnippetFile, SnippetHook};
use tracing_subscriber::EnvFilter;

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn print_hooks() -> Result<()> {
    println!("{:<24} {:>5}  {:<18} stage", "hook", "value", "tier");
    for hook in SnippetHook::ALL {
        println!(
            "{:<24} {:>5}  {:<18} {}",
            hook.name(),
            hook.as_raw(),
            hook.tier().to_string(),
            hook.stage()
        );
        for builtin in hook.builtins() {
            println!(
                "    {:<4} {:<18} {}",
                builtin.glsl_type, builtin.name, builtin.description
            );
        }
    }
    Ok(())
}

pub fn list_snippets(path: &Path, json: bool) -> Result<()> {
    let file = load(path)?;

    if json {
        let rendered = serde_json::to_string_pretty(&file)
            .context("failed to serialize snippet file to JSON")?;
        println!("{rendered}");
        return Ok(());
    }

    let title = file.name.as_deref().unwrap_or("(unnamed)");
    println!("{title}: {} snippet(s)", file.snippets.len());
    for (index, snippet) in file.snippets.iter().enumerate() {
        let sections: Vec<&str> = snippet
            .sections()
            .into_iter()
            .filter_map(|(name, text)| text.map(|_| name))
            .collect();
        println!(
            "  #{index:<3} {:<24} {}",
            snippet.hook().to_string(),
            sections.join(",")
        );
    }
    Ok(())
}

pub fn check_file(path: &Path) -> Result<()> {
    match SnippetFile::load(path) {
        Ok(file) => {
            println!(
                "{}: ok ({} snippet(s))",
                path.display(),
                file.snippets.len()
            );
            Ok(())
        }
        Err(ManifestError::Validation(issues)) => {
            for issue in &issues {
                println!("{}: {issue}", path.display());
            }
            bail!("{} issue(s) found in {}", issues.len(), path.display())
        }
        Err(err) => Err(err).with_context(|| format!("failed to load {}", path.display())),
    }
}

pub fn splice(path: &Path, hook: SnippetHook, default_code: &str) -> Result<()> {
    let list = load(path)?.into_list();
    let spliced = splice_hook(&list, hook, default_code);
    if spliced.snippet_count() == 0 {
        tracing::info!(%hook, "no snippets attached to hook; emitting default code");
    }
    let rendered = spliced.render();
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
    Ok(())
}

fn load(path: &Path) -> Result<SnippetFile> {
    SnippetFile::load(path).with_context(|| format!("failed to load {}", path.display()))
}
