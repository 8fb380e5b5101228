use anyhow::Context;
use std::fs;
use std::path::Path;
use varma_core::AliasRegistry;

/// Write the registry as a JSON table that `AliasRegistry::from_json` reads back.
pub fn write_registry(registry: &AliasRegistry, out: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&registry.to_table())?;
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(out, json).with_context(|| format!("writing registry table {}", out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exported_table_loads_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("tables").join("registry.json");
        let registry = AliasRegistry::builtin().expect("built-in table");

        write_registry(&registry, &out).expect("export");

        let json = fs::read_to_string(&out).expect("read back");
        let reloaded = AliasRegistry::from_json(&json).expect("valid table");
        assert_eq!(reloaded.len(), registry.len());
        assert_eq!(reloaded.to_table(), registry.to_table());
    }
}
