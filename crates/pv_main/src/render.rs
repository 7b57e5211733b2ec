use std::path::PathBuf;

use anyhow::Context;
use pv_select::SelectConfig;
use tracing::debug;

/// Renders every list in `files`, separated by a blank line.
pub fn render_files(files: &[PathBuf]) -> anyhow::Result<String> {
    let mut rendered = Vec::new();
    for path in files {
        debug!(path = %path.display(), "Rendering select lists");
        let configs = SelectConfig::load_all(path)
            .with_context(|| format!("Failed to load select lists from {}", path.display()))?;
        rendered.extend(configs.into_iter().map(|config| config.into_select_list().render()));
    }
    Ok(rendered.join("\n\n"))
}
