//! The `folio render` command.

use std::path::{Path, PathBuf};

use folio_render::RenderReport;

use crate::config::FolioConfig;
use crate::{Error, Result};

/// Load the configured catalogue and return the container markup.
///
/// Relative file sources are resolved against `base_dir` (the config
/// file's directory) when given. Catalogue and card failures are part of
/// the markup, not errors.
pub async fn render_to_string(
    config: &FolioConfig,
    base_dir: Option<&Path>,
) -> Result<(String, RenderReport)> {
    let source = folio_client::source_for(&config.source, base_dir)?;
    let mut container = config.container();
    let mut renderer = config.renderer();

    let report = renderer.run(source.as_ref(), &mut container).await;
    log::info!(
        "Rendered {} card(s) with {} warning(s) from {}",
        report.cards,
        report.warnings.len(),
        source.describe()
    );

    Ok((container.to_html(), report))
}

/// Render and write to `output`, or stdout when `None`.
pub async fn cmd_render(
    config: &FolioConfig,
    base_dir: Option<&Path>,
    output: Option<&Path>,
) -> Result<RenderReport> {
    let (html, report) = render_to_string(config, base_dir).await?;

    match output {
        Some(path) => write_output(path, &html)?,
        None => println!("{html}"),
    }

    Ok(report)
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    std::fs::write(path, format!("{html}\n")).map_err(|e| Error::io_with_path(e, path))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Directory of the config file actually in use, if any.
pub fn config_base_dir(config_path: Option<&str>) -> Option<PathBuf> {
    let path = FolioConfig::resolve_config_path(config_path)?;
    if !path.exists() {
        return None;
    }
    path.parent().map(Path::to_path_buf)
}
