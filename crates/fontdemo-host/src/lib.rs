// fontdemo-host: run the directory inspector outside Android
//
// Produces exactly the text the app receives from `loadFontsInfo`, or the
// typed outcome as JSON.

use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Inspect `directory` and render it in `format`.
///
/// Inspection failures are part of the output in both formats; only JSON
/// encoding can fail here.
pub fn inspect(directory: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(fontdemo::load_fonts_info(directory)),
        OutputFormat::Json => {
            let inspection = fontdemo_fs::inspect(directory);
            tracing::info!("Inspection of {} finished: {}", directory, inspection.label());
            Ok(serde_json::to_string_pretty(&inspection)?)
        }
    }
}
