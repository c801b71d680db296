use contracts::domain::a001_catalog::validation::parse_import;
use contracts::domain::a001_catalog::Configuration;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

/// Reads an admin-supplied file and checks it is a usable configuration.
/// Nothing is applied here; the caller decides whether to replace the document.
pub async fn read_configuration_file(file: &File) -> Result<Configuration, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?
        .as_string()
        .ok_or_else(|| "File is not text".to_string())?;

    parse_import(&text).map_err(|e| {
        log::warn!("rejected imported configuration: {}", e);
        format!("Invalid configuration file: {}", e)
    })
}
