use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, HtmlInputElement};

/// Encodes an uploaded image as a `data:` URL so it can live inside the document.
pub async fn read_as_data_url(file: &File) -> Result<String, String> {
    let reader = FileReader::new().map_err(|e| format!("Failed to create reader: {:?}", e))?;

    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });

    reader
        .read_as_data_url(file)
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    JsFuture::from(loaded)
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;

    reader
        .result()
        .map_err(|e| format!("Failed to read file: {:?}", e))?
        .as_string()
        .ok_or_else(|| "File could not be encoded".to_string())
}

/// First file chosen in the `<input type="file">` that fired `ev`.
/// The input is cleared so choosing the same file again fires another change.
pub fn take_selected_file(ev: &web_sys::Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let file = input.files()?.get(0);
    input.set_value("");
    file
}
