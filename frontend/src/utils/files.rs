use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;

use crate::api::FileUpload;

/// Reads a picked file fully into memory so it can travel in a multipart body.
pub async fn read_upload(file: &web_sys::File) -> Result<FileUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("Failed to read {}", file.name()))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    let content_type = file.type_();
    Ok(FileUpload {
        file_name: file.name(),
        content_type: (!content_type.is_empty()).then_some(content_type),
        bytes,
    })
}

pub fn object_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

pub fn revoke_object_url(url: &str) {
    if url.starts_with("blob:") {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}
