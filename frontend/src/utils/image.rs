use base64::{engine::general_purpose::STANDARD, Engine as _};
use wasm_bindgen_futures::JsFuture;

use crate::api::ApiError;

pub const PLACEHOLDER_AVATAR: &str = "/assets/placeholder.png";

/// An uploaded image ready to be embedded in a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub file_name: String,
    pub mime_type: String,
    pub base64: String,
}

impl EncodedImage {
    pub fn from_bytes(file_name: &str, mime_type: &str, bytes: &[u8]) -> Self {
        let mime_type = if mime_type.trim().is_empty() {
            "image/jpeg"
        } else {
            mime_type
        };
        Self {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            base64: STANDARD.encode(bytes),
        }
    }

    pub fn preview_src(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// Wraps stored base64 bytes in a data URL; values that already are data
/// URLs pass through.
pub fn jpeg_data_url(raw: &str) -> String {
    if raw.starts_with("data:") {
        raw.to_string()
    } else {
        format!("data:image/jpeg;base64,{}", raw)
    }
}

pub async fn read_file(file: &web_sys::File) -> Result<EncodedImage, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::unknown("Failed to read the selected image."))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(EncodedImage::from_bytes(
        &file.name(),
        &file.type_(),
        &bytes,
    ))
}
