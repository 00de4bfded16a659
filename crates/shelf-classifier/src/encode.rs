use std::{fmt, io, path::Path};

use azure_openai_ox::ContentPart;
use base64::Engine;

use crate::EncodeError;

/// An image file rendered as inline base64 data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    mime_type: String,
    data: String,
}

impl EncodedImage {
    /// Wrap already encoded base64 data
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Encode raw bytes with the standard base64 alphabet
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self::new(
            mime_type,
            base64::engine::general_purpose::STANDARD.encode(bytes),
        )
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Base64 payload without the `data:` prefix
    pub fn data(&self) -> &str {
        &self.data
    }

    /// `data:<mime-type>;base64,<data>`
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the payload back into the original bytes
    ///
    /// # Errors
    ///
    /// Fails only if the payload was constructed from invalid base64 via [`EncodedImage::new`].
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(&self.data)
    }

    /// Image content part referencing this image inline
    pub fn to_content_part(&self) -> ContentPart {
        ContentPart::image_url(self.data_url())
    }
}

impl fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let truncated_data = match self.data.char_indices().nth(20) {
            Some((end, _)) => format!("{}...", &self.data[..end]),
            None => self.data.clone(),
        };
        write!(f, "Base64 ({}, {})", self.mime_type, truncated_data)
    }
}

/// Read an image file and encode it as inline data.
///
/// The MIME type is guessed from the file extension; unknown or missing
/// extensions fall back to `application/octet-stream`. The whole file is read
/// into memory and nothing is cached between calls.
///
/// # Errors
///
/// [`EncodeError::NotFound`] if `path` does not exist, [`EncodeError::Io`] if
/// it exists but cannot be read.
pub fn encode_image(path: impl AsRef<Path>) -> Result<EncodedImage, EncodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| {
        // A path through a regular file or an unreadable parent reports other
        // kinds, but still names nothing on disk.
        if source.kind() == io::ErrorKind::NotFound || !path.exists() {
            EncodeError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            EncodeError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mime_type = mime_guess::from_path(path).first_or_octet_stream();
    log::debug!(
        "encoded {} as {} ({} bytes)",
        path.display(),
        mime_type,
        bytes.len()
    );

    Ok(EncodedImage::from_bytes(&bytes, mime_type.essence_str()))
}
