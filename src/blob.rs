use js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, Url};

use crate::{
    error::{describe, RenderError},
    panels::ObjectUrls,
};

/// Object URLs backed by in-memory `Blob`s.
pub struct BlobUrls;

impl ObjectUrls for BlobUrls {
    fn create(&mut self, bytes: &[u8], mime: &str) -> Result<String, RenderError> {
        let parts = Array::of1(&Uint8Array::from(bytes));
        let options = BlobPropertyBag::new();
        options.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| RenderError::Blob(describe(&e)))?;
        Url::create_object_url_with_blob(&blob).map_err(|e| RenderError::Blob(describe(&e)))
    }

    fn revoke(&mut self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            web_sys::console::warn_1(&format!("filepeek: revoke {} failed: {}", url, describe(&e)).into());
        }
    }
}
