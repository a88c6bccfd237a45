//! HTTP service for uploading ASD/CSV files to the conversion server

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::state::NamedFile;
use crate::types::{AppError, AppResult, OutputInfo, ServerReply, UploadReply};
use crate::OUTPUT_INFO_ENDPOINT;

/// The server the UI talks to.
///
/// Futures are polled on the single browser thread, hence no `Send` bounds.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// File handle type accepted by [`Backend::post_files`].
    type File: NamedFile + Clone;

    /// POST `files` as a multipart form, one `field_name` entry per file.
    ///
    /// Only transport failures are errors; a non-2xx status comes back as an
    /// [`UploadReply`] with `ok == false`.
    async fn post_files(&self, endpoint: &str, field_name: &str, files: &[Self::File]) -> AppResult<UploadReply>;

    /// GET the server's output folder.
    async fn fetch_output_info(&self) -> AppResult<OutputInfo>;
}

/// [`Backend`] over `fetch`, via gloo-net.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Backend for HttpBackend {
    type File = File;

    async fn post_files(&self, endpoint: &str, field_name: &str, files: &[File]) -> AppResult<UploadReply> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Request(format!("Failed to create FormData: {:?}", e)))?;

        for file in files {
            form_data
                .append_with_blob(field_name, file)
                .map_err(|e| AppError::Request(format!("Failed to append {}: {:?}", file.name(), e)))?;
        }

        let url = self.url(endpoint);
        let request = Request::post(&url)
            .body(form_data)
            .map_err(|e| AppError::Request(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("POST {} failed: {}", url, e)))?;

        // Proxy error pages and empty 500s carry no fields
        let body = match response.text().await {
            Ok(text) => ServerReply::parse(&text),
            Err(e) => {
                log::debug!("Unreadable reply from {}: {}", url, e);
                ServerReply::default()
            }
        };

        Ok(UploadReply {
            ok: response.ok(),
            status: response.status(),
            body,
        })
    }

    async fn fetch_output_info(&self) -> AppResult<OutputInfo> {
        let url = self.url(OUTPUT_INFO_ENDPOINT);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("GET {} failed: {}", url, e)))?;

        response
            .json::<OutputInfo>()
            .await
            .map_err(|e| AppError::Decode(format!("Failed to parse output info: {}", e)))
    }
}
