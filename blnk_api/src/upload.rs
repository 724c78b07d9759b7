//! Multipart file uploads. Sent once, without the retry loop.

use std::fmt;
use std::path::PathBuf;

use reqwest::Method;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::{
    errors::truncate_body,
    transport::{MultipartForm, OutboundRequest, RequestBody},
    Client, Error,
};

/// Remote file name used when the source has none.
pub const DEFAULT_FILE_NAME: &str = "upload";

/// Where the uploaded bytes come from.
pub enum FileSource {
    /// A file on disk; its base name becomes the remote file name.
    Path(PathBuf),
    /// Any byte stream; uploaded as [`DEFAULT_FILE_NAME`].
    Reader(Box<dyn AsyncRead + Send + Unpin>),
}

impl FileSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        FileSource::Path(path.into())
    }

    pub fn reader(reader: impl AsyncRead + Send + Unpin + 'static) -> Self {
        FileSource::Reader(Box::new(reader))
    }

    async fn read(self) -> Result<(String, Vec<u8>), Error> {
        match self {
            FileSource::Path(path) => {
                let content = tokio::fs::read(&path).await?;
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
                Ok((name, content))
            }
            FileSource::Reader(mut reader) => {
                let mut content = Vec::new();
                reader.read_to_end(&mut content).await?;
                Ok((DEFAULT_FILE_NAME.to_string(), content))
            }
        }
    }
}

impl fmt::Debug for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            FileSource::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl Client {
    /// POSTs `file` as the multipart part `file_field`, followed by `fields`.
    ///
    /// Returns the raw response body on a 2xx status. Anything else becomes
    /// [`Error::Upload`]; transport failures are returned as-is.
    pub async fn upload(
        &self,
        endpoint: &str,
        file_field: &str,
        file: FileSource,
        fields: &[(&str, &str)],
    ) -> Result<Vec<u8>, Error> {
        let (file_name, content) = file.read().await?;
        let form = MultipartForm {
            file_field: file_field.to_string(),
            file_name,
            content,
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };
        let request = OutboundRequest {
            method: Method::POST,
            url: self.endpoint_url(endpoint)?,
            headers: self.auth_headers()?,
            body: Some(RequestBody::Multipart(form)),
        };

        let resp = self.transport().send(&request).await.map_err(|e| {
            self.logger().error(&format!("Upload failed: {}", e));
            e
        })?;

        if resp.is_success() {
            self.logger().info("Upload successful");
            return Ok(resp.body);
        }

        Err(Error::Upload {
            status: resp.status,
            body: truncate_body(&resp.text()),
        })
    }
}
