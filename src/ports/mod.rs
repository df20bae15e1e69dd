use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

use crate::domain::ClientError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Put,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// Per-call overrides for a JSON request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn put(body: Value) -> Self {
        Self::default().method(Method::Put).body(body)
    }

    pub fn post(body: Value) -> Self {
        Self::default().method(Method::Post).body(body)
    }

    pub fn delete() -> Self {
        Self::default().method(Method::Delete)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::new(file_name, bytes))
    }
}

/// Multipart payload: every file goes under `field`, plus a `folder` text part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    pub field: &'static str,
    pub files: Vec<UploadFile>,
    pub folder: String,
}

/// Transport boundary for the content client.
///
/// `request` speaks JSON; `upload` speaks multipart and must not force a
/// JSON content type.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ClientError>;

    async fn upload(&self, endpoint: &str, form: UploadForm) -> Result<Value, ClientError>;

    fn base_url(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[tokio::test]
    async fn upload_file_reads_name_and_bytes_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"fake png").unwrap();

        let upload = UploadFile::from_path(file.path()).await.unwrap();

        assert!(upload.file_name.ends_with(".png"));
        assert_eq!(upload.bytes, b"fake png");
        assert_eq!(upload.mime, None);
    }

    #[tokio::test]
    async fn missing_upload_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(UploadFile::from_path(dir.path().join("gone.png")).await.is_err());
    }

    #[test]
    fn request_options_builders() {
        let options = RequestOptions::put(json!({"a": 1})).header("X-Trace", "1");
        assert_eq!(options.method, Method::Put);
        assert_eq!(options.body, Some(json!({"a": 1})));
        assert_eq!(options.headers, vec![("X-Trace".to_string(), "1".to_string())]);
        assert_eq!(RequestOptions::get().method, Method::Get);
    }
}
