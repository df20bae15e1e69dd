use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    domain::ClientError,
    ports::{ContentGateway, RequestOptions, UploadFile, UploadForm},
};

pub const UPLOAD_PATH: &str = "/upload";
pub const UPLOAD_SINGLE_PATH: &str = "/upload/single";
pub const UPLOAD_MULTIPLE_PATH: &str = "/upload/multiple";
pub const UPLOAD_URL_PATH: &str = "/upload/url";

/// Uploaded-file lifecycle. A multi-file upload succeeds or fails as a whole.
pub struct UploadClient {
    gateway: Arc<dyn ContentGateway>,
}

impl UploadClient {
    pub(crate) fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn single(&self, file: UploadFile, folder: &str) -> Result<Value, ClientError> {
        let form = UploadForm {
            field: "file",
            files: vec![file],
            folder: folder.to_string(),
        };
        self.gateway.upload(UPLOAD_SINGLE_PATH, form).await
    }

    pub async fn multiple(&self, files: Vec<UploadFile>, folder: &str) -> Result<Value, ClientError> {
        let form = UploadForm {
            field: "files",
            files,
            folder: folder.to_string(),
        };
        self.gateway.upload(UPLOAD_MULTIPLE_PATH, form).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        let options = RequestOptions::delete().body(json!({ "path": path }));
        self.gateway.request(UPLOAD_PATH, options).await
    }

    /// Looks up the public URL of an uploaded file.
    ///
    /// The path is form-encoded, so spaces go out as `+` rather than `%20`.
    pub async fn url(&self, path: &str) -> Result<Value, ClientError> {
        let query = serde_urlencoded::to_string([("path", path)])
            .map_err(|e| ClientError::validation("upload", e))?;
        let endpoint = format!("{}?{}", UPLOAD_URL_PATH, query);
        self.gateway.request(&endpoint, RequestOptions::get()).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{Call, RecordingGateway};
    use super::*;
    use crate::ports::Method;

    fn uploads(gateway: RecordingGateway) -> (UploadClient, Arc<RecordingGateway>) {
        let gateway = Arc::new(gateway);
        (UploadClient::new(gateway.clone()), gateway)
    }

    #[tokio::test]
    async fn single_uses_file_field() {
        let (client, gateway) = uploads(RecordingGateway::default());
        let file = UploadFile::new("me.png", b"png".to_vec());

        client.single(file.clone(), "hero").await.unwrap();

        assert_eq!(
            gateway.calls(),
            vec![Call::Upload(
                UPLOAD_SINGLE_PATH.into(),
                UploadForm { field: "file", files: vec![file], folder: "hero".into() }
            )]
        );
    }

    #[tokio::test]
    async fn multiple_shares_one_field() {
        let (client, gateway) = uploads(RecordingGateway::default());
        let files = vec![UploadFile::new("a.png", vec![1]), UploadFile::new("b.png", vec![2])];

        client.multiple(files.clone(), "").await.unwrap();

        match &gateway.calls()[0] {
            Call::Upload(endpoint, form) => {
                assert_eq!(endpoint, UPLOAD_MULTIPLE_PATH);
                assert_eq!(form.field, "files");
                assert_eq!(form.files, files);
                assert_eq!(form.folder, "");
            }
            other => panic!("unexpected call: {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_sends_path_in_json_body() {
        let (client, gateway) = uploads(RecordingGateway::default());

        client.delete("projects/shot.png").await.unwrap();

        assert_eq!(
            gateway.calls(),
            vec![Call::Json(
                UPLOAD_PATH.into(),
                RequestOptions::delete().body(json!({"path": "projects/shot.png"}))
            )]
        );
    }

    #[tokio::test]
    async fn url_encodes_path_into_query() {
        let (client, gateway) = uploads(
            RecordingGateway::default().respond(
                Method::Get,
                "/upload/url?path=blog%2Fmy+cover%26v%3D2.png",
                json!({"url": "https://cdn/x"}),
            ),
        );

        let body = client.url("blog/my cover&v=2.png").await.unwrap();

        assert_eq!(body, json!({"url": "https://cdn/x"}));
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn failures_are_all_or_nothing() {
        let (client, _) = uploads(RecordingGateway::default().fail(Method::Post, UPLOAD_MULTIPLE_PATH, 413, None));
        let files = vec![UploadFile::new("a.png", vec![1]), UploadFile::new("b.png", vec![2])];

        let err = client.multiple(files, "gallery").await.unwrap_err();
        assert_eq!(err.status(), Some(413));
    }
}
