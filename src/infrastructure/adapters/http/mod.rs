use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::{
    domain::{ClientError, GENERIC_API_FAILURE, GENERIC_UPLOAD_FAILURE},
    infrastructure::config::ClientConfig,
    ports::{ContentGateway, Method, RequestOptions, UploadForm},
};

/// reqwest-backed gateway to the content API.
pub struct HttpGateway {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpGateway {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ClientError::transport(config.base_url.as_str(), e))?;

        Ok(Self { client, config })
    }

    fn json_headers(endpoint: &str, extra: &[(String, String)]) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::transport(endpoint, e))?;
            let value = HeaderValue::from_str(value).map_err(|e| ClientError::transport(endpoint, e))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    fn upload_form(form: UploadForm) -> Result<Form, reqwest::Error> {
        let mut multipart = Form::new();
        for file in form.files {
            let mut part = Part::bytes(file.bytes).file_name(file.file_name);
            if let Some(mime) = &file.mime {
                part = part.mime_str(mime)?;
            }
            multipart = multipart.part(form.field, part);
        }
        Ok(multipart.text("folder", form.folder))
    }

    /// Shared response shaping for JSON and multipart calls; only the
    /// fallback message differs.
    async fn read_json(
        endpoint: &str,
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<Value, ClientError> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::transport(endpoint, e))?;

        if !status.is_success() {
            let body = serde_json::from_slice::<Value>(&bytes).ok();
            return Err(ClientError::api(endpoint, status.as_u16(), body, fallback));
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::transport(endpoint, e))
    }

    async fn send_json(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ClientError> {
        let url = self.config.url_for(endpoint);
        let headers = Self::json_headers(endpoint, &options.headers)?;

        let mut request = self
            .client
            .request(to_reqwest(options.method), &url)
            .headers(headers);

        if let Some(body) = &options.body {
            let payload = serde_json::to_vec(body).map_err(|e| ClientError::transport(endpoint, e))?;
            request = request.body(payload);
        }

        tracing::debug!("{} {}", options.method.as_str(), url);

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::transport(endpoint, e))?;

        Self::read_json(endpoint, response, GENERIC_API_FAILURE).await
    }

    async fn send_multipart(&self, endpoint: &str, form: UploadForm) -> Result<Value, ClientError> {
        let url = self.config.url_for(endpoint);
        let files = form.files.len();
        let multipart = Self::upload_form(form).map_err(|e| ClientError::transport(endpoint, e))?;

        tracing::debug!("POST {} ({} file(s))", url, files);

        let response = self
            .client
            .post(&url)
            .multipart(multipart)
            .send()
            .await
            .map_err(|e| ClientError::transport(endpoint, e))?;

        Self::read_json(endpoint, response, GENERIC_UPLOAD_FAILURE).await
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Put => reqwest::Method::PUT,
        Method::Post => reqwest::Method::POST,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn logged(endpoint: &str, result: Result<Value, ClientError>) -> Result<Value, ClientError> {
    if let Err(e) = &result {
        tracing::error!("API Error ({}): {}", endpoint, e);
    }
    result
}

#[async_trait]
impl ContentGateway for HttpGateway {
    async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ClientError> {
        logged(endpoint, self.send_json(endpoint, options).await)
    }

    async fn upload(&self, endpoint: &str, form: UploadForm) -> Result<Value, ClientError> {
        logged(endpoint, self.send_multipart(endpoint, form).await)
    }

    fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_headers_default_and_override() {
        let headers = HttpGateway::json_headers("/hero", &[]).unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/json");

        let extra = vec![
            ("Content-Type".to_string(), "application/merge-patch+json".to_string()),
            ("X-Trace".to_string(), "abc".to_string()),
        ];
        let headers = HttpGateway::json_headers("/hero", &extra).unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/merge-patch+json");
        assert_eq!(headers["x-trace"], "abc");
    }

    #[test]
    fn invalid_header_is_a_transport_error() {
        let extra = vec![("bad header".to_string(), "x".to_string())];
        let err = HttpGateway::json_headers("/hero", &extra).unwrap_err();
        assert!(matches!(err, ClientError::Transport { .. }));
    }

    #[test]
    fn gateway_uses_configured_base() {
        let gateway = HttpGateway::new(ClientConfig::default()).unwrap();
        assert_eq!(gateway.base_url(), "http://localhost:5000/api");
    }
}
