//! Browser transport over `window.fetch`

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::{ApiRequest, ApiResponse, ClientError, Transport};
use crate::config::ApiConfig;

#[derive(Debug, Clone)]
pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = format!("{}{}", self.base_url, request.path);

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_mode(RequestMode::Cors);
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
        if request.body.is_some() {
            js_request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(js_error)?;
        }

        let window = web_sys::window().ok_or_else(|| ClientError::Transport("no window".to_string()))?;
        let value = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(js_error)?;
        let response: Response = value.dyn_into().map_err(js_error)?;
        let status = response.status();

        // Failure bodies are never inspected
        let body = if (200..300).contains(&status) {
            let text = JsFuture::from(response.text().map_err(js_error)?)
                .await
                .map_err(js_error)?;
            text.as_string().unwrap_or_default()
        } else {
            String::new()
        };

        Ok(ApiResponse { status, body })
    }
}

fn js_error(value: JsValue) -> ClientError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", value));
    ClientError::Transport(message)
}
