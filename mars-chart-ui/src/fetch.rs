//! Browser-side request for the weather feed via `window.fetch`.

use mars_atmo::error::DataUnavailable;
use mars_atmo::feed::FeedConfig;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn request_error(e: JsValue) -> DataUnavailable {
    DataUnavailable::Request(format!("{:?}", e))
}

/// Fetch the raw feed body. One attempt; any failure is `DataUnavailable`.
pub async fn fetch_feed(config: &FeedConfig) -> Result<String, DataUnavailable> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&config.url(), &opts).map_err(request_error)?;
    let window = web_sys::window()
        .ok_or_else(|| DataUnavailable::Request("no window object".to_string()))?;

    log::info!("Requesting Mars weather feed from {}", config.endpoint);
    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(request_error)?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| DataUnavailable::Request("fetch did not return a Response".to_string()))?;

    if !response.ok() {
        return Err(DataUnavailable::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(request_error)?)
        .await
        .map_err(request_error)?;
    body.as_string()
        .ok_or_else(|| DataUnavailable::Json("response body is not text".to_string()))
}
