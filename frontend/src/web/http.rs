//! 基于 `web_sys::fetch` 的 HTTP 客户端
//!
//! 实现核心库的 [`HttpClient`] trait，凭据请求使用 `credentials: "include"`
//! 以携带会话 cookie。

use async_trait::async_trait;
use js_sys::{Array, Uint8Array};
use moviehub::multipart::{MultipartForm, PartValue};
use moviehub::{ApiError, ApiResult, HttpClient, HttpRequest, HttpResponse, RequestBody};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Headers, Request, RequestCredentials, RequestInit, Response};

fn js_error(context: &str, e: JsValue) -> ApiError {
    ApiError::network(format!("{}: {:?}", context, e))
}

/// 将表单逐项填入 `FormData`，边界和 Content-Type 交给浏览器生成
fn to_form_data(form: &MultipartForm) -> ApiResult<FormData> {
    let data = FormData::new().map_err(|e| js_error("创建 FormData 失败", e))?;

    for part in form.parts() {
        match &part.value {
            PartValue::Text(value) => data.append_with_str(&part.name, value),
            PartValue::File {
                file_name,
                content_type,
                bytes,
            } => {
                let chunks = Array::of1(&Uint8Array::from(bytes.as_slice()));
                let opts = BlobPropertyBag::new();
                opts.set_type(content_type);
                let blob = Blob::new_with_u8_array_sequence_and_options(&chunks, &opts)
                    .map_err(|e| js_error("创建 Blob 失败", e))?;
                data.append_with_blob_and_filename(&part.name, &blob, file_name)
            }
        }
        .map_err(|e| js_error("写入 FormData 失败", e))?;
    }
    Ok(data)
}

/// 浏览器 fetch 客户端
#[derive(Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let headers = Headers::new().map_err(|e| js_error("创建 Headers 失败", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| js_error("设置 Header 失败", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if req.credentials {
            opts.set_credentials(RequestCredentials::Include);
        }

        match &req.body {
            RequestBody::Empty => {}
            RequestBody::Json(body) => opts.set_body(&JsValue::from_str(body)),
            RequestBody::Multipart(form) => opts.set_body(&to_form_data(form)?.into()),
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| js_error("构建请求失败", e))?;

        let window = web_sys::window().ok_or_else(|| ApiError::network("无法获取 window 对象"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("网络错误", e))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ApiError::decode(format!("Response 类型转换失败: {:?}", e)))?;

        let status = response.status();
        let promise = response
            .text()
            .map_err(|e| ApiError::decode(format!("读取响应体失败: {:?}", e)))?;
        let body = JsFuture::from(promise)
            .await
            .map_err(|e| ApiError::decode(format!("读取响应体失败: {:?}", e)))?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
