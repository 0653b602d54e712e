use crate::constants::{CONFIRMATION_TEXT, JOIN_ENDPOINT};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Result of a join submission. Failure is recorded internally but, by
/// policy, renders exactly like acceptance in the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JoinOutcome {
    Accepted,
    Failed(String),
}

impl JoinOutcome {
    /// The user-visible message is identical for both outcomes.
    pub fn confirmation_text(&self) -> &'static str {
        CONFIRMATION_TEXT
    }
}

/// POST the email to the join endpoint. Never fails outward; transport and
/// status errors collapse into `JoinOutcome::Failed`.
pub async fn submit_email(email: &str) -> JoinOutcome {
    match post_join(email).await {
        Ok(()) => JoinOutcome::Accepted,
        Err(e) => JoinOutcome::Failed(format!("{e:#}")),
    }
}

async fn post_join(email: &str) -> anyhow::Result<()> {
    let payload = js_sys::Object::new();
    js_sys::Reflect::set(
        &payload,
        &JsValue::from_str("email"),
        &JsValue::from_str(email),
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let body = js_sys::JSON::stringify(&payload).map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let headers = web::Headers::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from(body));

    let request = web::Request::new_with_str_and_init(JOIN_ENDPOINT, &init)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!("fetch failed: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if resp.ok() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "join endpoint returned status {}",
            resp.status()
        ))
    }
}
