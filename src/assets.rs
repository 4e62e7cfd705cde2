use crate::overlay::LoadStatus;
use configurator_core::{default_manifest, load_asset, AssetError, AssetSource, SceneContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fetches assets over HTTP relative to the page.
pub struct FetchAssetSource {
    base_url: String,
}

impl FetchAssetSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl AssetSource for FetchAssetSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        let window = web::window().ok_or_else(|| AssetError::unavailable(path, "no window"))?;
        let resp_value = JsFuture::from(window.fetch_with_str(&self.url_for(path)))
            .await
            .map_err(|e| AssetError::unavailable(path, format!("{:?}", e)))?;
        let resp: web::Response = resp_value
            .dyn_into()
            .map_err(|e| AssetError::unavailable(path, format!("not a Response: {:?}", e)))?;
        if !resp.ok() {
            return Err(AssetError::unavailable(
                path,
                format!("HTTP {} {}", resp.status(), resp.status_text()),
            ));
        }
        let buf_promise = resp
            .array_buffer()
            .map_err(|e| AssetError::unavailable(path, format!("{:?}", e)))?;
        let buf = JsFuture::from(buf_promise)
            .await
            .map_err(|e| AssetError::unavailable(path, format!("{:?}", e)))?;
        Ok(js_sys::Uint8Array::new(&buf).to_vec())
    }
}

/// Start loading every manifest entry. Each asset is attached to the scene
/// as soon as it arrives; failures are recorded for the HUD.
pub fn spawn_asset_loads(
    base_url: &str,
    scene: Rc<RefCell<SceneContext>>,
    status: Rc<RefCell<LoadStatus>>,
) {
    let source = Rc::new(FetchAssetSource::new(base_url));
    let manifest = default_manifest();
    status.borrow_mut().pending += manifest.len();
    for desc in manifest {
        let source = source.clone();
        let scene = scene.clone();
        let status = status.clone();
        spawn_local(async move {
            let result = load_asset(source.as_ref(), &desc).await;
            let mut st = status.borrow_mut();
            st.pending = st.pending.saturating_sub(1);
            match result {
                Ok(asset) => {
                    scene.borrow_mut().attach(asset);
                }
                Err(e) => st.failed.push(e.path().to_string()),
            }
        });
    }
}
