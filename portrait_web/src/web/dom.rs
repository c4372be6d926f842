use portrait::config::{StageConfig, STAGE_CONFIG_ELEMENT_ID};
use portrait::splash::Viewport;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, Document, HtmlAudioElement, HtmlElement};

use crate::ui_model::document_extent;

pub(super) fn document() -> Result<Document, String> {
    web_sys::window()
        .ok_or("no window".to_string())?
        .document()
        .ok_or("no document".to_string())
}

/// Full document size, the way `$(document).width()/height()` reports it.
pub(super) fn document_viewport() -> Viewport {
    let Ok(document) = document() else {
        return Viewport::new(0.0, 0.0);
    };

    let mut widths = Vec::with_capacity(5);
    let mut heights = Vec::with_capacity(5);

    if let Some(root) = document.document_element() {
        widths.extend([root.scroll_width(), root.client_width()].map(f64::from));
        heights.extend([root.scroll_height(), root.client_height()].map(f64::from));
        if let Some(root) = root.dyn_ref::<HtmlElement>() {
            widths.push(f64::from(root.offset_width()));
            heights.push(f64::from(root.offset_height()));
        }
    }
    if let Some(body) = document.body() {
        widths.extend([body.scroll_width(), body.offset_width()].map(f64::from));
        heights.extend([body.scroll_height(), body.offset_height()].map(f64::from));
    }

    Viewport::new(document_extent(widths), document_extent(heights))
}

/// Stage config embedded by the server. Falls back to defaults when the
/// page carries none.
pub(super) fn read_stage_config(document: &Document) -> Result<StageConfig, String> {
    let Some(el) = document.get_element_by_id(STAGE_CONFIG_ELEMENT_ID) else {
        console::warn_1(
            &format!("#{STAGE_CONFIG_ELEMENT_ID} not found; using default stage config").into(),
        );
        return Ok(StageConfig::default());
    };
    let text = el.text_content().unwrap_or_default();
    serde_json::from_str(&text).map_err(|e| format!("stage config: {e}"))
}

pub(super) fn audio_element(document: &Document, id: &str) -> Result<HtmlAudioElement, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("audio: #{id} not found"))?
        .dyn_into::<HtmlAudioElement>()
        .map_err(|_| format!("audio: #{id} is not an <audio> element"))
}

pub(super) fn query_html_element(
    document: &Document,
    selector: &str,
) -> Result<HtmlElement, String> {
    document
        .query_selector(selector)
        .map_err(|_| format!("document: invalid selector {selector:?}"))?
        .ok_or_else(|| format!("document: {selector} not found"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("document: {selector} is not an HTML element"))
}

/// Loop the track and start it. Browsers may refuse autoplay until the first
/// user gesture; that rejection is logged and otherwise ignored.
pub(super) fn start_looping(audio: &HtmlAudioElement) {
    audio.set_loop(true);
    match audio.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                console::warn_1(&format!("audio: playback rejected: {e:?}").into());
            }
        }),
        Err(e) => console::warn_1(&format!("audio: play() threw: {e:?}").into()),
    }
}
