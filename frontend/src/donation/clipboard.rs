//! Copies text with the async Clipboard API, falling back to a hidden
//! `<textarea>` and `execCommand("copy")` where that API is missing or
//! refuses (plain-HTTP LAN access from a phone, mostly).

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Reflect;
use web_sys::{window, Clipboard, HtmlDocument, HtmlElement, HtmlTextAreaElement};

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard API is not available in this context")]
    Unavailable,
    #[error("clipboard write was rejected: {0}")]
    WriteRejected(String),
    #[error("no document to run the fallback copy in")]
    NoDocument,
    #[error("fallback copy failed: {0}")]
    FallbackFailed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyPath {
    ClipboardApi,
    Fallback,
}

pub async fn copy_text(text: &str) -> Result<CopyPath, ClipboardError> {
    match write_with_clipboard_api(text).await {
        Ok(()) => Ok(CopyPath::ClipboardApi),
        Err(ClipboardError::Unavailable) => {
            debug!("Clipboard API unavailable, using selection copy");
            copy_with_selection(text)?;
            Ok(CopyPath::Fallback)
        }
        Err(err) => {
            warn!("{}, using selection copy", err);
            copy_with_selection(text)?;
            Ok(CopyPath::Fallback)
        }
    }
}

async fn write_with_clipboard_api(text: &str) -> Result<(), ClipboardError> {
    let navigator = window().ok_or(ClipboardError::Unavailable)?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }

    let clipboard: Clipboard = clipboard.unchecked_into();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|err| ClipboardError::WriteRejected(describe(&err)))?;
    Ok(())
}

/// Keeps the temporary textarea in the body only for the duration of the copy.
struct TemporaryTextArea {
    body: HtmlElement,
    element: HtmlTextAreaElement,
}

impl Drop for TemporaryTextArea {
    fn drop(&mut self) {
        let _ = self.body.remove_child(&self.element);
    }
}

fn copy_with_selection(text: &str) -> Result<(), ClipboardError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(ClipboardError::NoDocument)?;
    let body = document.body().ok_or(ClipboardError::NoDocument)?;

    let element: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(fallback_failed)?
        .dyn_into()
        .map_err(|_| ClipboardError::FallbackFailed("created element is not a textarea".into()))?;
    element.set_value(text);
    element.set_attribute("readonly", "").map_err(fallback_failed)?;

    let style = element.style();
    for (property, value) in [("position", "fixed"), ("left", "-9999px"), ("top", "0")] {
        style.set_property(property, value).map_err(fallback_failed)?;
    }

    body.append_child(&element).map_err(fallback_failed)?;
    let holder = TemporaryTextArea { body, element };
    holder.element.focus().map_err(fallback_failed)?;
    holder.element.select();

    let document: HtmlDocument = document
        .dyn_into()
        .map_err(|_| ClipboardError::FallbackFailed("document is not an HTML document".into()))?;
    let copied = document.exec_command("copy").map_err(fallback_failed)?;

    if copied {
        Ok(())
    } else {
        Err(ClipboardError::FallbackFailed("execCommand(\"copy\") returned false".into()))
    }
}

fn fallback_failed(err: JsValue) -> ClipboardError {
    ClipboardError::FallbackFailed(describe(&err))
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_read_well_in_the_console() {
        assert_eq!(
            ClipboardError::Unavailable.to_string(),
            "clipboard API is not available in this context"
        );
        assert_eq!(
            ClipboardError::FallbackFailed("execCommand(\"copy\") returned false".into()).to_string(),
            "fallback copy failed: execCommand(\"copy\") returned false"
        );
    }
}
