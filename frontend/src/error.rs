use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a DOM-bound feature could not be attached to the page.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no browser window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not a canvas")]
    WrongElement(String),
    #[error("2d context unavailable")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
