//! File and binary-field helpers for forms carrying inline base64 content.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, FileReader, HtmlInputElement};

#[derive(Debug, Error)]
pub enum FileLoadError {
    #[error("no file selected")]
    NoFile,
    #[error("could not read file: {0}")]
    Read(String),
}

/// A user-selected file, ready to be embedded in a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub base64: String,
    pub content_type: String,
}

/// Read the file behind a change event on an `<input type="file">` into a
/// base64 payload. Completion is delivered through `on_done`; the caller
/// forwards failures to the notification channel.
pub fn load_file<F>(event: &Event, on_done: F) -> Result<(), FileLoadError>
where
    F: FnOnce(Result<FilePayload, FileLoadError>) + 'static,
{
    let input = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .ok_or(FileLoadError::NoFile)?;
    let file = input
        .files()
        .and_then(|files| files.get(0))
        .ok_or(FileLoadError::NoFile)?;
    let content_type = file.type_();

    let reader = FileReader::new().map_err(|e| FileLoadError::Read(format!("{e:?}")))?;
    let reader_in_closure = reader.clone();
    let closure = Closure::once(move |_event: web_sys::ProgressEvent| {
        let payload = reader_in_closure
            .result()
            .map_err(|e| FileLoadError::Read(format!("{e:?}")))
            .and_then(|value| {
                value
                    .as_string()
                    .ok_or_else(|| FileLoadError::Read("reader yielded no string".to_owned()))
            })
            .map(|data_url| FilePayload {
                base64: strip_data_url_prefix(&data_url),
                content_type,
            });
        on_done(payload);
    });
    reader.set_onloadend(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    reader
        .read_as_data_url(&file)
        .map_err(|e| FileLoadError::Read(format!("{e:?}")))
}

/// Open inline binary content in a new tab through an object URL.
pub fn open_file(base64: &str, content_type: Option<&str>) -> Result<(), FileLoadError> {
    let window = web_sys::window().ok_or_else(|| FileLoadError::Read("no window".to_owned()))?;
    let binary = window
        .atob(base64)
        .map_err(|e| FileLoadError::Read(format!("{e:?}")))?;
    let bytes: Vec<u8> = binary.chars().map(|c| c as u8).collect();
    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type.unwrap_or("application/octet-stream"));
    let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &options)
        .map_err(|e| FileLoadError::Read(format!("{e:?}")))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| FileLoadError::Read(format!("{e:?}")))?;
    let _ = window.open_with_url_and_target(&url, "_blank");
    Ok(())
}

/// Inline `src` value for an `<img>` preview.
pub fn data_url(base64: &str, content_type: Option<&str>) -> String {
    format!(
        "data:{};base64,{}",
        content_type.unwrap_or("application/octet-stream"),
        base64
    )
}

/// Human-readable size of a base64 payload.
pub fn byte_size(base64: &str) -> String {
    let padding = base64.chars().rev().take_while(|c| *c == '=').count();
    let bytes = (base64.len() * 3 / 4).saturating_sub(padding);
    if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1_024 {
        format!("{:.1} KB", bytes as f64 / 1_024.0)
    } else {
        format!("{bytes} bytes")
    }
}

fn strip_data_url_prefix(data_url: &str) -> String {
    data_url
        .split_once(',')
        .map(|(_, tail)| tail.to_owned())
        .unwrap_or_else(|| data_url.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_size_accounts_for_padding() {
        // "aGk=" encodes "hi"
        assert_eq!(byte_size("aGk="), "2 bytes");
    }

    #[test]
    fn test_byte_size_scales_units() {
        let one_mb_encoded = "A".repeat(1_398_104);
        assert!(byte_size(&one_mb_encoded).ends_with("MB"));
    }

    #[test]
    fn test_strip_data_url_prefix() {
        assert_eq!(
            strip_data_url_prefix("data:image/png;base64,AAAA"),
            "AAAA"
        );
        assert_eq!(strip_data_url_prefix("AAAA"), "AAAA");
    }

    #[test]
    fn test_data_url_falls_back_to_octet_stream() {
        assert_eq!(
            data_url("AAAA", None),
            "data:application/octet-stream;base64,AAAA"
        );
    }
}
