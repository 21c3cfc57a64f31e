//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API for running transformations from
//! other languages such as C#, Python, and Node.js.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::render::JsonFormat;
use crate::{ContentType, TransformationEngine};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct ExconvResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The descriptor JSON (null if failed). Must be freed with `exconv_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `exconv_free_result`.
    pub error: *mut c_char,
}

impl ExconvResult {
    fn success(data: String) -> Self {
        Self {
            success: true,
            data: CString::new(data).unwrap_or_default().into_raw(),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

unsafe fn read_str<'a>(value: *const c_char, what: &str) -> Result<&'a str, String> {
    if value.is_null() {
        return Err(format!("{} cannot be null", what));
    }
    CStr::from_ptr(value)
        .to_str()
        .map_err(|_| format!("Invalid UTF-8 {}", what.to_lowercase()))
}

/// Run a transformation and return the descriptor as JSON.
///
/// `name` accepts an operation name (`article-to-story`), a kind tag
/// (`interactive-story`) or a label (`Interactive Story`). `content_type`
/// is one of `markdown`, `json`, `html`, `text`.
///
/// # Safety
///
/// All string arguments must be valid null-terminated UTF-8 strings.
/// The returned result must be freed with `exconv_free_result`.
#[no_mangle]
pub unsafe extern "C" fn exconv_transform(
    name: *const c_char,
    content: *const c_char,
    content_type: *const c_char,
    pretty: bool,
) -> ExconvResult {
    let name = match read_str(name, "Transformation name") {
        Ok(s) => s,
        Err(e) => return ExconvResult::error(e),
    };
    let content = match read_str(content, "Content") {
        Ok(s) => s,
        Err(e) => return ExconvResult::error(e),
    };
    let content_type = match read_str(content_type, "Content type") {
        Ok(s) => s,
        Err(e) => return ExconvResult::error(e),
    };

    let format = if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    };

    match transform_internal(name, content, content_type, format) {
        Ok(json) => ExconvResult::success(json),
        Err(e) => ExconvResult::error(e.to_string()),
    }
}

fn transform_internal(
    name: &str,
    content: &str,
    content_type: &str,
    format: JsonFormat,
) -> crate::Result<String> {
    let content_type: ContentType = content_type.parse()?;
    let engine = TransformationEngine::new().with_json_format(format);
    let descriptor = engine.transform_by_name(name, content, content_type)?;
    engine.to_json(&descriptor)
}

/// Free a result returned by any exconv function.
///
/// # Safety
///
/// The `result` must have been returned by an exconv function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn exconv_free_result(result: ExconvResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by exconv.
///
/// # Safety
///
/// The `ptr` must have been allocated by exconv.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn exconv_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the exconv library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn exconv_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
