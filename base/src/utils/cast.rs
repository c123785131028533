
use crate::vkchar;

use std::ffi::{CStr, CString};

/// Helper function to convert [c_char; SIZE] to string.
///
/// Vulkan fills these arrays with a null-terminated string; an array without terminator yields an empty string.
pub fn chars2string(raw_string_array: &[vkchar]) -> String {

    chars2cstring(raw_string_array)
        .to_string_lossy()
        .into_owned()
}

pub fn chars2cstring(raw_string_array: &[vkchar]) -> CString {

    // reinterpret c_char as u8 without copying, then stop at the first null byte.
    let bytes: &[u8] = unsafe {
        std::slice::from_raw_parts(raw_string_array.as_ptr() as *const u8, raw_string_array.len())
    };

    CStr::from_bytes_until_nul(bytes)
        .map(CStr::to_owned)
        .unwrap_or_default()
}

pub fn cstrings2ptrs(raw_string_array: &[CString]) -> Vec<*const vkchar> {

    raw_string_array.iter()
        .map(|l| l.as_ptr()).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn to_chars(text: &[u8]) -> [vkchar; 16] {
        let mut chars = [0 as vkchar; 16];
        for (dst, src) in chars.iter_mut().zip(text.iter()) {
            *dst = *src as vkchar;
        }
        chars
    }

    #[test]
    fn converts_null_terminated_array() {
        let chars = to_chars(b"VK_KHR_surface");
        assert_eq!(chars2string(&chars), "VK_KHR_surface");
        assert_eq!(chars2cstring(&chars).as_bytes(), b"VK_KHR_surface");
    }

    #[test]
    fn unterminated_array_is_empty() {
        let chars = [b'a' as vkchar; 4];
        assert_eq!(chars2string(&chars), "");
    }

    #[test]
    fn pointers_follow_strings() {
        let names = vec![CString::new("a").unwrap(), CString::new("b").unwrap()];
        let ptrs = cstrings2ptrs(&names);
        assert_eq!(ptrs.len(), 2);
        assert_eq!(ptrs[1], names[1].as_ptr());
    }
}
