use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Stylesheet and icon shipped inside the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| data_uri("favicon.svg", &load_asset("favicon.svg")))
        .as_str()
}

fn load_text(path: &str) -> String {
    String::from_utf8(load_asset(path).into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {path} is not valid UTF-8"))
}

fn load_asset(path: &str) -> Cow<'static, [u8]> {
    EmbeddedAssets::get(path.trim_start_matches('/'))
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {path}"))
}

fn data_uri(path: &str, bytes: &[u8]) -> String {
    let mime = if path.ends_with(".svg") {
        "image/svg+xml"
    } else if path.ends_with(".css") {
        "text/css"
    } else {
        "application/octet-stream"
    };
    format!("data:{mime};base64,{}", encode_base64(bytes))
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let n = (chunk[0] as u32) << 16
            | (*chunk.get(1).unwrap_or(&0) as u32) << 8
            | *chunk.get(2).unwrap_or(&0) as u32;

        for (idx, shift) in [18, 12, 6, 0].into_iter().enumerate() {
            if idx <= chunk.len() {
                output.push(TABLE[((n >> shift) & 0x3f) as usize] as char);
            } else {
                output.push('=');
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_pads_short_chunks() {
        assert_eq!(encode_base64(b""), "");
        assert_eq!(encode_base64(b"f"), "Zg==");
        assert_eq!(encode_base64(b"fo"), "Zm8=");
        assert_eq!(encode_base64(b"foo"), "Zm9v");
        assert_eq!(encode_base64(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn embedded_assets_load() {
        assert!(main_css().contains(".panel"));
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
    }
}
