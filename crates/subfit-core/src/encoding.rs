use encoding_rs::Encoding;

/// Decode trial order before rotation. Romanian subtitle archives are most
/// often UTF-8 or a Latin-2 variant.
const TRIALS: &[&str] = &["utf-8", "iso-8859-2", "windows-1250", "latin1"];

/// UTF-8 byte-order mark.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode raw subtitle bytes into UTF-8 text.
///
/// Tries the trial list rotated by `priority` (index of the encoding to try
/// first); the first encoding that decodes without errors wins. A UTF-8 BOM
/// short-circuits the trials. When every strict decode fails, falls back to
/// lossy latin1. Returns the text and the label of the encoding used.
pub fn decode_subtitle(bytes: &[u8], priority: usize) -> (String, &'static str) {
    if bytes.starts_with(UTF8_BOM) {
        return (String::from_utf8_lossy(&bytes[UTF8_BOM.len()..]).into_owned(), "utf-8");
    }

    let rotation = priority % TRIALS.len();
    let rotated = TRIALS[rotation..].iter().chain(TRIALS[..rotation].iter());

    for &label in rotated {
        let Some(encoding) = Encoding::for_label(label.as_bytes()) else {
            continue;
        };
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            tracing::debug!(encoding = label, "subtitle encoding detected");
            return (text.into_owned(), label);
        }
    }

    let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    (text.into_owned(), "latin1")
}
