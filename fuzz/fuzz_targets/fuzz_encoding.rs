#![no_main]
use libfuzzer_sys::fuzz_target;
use routelog::TextEncoding;

fuzz_target!(|data: &str| {
    // Lossy encoding must never panic, whatever the charset can represent
    for label in ["ascii", "latin-1", "shift_jis", "utf-8"] {
        if let Ok(encoding) = TextEncoding::for_label(label) {
            let bytes = encoding.encode_lossy(data);
            let _ = encoding.decode_lossy(&bytes);
            let _ = encoding.round_trips(data);
        }
    }
});
