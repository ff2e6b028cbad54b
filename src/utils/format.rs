//! Human-readable byte sizes
//!
//! Renders byte counts as `Gb`/`Mb`/`kb`/`b` with integer division at each
//! 1024 boundary. The highest nonzero unit leads and every lower unit is
//! printed, zeros included, so the format stays consistent at every
//! magnitude.

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Format a byte count with only the units it needs
pub fn format_size(bytes: u64) -> String {
    let b = bytes % KB;
    let kb = (bytes / KB) % KB;
    let mb = (bytes / MB) % KB;
    let gb = bytes / GB;

    if gb > 0 {
        format!("{}Gb {}Mb {}kb {}b", gb, mb, kb, b)
    } else if mb > 0 {
        format!("{}Mb {}kb {}b", mb, kb, b)
    } else if kb > 0 {
        format!("{}kb {}b", kb, b)
    } else {
        format!("{}b", b)
    }
}
