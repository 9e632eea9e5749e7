#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(id) = std::str::from_utf8(data) {
        // Fuzz asset id validation - this should never panic.
        let _ = parcel::models::is_valid_asset_id(id);
    }
});
