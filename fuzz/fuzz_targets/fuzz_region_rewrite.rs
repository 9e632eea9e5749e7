#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz the region rewriter - this should never panic, and a
        // successful rewrite must contain both markers.
        let path = std::path::Path::new("CMakeLists.txt");
        if let Ok(updated) = parcel::replace_region(content, "line", path) {
            assert!(updated.contains(parcel::REGION_BEGIN));
            assert!(updated.contains(parcel::REGION_END));
        }
    }
});
