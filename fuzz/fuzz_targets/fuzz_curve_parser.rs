#![no_main]

use bezier_toy::{parse_curve_document, write_curve_document, ReducerRegistry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(xml_content) = std::str::from_utf8(data) else {
        return;
    };
    let registry = ReducerRegistry::with_builtin_reducers();
    if let Ok(document) = parse_curve_document(xml_content, &registry) {
        // Offsets nahe f64::MAX dürfen beim Speichern scheitern, aber nicht abstürzen
        let _ = write_curve_document(&document, &registry);
    }
});
