#![no_main]

use libfuzzer_sys::fuzz_target;
use layergen::infrastructure::{parse_schema, SchemaFormat};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parse + expand must reject bad input with an error, never a panic
        if let Ok(schema) = parse_schema(content, SchemaFormat::Yaml) {
            let _ = layergen::expand_schema(&schema, None);
        }
    }
});
