#![no_main]

use libfuzzer_sys::fuzz_target;
use webship::{ArchiveName, DeployPlan, RemoteLayout};

fuzz_target!(|data: &[u8]| {
    if let Ok(file) = std::str::from_utf8(data) {
        if let Ok(name) = ArchiveName::from_file_name(file) {
            assert!(!name.release().is_empty());
            assert!(!name.release().contains('.'));
            let plan = DeployPlan::build(
                std::path::Path::new(file),
                &name,
                "web_static",
                &RemoteLayout::default(),
            );
            assert_eq!(plan.len(), 9);
        }
    }
});
