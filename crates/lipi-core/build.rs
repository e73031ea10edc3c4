use std::fs;
use std::path::Path;

fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );

    let data_dir = Path::new("src/table/data");
    println!("cargo:rerun-if-changed={}", data_dir.display());
    let entries = fs::read_dir(data_dir).expect("src/table/data must exist");
    for entry in entries {
        let path = entry.expect("readable table directory entry").path();
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }
        let content = fs::read_to_string(&path).expect("readable table file");
        validate_toml(&path.display().to_string(), &content);
    }
}

fn validate_toml(path: &str, content: &str) {
    if toml::from_str::<toml::Table>(content).is_err() {
        panic!("{path} contains invalid TOML");
    }
}
