use std::env;
use std::fs;
use std::path::Path;

// Places the workspace config.toml next to the backend binary so
// `load_config` finds it at runtime.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");

    // OUT_DIR looks like target/<profile>/build/backend-<hash>/out
    let Some(profile_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target/{} not found, config.toml not copied", profile);
        return;
    };

    let source = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config.toml");

    if !source.exists() {
        println!(
            "cargo:warning=no config.toml at {:?}, the embedded default will be used",
            source
        );
        return;
    }

    let dest = profile_dir.join("config.toml");
    if let Err(e) = fs::copy(&source, &dest) {
        panic!("failed to copy config.toml to {:?}: {}", dest, e);
    }
}
