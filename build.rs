use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");
    println!("cargo:rerun-if-changed=schematic.json");

    // Copy the runtime files next to the binary so `cargo run` finds them
    // via the executable directory lookup.
    let out_dir = env::var("OUT_DIR").unwrap();
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .expect("unexpected OUT_DIR layout")
        .to_path_buf();

    for file in ["config.toml", "schematic.json"] {
        if Path::new(file).exists() {
            fs::copy(file, target_dir.join(file)).unwrap();
        }
    }
}
