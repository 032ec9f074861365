use std::env;
use std::fs;
use std::path::PathBuf;


fn main() {
    // put memory.x where the cortex-m-rt linker script can find it
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR not set"));
    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x"))
        .expect("failed to write memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
}
