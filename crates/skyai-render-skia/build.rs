// File: crates/skyai-render-skia/build.rs
// Summary: Links the Windows registry API that Skia's ICU font fallback pulls in.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // RegOpenKeyExW / RegQueryInfoKeyW live in advapi32; only the MSVC/GNU Windows targets need it.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
