// File: crates/wxline-core/build.rs
// Summary: Links Windows system libraries that Skia's font manager needs for PNG export.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in by the system font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
