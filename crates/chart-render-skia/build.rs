// File: crates/chart-render-skia/build.rs
// Summary: Links the Windows system libraries Skia needs for the raster backend.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // registry APIs used during font enumeration
        println!("cargo:rustc-link-lib=advapi32");
    }
}
