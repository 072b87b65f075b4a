// Exposes the target triple to the C interop tests, which build a C caller at test time.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for (var, name) in [("TARGET", "BAR_FOO_TARGET"), ("HOST", "BAR_FOO_HOST")] {
        if let Ok(value) = std::env::var(var) {
            println!("cargo:rustc-env={}={}", name, value);
        }
    }
}
