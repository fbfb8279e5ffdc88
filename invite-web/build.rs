use std::env;

fn main() {
    // Backend base URL is fixed at build time, like the CSV fixtures the
    // chart apps embed. Empty means "same origin as the page".
    let backend_url = env::var("BACKEND_URL").unwrap_or_default();
    println!("cargo:rustc-env=INVITE_BACKEND_URL={}", backend_url.trim());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BACKEND_URL");
}
