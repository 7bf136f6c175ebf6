fn main() {
    // Python extension modules on macOS leave the interpreter symbols unresolved
    // and rely on the loading interpreter to provide them.
    #[cfg(target_os = "macos")]
    {
        println!("cargo:rustc-link-arg=-Wl,-undefined,dynamic_lookup");
    }
}
