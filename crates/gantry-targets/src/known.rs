//! Table of well-known target triples for diagnostics output.

/// List well-known target triples with one-line descriptions.
pub fn known_triples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("x86_64-unknown-linux-gnu", "64-bit Linux (glibc)"),
        ("x86_64-unknown-linux-musl", "64-bit Linux (musl, static)"),
        ("aarch64-unknown-linux-gnu", "ARM64 Linux (glibc)"),
        ("i686-unknown-linux-gnu", "32-bit Linux (glibc)"),
        ("x86_64-apple-darwin", "64-bit macOS"),
        ("aarch64-apple-darwin", "ARM64 macOS (Apple Silicon)"),
        ("x86_64-pc-windows-msvc", "64-bit Windows (MSVC)"),
        ("x86_64-pc-windows-gnu", "64-bit Windows (MinGW)"),
        ("arm-unknown-linux-gnueabihf", "ARMv6 Linux (hard-float)"),
        ("wasm32-unknown-unknown", "WebAssembly"),
    ]
}

/// Look up the description of a well-known triple.
pub fn describe(name: &str) -> Option<&'static str> {
    known_triples()
        .into_iter()
        .find(|(triple, _)| *triple == name)
        .map(|(_, description)| description)
}
