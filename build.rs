#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Richiede res/rleaveledger.ico
    let mut res = WindowsResource::new();
    res.set_icon("res/rleaveledger.ico")
        .set("FileDescription", "rLeaveLedger CLI")
        .set("ProductName", "rLeaveLedger")
        .set("OriginalFilename", "rleaveledger.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
