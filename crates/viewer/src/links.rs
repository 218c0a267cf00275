//! External navigation side effects: hand URLs, mailto: and tel: targets to
//! the OS open handler. Failures are logged and otherwise ignored; nothing
//! here can take the viewer down.

use std::process::Command;

/// Open `uri` with the platform handler.
pub fn open_external(uri: &str) {
    log::info!("opening external link: {uri}");
    let result = spawn_opener(uri);
    if let Err(e) = result {
        log::warn!("could not open {uri}: {e}");
    }
}

#[cfg(target_os = "linux")]
fn spawn_opener(uri: &str) -> std::io::Result<()> {
    Command::new("xdg-open").arg(uri).spawn().map(|_| ())
}

#[cfg(target_os = "macos")]
fn spawn_opener(uri: &str) -> std::io::Result<()> {
    Command::new("open").arg(uri).spawn().map(|_| ())
}

#[cfg(target_os = "windows")]
fn spawn_opener(uri: &str) -> std::io::Result<()> {
    Command::new("cmd").args(["/C", "start", "", uri]).spawn().map(|_| ())
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn spawn_opener(_uri: &str) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no opener for this platform",
    ))
}
