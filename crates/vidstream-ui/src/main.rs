#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Vidstream shell binary: mounts the header on wasm32, explains itself elsewhere.

#[cfg(target_arch = "wasm32")]
fn main() {
    vidstream_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_NOTICE: &str = "vidstream-ui only runs in the browser.\n\
Serve it with `trunk serve crates/vidstream-ui/index.html`; the shell mounts on #app-header \
and loads pages into #content-container.\n";

#[cfg(not(target_arch = "wasm32"))]
fn write_notice(out: &mut impl std::io::Write) -> std::io::Result<()> {
    out.write_all(NATIVE_NOTICE.as_bytes())?;
    out.flush()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    write_notice(&mut std::io::stderr().lock())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_notice_points_at_trunk() -> std::io::Result<()> {
        let mut out = Vec::new();
        write_notice(&mut out)?;
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("trunk serve"));
        assert!(text.contains("#app-header"));
        Ok(())
    }
}
