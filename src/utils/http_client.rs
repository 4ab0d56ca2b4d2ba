use std::sync::OnceLock;

use tracing::debug;

use crate::error::Result;

pub fn install_rustls_provider() {
    static PROVIDER_INSTALLED: OnceLock<()> = OnceLock::new();
    PROVIDER_INSTALLED.get_or_init(|| {
        if let Err(e) = rustls::crypto::aws_lc_rs::default_provider().install_default() {
            // Safe to ignore: can happen if another crate installed it first.
            debug!(existing_provider = ?e, "rustls CryptoProvider already installed");
        }
    });
}

/// Build the outbound `reqwest::Client` used for Dedicated Server calls.
///
/// `insecure` skips server certificate verification. The Dedicated Server
/// ships with a self-signed certificate, so this is a supported opt-in,
/// but verification stays on unless explicitly disabled.
///
/// No timeout is configured; a hanging server hangs the scrape with it.
pub fn build_exporter_client(insecure: bool) -> Result<reqwest::Client> {
    install_rustls_provider();

    let mut builder = reqwest::Client::builder();

    if insecure {
        builder = builder.danger_accept_invalid_certs(true);
    }

    Ok(builder.build()?)
}
