use std::sync::Arc;

use rustls::{ClientConfig, RootCertStore};

use crate::error::FetchError;

/// rustls client config trusting the platform's native root certificates.
pub(crate) fn client_config() -> Result<Arc<ClientConfig>, FetchError> {
    let native = rustls_native_certs::load_native_certs();
    for err in &native.errors {
        log::debug!(target: "net.tls", "skipping native certificate source: {err}");
    }

    let mut roots = RootCertStore::empty();
    let (added, ignored) = roots.add_parsable_certificates(native.certs);
    log::debug!(target: "net.tls", "native roots: {added} added, {ignored} ignored");

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()?
        .with_root_certificates(roots)
        .with_no_client_auth();
    Ok(Arc::new(config))
}
