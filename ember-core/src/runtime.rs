use rustls::crypto::{CryptoProvider, ring::default_provider};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber, honouring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Select ring as the process-wide rustls crypto provider.
///
/// A provider installed earlier is left in place.
pub fn install_crypto_provider() {
    if CryptoProvider::get_default().is_some() {
        return;
    }

    if default_provider().install_default().is_err() {
        debug!("rustls crypto provider was installed concurrently");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crypto_provider_install_is_repeatable() {
        install_crypto_provider();
        install_crypto_provider();
        assert!(CryptoProvider::get_default().is_some());
    }
}
