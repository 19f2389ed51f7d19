/// Whether a request reached us over an encrypted channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Secure,
    Insecure,
}

impl Transport {
    /// Classify a request received on a plaintext listener.
    ///
    /// The connection itself is never encrypted, so the only evidence of TLS
    /// is `X-Forwarded-Proto` from a trusted terminating proxy. The request
    /// line's URI scheme is client-controlled and is not consulted.
    ///
    /// Only the first comma-separated forwarded value is considered.
    pub fn classify(forwarded_proto: Option<&str>, trust_forwarded_proto: bool) -> Self {
        let forwarded_https = trust_forwarded_proto
            && forwarded_proto
                .and_then(|value| value.split(',').next())
                .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"));

        if forwarded_https {
            Self::Secure
        } else {
            Self::Insecure
        }
    }

    pub fn is_secure(&self) -> bool {
        matches!(self, Self::Secure)
    }
}
