use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// True when `DMTX_DEBUG` is set; diagnostics then go to stderr.
pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("DMTX_DEBUG").is_ok())
}
