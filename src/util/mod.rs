pub(crate) mod diagnostics;
pub(crate) mod proxy;
pub(crate) mod redact;
pub(crate) mod url;
