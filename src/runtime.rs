/// Snapshot of the runtime environment, answering the capability questions
/// the rest of the system asks before branching on platform quirks.
///
/// The full capability oracle lives outside this crate; this probe covers
/// what the process can answer about itself without I/O.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeEnv {
    os: &'static str,
    version: &'static str,
}

impl RuntimeEnv {
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS,
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Operating system family the process runs on, e.g. `linux`.
    pub fn os(&self) -> &'static str {
        self.os
    }

    pub fn is_windows(&self) -> bool {
        self.os == "windows"
    }

    /// Version of this crate as built.
    pub fn version(&self) -> &'static str {
        self.version
    }
}
