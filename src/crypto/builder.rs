use super::{NtruEngine, NtruParams, NtruResult};
use crate::keys::DEFAULT_MAX_ATTEMPTS;

pub struct NtruEngineBuilder {
    max_keygen_attempts: Option<usize>,
}

impl Default for NtruEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NtruEngineBuilder {
    pub fn new() -> Self {
        Self {
            max_keygen_attempts: None,
        }
    }

    /// Caps the secret-key rejection loop; defaults to
    /// [`DEFAULT_MAX_ATTEMPTS`].
    pub fn max_keygen_attempts(mut self, attempts: usize) -> Self {
        self.max_keygen_attempts = Some(attempts);
        self
    }

    pub fn build(self, params: NtruParams) -> NtruEngine {
        NtruEngine::new(
            params,
            self.max_keygen_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
        )
    }

    /// Builds from one of the named presets (`"tiny"`, `"small"`,
    /// `"128bit"`, `"192bit"`, `"256bit"`).
    pub fn build_preset(self, name: &str) -> NtruResult<NtruEngine> {
        let params = NtruParams::preset(name)?;
        Ok(self.build(params))
    }
}
