// Shared builder for dog drafts used across registry and HTTP tests.

use crate::modules::dogs::core::dog::{DogDraft, DogKind};

pub struct DogDraftBuilder {
    inner: DogDraft,
}

impl Default for DogDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DogDraftBuilder {
    pub fn new() -> Self {
        Self {
            inner: DogDraft {
                name: "Fido".to_string(),
                kind: DogKind::Terrier,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn kind(mut self, v: DogKind) -> Self {
        self.inner.kind = v;
        self
    }

    pub fn build(self) -> DogDraft {
        self.inner
    }
}
