use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DogKind {
    Terrier,
    Bulldog,
    Dalmatian,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub name: String,
    pub pk: i64,
    pub kind: DogKind,
}

/// Caller supplied fields of a dog. The key is always assigned by the registry,
/// so a `pk` in the request body is accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogDraft {
    pub name: String,
    pub kind: DogKind,
}

/// Partial update. A missing field keeps the stored value; an explicit `null` is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogPatch {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<DogKind>,
}

// Only called for keys present in the body, so `null` reaches `T` and fails there.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DogUpdate {
    Replace(DogDraft),
    Merge(DogPatch),
}

impl Dog {
    pub fn from_draft(pk: i64, draft: DogDraft) -> Self {
        Self {
            name: draft.name,
            pk,
            kind: draft.kind,
        }
    }

    /// Applies an update in place. `pk` is the storage key and never changes.
    pub fn apply(&mut self, update: DogUpdate) {
        match update {
            DogUpdate::Replace(draft) => {
                self.name = draft.name;
                self.kind = draft.kind;
            }
            DogUpdate::Merge(patch) => {
                if let Some(name) = patch.name {
                    self.name = name;
                }
                if let Some(kind) = patch.kind {
                    self.kind = kind;
                }
            }
        }
    }
}
