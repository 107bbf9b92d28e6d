use serde::{Deserialize, Serialize};

/// A project owner ("maître d'ouvrage"). Local-only: lives under the
/// `maitreOuvrages` store key and is never sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaitreOuvrage {
    pub id: String,
    pub nom: String,
    /// `public` or `privé`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub adresse: String,
}
