use serde::{Deserialize, Serialize};

/// A public contract ("marché").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marche {
    pub id: String,
    pub nom: String,
    pub numero_marche: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date_signature: String,
    pub date_debut_projet: String,
    #[serde(rename = "dateVisaCME")]
    pub date_visa_cme: String,
    pub numero_appel_offre: String,
    pub prix_dinar: String,
    pub prix_devise: String,
    pub fournisseur: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projet_id: Option<String>,
    pub description: String,
}
