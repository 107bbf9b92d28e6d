use serde::{Deserialize, Serialize};

/// A supplier invoice ("facture"), kept locally under the `invoices` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub contract_name: String,
    pub contract_number: String,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_project_id: Option<String>,
    pub supplier: String,
    pub invoice_date: String,
    pub reception_date: String,
    pub gross_amount: f64,
    pub net_amount: f64,
    pub tva_amount: f64,
    pub total_amount: f64,
    pub payment_order_date: String,
    pub payment_order_number: String,
    pub invoice_number: String,
    pub marche: String,
    pub designation: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maitre_oeuvre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maitre_ouvrage: Option<String>,
}
