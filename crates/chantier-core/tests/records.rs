//! Records parse from the JSON the UI writes into the local store.

use chantier_core::entities::{Document, DocumentType, Invoice, MaitreOuvrage, Marche, Meeting, Record};
use pretty_assertions::assert_eq;

#[test]
fn maitre_ouvrage_reads_type_field() {
    let raw = r#"{"id":"1","nom":"ABCDEF","type":"public","email":"xyz@gmail.com","telephone":"0660078402","adresse":"Kouba"}"#;
    let mo: MaitreOuvrage = serde_json::from_str(raw).unwrap();
    assert_eq!(mo.kind, "public");
    assert_eq!(mo.id(), "1");
    assert_eq!(MaitreOuvrage::KIND, "maitre_ouvrage");
}

#[test]
fn marche_keeps_visa_cme_spelling() {
    let raw = r#"{
        "id": "m-1", "nom": "Route W12", "numeroMarche": "12/2024", "type": "travaux",
        "dateSignature": "2024-01-10", "dateDebutProjet": "2024-02-01", "dateVisaCME": "2024-01-20",
        "numeroAppelOffre": "AO-7", "prixDinar": "1000000", "prixDevise": "0",
        "fournisseur": "Cosider", "description": "Réfection"
    }"#;
    let marche: Marche = serde_json::from_str(raw).unwrap();
    assert_eq!(marche.date_visa_cme, "2024-01-20");
    assert!(marche.projet_id.is_none());

    let back = serde_json::to_value(&marche).unwrap();
    assert_eq!(back["dateVisaCME"], "2024-01-20");
    assert!(back.get("projetId").is_none());
}

#[test]
fn meeting_without_attendees_defaults_to_empty() {
    let raw = r#"{"id":"r1","title":"Kickoff","date":"2024-03-01","time":"09:00","location":"Base vie","createdAt":"2024-02-20"}"#;
    let meeting: Meeting = serde_json::from_str(raw).unwrap();
    assert!(meeting.attendees.is_empty());
    assert!(meeting.documents.is_empty());
}

#[test]
fn document_type_is_lowercase() {
    let raw = r#"{"id":"d1","title":"Plan","type":"pdf","dateAdded":"2024-03-02"}"#;
    let doc: Document = serde_json::from_str(raw).unwrap();
    assert_eq!(doc.kind, DocumentType::Pdf);
}

#[test]
fn invoice_requires_amounts() {
    let raw = r#"{"id":"f1","contractName":"C","contractNumber":"1","projectId":"p1","supplier":"S",
        "invoiceDate":"2024-01-01","receptionDate":"2024-01-02","grossAmount":100.0,"netAmount":100.0,
        "tvaAmount":19.0,"totalAmount":119.0,"paymentOrderDate":"2024-01-05","paymentOrderNumber":"OP-1",
        "invoiceNumber":"F-1","marche":"m-1","designation":"Ciment","createdAt":"2024-01-02"}"#;
    let invoice: Invoice = serde_json::from_str(raw).unwrap();
    assert!((invoice.total_amount - 119.0).abs() < f64::EPSILON);

    let missing = raw.replace(r#""grossAmount":100.0,"#, "");
    assert!(serde_json::from_str::<Invoice>(&missing).is_err());
}
