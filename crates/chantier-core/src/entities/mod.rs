//! Domain records for the project-management application.
//!
//! Flat value objects with a required `id`. Field names follow the camelCase
//! JSON shared with the UI and the local store. Nothing beyond required-field
//! presence is enforced here.

mod document;
mod incident;
mod invoice;
mod maitre_ouvrage;
mod marche;
mod meeting;

pub use document::{Document, DocumentType};
pub use incident::{Incident, IncidentFollowUp};
pub use invoice::Invoice;
pub use maitre_ouvrage::MaitreOuvrage;
pub use marche::Marche;
pub use meeting::{Attendee, Meeting, MeetingDocument};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record addressable by its `id`.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Human-readable kind used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($ty:ty, $kind:literal) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

impl_record!(Invoice, "invoice");
impl_record!(Marche, "marche");
impl_record!(Meeting, "meeting");
impl_record!(Incident, "incident");
impl_record!(IncidentFollowUp, "incident_follow_up");
impl_record!(Document, "document");
impl_record!(MaitreOuvrage, "maitre_ouvrage");
