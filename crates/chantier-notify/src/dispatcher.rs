use std::collections::BTreeSet;
use std::sync::Arc;

use chantier_core::{Notification, Severity};
use chantier_store::Storage;

use crate::ack::{Acknowledgement, Acknowledger, TracingAcknowledger};
use crate::audience::{employee_ids, responsable_ids};
use crate::error::NotifyError;
use crate::store::NotificationStore;

/// Who a domain event is announced to.
#[derive(Debug, Clone, Copy)]
enum Audience {
    Employees,
    EmployeesAndResponsables,
}

struct Announcement {
    audience: Audience,
    title: &'static str,
    message: String,
    severity: Severity,
    link: &'static str,
    ack: &'static str,
}

/// Announces domain events to every user of the relevant roles.
///
/// Each operation resolves its audience from the cached `users` list. An
/// empty audience makes the call a silent no-op returning `Ok(0)`; otherwise
/// the notification is stored for every recipient and the acknowledger is
/// called exactly once.
#[derive(Clone)]
pub struct NotificationDispatcher {
    storage: Storage,
    store: NotificationStore,
    acknowledger: Arc<dyn Acknowledger>,
}

impl NotificationDispatcher {
    /// Dispatcher that reports acknowledgments through `tracing`.
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self::with_acknowledger(storage, Arc::new(TracingAcknowledger))
    }

    #[must_use]
    pub fn with_acknowledger(storage: Storage, acknowledger: Arc<dyn Acknowledger>) -> Self {
        Self {
            store: NotificationStore::new(storage.clone()),
            storage,
            acknowledger,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &NotificationStore {
        &self.store
    }

    /// # Errors
    ///
    /// Propagates store failures while writing the notification.
    pub fn notify_new_meeting(&self, meeting_title: &str) -> Result<usize, NotifyError> {
        self.announce(Announcement {
            audience: Audience::Employees,
            title: "Nouvelle réunion",
            message: format!("Une nouvelle réunion \"{meeting_title}\" a été créée"),
            severity: Severity::Info,
            link: "/employee/reunions",
            ack: "Les employés ont été notifiés de la nouvelle réunion",
        })
    }

    /// # Errors
    ///
    /// Propagates store failures while writing the notification.
    pub fn notify_new_document(&self, document_title: &str) -> Result<usize, NotifyError> {
        self.announce(Announcement {
            audience: Audience::Employees,
            title: "Nouveau document",
            message: format!("Un nouveau document \"{document_title}\" a été ajouté"),
            severity: Severity::Info,
            link: "/employee/documents",
            ack: "Les employés ont été notifiés du nouveau document",
        })
    }

    /// Incidents also reach responsables. A user listed under both roles is
    /// notified once.
    ///
    /// # Errors
    ///
    /// Propagates store failures while writing the notification.
    pub fn notify_new_incident(&self, incident_title: &str) -> Result<usize, NotifyError> {
        self.announce(Announcement {
            audience: Audience::EmployeesAndResponsables,
            title: "Nouvel incident",
            message: format!("Un nouvel incident \"{incident_title}\" a été signalé"),
            severity: Severity::Warning,
            link: "/incidents",
            ack: "Les employés et responsables ont été notifiés du nouvel incident",
        })
    }

    /// # Errors
    ///
    /// Propagates store failures while writing the notification.
    pub fn notify_new_maitre_ouvrage(&self, name: &str) -> Result<usize, NotifyError> {
        self.announce(Announcement {
            audience: Audience::Employees,
            title: "Nouveau maître d'ouvrage",
            message: format!("Un nouveau maître d'ouvrage \"{name}\" a été ajouté"),
            severity: Severity::Info,
            link: "/employee/maitre-ouvrage",
            ack: "Les employés ont été notifiés du nouveau maître d'ouvrage",
        })
    }

    /// # Errors
    ///
    /// Propagates store failures while writing the notification.
    pub fn notify_new_project(&self, project_name: &str) -> Result<usize, NotifyError> {
        self.announce(Announcement {
            audience: Audience::Employees,
            title: "Nouveau projet",
            message: format!("Un nouveau projet \"{project_name}\" a été créé"),
            severity: Severity::Info,
            link: "/employee/projects",
            ack: "Les employés ont été notifiés du nouveau projet",
        })
    }

    /// # Errors
    ///
    /// Propagates store failures while writing the notification.
    pub fn notify_new_sub_project(&self, sub_project_name: &str, project_name: &str) -> Result<usize, NotifyError> {
        self.announce(Announcement {
            audience: Audience::Employees,
            title: "Nouveau sous-projet",
            message: format!(
                "Un nouveau sous-projet \"{sub_project_name}\" a été créé dans le projet \"{project_name}\""
            ),
            severity: Severity::Info,
            link: "/employee/sous-projets",
            ack: "Les employés ont été notifiés du nouveau sous-projet",
        })
    }

    /// Tell one employee they were added to (or removed from) a project or
    /// sub-project. No acknowledgment is emitted.
    ///
    /// Returns `Ok(0)` without writing when `employee_id` or `project_name`
    /// is empty.
    ///
    /// # Errors
    ///
    /// Propagates store failures while writing the notification.
    pub fn notify_project_assignment(
        &self,
        employee_id: &str,
        project_name: &str,
        sub_project_name: Option<&str>,
        added: bool,
    ) -> Result<usize, NotifyError> {
        if employee_id.is_empty() || project_name.is_empty() {
            return Ok(0);
        }
        let sub_project_name = sub_project_name.filter(|s| !s.is_empty());

        let (title, verb, severity) = if added {
            ("Affectation à un projet", "affecté au", Severity::Success)
        } else {
            ("Retrait d'un projet", "retiré du", Severity::Info)
        };
        let (message, link) = match sub_project_name {
            Some(sub) => (
                format!("Vous avez été {verb} sous-projet \"{sub}\" dans le projet \"{project_name}\""),
                format!("/employee/subprojects/{sub}"),
            ),
            None => (
                format!("Vous avez été {verb} projet \"{project_name}\""),
                format!("/employee/projects/{project_name}"),
            ),
        };

        self.store.add(&Notification {
            recipient_ids: BTreeSet::from([employee_id.to_string()]),
            title: title.to_string(),
            message,
            severity,
            link: Some(link),
        })
    }

    fn recipients(&self, audience: Audience) -> BTreeSet<String> {
        match audience {
            Audience::Employees => employee_ids(&self.storage),
            Audience::EmployeesAndResponsables => {
                let mut ids = employee_ids(&self.storage);
                ids.extend(responsable_ids(&self.storage));
                ids
            }
        }
    }

    fn announce(&self, announcement: Announcement) -> Result<usize, NotifyError> {
        let recipient_ids = self.recipients(announcement.audience);
        if recipient_ids.is_empty() {
            tracing::debug!(title = announcement.title, "no recipients; nothing to notify");
            return Ok(0);
        }

        let sent = self.store.add(&Notification {
            recipient_ids,
            title: announcement.title.to_string(),
            message: announcement.message,
            severity: announcement.severity,
            link: Some(announcement.link.to_string()),
        })?;
        self.acknowledger
            .acknowledge(&Acknowledgement::sent(announcement.ack));
        Ok(sent)
    }
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}
