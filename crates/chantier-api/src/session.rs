/// Session lifecycle signals published by [`crate::ApiClient`].
///
/// Navigation back to a login view is the subscriber's business; the client
/// only reports that the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A request came back `401`; the stored token was cleared.
    Unauthorized,
    /// Login succeeded and the session keys were written.
    LoggedIn { user_id: String },
    /// The session keys were cleared locally.
    LoggedOut,
}
