//! Reconstructs an issue's comment and close/reopen history from its
//! journal entries.

use serde::Serialize;
use tracing::warn;

use crate::format::status_is_closed;
use crate::identity::login_for_uid;
use crate::markup::MarkupConverter;
use crate::models::{IssueStatusIndex, JournalEntry, RedmineUserIndex};

/// Body substituted when the markup converter fails on a journal note; a
/// broken note never aborts history reconstruction.
pub const CONVERSION_FALLBACK: &str = "Conversion error. Please see original issue.";

/// One GitLab-side rendering of a journal change: either a note body to
/// post, or a state flip to replay. Serializes flat, exactly the fields the
/// notes/issues endpoints accept.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum NotePayload {
    Comment {
        body: String,
        created_at: String,
    },
    StateChange {
        updated_at: String,
        state_event: StateEvent,
    },
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StateEvent {
    Close,
    Reopen,
}

/// Submission-layer directives that accompany one event but are not part of
/// the request body. `sudo_user == None` marks an event whose author could
/// not be attributed (anonymous or deleted account).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteMeta {
    pub sudo_user: Option<String>,
    pub is_state_change: bool,
}

/// Walks an issue's journal entries in order and lazily yields one event
/// per visible change, as `(payload, meta)` pairs.
///
/// A non-empty note yields a comment event; each `status_id` detail is
/// compared against the running closed flag (initially open) and yields a
/// close/reopen event only when the flag actually flips, so repeated
/// transitions into closed states produce a single event. Within one entry
/// the comment comes before any state event.
pub fn journal_events<'a>(
    journals: &'a [JournalEntry],
    users: &'a RedmineUserIndex,
    statuses: &'a IssueStatusIndex,
    markup: &'a dyn MarkupConverter,
) -> impl Iterator<Item = (NotePayload, NoteMeta)> + 'a {
    let mut closed = false;
    journals.iter().flat_map(move |entry| {
        let mut events = Vec::new();
        let sudo_user = entry_author(entry, users);

        if !entry.notes.is_empty() {
            let body = match markup.convert(&entry.notes) {
                Ok(converted) => converted,
                Err(err) => {
                    warn!(error = %err, "note markup conversion failed, substituting fallback body");
                    CONVERSION_FALLBACK.to_string()
                }
            };
            events.push((
                NotePayload::Comment {
                    body,
                    created_at: entry.created_on.clone(),
                },
                NoteMeta {
                    sudo_user: sudo_user.clone(),
                    is_state_change: false,
                },
            ));
        }

        for detail in &entry.details {
            if detail.name != "status_id" {
                continue;
            }
            let now_closed = status_is_closed(statuses, detail.new_value.as_deref().unwrap_or(""));
            if closed != now_closed {
                closed = now_closed;
                events.push((
                    NotePayload::StateChange {
                        updated_at: entry.created_on.clone(),
                        state_event: if closed { StateEvent::Close } else { StateEvent::Reopen },
                    },
                    NoteMeta {
                        sudo_user: sudo_user.clone(),
                        is_state_change: true,
                    },
                ));
            }
        }

        events
    })
}

fn entry_author(entry: &JournalEntry, users: &RedmineUserIndex) -> Option<String> {
    let user = match entry.user.as_ref() {
        Some(user) => user,
        None => {
            warn!("journal entry has no author, attributing note to current admin");
            return None;
        }
    };
    match login_for_uid(user.id, users) {
        Ok(login) => Some(login),
        Err(_) => {
            warn!(
                user = user.id,
                "redmine user is unknown, attributing note to current admin"
            );
            None
        }
    }
}
