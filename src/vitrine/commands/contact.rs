//! The contact form and its inbox.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VitrineError};
use crate::model::ContactMessage;
use crate::store::DataStore;

const MIN_NAME_LEN: usize = 2;
const MIN_SUBJECT_LEN: usize = 5;
const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Returns every problem with the form, in field order.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.name.trim().chars().count() < MIN_NAME_LEN {
            problems.push(format!("name must have at least {} characters", MIN_NAME_LEN));
        }
        if !looks_like_email(self.email.trim()) {
            problems.push(format!("'{}' is not a valid email", self.email));
        }
        if self.subject.trim().chars().count() < MIN_SUBJECT_LEN {
            problems.push(format!(
                "subject must have at least {} characters",
                MIN_SUBJECT_LEN
            ));
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            problems.push(format!(
                "message must have at least {} characters",
                MIN_MESSAGE_LEN
            ));
        }
        problems
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

pub fn submit<S: DataStore>(store: &mut S, form: ContactForm) -> Result<CmdResult> {
    let problems = form.problems();
    if !problems.is_empty() {
        return Err(VitrineError::Validation(problems.join("; ")));
    }

    let msg = ContactMessage::new(
        form.name.trim().to_string(),
        form.email.trim().to_string(),
        form.subject.trim().to_string(),
        form.message.trim().to_string(),
    );

    let mut catalog = store.load()?;
    catalog.contacts.push(msg.clone());
    store.save(&catalog)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Message from {} received: {}",
        msg.name, msg.subject
    )));
    Ok(result.with_contacts(vec![msg]))
}

/// Messages newest first.
pub fn inbox<S: DataStore>(store: &S, unread_only: bool) -> Result<CmdResult> {
    let catalog = store.load()?;
    let mut contacts: Vec<ContactMessage> = catalog
        .contacts
        .into_iter()
        .filter(|m| !unread_only || !m.read)
        .collect();
    contacts.sort_by_key(|m| std::cmp::Reverse(m.created_at));
    Ok(CmdResult::default().with_contacts(contacts))
}

pub fn mark_read<S: DataStore>(store: &mut S, ids: &[String]) -> Result<CmdResult> {
    let mut catalog = store.load()?;

    // Validate everything before touching anything.
    for id in ids {
        if !catalog.contacts.iter().any(|m| &m.id == id) {
            return Err(VitrineError::ItemNotFound(format!("message {}", id)));
        }
    }

    let mut result = CmdResult::default();
    for msg in catalog.contacts.iter_mut().filter(|m| ids.contains(&m.id)) {
        if msg.read {
            result.add_message(CmdMessage::info(format!("Already read: {}", msg.subject)));
            continue;
        }
        msg.read = true;
        result.add_message(CmdMessage::success(format!(
            "Marked as read: {}",
            msg.subject
        )));
        result.contacts.push(msg.clone());
    }

    store.save(&catalog)?;
    Ok(result)
}
