//! Shared test utilities.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use taskstore::tasks::{Task, TaskId};

/// Records labels in the order observers fire.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    /// An observer closure that appends `label` on every notification.
    pub fn observer(&self, label: &str) -> impl Fn() {
        let events = Rc::clone(&self.events);
        let label = label.to_string();
        move || events.borrow_mut().push(label.clone())
    }

    /// Append one event directly.
    pub fn push(&self, label: &str) {
        self.events.borrow_mut().push(label.to_string());
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn count_of(&self, label: &str) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.as_str() == label)
            .count()
    }
}

pub fn task(id: u64, text: &str, completed: bool) -> Task {
    Task {
        id: TaskId::new(id),
        text: text.to_string(),
        completed,
    }
}
