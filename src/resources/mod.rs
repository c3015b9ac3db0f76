//! Typed resource gateways
//!
//! One client per record kind, all sharing the session-aware `HttpClient`:
//!
//! - `TasksApi` - hour-slotted day tasks
//! - `EventsApi` - calendar events
//! - `RemindersApi` - dated reminders
//!
//! Archive and restore are first-class operations on every kind; archived
//! records drop out of normal listings and show up in `list_archived`.

pub mod events;
pub mod reminders;
pub mod tasks;
pub mod types;

pub use events::EventsApi;
pub use reminders::RemindersApi;
pub use tasks::TasksApi;
pub use types::{
    Event, EventDraft, EventPatch, EventType, Priority, RecordStatus, Reminder, ReminderDraft,
    ReminderPatch, Task, TaskDraft, TaskPatch,
};
