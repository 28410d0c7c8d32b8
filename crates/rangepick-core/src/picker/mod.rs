//! The picker controller and the view contracts it drives.

mod callbacks;
mod chrome;
mod controller;
mod events;
pub mod headless;
mod listeners;
mod widget;


pub use callbacks::Callbacks;
pub use chrome::{ChromeEvent, ChromePanel, ChromeView, EMPTY_PLACEHOLDER};
pub use controller::DatePicker;
pub use events::PickerEvent;
pub use headless::{HeadlessChrome, HeadlessWidget};
pub use listeners::{
    selectors, ChromeListeners, EventKind, Listener, ListenerAction, ListenerRegistry,
    ListenerScope,
};
pub use widget::{CalendarWidget, WidgetSelected, WidgetSettings, DATES_SEPARATOR};
