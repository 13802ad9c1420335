// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the bottom-right corner to confirm a
//! waitlist signup or warn about bad input and unreadable settings, without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::i18n::keys;
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success(keys::WAITLIST_ALERT).with_subject(email));
//!
//! // In the view function, render toasts above the page
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 3s for success/info, 5s for warnings, manual dismiss for errors
//! - Max visible toasts: 3 (others are queued)
//! - Position: bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
