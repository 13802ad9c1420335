// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::config::NOTIFICATION_TICK_MS;
use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick that drives toast auto-dismiss.
///
/// The tick only runs while notifications are on screen or queued.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
