//! Checkout by chat message.
//!
//! There is no payment flow: checkout formats the cart as a text message and
//! wraps it in a WhatsApp deep link.

pub mod link;
pub mod message;
