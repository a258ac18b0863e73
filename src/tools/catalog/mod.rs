//! Static catalog of SendGrid v3 endpoints, one tool per endpoint.

mod account;
mod activity;
mod api_keys;
mod ips;
mod mail;
mod marketing;
mod sender_auth;
mod senders;
mod settings;
mod stats;
mod subusers;
mod suppressions;
mod teammates;
mod templates;
mod webhooks;

use crate::types::EndpointDescriptor;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Every area table, in listing order.
const AREAS: &[&[EndpointDescriptor]] = &[
    api_keys::ENDPOINTS,
    account::ENDPOINTS,
    teammates::ENDPOINTS,
    subusers::ENDPOINTS,
    mail::ENDPOINTS,
    templates::ENDPOINTS,
    marketing::ENDPOINTS,
    senders::ENDPOINTS,
    suppressions::ENDPOINTS,
    stats::ENDPOINTS,
    activity::ENDPOINTS,
    ips::ENDPOINTS,
    sender_auth::ENDPOINTS,
    settings::ENDPOINTS,
    webhooks::ENDPOINTS,
];

/// Iterate every endpoint descriptor.
pub fn all() -> impl Iterator<Item = &'static EndpointDescriptor> {
    AREAS.iter().flat_map(|area| area.iter())
}

/// Look up a descriptor by tool name.
pub fn find(name: &str) -> Option<&'static EndpointDescriptor> {
    static INDEX: OnceLock<HashMap<&'static str, &'static EndpointDescriptor>> = OnceLock::new();
    INDEX
        .get_or_init(|| all().map(|d| (d.name, d)).collect())
        .get(name)
        .copied()
}

pub fn len() -> usize {
    AREAS.iter().map(|area| area.len()).sum()
}
