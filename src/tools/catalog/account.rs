use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Delete, Get, Patch, Post, Put};
use crate::types::ParamKind::{Boolean, Integer, Number, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    // -- User account ---------------------------------------------------------
    EndpointDescriptor {
        name: "get_user_profile",
        description: "Retrieve the profile of the authenticated user.",
        method: Get,
        path: "/v3/user/profile",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_user_profile",
        description: "Update fields of the authenticated user's profile.",
        method: Patch,
        path: "/v3/user/profile",
        params: &[
            P::body("first_name", Str, "First name."),
            P::body("last_name", Str, "Last name."),
            P::body("address", Str, "Street address."),
            P::body("address2", Str, "Second address line."),
            P::body("city", Str, "City."),
            P::body("state", Str, "State or region."),
            P::body("zip", Str, "Postal code."),
            P::body("country", Str, "Country."),
            P::body("company", Str, "Company name."),
            P::body("website", Str, "Company website."),
            P::body("phone", Str, "Phone number."),
        ],
    },
    EndpointDescriptor {
        name: "get_user_account",
        description: "Retrieve the account type and reputation.",
        method: Get,
        path: "/v3/user/account",
        params: &[],
    },
    EndpointDescriptor {
        name: "get_user_email",
        description: "Retrieve the email address on file for the account.",
        method: Get,
        path: "/v3/user/email",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_user_email",
        description: "Change the email address on file for the account.",
        method: Put,
        path: "/v3/user/email",
        params: &[P::body("email", Str, "New email address.").required()],
    },
    EndpointDescriptor {
        name: "get_user_username",
        description: "Retrieve the account username.",
        method: Get,
        path: "/v3/user/username",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_user_username",
        description: "Change the account username.",
        method: Put,
        path: "/v3/user/username",
        params: &[P::body("username", Str, "New username.").required()],
    },
    EndpointDescriptor {
        name: "get_user_credits",
        description: "Retrieve the remaining and used email credits.",
        method: Get,
        path: "/v3/user/credits",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_user_password",
        description: "Change the account password.",
        method: Put,
        path: "/v3/user/password",
        params: &[
            P::body("new_password", Str, "The new password.").required(),
            P::body("old_password", Str, "The current password.").required(),
        ],
    },
    EndpointDescriptor {
        name: "get_enforced_tls_settings",
        description: "Retrieve the enforced TLS settings for outbound mail.",
        method: Get,
        path: "/v3/user/settings/enforced_tls",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_enforced_tls_settings",
        description: "Update the enforced TLS settings for outbound mail.",
        method: Patch,
        path: "/v3/user/settings/enforced_tls",
        params: &[
            P::body("require_tls", Boolean, "Require recipients to support TLS."),
            P::body("require_valid_cert", Boolean, "Require recipients to present a valid certificate."),
            P::body("version", Number, "Minimum TLS version (1.1, 1.2 or 1.3)."),
        ],
    },
    // -- Alerts ---------------------------------------------------------------
    EndpointDescriptor {
        name: "list_alerts",
        description: "Retrieve all usage and stats alerts.",
        method: Get,
        path: "/v3/alerts",
        params: &[],
    },
    EndpointDescriptor {
        name: "create_alert",
        description: "Create a usage-limit or stats-notification alert.",
        method: Post,
        path: "/v3/alerts",
        params: &[
            P::body("type", Str, "usage_limit or stats_notification.").required(),
            P::body("email_to", Str, "Address that receives the alert.").required(),
            P::body("frequency", Str, "daily, weekly or monthly (stats notifications)."),
            P::body("percentage", Integer, "Usage percentage that triggers the alert."),
        ],
    },
    EndpointDescriptor {
        name: "get_alert",
        description: "Retrieve a single alert.",
        method: Get,
        path: "/v3/alerts/{alert_id}",
        params: &[P::path("alert_id", "ID of the alert.")],
    },
    EndpointDescriptor {
        name: "update_alert",
        description: "Update an existing alert.",
        method: Patch,
        path: "/v3/alerts/{alert_id}",
        params: &[
            P::path("alert_id", "ID of the alert."),
            P::body("email_to", Str, "Address that receives the alert."),
            P::body("frequency", Str, "daily, weekly or monthly."),
            P::body("percentage", Integer, "Usage percentage that triggers the alert."),
        ],
    },
    EndpointDescriptor {
        name: "delete_alert",
        description: "Delete an alert.",
        method: Delete,
        path: "/v3/alerts/{alert_id}",
        params: &[P::path("alert_id", "ID of the alert.")],
    },
    // -- Partner settings -----------------------------------------------------
    EndpointDescriptor {
        name: "list_partner_settings",
        description: "Retrieve all partner settings.",
        method: Get,
        path: "/v3/partner_settings",
        params: &[
            P::query("limit", Integer, "Number of settings to return."),
            P::query("offset", Integer, "Number of settings to skip."),
        ],
    },
];
