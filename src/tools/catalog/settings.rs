use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Get, Patch};
use crate::types::ParamKind::{Array, Boolean, Integer, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    // -- Mail settings --------------------------------------------------------
    EndpointDescriptor {
        name: "list_mail_settings",
        description: "Retrieve a summary of all mail settings.",
        method: Get,
        path: "/v3/mail_settings",
        params: &[
            P::query("limit", Integer, "Number of settings to return."),
            P::query("offset", Integer, "Number of settings to skip."),
        ],
    },
    EndpointDescriptor {
        name: "get_address_whitelist_settings",
        description: "Retrieve the address allow-list mail setting.",
        method: Get,
        path: "/v3/mail_settings/address_whitelist",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_address_whitelist_settings",
        description: "Update the address allow-list mail setting.",
        method: Patch,
        path: "/v3/mail_settings/address_whitelist",
        params: &[
            P::body("enabled", Boolean, "Turn the setting on or off."),
            P::body("list", Array, "Addresses or domains that bypass suppressions."),
        ],
    },
    EndpointDescriptor {
        name: "get_bounce_purge_settings",
        description: "Retrieve the bounce purge mail setting.",
        method: Get,
        path: "/v3/mail_settings/bounce_purge",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_bounce_purge_settings",
        description: "Update the bounce purge mail setting.",
        method: Patch,
        path: "/v3/mail_settings/bounce_purge",
        params: &[
            P::body("enabled", Boolean, "Turn the setting on or off."),
            P::body("soft_bounces", Integer, "Days before soft bounces are purged."),
            P::body("hard_bounces", Integer, "Days before hard bounces are purged."),
        ],
    },
    EndpointDescriptor {
        name: "get_footer_settings",
        description: "Retrieve the footer mail setting.",
        method: Get,
        path: "/v3/mail_settings/footer",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_footer_settings",
        description: "Update the footer mail setting.",
        method: Patch,
        path: "/v3/mail_settings/footer",
        params: &[
            P::body("enabled", Boolean, "Turn the setting on or off."),
            P::body("html_content", Str, "HTML footer."),
            P::body("plain_content", Str, "Plain-text footer."),
        ],
    },
    EndpointDescriptor {
        name: "get_forward_bounce_settings",
        description: "Retrieve the forward bounce mail setting.",
        method: Get,
        path: "/v3/mail_settings/forward_bounce",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_forward_bounce_settings",
        description: "Update the forward bounce mail setting.",
        method: Patch,
        path: "/v3/mail_settings/forward_bounce",
        params: &[
            P::body("enabled", Boolean, "Turn the setting on or off."),
            P::body("email", Str, "Address bounces are forwarded to."),
        ],
    },
    EndpointDescriptor {
        name: "get_forward_spam_settings",
        description: "Retrieve the forward spam mail setting.",
        method: Get,
        path: "/v3/mail_settings/forward_spam",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_forward_spam_settings",
        description: "Update the forward spam mail setting.",
        method: Patch,
        path: "/v3/mail_settings/forward_spam",
        params: &[
            P::body("enabled", Boolean, "Turn the setting on or off."),
            P::body("email", Str, "Comma-separated addresses spam reports go to."),
        ],
    },
    EndpointDescriptor {
        name: "get_template_mail_settings",
        description: "Retrieve the legacy template mail setting.",
        method: Get,
        path: "/v3/mail_settings/template",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_template_mail_settings",
        description: "Update the legacy template mail setting.",
        method: Patch,
        path: "/v3/mail_settings/template",
        params: &[
            P::body("enabled", Boolean, "Turn the setting on or off."),
            P::body("html_content", Str, "Wrapper HTML; must contain <% body %>."),
        ],
    },
    // -- Tracking settings ----------------------------------------------------
    EndpointDescriptor {
        name: "list_tracking_settings",
        description: "Retrieve a summary of all tracking settings.",
        method: Get,
        path: "/v3/tracking_settings",
        params: &[
            P::query("limit", Integer, "Number of settings to return."),
            P::query("offset", Integer, "Number of settings to skip."),
        ],
    },
    EndpointDescriptor {
        name: "get_click_tracking_settings",
        description: "Retrieve the click tracking setting.",
        method: Get,
        path: "/v3/tracking_settings/click",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_click_tracking_settings",
        description: "Turn click tracking on or off.",
        method: Patch,
        path: "/v3/tracking_settings/click",
        params: &[P::body("enabled", Boolean, "Turn click tracking on or off.")],
    },
    EndpointDescriptor {
        name: "get_open_tracking_settings",
        description: "Retrieve the open tracking setting.",
        method: Get,
        path: "/v3/tracking_settings/open",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_open_tracking_settings",
        description: "Turn open tracking on or off.",
        method: Patch,
        path: "/v3/tracking_settings/open",
        params: &[P::body("enabled", Boolean, "Turn open tracking on or off.")],
    },
    EndpointDescriptor {
        name: "get_subscription_tracking_settings",
        description: "Retrieve the subscription tracking setting.",
        method: Get,
        path: "/v3/tracking_settings/subscription",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_subscription_tracking_settings",
        description: "Update the subscription tracking setting.",
        method: Patch,
        path: "/v3/tracking_settings/subscription",
        params: &[
            P::body("enabled", Boolean, "Turn subscription tracking on or off."),
            P::body("html_content", Str, "HTML unsubscribe footer."),
            P::body("plain_content", Str, "Plain-text unsubscribe footer."),
            P::body("landing", Str, "HTML of the landing page."),
            P::body("replace", Str, "Tag replaced with the unsubscribe link."),
            P::body("url", Str, "Custom unsubscribe URL."),
        ],
    },
    EndpointDescriptor {
        name: "get_google_analytics_settings",
        description: "Retrieve the Google Analytics tracking setting.",
        method: Get,
        path: "/v3/tracking_settings/google_analytics",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_google_analytics_settings",
        description: "Update the Google Analytics tracking setting.",
        method: Patch,
        path: "/v3/tracking_settings/google_analytics",
        params: &[
            P::body("enabled", Boolean, "Turn Google Analytics tracking on or off."),
            P::body("utm_source", Str, "utm_source value."),
            P::body("utm_medium", Str, "utm_medium value."),
            P::body("utm_campaign", Str, "utm_campaign value."),
            P::body("utm_term", Str, "utm_term value."),
            P::body("utm_content", Str, "utm_content value."),
        ],
    },
];
