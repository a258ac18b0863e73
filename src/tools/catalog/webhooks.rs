use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Delete, Get, Patch, Post};
use crate::types::ParamKind::{Boolean, Integer, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    // -- Event webhook --------------------------------------------------------
    EndpointDescriptor {
        name: "get_event_webhook_settings",
        description: "Retrieve the event webhook configuration.",
        method: Get,
        path: "/v3/user/webhooks/event/settings",
        params: &[],
    },
    EndpointDescriptor {
        name: "update_event_webhook_settings",
        description: "Update the event webhook URL and the events it receives.",
        method: Patch,
        path: "/v3/user/webhooks/event/settings",
        params: &[
            P::body("enabled", Boolean, "Turn the webhook on or off."),
            P::body("url", Str, "URL events are posted to."),
            P::body("processed", Boolean, "Send processed events."),
            P::body("delivered", Boolean, "Send delivered events."),
            P::body("deferred", Boolean, "Send deferred events."),
            P::body("dropped", Boolean, "Send dropped events."),
            P::body("bounce", Boolean, "Send bounce events."),
            P::body("open", Boolean, "Send open events."),
            P::body("click", Boolean, "Send click events."),
            P::body("spam_report", Boolean, "Send spam report events."),
            P::body("unsubscribe", Boolean, "Send unsubscribe events."),
            P::body("group_unsubscribe", Boolean, "Send group unsubscribe events."),
            P::body("group_resubscribe", Boolean, "Send group resubscribe events."),
            P::body("oauth_client_id", Str, "OAuth client ID for the webhook."),
            P::body("oauth_client_secret", Str, "OAuth client secret for the webhook."),
            P::body("oauth_token_url", Str, "OAuth token URL for the webhook."),
        ],
    },
    EndpointDescriptor {
        name: "test_event_webhook",
        description: "Post a fake event to a webhook URL.",
        method: Post,
        path: "/v3/user/webhooks/event/test",
        params: &[
            P::body("url", Str, "URL to post the test event to.").required(),
            P::body("oauth_client_id", Str, "OAuth client ID."),
            P::body("oauth_client_secret", Str, "OAuth client secret."),
            P::body("oauth_token_url", Str, "OAuth token URL."),
        ],
    },
    EndpointDescriptor {
        name: "get_signed_webhook_public_key",
        description: "Retrieve the public key used to verify signed events.",
        method: Get,
        path: "/v3/user/webhooks/event/settings/signed",
        params: &[],
    },
    EndpointDescriptor {
        name: "toggle_signed_webhook",
        description: "Turn event webhook signature verification on or off.",
        method: Patch,
        path: "/v3/user/webhooks/event/settings/signed",
        params: &[P::body("enabled", Boolean, "Sign webhook requests.").required()],
    },
    // -- Inbound parse --------------------------------------------------------
    EndpointDescriptor {
        name: "list_parse_settings",
        description: "Retrieve inbound parse settings.",
        method: Get,
        path: "/v3/user/webhooks/parse/settings",
        params: &[],
    },
    EndpointDescriptor {
        name: "create_parse_setting",
        description: "Create an inbound parse setting.",
        method: Post,
        path: "/v3/user/webhooks/parse/settings",
        params: &[
            P::body("hostname", Str, "Hostname receiving inbound mail.").required(),
            P::body("url", Str, "URL parsed mail is posted to.").required(),
            P::body("spam_check", Boolean, "Check inbound mail for spam."),
            P::body("send_raw", Boolean, "Post the raw MIME message."),
        ],
    },
    EndpointDescriptor {
        name: "get_parse_setting",
        description: "Retrieve an inbound parse setting.",
        method: Get,
        path: "/v3/user/webhooks/parse/settings/{hostname}",
        params: &[P::path("hostname", "Hostname of the setting.")],
    },
    EndpointDescriptor {
        name: "update_parse_setting",
        description: "Update an inbound parse setting.",
        method: Patch,
        path: "/v3/user/webhooks/parse/settings/{hostname}",
        params: &[
            P::path("hostname", "Hostname of the setting."),
            P::body("url", Str, "URL parsed mail is posted to."),
            P::body("spam_check", Boolean, "Check inbound mail for spam."),
            P::body("send_raw", Boolean, "Post the raw MIME message."),
        ],
    },
    EndpointDescriptor {
        name: "delete_parse_setting",
        description: "Delete an inbound parse setting.",
        method: Delete,
        path: "/v3/user/webhooks/parse/settings/{hostname}",
        params: &[P::path("hostname", "Hostname of the setting.")],
    },
    EndpointDescriptor {
        name: "get_parse_stats",
        description: "Retrieve inbound parse statistics.",
        method: Get,
        path: "/v3/user/webhooks/parse/stats",
        params: &[
            P::query("start_date", Str, "Start date, YYYY-MM-DD.").required(),
            P::query("end_date", Str, "End date, YYYY-MM-DD."),
            P::query("aggregated_by", Str, "day, week or month."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
        ],
    },
];
