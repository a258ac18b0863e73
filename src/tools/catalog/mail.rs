use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Delete, Get, Patch, Post};
use crate::types::ParamKind::{Array, Integer, Object, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        name: "send_mail",
        description: "Send an email through the v3 Mail Send API.",
        method: Post,
        path: "/v3/mail/send",
        params: &[
            P::body("personalizations", Array, "Recipients and per-recipient substitutions.").required(),
            P::body("from", Object, "Sender, as {email, name}.").required(),
            P::body("subject", Str, "Subject line, unless set per personalization."),
            P::body("content", Array, "Message bodies, as [{type, value}]."),
            P::body("template_id", Str, "Dynamic template to render."),
            P::body("reply_to", Object, "Reply-to address, as {email, name}."),
            P::body("reply_to_list", Array, "Multiple reply-to addresses."),
            P::body("attachments", Array, "Base64-encoded attachments."),
            P::body("categories", Array, "Categories for statistics."),
            P::body("headers", Object, "Extra message headers."),
            P::body("custom_args", Object, "Values passed back in event webhooks."),
            P::body("send_at", Integer, "Unix timestamp to deliver at."),
            P::body("batch_id", Str, "Batch used to cancel or pause the send."),
            P::body("asm", Object, "Unsubscribe group settings."),
            P::body("ip_pool_name", Str, "IP pool to send from."),
            P::body("mail_settings", Object, "Per-message mail settings."),
            P::body("tracking_settings", Object, "Per-message tracking settings."),
        ],
    },
    EndpointDescriptor {
        name: "create_batch_id",
        description: "Generate a batch ID for grouping scheduled sends.",
        method: Post,
        path: "/v3/mail/batch",
        params: &[],
    },
    EndpointDescriptor {
        name: "get_batch_id",
        description: "Validate that a batch ID exists.",
        method: Get,
        path: "/v3/mail/batch/{batch_id}",
        params: &[P::path("batch_id", "Batch ID to check.")],
    },
    EndpointDescriptor {
        name: "list_scheduled_sends",
        description: "Retrieve all cancelled or paused scheduled sends.",
        method: Get,
        path: "/v3/user/scheduled_sends",
        params: &[],
    },
    EndpointDescriptor {
        name: "create_scheduled_send_cancellation",
        description: "Cancel or pause every scheduled send in a batch.",
        method: Post,
        path: "/v3/user/scheduled_sends",
        params: &[
            P::body("batch_id", Str, "Batch to act on.").required(),
            P::body("status", Str, "cancel or pause.").required(),
        ],
    },
    EndpointDescriptor {
        name: "get_scheduled_send",
        description: "Retrieve the cancel/pause status of a batch.",
        method: Get,
        path: "/v3/user/scheduled_sends/{batch_id}",
        params: &[P::path("batch_id", "Batch ID.")],
    },
    EndpointDescriptor {
        name: "update_scheduled_send",
        description: "Switch a batch between cancelled and paused.",
        method: Patch,
        path: "/v3/user/scheduled_sends/{batch_id}",
        params: &[
            P::path("batch_id", "Batch ID."),
            P::body("status", Str, "cancel or pause.").required(),
        ],
    },
    EndpointDescriptor {
        name: "delete_scheduled_send",
        description: "Resume a cancelled or paused batch.",
        method: Delete,
        path: "/v3/user/scheduled_sends/{batch_id}",
        params: &[P::path("batch_id", "Batch ID.")],
    },
];
