use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Get, Post, Put};
use crate::types::ParamKind::{Integer, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    // -- Email activity -------------------------------------------------------
    EndpointDescriptor {
        name: "list_messages",
        description: "Filter recent messages with an activity query.",
        method: Get,
        path: "/v3/messages",
        params: &[
            P::query("query", Str, "Activity filter, e.g. status=\"delivered\".").required(),
            P::query("limit", Integer, "Number of messages to return (max 1000)."),
        ],
    },
    EndpointDescriptor {
        name: "get_message",
        description: "Retrieve the event history of one message.",
        method: Get,
        path: "/v3/messages/{msg_id}",
        params: &[P::path("msg_id", "ID of the message.")],
    },
    EndpointDescriptor {
        name: "request_messages_csv",
        description: "Request a CSV export of messages matching a query.",
        method: Post,
        path: "/v3/messages/download",
        params: &[P::query("query", Str, "Activity filter to export.")],
    },
    EndpointDescriptor {
        name: "download_messages_csv",
        description: "Retrieve the presigned URL of a requested CSV export.",
        method: Get,
        path: "/v3/messages/download/{download_uuid}",
        params: &[P::path("download_uuid", "UUID from the export email.")],
    },
    // -- Email validation -----------------------------------------------------
    EndpointDescriptor {
        name: "validate_email",
        description: "Check a single address for deliverability.",
        method: Post,
        path: "/v3/validations/email",
        params: &[
            P::body("email", Str, "Address to validate.").required(),
            P::body("source", Str, "Label recorded with the validation."),
        ],
    },
    EndpointDescriptor {
        name: "list_email_validation_jobs",
        description: "Retrieve bulk email validation jobs.",
        method: Get,
        path: "/v3/validations/email/jobs",
        params: &[],
    },
    EndpointDescriptor {
        name: "create_email_validation_job",
        description: "Request an upload URL for a bulk validation file.",
        method: Put,
        path: "/v3/validations/email/jobs",
        params: &[P::body("file_type", Str, "csv or zip.").required()],
    },
    EndpointDescriptor {
        name: "get_email_validation_job",
        description: "Retrieve the status of a bulk validation job.",
        method: Get,
        path: "/v3/validations/email/jobs/{job_id}",
        params: &[P::path("job_id", "ID of the validation job.")],
    },
];
