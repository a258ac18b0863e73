use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Delete, Get, Patch, Post};
use crate::types::ParamKind::{Integer, Object, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    // -- Marketing senders ----------------------------------------------------
    EndpointDescriptor {
        name: "list_senders",
        description: "Retrieve all sender identities.",
        method: Get,
        path: "/v3/senders",
        params: &[],
    },
    EndpointDescriptor {
        name: "create_sender",
        description: "Create a sender identity.",
        method: Post,
        path: "/v3/senders",
        params: &[
            P::body("nickname", Str, "Label for the sender.").required(),
            P::body("from", Object, "From address, as {email, name}.").required(),
            P::body("reply_to", Object, "Reply-to address, as {email, name}.").required(),
            P::body("address", Str, "Physical street address.").required(),
            P::body("address_2", Str, "Second address line."),
            P::body("city", Str, "City.").required(),
            P::body("state", Str, "State or region."),
            P::body("zip", Str, "Postal code."),
            P::body("country", Str, "Country.").required(),
        ],
    },
    EndpointDescriptor {
        name: "get_sender",
        description: "Retrieve a sender identity.",
        method: Get,
        path: "/v3/senders/{sender_id}",
        params: &[P::path("sender_id", "ID of the sender.")],
    },
    EndpointDescriptor {
        name: "update_sender",
        description: "Update a sender identity.",
        method: Patch,
        path: "/v3/senders/{sender_id}",
        params: &[
            P::path("sender_id", "ID of the sender."),
            P::body("nickname", Str, "Label for the sender."),
            P::body("from", Object, "From address, as {email, name}."),
            P::body("reply_to", Object, "Reply-to address, as {email, name}."),
            P::body("address", Str, "Physical street address."),
            P::body("address_2", Str, "Second address line."),
            P::body("city", Str, "City."),
            P::body("state", Str, "State or region."),
            P::body("zip", Str, "Postal code."),
            P::body("country", Str, "Country."),
        ],
    },
    EndpointDescriptor {
        name: "delete_sender",
        description: "Delete a sender identity.",
        method: Delete,
        path: "/v3/senders/{sender_id}",
        params: &[P::path("sender_id", "ID of the sender.")],
    },
    EndpointDescriptor {
        name: "resend_sender_verification",
        description: "Resend the verification email for a sender identity.",
        method: Post,
        path: "/v3/senders/{sender_id}/resend_verification",
        params: &[P::path("sender_id", "ID of the sender.")],
    },
    // -- Verified senders -----------------------------------------------------
    EndpointDescriptor {
        name: "list_verified_senders",
        description: "Retrieve single-sender verification requests.",
        method: Get,
        path: "/v3/verified_senders",
        params: &[
            P::query("limit", Integer, "Number of senders to return."),
            P::query("lastSeenID", Integer, "Return senders after this ID."),
            P::query("id", Integer, "Return only this sender."),
        ],
    },
    EndpointDescriptor {
        name: "create_verified_sender",
        description: "Create a single sender and send its verification email.",
        method: Post,
        path: "/v3/verified_senders",
        params: &[
            P::body("nickname", Str, "Label for the sender.").required(),
            P::body("from_email", Str, "From address.").required(),
            P::body("from_name", Str, "From display name."),
            P::body("reply_to", Str, "Reply-to address.").required(),
            P::body("reply_to_name", Str, "Reply-to display name."),
            P::body("address", Str, "Physical street address."),
            P::body("address2", Str, "Second address line."),
            P::body("state", Str, "State or region."),
            P::body("city", Str, "City."),
            P::body("zip", Str, "Postal code."),
            P::body("country", Str, "Country."),
        ],
    },
    EndpointDescriptor {
        name: "update_verified_sender",
        description: "Update a single sender.",
        method: Patch,
        path: "/v3/verified_senders/{id}",
        params: &[
            P::path("id", "ID of the sender."),
            P::body("nickname", Str, "Label for the sender."),
            P::body("from_email", Str, "From address."),
            P::body("from_name", Str, "From display name."),
            P::body("reply_to", Str, "Reply-to address."),
            P::body("reply_to_name", Str, "Reply-to display name."),
            P::body("address", Str, "Physical street address."),
            P::body("address2", Str, "Second address line."),
            P::body("state", Str, "State or region."),
            P::body("city", Str, "City."),
            P::body("zip", Str, "Postal code."),
            P::body("country", Str, "Country."),
        ],
    },
    EndpointDescriptor {
        name: "delete_verified_sender",
        description: "Delete a single sender.",
        method: Delete,
        path: "/v3/verified_senders/{id}",
        params: &[P::path("id", "ID of the sender.")],
    },
    EndpointDescriptor {
        name: "resend_verified_sender",
        description: "Resend the verification email for a single sender.",
        method: Post,
        path: "/v3/verified_senders/resend/{id}",
        params: &[P::path("id", "ID of the sender.")],
    },
    EndpointDescriptor {
        name: "verify_sender_token",
        description: "Complete single-sender verification with the emailed token.",
        method: Get,
        path: "/v3/verified_senders/verify/{token}",
        params: &[P::path("token", "Token from the verification email.")],
    },
    EndpointDescriptor {
        name: "get_verified_sender_domains",
        description: "List domains that cannot be used as single-sender from addresses.",
        method: Get,
        path: "/v3/verified_senders/domains",
        params: &[],
    },
    EndpointDescriptor {
        name: "get_verified_sender_steps",
        description: "Report whether domain authentication or a single sender is verified.",
        method: Get,
        path: "/v3/verified_senders/steps_completed",
        params: &[],
    },
];
