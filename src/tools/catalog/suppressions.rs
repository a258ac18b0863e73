use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Delete, Get, Patch, Post};
use crate::types::ParamKind::{Array, Boolean, Integer, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    // -- Bounces --------------------------------------------------------------
    EndpointDescriptor {
        name: "list_bounces",
        description: "Retrieve bounced addresses.",
        method: Get,
        path: "/v3/suppression/bounces",
        params: &[
            P::query("start_time", Integer, "Unix timestamp to start from."),
            P::query("end_time", Integer, "Unix timestamp to end at."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
            P::query("email", Str, "Filter by address prefix."),
        ],
    },
    EndpointDescriptor {
        name: "delete_bounces",
        description: "Remove several addresses, or all, from the bounce list.",
        method: Delete,
        path: "/v3/suppression/bounces",
        params: &[
            P::body("delete_all", Boolean, "Remove every bounce."),
            P::body("emails", Array, "Addresses to remove."),
        ],
    },
    EndpointDescriptor {
        name: "get_bounce",
        description: "Retrieve the bounce record for one address.",
        method: Get,
        path: "/v3/suppression/bounces/{email}",
        params: &[P::path("email", "Bounced address.")],
    },
    EndpointDescriptor {
        name: "delete_bounce",
        description: "Remove one address from the bounce list.",
        method: Delete,
        path: "/v3/suppression/bounces/{email}",
        params: &[P::path("email", "Bounced address.")],
    },
    // -- Blocks ---------------------------------------------------------------
    EndpointDescriptor {
        name: "list_blocks",
        description: "Retrieve blocked addresses.",
        method: Get,
        path: "/v3/suppression/blocks",
        params: &[
            P::query("start_time", Integer, "Unix timestamp to start from."),
            P::query("end_time", Integer, "Unix timestamp to end at."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
            P::query("email", Str, "Filter by address prefix."),
        ],
    },
    EndpointDescriptor {
        name: "delete_blocks",
        description: "Remove several addresses, or all, from the block list.",
        method: Delete,
        path: "/v3/suppression/blocks",
        params: &[
            P::body("delete_all", Boolean, "Remove every block."),
            P::body("emails", Array, "Addresses to remove."),
        ],
    },
    EndpointDescriptor {
        name: "get_block",
        description: "Retrieve the block record for one address.",
        method: Get,
        path: "/v3/suppression/blocks/{email}",
        params: &[P::path("email", "Blocked address.")],
    },
    EndpointDescriptor {
        name: "delete_block",
        description: "Remove one address from the block list.",
        method: Delete,
        path: "/v3/suppression/blocks/{email}",
        params: &[P::path("email", "Blocked address.")],
    },
    // -- Spam reports ---------------------------------------------------------
    EndpointDescriptor {
        name: "list_spam_reports",
        description: "Retrieve addresses that reported mail as spam.",
        method: Get,
        path: "/v3/suppression/spam_reports",
        params: &[
            P::query("start_time", Integer, "Unix timestamp to start from."),
            P::query("end_time", Integer, "Unix timestamp to end at."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
            P::query("email", Str, "Filter by address prefix."),
        ],
    },
    EndpointDescriptor {
        name: "delete_spam_reports",
        description: "Remove several addresses, or all, from the spam report list.",
        method: Delete,
        path: "/v3/suppression/spam_reports",
        params: &[
            P::body("delete_all", Boolean, "Remove every spam report."),
            P::body("emails", Array, "Addresses to remove."),
        ],
    },
    EndpointDescriptor {
        name: "get_spam_report",
        description: "Retrieve the spam report for one address.",
        method: Get,
        path: "/v3/suppression/spam_reports/{email}",
        params: &[P::path("email", "Reporting address.")],
    },
    EndpointDescriptor {
        name: "delete_spam_report",
        description: "Remove one address from the spam report list.",
        method: Delete,
        path: "/v3/suppression/spam_reports/{email}",
        params: &[P::path("email", "Reporting address.")],
    },
    // -- Invalid emails -------------------------------------------------------
    EndpointDescriptor {
        name: "list_invalid_emails",
        description: "Retrieve addresses rejected as invalid.",
        method: Get,
        path: "/v3/suppression/invalid_emails",
        params: &[
            P::query("start_time", Integer, "Unix timestamp to start from."),
            P::query("end_time", Integer, "Unix timestamp to end at."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
            P::query("email", Str, "Filter by address prefix."),
        ],
    },
    EndpointDescriptor {
        name: "delete_invalid_emails",
        description: "Remove several addresses, or all, from the invalid email list.",
        method: Delete,
        path: "/v3/suppression/invalid_emails",
        params: &[
            P::body("delete_all", Boolean, "Remove every invalid email."),
            P::body("emails", Array, "Addresses to remove."),
        ],
    },
    EndpointDescriptor {
        name: "get_invalid_email",
        description: "Retrieve the invalid email record for one address.",
        method: Get,
        path: "/v3/suppression/invalid_emails/{email}",
        params: &[P::path("email", "Invalid address.")],
    },
    EndpointDescriptor {
        name: "delete_invalid_email",
        description: "Remove one address from the invalid email list.",
        method: Delete,
        path: "/v3/suppression/invalid_emails/{email}",
        params: &[P::path("email", "Invalid address.")],
    },
    // -- Global unsubscribes --------------------------------------------------
    EndpointDescriptor {
        name: "list_global_suppressions",
        description: "Retrieve globally unsubscribed addresses.",
        method: Get,
        path: "/v3/suppression/unsubscribes",
        params: &[
            P::query("start_time", Integer, "Unix timestamp to start from."),
            P::query("end_time", Integer, "Unix timestamp to end at."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
            P::query("email", Str, "Filter by address prefix."),
        ],
    },
    EndpointDescriptor {
        name: "add_global_suppressions",
        description: "Add addresses to the global unsubscribe list.",
        method: Post,
        path: "/v3/asm/suppressions/global",
        params: &[P::body("recipient_emails", Array, "Addresses to suppress.").required()],
    },
    EndpointDescriptor {
        name: "get_global_suppression",
        description: "Check whether an address is globally unsubscribed.",
        method: Get,
        path: "/v3/asm/suppressions/global/{email}",
        params: &[P::path("email", "Address to check.")],
    },
    EndpointDescriptor {
        name: "delete_global_suppression",
        description: "Remove an address from the global unsubscribe list.",
        method: Delete,
        path: "/v3/asm/suppressions/global/{email}",
        params: &[P::path("email", "Address to remove.")],
    },
    // -- Unsubscribe groups ---------------------------------------------------
    EndpointDescriptor {
        name: "list_suppression_groups",
        description: "Retrieve unsubscribe groups.",
        method: Get,
        path: "/v3/asm/groups",
        params: &[P::query("id", Integer, "Only return this group.")],
    },
    EndpointDescriptor {
        name: "create_suppression_group",
        description: "Create an unsubscribe group.",
        method: Post,
        path: "/v3/asm/groups",
        params: &[
            P::body("name", Str, "Name shown to recipients.").required(),
            P::body("description", Str, "Description shown to recipients.").required(),
            P::body("is_default", Boolean, "Make this the default group."),
        ],
    },
    EndpointDescriptor {
        name: "get_suppression_group",
        description: "Retrieve an unsubscribe group.",
        method: Get,
        path: "/v3/asm/groups/{group_id}",
        params: &[P::path("group_id", "ID of the group.")],
    },
    EndpointDescriptor {
        name: "update_suppression_group",
        description: "Update an unsubscribe group.",
        method: Patch,
        path: "/v3/asm/groups/{group_id}",
        params: &[
            P::path("group_id", "ID of the group."),
            P::body("name", Str, "Name shown to recipients."),
            P::body("description", Str, "Description shown to recipients."),
            P::body("is_default", Boolean, "Make this the default group."),
        ],
    },
    EndpointDescriptor {
        name: "delete_suppression_group",
        description: "Delete an unsubscribe group.",
        method: Delete,
        path: "/v3/asm/groups/{group_id}",
        params: &[P::path("group_id", "ID of the group.")],
    },
    EndpointDescriptor {
        name: "list_group_suppressions",
        description: "Retrieve addresses unsubscribed from a group.",
        method: Get,
        path: "/v3/asm/groups/{group_id}/suppressions",
        params: &[P::path("group_id", "ID of the group.")],
    },
    EndpointDescriptor {
        name: "add_group_suppressions",
        description: "Unsubscribe addresses from a group.",
        method: Post,
        path: "/v3/asm/groups/{group_id}/suppressions",
        params: &[
            P::path("group_id", "ID of the group."),
            P::body("recipient_emails", Array, "Addresses to suppress.").required(),
        ],
    },
    EndpointDescriptor {
        name: "search_group_suppressions",
        description: "Check which of the given addresses are unsubscribed from a group.",
        method: Post,
        path: "/v3/asm/groups/{group_id}/suppressions/search",
        params: &[
            P::path("group_id", "ID of the group."),
            P::body("recipient_emails", Array, "Addresses to check.").required(),
        ],
    },
    EndpointDescriptor {
        name: "delete_group_suppression",
        description: "Resubscribe an address to a group.",
        method: Delete,
        path: "/v3/asm/groups/{group_id}/suppressions/{email}",
        params: &[
            P::path("group_id", "ID of the group."),
            P::path("email", "Address to resubscribe."),
        ],
    },
    EndpointDescriptor {
        name: "list_all_suppressions",
        description: "Retrieve every group suppression on the account.",
        method: Get,
        path: "/v3/asm/suppressions",
        params: &[],
    },
    EndpointDescriptor {
        name: "get_email_suppressions",
        description: "Retrieve every group an address is unsubscribed from.",
        method: Get,
        path: "/v3/asm/suppressions/{email}",
        params: &[P::path("email", "Address to look up.")],
    },
];
