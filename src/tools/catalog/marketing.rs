use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Delete, Get, Patch, Post, Put};
use crate::types::ParamKind::{Array, Boolean, Integer, Object, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    // -- Contacts -------------------------------------------------------------
    EndpointDescriptor {
        name: "list_contacts",
        description: "Retrieve a sample of up to 50 recent contacts.",
        method: Get,
        path: "/v3/marketing/contacts",
        params: &[],
    },
    EndpointDescriptor {
        name: "upsert_contacts",
        description: "Add or update contacts, optionally adding them to lists.",
        method: Put,
        path: "/v3/marketing/contacts",
        params: &[
            P::body("contacts", Array, "Contacts to upsert; each needs an email or identifier.").required(),
            P::body("list_ids", Array, "Lists the contacts are added to."),
        ],
    },
    EndpointDescriptor {
        name: "delete_contacts",
        description: "Delete contacts by ID, or every contact.",
        method: Delete,
        path: "/v3/marketing/contacts",
        params: &[
            P::query("ids", Str, "Comma-separated contact IDs."),
            P::query("delete_all_contacts", Str, "Set to \"true\" to delete every contact."),
        ],
    },
    EndpointDescriptor {
        name: "get_contact_count",
        description: "Retrieve the total and billable number of contacts.",
        method: Get,
        path: "/v3/marketing/contacts/count",
        params: &[],
    },
    EndpointDescriptor {
        name: "get_contact",
        description: "Retrieve a single contact by ID.",
        method: Get,
        path: "/v3/marketing/contacts/{id}",
        params: &[P::path("id", "ID of the contact.")],
    },
    EndpointDescriptor {
        name: "get_contacts_by_ids",
        description: "Retrieve up to 100 contacts by ID.",
        method: Post,
        path: "/v3/marketing/contacts/batch",
        params: &[P::body("ids", Array, "Contact IDs.").required()],
    },
    EndpointDescriptor {
        name: "search_contacts",
        description: "Search contacts with an SGQL query.",
        method: Post,
        path: "/v3/marketing/contacts/search",
        params: &[P::body("query", Str, "SGQL search expression.").required()],
    },
    EndpointDescriptor {
        name: "get_contacts_by_emails",
        description: "Retrieve contacts matching the given email addresses.",
        method: Post,
        path: "/v3/marketing/contacts/search/emails",
        params: &[P::body("emails", Array, "Email addresses to look up.").required()],
    },
    EndpointDescriptor {
        name: "list_contact_exports",
        description: "Retrieve all contact export jobs.",
        method: Get,
        path: "/v3/marketing/contacts/exports",
        params: &[],
    },
    EndpointDescriptor {
        name: "export_contacts",
        description: "Start an export of contacts to CSV or JSON.",
        method: Post,
        path: "/v3/marketing/contacts/exports",
        params: &[
            P::body("list_ids", Array, "Lists to export."),
            P::body("segment_ids", Array, "Segments to export."),
            P::body("notifications", Object, "Notification settings, e.g. {email: true}."),
            P::body("file_type", Str, "csv or json."),
            P::body("max_file_size", Integer, "Maximum size of each file in MB."),
        ],
    },
    EndpointDescriptor {
        name: "get_contact_export",
        description: "Retrieve the status and download URLs of an export.",
        method: Get,
        path: "/v3/marketing/contacts/exports/{id}",
        params: &[P::path("id", "ID of the export job.")],
    },
    EndpointDescriptor {
        name: "import_contacts",
        description: "Request an upload URL for a CSV contact import.",
        method: Put,
        path: "/v3/marketing/contacts/imports",
        params: &[
            P::body("file_type", Str, "Must be csv.").required(),
            P::body("field_mappings", Array, "Field IDs for each CSV column.").required(),
            P::body("list_ids", Array, "Lists the imported contacts join."),
        ],
    },
    EndpointDescriptor {
        name: "get_contact_import",
        description: "Retrieve the status of a contact import.",
        method: Get,
        path: "/v3/marketing/contacts/imports/{id}",
        params: &[P::path("id", "ID of the import job.")],
    },
    // -- Lists ----------------------------------------------------------------
    EndpointDescriptor {
        name: "list_lists",
        description: "Retrieve all contact lists.",
        method: Get,
        path: "/v3/marketing/lists",
        params: &[
            P::query("page_size", Integer, "Lists per page."),
            P::query("page_token", Str, "Token of the page to return."),
        ],
    },
    EndpointDescriptor {
        name: "create_list",
        description: "Create a contact list.",
        method: Post,
        path: "/v3/marketing/lists",
        params: &[P::body("name", Str, "Name of the list.").required()],
    },
    EndpointDescriptor {
        name: "get_list",
        description: "Retrieve a contact list.",
        method: Get,
        path: "/v3/marketing/lists/{id}",
        params: &[
            P::path("id", "ID of the list."),
            P::query("contact_sample", Boolean, "Include a sample of contacts."),
        ],
    },
    EndpointDescriptor {
        name: "update_list",
        description: "Rename a contact list.",
        method: Patch,
        path: "/v3/marketing/lists/{id}",
        params: &[
            P::path("id", "ID of the list."),
            P::body("name", Str, "New name of the list."),
        ],
    },
    EndpointDescriptor {
        name: "delete_list",
        description: "Delete a contact list.",
        method: Delete,
        path: "/v3/marketing/lists/{id}",
        params: &[
            P::path("id", "ID of the list."),
            P::query("delete_contacts", Boolean, "Also delete the list's contacts."),
        ],
    },
    EndpointDescriptor {
        name: "get_list_contact_count",
        description: "Retrieve the number of contacts on a list.",
        method: Get,
        path: "/v3/marketing/lists/{id}/contacts/count",
        params: &[P::path("id", "ID of the list.")],
    },
    EndpointDescriptor {
        name: "remove_contacts_from_list",
        description: "Remove contacts from a list without deleting them.",
        method: Delete,
        path: "/v3/marketing/lists/{id}/contacts",
        params: &[
            P::path("id", "ID of the list."),
            P::query("contact_ids", Str, "Comma-separated contact IDs.").required(),
        ],
    },
    // -- Custom fields --------------------------------------------------------
    EndpointDescriptor {
        name: "list_field_definitions",
        description: "Retrieve reserved and custom contact fields.",
        method: Get,
        path: "/v3/marketing/field_definitions",
        params: &[],
    },
    EndpointDescriptor {
        name: "create_field_definition",
        description: "Create a custom contact field.",
        method: Post,
        path: "/v3/marketing/field_definitions",
        params: &[
            P::body("name", Str, "Name of the field.").required(),
            P::body("field_type", Str, "Text, Number or Date.").required(),
        ],
    },
    EndpointDescriptor {
        name: "update_field_definition",
        description: "Rename a custom contact field.",
        method: Patch,
        path: "/v3/marketing/field_definitions/{custom_field_id}",
        params: &[
            P::path("custom_field_id", "ID of the custom field."),
            P::body("name", Str, "New name of the field.").required(),
        ],
    },
    EndpointDescriptor {
        name: "delete_field_definition",
        description: "Delete a custom contact field.",
        method: Delete,
        path: "/v3/marketing/field_definitions/{custom_field_id}",
        params: &[P::path("custom_field_id", "ID of the custom field.")],
    },
    // -- Segments -------------------------------------------------------------
    EndpointDescriptor {
        name: "list_segments",
        description: "Retrieve contact segments.",
        method: Get,
        path: "/v3/marketing/segments/2.0",
        params: &[
            P::query("ids", Array, "Only return these segment IDs."),
            P::query("parent_list_ids", Str, "Comma-separated parent list IDs."),
            P::query("no_parent_list_id", Boolean, "Only segments over all contacts."),
        ],
    },
    EndpointDescriptor {
        name: "create_segment",
        description: "Create a segment from an SQL query.",
        method: Post,
        path: "/v3/marketing/segments/2.0",
        params: &[
            P::body("name", Str, "Name of the segment.").required(),
            P::body("query_dsl", Str, "SQL defining the segment.").required(),
            P::body("parent_list_ids", Array, "List the segment draws from."),
        ],
    },
    EndpointDescriptor {
        name: "get_segment",
        description: "Retrieve a segment.",
        method: Get,
        path: "/v3/marketing/segments/2.0/{segment_id}",
        params: &[
            P::path("segment_id", "ID of the segment."),
            P::query("contacts_sample", Boolean, "Include a sample of contacts."),
        ],
    },
    EndpointDescriptor {
        name: "update_segment",
        description: "Rename a segment or change its query.",
        method: Patch,
        path: "/v3/marketing/segments/2.0/{segment_id}",
        params: &[
            P::path("segment_id", "ID of the segment."),
            P::body("name", Str, "New name of the segment."),
            P::body("query_dsl", Str, "New SQL definition."),
        ],
    },
    EndpointDescriptor {
        name: "delete_segment",
        description: "Delete a segment.",
        method: Delete,
        path: "/v3/marketing/segments/2.0/{segment_id}",
        params: &[P::path("segment_id", "ID of the segment.")],
    },
    EndpointDescriptor {
        name: "refresh_segment",
        description: "Trigger a manual refresh of a segment.",
        method: Post,
        path: "/v3/marketing/segments/2.0/refresh/{segment_id}",
        params: &[
            P::path("segment_id", "ID of the segment."),
            P::body("user_time_zone", Str, "IANA time zone of the requester.").required(),
        ],
    },
    // -- Single sends ---------------------------------------------------------
    EndpointDescriptor {
        name: "list_single_sends",
        description: "Retrieve single sends.",
        method: Get,
        path: "/v3/marketing/singlesends",
        params: &[
            P::query("page_size", Integer, "Single sends per page."),
            P::query("page_token", Str, "Token of the page to return."),
        ],
    },
    EndpointDescriptor {
        name: "create_single_send",
        description: "Create a single send draft.",
        method: Post,
        path: "/v3/marketing/singlesends",
        params: &[
            P::body("name", Str, "Name of the single send.").required(),
            P::body("categories", Array, "Categories for statistics."),
            P::body("send_at", Str, "ISO 8601 time to send at."),
            P::body("send_to", Object, "Recipients: list_ids, segment_ids or all."),
            P::body("email_config", Object, "Subject, content, sender and suppression settings."),
        ],
    },
    EndpointDescriptor {
        name: "delete_single_sends",
        description: "Delete several single sends at once.",
        method: Delete,
        path: "/v3/marketing/singlesends",
        params: &[P::query("ids", Array, "IDs of the single sends.")],
    },
    EndpointDescriptor {
        name: "get_single_send",
        description: "Retrieve a single send.",
        method: Get,
        path: "/v3/marketing/singlesends/{id}",
        params: &[P::path("id", "ID of the single send.")],
    },
    EndpointDescriptor {
        name: "duplicate_single_send",
        description: "Duplicate a single send.",
        method: Post,
        path: "/v3/marketing/singlesends/{id}",
        params: &[
            P::path("id", "ID of the single send."),
            P::body("name", Str, "Name of the copy."),
        ],
    },
    EndpointDescriptor {
        name: "update_single_send",
        description: "Update a single send draft.",
        method: Patch,
        path: "/v3/marketing/singlesends/{id}",
        params: &[
            P::path("id", "ID of the single send."),
            P::body("name", Str, "Name of the single send."),
            P::body("categories", Array, "Categories for statistics."),
            P::body("send_at", Str, "ISO 8601 time to send at."),
            P::body("send_to", Object, "Recipients: list_ids, segment_ids or all."),
            P::body("email_config", Object, "Subject, content, sender and suppression settings."),
        ],
    },
    EndpointDescriptor {
        name: "delete_single_send",
        description: "Delete a single send.",
        method: Delete,
        path: "/v3/marketing/singlesends/{id}",
        params: &[P::path("id", "ID of the single send.")],
    },
    EndpointDescriptor {
        name: "schedule_single_send",
        description: "Schedule a single send, or send it now.",
        method: Put,
        path: "/v3/marketing/singlesends/{id}/schedule",
        params: &[
            P::path("id", "ID of the single send."),
            P::body("send_at", Str, "ISO 8601 time, or \"now\".").required(),
        ],
    },
    EndpointDescriptor {
        name: "cancel_single_send_schedule",
        description: "Unschedule a single send, returning it to draft.",
        method: Delete,
        path: "/v3/marketing/singlesends/{id}/schedule",
        params: &[P::path("id", "ID of the single send.")],
    },
    EndpointDescriptor {
        name: "search_single_sends",
        description: "Search single sends by name, status or category.",
        method: Post,
        path: "/v3/marketing/singlesends/search",
        params: &[
            P::query("page_size", Integer, "Single sends per page."),
            P::query("page_token", Str, "Token of the page to return."),
            P::body("name", Str, "Substring of the name."),
            P::body("status", Array, "draft, scheduled or triggered."),
            P::body("categories", Array, "Categories to match."),
        ],
    },
    EndpointDescriptor {
        name: "list_single_send_categories",
        description: "Retrieve the categories used by single sends.",
        method: Get,
        path: "/v3/marketing/singlesends/categories",
        params: &[],
    },
    EndpointDescriptor {
        name: "send_marketing_test_email",
        description: "Send a test message for a marketing design or template.",
        method: Post,
        path: "/v3/marketing/test/send_email",
        params: &[
            P::body("template_id", Str, "Template to test.").required(),
            P::body("emails", Array, "Recipients of the test.").required(),
            P::body("version_id_override", Str, "Specific template version."),
            P::body("sender_id", Integer, "Sender identity to use."),
            P::body("custom_unsubscribe_url", Str, "Unsubscribe URL."),
            P::body("suppression_group_id", Integer, "Unsubscribe group."),
            P::body("from_address", Str, "Verified from address."),
        ],
    },
    // -- Designs --------------------------------------------------------------
    EndpointDescriptor {
        name: "list_designs",
        description: "Retrieve designs from the Design Library.",
        method: Get,
        path: "/v3/designs",
        params: &[
            P::query("page_size", Integer, "Designs per page."),
            P::query("page_token", Str, "Token of the page to return."),
            P::query("summary", Boolean, "Omit HTML and plain content."),
        ],
    },
    EndpointDescriptor {
        name: "create_design",
        description: "Create a design in the Design Library.",
        method: Post,
        path: "/v3/designs",
        params: &[
            P::body("html_content", Str, "HTML of the design.").required(),
            P::body("name", Str, "Name of the design."),
            P::body("editor", Str, "code or design."),
            P::body("plain_content", Str, "Plain-text version."),
            P::body("generate_plain_content", Boolean, "Derive plain text from the HTML."),
            P::body("subject", Str, "Subject line."),
            P::body("categories", Array, "Categories for organising designs."),
        ],
    },
    EndpointDescriptor {
        name: "get_design",
        description: "Retrieve a design.",
        method: Get,
        path: "/v3/designs/{id}",
        params: &[P::path("id", "ID of the design.")],
    },
    EndpointDescriptor {
        name: "duplicate_design",
        description: "Duplicate a design.",
        method: Post,
        path: "/v3/designs/{id}",
        params: &[
            P::path("id", "ID of the design."),
            P::body("name", Str, "Name of the copy."),
            P::body("editor", Str, "code or design."),
        ],
    },
    EndpointDescriptor {
        name: "update_design",
        description: "Edit a design.",
        method: Patch,
        path: "/v3/designs/{id}",
        params: &[
            P::path("id", "ID of the design."),
            P::body("name", Str, "Name of the design."),
            P::body("html_content", Str, "HTML of the design."),
            P::body("plain_content", Str, "Plain-text version."),
            P::body("generate_plain_content", Boolean, "Derive plain text from the HTML."),
            P::body("subject", Str, "Subject line."),
            P::body("categories", Array, "Categories for organising designs."),
        ],
    },
    EndpointDescriptor {
        name: "delete_design",
        description: "Delete a design.",
        method: Delete,
        path: "/v3/designs/{id}",
        params: &[P::path("id", "ID of the design.")],
    },
    EndpointDescriptor {
        name: "list_pre_built_designs",
        description: "Retrieve SendGrid's pre-built designs.",
        method: Get,
        path: "/v3/designs/pre-builts",
        params: &[
            P::query("page_size", Integer, "Designs per page."),
            P::query("page_token", Str, "Token of the page to return."),
            P::query("summary", Boolean, "Omit HTML and plain content."),
        ],
    },
    EndpointDescriptor {
        name: "get_pre_built_design",
        description: "Retrieve one pre-built design.",
        method: Get,
        path: "/v3/designs/pre-builts/{id}",
        params: &[P::path("id", "ID of the pre-built design.")],
    },
    EndpointDescriptor {
        name: "duplicate_pre_built_design",
        description: "Copy a pre-built design into the Design Library.",
        method: Post,
        path: "/v3/designs/pre-builts/{id}",
        params: &[
            P::path("id", "ID of the pre-built design."),
            P::body("name", Str, "Name of the copy."),
            P::body("editor", Str, "code or design."),
        ],
    },
];
