use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Delete, Get, Patch, Post};
use crate::types::ParamKind::{Array, Boolean, Integer, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    // -- Domain authentication ------------------------------------------------
    EndpointDescriptor {
        name: "list_authenticated_domains",
        description: "Retrieve authenticated domains.",
        method: Get,
        path: "/v3/whitelabel/domains",
        params: &[
            P::query("limit", Integer, "Number of domains to return."),
            P::query("offset", Integer, "Number of domains to skip."),
            P::query("exclude_subusers", Boolean, "Omit subuser domains."),
            P::query("username", Str, "Only domains of this user."),
            P::query("domain", Str, "Filter by domain."),
        ],
    },
    EndpointDescriptor {
        name: "authenticate_domain",
        description: "Start authenticating a sending domain.",
        method: Post,
        path: "/v3/whitelabel/domains",
        params: &[
            P::body("domain", Str, "Domain to authenticate.").required(),
            P::body("subdomain", Str, "Subdomain used for the DNS records."),
            P::body("username", Str, "Subuser the domain belongs to."),
            P::body("ips", Array, "IPs to include in a custom SPF record."),
            P::body("custom_spf", Boolean, "Use a custom SPF record."),
            P::body("default", Boolean, "Make this the default domain."),
            P::body("automatic_security", Boolean, "Let SendGrid manage SPF and DKIM."),
            P::body("custom_dkim_selector", Str, "Three-character DKIM selector."),
        ],
    },
    EndpointDescriptor {
        name: "get_default_authenticated_domain",
        description: "Retrieve the default authenticated domain.",
        method: Get,
        path: "/v3/whitelabel/domains/default",
        params: &[P::query("domain", Str, "Domain to look up.")],
    },
    EndpointDescriptor {
        name: "get_authenticated_domain",
        description: "Retrieve an authenticated domain.",
        method: Get,
        path: "/v3/whitelabel/domains/{domain_id}",
        params: &[P::path("domain_id", "ID of the domain.")],
    },
    EndpointDescriptor {
        name: "update_authenticated_domain",
        description: "Update the default and custom SPF flags of a domain.",
        method: Patch,
        path: "/v3/whitelabel/domains/{domain_id}",
        params: &[
            P::path("domain_id", "ID of the domain."),
            P::body("default", Boolean, "Make this the default domain."),
            P::body("custom_spf", Boolean, "Use a custom SPF record."),
        ],
    },
    EndpointDescriptor {
        name: "delete_authenticated_domain",
        description: "Delete an authenticated domain.",
        method: Delete,
        path: "/v3/whitelabel/domains/{domain_id}",
        params: &[P::path("domain_id", "ID of the domain.")],
    },
    EndpointDescriptor {
        name: "validate_authenticated_domain",
        description: "Check the DNS records of an authenticated domain.",
        method: Post,
        path: "/v3/whitelabel/domains/{id}/validate",
        params: &[P::path("id", "ID of the domain.")],
    },
    EndpointDescriptor {
        name: "add_ip_to_authenticated_domain",
        description: "Add an IP to an authenticated domain.",
        method: Post,
        path: "/v3/whitelabel/domains/{id}/ips",
        params: &[
            P::path("id", "ID of the domain."),
            P::body("ip", Str, "IP address to add.").required(),
        ],
    },
    EndpointDescriptor {
        name: "remove_ip_from_authenticated_domain",
        description: "Remove an IP from an authenticated domain.",
        method: Delete,
        path: "/v3/whitelabel/domains/{id}/ips/{ip}",
        params: &[
            P::path("id", "ID of the domain."),
            P::path("ip", "IP address to remove."),
        ],
    },
    // -- Link branding --------------------------------------------------------
    EndpointDescriptor {
        name: "list_branded_links",
        description: "Retrieve branded links.",
        method: Get,
        path: "/v3/whitelabel/links",
        params: &[P::query("limit", Integer, "Number of links to return.")],
    },
    EndpointDescriptor {
        name: "create_branded_link",
        description: "Create a branded link.",
        method: Post,
        path: "/v3/whitelabel/links",
        params: &[
            P::body("domain", Str, "Root domain of the link.").required(),
            P::body("subdomain", Str, "Subdomain of the link."),
            P::body("default", Boolean, "Make this the default link."),
        ],
    },
    EndpointDescriptor {
        name: "get_default_branded_link",
        description: "Retrieve the default branded link.",
        method: Get,
        path: "/v3/whitelabel/links/default",
        params: &[P::query("domain", Str, "Domain to look up.")],
    },
    EndpointDescriptor {
        name: "get_branded_link",
        description: "Retrieve a branded link.",
        method: Get,
        path: "/v3/whitelabel/links/{id}",
        params: &[P::path("id", "ID of the branded link.")],
    },
    EndpointDescriptor {
        name: "update_branded_link",
        description: "Make a branded link the default.",
        method: Patch,
        path: "/v3/whitelabel/links/{id}",
        params: &[
            P::path("id", "ID of the branded link."),
            P::body("default", Boolean, "Make this the default link.").required(),
        ],
    },
    EndpointDescriptor {
        name: "delete_branded_link",
        description: "Delete a branded link.",
        method: Delete,
        path: "/v3/whitelabel/links/{id}",
        params: &[P::path("id", "ID of the branded link.")],
    },
    EndpointDescriptor {
        name: "validate_branded_link",
        description: "Check the DNS records of a branded link.",
        method: Post,
        path: "/v3/whitelabel/links/{id}/validate",
        params: &[P::path("id", "ID of the branded link.")],
    },
    // -- Reverse DNS ----------------------------------------------------------
    EndpointDescriptor {
        name: "list_reverse_dns",
        description: "Retrieve reverse DNS records.",
        method: Get,
        path: "/v3/whitelabel/ips",
        params: &[
            P::query("limit", Integer, "Number of records to return."),
            P::query("offset", Integer, "Number of records to skip."),
            P::query("ip", Str, "Filter by IP prefix."),
        ],
    },
    EndpointDescriptor {
        name: "create_reverse_dns",
        description: "Set up reverse DNS for an IP address.",
        method: Post,
        path: "/v3/whitelabel/ips",
        params: &[
            P::body("ip", Str, "IP address.").required(),
            P::body("domain", Str, "Root domain.").required(),
            P::body("subdomain", Str, "Subdomain for the record."),
        ],
    },
    EndpointDescriptor {
        name: "get_reverse_dns",
        description: "Retrieve a reverse DNS record.",
        method: Get,
        path: "/v3/whitelabel/ips/{id}",
        params: &[P::path("id", "ID of the record.")],
    },
    EndpointDescriptor {
        name: "delete_reverse_dns",
        description: "Delete a reverse DNS record.",
        method: Delete,
        path: "/v3/whitelabel/ips/{id}",
        params: &[P::path("id", "ID of the record.")],
    },
    EndpointDescriptor {
        name: "validate_reverse_dns",
        description: "Check the DNS records of a reverse DNS entry.",
        method: Post,
        path: "/v3/whitelabel/ips/{id}/validate",
        params: &[P::path("id", "ID of the record.")],
    },
];
