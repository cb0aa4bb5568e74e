use super::{ContactChannel, SocialLink};

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "PRIMARY_EMAIL",
        value: "hello@example.com",
        icon: "\u{1F4E7}",
        href: Some("mailto:hello@example.com"),
    },
    ContactChannel {
        label: "LOCATION",
        value: "Karnataka, India",
        icon: "\u{1F4CD}",
        href: None,
    },
    ContactChannel {
        label: "RESPONSE_TIME",
        value: "Within 24 hours",
        icon: "\u{1F550}",
        href: None,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", icon: "\u{1F419}", href: "https://github.com/" },
    SocialLink { label: "LinkedIn", icon: "\u{1F4BC}", href: "https://www.linkedin.com/" },
    SocialLink { label: "Email", icon: "\u{2709}", href: "mailto:hello@example.com" },
];
