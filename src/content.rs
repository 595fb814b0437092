//! Static homepage copy
//!
//! Everything the sections render. None of this changes at runtime.

pub const COMPANY_NAME: &str = "Kravi Analytics";
pub const CONTACT_EMAIL: &str = "info@kravianalytics.com";
pub const CONTACT_PHONE: &str = "+1 (234) 567-890";

// Hero
pub const HERO_TAGLINE: &str = "Advanced Technology Solutions";
pub const HERO_TITLE: &str = "Transforming Industries With Cutting-Edge Technology";
pub const HERO_DESCRIPTION: &str = "We deliver innovative solutions that turn untapped \
potential and challenges into thriving possibilities, empowering communities and driving \
sustainable growth.";
pub const HERO_CTA_PRIMARY: &str = "Explore Our Technologies";
pub const HERO_CTA_SECONDARY: &str = "Book a Meeting";

// Value proposition
pub const SERVICES_TITLE: &str = "Why Choose Our Solutions";

pub struct ValueProp {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const VALUE_PROPS: &[ValueProp] = &[
    ValueProp {
        icon: "💡",
        title: "Innovation First",
        blurb: "Research-driven products built on the newest advances in machine \
learning and geospatial analysis.",
    },
    ValueProp {
        icon: "⚡",
        title: "Lightning Fast",
        blurb: "Pipelines tuned for fresh insights in minutes, not days, no matter \
how large the dataset.",
    },
    ValueProp {
        icon: "🔒",
        title: "Secure & Reliable",
        blurb: "Your data is encrypted in transit and at rest, with an infrastructure \
track record you can audit.",
    },
    ValueProp {
        icon: "🚀",
        title: "Scalable Growth",
        blurb: "Start small and expand seamlessly; our platform grows with your \
business instead of ahead of your budget.",
    },
];

// Social proof
pub const TESTIMONIALS_TITLE: &str = "Trusted by Industry Leaders";

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub company: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Great service and support",
        name: "John Doe",
        company: "Tech Corp",
    },
    Testimonial {
        quote: "Their analytics cut our planning cycle in half",
        name: "Maria Gonzalez",
        company: "AgriField Group",
    },
    Testimonial {
        quote: "The most responsive engineering partner we have worked with",
        name: "Samuel Osei",
        company: "Northline Logistics",
    },
];

// Future technologies (flip cards: front = the technology, back = the value)
pub const TECHNOLOGY_TITLE: &str = "Future Technologies";

pub struct Technology {
    pub title: &'static str,
    pub front: &'static str,
    pub value_title: &'static str,
    pub value: &'static str,
}

pub const TECHNOLOGIES: &[Technology] = &[
    Technology {
        title: "Geospatial AI",
        front: "Satellite imagery interpreted by deep learning models trained on \
regional ground truth.",
        value_title: "See Change Early",
        value: "Detect crop stress, flooding, and land-use change weeks before it \
shows up in field reports.",
    },
    Technology {
        title: "Predictive Analytics",
        front: "Forecasting engines that blend historical records with live sensor \
and market feeds.",
        value_title: "Plan With Confidence",
        value: "Replace gut-feel projections with calibrated forecasts and \
quantified uncertainty.",
    },
    Technology {
        title: "Edge Computing",
        front: "On-device inference for sites with little or no connectivity.",
        value_title: "Insights Anywhere",
        value: "Run the same models in the field that you run in the cloud, and \
sync when the link returns.",
    },
];

// About
pub const ABOUT_TITLE: &str = "About Our Company";

pub const ABOUT_MISSION: &[&str] = &[
    "Founded with a vision to revolutionize technology solutions, our team brings \
together decades of experience in software development, artificial intelligence, \
and business innovation.",
    "We believe in the power of technology to transform businesses and create \
meaningful impact in the world. Our mission is to make advanced technology \
accessible and practical for businesses of all sizes.",
];

pub struct TeamMember {
    pub initials: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        initials: "JD",
        name: "John Doe",
        role: "CEO & Founder",
    },
    TeamMember {
        initials: "JS",
        name: "Jane Smith",
        role: "CTO",
    },
    TeamMember {
        initials: "MB",
        name: "Mike Brown",
        role: "Lead Developer",
    },
];

// Contact form inquiry types: (wire value, display label)
pub const INQUIRY_TYPES: &[(&str, &str)] = &[
    ("collaboration", "Collaboration"),
    ("demo", "Demo Request"),
    ("thesis", "Thesis Opportunity"),
    ("career", "Career"),
    ("other", "Other"),
];
