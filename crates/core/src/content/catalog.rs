//! Static page content
//!
//! Everything the page shows lives here as `static` data. Display order is
//! list order.

use super::model::{EntryKind, ProjectEntry, SectionCopy, TimelineEntry};

pub const HERO_LINES: [&str; 2] = ["CREATIVE", "DEVELOPER"];
pub const HERO_HINT: &str = "Scroll down to explore";

pub const EXPERIENCE_COPY: SectionCopy = SectionCopy {
    label: "MY JOURNEY",
    title: "EXPERIENCE & ",
    accent: "EDUCATION",
    subtitle: "A timeline of my professional growth and academic achievements",
};

pub const PROJECTS_COPY: SectionCopy = SectionCopy {
    label: "FEATURED WORK",
    title: "SELECTED ",
    accent: "PROJECTS",
    subtitle: "A collection of projects that showcase my skills and passion for building exceptional digital experiences.",
};

pub static EXPERIENCES: &[TimelineEntry] = &[
    TimelineEntry {
        id: 1,
        kind: EntryKind::Work,
        title: "Full-Stack Developer",
        organization: "Tech Company",
        location: "Remote",
        period: "2024 - PRESENT",
        description: "Leading development of scalable web applications and mentoring junior developers.",
        achievements: &[
            "Built microservices architecture serving 100K+ users",
            "Reduced page load time by 60% through optimization",
            "Implemented CI/CD pipelines for automated deployments",
        ],
        tech: Some(&["Next.js", "TypeScript", "Node.js", "PostgreSQL", "AWS"]),
    },
    TimelineEntry {
        id: 2,
        kind: EntryKind::Work,
        title: "Frontend Developer",
        organization: "Digital Agency",
        location: "Dhaka, Bangladesh",
        period: "2023 - 2024",
        description: "Developed interactive web experiences for high-profile clients.",
        achievements: &[
            "Delivered 20+ client projects on time",
            "Created reusable component library",
            "Improved team productivity by 40%",
        ],
        tech: Some(&["React", "GSAP", "Tailwind CSS", "Figma"]),
    },
    TimelineEntry {
        id: 3,
        kind: EntryKind::Work,
        title: "Junior Developer",
        organization: "Startup Inc",
        location: "Dhaka, Bangladesh",
        period: "2022 - 2023",
        description: "Started my professional journey building web applications.",
        achievements: &[
            "Developed MVP for early-stage startup",
            "Learned agile methodologies",
            "Contributed to open-source projects",
        ],
        tech: Some(&["JavaScript", "React", "Node.js", "MongoDB"]),
    },
    TimelineEntry {
        id: 4,
        kind: EntryKind::Education,
        title: "Bachelor in Computer Science",
        organization: "University Name",
        location: "Dhaka, Bangladesh",
        period: "2019 - 2023",
        description: "Studied computer science with focus on software engineering.",
        achievements: &[
            "Graduated with honors",
            "Led university coding club",
            "Won hackathon competitions",
        ],
        tech: None,
    },
];

pub static PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: 1,
        title: "E-COMMERCE PLATFORM",
        category: "FULL-STACK",
        description: "A modern e-commerce solution with real-time inventory, payment integration, and admin dashboard.",
        image: "/projects/project1.webp",
        tech: Some(&["Next.js", "TypeScript", "Stripe", "PostgreSQL"]),
        live_url: "https://example.com",
        source_url: "https://github.com",
        year: "2025",
    },
    ProjectEntry {
        id: 2,
        title: "AI DASHBOARD",
        category: "FRONTEND",
        description: "Interactive analytics dashboard with AI-powered insights and real-time data visualization.",
        image: "/projects/project2.webp",
        tech: Some(&["React", "D3.js", "TailwindCSS", "OpenAI"]),
        live_url: "https://example.com",
        source_url: "https://github.com",
        year: "2025",
    },
    ProjectEntry {
        id: 3,
        title: "SOCIAL MEDIA APP",
        category: "FULL-STACK",
        description: "Feature-rich social platform with real-time messaging, stories, and content sharing.",
        image: "/projects/project3.webp",
        tech: Some(&["Next.js", "Socket.io", "MongoDB", "Redis"]),
        live_url: "https://example.com",
        source_url: "https://github.com",
        year: "2024",
    },
    ProjectEntry {
        id: 4,
        title: "PORTFOLIO GENERATOR",
        category: "SAAS",
        description: "Drag-and-drop portfolio builder with custom themes and one-click deployment.",
        image: "/projects/project4.webp",
        tech: Some(&["React", "Node.js", "AWS", "Prisma"]),
        live_url: "https://example.com",
        source_url: "https://github.com",
        year: "2024",
    },
];
