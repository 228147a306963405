use folio_core::content::*;
use folio_core::error::ContentError;

pub const PROFILE: Profile = Profile {
    name: "Bharath Gowda C G",
    brand: "Bharath.",
    greeting: "Hello, I'm",
    tagline: "I build fast, reliable web applications and delightful user experiences.",
    about: "I'm a full-stack developer specializing in building robust, scalable apps and \
            clean frontends. I enjoy solving real problems, optimizing performance and \
            learning new tech stacks.",
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        anchor: "#hero",
        label: "Home",
    },
    NavLink {
        anchor: "#about",
        label: "About",
    },
    NavLink {
        anchor: "#projects",
        label: "Projects",
    },
    NavLink {
        anchor: "#skills",
        label: "Skills",
    },
    NavLink {
        anchor: "#contact",
        label: "Contact",
    },
];

pub const SKILLS: &[&str] = &[
    "React",
    "JavaScript",
    "Tailwind",
    "Node.js",
    "Python",
    "MongoDB",
    "SQL",
];

pub const PROJECTS: &[CarouselItem] = &[
    CarouselItem {
        id: 1,
        title: "Scalable SaaS Platform",
        subtitle: "Project Management Tool",
        description: "Full-stack app for team collaboration, realtime sync, and task automation.",
        tags: &["React", "Node", "MongoDB"],
    },
    CarouselItem {
        id: 2,
        title: "Real-Time Analytics Tool",
        subtitle: "Data Visualization",
        description: "Dashboard focusing on performance, streams & interactive charts.",
        tags: &["D3.js", "WebSockets", "Postgres"],
    },
    CarouselItem {
        id: 3,
        title: "E-commerce Microservices",
        subtitle: "High-performance Backend",
        description: "Microservices and queueing for resilient order processing.",
        tags: &["Python", "Docker", "Redis"],
    },
];

pub const SOCIAL: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/bharath-gowda-a5a890315",
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com/bharathgowdacg",
    },
];

pub const ASSETS: Assets = Assets {
    resume: "/bharath_resume.pdf",
    profile_image: "/profile.jpg",
    background_video: "https://fg6ae0196omuyqcy.public.blob.vercel-storage.com/vedio.mp4",
};

pub fn site() -> Result<SiteContent, ContentError> {
    SiteContent::new(PROFILE, NAV_LINKS, SKILLS, PROJECTS, SOCIAL, ASSETS)
}
