//! Built-in profile content.

use super::model::{
    ContactChannel, ContactKind, NavLink, Project, Skill, SkillIcon, SocialIcon, SocialLink,
    Testimonial,
};
use super::SiteContent;

fn s(value: &str) -> String {
    value.to_string()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub(super) fn content() -> SiteContent {
    SiteContent {
        owner_name: s("Prajwal Joshi"),
        brand: s("Portfolio"),
        hero_roles: strings(&[
            "Computer Vision Specialist",
            "Transforming Pixels into Actionable Insight",
        ]),
        hero_blurb: s(
            "I build elegant, performant, and user-friendly computer vision systems. \
             Focused on creating cutting-edge AI solutions for real-world problems.",
        ),
        about_title: s("Computer Vision Expert"),
        about_paragraphs: strings(&[
            "I'm Prajwal Joshi, a passionate Computer Vision Expert. With a mission to transform raw \
             visual data into powerful, actionable insights, I leverage cutting-edge techniques in \
             object detection, tracking, and automation.",
            "Holding a Deep Learning Specialization and an Advanced Computer Vision Certification, \
             I've pioneered solutions like real-time parking monitoring systems and high-speed \
             pill-counting automation, driving precision and innovation in every project.",
            "Currently serving as Head of Technology at Insight Fusion Analytics since June 2024, \
             I've also collaborated on numerous client projects through Upwork.",
        ]),
        skills: skills(),
        projects: projects(),
        testimonials: testimonials(),
        contact_channels: vec![
            ContactChannel {
                kind: ContactKind::Email,
                value: s("hello@example.com"),
            },
            ContactChannel {
                kind: ContactKind::Phone,
                value: s("+1 (555) 123-4567"),
            },
            ContactChannel {
                kind: ContactKind::Location,
                value: s("San Francisco, CA"),
            },
        ],
        socials: vec![
            SocialLink {
                icon: SocialIcon::Github,
                label: s("GitHub"),
                url: s("https://github.com/prajwal-code2"),
            },
            SocialLink {
                icon: SocialIcon::Linkedin,
                label: s("LinkedIn"),
                url: s("https://www.linkedin.com/in/prajwal-joshi-570935165/"),
            },
            SocialLink {
                icon: SocialIcon::Upwork,
                label: s("Upwork"),
                url: s("https://www.upwork.com/freelancers/~0158b40f97683abbe7"),
            },
        ],
        nav_links: ["Home", "About", "Projects", "Testimonials", "Contact"]
            .iter()
            .map(|name| NavLink {
                name: s(name),
                anchor: name.to_lowercase(),
            })
            .collect(),
    }
}

fn skills() -> Vec<Skill> {
    vec![
        Skill {
            icon: SkillIcon::Code,
            name: s("Computer Vision"),
            description: s("YOLO, Object Detection, Object Tracking, Action Recognition"),
        },
        Skill {
            icon: SkillIcon::Laptop,
            name: s("Programming"),
            description: s("Python, OpenCV, TensorFlow, Data Analytics"),
        },
        Skill {
            icon: SkillIcon::Palette,
            name: s("Development"),
            description: s("Edge Computing, Automation, MQTT"),
        },
        Skill {
            icon: SkillIcon::Sparkles,
            name: s("Tools"),
            description: s("Linux, GitHub, VSCode"),
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: s("E-commerce Platform"),
            description: s("A full-featured online store with payment integration"),
            long_description: s(
                "A comprehensive e-commerce solution built with **React** and **Node.js**.\n\n\
                 - Product catalog and user authentication\n\
                 - Shopping cart and order management\n\
                 - Secure payments via Stripe\n\n\
                 Fully responsive and optimized for all devices.",
            ),
            image: s("https://images.unsplash.com/photo-1649972904349-6e44c42644a7"),
            demo_url: s("#"),
            github_url: s("#"),
            technologies: strings(&["React", "Node.js", "MongoDB", "Stripe"]),
        },
        Project {
            id: 2,
            title: s("Task Management App"),
            description: s("A productivity tool for teams to manage projects efficiently"),
            long_description: s(
                "A robust task management application designed for teams.\n\n\
                 - Project creation and task assignment\n\
                 - Progress tracking\n\
                 - Real-time notifications\n\n\
                 Built with **Next.js** and **TypeScript**, with a PostgreSQL database \
                 managed through Prisma.",
            ),
            image: s("https://images.unsplash.com/photo-1488590528505-98d2b5aba04b"),
            demo_url: s("#"),
            github_url: s("#"),
            technologies: strings(&["Next.js", "TypeScript", "Prisma", "PostgreSQL"]),
        },
        Project {
            id: 3,
            title: s("Personal Finance Dashboard"),
            description: s("Visualize and manage your finances with interactive charts"),
            long_description: s(
                "An intuitive finance tracking dashboard using **Vue.js** and **D3.js** for \
                 data visualization.\n\n\
                 Track expenses, set budgets, and explore spending patterns through interactive \
                 charts. Firebase handles authentication and the real-time database.",
            ),
            image: s("https://images.unsplash.com/photo-1581091226825-a6a2a5aee158"),
            demo_url: s("#"),
            github_url: s("#"),
            technologies: strings(&["Vue.js", "D3.js", "Firebase", "Tailwind CSS"]),
        },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            name: s("Sarah Johnson"),
            role: s("Product Manager"),
            company: s("TechCorp"),
            image: Some(s("https://images.unsplash.com/photo-1581091226825-a6a2a5aee158")),
            text: s(
                "Working with Prajwal was a fantastic experience. The project was delivered ahead \
                 of schedule and the quality of work exceeded our expectations.",
            ),
        },
        Testimonial {
            id: 2,
            name: s("Michael Chen"),
            role: s("CEO"),
            company: s("StartupX"),
            image: Some(s("https://images.unsplash.com/photo-1500673922987-e212871fec22")),
            text: s(
                "The detection pipeline cut our manual review time in half. Clear communication \
                 and a solution that runs reliably on our edge devices.",
            ),
        },
        Testimonial {
            id: 3,
            name: s("Emily Rodriguez"),
            role: s("Marketing Director"),
            company: s("GrowthLabs"),
            image: Some(s("https://images.unsplash.com/photo-1488590528505-98d2b5aba04b")),
            text: s(
                "We've worked with many developers, but this stood out. Our technical requirements \
                 and our business goals were both understood and addressed.",
            ),
        },
        Testimonial {
            id: 4,
            name: s("David Park"),
            role: s("Operations Lead"),
            company: s("ParkSmart"),
            image: None,
            text: s(
                "The real-time parking monitor went from prototype to production in weeks. \
                 Occupancy counts are accurate even at night.",
            ),
        },
        Testimonial {
            id: 5,
            name: s("Anita Sharma"),
            role: s("Plant Manager"),
            company: s("MediPack"),
            image: None,
            text: s(
                "The pill-counting line keeps up with our fastest conveyor. Precise, well \
                 documented, and easy for our team to maintain.",
            ),
        },
    ]
}
