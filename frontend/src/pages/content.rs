#[derive(Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct JobOpening {
    pub title: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
}

pub const ABOUT_CARDS: [(&str, &str, &str); 3] = [
    ("fas fa-microchip", "Silicon First", "From architecture to tape-out, we design chips that ship."),
    ("fas fa-layer-group", "Board Ready", "Layouts built for signal integrity, thermals and manufacturability."),
    ("fas fa-handshake", "Partners", "We embed with your team and leave the knowledge behind."),
];

pub static SERVICES: [Service; 4] = [
    Service {
        id: "chip-design",
        icon: "fas fa-microchip",
        title: "Chip Design",
        summary: "RTL to GDSII for digital and mixed-signal ASICs.",
        details: &[
            "Micro-architecture and RTL in SystemVerilog",
            "Synthesis, timing closure and power analysis",
            "Physical design and sign-off",
        ],
    },
    Service {
        id: "pcb-design",
        icon: "fas fa-project-diagram",
        title: "PCB Design",
        summary: "High-speed, multi-layer boards from schematic to fabrication files.",
        details: &[
            "Schematic capture and component selection",
            "Stack-up planning and impedance control",
            "DFM review and fabrication hand-off",
        ],
    },
    Service {
        id: "verification",
        icon: "fas fa-check-double",
        title: "Verification",
        summary: "Confidence before silicon with simulation and formal methods.",
        details: &[
            "UVM testbenches and coverage closure",
            "Formal property checking",
            "FPGA prototyping",
        ],
    },
    Service {
        id: "consulting",
        icon: "fas fa-lightbulb",
        title: "Consulting",
        summary: "Technical due diligence and roadmap planning for hardware teams.",
        details: &[
            "Architecture reviews",
            "Process node and vendor selection",
            "Team training",
        ],
    },
];

pub static TEAM: [TeamMember; 3] = [
    TeamMember {
        id: "founder",
        name: "Founder & CEO",
        role: "Architecture",
        bio: "Leads chip architecture and customer engagements across every project.",
    },
    TeamMember {
        id: "hardware-lead",
        name: "Hardware Lead",
        role: "PCB & Systems",
        bio: "Owns board design, bring-up and the path from prototype to production.",
    },
    TeamMember {
        id: "verification-lead",
        name: "Verification Lead",
        role: "Design Verification",
        bio: "Builds the testbenches and formal flows that catch bugs before tape-out.",
    },
];

pub static JOB_OPENINGS: [JobOpening; 3] = [
    JobOpening {
        title: "ASIC Design Engineer",
        location: "Remote",
        summary: "Own RTL blocks from specification through synthesis.",
    },
    JobOpening {
        title: "PCB Layout Engineer",
        location: "Hybrid",
        summary: "Lay out high-speed boards and work with fabrication partners.",
    },
    JobOpening {
        title: "Design Verification Engineer",
        location: "Remote",
        summary: "Write UVM environments and drive coverage closure.",
    },
];

/// Options of the contact form's service drop-down.
pub const SERVICE_OPTIONS: [&str; 5] = ["Chip Design", "PCB Design", "Verification", "Consulting", "Other"];
