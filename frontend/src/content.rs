//! Static copy for the landing page. The "AI" output shown in the demo is
//! canned text; nothing here is generated at runtime.

pub const HERO_WORDS: &[&str] = &["meetings", "lectures", "interviews", "podcasts", "stand-ups"];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "transcript",
        title: "Accurate transcripts",
        description: "Every word captured with timestamps you can click to jump back into the recording.",
    },
    Feature {
        icon: "summary",
        title: "Summaries that stick",
        description: "Key decisions, open questions and action items pulled out before you close the tab.",
    },
    Feature {
        icon: "speakers",
        title: "Speaker labels",
        description: "Know who said what, even when five people talk over each other.",
    },
    Feature {
        icon: "search",
        title: "Search everything",
        description: "Find that one number from last quarter's call in seconds.",
    },
    Feature {
        icon: "languages",
        title: "30+ languages",
        description: "Record in one language, read the notes in another.",
    },
    Feature {
        icon: "lock",
        title: "Private by default",
        description: "Recordings are encrypted at rest and never used to train anything.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

impl Testimonial {
    /// First letter of each word in the author's name, as shown on the avatar.
    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I stopped taking notes in meetings. Noteflow does it better and I actually listen now.",
        author: "Priya Raman",
        role: "Product Lead, Lumen",
    },
    Testimonial {
        quote: "Our research interviews used to take a week to synthesise. Now it's an afternoon.",
        author: "Jonas Berg",
        role: "UX Researcher, Fjord Labs",
    },
    Testimonial {
        quote: "The action items alone saved our team an hour of follow-up emails every week.",
        author: "Amara Okafor",
        role: "Engineering Manager, Tessel",
    },
    Testimonial {
        quote: "I record every lecture and review the summary on the bus home. Game changer for exams.",
        author: "Leo Martins",
        role: "Medical Student",
    },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What can I upload?",
        answer: "Any audio or video file up to two hours long: mp3, m4a, wav, mp4 and mov all work.",
    },
    FaqEntry {
        question: "How long does processing take?",
        answer: "Most recordings are ready in less than a quarter of their running time.",
    },
    FaqEntry {
        question: "Who can see my recordings?",
        answer: "Only you and the people you explicitly share a note with.",
    },
    FaqEntry {
        question: "Does it work with multiple speakers?",
        answer: "Yes. Speakers are separated automatically and you can rename them afterwards.",
    },
    FaqEntry {
        question: "Which languages are supported?",
        answer: "Over thirty, including English, Spanish, German, Japanese and Hindi.",
    },
    FaqEntry {
        question: "Can I export my notes?",
        answer: "Export to Markdown, PDF or straight into Notion and Google Docs.",
    },
    FaqEntry {
        question: "Is there a free plan?",
        answer: "Your first three hours of audio every month are free, no card required.",
    },
    FaqEntry {
        question: "Can I cancel anytime?",
        answer: "Yes. Plans are month to month and your notes stay yours after you leave.",
    },
];

pub struct DemoTab {
    pub label: &'static str,
    pub icon: &'static str,
    pub heading: &'static str,
    pub lines: &'static [&'static str],
}

pub const DEMO_TABS: &[DemoTab] = &[
    DemoTab {
        label: "Transcript",
        icon: "transcript",
        heading: "Weekly product sync",
        lines: &[
            "[00:00] Maya: Okay, let's start with the launch checklist.",
            "[00:07] Dev: Onboarding emails are done, analytics is still blocked on the new events.",
            "[00:15] Maya: Can we ship without the funnel dashboard?",
            "[00:19] Dev: Yes, as long as raw events are flowing we can backfill it.",
        ],
    },
    DemoTab {
        label: "Summary",
        icon: "summary",
        heading: "What happened",
        lines: &[
            "Launch checklist reviewed; onboarding emails complete.",
            "Analytics dashboard can follow the launch once raw events are live.",
            "Team agreed to keep the Thursday release date.",
        ],
    },
    DemoTab {
        label: "Action items",
        icon: "bolt",
        heading: "Next steps",
        lines: &[
            "Dev: verify raw event ingestion by Tuesday.",
            "Maya: confirm release notes with marketing.",
            "Both: short go/no-go check on Wednesday afternoon.",
        ],
    },
];

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink { label: "Features", href: "#features" },
    FooterLink { label: "Demo", href: "#demo" },
    FooterLink { label: "FAQ", href: "#faq" },
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("github", "https://github.com/noteflow"),
    ("twitter", "https://x.com/noteflow"),
    ("linkedin", "https://www.linkedin.com/company/noteflow"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons;

    #[test]
    fn every_rotating_and_disclosing_list_is_non_empty() {
        assert!(!HERO_WORDS.is_empty());
        assert!(!TESTIMONIALS.is_empty());
        assert!(!FAQ.is_empty());
        assert!(!DEMO_TABS.is_empty());
    }

    #[test]
    fn content_icons_are_all_known() {
        let fallback = icons::glyph("");
        let names = FEATURES
            .iter()
            .map(|f| f.icon)
            .chain(DEMO_TABS.iter().map(|t| t.icon))
            .chain(SOCIAL_LINKS.iter().map(|(name, _)| *name));
        for name in names {
            assert_ne!(icons::glyph(name), fallback, "{name}");
        }
    }

    #[test]
    fn testimonial_initials_take_the_first_letter_of_each_name() {
        let initials: Vec<String> = TESTIMONIALS.iter().map(Testimonial::initials).collect();
        assert_eq!(initials, vec!["PR", "JB", "AO", "LM"]);
    }

    #[test]
    fn footer_links_stay_on_the_landing_page() {
        for link in FOOTER_LINKS {
            assert!(link.href.starts_with('#'), "{}", link.label);
        }
    }
}
