//! Built-in conference agenda
//!
//! The agenda is fixed at build time; there is no loading or validation
//! step. Session IDs are unique across all three days (asserted by test
//! in lib.rs).

use crate::{Catalog, ConferenceInfo, Day, SessionRecord, SessionType};

fn session(
    id: &str,
    time: &str,
    title: &str,
    speaker: &str,
    duration: u32,
    venue: &str,
    kind: SessionType,
) -> SessionRecord {
    SessionRecord {
        id: id.into(),
        time: time.into(),
        title: title.into(),
        speaker: speaker.into(),
        duration,
        venue: venue.into(),
        kind,
    }
}

pub(crate) fn conference_info() -> ConferenceInfo {
    ConferenceInfo {
        title: "GENDERING AI CONFERENCE".into(),
        subtitle: "Decolonizing AI: Reclaiming power in the intelligence age from feminist perspective".into(),
        location: "Mövenpick Hotel and Residence Nairobi, Kenya".into(),
        dates: "August 20-22, 2025".into(),
        tagline: "Decolonizing AI: Reclaiming power in the intelligence age from feminist perspective".into(),
    }
}

pub(crate) fn build_catalog() -> Catalog {
    Catalog {
        info: conference_info(),
        days: vec![day1(), day2(), day3()],
    }
}

fn day1() -> Day {
    use SessionType::*;
    Day {
        date: "August 20, 2025".into(),
        theme: "Governance, Ethics & Justice".into(),
        description: "Central questions of power, policy, decoloniality, and accountability in AI"
            .into(),
        sessions: vec![
            session(
                "opening-day1",
                "9:00 AM - 9:15 AM",
                "Welcoming and Opening Remarks",
                "Rebecca Ryakitimbo",
                15,
                "Main Hall",
                Opening,
            ),
            session(
                "keynote-day1",
                "9:15 AM - 9:35 AM",
                "Decolonizing AI: Bureaucratic Elites, Feminist Ethos, and Embodied Epistemologies",
                "Lilian Njeri Mbuthi",
                20,
                "Main Hall",
                Keynote,
            ),
            session(
                "grounding-day1",
                "9:40 AM - 10:40 AM",
                "Story of Self and Power Analysis - A Grounding Exercise",
                "Bridget Rhinohart",
                55,
                "Main Hall",
                Workshop,
            ),
            session("break-1", "10:40 AM - 11:25 AM", "Coffee Break", "", 45, "Lobby", Break),
            session(
                "panel-day1-1",
                "11:30 AM - 12:30 PM",
                "Panel: Decolonial Perspectives on AI-Driven Violence in War and Conflict Zones",
                "FIRN",
                60,
                "Main Hall",
                Panel,
            ),
            session(
                "workshop-day1-1",
                "12:30 PM - 1:30 PM",
                "Workshop: Gender and AI Ethics, Governance, and Policy in Africa",
                "Global Center on AI Governance",
                60,
                "Main Hall",
                Workshop,
            ),
            session("lunch-1", "1:30 PM - 2:10 PM", "Lunch Break", "", 40, "Restaurant", Break),
            session(
                "lightning-day1",
                "2:10 PM - 2:30 PM",
                "Lightning Talk",
                "Irene Mwendwa",
                20,
                "Main Hall",
                LightningTalk,
            ),
            session(
                "workshop-day1-2",
                "2:30 PM - 3:30 PM",
                "Workshop: AI as a Gender Difference Leveler: Are AI Models and Tools Accelerating Gender Equity or Reinforcing Gender Bias?",
                "National Coalition on Freedom of Expression and Content Moderation in Kenya",
                60,
                "Main Hall",
                Workshop,
            ),
            session(
                "workshop-day1-3",
                "2:30 PM - 3:30 PM",
                "Workshop: Co-Designing a Gender-Inclusive AI Toolkit for Economic Policymaking in Africa",
                "ACET, Rebecca, Jenniffer",
                60,
                "Room A",
                Workshop,
            ),
            session("coffee-1", "3:30 PM - 3:50 PM", "Coffee Break", "", 20, "Lobby", Break),
            session(
                "showcase-day1",
                "3:50 PM - 4:30 PM",
                "Showcase: African Women School of AI and Female Tech Exhibitors",
                "Various exhibitors",
                40,
                "Main Hall",
                Showcase,
            ),
            session(
                "closing-day1",
                "4:30 PM - 4:45 PM",
                "Closing Remarks Day 1",
                "Conference Organizers",
                15,
                "Main Hall",
                Closing,
            ),
        ],
    }
}

fn day2() -> Day {
    use SessionType::*;
    Day {
        date: "August 21, 2025".into(),
        theme: "Feminist AI for Social Change & Technical Innovation".into(),
        description: "Hands-on tools, methodologies, and applications for gender-equitable impact"
            .into(),
        sessions: vec![
            session(
                "keynote-day2-1",
                "9:00 AM - 9:20 AM",
                "Keynote Address: Setting Context for Feminist AI",
                "Dr. Angela Ndaka",
                20,
                "Main Hall",
                Keynote,
            ),
            session(
                "conversation-day2",
                "9:20 AM - 10:00 AM",
                "1:1 Conversations on AI and Arts Feminist Futures",
                "Lisa Russel/Arts Envoy",
                40,
                "Main Hall",
                Conversation,
            ),
            session(
                "keynote-day2-2",
                "10:00 AM - 10:20 AM",
                "Keynote Address",
                "Angela Chukunzira",
                20,
                "Main Hall",
                Keynote,
            ),
            session("tea-2", "10:20 AM - 10:40 AM", "Tea Break", "", 20, "Lobby", Break),
            session(
                "panel-day2-1",
                "10:40 AM - 11:40 AM",
                "Panel: Gendered Realities in AI: Who Builds, Who Benefits, Who Is Left Behind?",
                "Kictanet",
                60,
                "Main Hall",
                Panel,
            ),
            session(
                "workshop-day2-1",
                "11:40 AM - 12:40 PM",
                "Workshop: Creative Equity and Gendered Storytelling with ArtsEnvoy.ai: Empowering Global South Voices through Inclusive AI",
                "Lissa Russel",
                60,
                "Main Hall",
                Workshop,
            ),
            session(
                "panel-day2-2",
                "11:40 AM - 12:40 PM",
                "Panel: Our Bodies, Our Data, Our Futures: Pan African Feminist Pathways for Digital Justice",
                "The Nawi Afrifem Collective and African Feminism",
                60,
                "Room A",
                Panel,
            ),
            session("lunch-2", "12:40 PM - 1:30 PM", "Lunch Break", "", 50, "Restaurant", Break),
            session(
                "keynote-day2-3",
                "1:30 PM - 1:50 PM",
                "Keynote Address: Feminist Intelligence: Using AI to Expose Digital Violence and Reclaim Power",
                "Athandiwe Saba, Code for Africa",
                20,
                "Main Hall",
                Keynote,
            ),
            session(
                "workshop-day2-2",
                "1:50 PM - 2:50 PM",
                "Safe and Ethical Artificial Intelligence to Address Gender Based Violence",
                "UNFPA",
                60,
                "Main Hall",
                Workshop,
            ),
            session(
                "lighttalk-day2",
                "2:50 PM - 3:10 PM",
                "Light Talk: Decolonizing AI: Feminist Struggle for Justice, Inclusion and Accountability",
                "Various speakers",
                20,
                "Main Hall",
                LightTalk,
            ),
            session(
                "launch-day2",
                "3:10 PM - 4:20 PM",
                "Special Launch",
                "Conference Organizers",
                70,
                "Main Hall",
                SpecialEvent,
            ),
            session(
                "closing-day2",
                "4:20 PM - 4:35 PM",
                "Coffee Break and Closing Remarks for the Day",
                "Conference Organizers",
                15,
                "Main Hall",
                Closing,
            ),
        ],
    }
}

fn day3() -> Day {
    use SessionType::*;
    Day {
        date: "August 22, 2025".into(),
        theme: "Community, Rural & Wellbeing Futures".into(),
        description: "Focus on rural communities, mental health, and inclusive technological futures"
            .into(),
        sessions: vec![
            session(
                "workshop-day3-1",
                "9:00 AM - 9:30 AM",
                "Counting What Matters: Feminist AI, Femicides, and Building Swahili Tools for Justice",
                "Femicide Count Kenya, Data + Feminism Lab (MIT, USA), and DISCO Lab (Brown University, USA)",
                30,
                "Main Hall",
                Workshop,
            ),
            session(
                "keynote-day3-1",
                "9:30 AM - 9:40 AM",
                "Keynote address: Digital Colonialism to Digital Liberation: African Women Rewriting AI Narratives",
                "Meriem Boudjadja",
                10,
                "Main Hall",
                Keynote,
            ),
            session(
                "expert-day3-1",
                "9:40 AM - 10:00 AM",
                "Expert Talks",
                "Florence Ogonjo",
                20,
                "Main Hall",
                ExpertTalk,
            ),
            session(
                "gender-talks-day3",
                "10:00 AM - 11:00 AM",
                "Gender talks: Gender Considerations in AI for Development",
                "Loise Ochanda and Dr. Melissa Omino",
                60,
                "Main Hall",
                Panel,
            ),
            session("coffee-3", "11:00 AM - 11:20 AM", "Coffee Break", "", 20, "Lobby", Break),
            session(
                "panel-day3-1",
                "11:20 AM - 12:20 PM",
                "Panel: Invisible Scars: Healing the Mental Trauma of AI/Tech Work and Heartheart Digital Rights and Mental Health Initiative",
                "African Content Moderators Union",
                60,
                "Main Hall",
                Panel,
            ),
            session(
                "panel-day3-2",
                "11:20 AM - 12:20 PM",
                "Panel: Reclaiming AI from the Margins: Queer Healing, Hustle, and Power in Rural Africa",
                "Various speakers",
                60,
                "Room A",
                Panel,
            ),
            session(
                "expert-session-day3",
                "12:20 PM - 1:20 PM",
                "Expert Session: AI and Cybersecurity: Protecting Women and Girls in the Digital Age",
                "Esther Mengi, Serensic Africa",
                60,
                "Room B",
                ExpertSession,
            ),
            session("lunch-3", "1:20 PM - 1:50 PM", "Lunch Break", "", 30, "Restaurant", Break),
            session(
                "keynote-day3-2",
                "1:50 PM - 2:10 PM",
                "Keynote Address",
                "Dr. Grace Githaiga",
                20,
                "Main Hall",
                Keynote,
            ),
            session(
                "panel-day3-3",
                "2:10 PM - 3:10 PM",
                "Panel: Designing Gender Just Infrastructures in Digital Agri-Food Systems: What if Rural Women Designed the Next Agri-Tech App?",
                "The InnoCatalyst Circle",
                60,
                "Main Hall",
                Panel,
            ),
            session(
                "panel-day3-4",
                "2:10 PM - 3:10 PM",
                "Panel: Inheritance: Young Women in AI Building What We Needed as Girls",
                "Various speakers",
                60,
                "Room A",
                Panel,
            ),
            session("coffee-4", "3:10 PM - 3:30 PM", "Coffee Break", "", 20, "Lobby", Break),
            session(
                "panel-day3-5",
                "3:30 PM - 4:30 PM",
                "Panel: AI Can't Feel Pain: Infertility, Reproductive Struggles, Toxic Work Spaces and the Feminist Data Gap",
                "Waiting Womb Trust - Editah Hadassah",
                60,
                "Main Hall",
                Panel,
            ),
            session(
                "workshop-day3-2",
                "3:30 PM - 4:30 PM",
                "Workshop: Healing, Hustle & Herstories: Feminist Tech for Rural Liberation",
                "Otoyi M. Calary",
                60,
                "Room A",
                Workshop,
            ),
            session(
                "lighttalk-day3",
                "4:30 PM - 4:50 PM",
                "Light Talks: Bridging the Gender Data Gap: Foundations for Responsible and Equitable AI",
                "Data2X",
                20,
                "Main Hall",
                LightTalk,
            ),
            session(
                "closing-day3",
                "4:50 PM - 5:00 PM",
                "Closing Remarks Day 3",
                "Conference Organizers",
                10,
                "Main Hall",
                Closing,
            ),
        ],
    }
}
