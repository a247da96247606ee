//! Seed data for a fresh data directory

use chrono::{DateTime, FixedOffset, Local};

use crate::types::{Event, Reminder};
use crate::utils::generate_token;
use crate::utils::time::local_day_at;

struct SeedSpec {
    id: &'static str,
    title: &'static str,
    start: (i64, u32, u32),
    end: (i64, u32, u32),
    all_day: bool,
    status: &'static str,
    priority: &'static str,
    deadline: Option<(i64, u32, u32)>,
    reminders: &'static [(i64, &'static str)],
    owner: &'static str,
    assignees: &'static [&'static str],
    project: &'static str,
    dependencies: &'static [&'static str],
    description: &'static str,
    instructions: &'static str,
    transcript_refs: &'static [&'static str],
}

const SEEDS: [SeedSpec; 6] = [
    SeedSpec {
        id: "evt-launch-sync",
        title: "Weekly Launch Sync",
        start: (1, 9, 0),
        end: (1, 10, 0),
        all_day: false,
        status: "scheduled",
        priority: "P1",
        deadline: Some((1, 17, 0)),
        reminders: &[(-120, "-2h"), (-15, "-15m")],
        owner: "Avery",
        assignees: &["Avery", "Jordan", "Maya"],
        project: "Liftoff",
        dependencies: &[],
        description: "Critical go/no-go review for this sprint.",
        instructions: "Prep launch readiness checklist. AI: summarise blockers.",
        transcript_refs: &["launch-sync-2024-01"],
    },
    SeedSpec {
        id: "evt-deep-work",
        title: "Prototype Deep Work",
        start: (3, 8, 30),
        end: (3, 11, 30),
        all_day: false,
        status: "in_progress",
        priority: "P2",
        deadline: None,
        reminders: &[(-60, "-1h")],
        owner: "Maya",
        assignees: &["Maya"],
        project: "Orion",
        dependencies: &["evt-launch-sync"],
        description: "Heads-down block to integrate telemetry feed.",
        instructions: "Future AI: flag risks if data drift >2%.",
        transcript_refs: &[],
    },
    SeedSpec {
        id: "evt-stakeholder-demo",
        title: "Stakeholder Demo",
        start: (7, 13, 0),
        end: (7, 14, 0),
        all_day: false,
        status: "proposed",
        priority: "P1",
        deadline: Some((7, 18, 0)),
        reminders: &[(-24 * 60, "-24h"), (-30, "-30m")],
        owner: "Jordan",
        assignees: &["Jordan", "Dev"],
        project: "Habitat",
        dependencies: &["evt-launch-sync"],
        description: "Demo of habitat planning dashboard.",
        instructions: "Draft follow-up email template. Future AI can summarize Q&A.",
        transcript_refs: &["stakeholder-notes"],
    },
    SeedSpec {
        id: "evt-team-offsite",
        title: "Team Offsite",
        start: (5, 0, 0),
        end: (6, 0, 0),
        all_day: true,
        status: "scheduled",
        priority: "P3",
        deadline: None,
        reminders: &[(-24 * 60, "-24h")],
        owner: "People Ops",
        assignees: &["Team"],
        project: "Team Health",
        dependencies: &[],
        description: "Offsite planning day.",
        instructions: "AI: gather fun retro prompts later.",
        transcript_refs: &[],
    },
    SeedSpec {
        id: "evt-cx-review",
        title: "Customer Insights Review",
        start: (10, 15, 0),
        end: (10, 16, 30),
        all_day: false,
        status: "scheduled",
        priority: "P2",
        deadline: None,
        reminders: &[(-90, "-90m")],
        owner: "Dev",
        assignees: &["Dev", "Avery"],
        project: "Liftoff",
        dependencies: &["evt-stakeholder-demo"],
        description: "Review support transcripts and churn signals.",
        instructions: "Flag AI summary gaps for automation.",
        transcript_refs: &["support-weekly"],
    },
    SeedSpec {
        id: "evt-sprint-planning",
        title: "Sprint Planning",
        start: (0, 11, 0),
        end: (0, 12, 30),
        all_day: false,
        status: "done",
        priority: "P1",
        deadline: None,
        reminders: &[(-30, "-30m")],
        owner: "Avery",
        assignees: &["Avery", "Jordan", "Maya", "Dev"],
        project: "Orion",
        dependencies: &[],
        description: "Kick off sprint with backlog review.",
        instructions: "Capture retro actions for AI follow-up.",
        transcript_refs: &["planning-notes"],
    },
];

/// The six starter events, anchored at local midnight of `now`'s day.
///
/// Returned in declaration order; the schedule sorts on load.
pub fn seed_events(now: DateTime<Local>) -> Vec<Event> {
    let today = now.date_naive();
    let created: DateTime<FixedOffset> = now.fixed_offset();
    let at = |(day, hour, minute): (i64, u32, u32)| local_day_at(today, day, hour, minute);
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    SEEDS
        .iter()
        .map(|seed| {
            let mut event = Event::new(seed.title, at(seed.start), at(seed.end));
            event.id = seed.id.to_string();
            event.all_day = seed.all_day;
            event.status = seed.status.to_string();
            event.priority = seed.priority.to_string();
            event.deadline = seed.deadline.map(at);
            event.reminders = seed
                .reminders
                .iter()
                .map(|&(offset, label)| Reminder::new(generate_token(), offset, label))
                .collect();
            event.owner = seed.owner.to_string();
            event.assignees = strings(seed.assignees);
            event.project = Some(seed.project.to_string());
            event.dependencies = strings(seed.dependencies);
            event.description = seed.description.to_string();
            event.instructions = seed.instructions.to_string();
            event.transcript_refs = strings(seed.transcript_refs);
            event.created_at = created;
            event.updated_at = created;
            event
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_set_shape() {
        let events = seed_events(Local::now());
        assert_eq!(events.len(), 6);

        let ids: HashSet<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 6);

        for event in &events {
            assert!(event.start < event.end, "{} ends before it starts", event.id);
            assert!(!event.reminders.is_empty());
            assert!(event.reminders.iter().all(|r| r.id.len() == 16));
            for dep in &event.dependencies {
                assert!(ids.contains(dep.as_str()), "{} depends on unknown {}", event.id, dep);
            }
        }
    }

    #[test]
    fn test_launch_sync_details() {
        let now = Local::now();
        let events = seed_events(now);
        let launch = events.iter().find(|e| e.id == "evt-launch-sync").unwrap();

        assert_eq!(launch.priority, "P1");
        assert_eq!(launch.owner, "Avery");
        assert_eq!(launch.project.as_deref(), Some("Liftoff"));
        assert_eq!(launch.reminders.len(), 2);
        assert_eq!(launch.reminders[0].offset_minutes, -120);
        assert_eq!(launch.start.date_naive(), now.date_naive() + chrono::Duration::days(1));
        assert!(launch.deadline.is_some());
    }
}
