//! Facility detail screens: static description and pathway content plus a
//! local status vote.
//!
//! The vote is a single-user simulation of an availability percentage. It is
//! created fresh for every visit to a detail screen and never persisted.

use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::model::Category;

// ────────────────────────────────────────────────────────────────────────────
// Votes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteStatus {
    Available,
    Unavailable,
}

impl VoteStatus {
    pub fn label(self) -> &'static str {
        match self {
            VoteStatus::Available => "Available",
            VoteStatus::Unavailable => "Unavailable",
        }
    }

    pub fn opposite(self) -> VoteStatus {
        match self {
            VoteStatus::Available => VoteStatus::Unavailable,
            VoteStatus::Unavailable => VoteStatus::Available,
        }
    }
}

impl std::str::FromStr for VoteStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" | "a" => Ok(VoteStatus::Available),
            "unavailable" | "u" => Ok(VoteStatus::Unavailable),
            _ => anyhow::bail!("Unknown vote status '{}'", s),
        }
    }
}

/// Percentage split between the two statuses. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    available: u8,
    unavailable: u8,
}

impl VoteTally {
    /// Split with `available` percent available (clamped to 100).
    pub fn new(available: u8) -> Self {
        let available = available.min(100);
        Self {
            available,
            unavailable: 100 - available,
        }
    }

    pub fn available(&self) -> u8 {
        self.available
    }

    pub fn unavailable(&self) -> u8 {
        self.unavailable
    }

    pub fn share(&self, status: VoteStatus) -> u8 {
        match status {
            VoteStatus::Available => self.available,
            VoteStatus::Unavailable => self.unavailable,
        }
    }

    /// Add `step` to `status` (capped at 100) and set the other side to the remainder.
    pub fn cast(&mut self, status: VoteStatus, step: u8) {
        let side = self.share(status).saturating_add(step).min(100);
        match status {
            VoteStatus::Available => {
                self.available = side;
                self.unavailable = 100 - side;
            }
            VoteStatus::Unavailable => {
                self.unavailable = side;
                self.available = 100 - side;
            }
        }
    }

    /// Most-voted status; a tie counts as available.
    pub fn leading(&self) -> VoteStatus {
        if self.unavailable > self.available {
            VoteStatus::Unavailable
        } else {
            VoteStatus::Available
        }
    }
}

impl Default for VoteTally {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Two-state vote widget: the user's current pick and the running tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteWidget {
    pub selected: VoteStatus,
    pub tally: VoteTally,
    step: u8,
}

impl VoteWidget {
    pub fn new(default_available: u8, step: u8) -> Self {
        Self {
            selected: VoteStatus::Available,
            tally: VoteTally::new(default_available),
            step,
        }
    }

    pub fn from_config(cfg: &MapConfig) -> Self {
        Self::new(cfg.default_available_votes, cfg.vote_step)
    }

    /// Select `status` and count one vote for it.
    pub fn vote(&mut self, status: VoteStatus) -> VoteTally {
        self.selected = status;
        self.tally.cast(status, self.step);
        self.tally
    }

    /// Status shown as the facility's current availability.
    pub fn current_status(&self) -> VoteStatus {
        self.tally.leading()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static content
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathwayStep {
    pub title: &'static str,
    pub description: &'static str,
}

const fn step(title: &'static str, description: &'static str) -> PathwayStep {
    PathwayStep { title, description }
}

/// Text content of one facility kind's detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FacilityInfo {
    pub category: Category,
    pub description_heading: &'static str,
    pub status_heading: &'static str,
    pub status_prompt: &'static str,
    pub image: &'static str,
    pub pathway: &'static [PathwayStep],
}

const LECTURE_HALL_PATHWAY: [PathwayStep; 5] = [
    step("Step 1", "Enter the campus through the main entrance."),
    step("Step 2", "Proceed straight, passing the Student Center on your right."),
    step("Step 3", "Walk forward until you reach the courtyard."),
    step("Step 4", "Turn left at the library to continue to the next section."),
    step("Step 5", "Once you reach the second floor, walk down the hallway."),
];

const DEANS_OFFICE_PATHWAY: [PathwayStep; 5] = [
    step("Step 1: Enter the Campus", "Begin at the main entrance of the campus."),
    step(
        "Step 2: Walk Past the Student Center",
        "Head straight ahead, passing by the Student Center on your right.",
    ),
    step("Step 3: Reach the Courtyard", "Continue walking until you arrive at the courtyard area."),
    step(
        "Step 4: Take the Admin Stairs",
        "Cross the courtyard and take the stairs of the administration block.",
    ),
    step("Step 5: Find the Dean's Office", "The office is at the end of the first-floor corridor."),
];

const LIBRARY_PATHWAY: [PathwayStep; 5] = [
    step("Step 1: Enter the Campus", "Begin at the main entrance of the campus."),
    step(
        "Step 2: Walk Past the Student Center",
        "Head straight ahead, passing by the Student Center on your right.",
    ),
    step("Step 3: Reach the Courtyard", "Continue walking until you arrive at the courtyard area."),
    step(
        "Step 4: Turn Left at the Library",
        "At the library, make a left turn to proceed toward the entrance.",
    ),
    step("Step 5: Enter the Reading Hall", "The reading hall is straight ahead past the front desk."),
];

const PARKING_PATHWAY: [PathwayStep; 3] = [
    step("Step 1: Leave the Main Road", "Turn in at the campus service gate."),
    step("Step 2: Follow the Signs", "Keep right and follow the blue P signs."),
    step("Step 3: Park", "Spaces are marked along both sides of the lot."),
];

/// Indexed by [`Category::index`].
const FACILITIES: [FacilityInfo; 4] = [
    FacilityInfo {
        category: Category::LectureHalls,
        description_heading: "Lecture Hall Description",
        status_heading: "Lecture Hall Status Update",
        status_prompt: "Vote to keep the lecture hall status accurate. The most-voted status will be shown as current availability.",
        image: "LecHall",
        pathway: &LECTURE_HALL_PATHWAY,
    },
    FacilityInfo {
        category: Category::DeansOffice,
        description_heading: "Dean's Office Description",
        status_heading: "Dean's Office Status Update",
        status_prompt: "Vote to keep the office status accurate. The most-voted status will be shown as current availability.",
        image: "DeansOffice",
        pathway: &DEANS_OFFICE_PATHWAY,
    },
    FacilityInfo {
        category: Category::Libraries,
        description_heading: "Library Description",
        status_heading: "Library Status Update",
        status_prompt: "Vote to keep the library status accurate. The most-voted status will be shown as current availability.",
        image: "Libraries",
        pathway: &LIBRARY_PATHWAY,
    },
    FacilityInfo {
        category: Category::Parking,
        description_heading: "Parking Description",
        status_heading: "Parking Status Update",
        status_prompt: "Vote to keep the parking status accurate. The most-voted status will be shown as current availability.",
        image: "ParkingImg",
        pathway: &PARKING_PATHWAY,
    },
];

pub fn facility_info(category: Category) -> &'static FacilityInfo {
    &FACILITIES[category.index()]
}

// ────────────────────────────────────────────────────────────────────────────
// Detail screen state
// ────────────────────────────────────────────────────────────────────────────

/// State of one visit to a facility detail screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityDetail {
    pub category: Category,
    /// Display name, taken from the tapped pin's label.
    pub name: String,
    pub info: &'static FacilityInfo,
    pub votes: VoteWidget,
}

impl FacilityDetail {
    pub fn open(category: Category, name: impl Into<String>, cfg: &MapConfig) -> Self {
        Self {
            category,
            name: name.into(),
            info: facility_info(category),
            votes: VoteWidget::from_config(cfg),
        }
    }

    pub fn pathway(&self) -> &'static [PathwayStep] {
        self.info.pathway
    }

    pub fn vote(&mut self, status: VoteStatus) -> VoteTally {
        let tally = self.votes.vote(status);
        tracing::debug!(
            facility = %self.name,
            status = status.label(),
            available = tally.available(),
            unavailable = tally.unavailable(),
            "vote cast"
        );
        tally
    }
}
