//! Deterministic mock roster generation.
//!
//! The dashboard runs on mock data. `RosterGenerator` produces a roster
//! whose figures straddle each metric's thresholds, so every status shows
//! up in a reasonably sized sample. Same seed, same roster.

use crate::{
    department::{Department, MetricDefinition},
    employee::EmployeeRecord,
    rng::SeededRng,
    types::EmployeeId,
};

/// Probability that a department-relevant figure is left unreported.
pub const MISSING_FIGURE_RATE: f64 = 0.05;

pub struct RosterGenerator {
    rng: SeededRng,
}

impl RosterGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SeededRng::new(seed),
        }
    }

    /// Generate `count` employees with ids `1..=count`, departments
    /// assigned round-robin.
    pub fn generate(&mut self, count: usize) -> Vec<EmployeeRecord> {
        let roster: Vec<EmployeeRecord> = (0..count)
            .map(|i| {
                let dept = Department::ALL[i % Department::ALL.len()];
                self.generate_employee(i as EmployeeId + 1, dept)
            })
            .collect();
        log::info!("generated mock roster of {} employees", roster.len());
        roster
    }

    pub fn generate_employee(&mut self, id: EmployeeId, dept: Department) -> EmployeeRecord {
        let first = *self.rng.pick(FIRST_NAMES);
        let last = *self.rng.pick(LAST_NAMES);
        let role = *self.rng.pick(roles_for(dept));

        let mut record = EmployeeRecord::new(id, first, last, dept.name(), role);
        for def in dept.metric_definitions() {
            if self.rng.chance(MISSING_FIGURE_RATE) {
                continue;
            }
            let value = self.sample_figure(def);
            record = record.with_field(def.field, value);
        }
        record
    }

    /// Draw a value from one of three bands: above the exceeded threshold,
    /// between the thresholds, or below on-track.
    fn sample_figure(&mut self, def: &MetricDefinition) -> f64 {
        let raw = match self.rng.next_u64_below(3) {
            0 => self.rng.range_f64(def.exceeded_at, def.exceeded_at * 1.4),
            1 => self.rng.range_f64(def.on_track_at, def.exceeded_at),
            _ => self.rng.range_f64(def.on_track_at * 0.4, def.on_track_at),
        };
        match def.unit {
            "/5" => round1(raw.min(5.0)),
            "%" => round1(raw.min(100.0)),
            _ => raw.floor(),
        }
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).floor() / 10.0
}

fn roles_for(dept: Department) -> &'static [&'static str] {
    match dept {
        Department::Sales => &["Account Executive", "Sales Representative", "Sales Manager"],
        Department::Marketing => &["Marketing Specialist", "Content Strategist", "Campaign Manager"],
        Department::Production => &["Software Engineer", "QA Engineer", "Project Lead"],
        Department::Hr => &["Recruiter", "HR Generalist", "People Partner"],
        Department::Accounting => &["Accountant", "Payroll Specialist", "Controller"],
    }
}

const FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
    "Thomas", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Paul", "Andrew",
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Susan", "Jessica", "Sarah",
    "Karen", "Lisa", "Nancy", "Emily", "Michelle", "Amanda", "Laura", "Ann",
    "Priya", "Wei", "Fatima", "Diego", "Yuki", "Olu", "Ingrid", "Mateo",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
    "White", "Harris", "Clark", "Lewis", "Walker", "Young", "Allen", "King",
    "Nguyen", "Patel", "Kim", "Chen", "Tran", "Okafor", "Larsen", "Silva",
];
