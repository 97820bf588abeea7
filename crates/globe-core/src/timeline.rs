//! Side-panel timeline reveal.
//!
//! Each city section owns a progress window. Inside it the section header
//! fades in slightly ahead of its entries, and the entries reveal one after
//! another so entry `i` is fully shown before entry `i + 1` starts.

use crate::constants::{
    CONNECTOR_MIN_OPACITY, DESTINATION_TIMELINE_WINDOW, ENTRY_HIGHLIGHT_THRESHOLD, ENTRY_SLIDE_PX,
    HEADER_LEAD, ORIGIN_TIMELINE_WINDOW,
};
use crate::progress::{clamp_unit, ProgressWindow};
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceDetail {
    pub title: String,
    pub years: String,
    pub summary: String,
}

impl ExperienceDetail {
    pub fn new(title: &str, years: &str, summary: &str) -> Self {
        Self {
            title: title.to_owned(),
            years: years.to_owned(),
            summary: summary.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityTimelineConfig {
    pub id: String,
    pub label: String,
    pub location: String,
    /// CSS colour for the section's dots and glow.
    pub accent: String,
    pub window: ProgressWindow,
    pub experiences: Vec<ExperienceDetail>,
}

impl CityTimelineConfig {
    /// Local progress through this section's window.
    #[inline]
    pub fn progress(&self, progress: f32) -> f32 {
        self.window.local(progress)
    }
}

/// Flattened panel row; borrowed from the section config it came from.
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineEntry<'a> {
    Header {
        id: String,
        section: &'a CityTimelineConfig,
    },
    Experience {
        id: String,
        section: &'a CityTimelineConfig,
        experience: &'a ExperienceDetail,
        index: usize,
        total: usize,
    },
}

impl<'a> TimelineEntry<'a> {
    pub fn id(&self) -> &str {
        match self {
            TimelineEntry::Header { id, .. } | TimelineEntry::Experience { id, .. } => id,
        }
    }

    pub fn section(&self) -> &'a CityTimelineConfig {
        match self {
            TimelineEntry::Header { section, .. } | TimelineEntry::Experience { section, .. } => {
                section
            }
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, TimelineEntry::Header { .. })
    }

    /// Reveal fraction given the owning section's local progress.
    pub fn reveal(&self, section_progress: f32) -> f32 {
        match self {
            TimelineEntry::Header { .. } => header_reveal(section_progress),
            TimelineEntry::Experience { index, total, .. } => {
                experience_reveal(section_progress, *index, *total)
            }
        }
    }
}

#[inline]
pub fn header_reveal(section_progress: f32) -> f32 {
    clamp_unit(section_progress * HEADER_LEAD)
}

#[inline]
pub fn experience_reveal(section_progress: f32, index: usize, total: usize) -> f32 {
    clamp_unit(section_progress * total as f32 - index as f32)
}

/// Header plus one row per experience, for every section in order.
pub fn flatten_entries(sections: &[CityTimelineConfig]) -> Vec<TimelineEntry<'_>> {
    let mut entries = Vec::with_capacity(sections.iter().map(|s| s.experiences.len() + 1).sum());
    for section in sections {
        entries.push(TimelineEntry::Header {
            id: format!("{}-header", section.id),
            section,
        });
        let total = section.experiences.len();
        entries.extend(
            section
                .experiences
                .iter()
                .enumerate()
                .map(|(index, experience)| TimelineEntry::Experience {
                    id: format!("{}-exp-{}", section.id, index),
                    section,
                    experience,
                    index,
                    total,
                }),
        );
    }
    entries
}

/// Presentation values for one row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntryStyle {
    pub opacity: f32,
    pub translate_x_px: f32,
    pub dot_filled: bool,
    pub dot_glow: bool,
    /// Connector line to the next row; `None` on the last row.
    pub connector_opacity: Option<f32>,
}

impl EntryStyle {
    pub fn new(reveal: f32, is_header: bool, is_last: bool) -> Self {
        let highlighted = reveal > ENTRY_HIGHLIGHT_THRESHOLD;
        Self {
            opacity: reveal,
            translate_x_px: (1.0 - reveal) * ENTRY_SLIDE_PX,
            dot_filled: is_header || highlighted,
            dot_glow: highlighted,
            connector_opacity: (!is_last).then(|| reveal.max(CONNECTOR_MIN_OPACITY)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntryView {
    pub id: String,
    pub section_id: String,
    pub accent: String,
    pub reveal: f32,
    pub style: EntryStyle,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct TimelineView {
    /// Panel-wide gate shared by the connector rail and the entry column.
    pub opacity: f32,
    pub entries: Vec<EntryView>,
}

#[derive(Clone, Debug, Default)]
pub struct TimelinePanel {
    sections: Vec<CityTimelineConfig>,
    by_id: FnvHashMap<String, usize>,
}

impl TimelinePanel {
    pub fn new(sections: Vec<CityTimelineConfig>) -> Self {
        let by_id = sections
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        Self { sections, by_id }
    }

    pub fn sections(&self) -> &[CityTimelineConfig] {
        &self.sections
    }

    pub fn entries(&self) -> Vec<TimelineEntry<'_>> {
        flatten_entries(&self.sections)
    }

    /// Local progress of section `id`, or `None` for an unknown id.
    pub fn section_progress(&self, id: &str, progress: f32) -> Option<f32> {
        self.by_id
            .get(id)
            .map(|&i| self.sections[i].progress(progress))
    }

    /// Maximum local progress over all sections.
    pub fn opacity(&self, progress: f32) -> f32 {
        self.sections
            .iter()
            .map(|s| s.progress(progress))
            .fold(0.0, f32::max)
    }

    pub fn evaluate(&self, progress: f32) -> TimelineView {
        let entries = self.entries();
        let last = entries.len().saturating_sub(1);
        let views = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let section = entry.section();
                let reveal = entry.reveal(section.progress(progress));
                EntryView {
                    id: entry.id().to_owned(),
                    section_id: section.id.clone(),
                    accent: section.accent.clone(),
                    reveal,
                    style: EntryStyle::new(reveal, entry.is_header(), i == last),
                }
            })
            .collect();
        TimelineView {
            opacity: self.opacity(progress),
            entries: views,
        }
    }
}

/// The two reference sections: three origin entries, two destination entries.
pub fn default_sections() -> Vec<CityTimelineConfig> {
    vec![
        CityTimelineConfig {
            id: "hanoi".to_owned(),
            label: "Hanoi Experience".to_owned(),
            location: "Vietnam".to_owned(),
            accent: "#f97316".to_owned(),
            window: ProgressWindow::from_array(ORIGIN_TIMELINE_WINDOW),
            experiences: vec![
                ExperienceDetail::new(
                    "RMIT University",
                    "2018 – 2021",
                    "Bachelor of Supply Chain Management and Analytics.",
                ),
                ExperienceDetail::new(
                    "Junior Data Engineer",
                    "2022 – 2023",
                    "Built batch ingestion jobs and governed warehouse models for local fintechs.",
                ),
                ExperienceDetail::new(
                    "Lead Data Engineer",
                    "2022 – 2023",
                    "Scaled streaming analytics for APAC partners and mentored engineers.",
                ),
            ],
        },
        CityTimelineConfig {
            id: "melbourne".to_owned(),
            label: "Melbourne Experience".to_owned(),
            location: "Australia".to_owned(),
            accent: "#38bdf8".to_owned(),
            window: ProgressWindow::from_array(DESTINATION_TIMELINE_WINDOW),
            experiences: vec![
                ExperienceDetail::new(
                    "Platform Architect",
                    "2024",
                    "Designing resilient data mesh patterns for AU enterprises.",
                ),
                ExperienceDetail::new(
                    "Creative Technologist",
                    "2024 – 2025",
                    "Combining immersive web and data viz to tell richer stories.",
                ),
            ],
        },
    ]
}
