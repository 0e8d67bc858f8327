//! Exclusive tab selection.

use super::ViewError;

/// Content sections reachable from the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Fuel,
    Cost,
    /// Placeholder section; nothing is aggregated for it.
    Summary,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Fuel, Section::Cost, Section::Summary];

    /// The `data-tab` id tagging this section's tab button.
    pub fn tab_id(self) -> &'static str {
        match self {
            Self::Fuel => "fuelSection",
            Self::Cost => "costSection",
            Self::Summary => "summarySection",
        }
    }

    pub fn from_tab_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.tab_id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Fuel => "Fuel",
            Self::Cost => "Costs",
            Self::Summary => "Summary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SectionState {
    section: Section,
    visible: bool,
    tab_active: bool,
}

/// Tab buttons plus their content sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBar {
    sections: [SectionState; 3],
}

impl Default for TabBar {
    /// Fuel section shown, its tab active.
    fn default() -> Self {
        let mut bar = Self {
            sections: Section::ALL.map(|section| SectionState {
                section,
                visible: false,
                tab_active: false,
            }),
        };
        bar.select(Section::Fuel);
        bar
    }
}

impl TabBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows only `target` and marks only its tab active.
    pub fn select(&mut self, target: Section) {
        for state in &mut self.sections {
            let selected = state.section == target;
            state.visible = selected;
            state.tab_active = selected;
        }
    }

    /// Selects the section tagged `data-tab = id`.
    ///
    /// # Errors
    /// - `ViewError::UnknownTab` when no section carries `id`; the current
    ///   selection is kept.
    pub fn select_by_id(&mut self, id: &str) -> Result<Section, ViewError> {
        let section =
            Section::from_tab_id(id.trim()).ok_or_else(|| ViewError::UnknownTab(id.to_string()))?;
        self.select(section);
        Ok(section)
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.state(section).visible
    }

    pub fn is_tab_active(&self, section: Section) -> bool {
        self.state(section).tab_active
    }

    /// Currently shown section.
    pub fn active(&self) -> Section {
        self.sections
            .iter()
            .find(|state| state.visible)
            .map_or(Section::Fuel, |state| state.section)
    }

    pub fn visible_sections(&self) -> Vec<Section> {
        self.sections
            .iter()
            .filter(|state| state.visible)
            .map(|state| state.section)
            .collect()
    }

    pub fn active_tabs(&self) -> Vec<Section> {
        self.sections
            .iter()
            .filter(|state| state.tab_active)
            .map(|state| state.section)
            .collect()
    }

    fn state(&self, section: Section) -> &SectionState {
        let index = Section::ALL
            .iter()
            .position(|candidate| *candidate == section)
            .unwrap_or_default();
        &self.sections[index]
    }
}
