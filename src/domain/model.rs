use std::fmt;
use std::str::FromStr;

pub const LIST_HEADER: &str = "SiteID, FxiletID, Name, Criticality, RelevantComputerCount";

/// Minimum number of positional fields a data row must carry.
pub const FIELD_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixlet {
    pub site_id: String,
    pub fixlet_id: String,
    pub name: String,
    pub criticality: String,
    pub relevant_computer_count: i64,
}

impl Fixlet {
    pub fn new(
        site_id: impl Into<String>,
        fixlet_id: impl Into<String>,
        name: impl Into<String>,
        criticality: impl Into<String>,
        relevant_computer_count: i64,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            fixlet_id: fixlet_id.into(),
            name: name.into(),
            criticality: criticality.into(),
            relevant_computer_count,
        }
    }
}

impl fmt::Display for Fixlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}",
            self.site_id, self.fixlet_id, self.name, self.criticality, self.relevant_computer_count
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    SiteId,
    Criticality,
    RelevantComputerCount,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SiteID" => Ok(SortField::SiteId),
            "Criticality" => Ok(SortField::Criticality),
            "RelevantComputerCount" => Ok(SortField::RelevantComputerCount),
            other => Err(format!("unknown sort field: {}", other)),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortField::SiteId => "SiteID",
            SortField::Criticality => "Criticality",
            SortField::RelevantComputerCount => "RelevantComputerCount",
        };
        f.write_str(name)
    }
}
