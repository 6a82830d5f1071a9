//! Static medicine availability list

use std::fmt;

/// Stock level at a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    High,
    Medium,
    Low,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::High => "High",
            Availability::Medium => "Medium",
            Availability::Low => "Low",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicineRecord {
    pub name: &'static str,
    pub availability: Availability,
    pub location: &'static str,
}

const CATALOG: &[MedicineRecord] = &[
    MedicineRecord {
        name: "Paracetamol",
        availability: Availability::High,
        location: "City Hospital Pharmacy",
    },
    MedicineRecord {
        name: "Amoxicillin",
        availability: Availability::Medium,
        location: "Rural Health Center",
    },
    MedicineRecord {
        name: "Insulin",
        availability: Availability::Low,
        location: "District Medical Store",
    },
    MedicineRecord {
        name: "Aspirin",
        availability: Availability::High,
        location: "Community Clinic",
    },
];

/// Read-only view over the compiled-in catalog
#[derive(Debug, Clone, Copy)]
pub struct MedicineCatalog {
    records: &'static [MedicineRecord],
}

impl Default for MedicineCatalog {
    fn default() -> Self {
        MedicineCatalog { records: CATALOG }
    }
}

impl MedicineCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &'static [MedicineRecord] {
        self.records
    }

    /// Records whose name contains `query`, ignoring case, in catalog order
    pub fn search(&self, query: &str) -> Vec<&'static MedicineRecord> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.name.to_lowercase().contains(&needle))
            .collect()
    }
}
