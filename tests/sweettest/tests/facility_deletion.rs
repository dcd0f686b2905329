//! Sweettest Integration Tests for Records at a Deleted Facility
//!
//! Incidents, allocations and accessibility measurements belong to their
//! facility. Once the facility is deleted they drop out of every listing,
//! single reads fail and updates are rejected.

use anyhow::Result;
use holochain::conductor::config::ConductorConfig;
use holochain::conductor::ConductorBuilder;
use holochain::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================//
// Type Definitions (match zome types)
// ============================================================================//

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum FacilityType {
    Hospital,
    Clinic,
    HealthCenter,
    Pharmacy,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum FacilityStatus {
    Active,
    Inactive,
    Maintenance,
    Closed,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateFacilityInput {
    pub name: String,
    pub facility_type: FacilityType,
    pub district: String,
    pub sector: String,
    pub capacity: u32,
    pub contact_number: String,
    pub status: Option<FacilityStatus>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddIncidentInput {
    pub disease_name: String,
    pub facility_hash: ActionHash,
    pub number_of_cases: u32,
    pub status: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IncidentPatch {
    pub disease_name: Option<String>,
    pub facility_hash: Option<ActionHash>,
    pub number_of_cases: Option<u32>,
    pub status: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateIncidentInput {
    pub incident_hash: ActionHash,
    pub patch: IncidentPatch,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateAllocationInput {
    pub facility_hash: ActionHash,
    pub equipment: String,
    pub specialist_count: u32,
    pub duration_in_days: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateAccessibilityInput {
    pub facility_hash: ActionHash,
    pub people_served: u32,
    pub avg_travel_time_minutes: f64,
    pub distance_km: f64,
}

// ============================================================================//
// Test Fixtures
// ============================================================================//

fn dna_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../workdir/infrastructure.dna")
}

async fn setup_agent() -> Result<(holochain::conductor::Conductor, CellId)> {
    let conductor = ConductorBuilder::new()
        .config(ConductorConfig::default())
        .build()
        .await?;

    let dna_file = DnaFile::from_file_content(&std::fs::read(dna_path())?).await?;
    let dna_hash = conductor.register_dna(dna_file).await?;

    let agent_key = conductor
        .keystore()
        .generate_new_sign_keypair_random()
        .await?;

    let cell = conductor
        .install_app(
            "facility-deletion-test".to_string(),
            vec![InstalledCell::new(
                CellId::new(dna_hash, agent_key),
                "infrastructure".into(),
            )],
        )
        .await?
        .into_iter()
        .next()
        .unwrap()
        .into_id();

    Ok((conductor, cell))
}

fn kacyiru_clinic() -> CreateFacilityInput {
    CreateFacilityInput {
        name: "Kacyiru Clinic".to_string(),
        facility_type: FacilityType::Clinic,
        district: "Gasabo".to_string(),
        sector: "Kacyiru".to_string(),
        capacity: 25,
        contact_number: "+250788222222".to_string(),
        status: None,
    }
}

// ============================================================================//
// Tests
// ============================================================================//

#[tokio::test]
#[ignore = "Requires running Holochain conductor"]
async fn test_records_at_deleted_facility_disappear() -> Result<()> {
    let (conductor, cell) = setup_agent().await?;

    let facility: Record = conductor
        .call_zome(&cell, "facilities", "create_facility", kacyiru_clinic())
        .await?;
    let facility_hash = facility.action_address().clone();

    let incident: Record = conductor
        .call_zome(
            &cell,
            "incidents",
            "add_incident",
            AddIncidentInput {
                disease_name: "Cholera".to_string(),
                facility_hash: facility_hash.clone(),
                number_of_cases: 4,
                status: None,
                description: None,
            },
        )
        .await?;
    let incident_hash = incident.action_address().clone();

    let _allocation: Record = conductor
        .call_zome(
            &cell,
            "allocations",
            "create_allocation",
            CreateAllocationInput {
                facility_hash: facility_hash.clone(),
                equipment: "Oral rehydration kits".to_string(),
                specialist_count: 2,
                duration_in_days: 14,
            },
        )
        .await?;

    let _accessibility: Record = conductor
        .call_zome(
            &cell,
            "accessibility",
            "create_accessibility",
            CreateAccessibilityInput {
                facility_hash: facility_hash.clone(),
                people_served: 1200,
                avg_travel_time_minutes: 18.0,
                distance_km: 6.5,
            },
        )
        .await?;

    let _deleted: ActionHash = conductor
        .call_zome(&cell, "facilities", "delete_facility", facility_hash)
        .await?;

    let incidents: Vec<Record> = conductor
        .call_zome(&cell, "incidents", "get_all_incidents", ())
        .await?;
    assert!(incidents.is_empty(), "Incidents at a deleted facility should not be listed");

    let mine: Vec<Record> = conductor
        .call_zome(&cell, "incidents", "get_my_incidents", ())
        .await?;
    assert!(mine.is_empty());

    let cholera: Vec<Record> = conductor
        .call_zome(&cell, "incidents", "get_incidents_by_disease", "cholera".to_string())
        .await?;
    assert!(cholera.is_empty());

    let single: Result<Record, _> = conductor
        .call_zome(&cell, "incidents", "get_incident", incident_hash.clone())
        .await;
    assert!(single.is_err());

    let update: Result<Record, _> = conductor
        .call_zome(
            &cell,
            "incidents",
            "update_incident",
            UpdateIncidentInput {
                incident_hash,
                patch: IncidentPatch {
                    number_of_cases: Some(9),
                    ..Default::default()
                },
            },
        )
        .await;
    assert!(update.is_err(), "Updating an incident at a deleted facility should fail");

    let allocations: Vec<Record> = conductor
        .call_zome(&cell, "allocations", "get_all_allocations", ())
        .await?;
    assert!(allocations.is_empty());

    let accessibility: Vec<Record> = conductor
        .call_zome(&cell, "accessibility", "get_all_accessibility", ())
        .await?;
    assert!(accessibility.is_empty());

    Ok(())
}
