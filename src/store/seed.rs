use super::{ResourceStore, StoreError};
use crate::models::ResourceKind;
use crate::models::toner::{Division, NewTonerRequest, Toner, TonerPatch, TonerStatus};

/// Sample toner requests loaded into an empty store when `SEED_DEMO` is on.
fn demo_toner_requests() -> Vec<(NewTonerRequest, TonerStatus)> {
    vec![
        (
            NewTonerRequest {
                division: Division::FinanceAccounts,
                printer_name: "HP LaserJet Pro - Finance 01".to_string(),
                model: "HP CF217A".to_string(),
                requested_by: "Amina Yusuf".to_string(),
                page_counter: "14,320".to_string(),
                date: "2026-02-10".to_string(),
                notes: "Toner almost empty, urgent replacement needed.".to_string(),
            },
            TonerStatus::Approved,
        ),
        (
            NewTonerRequest {
                division: Division::HumanResources,
                printer_name: "Canon imageRUNNER - HR Main".to_string(),
                model: "Canon 045H".to_string(),
                requested_by: "Bola Adewale".to_string(),
                page_counter: "8,750".to_string(),
                date: "2026-02-14".to_string(),
                notes: "Printing quality degrading significantly.".to_string(),
            },
            TonerStatus::Pending,
        ),
        (
            NewTonerRequest {
                division: Division::Ict,
                printer_name: "Brother MFC - ICT Office".to_string(),
                model: "Brother TN-2420".to_string(),
                requested_by: "Lawal Sani".to_string(),
                page_counter: "22,100".to_string(),
                date: "2026-02-15".to_string(),
                notes: "Monthly scheduled toner replacement.".to_string(),
            },
            TonerStatus::Issued,
        ),
    ]
}

/// Insert the demo toner requests if the store has none. Returns how many
/// records were created.
pub async fn seed_toner_requests<S: ResourceStore<Toner>>(store: &S) -> Result<usize, StoreError> {
    let existing = store.list().await?;
    if !existing.is_empty() {
        log::info!(
            "Toner store already has {} requests, skipping demo seed",
            existing.len()
        );
        return Ok(0);
    }

    let mut created = 0;
    for (new, status) in demo_toner_requests() {
        let record = store.create(new).await?;
        if status != Toner::INITIAL_STATUS {
            store
                .update(
                    record.id,
                    TonerPatch {
                        status: Some(status),
                        ..Default::default()
                    },
                )
                .await?;
        }
        created += 1;
    }
    log::info!("Seeded {created} demo toner requests");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn seeds_once_with_mixed_statuses() {
        let store = MemoryStore::<Toner>::new();
        assert_eq!(seed_toner_requests(&store).await.unwrap(), 3);
        assert_eq!(seed_toner_requests(&store).await.unwrap(), 0);

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 3);
        let issued = records.iter().find(|r| r.requested_by == "Lawal Sani").unwrap();
        assert_eq!(issued.status, TonerStatus::Issued);
    }
}
